//! Scope matching: does a document apply to a request context?
//!
//! Global documents always apply and are never passed here. Page scopes
//! match the page id exactly, case-sensitive. Route scopes match the
//! route path against a glob pattern where `*` matches any run of
//! characters, including `/`, so `/products/*` covers both
//! `/products/shoes` and `/products/shoes/42`.

use globset::Glob;
use strata_core::{ConfigDocument, ScopeType};

/// True iff the document is page-scoped and its key equals the page id.
pub fn matches_page(document: &ConfigDocument, page_id: &str) -> bool {
    document.scope_type == ScopeType::Page && document.scope_key == page_id
}

/// True iff the document is route-scoped and the route path matches its
/// glob pattern.
pub fn matches_route(document: &ConfigDocument, route_path: &str) -> bool {
    document.scope_type == ScopeType::Route && glob_matches(&document.scope_key, route_path)
}

fn glob_matches(pattern: &str, route_path: &str) -> bool {
    match Glob::new(pattern) {
        Ok(glob) => glob.compile_matcher().is_match(route_path),
        Err(error) => {
            // An unparseable pattern applies to nothing
            tracing::debug!(%pattern, %error, "ignoring invalid route pattern");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use strata_core::{DocumentDraft, Value};

    fn doc(scope_type: ScopeType, scope_key: &str) -> ConfigDocument {
        DocumentDraft {
            tenant: "default".to_string(),
            env: "dev".to_string(),
            component_key: "header".to_string(),
            scope_type,
            scope_key: scope_key.to_string(),
            value: Value::empty_object(),
            created_by: "dev".to_string(),
        }
        .into_document(1, Utc::now())
    }

    #[test]
    fn test_page_match_is_exact() {
        let home = doc(ScopeType::Page, "home");
        assert!(matches_page(&home, "home"));
        assert!(!matches_page(&home, "Home"));
        assert!(!matches_page(&home, "home2"));
        assert!(!matches_page(&home, ""));
    }

    #[test]
    fn test_page_match_requires_page_scope() {
        let global = doc(ScopeType::Global, "home");
        assert!(!matches_page(&global, "home"));
    }

    #[test]
    fn test_route_glob_crosses_segments() {
        let products = doc(ScopeType::Route, "/products/*");
        assert!(matches_route(&products, "/products/shoes"));
        assert!(matches_route(&products, "/products/shoes/42"));
        assert!(!matches_route(&products, "/product/shoes"));
        assert!(!matches_route(&products, "/catalog/products/shoes"));
    }

    #[test]
    fn test_route_exact_pattern() {
        let checkout = doc(ScopeType::Route, "/checkout");
        assert!(matches_route(&checkout, "/checkout"));
        assert!(!matches_route(&checkout, "/checkout/payment"));
    }

    #[test]
    fn test_route_infix_wildcard() {
        let detail = doc(ScopeType::Route, "/shop/*/detail");
        assert!(matches_route(&detail, "/shop/42/detail"));
        assert!(matches_route(&detail, "/shop/42/variants/1/detail"));
        assert!(!matches_route(&detail, "/shop/42"));
    }

    #[test]
    fn test_route_match_requires_route_scope() {
        let page = doc(ScopeType::Page, "/products/*");
        assert!(!matches_route(&page, "/products/shoes"));
    }

    #[test]
    fn test_invalid_pattern_never_matches() {
        let broken = doc(ScopeType::Route, "/products/[");
        assert!(!matches_route(&broken, "/products/x"));
        assert!(!matches_route(&broken, "/products/["));
    }
}
