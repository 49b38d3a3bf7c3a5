//! Specificity ranking within one scope type
//!
//! Orders a document set for merging: least specific first, so later
//! documents win on conflicting fields. Global documents all score
//! equally; page and route documents score by scope-key length, a longer
//! route pattern being treated as more specific. The sort is stable, so
//! equal scores keep their input order.
//!
//! Cross-scope-type ordering is fixed by the engine (Global before Page
//! before Route); the scope-type component of the score only matters if a
//! caller hands this function a mixed set.

use strata_core::{ConfigDocument, ScopeType};

fn score(document: &ConfigDocument) -> (u8, usize) {
    match document.scope_type {
        ScopeType::Global => (0, 0),
        ScopeType::Page => (1, document.scope_key.len()),
        ScopeType::Route => (2, document.scope_key.len()),
    }
}

/// Sort documents in merge order, least specific first.
pub fn rank(documents: &mut [ConfigDocument]) {
    documents.sort_by_key(score);
}
