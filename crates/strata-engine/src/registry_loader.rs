//! Registry loading at process start
//!
//! The registry file uses the shape `{"components": {key: {default?,
//! schema?}}}`. A missing file is an empty registry: components can still
//! be written and resolved, they just have no defaults and no schemas.

use std::path::Path;

use strata_core::ComponentRegistry;

use crate::error::Result;

/// Load a component registry from a JSON file.
pub async fn load_registry(path: impl AsRef<Path>) -> Result<ComponentRegistry> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        tracing::info!(path = %path.display(), "no registry file, starting with an empty registry");
        return Ok(ComponentRegistry::new());
    }

    let raw = tokio::fs::read_to_string(path).await?;
    let registry = ComponentRegistry::from_json_str(&raw)?;
    tracing::info!(
        path = %path.display(),
        components = registry.len(),
        "loaded component registry"
    );
    Ok(registry)
}
