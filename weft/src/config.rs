//! Configuration files.
//!
//! Both scenes and layout contexts are plain JSON documents.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::layout::LayoutContext;

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a [`LayoutContext`]; missing fields take their defaults.
pub fn load_context(path: &Path) -> Result<LayoutContext, LoadError> {
    let context: LayoutContext = read_json(path)?;
    tracing::debug!(path = %path.display(), ?context, "loaded layout context");
    Ok(context)
}
