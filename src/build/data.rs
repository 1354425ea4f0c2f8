//! Site data loading.
//!
//! The data document stays a dynamically-shaped `serde_json::Value` so that
//! fields the build knows nothing about reach the template untouched.

use std::path::{Path, PathBuf};

use serde_json::Value;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("failed to parse {0}: {1}")]
    Json(PathBuf, serde_json::Error),

    #[error("failed to parse {0}: {1}")]
    Yaml(PathBuf, serde_yaml::Error),

    #[error("{0} must contain an object at the top level")]
    NotAnObject(PathBuf),
}

/// Load the site data document from `path`.
///
/// Files ending in `.yaml` or `.yml` are parsed as YAML, everything else as
/// JSON. A missing file is reported as [`DataError::NotFound`] so callers can
/// tell it apart from a malformed one.
pub fn load_site_data(path: &Path) -> Result<Value, DataError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataError::NotFound(path.to_path_buf()),
        _ => DataError::Read(path.to_path_buf(), e),
    })?;

    let value: Value = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| DataError::Yaml(path.to_path_buf(), e))?
    } else {
        serde_json::from_str(&content).map_err(|e| DataError::Json(path.to_path_buf(), e))?
    };

    if !value.is_object() {
        return Err(DataError::NotAnObject(path.to_path_buf()));
    }

    Ok(value)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
