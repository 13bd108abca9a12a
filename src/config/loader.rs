// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::{PlanError, Result};
use crate::types::InputFormat;

/// Load a document from `path` into an in-memory value tree.
///
/// The format is taken from `format` if given, otherwise from the file
/// extension. Map entries keep their order from the file.
pub fn load_document(path: impl AsRef<Path>, format: Option<InputFormat>) -> Result<Value> {
    let path = path.as_ref();
    let format = match format.or_else(|| InputFormat::from_path(path)) {
        Some(f) => f,
        None => {
            return Err(PlanError::UnsupportedFormat(format!(
                "cannot infer format of '{}' (use a .toml or .json extension, or --format)",
                path.display()
            )));
        }
    };

    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, bytes = contents.len(), "read document");

    parse_document(&contents, format)
}

/// Parse document text that is already in memory.
pub fn parse_document(contents: &str, format: InputFormat) -> Result<Value> {
    let value = match format {
        InputFormat::Toml => toml::from_str::<Value>(contents)?,
        InputFormat::Json => serde_json::from_str::<Value>(contents)?,
    };
    Ok(value)
}

/// Default document path: `Tasks.toml` in the current working directory.
pub fn default_document_path() -> PathBuf {
    PathBuf::from("Tasks.toml")
}
