//! Loading module metadata from files.
//!
//! The front-end hands metadata over as JSON or YAML documents. A document
//! holds either a single module or an array of modules:
//!
//! ```json
//! [
//!   { "name": "core", "entrance_class": "com.example.core.CoreModule" },
//!   { "name": "feed", "entrance_class": "com.example.feed.FeedModule" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use registrar_define::ModuleMeta;
use tracing::{debug, instrument};

use crate::errors::GeneratorError;

/// Document formats recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Picks the format from a file extension (`json`, `yaml` or `yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Loads every module from a JSON or YAML file.
///
/// ## Errors
///
/// - `GeneratorError::ReadError` if the file cannot be read
/// - `GeneratorError::ParseError` if the extension is unknown or the
///   document does not describe modules
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_modules(path: &Path) -> Result<Vec<ModuleMeta>, GeneratorError> {
    let display = path.display().to_string();
    let format = InputFormat::from_path(path).ok_or_else(|| GeneratorError::ParseError {
        path: display.clone(),
        message: "unsupported file extension, expected .json, .yaml or .yml".to_string(),
    })?;

    let source = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: display.clone(),
        source: e,
    })?;

    let modules = parse_modules(&source, format).map_err(|message| GeneratorError::ParseError {
        path: display,
        message,
    })?;
    debug!(count = modules.len(), "Loaded modules");
    Ok(modules)
}

/// Parses a document holding one module or an array of modules.
pub fn parse_modules(source: &str, format: InputFormat) -> Result<Vec<ModuleMeta>, String> {
    match format {
        InputFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(source).map_err(|e| e.to_string())?;
            if value.is_array() {
                serde_json::from_value(value).map_err(|e| e.to_string())
            } else {
                serde_json::from_value(value)
                    .map(|module| vec![module])
                    .map_err(|e| e.to_string())
            }
        }
        InputFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(source).map_err(|e| e.to_string())?;
            if value.is_sequence() {
                serde_yaml::from_value(value).map_err(|e| e.to_string())
            } else {
                serde_yaml::from_value(value)
                    .map(|module| vec![module])
                    .map_err(|e| e.to_string())
            }
        }
    }
}
