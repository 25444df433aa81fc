//! Settings file classification, reading, and parsing

use crate::template;
use crate::{Error, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// How a settings file's text becomes YAML.
///
/// Classification looks at the final extension segment only, so a
/// templated file keeps its YAML extension in front of the template one:
/// `settings.yml.tmpl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Plain YAML, parsed as-is (`.yml` / `.yaml`).
    Yaml,
    /// Rendered through the variable template engine before parsing
    /// (`.tmpl`).
    Template,
}

/// Classify a settings file by its final extension segment.
///
/// Anything other than the accepted extensions is a fatal
/// [`Error::UnsupportedFileType`] — the whole load operation stops, with no
/// settings applied from the file.
pub fn classify(path: &Path) -> Result<SourceKind> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    match extension.to_lowercase().as_str() {
        "yml" | "yaml" => Ok(SourceKind::Yaml),
        "tmpl" => Ok(SourceKind::Template),
        _ => Err(Error::UnsupportedFileType {
            path: path.to_path_buf(),
        }),
    }
}

/// Read a settings file's text, rendering templates where required.
pub fn read(path: &Path, kind: SourceKind) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    match kind {
        SourceKind::Yaml => Ok(text),
        SourceKind::Template => template::render(&text, path),
    }
}

/// Parse settings text into a YAML mapping.
///
/// The document root must be a mapping; anything else (scalar, sequence,
/// empty document) is rejected.
pub fn parse_mapping(path: &Path, text: &str) -> Result<Mapping> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(Error::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}
