//! Error types for envconf-loader

use std::path::PathBuf;

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading settings files.
///
/// Loading is one-shot and fail-fast: the first error aborts the whole
/// batch, and none are retried or downgraded to warnings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file pattern {pattern}: {message}")]
    Pattern { pattern: String, message: String },

    #[error("Unsupported settings file type: {path} (expected .yml, .yaml, or .yml.tmpl)")]
    UnsupportedFileType { path: PathBuf },

    #[error("Failed to parse YAML settings at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Settings document at {path} is not a mapping")]
    NotAMapping { path: PathBuf },

    #[error("Undefined variable ${{{name}}} in template {path}")]
    UndefinedVariable { path: PathBuf, name: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
