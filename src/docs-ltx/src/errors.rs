//! Error types for llms.txt generation and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::MissingElement;

/// Main error type for llms.txt generation operations.
///
/// Page fetches and individual extraction patterns never produce one of these:
/// their failures are logged and the affected content is skipped.
#[derive(Debug, Error)]
pub enum LtxError {
    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Glob pattern error
    #[error("Glob pattern error: {0}")]
    GlobError(#[from] globset::Error),

    /// The generated file does not have the structure an llms.txt requires.
    #[error("Generated llms.txt does not meet the llms.txt format requirements: {}", describe_missing(.0))]
    InvalidLlmsTxt(Vec<MissingElement>),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl LtxError {
    /// Wraps an I/O error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LtxError::IoError {
            path: path.into(),
            source,
        }
    }
}

fn describe_missing(missing: &[MissingElement]) -> String {
    missing.iter().map(|m| m.to_string()).collect::<Vec<_>>().join("; ")
}

/// Type alias for Result with LtxError
pub type Result<T> = std::result::Result<T, LtxError>;
