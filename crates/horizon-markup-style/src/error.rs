//! Error types for the styling system.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading style configuration.
///
/// Applying styles never fails; only reading style sheets from text or disk does.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read style sheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON style sheet could not be deserialized.
    #[error("Invalid JSON style sheet: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML style sheet could not be deserialized.
    #[error("Invalid TOML style sheet: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension does not name a supported format.
    #[error("Unsupported style sheet format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported-format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}
