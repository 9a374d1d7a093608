//! Error types for stylesheets.

use std::path::PathBuf;

/// Result type alias for stylesheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A style could not be built.
    #[error(transparent)]
    Style(#[from] trellis_style::Error),

    /// File I/O error.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Options could not be read.
    #[error("Invalid stylesheet options: {message}")]
    Options { message: String },

    /// No style is registered under this name.
    #[error("Style '{name}' not defined")]
    UnknownStyle { name: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an options error.
    pub fn options(message: impl Into<String>) -> Self {
        Self::Options {
            message: message.into(),
        }
    }

    /// Create a lookup error.
    pub fn unknown_style(name: impl Into<String>) -> Self {
        Self::UnknownStyle { name: name.into() }
    }
}
