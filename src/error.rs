//! Error types for the card generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for card generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading inputs or producing tiles
#[derive(Error, Debug)]
pub enum Error {
    /// Font, color table or layout file missing or corrupt
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    /// Element data could not be fetched or parsed
    #[error("Failed to fetch element data: {0}")]
    SourceFetch(String),

    /// Malformed hex color string
    #[error("Invalid color `{0}`")]
    ColorParse(String),

    /// PNG encoding failed
    #[error("Failed to encode {name}: {reason}")]
    Encode { name: String, reason: String },

    /// Filesystem error while writing output
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error aborts the whole run rather than a single tile.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConfigLoad(_) | Error::SourceFetch(_) | Error::InvalidConfig(_)
        )
    }
}
