use std::path::PathBuf;

use thiserror::Error;

/// Errors that may occur while loading translation catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when a catalog file cannot be read
    #[error("Failed to read catalog file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error when a catalog file is not valid catalog JSON
    #[error("Failed to parse catalog file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Error when a catalog file pattern is not a valid glob
    #[error("Invalid catalog file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
