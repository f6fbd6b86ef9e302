//! Error types for prefix_search
//!
//! Only the outer surface can fail. Inserting into and searching either
//! structure never returns an error.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for prefix_search operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading corpora or rendering reports
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
