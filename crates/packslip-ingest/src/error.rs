use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading and aggregating CSV input.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A CSV file could not be opened.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV stream was structurally malformed.
    #[error("failed to parse {context}: {source}")]
    Csv {
        context: String,
        #[source]
        source: csv::Error,
    },
}
