use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or exporting packing slips.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Exporting was requested with nothing to export.
    #[error("no orders to export")]
    NoOrders,

    /// The image preflight HTTP client could not be built.
    #[error("failed to build image preflight client: {0}")]
    Http(#[from] reqwest::Error),

    /// The export artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
