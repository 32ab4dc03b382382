use std::path::PathBuf;

use thiserror::Error;

use crate::core::error::DatasetError;

/// Errors raised while laying out or writing a comparison figure.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("nothing to chart: {reason}")]
    EmptyDataset { reason: String },

    #[error("cannot write {}: {source}", path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported image format for {}: expected .png or .svg", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("drawing {} failed: {message}", path.display())]
    Draw { path: PathBuf, message: String },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
