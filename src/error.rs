use crate::board::board::Mark;

/// Errors produced by board construction, the numeric ops, and spec/image I/O.
#[derive(Debug, thiserror::Error)]
pub enum ConvError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{mark} at ({x}, {y}) does not fit the {rows}x{cols} grid")]
    OutOfRange {
        mark: Mark,
        x: usize,
        y: usize,
        rows: usize,
        cols: usize,
    },

    #[error("image decoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid pipeline spec: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvError>;
