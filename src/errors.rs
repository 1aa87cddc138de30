use std::io;

/// Errors raised while building or reading a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Badly formatted grid: {reason}")]
    MalformedGrid { reason: String },

    #[error("Position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Failed to read grid: {0}")]
    Io(#[from] io::Error),
}

impl GridError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        GridError::MalformedGrid {
            reason: reason.into(),
        }
    }
}
