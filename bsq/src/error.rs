//! Error types for reading and solving maps

use bsq_core::FormatError;

/// Errors that can occur while processing one input source
#[derive(Debug, thiserror::Error)]
pub enum BsqError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid map: {0}")]
    Format(#[from] FormatError),
}

/// Result type for BSQ operations
pub type Result<T> = std::result::Result<T, BsqError>;
