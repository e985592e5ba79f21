//! Error types for rasterkit-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Kernel is not square, or its size is zero or even
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
