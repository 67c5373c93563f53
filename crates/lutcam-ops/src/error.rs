//! Operation error types.

use thiserror::Error;

/// Result type for frame operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors that can occur during frame operations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Frame extents don't match for the operation.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First frame width
        a_width: u32,
        /// First frame height
        a_height: u32,
        /// Second frame width
        b_width: u32,
        /// Second frame height
        b_height: u32,
    },
}
