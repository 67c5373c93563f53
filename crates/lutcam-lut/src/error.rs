//! LUT error types.

use thiserror::Error;

/// Result type for cube parsing operations.
pub type CubeResult<T> = Result<T, CubeError>;

/// Errors that can occur while parsing a `.cube` source.
#[derive(Debug, Error)]
pub enum CubeError {
    /// The file never declared `LUT_3D_SIZE`.
    #[error("missing LUT_3D_SIZE directive")]
    MissingSizeDirective,

    /// Fewer valid data rows than the declared size requires.
    #[error("insufficient data rows: expected {expected}, found {found}")]
    InsufficientData {
        /// Rows required by the declared size (size cubed)
        expected: usize,
        /// Valid rows actually found
        found: usize,
    },

    /// The `LUT_3D_SIZE` value is not a positive integer.
    #[error("invalid LUT_3D_SIZE: {0}")]
    InvalidSize(String),

    /// The source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while building a [`ColorCubeTransform`].
///
/// [`ColorCubeTransform`]: crate::ColorCubeTransform
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The lattice dimension cannot drive trilinear lookup.
    ///
    /// The interpolation primitive needs at least two samples per axis,
    /// the same lower bound the platform color-cube filters impose.
    #[error("invalid cube dimension {0}: need at least 2 samples per axis")]
    InvalidDimension(usize),

    /// The lattice entry count does not match its declared dimension.
    #[error("lattice entry count mismatch: expected {expected}, found {found}")]
    LatticeMismatch {
        /// Entries required by the dimension (dimension cubed)
        expected: usize,
        /// Entries actually present
        found: usize,
    },
}
