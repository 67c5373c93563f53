//! # lutcam-lut
//!
//! Cube LUT parsing and the color-cube transform for the lutcam grading
//! pipeline.
//!
//! A 3D LUT maps an input RGB triple to an output RGB triple through a
//! regular lattice of sample points. This crate owns the whole journey from
//! `.cube` text to a reusable transform:
//!
//! - [`cube`] - `.cube` file parsing (lenient dialect)
//! - [`CubeLattice`] - Parsed lattice of RGB samples in file order
//! - [`ColorCubeTransform`] - Realized transform with trilinear lookup
//!
//! # Usage
//!
//! ```rust
//! use lutcam_lut::{ColorCubeTransform, CubeLattice};
//! use lutcam_core::ColorSpace;
//!
//! let lattice = CubeLattice::identity(17);
//! let transform = ColorCubeTransform::build(&lattice, ColorSpace::Srgb).unwrap();
//! let rgb = transform.apply_rgb([0.5, 0.3, 0.2]);
//! ```
//!
//! # Interpolation
//!
//! Lookups interpolate trilinearly among the 8 lattice vertices nearest the
//! input color. The lattice is stored in the `.cube` file's native order
//! (red varies fastest); no reordering pass is performed.
//!
//! # Dependencies
//!
//! - [`lutcam-core`] - Frame and color space types
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `lutcam-presets` - Preset loading
//! - `lutcam-cli` - LUT application commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cube;
mod error;
mod lattice;
mod transform;

pub use error::{CubeError, CubeResult, TransformError};
pub use lattice::CubeLattice;
pub use transform::ColorCubeTransform;
