//! # lutcam-ops
//!
//! Frame operations for the lutcam grading pipeline.
//!
//! The pipeline's per-frame work after the color-cube transform lives here:
//! compositing the transformed frame back over the original with a uniform
//! blend intensity.
//!
//! # Example
//!
//! ```rust
//! use lutcam_core::Frame;
//! use lutcam_ops::blend;
//!
//! let original = Frame::filled(8, 8, [0.0, 0.0, 0.0, 1.0]);
//! let graded = Frame::filled(8, 8, [1.0, 1.0, 1.0, 1.0]);
//!
//! let half = blend::blend(&original, &graded, 0.5).unwrap();
//! assert_eq!(half.pixel(0, 0)[0], 0.5);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Row-parallel blending via rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blend;
mod error;

pub use blend::blend;
pub use error::{OpsError, OpsResult};
