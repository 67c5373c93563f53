//! # lutcam-core
//!
//! Core types for the lutcam color grading pipeline.
//!
//! This crate provides the foundational types used throughout lutcam:
//!
//! - [`Frame`] - Owned RGBA f32 image buffer with zero-copy cloning
//! - [`ColorSpace`] - Runtime identifier for the encoding of frame values
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Crate Structure
//!
//! This crate is the foundation of lutcam and has no internal dependencies.
//! All other lutcam crates depend on it:
//!
//! ```text
//! lutcam-core (this crate)
//!    ^
//!    |
//!    +-- lutcam-lut (cube parsing, color-cube transform)
//!    +-- lutcam-ops (frame blending)
//!    +-- lutcam-presets (preset selection and persistence)
//!    +-- lutcam-cli (command line surface)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;
pub mod image;

pub use colorspace::ColorSpace;
pub use error::{Error, Result};
pub use image::{Frame, CHANNELS};
