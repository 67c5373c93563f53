//! Color space identification.
//!
//! Frames in this pipeline carry f32 values whose meaning depends on the
//! encoding they were captured or decoded in. A [`ColorSpace`] tag travels
//! with the color-cube transform so a LUT built for one encoding is never
//! silently applied in another; no gamut or transfer conversion is
//! performed anywhere in this core.
//!
//! # Supported Color Spaces
//!
//! - [`ColorSpace::Srgb`] - sRGB with standard transfer function (default)
//! - [`ColorSpace::DisplayP3`] - Display P3 (wide-gamut camera displays)
//! - [`ColorSpace::LinearSrgb`] - Linear sRGB (Rec.709 primaries, linear)

use std::fmt;
use std::str::FromStr;

/// Identifies the encoding of frame values.
///
/// # Example
///
/// ```rust
/// use lutcam_core::ColorSpace;
///
/// let cs: ColorSpace = "display-p3".parse().unwrap();
/// assert_eq!(cs, ColorSpace::DisplayP3);
/// assert!(!cs.is_linear());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// sRGB with the standard transfer function.
    #[default]
    Srgb,
    /// Display P3 (P3 primaries, sRGB transfer function).
    DisplayP3,
    /// Linear sRGB (Rec.709 primaries, linear light).
    LinearSrgb,
}

impl ColorSpace {
    /// Human-readable name, used for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::DisplayP3 => "Display P3",
            Self::LinearSrgb => "Linear sRGB",
        }
    }

    /// Whether this color space uses linear light encoding.
    #[inline]
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::LinearSrgb)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "srgb" => Ok(Self::Srgb),
            "display-p3" | "displayp3" | "p3" => Ok(Self::DisplayP3),
            "linear" | "linear-srgb" | "linearsrgb" => Ok(Self::LinearSrgb),
            other => Err(format!("unknown color space: {}", other)),
        }
    }
}
