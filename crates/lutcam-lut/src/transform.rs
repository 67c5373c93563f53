//! Color-cube transform.
//!
//! A [`ColorCubeTransform`] is a realized, queryable mapping from input RGB
//! to output RGB, built once from a [`CubeLattice`] and applied per frame.
//! Construction expands the lattice to the RGBA layout the color-cube
//! primitive consumes (alpha fixed at 1.0); lookup interpolates trilinearly
//! among the 8 nearest lattice vertices.

use crate::{CubeLattice, TransformError};
use lutcam_core::{ColorSpace, Frame, CHANNELS};

/// A realized color-cube transform.
///
/// Immutable once built: `apply` is a pure function and the same transform
/// may be used for any number of frames, from any thread. The transform is
/// owned by whichever preset is currently active and replaced wholesale on
/// preset change.
///
/// # Example
///
/// ```rust
/// use lutcam_lut::{ColorCubeTransform, CubeLattice};
/// use lutcam_core::ColorSpace;
///
/// let lattice = CubeLattice::identity(17);
/// let transform = ColorCubeTransform::build(&lattice, ColorSpace::Srgb).unwrap();
///
/// let out = transform.apply_rgb([0.5, 0.3, 0.2]);
/// assert!((out[0] - 0.5).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct ColorCubeTransform {
    /// Per-axis sample count
    dimension: usize,
    /// RGBA lattice: dimension³ * 4 floats, file order, alpha = 1.0
    table: Vec<f32>,
    /// Color space the transform was built for
    colorspace: ColorSpace,
}

impl ColorCubeTransform {
    /// Builds a transform from a parsed lattice.
    ///
    /// Expands the lattice's RGB triples into an RGBA table (alpha fixed at
    /// 1.0, entry order unchanged). This is a pure data-layout step; no
    /// interpolation happens until [`apply`](Self::apply).
    ///
    /// # Errors
    ///
    /// - [`TransformError::InvalidDimension`] for dimensions below 2; the
    ///   parser's own validation is re-checked here as a construction
    ///   invariant
    /// - [`TransformError::LatticeMismatch`] if the entry count disagrees
    ///   with the dimension
    pub fn build(lattice: &CubeLattice, colorspace: ColorSpace) -> Result<Self, TransformError> {
        let dimension = lattice.dimension();
        if dimension < 2 {
            return Err(TransformError::InvalidDimension(dimension));
        }

        let expected = dimension * dimension * dimension;
        if lattice.entries().len() != expected {
            return Err(TransformError::LatticeMismatch {
                expected,
                found: lattice.entries().len(),
            });
        }

        let mut table = Vec::with_capacity(expected * 4);
        for rgb in lattice.entries() {
            table.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 1.0]);
        }

        Ok(Self {
            dimension,
            table,
            colorspace,
        })
    }

    /// Returns the per-axis sample count.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the color space this transform was built for.
    #[inline]
    pub fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Returns the raw RGBA lattice table (dimension³ * 4 floats).
    ///
    /// This is the layout a GPU color-cube filter uploads directly.
    #[inline]
    pub fn table(&self) -> &[f32] {
        &self.table
    }

    /// Returns the RGB value at grid position (r, g, b).
    #[inline]
    fn corner(&self, r: usize, g: usize, b: usize) -> [f32; 3] {
        let idx = (r + self.dimension * (g + self.dimension * b)) * 4;
        [self.table[idx], self.table[idx + 1], self.table[idx + 2]]
    }

    /// Maps a single RGB value through the cube.
    ///
    /// The input indexes the lattice using its own RGB as the lookup
    /// coordinate (clamped to [0, 1]); the output interpolates trilinearly
    /// among the 8 nearest vertices.
    pub fn apply_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        let n = (self.dimension - 1) as f32;

        let r = rgb[0].clamp(0.0, 1.0) * n;
        let g = rgb[1].clamp(0.0, 1.0) * n;
        let b = rgb[2].clamp(0.0, 1.0) * n;

        // Grid coordinates, clamped so the +1 corner stays in range
        let ri = (r.floor() as usize).min(self.dimension - 2);
        let gi = (g.floor() as usize).min(self.dimension - 2);
        let bi = (b.floor() as usize).min(self.dimension - 2);

        // Fractional parts
        let rf = r - ri as f32;
        let gf = g - gi as f32;
        let bf = b - bi as f32;

        // The 8 corner values
        let c000 = self.corner(ri, gi, bi);
        let c100 = self.corner(ri + 1, gi, bi);
        let c010 = self.corner(ri, gi + 1, bi);
        let c110 = self.corner(ri + 1, gi + 1, bi);
        let c001 = self.corner(ri, gi, bi + 1);
        let c101 = self.corner(ri + 1, gi, bi + 1);
        let c011 = self.corner(ri, gi + 1, bi + 1);
        let c111 = self.corner(ri + 1, gi + 1, bi + 1);

        // Trilinear interpolation
        let mut result = [0.0f32; 3];
        for i in 0..3 {
            let c00 = c000[i] * (1.0 - rf) + c100[i] * rf;
            let c01 = c001[i] * (1.0 - rf) + c101[i] * rf;
            let c10 = c010[i] * (1.0 - rf) + c110[i] * rf;
            let c11 = c011[i] * (1.0 - rf) + c111[i] * rf;

            let c0 = c00 * (1.0 - gf) + c10 * gf;
            let c1 = c01 * (1.0 - gf) + c11 * gf;

            result[i] = c0 * (1.0 - bf) + c1 * bf;
        }

        result
    }

    /// Maps a whole frame through the cube.
    ///
    /// Pure function: the output frame has the same extent as the input,
    /// input alpha passes through unchanged, and the transform itself is
    /// never mutated.
    pub fn apply(&self, frame: &Frame) -> Frame {
        let src = frame.data();
        let mut dst = Vec::with_capacity(src.len());

        for px in src.chunks_exact(CHANNELS) {
            let rgb = self.apply_rgb([px[0], px[1], px[2]]);
            dst.extend_from_slice(&[rgb[0], rgb[1], rgb[2], px[3]]);
        }

        // Extent was taken from the input, so the length always matches.
        Frame::from_data(frame.width(), frame.height(), dst)
            .expect("output length matches input extent")
    }
}
