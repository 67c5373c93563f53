//! Intensity blending of a graded frame over its original.
//!
//! The grading pipeline applies the color-cube transform at full strength
//! and mixes the result back with the original frame using a spatially
//! uniform mask whose alpha is the blend intensity:
//!
//! ```text
//! output = transformed * intensity + original * (1 - intensity)
//! ```
//!
//! per pixel, per channel, in the color space of the original. Intensity is
//! pre-clamped to [0, 1] by the caller, so the 0 and 1 boundaries behave
//! pixel-exactly.

use crate::{OpsError, OpsResult};
use lutcam_core::{Frame, CHANNELS};
#[allow(unused_imports)]
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this intensity the transform is treated as having no visible
/// effect and the original is returned untouched.
pub const MIN_VISIBLE_INTENSITY: f32 = 0.001;

/// Above this intensity the transform fully replaces the original.
pub const MAX_PARTIAL_INTENSITY: f32 = 0.999;

/// Blends `transformed` over `original` with a uniform intensity mask.
///
/// - `intensity <= 0.001` returns `original` unchanged (zero-copy clone)
/// - `intensity >= 0.999` returns `transformed` unchanged
/// - anywhere between, each channel is the per-pixel linear mix
///
/// Callers that also own the transform step should short-circuit *before*
/// transforming when intensity is below the visible threshold; correctness
/// does not depend on the order, only wasted work does.
///
/// # Errors
///
/// Returns [`OpsError::DimensionMismatch`] when the two frames differ in
/// extent.
///
/// # Example
///
/// ```rust
/// use lutcam_core::Frame;
/// use lutcam_ops::blend::blend;
///
/// let original = Frame::filled(4, 4, [0.2, 0.2, 0.2, 1.0]);
/// let graded = Frame::filled(4, 4, [0.8, 0.8, 0.8, 1.0]);
///
/// let out = blend(&original, &graded, 0.25).unwrap();
/// assert!((out.pixel(0, 0)[0] - 0.35).abs() < 1e-6);
/// ```
pub fn blend(original: &Frame, transformed: &Frame, intensity: f32) -> OpsResult<Frame> {
    if !original.same_extent(transformed) {
        return Err(OpsError::DimensionMismatch {
            a_width: original.width(),
            a_height: original.height(),
            b_width: transformed.width(),
            b_height: transformed.height(),
        });
    }

    if intensity <= MIN_VISIBLE_INTENSITY {
        trace!(intensity, "blend short-circuit: original");
        return Ok(original.clone());
    }
    if intensity >= MAX_PARTIAL_INTENSITY {
        trace!(intensity, "blend short-circuit: transformed");
        return Ok(transformed.clone());
    }

    let inv = 1.0 - intensity;
    let src = original.data();
    let fgd = transformed.data();
    let mut dst = vec![0.0f32; src.len()];

    let row_len = original.width() as usize * CHANNELS;
    mix_rows(&mut dst, src, fgd, row_len, intensity, inv);

    let out = Frame::from_data(original.width(), original.height(), dst)
        .expect("output length matches input extent");
    Ok(out)
}

/// Per-row linear mix, parallel when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
fn mix_rows(dst: &mut [f32], bg: &[f32], fg: &[f32], row_len: usize, t: f32, inv: f32) {
    if row_len == 0 {
        return;
    }
    dst.par_chunks_mut(row_len)
        .zip(bg.par_chunks(row_len).zip(fg.par_chunks(row_len)))
        .for_each(|(out, (b, f))| {
            for i in 0..out.len() {
                out[i] = f[i] * t + b[i] * inv;
            }
        });
}

#[cfg(not(feature = "parallel"))]
fn mix_rows(dst: &mut [f32], bg: &[f32], fg: &[f32], _row_len: usize, t: f32, inv: f32) {
    for i in 0..dst.len() {
        dst[i] = fg[i] * t + bg[i] * inv;
    }
}
