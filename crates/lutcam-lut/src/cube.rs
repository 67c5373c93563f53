//! Adobe/Resolve `.cube` LUT format support.
//!
//! The `.cube` format is a simple text-based LUT format widely supported by
//! DaVinci Resolve, Adobe applications, and most camera grading tools.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! # Dialect
//!
//! Real-world exporters disagree on the fine points, so this parser is
//! deliberately lenient: `TITLE` and `DOMAIN_*` directives are skipped
//! (inputs are assumed to use the default [0,1] domain), data rows that do
//! not yield three floats are dropped, extra tokens on a data row are
//! ignored, and rows beyond the declared `size³` are truncated. Missing
//! `LUT_3D_SIZE` and too few data rows remain fatal.
//!
//! # Example
//!
//! ```rust,ignore
//! use lutcam_lut::cube;
//!
//! let lattice = cube::read("grade.cube")?;
//! ```

use crate::{CubeError, CubeLattice, CubeResult};
use std::path::Path;
use tracing::trace;

/// Reads and parses a `.cube` file from disk.
///
/// # Example
///
/// ```rust,ignore
/// let lattice = cube::read("looks/vivid.cube")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> CubeResult<CubeLattice> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse(&text)
}

/// Parses the full text of a `.cube` file.
///
/// # Errors
///
/// - [`CubeError::MissingSizeDirective`] if no `LUT_3D_SIZE` line is present
/// - [`CubeError::InvalidSize`] if the size value is not a positive integer
/// - [`CubeError::InsufficientData`] if fewer than `size³` valid rows parse
pub fn parse(text: &str) -> CubeResult<CubeLattice> {
    let mut size: Option<usize> = None;
    let mut entries: Vec<[f32; 3]> = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Metadata directives whose values the pipeline does not need
        if line.starts_with("TITLE") || line.starts_with("DOMAIN_") {
            continue;
        }

        if line.starts_with("LUT_3D_SIZE") {
            size = Some(parse_size(line)?);
            continue;
        }

        // Data row: first three tokens as floats, extras ignored,
        // unparsable rows dropped
        match parse_rgb(line) {
            Some(rgb) => entries.push(rgb),
            None => trace!(row = line, "skipping malformed data row"),
        }
    }

    let size = size.ok_or(CubeError::MissingSizeDirective)?;
    let expected = size * size * size;

    if entries.len() < expected {
        return Err(CubeError::InsufficientData {
            expected,
            found: entries.len(),
        });
    }
    if entries.len() > expected {
        trace!(
            extra = entries.len() - expected,
            "ignoring data rows beyond the declared size"
        );
        entries.truncate(expected);
    }

    CubeLattice::from_entries(size, entries)
}

/// Parses the value token of a `LUT_3D_SIZE` line.
fn parse_size(line: &str) -> CubeResult<usize> {
    let mut tokens = line.split_whitespace();
    let _keyword = tokens.next();
    let value = tokens
        .next()
        .ok_or_else(|| CubeError::InvalidSize("missing value".into()))?;
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(n) => Err(CubeError::InvalidSize(format!("{} is not positive", n))),
        Err(_) => Err(CubeError::InvalidSize(value.into())),
    }
}

/// Parses the first three whitespace-separated tokens of a data row as RGB.
///
/// Returns `None` when the row does not yield three floats.
fn parse_rgb(line: &str) -> Option<[f32; 3]> {
    let mut tokens = line.split_whitespace();
    let r = tokens.next()?.parse().ok()?;
    let g = tokens.next()?.parse().ok()?;
    let b = tokens.next()?.parse().ok()?;
    Some([r, g, b])
}
