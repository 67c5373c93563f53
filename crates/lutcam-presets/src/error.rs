//! Preset coordination error types.

use crate::StoreError;
use lutcam_lut::{CubeError, TransformError};
use thiserror::Error;

/// Errors that can occur while resolving, loading, or persisting presets.
///
/// All reload-path variants are recovered locally by the manager: logged,
/// and the active transform cleared. Nothing here is fatal to the host.
#[derive(Debug, Error)]
pub enum PresetError {
    /// The `.cube` source failed to parse.
    #[error("cube parse failed: {0}")]
    Parse(#[from] CubeError),

    /// The transform could not be built from the parsed lattice.
    #[error("transform build failed: {0}")]
    Build(#[from] TransformError),

    /// Settings persistence failed.
    #[error("settings store failed: {0}")]
    Store(#[from] StoreError),

    /// Selection is `Imported` but no imported source was ever recorded.
    #[error("no imported look source recorded")]
    MissingImportedPath,
}
