//! Persisted look settings.

use crate::PresetId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The persisted grading state: which preset is selected, where the last
/// imported look lives, and how strongly the look is blended.
///
/// This struct is the unit of persistence: it is written through the
/// injected [`SettingsStore`](crate::SettingsStore) on every mutation and
/// restored at manager construction, and the selection id and intensity
/// round-trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookSettings {
    /// Selected preset.
    pub preset: PresetId,
    /// Last user-imported `.cube` location, kept across selection changes.
    pub imported_path: Option<PathBuf>,
    /// Blend intensity in [0, 1].
    pub intensity: f32,
}

impl Default for LookSettings {
    fn default() -> Self {
        Self {
            preset: PresetId::None,
            imported_path: None,
            intensity: 1.0,
        }
    }
}
