//! Preset identity and the bundled look library.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A bundled look shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuiltinLook {
    /// Punchy saturation and contrast.
    Vivid,
    /// Black and white.
    Mono,
    /// Lifted blacks, muted highlights.
    Fade,
}

impl BuiltinLook {
    /// All bundled looks, in display order.
    pub const ALL: [BuiltinLook; 3] = [Self::Vivid, Self::Mono, Self::Fade];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vivid => "Vivid",
            Self::Mono => "Mono",
            Self::Fade => "Fade",
        }
    }

    /// Fixed resource file name inside the look library.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Vivid => "vivid.cube",
            Self::Mono => "mono.cube",
            Self::Fade => "fade.cube",
        }
    }
}

/// The enumerated preset choice.
///
/// `Imported` carries no payload; the last imported source location is held
/// separately in [`LookSettings`](crate::LookSettings) so re-selecting
/// "imported" after switching away does not lose the file reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetId {
    /// No preset: identity passthrough regardless of intensity.
    #[default]
    None,
    /// One of the bundled looks.
    Builtin(BuiltinLook),
    /// The last user-imported `.cube` file.
    Imported,
}

/// Resolves bundled looks to `.cube` files under a library directory.
#[derive(Debug, Clone)]
pub struct LookLibrary {
    dir: PathBuf,
}

impl LookLibrary {
    /// Creates a library rooted at `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the library root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the `.cube` path for a bundled look.
    pub fn path_for(&self, look: BuiltinLook) -> PathBuf {
        self.dir.join(look.resource_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_resolution() {
        let library = LookLibrary::new("/looks");
        assert_eq!(
            library.path_for(BuiltinLook::Mono),
            PathBuf::from("/looks/mono.cube")
        );
    }

    #[test]
    fn test_default_preset_is_none() {
        assert_eq!(PresetId::default(), PresetId::None);
    }
}
