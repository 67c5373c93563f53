//! Settings persistence port.
//!
//! The manager never touches a concrete storage mechanism; it writes
//! through the [`SettingsStore`] trait. Production code uses
//! [`YamlSettingsStore`]; tests use [`MemorySettingsStore`].

use crate::LookSettings;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Errors from a settings store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error reading or writing the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be serialized or deserialized.
    #[error("settings serialization error: {0}")]
    Serde(#[from] serde_yaml::Error),
}

/// Persistence port for [`LookSettings`].
///
/// `load` returns `Ok(None)` when no settings have ever been saved; store
/// failures are surfaced so the manager can log and fall back to defaults.
pub trait SettingsStore: Send + Sync {
    /// Restores the previously saved settings, if any.
    fn load(&self) -> Result<Option<LookSettings>, StoreError>;

    /// Saves the given settings, replacing any previous state.
    fn save(&self, settings: &LookSettings) -> Result<(), StoreError>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<LookSettings>, StoreError> {
        (**self).load()
    }

    fn save(&self, settings: &LookSettings) -> Result<(), StoreError> {
        (**self).save(settings)
    }
}

/// File-backed settings store using YAML.
#[derive(Debug)]
pub struct YamlSettingsStore {
    path: PathBuf,
}

impl YamlSettingsStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for YamlSettingsStore {
    fn load(&self) -> Result<Option<LookSettings>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)?;
        let settings = serde_yaml::from_str(&text)?;
        Ok(Some(settings))
    }

    fn save(&self, settings: &LookSettings) -> Result<(), StoreError> {
        let text = serde_yaml::to_string(settings)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// In-memory settings store for tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    inner: Mutex<Option<LookSettings>>,
}

impl MemorySettingsStore {
    /// Creates a store pre-seeded with settings, as if previously saved.
    pub fn with_settings(settings: LookSettings) -> Self {
        Self {
            inner: Mutex::new(Some(settings)),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<LookSettings>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn save(&self, settings: &LookSettings) -> Result<(), StoreError> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuiltinLook, PresetId};

    #[test]
    fn test_yaml_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlSettingsStore::new(dir.path().join("look.yaml"));

        assert!(store.load().unwrap().is_none());

        let settings = LookSettings {
            preset: PresetId::Builtin(BuiltinLook::Vivid),
            imported_path: None,
            intensity: 0.4,
        };
        store.save(&settings).unwrap();

        let restored = store.load().unwrap().unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_yaml_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("look.yaml");
        std::fs::write(&path, "intensity: [not, a, float]\n").unwrap();

        let store = YamlSettingsStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySettingsStore::default();
        assert!(store.load().unwrap().is_none());

        let settings = LookSettings::default();
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), settings);
    }
}
