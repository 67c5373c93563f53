//! The preset manager: single-writer state holder for the active look.
//!
//! # Reload Model
//!
//! Reloads are generation-counted and split into two phases so that rapid
//! preset switching can never install a stale result:
//!
//! 1. [`PresetManager::begin_reload`] bumps the generation and snapshots
//!    the selection into a [`ReloadTicket`]
//! 2. [`PresetManager::load_ticket`] does the slow work (file read, parse,
//!    transform build) with no lock held
//! 3. [`PresetManager::complete_reload`] installs the result only if the
//!    ticket's generation is still current
//!
//! [`PresetManager::reload`] composes the three synchronously, which is
//! what selection and import use. A caller that runs reloads off its render
//! path drives the phases itself; whichever reload began last wins, and a
//! superseded result is discarded rather than racing the newer one.

use crate::{LookLibrary, LookSettings, PresetError, PresetId, SettingsStore};
use lutcam_core::{ColorSpace, Frame};
use lutcam_lut::{cube, ColorCubeTransform};
use lutcam_ops::blend;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// Snapshot of one reload request.
///
/// Carries the generation it was issued under and the selection it
/// resolved from; see the module docs for the three-phase protocol.
#[derive(Debug)]
pub struct ReloadTicket {
    generation: u64,
    preset: PresetId,
    imported_path: Option<PathBuf>,
}

/// Mutable manager state, behind one lock.
#[derive(Debug)]
struct State {
    settings: LookSettings,
    active: Option<Arc<ColorCubeTransform>>,
    generation: u64,
}

/// Process-wide coordinator for preset selection and the active transform.
///
/// Selection and intensity are persisted through the injected
/// [`SettingsStore`] on every mutation; the active transform is rebuilt by
/// [`reload`](Self::reload) and handed out as a shared read-only value.
pub struct PresetManager {
    library: LookLibrary,
    store: Box<dyn SettingsStore>,
    colorspace: ColorSpace,
    state: Mutex<State>,
}

impl PresetManager {
    /// Creates a manager, restoring persisted settings and loading the
    /// restored preset.
    ///
    /// Absent or unreadable settings fall back to defaults (no preset,
    /// intensity 1.0); a restore failure is logged, never propagated.
    pub fn new(library: LookLibrary, store: Box<dyn SettingsStore>, colorspace: ColorSpace) -> Self {
        let settings = match store.load() {
            Ok(Some(mut s)) => {
                s.intensity = s.intensity.clamp(0.0, 1.0);
                s
            }
            Ok(None) => LookSettings::default(),
            Err(e) => {
                warn!(error = %e, "failed to restore look settings; using defaults");
                LookSettings::default()
            }
        };

        let manager = Self {
            library,
            store,
            colorspace,
            state: Mutex::new(State {
                settings,
                active: None,
                generation: 0,
            }),
        };
        manager.reload();
        manager
    }

    /// Locks the state, recovering from a poisoned lock.
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Saves settings through the store, logging on failure.
    fn persist(&self, settings: &LookSettings) {
        if let Err(e) = self.store.save(settings) {
            warn!(error = %e, "failed to persist look settings");
        }
    }

    /// Selects a preset.
    ///
    /// `PresetId::None` clears the active transform immediately (and
    /// supersedes any in-flight reload); any other selection is persisted
    /// and reloaded.
    pub fn select_preset(&self, id: PresetId) {
        {
            let mut st = self.state();
            st.settings.preset = id;
            if id == PresetId::None {
                st.generation += 1;
                st.active = None;
            }
            self.persist(&st.settings);
        }
        if id != PresetId::None {
            self.reload();
        }
    }

    /// Records `path` as the imported look source, selects `Imported`,
    /// and reloads.
    pub fn import_look(&self, path: impl AsRef<Path>) {
        {
            let mut st = self.state();
            st.settings.imported_path = Some(path.as_ref().to_path_buf());
            st.settings.preset = PresetId::Imported;
            self.persist(&st.settings);
        }
        self.reload();
    }

    /// Sets the blend intensity, clamped to [0, 1], and persists it.
    ///
    /// Takes effect on the next [`process`](Self::process) call; the active
    /// transform is independent of intensity and is not reloaded.
    pub fn set_intensity(&self, value: f32) {
        let mut st = self.state();
        st.settings.intensity = value.clamp(0.0, 1.0);
        self.persist(&st.settings);
    }

    /// Reloads the current selection synchronously.
    pub fn reload(&self) {
        let ticket = self.begin_reload();
        let result = self.load_ticket(&ticket);
        self.complete_reload(ticket, result);
    }

    /// Starts a reload: bumps the generation and snapshots the selection.
    pub fn begin_reload(&self) -> ReloadTicket {
        let mut st = self.state();
        st.generation += 1;
        ReloadTicket {
            generation: st.generation,
            preset: st.settings.preset,
            imported_path: st.settings.imported_path.clone(),
        }
    }

    /// Resolves and loads a ticket's source. Slow path: file I/O, parsing,
    /// transform construction. Holds no lock.
    ///
    /// `Ok(None)` means the selection resolves to "no transform" (the
    /// `None` preset).
    pub fn load_ticket(
        &self,
        ticket: &ReloadTicket,
    ) -> Result<Option<Arc<ColorCubeTransform>>, PresetError> {
        let path = match ticket.preset {
            PresetId::None => return Ok(None),
            PresetId::Builtin(look) => self.library.path_for(look),
            PresetId::Imported => ticket
                .imported_path
                .clone()
                .ok_or(PresetError::MissingImportedPath)?,
        };

        let lattice = cube::read(&path)?;
        let transform = ColorCubeTransform::build(&lattice, self.colorspace)?;
        debug!(path = %path.display(), dimension = transform.dimension(), "loaded look");
        Ok(Some(Arc::new(transform)))
    }

    /// Completes a reload, installing the result only if the ticket is
    /// still current.
    ///
    /// A failed reload installs `None`: the previous preset's transform
    /// must never keep showing after its replacement failed to load.
    pub fn complete_reload(
        &self,
        ticket: ReloadTicket,
        result: Result<Option<Arc<ColorCubeTransform>>, PresetError>,
    ) {
        let mut st = self.state();
        if st.generation != ticket.generation {
            debug!(
                ticket = ticket.generation,
                current = st.generation,
                "discarding superseded reload"
            );
            return;
        }
        st.active = match result {
            Ok(transform) => transform,
            Err(e) => {
                warn!(error = %e, "look reload failed; falling back to no transform");
                None
            }
        };
    }

    /// Returns the active transform, if any.
    pub fn current_transform(&self) -> Option<Arc<ColorCubeTransform>> {
        self.state().active.clone()
    }

    /// Returns the current blend intensity.
    pub fn current_intensity(&self) -> f32 {
        self.state().settings.intensity
    }

    /// Returns a snapshot of the persisted settings.
    pub fn settings(&self) -> LookSettings {
        self.state().settings.clone()
    }

    /// Runs one frame through the active look.
    ///
    /// Identity passthrough when no transform is active or the intensity is
    /// below the visible threshold; otherwise apply then blend. Called once
    /// per preview frame or captured still.
    pub fn process(&self, frame: &Frame) -> Frame {
        let (transform, intensity) = {
            let st = self.state();
            (st.active.clone(), st.settings.intensity)
        };

        let Some(transform) = transform else {
            return frame.clone();
        };
        if intensity <= blend::MIN_VISIBLE_INTENSITY {
            return frame.clone();
        }

        let graded = transform.apply(frame);
        match blend::blend(frame, &graded, intensity) {
            Ok(out) => out,
            Err(e) => {
                warn!(error = %e, "blend failed; passing frame through");
                frame.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuiltinLook, MemorySettingsStore};

    /// 2-point cube that inverts every channel.
    const INVERT_CUBE: &str = "\
LUT_3D_SIZE 2
1 1 1
0 1 1
1 0 1
0 0 1
1 1 0
0 1 0
1 0 0
0 0 0
";

    /// 2-point cube that maps everything to mid gray.
    const GRAY_CUBE: &str = "\
LUT_3D_SIZE 2
0.5 0.5 0.5
0.5 0.5 0.5
0.5 0.5 0.5
0.5 0.5 0.5
0.5 0.5 0.5
0.5 0.5 0.5
0.5 0.5 0.5
0.5 0.5 0.5
";

    fn library_with_looks() -> (tempfile::TempDir, LookLibrary) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mono.cube"), INVERT_CUBE).unwrap();
        std::fs::write(dir.path().join("fade.cube"), GRAY_CUBE).unwrap();
        let library = LookLibrary::new(dir.path());
        (dir, library)
    }

    fn manager_with_store(
        library: LookLibrary,
        store: Arc<MemorySettingsStore>,
    ) -> PresetManager {
        PresetManager::new(library, Box::new(store), ColorSpace::Srgb)
    }

    #[test]
    fn test_none_selection_is_identity_at_any_intensity() {
        let (_dir, library) = library_with_looks();
        let manager = manager_with_store(library, Arc::new(MemorySettingsStore::default()));

        manager.set_intensity(1.0);
        let frame = Frame::filled(4, 4, [0.3, 0.6, 0.9, 1.0]);
        let out = manager.process(&frame);
        assert_eq!(out.data(), frame.data());

        manager.set_intensity(0.2);
        let out = manager.process(&frame);
        assert_eq!(out.data(), frame.data());
    }

    #[test]
    fn test_select_builtin_activates_transform() {
        let (_dir, library) = library_with_looks();
        let manager = manager_with_store(library, Arc::new(MemorySettingsStore::default()));

        manager.select_preset(PresetId::Builtin(BuiltinLook::Mono));
        let transform = manager.current_transform().expect("transform active");
        assert_eq!(transform.apply_rgb([0.0, 0.0, 0.0]), [1.0, 1.0, 1.0]);

        // Full intensity: the graded frame replaces the original.
        let black = Frame::filled(2, 2, [0.0, 0.0, 0.0, 1.0]);
        let out = manager.process(&black);
        assert_eq!(out.pixel(0, 0), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_missing_builtin_resolves_to_no_transform() {
        let (_dir, library) = library_with_looks();
        let manager = manager_with_store(library, Arc::new(MemorySettingsStore::default()));

        // vivid.cube was never written into the library dir.
        manager.select_preset(PresetId::Builtin(BuiltinLook::Vivid));
        assert!(manager.current_transform().is_none());
    }

    #[test]
    fn test_failed_reload_clears_previous_transform() {
        let (_dir, library) = library_with_looks();
        let manager = manager_with_store(library, Arc::new(MemorySettingsStore::default()));

        manager.select_preset(PresetId::Builtin(BuiltinLook::Mono));
        assert!(manager.current_transform().is_some());

        manager.import_look("/nowhere/missing.cube");
        assert!(
            manager.current_transform().is_none(),
            "stale transform survived a failed reload"
        );
    }

    #[test]
    fn test_intensity_clamps_and_persists() {
        let (_dir, library) = library_with_looks();
        let store = Arc::new(MemorySettingsStore::default());
        let manager = manager_with_store(library, Arc::clone(&store));

        manager.set_intensity(7.5);
        assert_eq!(manager.current_intensity(), 1.0);

        manager.set_intensity(0.25);
        assert_eq!(manager.current_intensity(), 0.25);

        let saved = store.load().unwrap().expect("settings saved");
        assert_eq!(saved.intensity, 0.25);
    }

    #[test]
    fn test_restores_persisted_selection() {
        let (_dir, library) = library_with_looks();
        let store = Arc::new(MemorySettingsStore::with_settings(LookSettings {
            preset: PresetId::Builtin(BuiltinLook::Mono),
            imported_path: None,
            intensity: 0.3,
        }));

        let manager = manager_with_store(library, store);
        assert!(manager.current_transform().is_some());
        assert_eq!(manager.current_intensity(), 0.3);
    }

    #[test]
    fn test_superseded_reload_is_discarded() {
        let (_dir, library) = library_with_looks();
        let manager = manager_with_store(library, Arc::new(MemorySettingsStore::default()));

        manager.select_preset(PresetId::Builtin(BuiltinLook::Mono));

        // An in-flight reload of Mono, begun before the user switches away.
        let stale = manager.begin_reload();
        let stale_result = manager.load_ticket(&stale);

        manager.select_preset(PresetId::Builtin(BuiltinLook::Fade));

        // The old reload lands late; it must not overwrite Fade.
        manager.complete_reload(stale, stale_result);

        let transform = manager.current_transform().expect("transform active");
        assert_eq!(transform.apply_rgb([0.0, 0.0, 0.0]), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_clear_supersedes_in_flight_reload() {
        let (_dir, library) = library_with_looks();
        let manager = manager_with_store(library, Arc::new(MemorySettingsStore::default()));

        manager.select_preset(PresetId::Builtin(BuiltinLook::Mono));
        assert!(manager.current_transform().is_some());

        // Reload of Mono still in flight when the user clears the preset.
        let stale = manager.begin_reload();
        let stale_result = manager.load_ticket(&stale);
        assert!(matches!(&stale_result, Ok(Some(_))));

        manager.select_preset(PresetId::None);
        manager.complete_reload(stale, stale_result);

        assert!(manager.current_transform().is_none());
    }
}
