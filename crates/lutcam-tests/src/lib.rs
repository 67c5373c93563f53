//! Integration tests for lutcam crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the cube parser, the color-cube transform, the blender, and the
//! preset manager against real files on disk.

#[cfg(test)]
mod tests {
    use lutcam_core::{ColorSpace, Frame};
    use lutcam_lut::{cube, ColorCubeTransform};
    use lutcam_ops::blend;
    use lutcam_presets::{
        BuiltinLook, LookLibrary, LookSettings, PresetId, PresetManager, SettingsStore,
        YamlSettingsStore,
    };
    use tempfile::tempdir;

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

    /// Test full grading pipeline: file -> parse -> build -> apply -> blend.
    #[test]
    fn test_pipeline_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invert.cube");
        std::fs::write(&path, INVERT_CUBE).unwrap();

        let lattice = cube::read(&path).expect("Failed to parse cube");
        assert_eq!(lattice.dimension(), 2);

        let transform =
            ColorCubeTransform::build(&lattice, ColorSpace::Srgb).expect("Failed to build");

        let black = Frame::filled(8, 8, [0.0, 0.0, 0.0, 1.0]);
        let graded = transform.apply(&black);
        assert_eq!(graded.pixel(4, 4), [1.0, 1.0, 1.0, 1.0]);

        let half = blend::blend(&black, &graded, 0.5).expect("Failed to blend");
        assert_eq!(half.pixel(4, 4), [0.5, 0.5, 0.5, 1.0]);
    }

    /// A lenient dialect file (junk rows, trailing annotations) still grades.
    #[test]
    fn test_pipeline_tolerates_dialect_noise() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noisy.cube");
        let noisy = "\
TITLE \"Export from grading suite\"
LUT_3D_SIZE 2
DOMAIN_MIN 0 0 0
DOMAIN_MAX 1 1 1
0 0 0 row0
1 0 0
exported-by: suite v2
0 1 0
1 1 0
0 0 1
1 0 1
0 1 1
1 1 1
";
        std::fs::write(&path, noisy).unwrap();

        let lattice = cube::read(&path).expect("Failed to parse noisy cube");
        assert_eq!(lattice.entries().len(), 8);

        let transform =
            ColorCubeTransform::build(&lattice, ColorSpace::Srgb).expect("Failed to build");
        let out = transform.apply_rgb([1.0, 1.0, 1.0]);
        assert_eq!(out, [1.0, 1.0, 1.0]);
    }

    /// Selection and intensity survive a manager restart through the YAML
    /// store, and the restored preset loads.
    #[test]
    fn test_settings_survive_restart() {
        let dir = tempdir().unwrap();
        let looks = dir.path().join("looks");
        std::fs::create_dir(&looks).unwrap();
        std::fs::write(looks.join("mono.cube"), INVERT_CUBE).unwrap();
        let settings_path = dir.path().join("lutcam.yaml");

        {
            let manager = PresetManager::new(
                LookLibrary::new(&looks),
                Box::new(YamlSettingsStore::new(&settings_path)),
                ColorSpace::Srgb,
            );
            manager.select_preset(PresetId::Builtin(BuiltinLook::Mono));
            manager.set_intensity(0.4);
        }

        // The on-disk settings round-trip exactly.
        let store = YamlSettingsStore::new(&settings_path);
        let saved = store.load().unwrap().expect("settings were persisted");
        assert_eq!(saved.preset, PresetId::Builtin(BuiltinLook::Mono));
        assert_eq!(saved.intensity, 0.4);

        // A fresh manager restores and reloads the look.
        let manager = PresetManager::new(
            LookLibrary::new(&looks),
            Box::new(YamlSettingsStore::new(&settings_path)),
            ColorSpace::Srgb,
        );
        assert_eq!(manager.current_intensity(), 0.4);
        let transform = manager.current_transform().expect("look restored");
        assert_eq!(transform.apply_rgb([1.0, 1.0, 1.0]), [0.0, 0.0, 0.0]);
    }

    /// An imported look persists its source location and is re-resolved on
    /// restart.
    #[test]
    fn test_imported_look_survives_restart() {
        let dir = tempdir().unwrap();
        let looks = dir.path().join("looks");
        std::fs::create_dir(&looks).unwrap();
        let imported = dir.path().join("film.cube");
        std::fs::write(&imported, INVERT_CUBE).unwrap();
        let settings_path = dir.path().join("lutcam.yaml");

        {
            let manager = PresetManager::new(
                LookLibrary::new(&looks),
                Box::new(YamlSettingsStore::new(&settings_path)),
                ColorSpace::Srgb,
            );
            manager.import_look(&imported);
            assert!(manager.current_transform().is_some());
        }

        let manager = PresetManager::new(
            LookLibrary::new(&looks),
            Box::new(YamlSettingsStore::new(&settings_path)),
            ColorSpace::Srgb,
        );
        let settings = manager.settings();
        assert_eq!(settings.preset, PresetId::Imported);
        assert_eq!(settings.imported_path.as_deref(), Some(imported.as_path()));
        assert!(manager.current_transform().is_some());
    }

    /// With no preset selected, stored intensity is irrelevant: frames pass
    /// through untouched.
    #[test]
    fn test_none_preset_is_identity_with_stored_intensity() {
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("lutcam.yaml");

        let store = YamlSettingsStore::new(&settings_path);
        store
            .save(&LookSettings {
                preset: PresetId::None,
                imported_path: None,
                intensity: 0.7,
            })
            .unwrap();

        let manager = PresetManager::new(
            LookLibrary::new(dir.path().join("looks")),
            Box::new(store),
            ColorSpace::Srgb,
        );

        let frame = Frame::filled(4, 4, [0.25, 0.5, 0.75, 1.0]);
        let out = manager.process(&frame);
        assert_eq!(out.data(), frame.data());
    }

    /// Rapid switching: a reload begun under an older selection must not
    /// overwrite the newer selection's result.
    #[test]
    fn test_latest_selection_wins_across_files() {
        let dir = tempdir().unwrap();
        let looks = dir.path().join("looks");
        std::fs::create_dir(&looks).unwrap();
        std::fs::write(looks.join("mono.cube"), INVERT_CUBE).unwrap();
        // fade.cube maps everything to mid gray, distinguishable from mono.
        let mut gray = String::from("LUT_3D_SIZE 2\n");
        for _ in 0..8 {
            gray.push_str("0.5 0.5 0.5\n");
        }
        std::fs::write(looks.join("fade.cube"), gray).unwrap();

        let manager = PresetManager::new(
            LookLibrary::new(&looks),
            Box::new(YamlSettingsStore::new(dir.path().join("lutcam.yaml"))),
            ColorSpace::Srgb,
        );

        manager.select_preset(PresetId::Builtin(BuiltinLook::Mono));
        let stale = manager.begin_reload();
        let stale_result = manager.load_ticket(&stale);

        manager.select_preset(PresetId::Builtin(BuiltinLook::Fade));
        manager.complete_reload(stale, stale_result);

        let transform = manager.current_transform().expect("transform active");
        assert_eq!(transform.apply_rgb([0.0, 0.0, 0.0]), [0.5, 0.5, 0.5]);
    }
}
