//! Preset-driven grading command.
//!
//! Drives the same preset manager the capture pipeline uses: selection and
//! intensity changes persist to the settings file, so a plain
//! `lutcam grade in.png out.png` re-applies whatever look was active last.

use crate::GradeArgs;
use anyhow::{anyhow, Result};
use lutcam_core::ColorSpace;
use lutcam_presets::{BuiltinLook, LookLibrary, PresetId, PresetManager, YamlSettingsStore};

pub fn run(args: GradeArgs, verbose: bool) -> Result<()> {
    let colorspace: ColorSpace = args.colorspace.parse().map_err(|e: String| anyhow!(e))?;

    let store = YamlSettingsStore::new(&args.settings);
    let manager = PresetManager::new(LookLibrary::new(&args.looks), Box::new(store), colorspace);

    if let Some(name) = &args.preset {
        manager.select_preset(parse_preset(name)?);
    }
    if let Some(path) = &args.import {
        manager.import_look(path);
    }
    if let Some(value) = args.intensity {
        manager.set_intensity(value);
    }

    let settings = manager.settings();
    if verbose {
        println!(
            "Grading {} with preset {:?} at intensity {}",
            args.input.display(),
            settings.preset,
            settings.intensity
        );
        if manager.current_transform().is_none() && settings.preset != PresetId::None {
            println!("warning: preset failed to load; passing frame through");
        }
    }

    let frame = super::load_frame(&args.input)?;
    let graded = manager.process(&frame);
    super::save_frame(&args.output, &graded)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}

fn parse_preset(name: &str) -> Result<PresetId> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "none" => PresetId::None,
        "vivid" => PresetId::Builtin(BuiltinLook::Vivid),
        "mono" => PresetId::Builtin(BuiltinLook::Mono),
        "fade" => PresetId::Builtin(BuiltinLook::Fade),
        "imported" => PresetId::Imported,
        other => return Err(anyhow!("unknown preset: {}", other)),
    })
}
