//! LUT application command

use crate::ApplyArgs;
use anyhow::{anyhow, bail, Context, Result};
use lutcam_core::ColorSpace;
use lutcam_lut::{cube, ColorCubeTransform};
use lutcam_ops::blend;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    let ext = args
        .lut
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != "cube" {
        bail!("Unsupported LUT format: .{}", ext);
    }

    let colorspace: ColorSpace = args.colorspace.parse().map_err(|e: String| anyhow!(e))?;
    let intensity = args.intensity.clamp(0.0, 1.0);

    if verbose {
        println!(
            "Applying LUT {} to {} at intensity {}",
            args.lut.display(),
            args.input.display(),
            intensity
        );
    }

    let frame = super::load_frame(&args.input)?;

    let result = if intensity <= blend::MIN_VISIBLE_INTENSITY {
        // No visible effect; skip the transform entirely.
        frame.clone()
    } else {
        let lattice = cube::read(&args.lut)
            .with_context(|| format!("loading {}", args.lut.display()))?;
        let transform =
            ColorCubeTransform::build(&lattice, colorspace).context("building color cube")?;
        let graded = transform.apply(&frame);
        blend::blend(&frame, &graded, intensity)?
    };

    super::save_frame(&args.output, &result)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
