//! LUT information command

use crate::InfoArgs;
use anyhow::{Context, Result};
use lutcam_lut::cube;

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.lut {
        let lattice =
            cube::read(path).with_context(|| format!("loading {}", path.display()))?;

        let n = lattice.dimension();
        println!(
            "{}: 3D LUT, {}x{}x{}, {} entries",
            path.display(),
            n,
            n,
            n,
            lattice.entries().len()
        );

        if verbose {
            let mut min = f32::INFINITY;
            let mut max = f32::NEG_INFINITY;
            for rgb in lattice.entries() {
                for &v in rgb {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
            println!("  value range: [{:.6}, {:.6}]", min, max);
            println!("  first entry: {:?}", lattice.entries()[0]);
            println!("  last entry:  {:?}", lattice.entries()[lattice.entries().len() - 1]);
        }
    }

    Ok(())
}
