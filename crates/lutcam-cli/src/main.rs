//! lutcam - Cube LUT grading CLI
//!
//! Exercises the lutcam pipeline end to end on PNG frames: parse a .cube
//! file, build the color-cube transform, apply it, blend by intensity.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "lutcam")]
#[command(author, version, about = "Cube LUT grading for camera frames")]
#[command(long_about = "
Applies .cube 3D LUTs to PNG frames with adjustable blend intensity.

Examples:
  lutcam info look.cube                 # Show LUT info
  lutcam apply in.png out.png -l look.cube
  lutcam apply in.png out.png -l look.cube --intensity 0.6
  lutcam apply in.png out.png -l look.cube --colorspace display-p3
  lutcam grade in.png out.png --looks looks/ --preset mono
  lutcam grade in.png out.png --import film.cube --intensity 0.8
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a LUT to a frame
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Display LUT information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Grade a frame through the persisted preset selection
    #[command(visible_alias = "g")]
    Grade(GradeArgs),
}

#[derive(Args)]
struct ApplyArgs {
    /// Input frame (PNG)
    input: PathBuf,

    /// Output frame (PNG)
    output: PathBuf,

    /// LUT file (.cube)
    #[arg(short, long)]
    lut: PathBuf,

    /// Blend intensity (0.0-1.0)
    #[arg(long, default_value = "1.0")]
    intensity: f32,

    /// Frame color space: srgb, display-p3, linear
    #[arg(long, default_value = "srgb")]
    colorspace: String,
}

#[derive(Args)]
struct InfoArgs {
    /// LUT file(s) (.cube)
    #[arg(required = true)]
    lut: Vec<PathBuf>,
}

#[derive(Args)]
struct GradeArgs {
    /// Input frame (PNG)
    input: PathBuf,

    /// Output frame (PNG)
    output: PathBuf,

    /// Look library directory holding the bundled .cube files
    #[arg(long, default_value = "looks")]
    looks: PathBuf,

    /// Persisted settings file
    #[arg(long, default_value = "lutcam.yaml")]
    settings: PathBuf,

    /// Select a preset first: none, vivid, mono, fade, imported
    #[arg(short, long)]
    preset: Option<String>,

    /// Import a .cube file and select it
    #[arg(long)]
    import: Option<PathBuf>,

    /// Set the blend intensity first (0.0-1.0)
    #[arg(long)]
    intensity: Option<f32>,

    /// Frame color space: srgb, display-p3, linear
    #[arg(long, default_value = "srgb")]
    colorspace: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Grade(args) => commands::grade::run(args, cli.verbose),
    }
}
