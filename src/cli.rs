use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pipeweave")]
#[command(about = "Composable transform pipelines with typed, recoverable errors", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an image filter pipeline and apply it to a source image
    Filters {
        /// Source image width in pixels
        #[arg(long, default_value = "640")]
        width: u32,

        /// Source image height in pixels
        #[arg(long, default_value = "480")]
        height: u32,

        /// Gaussian blur radius, applied first
        #[arg(long = "blur", default_value = "5.0")]
        blur_radius: f64,

        /// Overlay color as `r,g,b,a` components in 0..=1, applied second
        #[arg(long, default_value = "1,0,0,0.2")]
        overlay: String,

        /// Pixel format tag for the source image
        #[arg(long, default_value = "rgba8")]
        format: String,

        /// Print the resulting image as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Look up the population of a country's capital
    Lookup {
        /// Country to look up
        country: String,

        /// Path to a gazetteer JSON file (defaults to the built-in sample)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Fallback population (in thousands) reported when a stage misses
        #[arg(long, default_value = "0")]
        fallback: u64,
    },
}
