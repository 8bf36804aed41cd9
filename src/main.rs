use anyhow::Result;
use clap::Parser;
use pipeweave::cli::{Cli, Commands};
use pipeweave::commands::{run_filters, run_lookup, FiltersConfig, LookupConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Filters {
            width,
            height,
            blur_radius,
            overlay,
            format,
            json,
        } => run_filters(FiltersConfig {
            width,
            height,
            blur_radius,
            overlay,
            format,
            json,
        }),
        Commands::Lookup {
            country,
            data,
            fallback,
        } => run_lookup(LookupConfig {
            country,
            data,
            fallback,
        }),
    }
}
