use anyhow::Result;
use callmeta::cli::{Cli, Commands};
use callmeta::commands::{self, AnalyzeConfig};
use callmeta::config::{self, CallmetaConfig};
use callmeta::observability::{init_tracing, install_panic_hook};
use clap::Parser;
use std::path::Path;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            catalog,
            format,
            output,
            services,
            config,
            no_parallel,
            verbosity,
        } => {
            init_tracing(verbosity);
            let file_config = load_config(config.as_deref())?;
            commands::handle_analyze(AnalyzeConfig {
                catalog,
                format: format.unwrap_or(file_config.output.default_format),
                output,
                services,
                parallel: file_config.analysis.parallel && !no_parallel,
            })
        }
        Commands::Init { force } => {
            init_tracing(0);
            commands::init_config(force)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<CallmetaConfig> {
    match explicit {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}
