use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "callmeta")]
#[command(about = "Classify cloud API methods and render wrapper signatures", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every service method in a type catalog
    Analyze {
        /// Catalog file (YAML, or JSON with a .json extension)
        catalog: PathBuf,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only analyze these services
        #[arg(long = "service", value_delimiter = ',')]
        services: Option<Vec<String>>,

        /// Configuration file (defaults to .callmeta.toml lookup)
        #[arg(long, env = "CALLMETA_CONFIG")]
        config: Option<PathBuf>,

        /// Classify services sequentially
        #[arg(long)]
        no_parallel: bool,

        /// Increase log verbosity (-v info, -vv debug)
        #[arg(short, long, action = ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default .callmeta.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
