mod core;
mod loader;

pub use self::core::{AnalysisConfig, CallmetaConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_in, parse_config,
    CONFIG_FILE_NAME,
};
