//! CLI command implementations.
//!
//! - **analyze**: classify every catalog service method and report the
//!   rendered signature fragments
//! - **init**: write a default `.callmeta.toml`

pub mod analyze;
pub mod init;

pub use analyze::{analyze_services, handle_analyze, select_services, AnalyzeConfig};
pub use init::init_config;
