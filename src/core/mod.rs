pub mod conventions;
pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{ApiVersion, KeyType, MethodKind};
