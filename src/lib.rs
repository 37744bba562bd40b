// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod introspect;
pub mod io;
pub mod observability;
pub mod render;

// Re-export commonly used types
pub use crate::core::{ApiVersion, Error, KeyType, MethodKind, Result};

pub use crate::analyzers::{classify, Arg, Classification, Method, ServiceInfo};

pub use crate::introspect::{MethodSignature, TypeCatalog, TypeIntrospector, TypeRef};

pub use crate::render::MethodReport;
