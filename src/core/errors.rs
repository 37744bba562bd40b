//! Shared error types for the analyzer
//!
//! Every variant is a generator-configuration error: the catalog describes a
//! method, type or file the generator does not know how to handle. None of
//! them are recoverable; the run stops at the first one.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for callmeta operations
#[derive(Debug, Error)]
pub enum Error {
    /// The method declares fewer parameters than its key type reserves
    #[error("method {service:?}.{method:?}, arity = {arity} which is less than required (< {required})")]
    Arity {
        service: String,
        method: String,
        arity: usize,
        required: usize,
    },

    /// A parameter inside the key-addressing region is not a plain string
    #[error("method {service:?}.{method:?}: skipped args can only be strings (arg {index} is {found})")]
    SkippedArgNotString {
        service: String,
        method: String,
        index: usize,
        found: String,
    },

    /// The method does not return a single `*xxxCall`
    #[error("method {service:?}.{method:?}: generator only supports methods returning an *xxxCall object")]
    UnsupportedReturn { service: String, method: String },

    /// The call builder has no execute method
    #[error("method {service:?}.{method:?}: return type {call_type:?} does not have a Do() method")]
    MissingExecute {
        service: String,
        method: String,
        call_type: String,
    },

    /// The execute method does not return exactly two values
    #[error("method {service:?}.{method:?}: {call_type:?} Do() return type is not handled by the generator ({arity} results)")]
    UnhandledExecuteArity {
        service: String,
        method: String,
        call_type: String,
        arity: usize,
    },

    /// The first execute result is not a pointer
    #[error("method {service:?}.{method:?}: return type {call_type:?} of Do() = S, _; S must be pointer type ({found})")]
    ExecuteResultNotPointer {
        service: String,
        method: String,
        call_type: String,
        found: String,
    },

    /// The second execute result is not `error`
    #[error("method {service:?}.{method:?}: return type {call_type:?} of Do() = S, T; T must be 'error'")]
    ExecuteErrorNotError {
        service: String,
        method: String,
        call_type: String,
    },

    /// A paged list type has no items field
    #[error("method {service:?}.{method:?}: paged return type {list_type:?} does not have a .Items field")]
    MissingItemsField {
        service: String,
        method: String,
        list_type: String,
    },

    /// A paged list type's items field is not `[]*T`
    #[error("method {service:?}.{method:?}: paged return type {list_type:?}.Items is not an array of pointers")]
    ItemsNotPointerSlice {
        service: String,
        method: String,
        list_type: String,
    },

    /// The package path is not one of the known API version channels
    #[error("unhandled package {package:?}")]
    UnknownNamespace { package: String },

    /// A residual parameter's package is not one of the known API version channels
    #[error("method {service:?}.{method:?}: arg{index} has unhandled package {package:?}")]
    UnhandledArgPackage {
        service: String,
        method: String,
        index: usize,
        package: String,
    },

    /// A configured method name does not exist on the service type
    #[error("method {method:?} was not found in type {type_name:?}")]
    MethodNotFound { method: String, type_name: String },

    /// A type expression in the catalog could not be parsed
    #[error("invalid type expression {expr:?}: {reason}")]
    InvalidTypeExpr { expr: String, reason: String },

    /// Catalog structure errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create an invalid type expression error
    pub fn invalid_type_expr(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTypeExpr {
            expr: expr.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
