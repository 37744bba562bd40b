use serde::{Deserialize, Serialize};
use std::fmt;

use super::conventions::{ALPHA_PACKAGE, BETA_PACKAGE, GA_PACKAGE};

/// Calling convention of an API method, inferred from its signature shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    /// Long running method that returns an operation handle.
    Operation,
    /// Method that immediately returns some data.
    Get,
    /// Method that returns a paged set of data.
    Paged,
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operation => write!(f, "operation"),
            Self::Get => write!(f, "get"),
            Self::Paged => write!(f, "paged"),
        }
    }
}

/// How a resource is addressed. Determines how many leading parameters of a
/// method are key coordinates rather than caller-supplied arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Zonal,
    Regional,
    Global,
}

impl KeyType {
    /// Number of leading parameters (receiver included) consumed by the key.
    pub const fn args_skip(self) -> usize {
        match self {
            Self::Zonal | Self::Regional => 4,
            Self::Global => 3,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zonal => write!(f, "Zonal"),
            Self::Regional => write!(f, "Regional"),
            Self::Global => write!(f, "Global"),
        }
    }
}

/// API version channel. The only namespaces the generator knows how to alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    Ga,
    Alpha,
    Beta,
}

impl ApiVersion {
    pub const ALL: [ApiVersion; 3] = [Self::Ga, Self::Alpha, Self::Beta];

    /// Alias used as the package qualifier in emitted code (`ga.Address`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ga => "ga",
            Self::Alpha => "alpha",
            Self::Beta => "beta",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Ga => "GA",
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
        }
    }

    /// Canonical package path of the version's API types.
    pub const fn package_path(self) -> &'static str {
        match self {
            Self::Ga => GA_PACKAGE,
            Self::Alpha => ALPHA_PACKAGE,
            Self::Beta => BETA_PACKAGE,
        }
    }

    /// Exact match against the canonical package paths.
    pub fn from_package_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.package_path() == path)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
