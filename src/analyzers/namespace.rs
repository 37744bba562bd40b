//! Package path to emitted-code alias mapping.

use crate::core::conventions::VENDOR_SEGMENT;
use crate::core::{ApiVersion, Error, Result};

/// Drop everything up to and including the first `vendor` path segment.
pub fn strip_vendor_prefix(package: &str) -> &str {
    let mut offset = 0;
    for segment in package.split('/') {
        offset += segment.len() + 1;
        if segment == VENDOR_SEGMENT {
            return package.get(offset..).unwrap_or("");
        }
    }
    package
}

/// Resolve a package path to its API version.
pub fn resolve_version(package: &str) -> Result<ApiVersion> {
    ApiVersion::from_package_path(strip_vendor_prefix(package)).ok_or_else(|| {
        Error::UnknownNamespace {
            package: package.to_string(),
        }
    })
}

/// Qualifier to put in front of a type name in emitted code: `""` for
/// built-in types, `"ga."`, `"alpha."` or `"beta."` otherwise.
pub fn normalize_package(package: &str) -> Result<String> {
    if package.is_empty() {
        return Ok(String::new());
    }
    resolve_version(package).map(|version| format!("{}.", version.as_str()))
}
