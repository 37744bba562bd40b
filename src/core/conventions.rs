//! Fixed names the generator relies on.
//!
//! Nothing in the API surface declares a method's calling convention. It is
//! inferred from these names, so they are kept in one place.

/// Package path of the GA compute API types.
pub const GA_PACKAGE: &str = "google.golang.org/api/compute/v1";
/// Package path of the alpha compute API types.
pub const ALPHA_PACKAGE: &str = "google.golang.org/api/compute/v0.alpha";
/// Package path of the beta compute API types.
pub const BETA_PACKAGE: &str = "google.golang.org/api/compute/v0.beta";

/// Path segment after which a package path is vendored.
pub const VENDOR_SEGMENT: &str = "vendor";

/// Suffix of the pending call builder type returned by every API method.
pub const CALL_SUFFIX: &str = "Call";
/// Blocking execute method on a call builder.
pub const EXECUTE_METHOD: &str = "Do";
/// Page iteration method on a call builder.
pub const PAGES_METHOD: &str = "Pages";
/// Field of a list type holding one page of items.
pub const ITEMS_FIELD: &str = "Items";

/// Result type name of long running methods.
pub const OPERATION_TYPE: &str = "Operation";
/// Name of the built-in error type.
pub const ERROR_TYPE: &str = "error";
/// Name of the built-in string type.
pub const STRING_TYPE: &str = "string";

/// Parameter types prepended to every emitted signature.
pub const CONTEXT_TYPE: &str = "context.Context";
pub const KEY_TYPE: &str = "*meta.Key";
/// Parameter type appended to paged signatures.
pub const FILTER_TYPE: &str = "*filter.F";

pub const HOOK_SUFFIX: &str = "Hook";
pub const MOCK_PREFIX: &str = "Mock";
