//! Signature analysis: type descriptors, namespace aliasing, method
//! classification and argument extraction.

pub mod arg;
pub mod classifier;
pub mod method;
pub mod namespace;
pub mod service;

pub use arg::Arg;
pub use classifier::{classify, Classification};
pub use method::Method;
pub use namespace::{normalize_package, strip_vendor_prefix};
pub use service::ServiceInfo;
