//! Logging and crash reporting.
//!
//! - **Tracing**: `tracing` events on stderr, filtered by `RUST_LOG` or `-v`
//! - **Context Tracking**: thread-local phase and method for crash reports
//! - **Panic Hook**: structured crash report using that context
//!
//! ```ignore
//! use callmeta::observability::{install_panic_hook, init_tracing, set_phase, AnalysisPhase};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(0);
//!     let _phase = set_phase(AnalysisPhase::Classification);
//!     // ...
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, get_progress, increment_processed, set_current_method, set_phase,
    set_progress, AnalysisContext, AnalysisPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::init_tracing;
