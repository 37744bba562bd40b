//! Thread-local context tracking for crash reports.
//!
//! Records which phase of the run is active and which service method is being
//! classified. Each thread has its own context (rayon workers included);
//! progress is a pair of global atomic counters.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

static SERVICES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static SERVICES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

/// Snapshot of what the analyzer was doing.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    /// `Service.Method` currently being classified
    pub current_method: Option<String>,
}

impl AnalysisContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_method: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Reading and indexing the type catalog
    CatalogLoading,
    /// Classifying service methods
    Classification,
    /// Rendering signature fragments
    Rendering,
    /// Writing the report
    OutputGeneration,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CatalogLoading => write!(f, "catalog_loading"),
            Self::Classification => write!(f, "classification"),
            Self::Rendering => write!(f, "rendering"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// Restores the previous context when dropped.
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(f: impl FnOnce(&mut AnalysisContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        f(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current phase until the guard drops.
#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

/// Set the method being classified until the guard drops.
#[must_use]
pub fn set_current_method(name: impl Into<String>) -> ContextGuard {
    let name = name.into();
    update(|ctx| ctx.current_method = Some(name))
}

pub fn set_progress(processed: usize, total: usize) {
    SERVICES_PROCESSED.store(processed, Ordering::Relaxed);
    SERVICES_TOTAL.store(total, Ordering::Relaxed);
}

/// Safe to call from parallel iterators.
pub fn increment_processed() {
    SERVICES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// (processed, total) services.
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        SERVICES_PROCESSED.load(Ordering::Relaxed),
        SERVICES_TOTAL.load(Ordering::Relaxed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_guard_restores_previous() {
        let _phase1 = set_phase(AnalysisPhase::CatalogLoading);
        {
            let _phase2 = set_phase(AnalysisPhase::Classification);
            let _method = set_current_method("Addresses.Move");
            let ctx = get_current_context();
            assert_eq!(ctx.phase, Some(AnalysisPhase::Classification));
            assert_eq!(ctx.current_method.as_deref(), Some("Addresses.Move"));
        }

        let ctx = get_current_context();
        assert_eq!(ctx.phase, Some(AnalysisPhase::CatalogLoading));
        assert_eq!(ctx.current_method, None);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(AnalysisPhase::OutputGeneration.to_string(), "output_generation");
    }
}
