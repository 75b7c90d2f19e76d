//! One-shot deferred load guard
//!
//! The page schedules the mock aggregates behind a timer. The timer callback
//! and the teardown hook each hold a clone of the same [`DeferredLoad`];
//! whichever runs first decides the outcome, and the other becomes a no-op.

use std::cell::Cell;
use std::rc::Rc;

/// Lifecycle of a deferred load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Pending,
    Completed,
    Cancelled,
}

/// Shared handle to a single pending update
#[derive(Debug, Clone)]
pub struct DeferredLoad {
    phase: Rc<Cell<LoadPhase>>,
}

impl DeferredLoad {
    pub fn new() -> Self {
        Self {
            phase: Rc::new(Cell::new(LoadPhase::Pending)),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase.get()
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == LoadPhase::Pending
    }

    /// Suppress the update. Returns `true` if a pending load was cancelled.
    pub fn cancel(&self) -> bool {
        if self.is_pending() {
            self.phase.set(LoadPhase::Cancelled);
            true
        } else {
            false
        }
    }

    /// Run `apply` if the load is still pending. Returns whether it ran.
    pub fn complete<F: FnOnce()>(&self, apply: F) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.phase.set(LoadPhase::Completed);
        apply();
        true
    }
}

impl Default for DeferredLoad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{DashboardData, DashboardPage};

    #[test]
    fn test_complete_applies_once() {
        let load = DeferredLoad::new();
        let timer = load.clone();
        let mut page = DashboardPage::new();

        assert!(timer.complete(|| page.finish_loading(DashboardData::mock())));
        assert!(!page.is_loading);
        assert_eq!(page.data, DashboardData::mock());
        assert_eq!(load.phase(), LoadPhase::Completed);

        let mut ran = false;
        assert!(!timer.complete(|| ran = true));
        assert!(!ran);
    }

    #[test]
    fn test_cancel_before_timer_suppresses_update() {
        let load = DeferredLoad::new();
        let timer = load.clone();
        let mut page = DashboardPage::new();

        assert!(load.cancel());
        assert!(!timer.complete(|| page.finish_loading(DashboardData::mock())));
        assert!(page.is_loading);
        assert_eq!(page.data, DashboardData::default());
        assert_eq!(timer.phase(), LoadPhase::Cancelled);
    }

    #[test]
    fn test_cancel_after_completion_is_noop() {
        let load = DeferredLoad::new();
        assert!(load.complete(|| {}));
        assert!(!load.cancel());
        assert_eq!(load.phase(), LoadPhase::Completed);
    }
}
