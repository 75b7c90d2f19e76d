//! Page State Management
//!
//! The dashboard page owns one [`DashboardPage`] behind a signal: the
//! loading flag, the selected profile and the aggregate counters.
//!
//! Children receive these through props; the state is not put in context.

use gloo_timers::callback::Timeout;
use leptos::*;
use storewatch_shared::{DashboardData, DashboardPage, DeferredLoad, DetailView, MetricCard, Profile};

/// Dashboard page state
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub page: RwSignal<DashboardPage>,
}

impl DashboardState {
    /// Create the initial state: loading, single store, zeroed counters
    pub fn new() -> Self {
        Self {
            page: create_rw_signal(DashboardPage::new()),
        }
    }

    /// True until the mock aggregates are applied
    pub fn is_loading(&self) -> bool {
        self.page.with(|p| p.is_loading)
    }

    pub fn selected_profile(&self) -> Profile {
        self.page.with(|p| p.selected_profile)
    }

    /// Reselecting the active profile leaves the signal untouched, so the
    /// detail view keeps its pager, banner and focus.
    pub fn select_profile(&self, profile: Profile) {
        if self.page.with_untracked(|p| p.selected_profile) == profile {
            return;
        }
        tracing::debug!(?profile, "Profile selected");
        self.page.update(|p| p.select_profile(profile));
    }

    /// Cards for the selected profile
    pub fn cards(&self) -> Vec<MetricCard> {
        self.page.with(|p| p.cards())
    }

    pub fn detail_view(&self) -> Option<DetailView> {
        self.page.with(|p| p.detail_view())
    }

    /// Schedule the mock aggregates after `delay_ms`.
    ///
    /// The returned handle must be cancelled on teardown.
    pub fn schedule_mock_load(&self, delay_ms: u32) -> PendingLoad {
        let load = DeferredLoad::new();
        let guard = load.clone();
        let state = *self;

        let timeout = Timeout::new(delay_ms, move || {
            guard.complete(|| {
                state.page.update(|p| p.finish_loading(DashboardData::mock()));
                tracing::info!("Mock dashboard data applied");
            });
        });

        tracing::debug!(delay_ms, "Mock data load scheduled");

        PendingLoad {
            load,
            timeout: Some(timeout),
        }
    }
}

/// Handle to the scheduled mock load
pub struct PendingLoad {
    load: DeferredLoad,
    timeout: Option<Timeout>,
}

impl PendingLoad {
    /// Stop the timer and suppress the update if it has not run yet
    pub fn cancel(mut self) {
        if self.load.cancel() {
            tracing::debug!("Mock data load cancelled on teardown");
        }
        if let Some(timeout) = self.timeout.take() {
            let _ = timeout.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_reselecting_active_profile_does_not_notify() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        state.page.update(|p| p.finish_loading(DashboardData::mock()));
        state.select_profile(Profile::Multiple);

        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        create_effect(move |_| {
            let _ = state.detail_view();
            counter.set(counter.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        state.select_profile(Profile::Multiple);
        state.select_profile(Profile::Multiple);
        assert_eq!(runs.get(), 1);
        assert_eq!(state.detail_view(), Some(DetailView::StoreChart));

        state.select_profile(Profile::Single);
        assert_eq!(runs.get(), 2);
        assert_eq!(state.detail_view(), Some(DetailView::PlantMap));

        runtime.dispose();
    }
}
