//! Application state managed via Dioxus context.
//!
//! `AppState` wraps a single `DashboardState` in a Signal and is provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The signal is private, so the only way to
//! change the dashboard is through the methods below.

use dioxus::prelude::*;
use stocks_core::{DashboardState, FetchError, StockRecord};

/// Shared state for the user dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    dashboard: Signal<DashboardState>,
}

impl AppState {
    /// Create a new AppState with nothing loaded and no filters selected.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(DashboardState::new()),
        }
    }

    /// See [`DashboardState::begin_load`].
    pub fn begin_load(&mut self) -> bool {
        self.dashboard.write().begin_load()
    }

    pub fn finish_load(&mut self, result: Result<Vec<StockRecord>, FetchError>) {
        self.dashboard.write().finish_load(result);
    }

    pub fn select_industry(&mut self, industry: String) {
        self.dashboard.write().select_industry(industry);
    }

    pub fn select_symbol(&mut self, symbol: String) {
        self.dashboard.write().select_symbol(symbol);
    }

    pub fn is_loading(&self) -> bool {
        self.dashboard.read().is_loading()
    }

    pub fn selected_industry(&self) -> String {
        self.dashboard.read().selected_industry().to_string()
    }

    pub fn selected_symbol(&self) -> String {
        self.dashboard.read().selected_symbol().to_string()
    }

    pub fn industries(&self) -> Vec<String> {
        self.dashboard.read().industries()
    }

    pub fn symbols(&self) -> Vec<String> {
        self.dashboard.read().symbols()
    }

    /// Records for the chart under the current selections.
    pub fn filtered(&self) -> Vec<StockRecord> {
        self.dashboard.read().filtered()
    }
}
