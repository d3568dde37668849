//! Dashboard state container.
//!
//! `DashboardState` owns the fetched records and the two filter selections.
//! Callers mutate it only through the load and selection operations below;
//! dropdown options and the filtered view are recomputed on every read so
//! they can never drift from the records they came from.

use crate::error::Result;
use crate::filters;
use crate::models::StockRecord;

/// Progress of the single stock load a dashboard performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Mounted, request not yet issued
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Request settled, successfully or not
    Loaded,
}

/// Fetched records plus the industry and symbol selections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    stocks: Vec<StockRecord>,
    selected_industry: String,
    selected_symbol: String,
    phase: LoadPhase,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the load as started.
    ///
    /// Returns `false` if a load was already started, in which case nothing
    /// changes; a dashboard loads exactly once.
    pub fn begin_load(&mut self) -> bool {
        if self.phase != LoadPhase::Idle {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Settle the load. Any error leaves the dashboard with no records.
    pub fn finish_load(&mut self, result: Result<Vec<StockRecord>>) {
        match result {
            Ok(stocks) => {
                log::info!("Loaded {} stock records", stocks.len());
                self.stocks = stocks;
            }
            Err(e) => {
                log::warn!("Stock data unavailable: {}", e);
                self.stocks = Vec::new();
            }
        }
        self.phase = LoadPhase::Loaded;
    }

    /// Change the industry filter. The symbol selection is left as is, even
    /// if no record of the new industry carries it.
    pub fn select_industry(&mut self, industry: impl Into<String>) {
        self.selected_industry = industry.into();
    }

    pub fn select_symbol(&mut self, symbol: impl Into<String>) {
        self.selected_symbol = symbol.into();
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// True until the load has settled, including before it was issued.
    pub fn is_loading(&self) -> bool {
        self.phase != LoadPhase::Loaded
    }

    pub fn stocks(&self) -> &[StockRecord] {
        &self.stocks
    }

    pub fn selected_industry(&self) -> &str {
        &self.selected_industry
    }

    pub fn selected_symbol(&self) -> &str {
        &self.selected_symbol
    }

    /// Industry dropdown options.
    pub fn industries(&self) -> Vec<String> {
        filters::industries(&self.stocks)
    }

    /// Symbol dropdown options for the current industry.
    pub fn symbols(&self) -> Vec<String> {
        filters::symbols(&self.stocks, &self.selected_industry)
    }

    /// Records passed to the chart.
    pub fn filtered(&self) -> Vec<StockRecord> {
        filters::filter_stocks(&self.stocks, &self.selected_industry, &self.selected_symbol)
    }
}
