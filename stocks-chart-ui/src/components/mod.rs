//! Reusable Dioxus RSX components for the stock dashboard.

mod chart_container;
mod filter_select;
mod industry_selector;
mod loading_spinner;
mod side_panel;
mod stocks_chart;
mod stocks_table;
mod symbol_selector;

pub use chart_container::ChartContainer;
pub use filter_select::FilterSelect;
pub use industry_selector::IndustrySelector;
pub use loading_spinner::LoadingSpinner;
pub use side_panel::SidePanel;
pub use stocks_chart::StocksChart;
pub use stocks_table::StocksTable;
pub use symbol_selector::SymbolSelector;
