//! Stock record model, response decoding and dashboard filter state.
//!
//! This crate holds everything the user dashboard computes, independent of
//! the Dioxus frontend, so it can be shared with the native CLI and tested
//! without a browser.
//!
//! # Architecture
//!
//! - [`models`]: `StockRecord`, a JSON object with typed accessors for the
//!   `industry` and `symbol` fields
//! - [`response`]: decoding of the `/admin/api/stocks` response body
//! - [`filters`]: pure functions deriving dropdown options and the filtered view
//! - [`chart`]: bar series and table columns for the stock chart
//! - [`state`]: `DashboardState`, the single owner of fetched records and
//!   the two filter selections
//!
//! # Usage
//!
//! ```rust
//! use stocks_core::response::decode_stocks_response;
//! use stocks_core::state::DashboardState;
//!
//! let body = r#"{"success": true, "stocks": [
//!     {"industry": "Tech", "symbol": "AAA"},
//!     {"industry": "Health", "symbol": "CCC"}
//! ]}"#;
//!
//! let mut state = DashboardState::new();
//! state.begin_load();
//! state.finish_load(decode_stocks_response(200, body));
//! state.select_industry("Tech");
//!
//! assert_eq!(state.industries(), vec!["Tech", "Health"]);
//! assert_eq!(state.filtered().len(), 1);
//! ```

pub mod chart;
pub mod error;
pub mod filters;
pub mod models;
pub mod response;
pub mod state;

pub use error::FetchError;
pub use models::StockRecord;
pub use state::{DashboardState, LoadPhase};
