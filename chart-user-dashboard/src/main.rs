//! User Stock Dashboard
//!
//! Shows the stocks known to the backend with two filters in a side panel:
//! industry, and symbol within that industry. The filtered records are drawn
//! as a bar chart with a record table below it.
//!
//! Data flow:
//! 1. On mount, the app issues a single GET to `/admin/api/stocks`.
//! 2. A usable response replaces the (empty) stock list; anything else
//!    leaves it empty. The loading indicator clears either way.
//! 3. The dropdown options and the filtered records are derived from the
//!    list and the current selections on every render.

use dioxus::prelude::*;
use stocks_chart_ui::api;
use stocks_chart_ui::components::{LoadingSpinner, SidePanel, StocksChart};
use stocks_chart_ui::state::AppState;
use stocks_core::response::STOCKS_ENDPOINT;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("user-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the stock list once. The task belongs to this component and is
    // cancelled with it, so a late response never lands in a dropped view.
    use_future(move || async move {
        if !state.begin_load() {
            return;
        }
        log::info!("Fetching stock list from {}", STOCKS_ENDPOINT);
        let result = api::fetch_stocks(STOCKS_ENDPOINT).await;
        state.finish_load(result);
    });

    let filtered = state.filtered();
    let loading = state.is_loading();

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; background: #fafbfc; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            SidePanel {}

            div {
                style: "flex: 1; padding: 32px; min-width: 0;",
                StocksChart { stocks: filtered }
                if loading {
                    LoadingSpinner {}
                }
            }
        }
    }
}
