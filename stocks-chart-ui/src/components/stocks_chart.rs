//! Chart for the filtered stock records.
//!
//! Draws a D3.js bar chart of record counts (per industry, or per symbol
//! when only one industry is left) and lists the records underneath.

use crate::components::{ChartContainer, StocksTable};
use crate::js_bridge;
use dioxus::prelude::*;
use stocks_core::chart::{category_counts, grouping_for};
use stocks_core::StockRecord;

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "user-dashboard-stocks-chart";

#[derive(Props, Clone, PartialEq)]
pub struct StocksChartProps {
    /// Records to draw, in display order
    pub stocks: Vec<StockRecord>,
}

#[component]
pub fn StocksChart(props: StocksChartProps) -> Element {
    use_hook(js_bridge::init_charts);

    use_effect(use_reactive((&props.stocks,), |(stocks,)| {
        render_chart(&stocks);
    }));

    rsx! {
        div {
            style: "background: #fff; border: 1px solid #eee; border-radius: 4px; padding: 16px;",
            ChartContainer {
                id: CHART_ID.to_string(),
                min_height: 320,
            }
            if props.stocks.is_empty() {
                p {
                    style: "margin: 8px 0; color: #999; font-size: 13px;",
                    "No stock data"
                }
            } else {
                StocksTable { stocks: props.stocks.clone() }
            }
        }
    }
}

fn render_chart(stocks: &[StockRecord]) {
    if stocks.is_empty() {
        js_bridge::destroy_chart(CHART_ID);
        return;
    }

    let grouping = grouping_for(stocks);
    let counts = category_counts(stocks, grouping);
    log::info!(
        "Rendering stock chart: {} records in {} bars by {}",
        stocks.len(),
        counts.len(),
        grouping.field()
    );

    let data_json = serde_json::to_string(&counts).unwrap_or_default();
    let config_json = serde_json::to_string(&serde_json::json!({
        "title": format!("Stocks by {}", grouping.label()),
        "xAxisLabel": grouping.label(),
        "yAxisLabel": "Records",
        "barColor": "#1565C0",
    }))
    .unwrap_or_default();

    js_bridge::render_bar_chart(CHART_ID, &data_json, &config_json);
}
