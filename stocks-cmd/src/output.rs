//! Plain-text and JSON rendering of options and stock records.

use stocks_core::chart::table_columns;
use stocks_core::StockRecord;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Industry and symbol options, one block each.
pub fn format_options(industries: &[String], symbols: &[String]) -> String {
    let mut out = String::new();
    push_block(&mut out, "Industries", industries);
    out.push('\n');
    push_block(&mut out, "Symbols", symbols);
    out
}

fn push_block(out: &mut String, title: &str, values: &[String]) {
    out.push_str(&format!("{} ({}):\n", title, values.len()));
    for value in values {
        out.push_str(&format!("  {}\n", value));
    }
}

/// Table of every field the records carry, followed by a record count.
pub fn format_table(stocks: &[StockRecord]) -> String {
    if stocks.is_empty() {
        return "No stocks match.".to_string();
    }

    let columns = table_columns(stocks);
    let mut builder = Builder::default();
    builder.push_record(columns.iter().cloned());
    for stock in stocks {
        builder.push_record(columns.iter().map(|c| stock.display_field(c)));
    }

    format!(
        "{}\n{} stocks",
        builder.build().with(Style::rounded()),
        stocks.len()
    )
}

/// Records as a pretty-printed JSON array.
pub fn format_json(stocks: &[StockRecord]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(stocks)?)
}
