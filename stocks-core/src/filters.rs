//! Dropdown options and the filtered view, derived from the fetched records.
//!
//! Everything here is a pure function of its inputs. An empty selection
//! means "All" and matches every record.

use crate::models::{StockRecord, INDUSTRY_FIELD, SYMBOL_FIELD};
use std::collections::HashSet;

/// Unique non-empty values of `key`, in order of first appearance.
pub fn unique_values<'a, I>(records: I, key: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a StockRecord>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(|record| record.field(key))
        .filter(|value| !value.is_empty() && seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Options for the industry dropdown: every industry in the full list.
pub fn industries(stocks: &[StockRecord]) -> Vec<String> {
    unique_values(stocks, INDUSTRY_FIELD)
}

/// Options for the symbol dropdown, narrowed to `selected_industry` when set.
pub fn symbols(stocks: &[StockRecord], selected_industry: &str) -> Vec<String> {
    unique_values(
        stocks
            .iter()
            .filter(|stock| selected_industry.is_empty() || stock.industry() == selected_industry),
        SYMBOL_FIELD,
    )
}

/// Whether a record passes both selections.
pub fn matches(stock: &StockRecord, industry: &str, symbol: &str) -> bool {
    (industry.is_empty() || stock.industry() == industry)
        && (symbol.is_empty() || stock.symbol() == symbol)
}

/// Records passing both selections, in fetched order.
pub fn filter_stocks(stocks: &[StockRecord], industry: &str, symbol: &str) -> Vec<StockRecord> {
    stocks
        .iter()
        .filter(|stock| matches(stock, industry, symbol))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Three records from two industries.
    fn sample_stocks() -> Vec<StockRecord> {
        vec![
            StockRecord::with_industry_symbol("Tech", "AAA"),
            StockRecord::with_industry_symbol("Tech", "BBB"),
            StockRecord::with_industry_symbol("Health", "CCC"),
        ]
    }

    fn as_set(values: &[String]) -> HashSet<&str> {
        values.iter().map(String::as_str).collect()
    }

    #[test]
    fn industries_are_unique_and_non_empty() {
        let mut stocks = sample_stocks();
        stocks.push(StockRecord::with_industry_symbol("", "DDD"));
        stocks.push(StockRecord::try_from(json!({ "symbol": "EEE" })).unwrap());

        let industries = industries(&stocks);
        assert_eq!(industries, vec!["Tech", "Health"]);
    }

    #[test]
    fn symbols_without_industry_cover_everything() {
        let symbols = symbols(&sample_stocks(), "");
        assert_eq!(as_set(&symbols), HashSet::from(["AAA", "BBB", "CCC"]));
    }

    #[test]
    fn symbols_narrow_to_selected_industry() {
        let symbols = symbols(&sample_stocks(), "Tech");
        assert_eq!(symbols, vec!["AAA", "BBB"]);
    }

    #[test]
    fn symbols_for_unknown_industry_are_empty() {
        assert!(symbols(&sample_stocks(), "Energy").is_empty());
    }

    #[test]
    fn duplicate_symbols_collapse() {
        let stocks = vec![
            StockRecord::with_industry_symbol("Tech", "AAA"),
            StockRecord::with_industry_symbol("Tech", "AAA"),
        ];
        assert_eq!(symbols(&stocks, ""), vec!["AAA"]);
    }

    #[test]
    fn no_selection_passes_everything_through() {
        let stocks = sample_stocks();
        assert_eq!(filter_stocks(&stocks, "", ""), stocks);
    }

    #[test]
    fn filter_by_industry() {
        let filtered = filter_stocks(&sample_stocks(), "Tech", "");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.industry() == "Tech"));
    }

    #[test]
    fn filter_by_symbol_only() {
        let filtered = filter_stocks(&sample_stocks(), "", "CCC");
        assert_eq!(filtered, vec![StockRecord::with_industry_symbol("Health", "CCC")]);
    }

    #[test]
    fn inconsistent_selection_yields_nothing() {
        assert!(filter_stocks(&sample_stocks(), "Tech", "CCC").is_empty());
    }

    #[test]
    fn filtered_is_subset_of_input_for_every_selection() {
        let stocks = sample_stocks();
        let industries = ["", "Tech", "Health", "Energy"];
        let symbols = ["", "AAA", "BBB", "CCC", "ZZZ"];
        for industry in industries {
            for symbol in symbols {
                let filtered = filter_stocks(&stocks, industry, symbol);
                assert!(filtered.iter().all(|s| stocks.contains(s)));
                assert!(filtered.iter().all(|s| matches(s, industry, symbol)));
                let expected = stocks.iter().filter(|s| matches(s, industry, symbol)).count();
                assert_eq!(filtered.len(), expected);
            }
        }
    }

    #[test]
    fn recomputing_is_idempotent() {
        let stocks = sample_stocks();
        assert_eq!(industries(&stocks), industries(&stocks));
        assert_eq!(symbols(&stocks, "Tech"), symbols(&stocks, "Tech"));
        assert_eq!(
            filter_stocks(&stocks, "Tech", "AAA"),
            filter_stocks(&stocks, "Tech", "AAA")
        );
    }
}
