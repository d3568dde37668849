//! Series and table layout for the stock chart.
//!
//! The chart draws one bar per category. Categories are industries, unless
//! every record belongs to the same industry, in which case the bars break
//! that industry down by symbol.

use crate::models::{StockRecord, INDUSTRY_FIELD, SYMBOL_FIELD};
use serde::Serialize;
use std::collections::HashMap;

/// Which record field the bars are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartGrouping {
    Industry,
    Symbol,
}

impl ChartGrouping {
    pub fn field(self) -> &'static str {
        match self {
            ChartGrouping::Industry => INDUSTRY_FIELD,
            ChartGrouping::Symbol => SYMBOL_FIELD,
        }
    }

    /// Axis label shown under the bars.
    pub fn label(self) -> &'static str {
        match self {
            ChartGrouping::Industry => "Industry",
            ChartGrouping::Symbol => "Symbol",
        }
    }
}

/// One bar: a category and how many records fall in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Pick the grouping for a set of records.
pub fn grouping_for(stocks: &[StockRecord]) -> ChartGrouping {
    let mut industries = stocks.iter().map(StockRecord::industry);
    match industries.next() {
        Some(first) if !first.is_empty() && industries.all(|i| i == first) => ChartGrouping::Symbol,
        _ => ChartGrouping::Industry,
    }
}

/// Count records per category, in order of first appearance.
///
/// Records with an empty value for the grouping field are left out.
pub fn category_counts(stocks: &[StockRecord], grouping: ChartGrouping) -> Vec<CategoryCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for stock in stocks {
        let label = stock.field(grouping.field());
        if label.is_empty() {
            continue;
        }
        match index.get(label) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label, counts.len());
                counts.push(CategoryCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Column headers for the record table: `symbol` and `industry` first, then
/// every other field any record carries, each listed once.
pub fn table_columns(stocks: &[StockRecord]) -> Vec<String> {
    let mut columns = vec![SYMBOL_FIELD.to_string(), INDUSTRY_FIELD.to_string()];
    for stock in stocks {
        for key in stock.fields().keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_stocks() -> Vec<StockRecord> {
        vec![
            StockRecord::with_industry_symbol("Tech", "AAA"),
            StockRecord::with_industry_symbol("Tech", "BBB"),
            StockRecord::with_industry_symbol("Health", "CCC"),
        ]
    }

    #[test]
    fn mixed_industries_group_by_industry() {
        let stocks = sample_stocks();
        assert_eq!(grouping_for(&stocks), ChartGrouping::Industry);
        assert_eq!(
            category_counts(&stocks, ChartGrouping::Industry),
            vec![
                CategoryCount { label: "Tech".to_string(), count: 2 },
                CategoryCount { label: "Health".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn single_industry_groups_by_symbol() {
        let stocks: Vec<_> = sample_stocks()
            .into_iter()
            .filter(|s| s.industry() == "Tech")
            .collect();
        assert_eq!(grouping_for(&stocks), ChartGrouping::Symbol);
        let counts = category_counts(&stocks, ChartGrouping::Symbol);
        assert_eq!(counts.len(), 2);
        assert!(counts.iter().all(|c| c.count == 1));
    }

    #[test]
    fn empty_input_groups_by_industry_with_no_bars() {
        assert_eq!(grouping_for(&[]), ChartGrouping::Industry);
        assert!(category_counts(&[], ChartGrouping::Industry).is_empty());
    }

    #[test]
    fn blank_industries_are_not_a_single_industry() {
        let stocks = vec![
            StockRecord::with_industry_symbol("", "AAA"),
            StockRecord::with_industry_symbol("", "BBB"),
        ];
        assert_eq!(grouping_for(&stocks), ChartGrouping::Industry);
        assert!(category_counts(&stocks, ChartGrouping::Industry).is_empty());
    }

    #[test]
    fn table_columns_lead_with_symbol_and_industry() {
        let stocks = vec![
            StockRecord::try_from(json!({ "industry": "Tech", "symbol": "AAA", "price": 1.0 }))
                .unwrap(),
            StockRecord::try_from(json!({ "symbol": "BBB", "exchange": "NYSE" })).unwrap(),
        ];
        let columns = table_columns(&stocks);
        assert_eq!(columns[..2], ["symbol".to_string(), "industry".to_string()]);
        assert_eq!(columns.len(), 4);
        assert!(columns.contains(&"price".to_string()));
        assert!(columns.contains(&"exchange".to_string()));
    }

    #[test]
    fn grouping_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ChartGrouping::Symbol).unwrap(), json!("symbol"));
    }
}
