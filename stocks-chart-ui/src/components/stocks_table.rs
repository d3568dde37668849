//! Table listing stock records with every field they carry.

use dioxus::prelude::*;
use stocks_core::chart::table_columns;
use stocks_core::StockRecord;

#[derive(Props, Clone, PartialEq)]
pub struct StocksTableProps {
    pub stocks: Vec<StockRecord>,
}

#[component]
pub fn StocksTable(props: StocksTableProps) -> Element {
    let columns = table_columns(&props.stocks);

    rsx! {
        div {
            style: "margin-top: 16px; overflow-x: auto;",
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        for column in columns.iter() {
                            th {
                                key: "{column}",
                                style: "text-align: left; padding: 6px 8px; border-bottom: 2px solid #ddd; text-transform: capitalize;",
                                "{column}"
                            }
                        }
                    }
                }
                tbody {
                    for (row, stock) in props.stocks.iter().enumerate() {
                        tr {
                            key: "{row}",
                            for column in columns.iter() {
                                td {
                                    style: "padding: 6px 8px; border-bottom: 1px solid #f0f0f0;",
                                    {stock.display_field(column)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
