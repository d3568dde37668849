//! Loading indicator component.

use dioxus::prelude::*;

/// Shown while the stock list is being fetched.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "padding: 16px 0; color: #666;",
            "Loading stock data..."
        }
    }
}
