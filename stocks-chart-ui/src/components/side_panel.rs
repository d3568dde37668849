//! Fixed-width settings panel holding the filter dropdowns.

use crate::components::{IndustrySelector, SymbolSelector};
use dioxus::prelude::*;

#[component]
pub fn SidePanel() -> Element {
    rsx! {
        div {
            style: "width: 260px; flex-shrink: 0; background: #fff; border-right: 1px solid #eee; padding: 24px;",
            h4 {
                style: "margin: 0 0 24px 0;",
                "Settings"
            }
            IndustrySelector {}
            SymbolSelector {}
        }
    }
}
