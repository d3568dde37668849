//! Dropdown selector for choosing a symbol.

use crate::components::FilterSelect;
use crate::state::AppState;
use dioxus::prelude::*;

/// Symbol dropdown selector.
/// Offers the symbols of the selected industry (all symbols when none is
/// selected). A selected symbol stays selected even when it drops out of
/// the offered options.
#[component]
pub fn SymbolSelector() -> Element {
    let mut state = use_context::<AppState>();
    let symbols = state.symbols();
    let selected = state.selected_symbol();

    rsx! {
        FilterSelect {
            id: "symbol-select".to_string(),
            label: "Industry Symbol".to_string(),
            options: symbols,
            selected: selected,
            on_select: move |value: String| state.select_symbol(value),
        }
    }
}
