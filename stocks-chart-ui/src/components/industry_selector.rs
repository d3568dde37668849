//! Dropdown selector for choosing an industry.

use crate::components::FilterSelect;
use crate::state::AppState;
use dioxus::prelude::*;

/// Industry dropdown selector.
/// Offers every industry in the fetched list and updates the industry filter on change.
#[component]
pub fn IndustrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let industries = state.industries();
    let selected = state.selected_industry();

    rsx! {
        FilterSelect {
            id: "industry-select".to_string(),
            label: "Industry".to_string(),
            options: industries,
            selected: selected,
            on_select: move |value: String| state.select_industry(value),
        }
    }
}
