//! Labelled dropdown with a leading "All" option.

use dioxus::prelude::*;

const SELECT_STYLE: &str = "width: 100%; padding: 8px; border-radius: 4px; border: 1px solid #ccc;";

#[derive(Props, Clone, PartialEq)]
pub struct FilterSelectProps {
    /// DOM id of the `<select>`, also used by the label
    pub id: String,
    pub label: String,
    /// Values offered after "All"
    pub options: Vec<String>,
    /// Current value; empty selects "All"
    pub selected: String,
    /// Called with the new value, `""` for "All"
    pub on_select: EventHandler<String>,
}

/// Dropdown used for every filter in the side panel.
#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    let on_select = props.on_select;
    let on_change = move |evt: Event<FormData>| {
        on_select.call(evt.value());
    };

    rsx! {
        div {
            style: "margin-bottom: 18px;",
            label {
                r#for: "{props.id}",
                style: "font-weight: 500; display: block; margin-bottom: 6px;",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                style: SELECT_STYLE,
                onchange: on_change,
                option {
                    value: "",
                    selected: props.selected.is_empty(),
                    "All"
                }
                for value in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.selected,
                        "{value}"
                    }
                }
            }
        }
    }
}
