//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

/// A container div for D3.js charts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
