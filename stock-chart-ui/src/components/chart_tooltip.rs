//! Hover tooltip overlay.

use crate::state::ChartState;
use dioxus::prelude::*;

const TOOLTIP_STYLE: &str = "position: absolute; pointer-events: none; padding: 6px 8px; \
    background: rgba(255, 255, 255, 0.95); border: 1px solid #ccc; border-radius: 4px; \
    font-size: 12px; line-height: 1.4; transition: opacity 0.1s;";

/// Always present in the DOM; shown and hidden by opacity only.
#[component]
pub fn ChartTooltip() -> Element {
    let chart = use_context::<ChartState>();
    let tooltip = chart.tooltip.read().clone();
    let style = format!("{} {}", TOOLTIP_STYLE, tooltip.style());
    let lines = tooltip
        .content
        .map(|content| content.lines().to_vec())
        .unwrap_or_default();

    rsx! {
        div {
            id: "tooltip",
            class: "tooltip",
            style: "{style}",
            for line in lines {
                div { key: "{line}", "{line}" }
            }
        }
    }
}
