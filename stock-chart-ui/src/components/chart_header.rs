//! Chart title with the current selection underneath.

use crate::state::ChartState;
use dioxus::prelude::*;

/// Title line plus "Apple, November" for whatever is selected.
///
/// Must be rendered inside a `StockChart`, which provides the `ChartState`.
#[component]
pub fn ChartHeader(title: String) -> Element {
    let chart = use_context::<ChartState>();
    let selection = chart.selection.read().clone();

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{title}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: #666;",
                "{selection.company}, {selection.selected_month} (daily open and close)"
            }
        }
    }
}
