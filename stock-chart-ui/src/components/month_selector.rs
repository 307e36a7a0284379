//! Dropdown selector for choosing a month.

use crate::state::ChartState;
use dioxus::prelude::*;
use stock_data::calendar::MONTH_NAMES;

/// Month dropdown. Updates the chart selection on change.
#[component]
pub fn MonthSelector() -> Element {
    let mut chart = use_context::<ChartState>();
    let selected = chart.selection.read().selected_month.clone();

    let on_change = move |evt: Event<FormData>| {
        chart.choose_month(evt.value());
    };

    rsx! {
        div {
            class: "month-selector",
            select {
                id: "month-select",
                onchange: on_change,
                for month in MONTH_NAMES {
                    option {
                        key: "{month}",
                        value: "{month}",
                        selected: month == selected,
                        "{month}"
                    }
                }
            }
        }
    }
}
