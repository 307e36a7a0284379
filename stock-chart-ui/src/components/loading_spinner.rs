//! Loading indicator.

use dioxus::prelude::*;

/// Placeholder shown while the CSV is parsed.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading stock prices...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "padding: 40px; text-align: center; color: #666;",
            "{label}"
        }
    }
}
