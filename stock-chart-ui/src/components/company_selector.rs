//! Radio group for choosing a company.

use crate::state::ChartState;
use dioxus::prelude::*;
use stock_data::calendar::COMPANIES;

/// One radio button per company; the checked one follows the selection.
#[component]
pub fn CompanySelector() -> Element {
    let mut chart = use_context::<ChartState>();
    let selected = chart.selection.read().company.clone();

    rsx! {
        div {
            class: "company-selector",
            style: "display: flex; gap: 12px; align-items: center;",
            for company in COMPANIES {
                label {
                    key: "{company}",
                    input {
                        r#type: "radio",
                        name: "company",
                        value: "{company}",
                        checked: company == selected,
                        onchange: move |evt: Event<FormData>| chart.choose_company(evt.value()),
                    }
                    "{company}"
                }
            }
        }
    }
}
