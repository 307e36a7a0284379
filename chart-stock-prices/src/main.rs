//! Daily Stock Prices
//!
//! Open and close prices for one company over one month, drawn as two
//! smoothed lines with hover tooltips.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/stock_data.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse the CSV into a `Dataset` held in `AppState`.
//! 4. `StockChart` filters by the selected company and month and redraws.

use dioxus::prelude::*;
use stock_chart_ui::components::{ErrorDisplay, LoadingSpinner, StockChart};
use stock_chart_ui::state::AppState;

const STOCK_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/stock_data.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("stock-prices-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded CSV once on mount
    use_effect(move || {
        match stock_data::load_dataset(STOCK_CSV) {
            Ok(data) => {
                if data.is_empty() {
                    log::warn!("No stock rows found in the embedded CSV");
                }
                state.dataset.set(Some(data));
            }
            Err(err) => {
                log::error!("Failed to load stock data: {:#}", err);
                state.error_msg.set(Some(format!("{:#}", err)));
            }
        }
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                StockChart {
                    csv_data: (state.dataset)(),
                    title: "Daily Stock Prices".to_string(),
                }
            }
        }
    }
}
