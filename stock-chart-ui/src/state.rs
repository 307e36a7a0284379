//! Application and chart state managed via Dioxus context.
//!
//! `AppState` is provided once by the app root. `ChartState` is provided by
//! each `StockChart`, which owns its selection; the selector components
//! retrieve it with `use_context::<ChartState>()`.

use dioxus::prelude::*;
use stock_chart::TooltipState;
use stock_data::{Dataset, Selection};

/// Shared application state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded stock data (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}

/// State owned by one chart: the current selection and the hover tooltip.
#[derive(Clone, Copy)]
pub struct ChartState {
    pub selection: Signal<Selection>,
    pub tooltip: Signal<TooltipState>,
}

impl ChartState {
    pub fn new() -> Self {
        Self {
            selection: Signal::new(Selection::default()),
            tooltip: Signal::new(TooltipState::default()),
        }
    }

    /// Apply a company chosen in the radio group; no-op when unchanged.
    pub fn choose_company(&mut self, company: String) {
        if self.selection.peek().company != company {
            self.selection.write().set_company(company);
        }
    }

    /// Apply a month chosen in the dropdown; no-op when unchanged.
    pub fn choose_month(&mut self, month: String) {
        if self.selection.peek().selected_month != month {
            self.selection.write().set_month(month);
        }
    }

    pub fn hide_tooltip(&mut self) {
        if self.tooltip.peek().visible {
            self.tooltip.write().hide();
        }
    }
}
