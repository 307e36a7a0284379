//! Reusable Dioxus RSX components for the stock price chart.

mod chart_header;
mod chart_tooltip;
mod company_selector;
mod error_display;
mod loading_spinner;
mod month_selector;
mod stock_chart;

pub use chart_header::ChartHeader;
pub use chart_tooltip::ChartTooltip;
pub use company_selector::CompanySelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use month_selector::MonthSelector;
pub use stock_chart::{StockChart, CHART_MOUNT_ID};
