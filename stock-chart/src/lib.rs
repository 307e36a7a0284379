//! Drawing-surface independent chart generation for stock prices.
//!
//! The pipeline is: filtered points -> scales (`scale`, `time_scale`) ->
//! spline paths (`path`) and plotters axis coordinates (`axis`) -> a
//! `ChartScene` -> SVG markup drawn with plotters (`svg`).
//! `renderer::ChartRenderer` decides when a redraw is due.

pub mod axis;
pub mod config;
pub mod format;
pub mod path;
pub mod renderer;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod time_scale;
pub mod tooltip;

pub use config::ChartConfig;
pub use renderer::{ChartRenderer, RendererState};
pub use scale::{compute_scale_y, LinearScale};
pub use scene::{build_scene, ChartScene};
pub use svg::render_svg;
pub use time_scale::{compute_scale_x, TimeScale};
pub use tooltip::{TooltipContent, TooltipState};
