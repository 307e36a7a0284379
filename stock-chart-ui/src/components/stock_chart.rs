//! The stock price chart: controls, mount node and tooltip.
//!
//! Redraws are driven by one effect that tracks `csv_data`, `config` and the
//! selection.
//! The effect asks the `ChartRenderer` whether anything changed and, if so,
//! replaces the mount node's content with the freshly rendered SVG.

use crate::components::{ChartHeader, ChartTooltip, CompanySelector, MonthSelector};
use crate::dom_bridge;
use crate::state::ChartState;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use stock_chart::{render_svg, ChartConfig, ChartRenderer};
use stock_data::Dataset;

/// DOM id of the node the SVG is drawn into.
pub const CHART_MOUNT_ID: &str = "chart";

#[derive(Props, Clone, PartialEq)]
pub struct StockChartProps {
    /// Stock rows to chart; `None` renders the empty placeholder.
    #[props(!optional)]
    pub csv_data: Option<Dataset>,
    #[props(default = "Stock Prices".to_string())]
    pub title: String,
    #[props(default)]
    pub config: ChartConfig,
}

#[component]
pub fn StockChart(props: StockChartProps) -> Element {
    let mut chart = use_context_provider(ChartState::new);
    let initial_config = props.config.clone();
    let renderer = use_hook(|| Rc::new(RefCell::new(ChartRenderer::new(initial_config))));

    use_drop(|| dom_bridge::clear_mount(CHART_MOUNT_ID));

    let effect_renderer = renderer.clone();
    let csv_data = props.csv_data.clone();
    let config = props.config.clone();
    use_effect(use_reactive!(|(csv_data, config)| {
        let selection = (chart.selection)();
        let mut renderer = effect_renderer.borrow_mut();
        if renderer.set_config(config.clone()) {
            log::debug!("chart config changed, redrawing");
        }
        let Some(scene) = renderer.update(csv_data.as_ref(), &selection) else {
            return;
        };
        let markup = match render_svg(scene) {
            Ok(markup) => markup,
            Err(err) => {
                log::error!("chart: {:#}", err);
                renderer.invalidate();
                return;
            }
        };
        if !dom_bridge::replace_mount_content(CHART_MOUNT_ID, &markup) {
            renderer.invalidate();
        }
    }));

    let hover_renderer = renderer.clone();
    let on_mouse_move = move |evt: MouseEvent| {
        let Some((left, top)) = dom_bridge::mount_origin(CHART_MOUNT_ID) else {
            return;
        };
        let client = evt.client_coordinates();
        let page = evt.page_coordinates();

        let renderer = hover_renderer.borrow();
        let offset = renderer.config().tooltip_offset;
        let hovered = renderer
            .scene()
            .and_then(|scene| scene.marker_at(client.x - left, client.y - top));
        match hovered {
            Some(point) => chart.tooltip.write().show(point, page.x, page.y, offset),
            None => chart.hide_tooltip(),
        }
    };

    let width = props.config.width;
    let height = props.config.height;

    rsx! {
        div {
            class: "stock-chart",
            ChartHeader { title: props.title.clone() }
            div {
                class: "controls",
                style: "display: flex; gap: 24px; align-items: center; margin: 8px 0;",
                CompanySelector {}
                MonthSelector {}
            }
            div {
                id: CHART_MOUNT_ID,
                style: "position: relative; width: {width}px; height: {height}px;",
                onmousemove: on_mouse_move,
                onmouseleave: move |_| chart.hide_tooltip(),
            }
            ChartTooltip {}
        }
    }
}
