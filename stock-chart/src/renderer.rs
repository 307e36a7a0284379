//! Redraw bookkeeping for the chart mount node.
//!
//! The renderer is either `Idle` or `Rendering`. A redraw runs to completion
//! synchronously, so callers only ever observe `Idle`. It redraws on mount and
//! whenever the dataset handle, the company, the month or the configuration
//! differs from what was last drawn.

use crate::config::ChartConfig;
use crate::scene::{build_scene, ChartScene};
use crate::svg::render_svg;
use anyhow::Context;
use stock_data::{filter_points, Dataset, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    Idle,
    Rendering,
}

#[derive(Debug, Clone, PartialEq)]
struct DrawnInputs {
    dataset: Option<Dataset>,
    selection: Selection,
}

#[derive(Debug)]
pub struct ChartRenderer {
    config: ChartConfig,
    state: RendererState,
    drawn: Option<DrawnInputs>,
    scene: Option<ChartScene>,
    redraws: u64,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            state: RendererState::Idle,
            drawn: None,
            scene: None,
            redraws: 0,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Swap in `config`. Returns true when it differs, in which case the
    /// next `update` redraws.
    pub fn set_config(&mut self, config: ChartConfig) -> bool {
        if self.config == config {
            return false;
        }
        self.config = config;
        self.invalidate();
        true
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    /// Number of completed redraws.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// The most recently drawn frame.
    pub fn scene(&self) -> Option<&ChartScene> {
        self.scene.as_ref()
    }

    /// Unconditionally draw, as on first mount.
    pub fn mount(&mut self, dataset: Option<&Dataset>, selection: &Selection) -> &ChartScene {
        self.draw(DrawnInputs {
            dataset: dataset.cloned(),
            selection: selection.clone(),
        })
    }

    /// Draw if anything changed since the last frame; `None` means the
    /// previous frame is still current.
    pub fn update(
        &mut self,
        dataset: Option<&Dataset>,
        selection: &Selection,
    ) -> Option<&ChartScene> {
        let inputs = DrawnInputs {
            dataset: dataset.cloned(),
            selection: selection.clone(),
        };
        if self.drawn.as_ref() == Some(&inputs) {
            return None;
        }
        Some(self.draw(inputs))
    }

    /// Forget what was drawn so the next `update` redraws, e.g. after the
    /// frame failed to reach the mount node.
    pub fn invalidate(&mut self) {
        self.drawn = None;
    }

    /// SVG markup of the current frame.
    pub fn svg(&self) -> anyhow::Result<String> {
        let scene = self.scene.as_ref().context("nothing has been drawn yet")?;
        render_svg(scene)
    }

    fn draw(&mut self, inputs: DrawnInputs) -> &ChartScene {
        self.state = RendererState::Rendering;

        let selection = &inputs.selection;
        let points = filter_points(inputs.dataset.as_ref(), selection);
        let message = format!(
            "No data for {} in {}",
            selection.company, selection.selected_month
        );
        let scene = build_scene(&points, &self.config, &message);
        if scene.is_empty() {
            log::info!("renderer: {}", message);
        }

        self.redraws += 1;
        log::debug!(
            "renderer: redraw #{} with {} points ({} / {})",
            self.redraws,
            points.len(),
            selection.company,
            selection.selected_month
        );
        self.drawn = Some(inputs);
        self.state = RendererState::Idle;
        self.scene.insert(scene)
    }
}
