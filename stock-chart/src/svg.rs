//! Draw a `ChartScene` with plotters into an SVG string.
//!
//! The output is a pure function of the scene, so drawing the same scene
//! twice produces byte-identical markup. The mount node is always replaced
//! wholesale with this string.

use crate::path::CURVE_STEPS;
use crate::scene::{ChartScene, Series};
use anyhow::anyhow;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

const FONT: &str = "sans-serif";
const PLACEHOLDER_COLOR: RGBColor = RGBColor(136, 136, 136);

fn px(value: f64) -> i32 {
    value.round() as i32
}

/// plotters turns text in quarter turns; the configured angle snaps to the
/// nearest one, so -45 reads bottom to top.
fn label_transform(degrees: f64) -> FontTransform {
    match ((degrees / 90.0).round() as i64).rem_euclid(4) {
        1 => FontTransform::Rotate90,
        2 => FontTransform::Rotate180,
        3 => FontTransform::Rotate270,
        _ => FontTransform::None,
    }
}

fn draw_line<DB: DrawingBackend>(
    plot: &DrawingArea<DB, Shift>,
    series: &Series,
) -> DrawResult<(), DB> {
    let Some(path) = &series.path else {
        return Ok(());
    };
    let points: Vec<(i32, i32)> = path
        .flatten(CURVE_STEPS)
        .into_iter()
        .map(|(x, y)| (px(x), px(y)))
        .collect();
    if points.len() < 2 {
        return Ok(());
    }
    let width = px(series.stroke_width).max(1) as u32;
    plot.draw(&PathElement::new(points, series.color.stroke_width(width)))
}

fn draw_markers<DB: DrawingBackend>(
    plot: &DrawingArea<DB, Shift>,
    series: &Series,
) -> DrawResult<(), DB> {
    for marker in &series.markers {
        let radius = px(marker.r).max(1) as u32;
        plot.draw(&Circle::new(
            (px(marker.cx), px(marker.cy)),
            radius,
            series.color.filled(),
        ))?;
    }
    Ok(())
}

fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &ChartScene,
) -> DrawResult<(), DB> {
    let legend = &scene.legend;
    let origin_x = scene.margin.left + legend.x;
    let origin_y = scene.margin.top + legend.y;
    let label_style = (FONT, scene.font_size)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for entry in &legend.entries {
        let top = origin_y + entry.y;
        root.draw(&Rectangle::new(
            [
                (px(origin_x), px(top)),
                (px(origin_x + legend.swatch), px(top + legend.swatch)),
            ],
            entry.color.filled(),
        ))?;
        root.draw(&Text::new(
            entry.label.clone(),
            (px(origin_x + entry.label_x), px(origin_y + entry.label_y)),
            label_style.clone(),
        ))?;
    }
    Ok(())
}

fn draw_scene<DB: DrawingBackend>(
    scene: &ChartScene,
    root: &DrawingArea<DB, Shift>,
) -> DrawResult<(), DB> {
    let margin = scene.margin;

    if let (Some(x_axis), Some(y_axis)) = (&scene.x_axis, &scene.y_axis) {
        let mut chart = ChartBuilder::on(root)
            .margin_top(px(margin.top))
            .margin_right(px(margin.right))
            .x_label_area_size(px(margin.bottom))
            .y_label_area_size(px(margin.left))
            .build_cartesian_2d(x_axis.clone(), y_axis.clone())?;

        let label_font = (FONT, scene.font_size).into_font();
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(x_axis.ticks().len())
            .y_labels(y_axis.ticks().len())
            .x_label_formatter(&|t| x_axis.label(t))
            .y_label_formatter(&|v| y_axis.label(*v))
            .x_label_style(label_font.transform(label_transform(scene.x_label_rotation)))
            .y_label_style(label_font)
            .draw()?;

        let plot = chart.plotting_area().strip_coord_spec();
        // lines first so every marker sits on top of both lines
        for series in &scene.series {
            draw_line(&plot, series)?;
        }
        for series in &scene.series {
            draw_markers(&plot, series)?;
        }
    }

    if let Some(message) = &scene.placeholder {
        let style = (FONT, scene.font_size)
            .into_font()
            .color(&PLACEHOLDER_COLOR)
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(
            message.clone(),
            (
                px(margin.left + scene.inner_width / 2.0),
                px(margin.top + scene.inner_height / 2.0),
            ),
            style,
        ))?;
    }

    draw_legend(root, scene)
}

/// Full `<svg>` markup for `scene`.
pub fn render_svg(scene: &ChartScene) -> anyhow::Result<String> {
    let size = (px(scene.width).max(1) as u32, px(scene.height).max(1) as u32);
    let mut markup = String::new();
    {
        let root = SVGBackend::with_string(&mut markup, size).into_drawing_area();
        draw_scene(scene, &root).map_err(|err| anyhow!("drawing chart: {}", err))?;
        root.present()
            .map_err(|err| anyhow!("finishing chart: {}", err))?;
    }
    Ok(markup)
}
