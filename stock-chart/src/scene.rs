//! A complete, backend independent description of one chart frame.

use crate::axis::{PriceAxis, TimeAxis};
use crate::config::{parse_hex_color, ChartConfig, Margin};
use crate::path::{build_path, LinePath};
use crate::scale::compute_scale_y;
use crate::time_scale::compute_scale_x;
use plotters::style::{RGBColor, BLACK};
use stock_data::DataPoint;

/// Extra pointer slack around a marker when hit-testing.
pub const HOVER_TOLERANCE: f64 = 2.0;

/// A circle drawn at one data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    /// Index into `ChartScene::points`.
    pub point_index: usize,
}

/// One price line and its markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: f64,
    /// `None` when there is nothing to connect.
    pub path: Option<LinePath>,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: RGBColor,
    /// Top of the swatch, relative to the legend origin.
    pub y: f64,
    /// Anchor of the label text (left edge, vertical middle), relative to
    /// the legend origin.
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub swatch: f64,
    pub entries: Vec<LegendEntry>,
}

/// Everything needed to draw one frame. Coordinates of series and legend
/// are relative to the plot area (inside the margins).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub inner_width: f64,
    pub inner_height: f64,
    pub font_size: f64,
    /// Rotation of the time axis labels, in degrees.
    pub x_label_rotation: f64,
    pub x_axis: Option<TimeAxis>,
    pub y_axis: Option<PriceAxis>,
    pub series: Vec<Series>,
    pub legend: Legend,
    /// Message drawn in place of the data when nothing matched.
    pub placeholder: Option<String>,
    /// The drawn points, in draw order.
    pub points: Vec<DataPoint>,
}

impl ChartScene {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The data point under canvas position `(x, y)`, if the pointer is on a marker.
    pub fn marker_at(&self, x: f64, y: f64) -> Option<&DataPoint> {
        let local_x = x - self.margin.left;
        let local_y = y - self.margin.top;
        self.series
            .iter()
            .flat_map(|s| s.markers.iter())
            .find(|m| {
                let reach = m.r + HOVER_TOLERANCE;
                let dx = m.cx - local_x;
                let dy = m.cy - local_y;
                dx * dx + dy * dy <= reach * reach
            })
            .and_then(|m| self.points.get(m.point_index))
    }
}

fn series_color(hex: &str) -> RGBColor {
    parse_hex_color(hex).unwrap_or_else(|err| {
        log::warn!("scene: {:#}, drawing in black", err);
        BLACK
    })
}

fn legend(config: &ChartConfig) -> Legend {
    let swatch = config.legend_swatch;
    let entries = [("Open", &config.colors.open), ("Close", &config.colors.close)]
        .iter()
        .enumerate()
        .map(|(idx, (label, color))| {
            let y = 10.0 + 25.0 * idx as f64;
            LegendEntry {
                label: label.to_string(),
                color: series_color(color),
                y,
                label_x: swatch + 5.0,
                label_y: y + 12.0,
            }
        })
        .collect();
    Legend {
        x: config.inner_width() + 20.0,
        y: 20.0,
        swatch,
        entries,
    }
}

/// Lay out a frame for `points`.
///
/// Points with a non-finite price are dropped. With nothing left to draw the
/// frame keeps the canvas and legend, drops axes and series, and shows
/// `empty_message`.
pub fn build_scene(points: &[DataPoint], config: &ChartConfig, empty_message: &str) -> ChartScene {
    let mut scene = ChartScene {
        width: config.width,
        height: config.height,
        margin: config.margin,
        inner_width: config.inner_width(),
        inner_height: config.inner_height(),
        font_size: config.font_size,
        x_label_rotation: config.tick_label_rotation,
        x_axis: None,
        y_axis: None,
        series: Vec::new(),
        legend: legend(config),
        placeholder: None,
        points: Vec::new(),
    };

    let drawable: Vec<DataPoint> = points
        .iter()
        .filter(|p| p.has_finite_prices())
        .cloned()
        .collect();
    if drawable.len() < points.len() {
        log::warn!(
            "scene: skipping {} points with non-finite prices",
            points.len() - drawable.len()
        );
    }

    let (Some(x), Some(y)) = (
        compute_scale_x(&drawable, config),
        compute_scale_y(&drawable, config),
    ) else {
        scene.placeholder = Some(empty_message.to_string());
        return scene;
    };

    let series: [(&str, &String, fn(&DataPoint) -> f64); 2] = [
        ("Open", &config.colors.open, |p| p.open),
        ("Close", &config.colors.close, |p| p.close),
    ];
    for (label, color, value) in series {
        let path = build_path(
            &drawable,
            |p| x.apply_date(&p.date),
            |p| y.apply(value(p)),
            config.curve_tension,
        );
        let markers = drawable
            .iter()
            .enumerate()
            .map(|(idx, p)| Marker {
                cx: x.apply_date(&p.date),
                cy: y.apply(value(p)),
                r: config.marker_radius,
                point_index: idx,
            })
            .collect();
        scene.series.push(Series {
            label: label.to_string(),
            color: series_color(color),
            stroke_width: config.stroke_width,
            path,
            markers,
        });
    }

    scene.x_axis = Some(TimeAxis::new(x, config.tick_count));
    scene.y_axis = Some(PriceAxis::new(y, config.tick_count));
    scene.points = drawable;
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn apple_november() -> Vec<DataPoint> {
        vec![
            DataPoint::new(NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(), "Apple", 150.0, 152.0),
            DataPoint::new(NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(), "Apple", 152.0, 151.0),
        ]
    }

    fn path_data(series: &Series) -> Option<String> {
        series.path.as_ref().map(|p| p.to_string())
    }

    #[test]
    fn scene_draws_both_series() {
        let scene = build_scene(&apple_november(), &ChartConfig::default(), "No data");
        assert!(scene.placeholder.is_none());
        assert_eq!(scene.series.len(), 2);

        let open = &scene.series[0];
        assert_eq!(open.label, "Open");
        assert!(open.color == RGBColor(0xb2, 0xdf, 0x8a));
        assert_eq!(path_data(open).as_deref(), Some("M10,240L580,0"));
        assert_eq!(open.markers.len(), 2);
        assert_eq!((open.markers[0].cx, open.markers[0].cy), (10.0, 240.0));
        assert_eq!(open.markers[0].r, 3.0);

        let close = &scene.series[1];
        assert!(close.color == RGBColor(0xe4, 0x1a, 0x1c));
        assert_eq!(path_data(close).as_deref(), Some("M10,0L580,120"));
    }

    #[test]
    fn legend_layout() {
        let scene = build_scene(&apple_november(), &ChartConfig::default(), "No data");
        let legend = &scene.legend;
        assert_eq!((legend.x, legend.y), (600.0, 20.0));
        assert_eq!(legend.swatch, 15.0);
        let placed: Vec<_> = legend
            .entries
            .iter()
            .map(|e| (e.label.as_str(), e.y, e.label_x, e.label_y))
            .collect();
        assert_eq!(
            placed,
            vec![("Open", 10.0, 20.0, 22.0), ("Close", 35.0, 20.0, 47.0)]
        );
    }

    #[test]
    fn empty_scene_has_placeholder_and_legend() {
        let scene = build_scene(&[], &ChartConfig::default(), "No data for Tesla in November");
        assert!(scene.is_empty());
        assert!(scene.x_axis.is_none());
        assert!(scene.y_axis.is_none());
        assert!(scene.series.is_empty());
        assert_eq!(scene.placeholder.as_deref(), Some("No data for Tesla in November"));
        assert_eq!(scene.legend.entries.len(), 2);
        assert_eq!(scene.legend.x, 600.0);
    }

    #[test]
    fn single_point_scene_centres_markers() {
        let points = apple_november();
        let scene = build_scene(&points[..1], &ChartConfig::default(), "No data");
        let open = &scene.series[0];
        assert_eq!(path_data(open).as_deref(), Some("M295,240"));
        assert_eq!((open.markers[0].cx, open.markers[0].cy), (295.0, 240.0));
        assert_eq!(scene.series[1].markers[0].cy, 0.0);
    }

    #[test]
    fn nan_prices_are_left_out() {
        let mut points = apple_november();
        points.insert(
            0,
            DataPoint::new(NaiveDate::from_ymd_opt(2023, 10, 31).unwrap(), "Apple", f64::NAN, 152.0),
        );
        let scene = build_scene(&points, &ChartConfig::default(), "No data");
        assert_eq!(scene.points.len(), 2);
        assert_eq!(path_data(&scene.series[0]).as_deref(), Some("M10,240L580,0"));
        assert!(scene
            .series
            .iter()
            .flat_map(|s| s.markers.iter())
            .all(|m| m.cx.is_finite() && m.cy.is_finite()));
    }

    #[test]
    fn only_nan_prices_show_placeholder() {
        let day = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        let points = vec![DataPoint::new(day, "Apple", f64::NAN, f64::INFINITY)];
        let scene = build_scene(&points, &ChartConfig::default(), "No data");
        assert!(scene.is_empty());
        assert_eq!(scene.placeholder.as_deref(), Some("No data"));
    }

    #[test]
    fn marker_hit_test() {
        let scene = build_scene(&apple_november(), &ChartConfig::default(), "No data");
        // second close marker sits at (580, 120) inside the plot, (650, 160) on the canvas
        let hit = scene.marker_at(651.0, 161.0).unwrap();
        assert_eq!(hit.date, NaiveDate::from_ymd_opt(2023, 11, 2).unwrap());
        assert!(scene.marker_at(400.0, 100.0).is_none());
    }
}
