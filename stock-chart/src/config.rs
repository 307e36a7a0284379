//! Chart layout and styling configuration.
//!
//! Every field has a default, so a JSON override only needs the keys it
//! changes:
//!
//! ```json
//! { "width": 1000, "colors": { "open": "#1f78b4" } }
//! ```

use anyhow::{bail, Context};
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 150.0,
            bottom: 120.0,
            left: 70.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesColors {
    pub open: String,
    pub close: String,
}

impl Default for SeriesColors {
    fn default() -> Self {
        Self {
            open: "#b2df8a".to_string(),
            close: "#e41a1c".to_string(),
        }
    }
}

/// Chart dimensions and styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Total canvas width in pixels, margins included.
    pub width: f64,
    /// Total canvas height in pixels, margins included.
    pub height: f64,
    pub margin: Margin,
    /// Left end of the time axis inside the plot area.
    pub x_range_start: f64,
    pub colors: SeriesColors,
    pub stroke_width: f64,
    pub marker_radius: f64,
    pub font_size: f64,
    /// Rotation applied to the time axis labels, in degrees.
    pub tick_label_rotation: f64,
    /// Cardinal spline tension; 0 is the default catmull-like curve, 1 is straight.
    pub curve_tension: f64,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    /// Distance the tooltip is lifted above the pointer.
    pub tooltip_offset: f64,
    /// Legend swatch edge length.
    pub legend_swatch: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin: Margin::default(),
            x_range_start: 10.0,
            colors: SeriesColors::default(),
            stroke_width: 1.5,
            marker_radius: 3.0,
            font_size: 12.0,
            tick_label_rotation: -45.0,
            curve_tension: 0.0,
            tick_count: 10,
            tooltip_offset: 28.0,
            legend_swatch: 15.0,
        }
    }
}

/// Parse a `#rrggbb` color.
pub fn parse_hex_color(hex: &str) -> anyhow::Result<RGBColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        bail!("expected a #rrggbb color, got {hex:?}");
    }
    let channel = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16)
            .with_context(|| format!("invalid color {hex:?}"))
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

impl ChartConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        parse_hex_color(&config.colors.open).context("colors.open")?;
        parse_hex_color(&config.colors.close).context("colors.close")?;
        Ok(config)
    }

    /// Width of the plot area between the left and right margins.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area between the top and bottom margins.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = ChartConfig::default();
        assert_eq!(config.inner_width(), 580.0);
        assert_eq!(config.inner_height(), 240.0);
    }

    #[test]
    fn test_partial_json_override() {
        let config =
            ChartConfig::from_json(r##"{ "width": 1000, "colors": { "open": "#1f78b4" } }"##)
                .unwrap();
        assert_eq!(config.width, 1000.0);
        assert_eq!(config.colors.open, "#1f78b4");
        assert_eq!(config.colors.close, "#e41a1c");
        assert_eq!(config.margin, Margin::default());
        assert_eq!(config.inner_width(), 780.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ChartConfig::from_json("{ width: }").is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        let RGBColor(r, g, b) = parse_hex_color("#b2df8a").unwrap();
        assert_eq!((r, g, b), (0xb2, 0xdf, 0x8a));
        let RGBColor(r, g, b) = parse_hex_color("E41A1C").unwrap();
        assert_eq!((r, g, b), (0xe4, 0x1a, 0x1c));
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
    }

    #[test]
    fn test_bad_color_in_json_is_an_error() {
        let err = ChartConfig::from_json(r#"{ "colors": { "close": "red" } }"#).unwrap_err();
        assert!(format!("{err:#}").contains("colors.close"));
    }
}
