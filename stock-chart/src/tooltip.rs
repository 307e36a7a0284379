//! Hover tooltip content and visibility.

use crate::format::{price, tooltip_date};
use stock_data::DataPoint;

/// Text shown for one hovered data point.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub date: String,
    pub open: String,
    pub close: String,
    pub difference: String,
}

impl TooltipContent {
    pub fn for_point(point: &DataPoint) -> Self {
        Self {
            date: tooltip_date(&point.date),
            open: price(point.open),
            close: price(point.close),
            difference: price(point.difference()),
        }
    }

    pub fn lines(&self) -> [String; 4] {
        [
            format!("Date: {}", self.date),
            format!("Open: {}", self.open),
            format!("Close: {}", self.close),
            format!("Difference: {}", self.difference),
        ]
    }
}

/// Tooltip overlay position and opacity.
///
/// Hiding only drops the opacity; the last content and position stay so the
/// overlay element is never removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub content: Option<TooltipContent>,
}

impl TooltipState {
    /// Show `point` next to the pointer at page coordinates, lifted by `offset`.
    pub fn show(&mut self, point: &DataPoint, page_x: f64, page_y: f64, offset: f64) {
        self.visible = true;
        self.left = page_x;
        self.top = page_y - offset;
        self.content = Some(TooltipContent::for_point(point));
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn opacity(&self) -> f64 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }

    /// Inline CSS for the overlay element.
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; opacity: {};",
            self.left,
            self.top,
            self.opacity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point() -> DataPoint {
        DataPoint::new(NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(), "Apple", 152.0, 151.0)
    }

    #[test]
    fn content_lines() {
        let content = TooltipContent::for_point(&point());
        assert_eq!(
            content.lines(),
            [
                "Date: 11/02/2023".to_string(),
                "Open: 152.00".to_string(),
                "Close: 151.00".to_string(),
                "Difference: -1.00".to_string(),
            ]
        );
    }

    #[test]
    fn show_then_hide_keeps_content() {
        let mut tooltip = TooltipState::default();
        assert_eq!(tooltip.opacity(), 0.0);

        tooltip.show(&point(), 300.0, 200.0, 28.0);
        assert_eq!(tooltip.opacity(), 1.0);
        assert_eq!(tooltip.left, 300.0);
        assert_eq!(tooltip.top, 172.0);
        assert_eq!(tooltip.style(), "left: 300px; top: 172px; opacity: 1;");

        tooltip.hide();
        assert_eq!(tooltip.opacity(), 0.0);
        assert!(tooltip.content.is_some());
    }
}
