//! Axis coordinates for the plotters mesh.
//!
//! Each axis wraps one of the chart scales and implements `Ranged`, so the
//! mesh puts ticks where the scale does and labels them in the chart's own
//! formats instead of picking its own key points.

use crate::format::{linear_tick, time_tick};
use crate::scale::LinearScale;
use crate::time_scale::TimeScale;
use chrono::NaiveDateTime;
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use std::ops::Range;

/// Backend pixel for a scale output. Scale outputs are measured from the
/// top-left corner of the plot area, whichever way round `limit` is.
fn to_backend(offset: f64, limit: (i32, i32)) -> i32 {
    limit.0.min(limit.1) + offset.round() as i32
}

/// Bottom axis over trading dates, labelled like "Wed 01".
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    scale: TimeScale,
    ticks: Vec<NaiveDateTime>,
}

impl TimeAxis {
    pub fn new(scale: TimeScale, count: usize) -> Self {
        Self {
            ticks: scale.ticks(count),
            scale,
        }
    }

    pub fn ticks(&self) -> &[NaiveDateTime] {
        &self.ticks
    }

    pub fn label(&self, t: &NaiveDateTime) -> String {
        time_tick(t)
    }
}

impl Ranged for TimeAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = NaiveDateTime;

    fn map(&self, value: &NaiveDateTime, limit: (i32, i32)) -> i32 {
        to_backend(self.scale.apply(value), limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<NaiveDateTime> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<NaiveDateTime> {
        self.scale.domain.0..self.scale.domain.1
    }
}

/// Left axis over prices, labelled with as many decimals as the tick step needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAxis {
    scale: LinearScale,
    ticks: Vec<f64>,
    step: f64,
}

impl PriceAxis {
    pub fn new(scale: LinearScale, count: usize) -> Self {
        Self {
            ticks: scale.ticks(count),
            step: scale.tick_step(count),
            scale,
        }
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    pub fn label(&self, value: f64) -> String {
        linear_tick(value, self.step)
    }
}

impl Ranged for PriceAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        to_backend(self.scale.apply(*value), limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.scale.domain.0..self.scale.domain.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn price_axis_ticks_and_pixels() {
        let axis = PriceAxis::new(LinearScale::new((150.0, 152.0), (240.0, 0.0)), 10);
        assert_eq!(axis.ticks().len(), 11);
        assert_eq!(axis.label(axis.ticks()[0]), "150.0");
        assert_eq!(axis.label(axis.ticks()[10]), "152.0");
        // plotters hands the y limit over bottom first
        assert_eq!(axis.map(&150.0, (280, 40)), 280);
        assert_eq!(axis.map(&152.0, (280, 40)), 40);
        assert_eq!(axis.map(&151.0, (280, 40)), 160);
    }

    #[test]
    fn time_axis_ticks_and_pixels() {
        let day = |d| {
            NaiveDate::from_ymd_opt(2023, 11, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        };
        let axis = TimeAxis::new(TimeScale::new((day(1), day(30)), (10.0, 590.0)), 10);
        assert_eq!(axis.label(&axis.ticks()[0]), "Wed 01");
        assert_eq!(axis.label(&axis.ticks()[1]), "Fri 03");
        assert_eq!(axis.map(&day(1), (70, 650)), 80);
        assert_eq!(axis.map(&day(30), (70, 650)), 660);
        assert_eq!(axis.range(), day(1)..day(30));
    }
}
