//! Linear scale with "nice" domains and round-number ticks.
//!
//! Tick steps are always 1, 2 or 5 times a power of ten. Steps below one are
//! carried as negative reciprocals (`-5` means a step of 0.2) so tick values
//! are computed by division and stay free of accumulated float error.

use crate::config::ChartConfig;
use stock_data::DataPoint;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Round half up, matching how tick indices are snapped.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Returns (first index, last index, increment) for ticks over `[start, stop]`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        let mut i1 = round_half_up(start * inv);
        let mut i2 = round_half_up(stop * inv);
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        (i1, i2, -inv)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = round_half_up(start / inc);
        let mut i2 = round_half_up(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, inc)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Tick increment for `[start, stop]`, negative for fractional steps.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Positive distance between adjacent ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 {
        1.0 / -inc
    } else {
        inc
    }
}

/// Approximately `count` round-numbered values covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let value = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    let mut out: Vec<f64> = (0..n).map(|k| value(i1 + k as f64)).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Extend `[start, stop]` outward to tick boundaries.
///
/// Repeats until the increment stabilizes, since widening the domain can
/// change the increment. Collapsed or non-finite domains are returned as is.
pub fn nice_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start == stop || count == 0 {
        return (start, stop);
    }
    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };

    let mut prestep = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if step == prestep {
            break;
        } else if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        prestep = step;
    }

    if reverse {
        (hi, lo)
    } else {
        (lo, hi)
    }
}

/// Maps a continuous numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Pixel position of `value`. A collapsed domain maps to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn nice(self, count: usize) -> Self {
        let (d0, d1) = nice_domain(self.domain.0, self.domain.1, count);
        Self {
            domain: (d0, d1),
            ..self
        }
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Vertical price scale over the lower and upper of Open/Close, niced and
/// inverted so higher prices sit higher on screen.
///
/// Points with a non-finite price are left out of the domain. Returns `None`
/// when no point is left to scale.
pub fn compute_scale_y(points: &[DataPoint], config: &ChartConfig) -> Option<LinearScale> {
    let finite = || points.iter().filter(|p| p.has_finite_prices());
    let min = finite().map(DataPoint::low).reduce(f64::min)?;
    let max = finite().map(DataPoint::high).reduce(f64::max)?;
    let scale = LinearScale::new((min, max), (config.inner_height(), 0.0));
    Some(scale.nice(config.tick_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn nice_keeps_round_domain() {
        assert_eq!(nice_domain(150.0, 152.0, 10), (150.0, 152.0));
    }

    #[test]
    fn nice_extends_outward() {
        assert_eq!(nice_domain(0.2, 9.7, 10), (0.0, 10.0));
        assert_eq!(nice_domain(130.5, 152.3, 10), (130.0, 154.0));
    }

    #[test]
    fn nice_leaves_collapsed_domain() {
        assert_eq!(nice_domain(42.0, 42.0, 10), (42.0, 42.0));
    }

    #[test]
    fn ticks_use_fractional_steps() {
        let t = ticks(150.0, 152.0, 10);
        assert_eq!(t.len(), 11);
        assert_eq!(t[0], 150.0);
        assert_eq!(t[1], 150.2);
        assert_eq!(t[10], 152.0);
        assert_eq!(tick_step(150.0, 152.0, 10), 0.2);
    }

    #[test]
    fn ticks_use_whole_steps() {
        assert_eq!(
            ticks(130.0, 154.0, 10),
            vec![130.0, 132.0, 134.0, 136.0, 138.0, 140.0, 142.0, 144.0, 146.0, 148.0, 150.0, 152.0, 154.0]
        );
        assert_eq!(ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn ticks_reverse_domain() {
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn linear_scale_maps_prices_to_pixels() {
        let scale = LinearScale::new((150.0, 152.0), (240.0, 0.0));
        assert_eq!(scale.apply(150.0), 240.0);
        assert_eq!(scale.apply(152.0), 0.0);
        assert_eq!(scale.apply(151.0), 120.0);
    }

    #[test]
    fn collapsed_scale_maps_to_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (240.0, 0.0));
        assert_eq!(scale.apply(5.0), 120.0);
    }

    #[test]
    fn compute_scale_y_spans_open_and_close() {
        let day = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        let points = vec![
            DataPoint::new(day, "Apple", 150.0, 152.0),
            DataPoint::new(day.succ_opt().unwrap(), "Apple", 152.0, 151.0),
        ];
        let scale = compute_scale_y(&points, &ChartConfig::default()).unwrap();
        assert_eq!(scale.domain, (150.0, 152.0));
        assert_eq!(scale.range, (240.0, 0.0));
    }

    #[test]
    fn compute_scale_y_empty_is_none() {
        assert!(compute_scale_y(&[], &ChartConfig::default()).is_none());
    }

    #[test]
    fn compute_scale_y_ignores_nan_prices() {
        let day = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        let points = vec![
            DataPoint::new(day, "Apple", f64::NAN, 400.0),
            DataPoint::new(day.succ_opt().unwrap(), "Apple", 152.0, 150.0),
        ];
        let scale = compute_scale_y(&points, &ChartConfig::default()).unwrap();
        assert_eq!(scale.domain, (150.0, 152.0));

        let only_nan = vec![DataPoint::new(day, "Apple", f64::NAN, f64::NAN)];
        assert!(compute_scale_y(&only_nan, &ChartConfig::default()).is_none());
    }
}
