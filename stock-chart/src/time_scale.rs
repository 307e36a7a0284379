//! Time scale over calendar dates, with calendar-aligned ticks.

use crate::config::ChartConfig;
use crate::scale::tick_step;
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use stock_data::DataPoint;

const HOUR_MS: f64 = 3_600_000.0;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const WEEK_MS: f64 = 7.0 * DAY_MS;
const MONTH_MS: f64 = 30.0 * DAY_MS;
const YEAR_MS: f64 = 365.0 * DAY_MS;

/// Calendar intervals a time axis can tick on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInterval {
    /// Every n hours, aligned to hours divisible by n.
    Hours(u32),
    /// Every n days, aligned to days of the month where (day - 1) is divisible by n.
    Days(u32),
    /// Sundays at midnight.
    Week,
    /// Every n months, aligned to months where (month - 1) is divisible by n.
    Months(u32),
    /// Every n years, aligned to years divisible by n.
    Years(i32),
}

/// Candidate intervals with their approximate durations, shortest first.
const TICK_INTERVALS: [(TimeInterval, f64); 10] = [
    (TimeInterval::Hours(1), HOUR_MS),
    (TimeInterval::Hours(3), 3.0 * HOUR_MS),
    (TimeInterval::Hours(6), 6.0 * HOUR_MS),
    (TimeInterval::Hours(12), 12.0 * HOUR_MS),
    (TimeInterval::Days(1), DAY_MS),
    (TimeInterval::Days(2), 2.0 * DAY_MS),
    (TimeInterval::Week, WEEK_MS),
    (TimeInterval::Months(1), MONTH_MS),
    (TimeInterval::Months(3), 3.0 * MONTH_MS),
    (TimeInterval::Years(1), YEAR_MS),
];

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn millis(t: &NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

impl TimeInterval {
    /// Pick the interval whose duration is closest to `span_ms / count`.
    pub fn for_span(span_ms: f64, count: usize) -> Self {
        let target = span_ms.abs() / count.max(1) as f64;
        let i = TICK_INTERVALS.partition_point(|(_, duration)| *duration <= target);
        if i == TICK_INTERVALS.len() {
            let years = tick_step(0.0, span_ms / YEAR_MS, count).max(1.0);
            return TimeInterval::Years(years as i32);
        }
        if i == 0 {
            return TimeInterval::Hours(1);
        }
        let (lower, lower_ms) = TICK_INTERVALS[i - 1];
        let (upper, upper_ms) = TICK_INTERVALS[i];
        if target / lower_ms < upper_ms / target {
            lower
        } else {
            upper
        }
    }

    /// Start of the base unit containing `t`.
    fn floor(&self, t: NaiveDateTime) -> NaiveDateTime {
        let date = t.date();
        match self {
            TimeInterval::Hours(_) => midnight(date) + Duration::hours(t.hour() as i64),
            TimeInterval::Days(_) => midnight(date),
            TimeInterval::Week => {
                let back = date.weekday().num_days_from_sunday() as i64;
                midnight(date - Duration::days(back))
            }
            TimeInterval::Months(_) => midnight(date.with_day(1).unwrap_or(date)),
            TimeInterval::Years(_) => {
                midnight(NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date))
            }
        }
    }

    /// Next base unit boundary after the aligned time `t`.
    fn step(&self, t: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            TimeInterval::Hours(_) => t.checked_add_signed(Duration::hours(1)),
            TimeInterval::Days(_) => t.checked_add_signed(Duration::days(1)),
            TimeInterval::Week => t.checked_add_signed(Duration::weeks(1)),
            TimeInterval::Months(_) => t.checked_add_months(Months::new(1)),
            TimeInterval::Years(_) => t.checked_add_months(Months::new(12)),
        }
    }

    fn keeps(&self, t: &NaiveDateTime) -> bool {
        match *self {
            TimeInterval::Hours(n) => t.hour() % n.max(1) == 0,
            TimeInterval::Days(n) => t.day0() % n.max(1) == 0,
            TimeInterval::Week => true,
            TimeInterval::Months(n) => t.month0() % n.max(1) == 0,
            TimeInterval::Years(n) => t.year().rem_euclid(n.max(1)) == 0,
        }
    }

    /// Aligned boundaries within `[start, stop]`, inclusive.
    pub fn range(&self, start: NaiveDateTime, stop: NaiveDateTime) -> Vec<NaiveDateTime> {
        let mut out = Vec::new();
        let mut t = self.floor(start);
        if t < start {
            match self.step(t) {
                Some(next) => t = next,
                None => return out,
            }
        }
        while t <= stop {
            if self.keeps(&t) {
                out.push(t);
            }
            match self.step(t) {
                Some(next) => t = next,
                None => break,
            }
        }
        out
    }
}

/// Maps a date-time domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub domain: (NaiveDateTime, NaiveDateTime),
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Pixel position of `t`. A single-instant domain maps to the middle of the range.
    pub fn apply(&self, t: &NaiveDateTime) -> f64 {
        let d0 = millis(&self.domain.0);
        let d1 = millis(&self.domain.1);
        let (r0, r1) = self.range;
        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }
        r0 + (millis(t) - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn apply_date(&self, date: &NaiveDate) -> f64 {
        self.apply(&midnight(*date))
    }

    pub fn interval(&self, count: usize) -> TimeInterval {
        TimeInterval::for_span(millis(&self.domain.1) - millis(&self.domain.0), count)
    }

    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        let (start, stop) = if self.domain.1 < self.domain.0 {
            (self.domain.1, self.domain.0)
        } else {
            self.domain
        };
        if start == stop {
            return vec![start];
        }
        self.interval(count).range(start, stop)
    }
}

/// Horizontal scale from the earliest to the latest date in `points`.
///
/// Returns `None` when there is nothing to scale.
pub fn compute_scale_x(points: &[DataPoint], config: &ChartConfig) -> Option<TimeScale> {
    let min = points.iter().map(|p| p.date).min()?;
    let max = points.iter().map(|p| p.date).max()?;
    Some(TimeScale::new(
        (midnight(min), midnight(max)),
        (config.x_range_start, config.inner_width()),
    ))
}
