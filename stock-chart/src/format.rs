//! Text formatting for axis labels, tooltips and path data.

use chrono::{NaiveDate, NaiveDateTime};

/// Time axis label format: abbreviated weekday and zero-padded day ("Wed 01").
pub const TIME_TICK_FORMAT: &str = "%a %d";

/// Tooltip date format: "MM/DD/YYYY".
pub const TOOLTIP_DATE_FORMAT: &str = "%m/%d/%Y";

pub fn time_tick(t: &NaiveDateTime) -> String {
    t.format(TIME_TICK_FORMAT).to_string()
}

pub fn tooltip_date(date: &NaiveDate) -> String {
    date.format(TOOLTIP_DATE_FORMAT).to_string()
}

/// Price with two decimals.
pub fn price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Decimals needed to tell apart ticks `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let exponent = step.abs().log10().floor() as i32;
    (-exponent).max(0) as usize
}

/// Linear axis label for a tick `value` on an axis with tick spacing `step`.
pub fn linear_tick(value: f64, step: f64) -> String {
    format!("{:.*}", precision_for_step(step), value)
}

/// Compact path coordinate: at most three decimals, no trailing zeros.
pub fn coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_tick() {
        let t = NaiveDate::from_ymd_opt(2023, 11, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(time_tick(&t), "Wed 01");
    }

    #[test]
    fn test_tooltip_date() {
        let date = NaiveDate::from_ymd_opt(2023, 2, 7).unwrap();
        assert_eq!(tooltip_date(&date), "02/07/2023");
    }

    #[test]
    fn test_linear_tick_precision() {
        assert_eq!(linear_tick(150.2, 0.2), "150.2");
        assert_eq!(linear_tick(150.0, 0.2), "150.0");
        assert_eq!(linear_tick(130.0, 2.0), "130");
        assert_eq!(linear_tick(0.05, 0.05), "0.05");
    }

    #[test]
    fn test_coord() {
        assert_eq!(coord(10.0), "10");
        assert_eq!(coord(0.6666666), "0.667");
        assert_eq!(coord(-0.0001), "0");
    }
}
