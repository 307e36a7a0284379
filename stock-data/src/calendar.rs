use chrono::{Datelike, Month, NaiveDate};

/// Companies offered by the company selector, in display order.
pub const COMPANIES: [&str; 5] = ["Apple", "Microsoft", "Amazon", "Google", "Meta"];

/// Full English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Company selected when the chart first mounts.
pub const DEFAULT_COMPANY: &str = COMPANIES[0];

/// Month selected when the chart first mounts.
pub const DEFAULT_MONTH: &str = "November";

/// Long month name of a date ("November" for 2023-11-02).
pub fn month_name(date: &NaiveDate) -> &'static str {
    // month0() is always 0..=11
    MONTH_NAMES[date.month0() as usize]
}

/// Parse a full month name back into a chrono `Month`.
///
/// Matching is exact, like the filter predicate: "november" is not a month.
pub fn parse_month(name: &str) -> Option<Month> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .and_then(|idx| Month::try_from(idx as u8 + 1).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 2).unwrap();
        assert_eq!(month_name(&date), "November");

        let jan = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(month_name(&jan), "January");
    }

    #[test]
    fn test_month_names_match_chrono() {
        for (idx, name) in MONTH_NAMES.iter().enumerate() {
            let month = Month::try_from(idx as u8 + 1).unwrap();
            assert_eq!(month.name(), *name);
        }
    }

    #[test]
    fn test_parse_month_is_exact() {
        assert_eq!(parse_month("March"), Some(Month::March));
        assert_eq!(parse_month("march"), None);
        assert_eq!(parse_month("Smarch"), None);
    }
}
