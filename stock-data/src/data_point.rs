use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Date format used in the stock CSV: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Alternate date format some exports use: "MM/DD/YYYY"
pub const US_DATE_FORMAT: &str = "%m/%d/%Y";

/// One trading day for one company.
///
/// Field names on the wire follow the CSV header (`Date,Company,Open,Close`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(rename = "Date", deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "Close")]
    pub close: f64,
}

impl DataPoint {
    pub fn new(date: NaiveDate, company: impl Into<String>, open: f64, close: f64) -> Self {
        Self {
            date,
            company: company.into(),
            open,
            close,
        }
    }

    /// Close minus open.
    pub fn difference(&self) -> f64 {
        self.close - self.open
    }

    /// Lower of the two prices.
    pub fn low(&self) -> f64 {
        self.open.min(self.close)
    }

    /// Higher of the two prices.
    pub fn high(&self) -> f64 {
        self.open.max(self.close)
    }

    /// Both prices are real numbers. `low` and `high` silently drop NaN, so
    /// anything placing a point on a scale checks this first.
    pub fn has_finite_prices(&self) -> bool {
        self.open.is_finite() && self.close.is_finite()
    }
}

/// Parse either of the accepted date formats.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, US_DATE_FORMAT))
        .ok()
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}
