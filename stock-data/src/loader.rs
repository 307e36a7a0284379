//! CSV loading for stock price data.
//!
//! Expected format (with headers): `Date,Company,Open,Close`. Extra columns
//! (`High`, `Low`, `Volume`, ...) are ignored, and columns may appear in any
//! order.
//!
//! # Example CSV
//! ```text
//! Date,Company,Open,High,Low,Close
//! 2023-11-01,Apple,150.0,153.1,149.8,152.0
//! ```

use crate::data_point::DataPoint;
use crate::dataset::Dataset;
use anyhow::{bail, Context};

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Company", "Open", "Close"];

/// Parse CSV text into a `Dataset`.
///
/// Rows with an unparsable date or a non-numeric or non-finite price are
/// skipped. A header missing one of [`REQUIRED_COLUMNS`] is an error.
pub fn load_dataset(csv_data: &str) -> anyhow::Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers().context("reading CSV header")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("CSV header is missing the {column} column");
        }
    }

    let mut points = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.deserialize::<DataPoint>() {
        match result {
            Ok(point) if point.has_finite_prices() => points.push(point),
            Ok(point) => {
                log::debug!("loader: skipping non-finite prices on {}", point.date);
                skipped += 1;
            }
            Err(err) => {
                log::debug!("loader: skipping row: {}", err);
                skipped += 1;
            }
        }
    }

    log::info!(
        "loader: Loaded {} data points, skipped {} malformed rows",
        points.len(),
        skipped
    );
    Ok(Dataset::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const STOCK_CSV: &str = "\
Date,Company,Open,High,Low,Close,Volume
2023-11-01,Apple,150.0,153.1,149.8,152.0,1000
2023-11-02,Apple,152.0,152.5,150.2,151.0,1200
2023-11-01,Microsoft,300.0,306.0,299.5,305.0,900
";

    #[test]
    fn load_dataset_from_csv() {
        let data = load_dataset(STOCK_CSV).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0].date, NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
        assert_eq!(data[0].company, "Apple");
        assert_eq!(data[1].open, 152.0);
        assert_eq!(data[1].close, 151.0);
        assert_eq!(data[2].company, "Microsoft");
    }

    #[test]
    fn load_dataset_skips_malformed_rows() {
        let csv = "\
Company,Close,Open,Date
Apple,152.0,150.0,11/01/2023
Apple,---,150.0,2023-11-02
Apple,151.0,152.0,not-a-date
Apple,NaN,152.0,2023-11-04
Google,131.5,130.0,2023-11-03
";
        let data = load_dataset(csv).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].date, NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
        assert_eq!(data[1].company, "Google");
    }

    #[test]
    fn load_dataset_requires_price_columns() {
        let csv = "Date,Company,Open\n2023-11-01,Apple,150.0\n";
        let err = load_dataset(csv).unwrap_err();
        assert!(err.to_string().contains("Close"));
    }

    #[test]
    fn load_dataset_header_only_is_empty() {
        let data = load_dataset("Date,Company,Open,Close\n").unwrap();
        assert!(data.is_empty());
    }
}
