//! Core types and filtering for daily stock price data.
//!
//! - `data_point`: a single (date, company, open, close) record
//! - `dataset`: shared, immutable sequence of records
//! - `selection`: the company/month pair chosen by the user
//! - `filter`: the selection predicate over a dataset
//! - `loader`: CSV parsing into a `Dataset`

pub mod calendar;
pub mod data_point;
pub mod dataset;
pub mod filter;
pub mod loader;
pub mod selection;

pub use data_point::DataPoint;
pub use dataset::Dataset;
pub use filter::filter_points;
pub use loader::load_dataset;
pub use selection::Selection;
