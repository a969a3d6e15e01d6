//! Result sinks: console report, CSV file, bar chart
//!
//! Sinks receive the ranked result unchanged, in order. They carry no
//! algorithmic weight; any write failure is fatal and surfaces as
//! [`crate::MapReduceError::Sink`].

pub mod chart;
pub mod csv;
pub mod report;

pub use chart::write_chart;
pub use csv::{write_csv, write_csv_path};
pub use report::write_report;
