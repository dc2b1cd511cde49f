//! # tsalign-io
//!
//! Read `time,value` series from CSV files and write aligned output back to
//! CSV. Bridges external files into tsalign-resample's `&[f64]` slice-based
//! APIs.

mod error;
mod reader;
mod series;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, read_series, read_series_csv};
pub use series::OwnedSeries;
pub use writer::{WriterConfig, write_resampled_csv, write_resampled_csv_file};
