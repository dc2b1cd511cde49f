//! CSV reader configuration and parsing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::series::OwnedSeries;
use crate::validate::{ValidationCollector, validate_ascending};

/// Configuration for reading a series from a headered CSV file.
///
/// The [`Default`] reads the `time` column and takes the first other column
/// as the value.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Header of the timestamp column.
    time_column: String,
    /// Header of the value column; `None` picks the first non-time column.
    value_column: Option<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            time_column: "time".into(),
            value_column: None,
        }
    }
}

impl ReaderConfig {
    /// Set the timestamp column header.
    pub fn with_time_column(mut self, name: impl Into<String>) -> Self {
        self.time_column = name.into();
        self
    }

    /// Set the value column header, or `None` for the first non-time column.
    pub fn with_value_column(mut self, name: Option<impl Into<String>>) -> Self {
        self.value_column = name.map(Into::into);
        self
    }

    /// Returns the timestamp column header.
    pub fn time_column(&self) -> &str {
        &self.time_column
    }

    /// Returns the requested value column header, if any.
    pub fn value_column(&self) -> Option<&str> {
        self.value_column.as_deref()
    }

    fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        if self.time_column.trim().is_empty() {
            c.push("time column name must not be empty");
        }
        if let Some(ref v) = self.value_column {
            if v.trim().is_empty() {
                c.push("value column name must not be empty");
            } else if *v == self.time_column {
                c.push(format!("value column must differ from time column {v:?}"));
            }
        }
        c.finish()
    }
}

/// Read one series from a CSV file on disk.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, and otherwise
/// whatever [`read_series`] returns.
pub fn read_series_csv(path: &Path, config: &ReaderConfig) -> Result<OwnedSeries, IoError> {
    config.validate()?;
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IoError::Csv {
        reason: format!("{}: {e}", path.display()),
    })?;

    info!(path = %path.display(), "reading series");
    read_series(file, config)
}

/// Read one series from any CSV source.
///
/// Rows with an empty or NaN value are skipped. Every other problem
/// (unparsable cells, non-finite times, times stepping backwards) is
/// collected and reported together.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] if a requested header is absent,
/// [`IoError::Validation`] if any row is invalid, or [`IoError::Csv`] on a
/// malformed file.
pub fn read_series<R: Read>(source: R, config: &ReaderConfig) -> Result<OwnedSeries, IoError> {
    config.validate()?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    let headers = reader.headers()?.clone();
    let available = headers.iter().collect::<Vec<_>>().join(",");

    let time_idx = headers
        .iter()
        .position(|h| h == config.time_column)
        .ok_or_else(|| IoError::MissingColumn {
            name: config.time_column.clone(),
            available: available.clone(),
        })?;
    let value_idx = match config.value_column {
        Some(ref name) => headers.iter().position(|h| h == name),
        None => (0..headers.len()).find(|&i| i != time_idx),
    }
    .ok_or_else(|| IoError::MissingColumn {
        name: config
            .value_column
            .clone()
            .unwrap_or_else(|| "<any value column>".into()),
        available,
    })?;
    let name = headers.get(value_idx).unwrap_or_default().to_string();

    let mut times = Vec::new();
    let mut values = Vec::new();
    let mut lines = Vec::new();
    let mut skipped = 0usize;
    let mut c = ValidationCollector::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(i + 2, |p| usize::try_from(p.line()).unwrap_or(usize::MAX));
        let time_cell = record.get(time_idx).unwrap_or_default();
        let value_cell = record.get(value_idx).unwrap_or_default();

        let t = match time_cell.parse::<f64>() {
            Ok(t) if t.is_finite() => t,
            _ => {
                c.push(format!("line {line}: invalid time {time_cell:?}"));
                continue;
            }
        };

        if value_cell.is_empty() {
            skipped += 1;
            continue;
        }
        let v = match value_cell.parse::<f64>() {
            Ok(v) if v.is_nan() => {
                skipped += 1;
                continue;
            }
            Ok(v) => v,
            Err(_) => {
                c.push(format!("line {line}: invalid value {value_cell:?}"));
                continue;
            }
        };

        times.push(t);
        values.push(v);
        lines.push(line);
    }

    c.finish()?;
    validate_ascending(&times, &lines).finish()?;

    debug!(series = %name, n = times.len(), skipped, "series parsed");
    Ok(OwnedSeries::new(name, times, values))
}
