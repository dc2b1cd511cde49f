//! CSV export of aligned output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;
use tsalign_resample::Resampled;

use crate::error::IoError;

/// Configuration for writing a [`Resampled`] output as CSV.
///
/// The header is `<x name>,<y name>,unixtime_x,delta_t_y`. The time and
/// residual columns are divided by `time_divisor`, so the default of `1000`
/// turns epoch milliseconds into seconds.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Header for the driving value column.
    x_name: String,
    /// Header for the aligned reference value column.
    y_name: String,
    /// Divisor applied to `t` and `dt` on output.
    time_divisor: f64,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            x_name: "x".into(),
            y_name: "y".into(),
            time_divisor: 1000.0,
        }
    }
}

impl WriterConfig {
    /// Sets the driving value column header.
    pub fn with_x_name(mut self, name: impl Into<String>) -> Self {
        self.x_name = name.into();
        self
    }

    /// Sets the reference value column header.
    pub fn with_y_name(mut self, name: impl Into<String>) -> Self {
        self.y_name = name.into();
        self
    }

    /// Sets the divisor applied to the time and residual columns.
    pub fn with_time_divisor(mut self, divisor: f64) -> Self {
        self.time_divisor = divisor;
        self
    }

    /// Returns the time divisor.
    pub fn time_divisor(&self) -> f64 {
        self.time_divisor
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `time_divisor` is not finite and
    /// positive.
    fn validate(&self) -> Result<(), IoError> {
        if !self.time_divisor.is_finite() || self.time_divisor <= 0.0 {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "time_divisor must be finite and positive, got {}",
                    self.time_divisor
                ),
            });
        }
        Ok(())
    }
}

/// Write `output` as CSV to any writer.
///
/// # Errors
///
/// Returns [`IoError::Validation`] for an invalid config, or
/// [`IoError::Csv`] if writing fails.
pub fn write_resampled_csv<W: Write>(
    sink: W,
    output: &Resampled,
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;

    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record([
        config.x_name.as_str(),
        config.y_name.as_str(),
        "unixtime_x",
        "delta_t_y",
    ])?;
    for p in output.iter() {
        writer.write_record([
            p.x.to_string(),
            p.y.to_string(),
            (p.t / config.time_divisor).to_string(),
            (p.dt / config.time_divisor).to_string(),
        ])?;
    }
    writer.flush().map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Write `output` as CSV to a file, creating or truncating it.
///
/// # Errors
///
/// Same as [`write_resampled_csv`], plus [`IoError::Csv`] if the file
/// cannot be created.
pub fn write_resampled_csv_file(
    path: &Path,
    output: &Resampled,
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;
    let file = File::create(path).map_err(|e| IoError::Csv {
        reason: format!("{}: {e}", path.display()),
    })?;
    write_resampled_csv(file, output, config)?;
    info!(path = %path.display(), n_rows = output.len(), "wrote aligned output");
    Ok(())
}
