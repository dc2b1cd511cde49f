//! Owned series read from a file.

use tsalign_resample::{ResampleError, TimeSeries};

/// A named series that owns its data.
///
/// Lends a validated [`TimeSeries`] view for resampling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnedSeries {
    name: String,
    times: Vec<f64>,
    values: Vec<f64>,
}

impl OwnedSeries {
    /// Creates a named series. Lengths and ordering are checked by
    /// [`as_series`](Self::as_series).
    pub fn new(name: impl Into<String>, times: Vec<f64>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            times,
            values,
        }
    }

    /// Returns the series name (the value column's header).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the timestamps.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Borrow as a validated [`TimeSeries`].
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError`] if lengths differ or timestamps are
    /// non-finite or descending.
    pub fn as_series(&self) -> Result<TimeSeries<'_>, ResampleError> {
        TimeSeries::new(&self.times, &self.values)
    }
}
