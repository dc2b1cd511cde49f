//! Validated borrowed view of a time series.

use crate::error::ResampleError;

/// A time series borrowed from the caller: parallel `times` and `values`.
///
/// Timestamps may use any consistent unit (typically epoch milliseconds).
/// Construction checks that both slices have the same length, that every
/// timestamp is finite, and that timestamps are non-decreasing. Values are
/// carried through untouched and may be non-finite.
#[derive(Debug, Clone, Copy)]
pub struct TimeSeries<'a> {
    times: &'a [f64],
    values: &'a [f64],
}

impl<'a> TimeSeries<'a> {
    /// Build a series from parallel time and value slices.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError`] if the lengths differ, a timestamp is
    /// non-finite, or timestamps step backwards.
    pub fn new(times: &'a [f64], values: &'a [f64]) -> Result<Self, ResampleError> {
        Self::labelled("series", times, values)
    }

    /// Like [`new`](Self::new), naming the series in any error.
    pub(crate) fn labelled(
        label: &'static str,
        times: &'a [f64],
        values: &'a [f64],
    ) -> Result<Self, ResampleError> {
        if values.len() != times.len() {
            return Err(ResampleError::LengthMismatch {
                field: label,
                expected: times.len(),
                got: values.len(),
            });
        }
        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(ResampleError::NonFiniteTime {
                series: label,
                index,
            });
        }
        if let Some(index) = times.windows(2).position(|w| w[1] < w[0]) {
            return Err(ResampleError::NotSorted {
                series: label,
                index: index + 1,
            });
        }
        Ok(Self { times, values })
    }

    /// Returns the timestamps.
    pub fn times(&self) -> &'a [f64] {
        self.times
    }

    /// Returns the values.
    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// First and last timestamp, or `None` if empty.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.times.last()?))
    }
}
