//! Accumulated validation utilities.
//!
//! [`ValidationCollector`] gathers every problem found while reading a file
//! so they can be reported together as a single [`IoError::Validation`].

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Check that timestamps never step backwards.
///
/// `rows[i]` is the 1-based file line the `i`-th timestamp came from, used in
/// messages.
pub(crate) fn validate_ascending(times: &[f64], rows: &[usize]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, w) in times.windows(2).enumerate() {
        if w[1] < w[0] {
            c.push(format!(
                "line {}: time {} is earlier than previous time {}",
                rows[i + 1],
                w[1],
                w[0]
            ));
        }
    }

    c
}
