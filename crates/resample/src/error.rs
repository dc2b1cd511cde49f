//! Error types for the tsalign-resample crate.

/// Error type for all fallible operations in the tsalign-resample crate.
///
/// Every variant is a precondition violation on the caller's data or
/// configuration. None of them is retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResampleError {
    /// Returned when the reference series has no samples.
    #[error("reference series is empty")]
    EmptyReference,

    /// Returned when a series' value array does not match its time array.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched field.
        field: &'static str,
        /// Expected length (the length of the time array).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when a timestamp is NaN or infinite.
    #[error("non-finite timestamp in {series} at index {index}")]
    NonFiniteTime {
        /// Which series held the bad timestamp.
        series: &'static str,
        /// Position of the first bad timestamp.
        index: usize,
    },

    /// Returned when timestamps step backwards.
    #[error("{series} timestamps are not ascending at index {index}")]
    NotSorted {
        /// Which series is out of order.
        series: &'static str,
        /// Position of the first timestamp smaller than its predecessor.
        index: usize,
    },

    /// Returned when two equal reference timestamps would be used as the
    /// ends of an interpolation or extrapolation interval.
    #[error("zero-width reference interval between indices {lo} and {hi} at t = {time}")]
    ZeroWidthInterval {
        /// Lower reference index.
        lo: usize,
        /// Upper reference index.
        hi: usize,
        /// The shared timestamp.
        time: f64,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
