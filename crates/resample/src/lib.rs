//! Time-series alignment for tsalign.
//!
//! This crate resamples a *reference* series onto the timestamps of a
//! *driving* series. Each driving sample is located in the reference
//! timestamps with a lower-bound search, then answered by an exact match,
//! a zero-order hold, or linear interpolation. Driving samples outside the
//! reference's time range are dropped, clamped, or extrapolated according
//! to [`EdgeBehavior`].
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  TimeSeries  │────▶│ Lower-bound    │────▶│ Interpolate /    │
//!  │  (validated) │     │ search (cursor)│     │ edge policy      │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use tsalign_resample::{EdgeBehavior, ResampleConfig, TimeSeries, resample};
//!
//! let driving = TimeSeries::new(&[0.0, 1.0, 2.0], &[10.0, 11.0, 12.0])?;
//! let reference = TimeSeries::new(&[0.0, 2.0], &[0.0, 4.0])?;
//! let config = ResampleConfig::new().with_edge(EdgeBehavior::ZeroHold);
//!
//! let out = resample(&driving, &reference, &config)?;
//! assert_eq!(out.y(), &[0.0, 2.0, 4.0]);
//! # Ok::<(), tsalign_resample::ResampleError>(())
//! ```

mod config;
mod error;
mod resample;
mod result;
mod series;

pub use config::{EdgeBehavior, InterpolationMode, ResampleConfig};
pub use error::ResampleError;
pub use resample::{resample, resample_slices};
pub use result::{ResampledPoint, Resampled, ResidualSummary};
pub use series::TimeSeries;
pub use tsalign_search::find_lower_bound;
