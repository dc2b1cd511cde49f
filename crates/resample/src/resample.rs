//! Aligns a reference series onto driving timestamps.

use tracing::debug;
use tsalign_search::find_lower_bound;

use crate::config::{EdgeBehavior, InterpolationMode, ResampleConfig};
use crate::error::ResampleError;
use crate::result::Resampled;
use crate::series::TimeSeries;

/// Reference range and boundary lines, computed once per call.
struct Boundary {
    t_min: f64,
    t_max: f64,
    v_low: f64,
    v_high: f64,
    slope_low: f64,
    slope_high: f64,
}

impl Boundary {
    /// `times` must be non-empty.
    fn new(times: &[f64], values: &[f64], edge: EdgeBehavior) -> Result<Self, ResampleError> {
        let last = times.len() - 1;
        let mut boundary = Self {
            t_min: times[0],
            t_max: times[last],
            v_low: values[0],
            v_high: values[last],
            slope_low: 0.0,
            slope_high: 0.0,
        };

        // A single reference point extrapolates flat.
        if edge == EdgeBehavior::Extrapolate && last > 0 {
            boundary.slope_low = slope(times, values, 0, 1)?;
            boundary.slope_high = slope(times, values, last - 1, last)?;
        }

        Ok(boundary)
    }

    fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }

    /// Value and residual for an out-of-range `t`.
    fn outside(&self, t: f64, edge: EdgeBehavior) -> Option<(f64, f64)> {
        let below = t < self.t_min;
        let (anchor, v, m) = if below {
            (self.t_min, self.v_low, self.slope_low)
        } else {
            (self.t_max, self.v_high, self.slope_high)
        };
        let dt = t - anchor;
        match edge {
            EdgeBehavior::Ignore => None,
            EdgeBehavior::ZeroHold => Some((v, dt)),
            EdgeBehavior::Extrapolate => Some((v + m * dt, dt)),
        }
    }
}

fn slope(times: &[f64], values: &[f64], lo: usize, hi: usize) -> Result<f64, ResampleError> {
    let width = times[hi] - times[lo];
    if width <= 0.0 {
        return Err(ResampleError::ZeroWidthInterval {
            lo,
            hi,
            time: times[lo],
        });
    }
    Ok((values[hi] - values[lo]) / width)
}

/// Residual to whichever bracket end is closer; ties go to `t_hi`.
fn nearest_offset(t: f64, t_lo: f64, t_hi: f64) -> f64 {
    if (t - t_lo).abs() < (t - t_hi).abs() {
        t - t_lo
    } else {
        t - t_hi
    }
}

/// Value and residual for an in-range `t`, given `idx = lower_bound(t)`.
///
/// `t` lies in `[times[0], times[last]]`, so `idx` is in bounds and, unless
/// `times[idx] == t`, `idx >= 1`.
fn inside(
    t: f64,
    idx: usize,
    times: &[f64],
    values: &[f64],
    mode: InterpolationMode,
) -> Result<(f64, f64), ResampleError> {
    if times[idx] == t {
        return Ok((values[idx], 0.0));
    }

    let lo = idx - 1;
    match mode {
        InterpolationMode::ZeroHold => Ok((values[lo], t - times[lo])),
        InterpolationMode::Linear => {
            let (t_lo, t_hi) = (times[lo], times[idx]);
            let width = t_hi - t_lo;
            if width <= 0.0 {
                return Err(ResampleError::ZeroWidthInterval {
                    lo,
                    hi: idx,
                    time: t_lo,
                });
            }
            let frac = (t - t_lo) / width;
            let y = frac * values[idx] + (1.0 - frac) * values[lo];
            Ok((y, nearest_offset(t, t_lo, t_hi)))
        }
    }
}

/// Resamples `reference` onto the timestamps of `driving`.
///
/// Emits one point per driving sample, except that samples outside the
/// reference's time range are dropped under [`EdgeBehavior::Ignore`].
///
/// Driving timestamps are non-decreasing (guaranteed by [`TimeSeries`]), so
/// the search for each sample resumes where the previous one stopped and the
/// whole pass costs `O(n + m)` comparisons in the typical case and never
/// more than `O(n log m)`.
///
/// # Errors
///
/// - [`ResampleError::EmptyReference`] if `reference` has no samples.
/// - [`ResampleError::ZeroWidthInterval`] if two equal reference timestamps
///   form an interpolation bracket, or a boundary segment under
///   [`EdgeBehavior::Extrapolate`].
#[tracing::instrument(
    skip_all,
    fields(
        n_driving = driving.len(),
        n_reference = reference.len(),
        edge = %config.edge(),
        interpolation = %config.interpolation(),
    )
)]
pub fn resample(
    driving: &TimeSeries<'_>,
    reference: &TimeSeries<'_>,
    config: &ResampleConfig,
) -> Result<Resampled, ResampleError> {
    if reference.is_empty() {
        return Err(ResampleError::EmptyReference);
    }

    let yt = reference.times();
    let yv = reference.values();
    let boundary = Boundary::new(yt, yv, config.edge())?;

    let mut out = Resampled::with_capacity(driving.len());
    let mut cursor = 0;
    let mut dropped = 0usize;

    for (&t, &x) in driving.times().iter().zip(driving.values()) {
        if boundary.contains(t) {
            cursor = find_lower_bound(t, yt, cursor);
            let (y, dt) = inside(t, cursor, yt, yv, config.interpolation())?;
            out.push(x, y, t, dt);
        } else if let Some((y, dt)) = boundary.outside(t, config.edge()) {
            out.push(x, y, t, dt);
        } else {
            dropped += 1;
        }
    }

    debug!(emitted = out.len(), dropped, "resampled");
    Ok(out)
}

/// [`resample`] over raw slices.
///
/// Validates both series first.
///
/// # Errors
///
/// Returns [`ResampleError`] if either series has mismatched lengths,
/// non-finite or descending timestamps, or for any reason [`resample`]
/// fails.
pub fn resample_slices(
    driving_times: &[f64],
    driving_values: &[f64],
    reference_times: &[f64],
    reference_values: &[f64],
    edge: EdgeBehavior,
    interpolation: InterpolationMode,
) -> Result<Resampled, ResampleError> {
    let driving = TimeSeries::labelled("driving", driving_times, driving_values)?;
    let reference = TimeSeries::labelled("reference", reference_times, reference_values)?;
    let config = ResampleConfig::new()
        .with_edge(edge)
        .with_interpolation(interpolation);
    resample(&driving, &reference, &config)
}
