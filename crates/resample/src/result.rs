//! Output type for resampling.

/// Four parallel columns, one entry per emitted point.
///
/// `x` and `t` are the driving sample's value and timestamp, `y` is the
/// reference value aligned to `t`, and `dt` is the signed distance from `t`
/// to the reference sample that answered it (0 on an exact match).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resampled {
    x: Vec<f64>,
    y: Vec<f64>,
    t: Vec<f64>,
    dt: Vec<f64>,
}

/// One row of a [`Resampled`] output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampledPoint {
    /// Driving value.
    pub x: f64,
    /// Aligned reference value.
    pub y: f64,
    /// Driving timestamp.
    pub t: f64,
    /// Signed residual to the reference sample used.
    pub dt: f64,
}

/// Aggregate view of the `dt` column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualSummary {
    /// Number of points.
    pub count: usize,
    /// Points answered by an exact timestamp match.
    pub exact_matches: usize,
    /// Largest `|dt|`.
    pub max_abs_dt: f64,
    /// Mean of `|dt|`.
    pub mean_abs_dt: f64,
}

impl Resampled {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            t: Vec::with_capacity(n),
            dt: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, x: f64, y: f64, t: f64, dt: f64) {
        self.x.push(x);
        self.y.push(y);
        self.t.push(t);
        self.dt.push(dt);
    }

    /// Returns the driving values.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the aligned reference values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the driving timestamps.
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Returns the signed residuals.
    pub fn dt(&self) -> &[f64] {
        &self.dt
    }

    /// Number of emitted points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if no point was emitted.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over the output row by row.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = ResampledPoint> + '_ {
        (0..self.len()).map(|i| ResampledPoint {
            x: self.x[i],
            y: self.y[i],
            t: self.t[i],
            dt: self.dt[i],
        })
    }

    /// Consumes the output and returns `(x, y, t, dt)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.x, self.y, self.t, self.dt)
    }

    /// Summarises the residual column, or `None` if the output is empty.
    pub fn residual_summary(&self) -> Option<ResidualSummary> {
        if self.dt.is_empty() {
            return None;
        }
        let mut max_abs_dt = 0.0_f64;
        let mut sum_abs_dt = 0.0;
        let mut exact_matches = 0;
        for &dt in &self.dt {
            if dt == 0.0 {
                exact_matches += 1;
            }
            max_abs_dt = max_abs_dt.max(dt.abs());
            sum_abs_dt += dt.abs();
        }
        Some(ResidualSummary {
            count: self.dt.len(),
            exact_matches,
            max_abs_dt,
            mean_abs_dt: sum_abs_dt / self.dt.len() as f64,
        })
    }
}
