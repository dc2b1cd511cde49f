//! Configuration for resampling.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ResampleError;

/// What to do with driving samples outside the reference's time range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeBehavior {
    /// Drop the sample from the output.
    #[default]
    Ignore,
    /// Clamp to the nearest boundary reference value.
    #[serde(alias = "zero-hold")]
    ZeroHold,
    /// Extend the boundary segment's slope.
    Extrapolate,
}

/// How to compute a value between two bracketing reference samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Step function: hold the preceding reference sample.
    #[serde(alias = "zero-hold")]
    ZeroHold,
    /// Straight line between the bracketing samples.
    #[default]
    Linear,
}

impl EdgeBehavior {
    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::ZeroHold => "zerohold",
            Self::Extrapolate => "extrapolate",
        }
    }
}

impl InterpolationMode {
    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZeroHold => "zerohold",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeBehavior {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "zerohold" | "zero-hold" => Ok(Self::ZeroHold),
            "extrapolate" => Ok(Self::Extrapolate),
            other => Err(ResampleError::InvalidConfig {
                reason: format!(
                    "unknown edge behavior {other:?} (expected ignore, zerohold or extrapolate)"
                ),
            }),
        }
    }
}

impl FromStr for InterpolationMode {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zerohold" | "zero-hold" => Ok(Self::ZeroHold),
            "linear" => Ok(Self::Linear),
            other => Err(ResampleError::InvalidConfig {
                reason: format!(
                    "unknown interpolation mode {other:?} (expected linear or zerohold)"
                ),
            }),
        }
    }
}

/// Configuration for [`resample`](crate::resample).
///
/// # Example
///
/// ```
/// use tsalign_resample::{EdgeBehavior, InterpolationMode, ResampleConfig};
///
/// let config = ResampleConfig::new()
///     .with_edge(EdgeBehavior::Extrapolate)
///     .with_interpolation(InterpolationMode::ZeroHold);
/// assert_eq!(config.edge(), EdgeBehavior::Extrapolate);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResampleConfig {
    edge: EdgeBehavior,
    interpolation: InterpolationMode,
}

impl ResampleConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `edge = Ignore`, `interpolation = Linear`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the out-of-range policy.
    pub fn with_edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Sets the in-range interpolation mode.
    pub fn with_interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Returns the out-of-range policy.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// Returns the interpolation mode.
    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }
}
