use serde::Deserialize;
use tsalign_resample::{EdgeBehavior, InterpolationMode};

/// Top-level tsalign configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TsalignConfig {
    /// Input settings.
    #[serde(default)]
    pub input: InputToml,

    /// Resample settings.
    #[serde(default)]
    pub resample: ResampleToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    #[serde(default = "default_time_column")]
    pub time_column: String,
    #[serde(default)]
    pub driving_column: Option<String>,
    #[serde(default)]
    pub reference_column: Option<String>,
}

impl Default for InputToml {
    fn default() -> Self {
        Self {
            time_column: default_time_column(),
            driving_column: None,
            reference_column: None,
        }
    }
}

fn default_time_column() -> String {
    "time".to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResampleToml {
    #[serde(default)]
    pub edge: EdgeBehavior,
    #[serde(default)]
    pub interpolation: InterpolationMode,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_time_divisor")]
    pub time_divisor: f64,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            time_divisor: default_time_divisor(),
        }
    }
}

fn default_time_divisor() -> f64 {
    1000.0
}
