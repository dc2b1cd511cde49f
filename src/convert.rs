//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use tsalign_io::{ReaderConfig, WriterConfig};
use tsalign_resample::{EdgeBehavior, InterpolationMode, ResampleConfig};

use crate::cli::AlignArgs;
use crate::config::*;

/// Parses an edge behavior name.
pub fn parse_edge(s: &str) -> Result<EdgeBehavior> {
    s.parse().context("invalid --edge")
}

/// Parses an interpolation mode name.
pub fn parse_interpolation(s: &str) -> Result<InterpolationMode> {
    s.parse().context("invalid --interpolation")
}

/// Folds command-line overrides into the file configuration.
pub fn apply_overrides(config: &mut TsalignConfig, args: &AlignArgs) -> Result<()> {
    if let Some(ref edge) = args.edge {
        config.resample.edge = parse_edge(edge)?;
    }
    if let Some(ref mode) = args.interpolation {
        config.resample.interpolation = parse_interpolation(mode)?;
    }
    if let Some(divisor) = args.time_divisor {
        config.output.time_divisor = divisor;
    }
    if args.driving_column.is_some() {
        config.input.driving_column.clone_from(&args.driving_column);
    }
    if args.reference_column.is_some() {
        config.input.reference_column.clone_from(&args.reference_column);
    }
    Ok(())
}

/// Builds a [`ResampleConfig`] from the TOML resample configuration.
pub fn build_resample_config(resample: &ResampleToml) -> ResampleConfig {
    ResampleConfig::new()
        .with_edge(resample.edge)
        .with_interpolation(resample.interpolation)
}

/// Builds the reader configs for the driving and reference files.
pub fn build_reader_configs(input: &InputToml) -> (ReaderConfig, ReaderConfig) {
    let base = ReaderConfig::default().with_time_column(&input.time_column);
    (
        base.clone().with_value_column(input.driving_column.as_deref()),
        base.with_value_column(input.reference_column.as_deref()),
    )
}

/// Builds a [`WriterConfig`] from the TOML output configuration, naming the
/// value columns after the two series.
pub fn build_writer_config(output: &OutputToml, x_name: &str, y_name: &str) -> Result<WriterConfig> {
    if !output.time_divisor.is_finite() || output.time_divisor <= 0.0 {
        bail!(
            "time_divisor must be finite and positive, got {}",
            output.time_divisor
        );
    }
    Ok(WriterConfig::default()
        .with_x_name(x_name)
        .with_y_name(y_name)
        .with_time_divisor(output.time_divisor))
}
