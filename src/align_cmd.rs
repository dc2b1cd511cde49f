//! Align command: read two series, resample, write CSV.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use tsalign_io::{read_series_csv, write_resampled_csv, write_resampled_csv_file};
use tsalign_resample::resample;

use crate::cli::AlignArgs;
use crate::config::TsalignConfig;
use crate::convert;

/// Loads the TOML config. A missing file at the default path yields defaults.
fn load_config(path: &Path) -> Result<TsalignConfig> {
    if !path.exists() && path == Path::new("tsalign.toml") {
        return Ok(TsalignConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Run the align pipeline.
pub fn run(args: AlignArgs) -> Result<()> {
    let _cmd = info_span!("align").entered();

    // 1. Config: file, then command-line overrides.
    let mut config = load_config(&args.config)?;
    convert::apply_overrides(&mut config, &args)?;
    let resample_cfg = convert::build_resample_config(&config.resample);
    let (driving_cfg, reference_cfg) = convert::build_reader_configs(&config.input);

    // 2. Read both series.
    let driving = read_series_csv(&args.driving, &driving_cfg)
        .with_context(|| format!("failed to read driving series: {}", args.driving.display()))?;
    let reference = read_series_csv(&args.reference, &reference_cfg).with_context(|| {
        format!(
            "failed to read reference series: {}",
            args.reference.display()
        )
    })?;
    info!(
        driving = driving.name(),
        n_driving = driving.len(),
        reference = reference.name(),
        n_reference = reference.len(),
        "series loaded"
    );

    // 3. Resample.
    let out = resample(
        &driving.as_series().context("invalid driving series")?,
        &reference.as_series().context("invalid reference series")?,
        &resample_cfg,
    )
    .context("resampling failed")?;

    match out.residual_summary() {
        Some(s) => info!(
            n_out = s.count,
            n_dropped = driving.len() - s.count,
            exact_matches = s.exact_matches,
            max_abs_dt = s.max_abs_dt,
            mean_abs_dt = s.mean_abs_dt,
            "resampled"
        ),
        None => warn!("no driving samples fall inside the reference range"),
    }

    // 4. Write.
    let writer_cfg = convert::build_writer_config(&config.output, driving.name(), reference.name())?;
    match args.output {
        Some(ref path) => write_resampled_csv_file(path, &out, &writer_cfg)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => write_resampled_csv(io::stdout().lock(), &out, &writer_cfg)
            .context("failed to write output to stdout")?,
    }

    Ok(())
}
