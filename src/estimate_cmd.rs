//! Estimate command: derive the parameter table and its quality record.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use evapo_io::{OutputFrame, write_frame};

use crate::cli::EstimateArgs;
use crate::convert;
use crate::pipeline;

/// Run the cascade and write the parameter table plus a quality summary.
pub fn run(args: EstimateArgs) -> Result<()> {
    let _cmd = info_span!("estimate").entered();
    let config = pipeline::load_config(&args.config)?;

    let input = pipeline::resolve_path(args.input, config.io.input.as_ref(), "input", "--input")?;
    let output = pipeline::resolve_path(
        args.output,
        config.io.params_output.as_ref(),
        "params_output",
        "--output",
    )?;
    let writer_cfg = convert::build_writer_config(&config.io)?;

    let est = pipeline::estimate_from(&config, &input)?;
    let summary = est.quality.summary();
    info!(
        n_rows = summary.n_rows,
        n_measured = summary.n_measured,
        cadence = %est.cadence,
        "parameters derived"
    );

    let frame = OutputFrame::from_params(&est.params, &est.quality)
        .context("failed to assemble parameter table")?;
    write_frame(&output, &frame, &writer_cfg)
        .with_context(|| format!("failed to write parameters: {}", output.display()))?;

    // params.csv -> params.quality.json
    let quality_path = output.with_extension("quality.json");
    let json = serde_json::to_string_pretty(&summary).context("failed to encode quality summary")?;
    std::fs::write(&quality_path, json)
        .with_context(|| format!("failed to write quality summary: {}", quality_path.display()))?;
    info!(path = %quality_path.display(), "quality summary written");

    Ok(())
}
