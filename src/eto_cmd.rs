//! ETo command: run the cascade, then one or both formulas.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use evapo_io::{OutputFrame, write_frame};
use evapo_methods::{Method, eto_both, evaluate};

use crate::cli::{EtoArgs, MethodArg};
use crate::convert;
use crate::pipeline;

/// Compute ETo and write the resulting table.
pub fn run(args: EtoArgs) -> Result<()> {
    let _cmd = info_span!("eto").entered();
    let config = pipeline::load_config(&args.config)?;

    let input = pipeline::resolve_path(args.input, config.io.input.as_ref(), "input", "--input")?;
    let output = pipeline::resolve_path(args.output, config.io.output.as_ref(), "output", "--output")?;
    let writer_cfg = convert::build_writer_config(&config.io)?;
    let bounds = convert::build_bounds(&config.bounds)?;
    let interp = convert::build_interp_config(&config.interp)?;

    let est = pipeline::estimate_from(&config, &input)?;

    let method = match args.method {
        MethodArg::Both if !est.cadence.is_daily() => {
            warn!("Hargreaves needs daily data; computing FAO-56 only");
            MethodArg::Fao
        }
        m => m,
    };

    let table = match method {
        MethodArg::Fao => evaluate(Method::Fao, &est.params, est.cadence, &bounds, interp.as_ref()),
        MethodArg::Hargreaves => evaluate(
            Method::Hargreaves,
            &est.params,
            est.cadence,
            &bounds,
            interp.as_ref(),
        ),
        MethodArg::Both => eto_both(&est.params, est.cadence, &bounds, interp.as_ref()),
    }
    .context("ET evaluation failed")?;

    let frame = OutputFrame::from_et(&table).context("failed to assemble ET table")?;
    write_frame(&output, &frame, &writer_cfg)
        .with_context(|| format!("failed to write ET table: {}", output.display()))?;
    info!(path = %output.display(), n_rows = table.len(), "ET table written");

    Ok(())
}
