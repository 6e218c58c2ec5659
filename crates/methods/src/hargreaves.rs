//! Hargreaves temperature-range method.

use chrono::TimeDelta;
use evapo_calendar::Cadence;
use evapo_params::DerivedParams;
use rayon::prelude::*;

use crate::config::{EtBounds, InterpConfig};
use crate::error::MethodsError;
use crate::method::Method;
use crate::post::finish;
use crate::table::EtTable;

/// One Hargreaves evaluation (mm/day), FAO-56 Eq. 52 with R_a converted to
/// evaporation equivalent.
pub fn hargreaves(t_mean: f64, t_max: f64, t_min: f64, r_a: f64) -> f64 {
    0.0023 * (t_mean + 17.8) * (t_max - t_min).sqrt() * r_a * 0.408
}

/// Reference ET by Hargreaves over a daily derived table.
///
/// Post-processing matches [`eto_fao`](crate::eto_fao).
///
/// # Errors
///
/// - [`MethodsError::CadenceMismatch`] if `cadence` is sub-daily, `params`
///   was derived sub-daily, or its index is spaced below one day
/// - [`MethodsError::InvalidBounds`] / [`MethodsError::InvalidConfig`] for bad
///   post-processing settings
/// - [`MethodsError::Regularize`] if the series cannot be regularised
pub fn eto_hargreaves(
    params: &DerivedParams,
    cadence: Cadence,
    bounds: &EtBounds,
    interp: Option<&InterpConfig>,
) -> Result<EtTable, MethodsError> {
    bounds.validate()?;
    if let Some(cfg) = interp {
        cfg.validate()?;
    }
    check_daily(params, cadence)?;

    let raw: Vec<f64> = (0..params.len())
        .into_par_iter()
        .map(|i| {
            hargreaves(
                params.t_mean()[i],
                params.t_max()[i],
                params.t_min()[i],
                params.r_a()[i],
            )
        })
        .collect();

    finish(Method::Hargreaves, params, raw, bounds, interp)
}

fn check_daily(params: &DerivedParams, cadence: Cadence) -> Result<(), MethodsError> {
    let mismatch = |cadence: Cadence, detail: String| MethodsError::CadenceMismatch {
        method: Method::Hargreaves.label().to_string(),
        cadence,
        detail,
    };
    if !cadence.is_daily() {
        return Err(mismatch(
            cadence,
            "requires daily or coarser data".to_string(),
        ));
    }
    if !params.cadence().is_daily() {
        return Err(mismatch(
            params.cadence(),
            "parameters were derived sub-daily".to_string(),
        ));
    }
    if let Ok(step) = params.index().infer_step()
        && step < TimeDelta::days(1)
    {
        return Err(mismatch(
            Cadence::SubDaily,
            format!("index is spaced every {step}"),
        ));
    }
    Ok(())
}
