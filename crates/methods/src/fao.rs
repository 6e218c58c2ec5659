//! FAO-56 Penman-Monteith.

use evapo_calendar::Cadence;
use evapo_params::DerivedParams;
use rayon::prelude::*;

use crate::config::{EtBounds, InterpConfig};
use crate::error::MethodsError;
use crate::method::Method;
use crate::post::finish;
use crate::table::EtTable;

/// Aerodynamic coefficient of the daily equation (FAO-56 Eq. 6).
pub const DAILY_COEFFICIENT: f64 = 900.0;

/// Aerodynamic coefficient of the hourly equation (FAO-56 Eq. 53).
pub const HOURLY_COEFFICIENT: f64 = 37.0;

/// One Penman-Monteith evaluation.
///
/// `coefficient` is 900 for days and 37 per hour of period; `deficit` is
/// `e_s − e_a` (daily) or `e_mean − e_a` (sub-daily).
#[allow(clippy::too_many_arguments)]
pub fn penman_monteith(
    delta: f64,
    r_n: f64,
    g: f64,
    gamma: f64,
    t_mean: f64,
    u_2: f64,
    deficit: f64,
    coefficient: f64,
) -> f64 {
    let radiation = 0.408 * delta * (r_n - g);
    let aero = gamma * coefficient / (t_mean + 273.0) * u_2 * deficit;
    (radiation + aero) / (delta + gamma * (1.0 + 0.34 * u_2))
}

/// Reference ET by FAO-56 Penman-Monteith over a derived table.
///
/// Values outside `bounds` become `NaN`. With `interp`, the series is put on
/// a fixed-step grid and a gap-filled column is added next to the raw one.
/// Output is rounded to two decimals.
///
/// # Errors
///
/// - [`MethodsError::CadenceMismatch`] if `cadence` differs from the cadence
///   `params` was derived at
/// - [`MethodsError::InvalidBounds`] / [`MethodsError::InvalidConfig`] for bad
///   post-processing settings
/// - [`MethodsError::Regularize`] if the series cannot be regularised
pub fn eto_fao(
    params: &DerivedParams,
    cadence: Cadence,
    bounds: &EtBounds,
    interp: Option<&InterpConfig>,
) -> Result<EtTable, MethodsError> {
    bounds.validate()?;
    if let Some(cfg) = interp {
        cfg.validate()?;
    }
    if cadence != params.cadence() {
        return Err(MethodsError::CadenceMismatch {
            method: Method::Fao.label().to_string(),
            cadence,
            detail: format!("parameters were derived at {} cadence", params.cadence()),
        });
    }

    let coefficient = match cadence {
        Cadence::Daily => DAILY_COEFFICIENT,
        Cadence::SubDaily => HOURLY_COEFFICIENT * params.period_hours(),
    };
    let deficit = params.vapour_pressure_deficit();
    let raw: Vec<f64> = (0..params.len())
        .into_par_iter()
        .map(|i| {
            penman_monteith(
                params.delta()[i],
                params.r_n()[i],
                params.g()[i],
                params.gamma()[i],
                params.t_mean()[i],
                params.u_2()[i],
                deficit[i],
                coefficient,
            )
        })
        .collect();

    finish(Method::Fao, params, raw, bounds, interp)
}
