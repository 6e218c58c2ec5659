//! Actual vapour pressure and its substitute tiers.

use tracing::debug;

use crate::atmosphere::saturation_vapour_pressure;
use crate::fill::fill_missing;
use crate::quality::{Family, QualityRecord};

/// e_a from dewpoint temperature, FAO-56 Eq. 14.
pub fn vapour_pressure_from_dewpoint(t_dew: f64) -> f64 {
    saturation_vapour_pressure(t_dew)
}

/// e_a from daily humidity extremes, FAO-56 Eq. 17.
pub fn vapour_pressure_from_rh_extremes(e_min: f64, e_max: f64, rh_max: f64, rh_min: f64) -> f64 {
    (e_min * rh_max / 100.0 + e_max * rh_min / 100.0) / 2.0
}

/// e_a from mean relative humidity and the saturation terms, FAO-56 Eq. 19.
pub fn vapour_pressure_from_rh_mean(e_min: f64, e_max: f64, rh_mean: f64) -> f64 {
    rh_mean / 100.0 * (e_max + e_min) / 2.0
}

/// e_a assuming the dewpoint equals the minimum temperature, FAO-56 Eq. 48.
pub fn vapour_pressure_from_t_min(t_min: f64) -> f64 {
    saturation_vapour_pressure(t_min)
}

/// Daily inputs to the vapour pressure cascade.
pub(crate) struct DailyHumidity<'a> {
    pub t_dew: &'a [f64],
    pub rh_max: &'a [f64],
    pub rh_min: &'a [f64],
    pub rh_mean: &'a [f64],
    pub t_min: &'a [f64],
    pub e_max: &'a [f64],
    pub e_min: &'a [f64],
}

/// Resolves daily e_a through dewpoint, RH extremes, RH mean and T_min.
///
/// Dewpoint substitution is free; each later tier adds one to the vapour
/// pressure counter of every row still missing when that tier starts.
pub(crate) fn daily_vapour_pressure(
    mut e_a: Vec<f64>,
    inputs: &DailyHumidity<'_>,
    quality: &mut QualityRecord,
) -> Vec<f64> {
    let n = fill_missing(&mut e_a, |i| vapour_pressure_from_dewpoint(inputs.t_dew[i]));
    debug!(n_filled = n, "e_a from dewpoint");

    quality.bump_missing(Family::VapourPressure, &e_a);
    let n = fill_missing(&mut e_a, |i| {
        vapour_pressure_from_rh_extremes(
            inputs.e_min[i],
            inputs.e_max[i],
            inputs.rh_max[i],
            inputs.rh_min[i],
        )
    });
    debug!(n_filled = n, "e_a from RH extremes");

    quality.bump_missing(Family::VapourPressure, &e_a);
    let n = fill_missing(&mut e_a, |i| {
        vapour_pressure_from_rh_mean(inputs.e_min[i], inputs.e_max[i], inputs.rh_mean[i])
    });
    debug!(n_filled = n, "e_a from RH mean");

    quality.bump_missing(Family::VapourPressure, &e_a);
    let n = fill_missing(&mut e_a, |i| vapour_pressure_from_t_min(inputs.t_min[i]));
    debug!(n_filled = n, "e_a from T_min");

    e_a
}

/// Resolves sub-daily e_a from the mean saturation pressure and RH_mean.
pub(crate) fn sub_daily_vapour_pressure(
    mut e_a: Vec<f64>,
    e_mean: &[f64],
    rh_mean: &[f64],
    quality: &mut QualityRecord,
) -> Vec<f64> {
    quality.bump_missing(Family::VapourPressure, &e_a);
    let n = fill_missing(&mut e_a, |i| e_mean[i] * rh_mean[i] / 100.0);
    debug!(n_filled = n, "e_a from RH mean");
    e_a
}
