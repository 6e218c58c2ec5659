//! Surface radiation terms: shortwave tiers, net shortwave, net longwave.

use tracing::debug;

use crate::fill::fill_missing;
use crate::quality::{Family, QualityRecord};

/// Stefan-Boltzmann constant per day (MJ K⁻⁴ m⁻² day⁻¹).
pub const STEFAN_BOLTZMANN_DAY: f64 = 4.903e-9;

/// Stefan-Boltzmann constant per hour (MJ K⁻⁴ m⁻² h⁻¹).
pub const STEFAN_BOLTZMANN_HOUR: f64 = 2.043e-10;

/// Relative shortwave radiation assumed when R_so is zero (night).
pub const NIGHT_RADIATION_RATIO: f64 = 0.8;

/// R_s from sunshine duration, Angstrom formula (FAO-56 Eq. 35).
///
/// With no possible daylight the relative sunshine is taken as zero.
pub fn angstrom_radiation(a_s: f64, b_s: f64, n_sun: f64, daylight: f64, ra: f64) -> f64 {
    let relative = if daylight > 0.0 { n_sun / daylight } else { 0.0 };
    (a_s + b_s * relative) * ra
}

/// R_s from the temperature range, Hargreaves radiation formula
/// (FAO-56 Eq. 50). An inverted range gives zero.
pub fn hargreaves_radiation(k_rs: f64, t_max: f64, t_min: f64, ra: f64) -> f64 {
    k_rs * (t_max - t_min).max(0.0).sqrt() * ra
}

/// Net shortwave radiation R_ns, FAO-56 Eq. 38.
pub fn net_shortwave(albedo: f64, rs: f64) -> f64 {
    (1.0 - albedo) * rs
}

/// Cloudiness factor `1.35 R_s/R_so − 0.35`.
///
/// The ratio is capped at 1; with `R_so <= 0` it is taken as
/// [`NIGHT_RADIATION_RATIO`].
pub fn cloudiness_factor(rs: f64, rso: f64) -> f64 {
    let ratio = if rso > 0.0 {
        (rs / rso).min(1.0)
    } else {
        NIGHT_RADIATION_RATIO
    };
    1.35 * ratio - 0.35
}

/// Humidity factor `0.34 − 0.14 √e_a`.
pub fn humidity_factor(e_a: f64) -> f64 {
    0.34 - 0.14 * e_a.sqrt()
}

/// Daily net longwave radiation R_nl, FAO-56 Eq. 39.
pub fn net_longwave_daily(t_max: f64, t_min: f64, e_a: f64, rs: f64, rso: f64) -> f64 {
    let kmax = (t_max + 273.16).powi(4);
    let kmin = (t_min + 273.16).powi(4);
    STEFAN_BOLTZMANN_DAY * (kmax + kmin) / 2.0 * humidity_factor(e_a) * cloudiness_factor(rs, rso)
}

/// Net longwave radiation over a sub-daily period of `hours` length, from
/// the period mean temperature.
pub fn net_longwave_period(t_mean: f64, e_a: f64, rs: f64, rso: f64, hours: f64) -> f64 {
    STEFAN_BOLTZMANN_HOUR
        * hours
        * (t_mean + 273.16).powi(4)
        * humidity_factor(e_a)
        * cloudiness_factor(rs, rso)
}

/// Inputs to the shortwave cascade.
pub(crate) struct ShortwaveInputs<'a> {
    pub n_sun: &'a [f64],
    pub daylight: &'a [f64],
    pub t_max: &'a [f64],
    pub t_min: &'a [f64],
    pub r_a: &'a [f64],
    pub a_s: f64,
    pub b_s: f64,
    pub k_rs: f64,
}

/// Resolves R_s through sunshine duration then temperature range.
pub(crate) fn shortwave(
    mut r_s: Vec<f64>,
    inputs: &ShortwaveInputs<'_>,
    quality: &mut QualityRecord,
) -> Vec<f64> {
    quality.bump_missing(Family::Shortwave, &r_s);
    let n = fill_missing(&mut r_s, |i| {
        angstrom_radiation(
            inputs.a_s,
            inputs.b_s,
            inputs.n_sun[i],
            inputs.daylight[i],
            inputs.r_a[i],
        )
    });
    debug!(n_filled = n, "R_s from sunshine duration");

    quality.bump_missing(Family::Shortwave, &r_s);
    let n = fill_missing(&mut r_s, |i| {
        hargreaves_radiation(inputs.k_rs, inputs.t_max[i], inputs.t_min[i], inputs.r_a[i])
    });
    debug!(n_filled = n, "R_s from temperature range");

    r_s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NAN: f64 = f64::NAN;

    #[test]
    fn example_10_angstrom() {
        // Rio de Janeiro, May: n = 220/31, N = 10.9, R_a = 25.1
        assert_relative_eq!(
            angstrom_radiation(0.25, 0.5, 220.0 / 31.0, 10.9, 25.1),
            14.5,
            epsilon = 0.1
        );
    }

    #[test]
    fn example_11_net_longwave() {
        // Tmax 25.1, Tmin 19.1, e_a 2.1, Rs/Rso = 14.5/18.8
        assert_relative_eq!(
            net_longwave_daily(25.1, 19.1, 2.1, 14.5, 18.8),
            3.5,
            epsilon = 0.05
        );
    }

    #[test]
    fn cloudiness_is_capped() {
        assert_relative_eq!(cloudiness_factor(20.0, 10.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(cloudiness_factor(0.0, 0.0), 1.35 * 0.8 - 0.35, epsilon = 1e-12);
    }

    #[test]
    fn inverted_range_gives_zero() {
        assert_eq!(hargreaves_radiation(0.16, 10.0, 12.0, 30.0), 0.0);
    }

    #[test]
    fn no_daylight_falls_back_to_intercept() {
        assert_eq!(angstrom_radiation(0.25, 0.5, 3.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn shortwave_tiers() {
        let inputs = ShortwaveInputs {
            n_sun: &[NAN, 8.0, NAN],
            daylight: &[12.0; 3],
            t_max: &[25.0; 3],
            t_min: &[16.0; 3],
            r_a: &[30.0; 3],
            a_s: 0.25,
            b_s: 0.5,
            k_rs: 0.16,
        };
        let mut quality = QualityRecord::zeroed(3);
        let rs = shortwave(vec![20.0, NAN, NAN], &inputs, &mut quality);
        assert_eq!(rs[0], 20.0);
        assert_relative_eq!(rs[1], (0.25 + 0.5 * 8.0 / 12.0) * 30.0, epsilon = 1e-12);
        assert_relative_eq!(rs[2], 0.16 * 3.0 * 30.0, epsilon = 1e-12);
        assert_eq!(quality.codes(), vec![0, 1000, 2000]);
    }
}
