//! The estimation cascade.

use chrono::TimeDelta;
use evapo_calendar::Cadence;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::atmosphere::{
    pressure_from_elevation, psychrometric_constant, saturation_slope, saturation_vapour_pressure,
};
use crate::derived::{DerivedParams, Saturation};
use crate::error::ParamsError;
use crate::field::Field;
use crate::fill::{count_missing, derive_column, fill_missing, map_column};
use crate::humidity::{DailyHumidity, daily_vapour_pressure, sub_daily_vapour_pressure};
use crate::observations::Observations;
use crate::quality::{Family, QualityRecord};
use crate::radiation::{
    ShortwaveInputs, net_longwave_daily, net_longwave_period, net_shortwave, shortwave,
};
use crate::site::Site;
use crate::solar::{
    Period, clear_sky_radiation, daylight_hours_at, extraterrestrial_daily,
    extraterrestrial_period,
};
use crate::wind::{DEFAULT_WIND_2M, wind_at_2m};

/// Derives every FAO-56 intermediate from a sparse observation table.
///
/// Each derivation step only fills rows that are still missing, falling back
/// through substitute formulas in a fixed order, and records every fallback
/// taken in the returned [`QualityRecord`]. Optional fields may be absent
/// entirely; the result is complete for every row that carries the cadence
/// minimum. Rows lacking it stay `NaN` and are listed by
/// [`DerivedParams::incomplete_rows`].
///
/// # Errors
///
/// - [`ParamsError::InvalidSite`] if the site fails validation
/// - [`ParamsError::InsufficientInput`] if a cadence minimum field is absent
///   from the whole table; daily data needs both `T_max` and `T_min`
pub fn estimate(
    obs: &Observations,
    site: &Site,
    cadence: Cadence,
) -> Result<(DerivedParams, QualityRecord), ParamsError> {
    site.validate()?;
    check_minimum_inputs(obs, cadence)?;

    let n = obs.len();
    let index = obs.index();
    let mut quality = QualityRecord::zeroed(n);
    let period = match cadence {
        Cadence::Daily => TimeDelta::days(1),
        // single-row sub-daily tables are taken as hourly
        Cadence::SubDaily => index.infer_step().unwrap_or_else(|_| TimeDelta::hours(1)),
    };
    debug!(n_rows = n, %cadence, period = %period, "starting cascade");

    // Atmosphere
    let mut pressure = obs.values(Field::Pressure);
    quality.bump_missing(Family::Pressure, &pressure);
    let p_site = pressure_from_elevation(site.elevation());
    let filled = fill_missing(&mut pressure, |_| p_site);
    debug!(n_filled = filled, "P from elevation");
    let gamma = map_column(&pressure, psychrometric_constant);

    // Temperature
    let t_max = obs.values(Field::TMax);
    let t_min = obs.values(Field::TMin);
    let mut t_mean = obs.values(Field::TMean);
    quality.bump_missing(Family::MeanTemperature, &t_mean);
    let filled = fill_missing(&mut t_mean, |i| (t_max[i] + t_min[i]) / 2.0);
    debug!(n_filled = filled, "T_mean from extremes");
    let delta = map_column(&t_mean, saturation_slope);

    // Humidity
    let rh_mean = obs.values(Field::RhMean);
    let (saturation, e_a) = match cadence {
        Cadence::Daily => {
            let e_max = map_column(&t_max, saturation_vapour_pressure);
            let e_min = map_column(&t_min, saturation_vapour_pressure);
            let e_s = derive_column(n, |i| (e_max[i] + e_min[i]) / 2.0);
            let e_a = daily_vapour_pressure(
                obs.values(Field::VapourPressure),
                &DailyHumidity {
                    t_dew: &obs.values(Field::TDew),
                    rh_max: &obs.values(Field::RhMax),
                    rh_min: &obs.values(Field::RhMin),
                    rh_mean: &rh_mean,
                    t_min: &t_min,
                    e_max: &e_max,
                    e_min: &e_min,
                },
                &mut quality,
            );
            (Saturation::Daily { e_max, e_min, e_s }, e_a)
        }
        Cadence::SubDaily => {
            let e_mean = map_column(&t_mean, saturation_vapour_pressure);
            let e_a = sub_daily_vapour_pressure(
                obs.values(Field::VapourPressure),
                &e_mean,
                &rh_mean,
                &mut quality,
            );
            (Saturation::SubDaily { e_mean }, e_a)
        }
    };

    // Solar geometry
    let doys = index.days_of_year();
    let latitude = site.latitude();
    let daylight: Vec<f64> = doys
        .par_iter()
        .map(|&doy| daylight_hours_at(latitude, doy))
        .collect();
    let r_a = match cadence {
        Cadence::Daily => derive_column(n, |i| extraterrestrial_daily(latitude, doys[i])),
        Cadence::SubDaily => {
            let hours = index.hours();
            let length_hours = period.num_seconds() as f64 / 3600.0;
            derive_column(n, |i| {
                extraterrestrial_period(
                    latitude,
                    site.longitude(),
                    site.tz_longitude(),
                    Period {
                        doy: doys[i],
                        start_hour: hours[i],
                        length_hours,
                    },
                )
            })
        }
    };
    let r_so = map_column(&r_a, |ra| clear_sky_radiation(site.elevation(), ra));

    // Radiation
    let r_s = shortwave(
        obs.values(Field::ShortwaveRadiation),
        &ShortwaveInputs {
            n_sun: &obs.values(Field::SunshineHours),
            daylight: &daylight,
            t_max: &t_max,
            t_min: &t_min,
            r_a: &r_a,
            a_s: site.a_s(),
            b_s: site.b_s(),
            k_rs: site.k_rs(),
        },
        &mut quality,
    );
    let r_ns = map_column(&r_s, |rs| net_shortwave(site.albedo(), rs));
    let r_nl = match cadence {
        Cadence::Daily => derive_column(n, |i| {
            net_longwave_daily(t_max[i], t_min[i], e_a[i], r_s[i], r_so[i])
        }),
        Cadence::SubDaily => {
            let hours = period.num_seconds() as f64 / 3600.0;
            derive_column(n, |i| {
                net_longwave_period(t_mean[i], e_a[i], r_s[i], r_so[i], hours)
            })
        }
    };

    let mut r_n = obs.values(Field::NetRadiation);
    quality.bump_missing(Family::NetRadiation, &r_n);
    let filled = fill_missing(&mut r_n, |i| r_ns[i] - r_nl[i]);
    debug!(n_filled = filled, "R_n from R_ns - R_nl");

    let mut g = obs.values(Field::SoilHeatFlux);
    quality.bump_missing(Family::SoilHeat, &g);
    let filled = fill_missing(&mut g, |_| 0.0);
    debug!(n_filled = filled, "G assumed zero");

    // Wind
    let u_z = obs.values(Field::WindSpeed);
    let mut u_2 = map_column(&u_z, |u| wind_at_2m(u, site.wind_height()));
    quality.bump_missing(Family::Wind, &u_2);
    let filled = fill_missing(&mut u_2, |_| DEFAULT_WIND_2M);
    debug!(n_filled = filled, "U_2 assumed 2 m/s");

    let params = DerivedParams {
        index: index.clone(),
        cadence,
        period,
        pressure,
        gamma,
        t_max,
        t_min,
        t_mean,
        saturation,
        delta,
        e_a,
        r_a,
        daylight,
        r_so,
        r_s,
        r_ns,
        r_nl,
        r_n,
        g,
        u_2,
    };

    let incomplete = params.incomplete_rows();
    if !incomplete.is_empty() {
        warn!(
            n_incomplete = incomplete.len(),
            first_row = incomplete[0],
            n_missing_e_a = count_missing(params.e_a()),
            "rows missing a minimum input remain incomplete"
        );
    }
    info!(
        n_rows = n,
        %cadence,
        n_incomplete = incomplete.len(),
        "parameter estimation complete"
    );

    Ok((params, quality))
}

/// Checks the cadence minimum is present somewhere in the table.
fn check_minimum_inputs(obs: &Observations, cadence: Cadence) -> Result<(), ParamsError> {
    let has_extremes = obs.has(Field::TMax) && obs.has(Field::TMin);
    let mut missing = Vec::new();
    match cadence {
        Cadence::Daily => {
            for field in [Field::TMax, Field::TMin] {
                if !obs.has(field) {
                    missing.push(field.name().to_string());
                }
            }
        }
        Cadence::SubDaily => {
            if !(obs.has(Field::TMean) || has_extremes) {
                missing.push("T_mean (or T_max and T_min)".to_string());
            }
            if !(obs.has(Field::VapourPressure) || obs.has(Field::RhMean)) {
                missing.push("e_a or RH_mean".to_string());
            }
            if !(obs.has(Field::ShortwaveRadiation)
                || obs.has(Field::SunshineHours)
                || has_extremes)
            {
                missing.push("R_s, n_sun or T_max and T_min".to_string());
            }
        }
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ParamsError::InsufficientInput {
            cadence,
            missing: missing.join("; "),
        })
    }
}
