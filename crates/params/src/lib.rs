//! FAO-56 parameter estimation cascade.
//!
//! Station records are rarely complete. [`estimate`] takes whatever subset
//! of the recognised [`Field`]s is present and derives every intermediate
//! the Penman-Monteith and Hargreaves equations need, falling back through
//! substitute formulas in a fixed priority order. Each fallback is recorded
//! per row in a [`QualityRecord`].
//!
//! # Derivation order
//!
//! ```text
//!  P ──▶ γ
//!  T_mean ◀── (T_max + T_min)/2
//!  e_s / e_mean, Δ
//!  e_a ◀── T_dew ◀── RH_max,RH_min ◀── RH_mean ◀── T_min      (daily)
//!  e_a ◀── RH_mean · e_mean                                   (sub-daily)
//!  R_a, N ──▶ R_so
//!  R_s ◀── n_sun/N (Angstrom) ◀── √(T_max − T_min) (Hargreaves)
//!  R_ns, R_nl ──▶ R_n ◀── R_ns − R_nl
//!  G ◀── 0
//!  U_2 ◀── U_z profile ◀── 2 m/s
//! ```
//!
//! Every step reads only finished columns and writes its own, so rows are
//! independent and the fills run in parallel.
//!
//! # Quick start
//!
//! ```ignore
//! use evapo_calendar::Cadence;
//! use evapo_params::{Field, Observations, Site, estimate};
//!
//! let obs = Observations::new(index)
//!     .with_field(Field::TMax, t_max)?
//!     .with_field(Field::TMin, t_min)?;
//! let (params, quality) = estimate(&obs, &Site::new(), Cadence::Daily)?;
//! println!("{:?}", quality.codes());
//! ```
//!
//! The scalar formulas are public for callers that need a single value.

mod atmosphere;
mod cascade;
mod derived;
mod error;
mod field;
mod fill;
mod humidity;
mod observations;
mod quality;
mod radiation;
mod site;
mod solar;
mod wind;

pub use atmosphere::{
    pressure_from_elevation, psychrometric_constant, saturation_slope, saturation_vapour_pressure,
};
pub use cascade::estimate;
pub use derived::{DerivedParams, Saturation};
pub use error::ParamsError;
pub use field::Field;
pub use humidity::{
    vapour_pressure_from_dewpoint, vapour_pressure_from_rh_extremes,
    vapour_pressure_from_rh_mean, vapour_pressure_from_t_min,
};
pub use observations::Observations;
pub use quality::{EstimationQuality, Family, QualityRecord, QualitySummary};
pub use radiation::{
    NIGHT_RADIATION_RATIO, STEFAN_BOLTZMANN_DAY, STEFAN_BOLTZMANN_HOUR, angstrom_radiation,
    cloudiness_factor, hargreaves_radiation, humidity_factor, net_longwave_daily,
    net_longwave_period, net_shortwave,
};
pub use site::Site;
pub use solar::{
    Period, SOLAR_CONSTANT, clear_sky_radiation, daylight_hours, daylight_hours_at,
    extraterrestrial_daily, extraterrestrial_period, inverse_relative_distance,
    seasonal_correction, solar_declination, sunset_hour_angle,
};
pub use wind::{DEFAULT_WIND_2M, wind_at_2m};
