//! Solar geometry: extraterrestrial radiation, daylight hours and clear-sky
//! radiation.

use std::f64::consts::PI;

/// Solar constant (MJ m⁻² min⁻¹).
pub const SOLAR_CONSTANT: f64 = 0.0820;

/// Inverse relative Earth-Sun distance, FAO-56 Eq. 23.
pub fn inverse_relative_distance(doy: u32) -> f64 {
    1.0 + 0.033 * (2.0 * PI * f64::from(doy) / 365.0).cos()
}

/// Solar declination (rad), FAO-56 Eq. 24.
pub fn solar_declination(doy: u32) -> f64 {
    0.409 * (2.0 * PI * f64::from(doy) / 365.0 - 1.39).sin()
}

/// Sunset hour angle ω_s (rad), FAO-56 Eq. 25.
///
/// The arccos argument is clamped so polar day gives π and polar night 0.
pub fn sunset_hour_angle(lat_rad: f64, declination: f64) -> f64 {
    (-lat_rad.tan() * declination.tan()).clamp(-1.0, 1.0).acos()
}

/// Maximum possible sunshine duration N (hours), FAO-56 Eq. 34.
pub fn daylight_hours(sunset_angle: f64) -> f64 {
    24.0 * sunset_angle / PI
}

/// Seasonal correction for solar time S_c (hours), FAO-56 Eq. 32-33.
pub fn seasonal_correction(doy: u32) -> f64 {
    let b = 2.0 * PI * (f64::from(doy) - 81.0) / 364.0;
    0.1645 * (2.0 * b).sin() - 0.1255 * b.cos() - 0.025 * b.sin()
}

/// Daily extraterrestrial radiation R_a (MJ m⁻² day⁻¹), FAO-56 Eq. 21.
pub fn extraterrestrial_daily(latitude: f64, doy: u32) -> f64 {
    let phi = latitude.to_radians();
    let dr = inverse_relative_distance(doy);
    let decl = solar_declination(doy);
    let ws = sunset_hour_angle(phi, decl);
    let ra = 24.0 * 60.0 / PI
        * SOLAR_CONSTANT
        * dr
        * (ws * phi.sin() * decl.sin() + phi.cos() * decl.cos() * ws.sin());
    ra.max(0.0)
}

/// One sub-daily period for [`extraterrestrial_period`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period {
    /// Day of year (1..=366).
    pub doy: u32,
    /// Local standard clock hour at the start of the period.
    pub start_hour: f64,
    /// Period length in hours.
    pub length_hours: f64,
}

/// Extraterrestrial radiation over a sub-daily period (MJ m⁻² per period),
/// FAO-56 Eq. 28-31.
///
/// Longitudes are east positive. The hour angles are clamped to the
/// sunrise/sunset angles, so periods entirely at night give zero.
pub fn extraterrestrial_period(
    latitude: f64,
    longitude: f64,
    tz_longitude: f64,
    period: Period,
) -> f64 {
    let phi = latitude.to_radians();
    let dr = inverse_relative_distance(period.doy);
    let decl = solar_declination(period.doy);
    let ws = sunset_hour_angle(phi, decl);

    let mid = period.start_hour + period.length_hours / 2.0;
    let solar_time = mid + (longitude - tz_longitude) / 15.0 + seasonal_correction(period.doy);
    let w = PI / 12.0 * (solar_time - 12.0);
    let half = PI * period.length_hours / 24.0;
    let w2 = (w + half).clamp(-ws, ws);
    let w1 = (w - half).clamp(-ws, ws).min(w2);

    let ra = 12.0 * 60.0 / PI
        * SOLAR_CONSTANT
        * dr
        * ((w2 - w1) * phi.sin() * decl.sin() + phi.cos() * decl.cos() * (w2.sin() - w1.sin()));
    ra.max(0.0)
}

/// Daylight hours N for a latitude and day of year.
pub fn daylight_hours_at(latitude: f64, doy: u32) -> f64 {
    daylight_hours(sunset_hour_angle(
        latitude.to_radians(),
        solar_declination(doy),
    ))
}

/// Clear-sky radiation R_so, FAO-56 Eq. 37.
pub fn clear_sky_radiation(elevation: f64, ra: f64) -> f64 {
    (0.75 + 2e-5 * elevation) * ra
}
