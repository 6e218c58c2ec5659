//! Pressure, psychrometric constant and the saturation vapour pressure curve.

/// Atmospheric pressure (kPa) at elevation `z` (m), FAO-56 Eq. 7.
pub fn pressure_from_elevation(z: f64) -> f64 {
    101.3 * ((293.0 - 0.0065 * z) / 293.0).powf(5.26)
}

/// Psychrometric constant γ (kPa/°C) from pressure (kPa), FAO-56 Eq. 8.
pub fn psychrometric_constant(pressure: f64) -> f64 {
    0.665e-3 * pressure
}

/// Saturation vapour pressure e°(T) (kPa), FAO-56 Eq. 11.
pub fn saturation_vapour_pressure(t: f64) -> f64 {
    0.6108 * (17.27 * t / (t + 237.3)).exp()
}

/// Slope Δ of the saturation curve (kPa/°C) at `t`, FAO-56 Eq. 13.
pub fn saturation_slope(t: f64) -> f64 {
    4098.0 * saturation_vapour_pressure(t) / (t + 237.3).powi(2)
}
