//! Station geometry and empirical coefficients.

use crate::error::ParamsError;

/// Immutable site context for the cascade.
///
/// Longitudes are decimal degrees, east positive. `tz_longitude` is the
/// central meridian of the local time zone and only matters at sub-daily
/// cadence.
///
/// # Example
///
/// ```
/// use evapo_params::Site;
///
/// let site = Site::new()
///     .with_elevation(100.0)
///     .with_latitude(50.8)
///     .with_wind_height(10.0);
/// assert!(site.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    elevation: f64,
    latitude: f64,
    longitude: f64,
    tz_longitude: f64,
    wind_height: f64,
    k_rs: f64,
    a_s: f64,
    b_s: f64,
    albedo: f64,
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

impl Site {
    /// Creates a site with defaults.
    ///
    /// Defaults: `elevation = 500`, `latitude = -43.6`, `longitude = 172`,
    /// `tz_longitude = 173`, `wind_height = 2`, `k_rs = 0.16`,
    /// `a_s = 0.25`, `b_s = 0.5`, `albedo = 0.23`.
    pub fn new() -> Self {
        Self {
            elevation: 500.0,
            latitude: -43.6,
            longitude: 172.0,
            tz_longitude: 173.0,
            wind_height: 2.0,
            k_rs: 0.16,
            a_s: 0.25,
            b_s: 0.5,
            albedo: 0.23,
        }
    }

    /// Sets the elevation above mean sea level (m).
    pub fn with_elevation(mut self, z: f64) -> Self {
        self.elevation = z;
        self
    }

    /// Sets the latitude (decimal degrees, north positive).
    pub fn with_latitude(mut self, lat: f64) -> Self {
        self.latitude = lat;
        self
    }

    /// Sets the longitude (decimal degrees, east positive).
    pub fn with_longitude(mut self, lon: f64) -> Self {
        self.longitude = lon;
        self
    }

    /// Sets the time-zone central meridian (decimal degrees, east positive).
    pub fn with_tz_longitude(mut self, lon: f64) -> Self {
        self.tz_longitude = lon;
        self
    }

    /// Sets the wind measurement height (m).
    pub fn with_wind_height(mut self, z: f64) -> Self {
        self.wind_height = z;
        self
    }

    /// Sets the Hargreaves radiation coefficient (0.16 inland, 0.19 coastal).
    pub fn with_k_rs(mut self, k: f64) -> Self {
        self.k_rs = k;
        self
    }

    /// Sets the Angstrom intercept.
    pub fn with_a_s(mut self, a: f64) -> Self {
        self.a_s = a;
        self
    }

    /// Sets the Angstrom slope.
    pub fn with_b_s(mut self, b: f64) -> Self {
        self.b_s = b;
        self
    }

    /// Sets the surface albedo.
    pub fn with_albedo(mut self, a: f64) -> Self {
        self.albedo = a;
        self
    }

    // --- Accessors ---

    /// Returns the elevation (m).
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Returns the latitude (decimal degrees).
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude (decimal degrees).
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the time-zone central meridian (decimal degrees).
    pub fn tz_longitude(&self) -> f64 {
        self.tz_longitude
    }

    /// Returns the wind measurement height (m).
    pub fn wind_height(&self) -> f64 {
        self.wind_height
    }

    /// Returns the Hargreaves radiation coefficient.
    pub fn k_rs(&self) -> f64 {
        self.k_rs
    }

    /// Returns the Angstrom intercept.
    pub fn a_s(&self) -> f64 {
        self.a_s
    }

    /// Returns the Angstrom slope.
    pub fn b_s(&self) -> f64 {
        self.b_s
    }

    /// Returns the albedo.
    pub fn albedo(&self) -> f64 {
        self.albedo
    }

    /// Validates this site.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::InvalidSite`] for non-finite values, a latitude
    /// outside [-90, 90], longitudes outside [-180, 180], a wind height too
    /// low for the logarithmic profile, an albedo outside [0, 1], or
    /// negative radiation coefficients.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let all = [
            ("elevation", self.elevation),
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("tz_longitude", self.tz_longitude),
            ("wind_height", self.wind_height),
            ("k_rs", self.k_rs),
            ("a_s", self.a_s),
            ("b_s", self.b_s),
            ("albedo", self.albedo),
        ];
        if let Some((name, v)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParamsError::InvalidSite {
                reason: format!("{name} must be finite, got {v}"),
            });
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ParamsError::InvalidSite {
                reason: format!("latitude {} outside [-90, 90]", self.latitude),
            });
        }
        for (name, lon) in [
            ("longitude", self.longitude),
            ("tz_longitude", self.tz_longitude),
        ] {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(ParamsError::InvalidSite {
                    reason: format!("{name} {lon} outside [-180, 180]"),
                });
            }
        }
        // ln(67.8 z - 5.42) must be positive
        if 67.8 * self.wind_height - 5.42 <= 1.0 {
            return Err(ParamsError::InvalidSite {
                reason: format!("wind_height {} m is too low", self.wind_height),
            });
        }
        if !(0.0..=1.0).contains(&self.albedo) {
            return Err(ParamsError::InvalidSite {
                reason: format!("albedo {} outside [0, 1]", self.albedo),
            });
        }
        for (name, v) in [("k_rs", self.k_rs), ("a_s", self.a_s), ("b_s", self.b_s)] {
            if v < 0.0 {
                return Err(ParamsError::InvalidSite {
                    reason: format!("{name} must be non-negative, got {v}"),
                });
            }
        }
        Ok(())
    }
}
