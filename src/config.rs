use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Evapo configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EvapoConfig {
    /// Station geometry and radiation coefficients.
    #[serde(default)]
    pub site: SiteToml,

    /// Cadence and input regularisation.
    #[serde(default)]
    pub time: TimeToml,

    /// Plausible ETo range.
    #[serde(default)]
    pub bounds: BoundsToml,

    /// Gap filling of the ET output.
    #[serde(default)]
    pub interp: InterpToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteToml {
    #[serde(default = "default_elevation")]
    pub elevation: f64,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_tz_longitude")]
    pub tz_longitude: f64,
    #[serde(default = "default_wind_height")]
    pub wind_height: f64,
    #[serde(default = "default_k_rs")]
    pub k_rs: f64,
    #[serde(default = "default_a_s")]
    pub a_s: f64,
    #[serde(default = "default_b_s")]
    pub b_s: f64,
    #[serde(default = "default_albedo")]
    pub albedo: f64,
}

impl Default for SiteToml {
    fn default() -> Self {
        Self {
            elevation: default_elevation(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            tz_longitude: default_tz_longitude(),
            wind_height: default_wind_height(),
            k_rs: default_k_rs(),
            a_s: default_a_s(),
            b_s: default_b_s(),
            albedo: default_albedo(),
        }
    }
}

fn default_elevation() -> f64 {
    500.0
}
fn default_latitude() -> f64 {
    -43.6
}
fn default_longitude() -> f64 {
    172.0
}
fn default_tz_longitude() -> f64 {
    173.0
}
fn default_wind_height() -> f64 {
    2.0
}
fn default_k_rs() -> f64 {
    0.16
}
fn default_a_s() -> f64 {
    0.25
}
fn default_b_s() -> f64 {
    0.5
}
fn default_albedo() -> f64 {
    0.23
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeToml {
    #[serde(default = "default_cadence")]
    pub cadence: String,
    #[serde(default)]
    pub regularize: bool,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default = "default_max_gap")]
    pub max_gap: usize,
}

impl Default for TimeToml {
    fn default() -> Self {
        Self {
            cadence: default_cadence(),
            regularize: false,
            frequency: None,
            method: None,
            max_gap: default_max_gap(),
        }
    }
}

fn default_cadence() -> String {
    "days".to_string()
}
fn default_max_gap() -> usize {
    15
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsToml {
    #[serde(default = "default_min_eto")]
    pub min_eto: f64,
    #[serde(default = "default_max_eto")]
    pub max_eto: f64,
}

impl Default for BoundsToml {
    fn default() -> Self {
        Self {
            min_eto: default_min_eto(),
            max_eto: default_max_eto(),
        }
    }
}

fn default_min_eto() -> f64 {
    0.0
}
fn default_max_eto() -> f64 {
    15.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterpToml {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default = "default_max_gap")]
    pub max_gap: usize,
}

impl Default for InterpToml {
    fn default() -> Self {
        Self {
            method: None,
            max_gap: default_max_gap(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub params_output: Option<PathBuf>,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            params_output: None,
            date_column: default_date_column(),
            delimiter: default_delimiter(),
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_date_column() -> String {
    "date".to_string()
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: EvapoConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.site.elevation, 500.0);
        assert_eq!(cfg.site.latitude, -43.6);
        assert_eq!(cfg.time.cadence, "days");
        assert!(!cfg.time.regularize);
        assert_eq!(cfg.bounds.max_eto, 15.0);
        assert_eq!(cfg.interp.method, None);
        assert_eq!(cfg.interp.max_gap, 15);
        assert_eq!(cfg.io.date_column, "date");
        assert_eq!(cfg.io.compression, "snappy");
    }

    #[test]
    fn partial_sections() {
        let cfg: EvapoConfig = toml::from_str(
            r#"
            [site]
            elevation = 100.0
            latitude = 50.8

            [time]
            cadence = "hours"
            regularize = true
            frequency = "1h"

            [interp]
            method = "pchip"

            [io]
            input = "obs.csv"
            output = "eto.parquet"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.site.elevation, 100.0);
        assert_eq!(cfg.site.longitude, 172.0);
        assert_eq!(cfg.time.cadence, "hours");
        assert_eq!(cfg.time.frequency.as_deref(), Some("1h"));
        assert_eq!(cfg.interp.method.as_deref(), Some("pchip"));
        assert_eq!(cfg.io.input, Some(PathBuf::from("obs.csv")));
        assert_eq!(cfg.io.params_output, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<EvapoConfig>("[site]\naltitude = 3.0\n").is_err());
        assert!(toml::from_str::<EvapoConfig>("[weather]\n").is_err());
    }
}
