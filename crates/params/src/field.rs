//! Recognised observation fields.

use std::fmt;
use std::str::FromStr;

use crate::error::ParamsError;

/// A named meteorological input column.
///
/// Names follow the column headers used in station files (`T_max`, `RH_mean`,
/// ...). Ordering is the declaration order, which is also the column order
/// used when tables are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Net radiation (MJ/m² per period).
    NetRadiation,
    /// Incoming shortwave radiation (MJ/m² per period).
    ShortwaveRadiation,
    /// Soil heat flux (MJ/m² per period).
    SoilHeatFlux,
    /// Minimum temperature (°C).
    TMin,
    /// Maximum temperature (°C).
    TMax,
    /// Mean temperature (°C).
    TMean,
    /// Dewpoint temperature (°C).
    TDew,
    /// Minimum relative humidity (%).
    RhMin,
    /// Maximum relative humidity (%).
    RhMax,
    /// Mean relative humidity (%).
    RhMean,
    /// Sunshine duration (hours).
    SunshineHours,
    /// Wind speed at instrument height (m/s).
    WindSpeed,
    /// Atmospheric pressure (kPa).
    Pressure,
    /// Actual vapour pressure (kPa).
    VapourPressure,
}

impl Field {
    /// Every field, in column order.
    pub const ALL: [Field; 14] = [
        Field::NetRadiation,
        Field::ShortwaveRadiation,
        Field::SoilHeatFlux,
        Field::TMin,
        Field::TMax,
        Field::TMean,
        Field::TDew,
        Field::RhMin,
        Field::RhMax,
        Field::RhMean,
        Field::SunshineHours,
        Field::WindSpeed,
        Field::Pressure,
        Field::VapourPressure,
    ];

    /// Column header for this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::NetRadiation => "R_n",
            Self::ShortwaveRadiation => "R_s",
            Self::SoilHeatFlux => "G",
            Self::TMin => "T_min",
            Self::TMax => "T_max",
            Self::TMean => "T_mean",
            Self::TDew => "T_dew",
            Self::RhMin => "RH_min",
            Self::RhMax => "RH_max",
            Self::RhMean => "RH_mean",
            Self::SunshineHours => "n_sun",
            Self::WindSpeed => "U_z",
            Self::Pressure => "P",
            Self::VapourPressure => "e_a",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ParamsError::UnknownField {
                name: s.to_string(),
            })
    }
}
