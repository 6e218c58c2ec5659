use std::fmt;
use std::str::FromStr;

use crate::error::MethodsError;

/// A reference ET formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// FAO-56 Penman-Monteith.
    Fao,
    /// Hargreaves (daily or coarser only).
    Hargreaves,
}

impl Method {
    /// Human-readable name used in logs and errors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fao => "FAO-56 Penman-Monteith",
            Self::Hargreaves => "Hargreaves",
        }
    }

    /// Output column of the raw series.
    pub fn column(self) -> &'static str {
        match self {
            Self::Fao => "ETo_FAO_mm",
            Self::Hargreaves => "ETo_Har_mm",
        }
    }

    /// Output column of the gap-filled series.
    pub fn interp_column(self) -> &'static str {
        match self {
            Self::Fao => "ETo_FAO_interp_mm",
            Self::Hargreaves => "ETo_Har_interp_mm",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Method {
    type Err = MethodsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fao" | "fao56" | "penman-monteith" => Ok(Self::Fao),
            "hargreaves" | "har" => Ok(Self::Hargreaves),
            _ => Err(MethodsError::UnknownMethod {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_columns() {
        assert_eq!("FAO".parse::<Method>().unwrap(), Method::Fao);
        assert_eq!("har".parse::<Method>().unwrap(), Method::Hargreaves);
        assert!("thornthwaite".parse::<Method>().is_err());
        assert_eq!(Method::Fao.column(), "ETo_FAO_mm");
        assert_eq!(Method::Hargreaves.interp_column(), "ETo_Har_interp_mm");
    }
}
