//! The derived parameter table produced by the cascade.

use chrono::TimeDelta;
use evapo_calendar::{Cadence, TimeIndex};

/// Saturation vapour pressure terms. Their shape depends on the cadence.
#[derive(Debug, Clone, PartialEq)]
pub enum Saturation {
    /// Daily terms from the temperature extremes.
    Daily {
        /// e°(T_max).
        e_max: Vec<f64>,
        /// e°(T_min).
        e_min: Vec<f64>,
        /// Mean of `e_max` and `e_min`.
        e_s: Vec<f64>,
    },
    /// Sub-daily term from the period mean temperature.
    SubDaily {
        /// e°(T_mean).
        e_mean: Vec<f64>,
    },
}

impl Saturation {
    /// The saturation pressure the Penman-Monteith deficit is taken from:
    /// `e_s` for daily, `e_mean` for sub-daily.
    pub fn mean(&self) -> &[f64] {
        match self {
            Self::Daily { e_s, .. } => e_s,
            Self::SubDaily { e_mean } => e_mean,
        }
    }

    fn named_columns(&self) -> Vec<(&'static str, &[f64])> {
        match self {
            Self::Daily { e_max, e_min, e_s } => {
                vec![
                    ("e_max", e_max.as_slice()),
                    ("e_min", e_min.as_slice()),
                    ("e_s", e_s.as_slice()),
                ]
            }
            Self::SubDaily { e_mean } => vec![("e_mean", e_mean.as_slice())],
        }
    }
}

/// One row per observation timestamp with every intermediate needed by the
/// ET evaluators.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedParams {
    pub(crate) index: TimeIndex,
    pub(crate) cadence: Cadence,
    pub(crate) period: TimeDelta,
    pub(crate) pressure: Vec<f64>,
    pub(crate) gamma: Vec<f64>,
    pub(crate) t_max: Vec<f64>,
    pub(crate) t_min: Vec<f64>,
    pub(crate) t_mean: Vec<f64>,
    pub(crate) saturation: Saturation,
    pub(crate) delta: Vec<f64>,
    pub(crate) e_a: Vec<f64>,
    pub(crate) r_a: Vec<f64>,
    pub(crate) daylight: Vec<f64>,
    pub(crate) r_so: Vec<f64>,
    pub(crate) r_s: Vec<f64>,
    pub(crate) r_ns: Vec<f64>,
    pub(crate) r_nl: Vec<f64>,
    pub(crate) r_n: Vec<f64>,
    pub(crate) g: Vec<f64>,
    pub(crate) u_2: Vec<f64>,
}

impl DerivedParams {
    /// The timestamp index.
    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Cadence the table was derived at.
    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Length of the period each row covers (one day for daily tables).
    pub fn period(&self) -> TimeDelta {
        self.period
    }

    /// Period length in hours.
    pub fn period_hours(&self) -> f64 {
        self.period.num_seconds() as f64 / 3600.0
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Atmospheric pressure P (kPa).
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Psychrometric constant γ (kPa/°C).
    pub fn gamma(&self) -> &[f64] {
        &self.gamma
    }

    /// Observed maximum temperature (°C), possibly with gaps.
    pub fn t_max(&self) -> &[f64] {
        &self.t_max
    }

    /// Observed minimum temperature (°C), possibly with gaps.
    pub fn t_min(&self) -> &[f64] {
        &self.t_min
    }

    /// Mean temperature (°C).
    pub fn t_mean(&self) -> &[f64] {
        &self.t_mean
    }

    /// Saturation vapour pressure terms.
    pub fn saturation(&self) -> &Saturation {
        &self.saturation
    }

    /// Slope of the saturation curve Δ (kPa/°C).
    pub fn delta(&self) -> &[f64] {
        &self.delta
    }

    /// Actual vapour pressure e_a (kPa).
    pub fn e_a(&self) -> &[f64] {
        &self.e_a
    }

    /// Extraterrestrial radiation R_a (MJ/m² per period).
    pub fn r_a(&self) -> &[f64] {
        &self.r_a
    }

    /// Maximum possible sunshine duration N (hours per day).
    pub fn daylight_hours(&self) -> &[f64] {
        &self.daylight
    }

    /// Clear-sky radiation R_so.
    pub fn r_so(&self) -> &[f64] {
        &self.r_so
    }

    /// Incoming shortwave radiation R_s.
    pub fn r_s(&self) -> &[f64] {
        &self.r_s
    }

    /// Net shortwave radiation R_ns.
    pub fn r_ns(&self) -> &[f64] {
        &self.r_ns
    }

    /// Net longwave radiation R_nl.
    pub fn r_nl(&self) -> &[f64] {
        &self.r_nl
    }

    /// Net radiation R_n.
    pub fn r_n(&self) -> &[f64] {
        &self.r_n
    }

    /// Soil heat flux G.
    pub fn g(&self) -> &[f64] {
        &self.g
    }

    /// Wind speed at 2 m U_2 (m/s).
    pub fn u_2(&self) -> &[f64] {
        &self.u_2
    }

    /// Vapour pressure deficit: `e_s − e_a` daily, `e_mean − e_a` sub-daily.
    pub fn vapour_pressure_deficit(&self) -> Vec<f64> {
        self.saturation
            .mean()
            .iter()
            .zip(&self.e_a)
            .map(|(es, ea)| es - ea)
            .collect()
    }

    /// Every derived column with its output name, in table order.
    pub fn columns(&self) -> Vec<(&'static str, &[f64])> {
        let mut cols: Vec<(&'static str, &[f64])> = vec![
            ("P", self.pressure.as_slice()),
            ("gamma", self.gamma.as_slice()),
            ("T_max", self.t_max.as_slice()),
            ("T_min", self.t_min.as_slice()),
            ("T_mean", self.t_mean.as_slice()),
        ];
        cols.extend(self.saturation.named_columns());
        cols.extend([
            ("delta", self.delta.as_slice()),
            ("e_a", self.e_a.as_slice()),
            ("R_a", self.r_a.as_slice()),
            ("N", self.daylight.as_slice()),
            ("R_so", self.r_so.as_slice()),
            ("R_s", self.r_s.as_slice()),
            ("R_ns", self.r_ns.as_slice()),
            ("R_nl", self.r_nl.as_slice()),
            ("R_n", self.r_n.as_slice()),
            ("G", self.g.as_slice()),
            ("U_2", self.u_2.as_slice()),
        ]);
        cols
    }

    /// Column by output name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| c)
    }

    /// Rows where some required column is still missing, because a minimum
    /// input was null on that row.
    ///
    /// `T_max`/`T_min` are only required for daily tables.
    pub fn incomplete_rows(&self) -> Vec<usize> {
        let mut required: Vec<&[f64]> = vec![
            self.pressure.as_slice(),
            self.gamma.as_slice(),
            self.t_mean.as_slice(),
            self.delta.as_slice(),
            self.e_a.as_slice(),
            self.r_a.as_slice(),
            self.r_so.as_slice(),
            self.r_s.as_slice(),
            self.r_ns.as_slice(),
            self.r_nl.as_slice(),
            self.r_n.as_slice(),
            self.g.as_slice(),
            self.u_2.as_slice(),
        ];
        required.extend(self.saturation.named_columns().into_iter().map(|(_, c)| c));
        if self.cadence.is_daily() {
            required.push(self.t_max.as_slice());
            required.push(self.t_min.as_slice());
        }
        (0..self.len())
            .filter(|&i| required.iter().any(|col| col[i].is_nan()))
            .collect()
    }
}
