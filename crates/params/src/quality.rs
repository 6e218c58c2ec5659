//! Per-row record of which substitute tiers the cascade used.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

/// A parameter family that owns a quality counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Atmospheric pressure.
    Pressure,
    /// Mean temperature.
    MeanTemperature,
    /// Actual vapour pressure.
    VapourPressure,
    /// Incoming shortwave radiation.
    Shortwave,
    /// Net radiation.
    NetRadiation,
    /// Soil heat flux.
    SoilHeat,
    /// Wind speed at 2 m.
    Wind,
}

impl Family {
    /// Every family, most significant legacy digit first.
    pub const ALL: [Family; 7] = [
        Family::Pressure,
        Family::MeanTemperature,
        Family::VapourPressure,
        Family::Shortwave,
        Family::NetRadiation,
        Family::SoilHeat,
        Family::Wind,
    ];

    /// Snake-case family name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pressure => "pressure",
            Self::MeanTemperature => "mean_temperature",
            Self::VapourPressure => "vapour_pressure",
            Self::Shortwave => "shortwave",
            Self::NetRadiation => "net_radiation",
            Self::SoilHeat => "soil_heat",
            Self::Wind => "wind",
        }
    }

    /// Decimal place of this family in the legacy packed code.
    pub fn weight(self) -> u64 {
        match self {
            Self::Pressure => 1_000_000,
            Self::MeanTemperature => 100_000,
            Self::VapourPressure => 10_000,
            Self::Shortwave => 1_000,
            Self::NetRadiation => 100,
            Self::SoilHeat => 10,
            Self::Wind => 1,
        }
    }
}

/// Named tier counters for one row. Zero everywhere means every input was
/// measured.
///
/// Rows compare with the product order: `a <= b` iff every counter of `a` is
/// at most the matching counter of `b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct EstimationQuality {
    /// Pressure filled from elevation (0 or 1).
    pub pressure: u8,
    /// Mean temperature filled from extremes (0 or 1).
    pub mean_temperature: u8,
    /// Vapour pressure fallback depth (0..=3).
    pub vapour_pressure: u8,
    /// Shortwave fallback depth (0..=2).
    pub shortwave: u8,
    /// Net radiation derived (0 or 1).
    pub net_radiation: u8,
    /// Soil heat flux assumed zero (0 or 1).
    pub soil_heat: u8,
    /// Wind speed assumed 2 m/s (0 or 1).
    pub wind: u8,
}

impl EstimationQuality {
    /// Counter for `family`.
    pub fn get(&self, family: Family) -> u8 {
        match family {
            Family::Pressure => self.pressure,
            Family::MeanTemperature => self.mean_temperature,
            Family::VapourPressure => self.vapour_pressure,
            Family::Shortwave => self.shortwave,
            Family::NetRadiation => self.net_radiation,
            Family::SoilHeat => self.soil_heat,
            Family::Wind => self.wind,
        }
    }

    fn slot(&mut self, family: Family) -> &mut u8 {
        match family {
            Family::Pressure => &mut self.pressure,
            Family::MeanTemperature => &mut self.mean_temperature,
            Family::VapourPressure => &mut self.vapour_pressure,
            Family::Shortwave => &mut self.shortwave,
            Family::NetRadiation => &mut self.net_radiation,
            Family::SoilHeat => &mut self.soil_heat,
            Family::Wind => &mut self.wind,
        }
    }

    pub(crate) fn bump(&mut self, family: Family) {
        let slot = self.slot(family);
        *slot = slot.saturating_add(1);
    }

    /// Legacy packed code, one decimal digit per family.
    ///
    /// `wind + 10·G + 100·R_n + 1000·R_s + 10000·e_a + 100000·T_mean +
    /// 1000000·P`. Counters never exceed 3, so digits never carry.
    pub fn code(&self) -> u64 {
        Family::ALL
            .iter()
            .map(|&f| u64::from(self.get(f)) * f.weight())
            .sum()
    }

    /// Sum of all counters.
    pub fn total(&self) -> u32 {
        Family::ALL.iter().map(|&f| u32::from(self.get(f))).sum()
    }

    /// Whether nothing was estimated.
    pub fn is_measured(&self) -> bool {
        self.total() == 0
    }
}

impl PartialOrd for EstimationQuality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut less = false;
        let mut greater = false;
        for f in Family::ALL {
            match self.get(f).cmp(&other.get(f)) {
                Ordering::Less => less = true,
                Ordering::Greater => greater = true,
                Ordering::Equal => {}
            }
        }
        match (less, greater) {
            (false, false) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (true, true) => None,
        }
    }
}

/// Quality of every row produced by one cascade run.
///
/// Counters only ever increase while the cascade runs; callers receive the
/// record read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityRecord {
    rows: Vec<EstimationQuality>,
}

impl QualityRecord {
    pub(crate) fn zeroed(n: usize) -> Self {
        Self {
            rows: vec![EstimationQuality::default(); n],
        }
    }

    /// Adds one to `family` on every row where `column` is still missing.
    ///
    /// Returns the number of rows bumped.
    pub(crate) fn bump_missing(&mut self, family: Family, column: &[f64]) -> usize {
        self.rows
            .par_iter_mut()
            .zip(column.par_iter())
            .filter(|(_, v)| v.is_nan())
            .map(|(q, _)| q.bump(family))
            .count()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the record has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-row counters.
    pub fn rows(&self) -> &[EstimationQuality] {
        &self.rows
    }

    /// Counters for row `i`, if in range.
    pub fn get(&self, i: usize) -> Option<&EstimationQuality> {
        self.rows.get(i)
    }

    /// Legacy packed code for every row.
    pub fn codes(&self) -> Vec<u64> {
        self.rows.iter().map(EstimationQuality::code).collect()
    }

    /// Histogram of counter values per family.
    pub fn summary(&self) -> QualitySummary {
        let mut families: BTreeMap<Family, BTreeMap<u8, usize>> = BTreeMap::new();
        for f in Family::ALL {
            let hist = families.entry(f).or_default();
            for q in &self.rows {
                *hist.entry(q.get(f)).or_default() += 1;
            }
        }
        let n_measured = self.rows.iter().filter(|q| q.is_measured()).count();
        QualitySummary {
            n_rows: self.rows.len(),
            n_measured,
            families,
        }
    }
}

/// Aggregate view of a [`QualityRecord`], ready for JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualitySummary {
    /// Number of rows.
    pub n_rows: usize,
    /// Rows with every counter at zero.
    pub n_measured: usize,
    /// For each family, how many rows sit at each counter value.
    pub families: BTreeMap<Family, BTreeMap<u8, usize>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_layout() {
        let q = EstimationQuality {
            pressure: 1,
            mean_temperature: 0,
            vapour_pressure: 3,
            shortwave: 2,
            net_radiation: 1,
            soil_heat: 1,
            wind: 1,
        };
        assert_eq!(q.code(), 1_032_111);
        assert_eq!(q.total(), 9);
        assert_eq!(EstimationQuality::default().code(), 0);
    }

    #[test]
    fn product_order() {
        let low = EstimationQuality {
            wind: 1,
            ..Default::default()
        };
        let high = EstimationQuality {
            wind: 1,
            shortwave: 2,
            ..Default::default()
        };
        let other = EstimationQuality {
            pressure: 1,
            ..Default::default()
        };
        assert!(low <= high);
        assert!(high > low);
        assert_eq!(low.partial_cmp(&other), None);
    }

    #[test]
    fn bump_only_missing_rows() {
        let mut rec = QualityRecord::zeroed(3);
        let n = rec.bump_missing(Family::Wind, &[1.0, f64::NAN, f64::NAN]);
        assert_eq!(n, 2);
        assert_eq!(rec.codes(), vec![0, 1, 1]);
        rec.bump_missing(Family::Wind, &[1.0, 1.0, f64::NAN]);
        assert_eq!(rec.codes(), vec![0, 1, 2]);
    }

    #[test]
    fn summary_histogram() {
        let mut rec = QualityRecord::zeroed(4);
        rec.bump_missing(Family::SoilHeat, &[f64::NAN, f64::NAN, 0.0, 0.0]);
        let s = rec.summary();
        assert_eq!(s.n_rows, 4);
        assert_eq!(s.n_measured, 2);
        assert_eq!(s.families[&Family::SoilHeat][&1], 2);
        assert_eq!(s.families[&Family::Wind][&0], 4);
    }
}
