//! Post-processing configuration shared by both evaluators.

use evapo_regularize::InterpMethod;

use crate::error::MethodsError;

/// Plausible range for ET values (mm per period). Values outside are
/// discarded, never clamped.
///
/// # Example
///
/// ```
/// use evapo_methods::EtBounds;
///
/// let bounds = EtBounds::new().with_max(12.0);
/// assert!(bounds.validate().is_ok());
/// assert!(!bounds.contains(12.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EtBounds {
    min: f64,
    max: f64,
}

impl Default for EtBounds {
    fn default() -> Self {
        Self::new()
    }
}

impl EtBounds {
    /// Creates bounds with defaults: `min = 0`, `max = 15`.
    pub fn new() -> Self {
        Self {
            min: 0.0,
            max: 15.0,
        }
    }

    /// Sets the lower bound.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Sets the upper bound.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Returns the lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `v` lies within `[min, max]`. `NaN` never does.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Validates these bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MethodsError::InvalidBounds`] unless both bounds are finite
    /// and `min < max`.
    pub fn validate(&self) -> Result<(), MethodsError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(MethodsError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Opt-in gap filling of an ET series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpConfig {
    method: InterpMethod,
    max_gap: usize,
}

impl Default for InterpConfig {
    fn default() -> Self {
        Self::new(InterpMethod::Linear)
    }
}

impl InterpConfig {
    /// Creates a config for `method` with `max_gap = 15`.
    pub fn new(method: InterpMethod) -> Self {
        Self {
            method,
            max_gap: 15,
        }
    }

    /// Sets the longest gap (in grid steps) that is filled.
    pub fn with_max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Returns the interpolation method.
    pub fn method(&self) -> InterpMethod {
        self.method
    }

    /// Returns the longest gap that is filled.
    pub fn max_gap(&self) -> usize {
        self.max_gap
    }

    /// Validates this config.
    ///
    /// # Errors
    ///
    /// Returns [`MethodsError::InvalidConfig`] if `max_gap` is zero.
    pub fn validate(&self) -> Result<(), MethodsError> {
        if self.max_gap == 0 {
            return Err(MethodsError::InvalidConfig {
                reason: "max_gap must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let b = EtBounds::default();
        assert_eq!(b.min(), 0.0);
        assert_eq!(b.max(), 15.0);
        assert!(b.validate().is_ok());
        assert!(b.contains(0.0) && b.contains(15.0));
        assert!(!b.contains(-0.01) && !b.contains(f64::NAN));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let b = EtBounds::new().with_min(5.0).with_max(5.0);
        assert!(matches!(
            b.validate(),
            Err(MethodsError::InvalidBounds { .. })
        ));
        assert!(EtBounds::new().with_max(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn interp_defaults() {
        let c = InterpConfig::default();
        assert_eq!(c.method(), InterpMethod::Linear);
        assert_eq!(c.max_gap(), 15);
        assert!(c.validate().is_ok());
        assert!(c.with_max_gap(0).validate().is_err());
    }
}
