//! Wind speed adjustment to 2 m.

/// Wind speed assumed where none was measured (m/s).
pub const DEFAULT_WIND_2M: f64 = 2.0;

/// Wind speed at 2 m from a measurement at `height` m, FAO-56 Eq. 47.
pub fn wind_at_2m(u_z: f64, height: f64) -> f64 {
    u_z * 4.87 / (67.8 * height - 5.42).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn example_14() {
        // 3.2 m/s at 10 m
        assert_relative_eq!(wind_at_2m(3.2, 10.0), 2.4, epsilon = 0.01);
    }

    #[test]
    fn two_metres_is_identity() {
        assert_relative_eq!(wind_at_2m(3.0, 2.0), 3.0, epsilon = 1e-3);
    }
}
