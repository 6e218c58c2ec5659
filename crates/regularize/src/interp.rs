//! Gap detection and interpolation on a single series.

use chrono::NaiveDateTime;

use crate::config::InterpMethod;

/// A maximal run of missing values bounded by valid values on both sides.
///
/// `start..end` are the missing positions; `start - 1` and `end` hold the
/// bracketing valid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    /// First missing position.
    pub start: usize,
    /// One past the last missing position.
    pub end: usize,
}

impl Gap {
    /// Number of missing values in the gap.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false`; gaps hold at least one missing value.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Finds every interior gap. Leading and trailing missing runs are not gaps.
pub fn find_gaps(values: &[f64]) -> Vec<Gap> {
    let mut gaps = Vec::new();
    let mut last_valid: Option<usize> = None;
    for (i, v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        if let Some(prev) = last_valid
            && i > prev + 1
        {
            gaps.push(Gap {
                start: prev + 1,
                end: i,
            });
        }
        last_valid = Some(i);
    }
    gaps
}

/// Fills every interior gap no longer than `max_gap` using `method`.
///
/// Gaps longer than `max_gap` are left untouched in full. Returns the number
/// of values filled.
pub fn fill_gaps(
    timestamps: &[NaiveDateTime],
    values: &mut [f64],
    method: InterpMethod,
    max_gap: usize,
) -> usize {
    let gaps: Vec<Gap> = find_gaps(values)
        .into_iter()
        .filter(|g| g.len() <= max_gap)
        .collect();
    if gaps.is_empty() {
        return 0;
    }

    let x: Vec<f64> = match method {
        InterpMethod::Time => {
            let origin = timestamps[0];
            timestamps
                .iter()
                .map(|&t| (t - origin).num_milliseconds() as f64 / 1000.0)
                .collect()
        }
        _ => (0..values.len()).map(|i| i as f64).collect(),
    };

    match method {
        InterpMethod::Linear | InterpMethod::Time => {
            for g in &gaps {
                linear(&x, values, *g);
            }
        }
        InterpMethod::Nearest => {
            for g in &gaps {
                nearest(&x, values, *g);
            }
        }
        InterpMethod::Pchip => {
            let spline = Pchip::fit(&x, values);
            for g in &gaps {
                for i in g.start..g.end {
                    values[i] = spline.eval(g.start - 1, x[i]);
                }
            }
        }
    }

    gaps.iter().map(Gap::len).sum()
}

fn linear(x: &[f64], values: &mut [f64], gap: Gap) {
    let (l, r) = (gap.start - 1, gap.end);
    let (xl, xr, yl, yr) = (x[l], x[r], values[l], values[r]);
    for i in gap.start..gap.end {
        values[i] = yl + (yr - yl) * (x[i] - xl) / (xr - xl);
    }
}

fn nearest(x: &[f64], values: &mut [f64], gap: Gap) {
    let (l, r) = (gap.start - 1, gap.end);
    let (yl, yr) = (values[l], values[r]);
    for i in gap.start..gap.end {
        values[i] = if x[i] - x[l] <= x[r] - x[i] { yl } else { yr };
    }
}

/// Monotone piecewise cubic Hermite interpolant (Fritsch–Carlson slopes)
/// through the valid values of a series.
struct Pchip {
    /// Series position of each knot.
    pos: Vec<usize>,
    xk: Vec<f64>,
    yk: Vec<f64>,
    dk: Vec<f64>,
    /// Knot number of each series position (valid positions only).
    knot_of: Vec<Option<usize>>,
}

impl Pchip {
    fn fit(x: &[f64], values: &[f64]) -> Self {
        let mut pos = Vec::new();
        let mut knot_of = vec![None; values.len()];
        for (i, v) in values.iter().enumerate() {
            if !v.is_nan() {
                knot_of[i] = Some(pos.len());
                pos.push(i);
            }
        }
        let xk: Vec<f64> = pos.iter().map(|&i| x[i]).collect();
        let yk: Vec<f64> = pos.iter().map(|&i| values[i]).collect();
        let dk = slopes(&xk, &yk);
        Self {
            pos,
            xk,
            yk,
            dk,
            knot_of,
        }
    }

    /// Evaluates the segment starting at series position `left` at `x`.
    fn eval(&self, left: usize, x: f64) -> f64 {
        let Some(k) = self.knot_of[left] else {
            return f64::NAN;
        };
        if k + 1 >= self.pos.len() {
            return f64::NAN;
        }
        let h = self.xk[k + 1] - self.xk[k];
        let t = (x - self.xk[k]) / h;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        h00 * self.yk[k] + h10 * h * self.dk[k] + h01 * self.yk[k + 1] + h11 * h * self.dk[k + 1]
    }
}

/// Knot derivatives: weighted harmonic mean inside, shape-preserving
/// three-point estimate at the ends.
fn slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let delta: Vec<f64> = (0..n - 1).map(|k| (y[k + 1] - y[k]) / h[k]).collect();
    if n == 2 {
        return vec![delta[0]; 2];
    }

    let mut d = vec![0.0; n];
    for k in 1..n - 1 {
        let (a, b) = (delta[k - 1], delta[k]);
        if a * b <= 0.0 {
            continue;
        }
        let w1 = 2.0 * h[k] + h[k - 1];
        let w2 = h[k] + 2.0 * h[k - 1];
        d[k] = (w1 + w2) / (w1 / a + w2 / b);
    }
    d[0] = end_slope(h[0], h[1], delta[0], delta[1]);
    d[n - 1] = end_slope(h[n - 2], h[n - 3], delta[n - 2], delta[n - 3]);
    d
}

fn end_slope(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if d.signum() != m0.signum() || m0 == 0.0 {
        0.0
    } else if m0.signum() != m1.signum() && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{NaiveDate, TimeDelta};

    const NAN: f64 = f64::NAN;

    fn stamps(n: usize) -> Vec<NaiveDateTime> {
        let t0 = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        (0..n).map(|i| t0 + TimeDelta::days(i as i64)).collect()
    }

    #[test]
    fn finds_interior_gaps_only() {
        let v = [NAN, 1.0, NAN, NAN, 2.0, 3.0, NAN, 4.0, NAN];
        assert_eq!(
            find_gaps(&v),
            vec![Gap { start: 2, end: 4 }, Gap { start: 6, end: 7 }]
        );
    }

    #[test]
    fn no_gaps_in_complete_series() {
        assert!(find_gaps(&[1.0, 2.0, 3.0]).is_empty());
        assert!(find_gaps(&[NAN, NAN]).is_empty());
    }

    #[test]
    fn linear_fill() {
        let mut v = [0.0, NAN, NAN, 3.0];
        let n = fill_gaps(&stamps(4), &mut v, InterpMethod::Linear, 5);
        assert_eq!(n, 2);
        assert_abs_diff_eq!(v[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn long_gap_left_whole() {
        let mut v = [0.0, NAN, NAN, NAN, 4.0, NAN, 6.0];
        let n = fill_gaps(&stamps(7), &mut v, InterpMethod::Linear, 2);
        assert_eq!(n, 1);
        assert!(v[1..4].iter().all(|x| x.is_nan()));
        assert_abs_diff_eq!(v[5], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_max_gap_fills_nothing() {
        let mut v = [0.0, NAN, 2.0];
        assert_eq!(fill_gaps(&stamps(3), &mut v, InterpMethod::Linear, 0), 0);
        assert!(v[1].is_nan());
    }

    #[test]
    fn time_weighted_fill_uses_timestamps() {
        let t0 = stamps(1)[0];
        let ts = [
            t0,
            t0 + TimeDelta::days(1),
            t0 + TimeDelta::days(4),
        ];
        let mut v = [0.0, NAN, 4.0];
        fill_gaps(&ts, &mut v, InterpMethod::Time, 1);
        assert_abs_diff_eq!(v[1], 1.0, epsilon = 1e-12);

        let mut v = [0.0, NAN, 4.0];
        fill_gaps(&ts, &mut v, InterpMethod::Linear, 1);
        assert_abs_diff_eq!(v[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn nearest_fill_ties_go_left() {
        let mut v = [1.0, NAN, NAN, NAN, 5.0];
        fill_gaps(&stamps(5), &mut v, InterpMethod::Nearest, 3);
        assert_eq!(&v[1..4], &[1.0, 1.0, 5.0]);
    }

    #[test]
    fn pchip_reproduces_linear_data() {
        let mut v = [0.0, 1.0, NAN, 3.0, 4.0];
        fill_gaps(&stamps(5), &mut v, InterpMethod::Pchip, 1);
        assert_abs_diff_eq!(v[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn pchip_preserves_monotonicity() {
        // Step-like data: a cubic spline would overshoot, pchip must not.
        let mut v = [0.0, 0.0, NAN, NAN, 10.0, 10.0];
        fill_gaps(&stamps(6), &mut v, InterpMethod::Pchip, 2);
        assert!(v[2] >= 0.0 && v[2] <= v[3] && v[3] <= 10.0);
    }

    #[test]
    fn pchip_flat_at_local_extremum() {
        let mut v = [0.0, 2.0, NAN, 0.0];
        fill_gaps(&stamps(4), &mut v, InterpMethod::Pchip, 1);
        assert!(v[2] <= 2.0 && v[2] >= 0.0);
    }

    #[test]
    fn pchip_with_two_knots_is_linear() {
        let mut v = [0.0, NAN, NAN, 3.0];
        fill_gaps(&stamps(4), &mut v, InterpMethod::Pchip, 2);
        assert_abs_diff_eq!(v[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2], 2.0, epsilon = 1e-12);
    }
}
