//! Masked column fills shared by every cascade stage.
//!
//! A stage never overwrites a present value: it computes a candidate only
//! for rows still missing, and a candidate that is not finite leaves the row
//! missing for the next tier.

use rayon::prelude::*;

/// Fills every missing row of `column` with `f(row)`.
///
/// Returns the number of rows that became present.
pub(crate) fn fill_missing<F>(column: &mut [f64], f: F) -> usize
where
    F: Fn(usize) -> f64 + Sync,
{
    column
        .par_iter_mut()
        .enumerate()
        .filter(|(_, v)| v.is_nan())
        .map(|(i, v)| {
            let x = f(i);
            if x.is_finite() {
                *v = x;
                1
            } else {
                0
            }
        })
        .sum()
}

/// Builds a column of `n` rows from `f(row)`; non-finite results are `NaN`.
pub(crate) fn derive_column<F>(n: usize, f: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Sync,
{
    (0..n).into_par_iter().map(|i| finite_or_nan(f(i))).collect()
}

/// Applies `f` element-wise; non-finite results are `NaN`.
pub(crate) fn map_column<F>(src: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64) -> f64 + Sync,
{
    src.par_iter().map(|&x| finite_or_nan(f(x))).collect()
}

/// Number of missing rows.
pub(crate) fn count_missing(column: &[f64]) -> usize {
    column.iter().filter(|v| v.is_nan()).count()
}

fn finite_or_nan(x: f64) -> f64 {
    if x.is_finite() { x } else { f64::NAN }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_leaves_present_rows() {
        let mut col = vec![1.0, f64::NAN, 3.0, f64::NAN];
        let n = fill_missing(&mut col, |i| 10.0 * i as f64);
        assert_eq!(n, 2);
        assert_eq!(col, vec![1.0, 10.0, 3.0, 30.0]);
    }

    #[test]
    fn non_finite_candidates_stay_missing() {
        let mut col = vec![f64::NAN, f64::NAN];
        let n = fill_missing(&mut col, |i| if i == 0 { f64::INFINITY } else { 2.0 });
        assert_eq!(n, 1);
        assert!(col[0].is_nan());
        assert_eq!(col[1], 2.0);
        assert_eq!(count_missing(&col), 1);
    }

    #[test]
    fn map_and_derive_mask_non_finite() {
        let out = map_column(&[4.0, -1.0], f64::sqrt);
        assert_eq!(out[0], 2.0);
        assert!(out[1].is_nan());
        let out = derive_column(2, |i| 1.0 / i as f64);
        assert!(out[0].is_nan());
        assert_eq!(out[1], 1.0);
    }
}
