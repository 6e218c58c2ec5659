//! Bounds rejection, optional gap fill and rounding.

use evapo_params::DerivedParams;
use evapo_regularize::{RegularizeConfig, fill_gaps, regularize_series};
use tracing::debug;

use crate::config::{EtBounds, InterpConfig};
use crate::error::MethodsError;
use crate::method::Method;
use crate::table::EtTable;

/// Rounds to two decimals (mm precision of the output tables).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Sets every value outside `bounds` to `NaN`. Returns how many present
/// values were discarded.
pub fn reject_out_of_bounds(values: &mut [f64], bounds: &EtBounds) -> usize {
    let mut n = 0;
    for v in values.iter_mut().filter(|v| !v.is_nan()) {
        if !bounds.contains(*v) {
            *v = f64::NAN;
            n += 1;
        }
    }
    n
}

/// Turns a raw ET series into the output table for `method`.
pub(crate) fn finish(
    method: Method,
    params: &DerivedParams,
    mut raw: Vec<f64>,
    bounds: &EtBounds,
    interp: Option<&InterpConfig>,
) -> Result<EtTable, MethodsError> {
    let n_rejected = reject_out_of_bounds(&mut raw, bounds);
    debug!(
        method = method.label(),
        n_rejected,
        min = bounds.min(),
        max = bounds.max(),
        "bounds rejection"
    );

    let Some(interp) = interp else {
        round_all(&mut raw);
        return Ok(EtTable::new(
            params.index().clone(),
            vec![(method.column().to_string(), raw)],
        ));
    };

    let step = params
        .index()
        .infer_step()
        .unwrap_or_else(|_| params.period());
    let grid = regularize_series(
        params.index(),
        &raw,
        &RegularizeConfig::new().with_step(Some(step)),
    )?;
    let (index, columns) = grid.into_parts();
    let mut raw = columns.into_iter().next().unwrap_or_default();
    let mut filled = raw.clone();
    let n_filled = fill_gaps(
        index.timestamps(),
        &mut filled,
        interp.method(),
        interp.max_gap(),
    );
    debug!(
        method = method.label(),
        interp = interp.method().as_str(),
        max_gap = interp.max_gap(),
        n_filled,
        "gap fill"
    );

    round_all(&mut raw);
    round_all(&mut filled);
    Ok(EtTable::new(
        index,
        vec![
            (method.column().to_string(), raw),
            (method.interp_column().to_string(), filled),
        ],
    ))
}

fn round_all(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = round2(*v);
    }
}
