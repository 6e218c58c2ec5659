use evapo_calendar::TimeIndex;
use tracing::debug;

use crate::config::RegularizeConfig;
use crate::error::RegularizeError;
use crate::grid::{Grid, bin_means};
use crate::interp::fill_gaps;
use crate::result::Regularized;

/// Places every column on a fixed-step grid and optionally fills short gaps.
///
/// The step comes from the config, or is inferred from the first few index
/// entries. Values sharing a grid bin are averaged. When an interpolation
/// method is configured, interior gaps of at most `max_gap` grid positions are
/// filled; longer gaps and leading/trailing runs stay `NaN`.
///
/// # Errors
///
/// - [`RegularizeError::LengthMismatch`] if a column length differs from the index
/// - [`RegularizeError::InvalidStep`] if the step is not positive
/// - [`RegularizeError::Calendar`] if no step is given and none can be inferred
/// - [`RegularizeError::TooManySteps`] if the grid would be unreasonably large
pub fn regularize(
    index: &TimeIndex,
    columns: &[&[f64]],
    config: &RegularizeConfig,
) -> Result<Regularized, RegularizeError> {
    config.validate()?;
    for (i, col) in columns.iter().enumerate() {
        if col.len() != index.len() {
            return Err(RegularizeError::LengthMismatch {
                column: i,
                expected: index.len(),
                got: col.len(),
            });
        }
    }

    let step = match config.step() {
        Some(step) => step,
        None => index.infer_step()?,
    };
    let grid = Grid::covering(index.first(), index.last(), step)?;
    let grid_stamps = grid.timestamps();

    let mut n_filled = 0;
    let mut out = Vec::with_capacity(columns.len());
    for col in columns {
        let mut binned = bin_means(&grid, index.timestamps(), col);
        if let Some(method) = config.method() {
            n_filled += fill_gaps(&grid_stamps, &mut binned, method, config.max_gap());
        }
        out.push(binned);
    }

    debug!(
        n_in = index.len(),
        n_out = grid.len,
        step = %step,
        n_filled,
        "regularised columns"
    );

    let grid_index = TimeIndex::new(grid_stamps)?;
    Ok(Regularized::new(grid_index, step, out, n_filled))
}

/// Single-series convenience over [`regularize`].
pub fn regularize_series(
    index: &TimeIndex,
    values: &[f64],
    config: &RegularizeConfig,
) -> Result<Regularized, RegularizeError> {
    regularize(index, &[values], config)
}
