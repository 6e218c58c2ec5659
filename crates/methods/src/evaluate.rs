use evapo_calendar::Cadence;
use evapo_params::DerivedParams;
use tracing::info;

use crate::config::{EtBounds, InterpConfig};
use crate::error::MethodsError;
use crate::fao::eto_fao;
use crate::hargreaves::eto_hargreaves;
use crate::method::Method;
use crate::table::EtTable;

/// Runs one method by name.
pub fn evaluate(
    method: Method,
    params: &DerivedParams,
    cadence: Cadence,
    bounds: &EtBounds,
    interp: Option<&InterpConfig>,
) -> Result<EtTable, MethodsError> {
    let table = match method {
        Method::Fao => eto_fao(params, cadence, bounds, interp)?,
        Method::Hargreaves => eto_hargreaves(params, cadence, bounds, interp)?,
    };
    info!(method = method.label(), n_rows = table.len(), "ET evaluated");
    Ok(table)
}

/// Runs both methods concurrently over one derived table and joins the
/// results, FAO columns first.
///
/// # Errors
///
/// Fails if either method fails; a sub-daily table therefore always fails
/// through the Hargreaves cadence guard.
pub fn eto_both(
    params: &DerivedParams,
    cadence: Cadence,
    bounds: &EtBounds,
    interp: Option<&InterpConfig>,
) -> Result<EtTable, MethodsError> {
    let (fao, har) = rayon::join(
        || evaluate(Method::Fao, params, cadence, bounds, interp),
        || evaluate(Method::Hargreaves, params, cadence, bounds, interp),
    );
    fao?.join(har?)
}
