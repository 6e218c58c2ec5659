//! Reference evapotranspiration evaluators.
//!
//! Two stateless formulas consume the [`DerivedParams`](evapo_params::DerivedParams)
//! table produced by `evapo_params::estimate`:
//!
//! | Method | Cadence | Function |
//! |--------|---------|----------|
//! | FAO-56 Penman-Monteith | daily and sub-daily | [`eto_fao`] |
//! | Hargreaves | daily or coarser | [`eto_hargreaves`] |
//!
//! Both discard values outside [`EtBounds`] (they are never clamped), can
//! add a gap-filled column through [`InterpConfig`], and round to two
//! decimals. [`eto_both`] evaluates them concurrently from one cascade run.

mod config;
mod error;
mod evaluate;
mod fao;
mod hargreaves;
mod method;
mod post;
mod table;

pub use config::{EtBounds, InterpConfig};
pub use error::MethodsError;
pub use evaluate::{eto_both, evaluate};
pub use fao::{DAILY_COEFFICIENT, HOURLY_COEFFICIENT, eto_fao, penman_monteith};
pub use hargreaves::{eto_hargreaves, hargreaves};
pub use method::Method;
pub use post::{reject_out_of_bounds, round2};
pub use table::EtTable;
