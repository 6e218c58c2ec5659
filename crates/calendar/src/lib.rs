//! # evapo-calendar
//!
//! Timestamp bookkeeping for station time series: a validated, strictly
//! ascending [`TimeIndex`], the observation [`Cadence`], and spacing
//! inference from the first few index entries.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Vec of NaiveDateTime"] -->|"TimeIndex::new()"| B["TimeIndex"]
//!     B -->|".infer_step()"| C["TimeDelta"]
//!     C -->|"Cadence::from_step()"| D["Cadence"]
//!     E["&str"] -->|"str::parse()"| D
//!     B -->|".days_of_year() / .hours()"| F["solar geometry inputs"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use evapo_calendar::{Cadence, TimeIndex};
//!
//! let index = TimeIndex::new(timestamps)?;
//! let step = index.infer_step()?;
//! let cadence: Cadence = "days".parse()?;
//! assert_eq!(Cadence::from_step(step), cadence);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `cadence` | Daily vs sub-daily cadence and its parsing |
//! | `index` | Validated ascending timestamp index |
//! | `step` | Index spacing inference |
//! | `error` | Error types |

mod cadence;
mod error;
mod index;
mod step;

pub use cadence::Cadence;
pub use error::CalendarError;
pub use index::TimeIndex;
pub use step::{INFER_WINDOW, infer_step};
