//! Fixed-step regularisation and bounded gap interpolation.
//!
//! Station records arrive with irregular stamps and holes. This crate puts a
//! series (or a set of columns sharing one index) onto a fixed-step grid and
//! optionally fills short interior gaps.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  Infer step   │────▶│  Bin onto grid │────▶│  Fill gaps ≤ max │
//!  │  (if absent)  │     │  (mean per bin) │     │  (optional)      │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use evapo_regularize::{InterpMethod, RegularizeConfig, regularize_series};
//!
//! let config = RegularizeConfig::new()
//!     .with_method(Some(InterpMethod::Linear))
//!     .with_max_gap(3);
//! let out = regularize_series(&index, &values, &config)?;
//! ```

mod config;
mod error;
mod grid;
mod interp;
mod regularize;
mod result;

pub use config::{InterpMethod, RegularizeConfig, parse_step};
pub use error::RegularizeError;
pub use interp::{Gap, fill_gaps, find_gaps};
pub use regularize::{regularize, regularize_series};
pub use result::Regularized;
