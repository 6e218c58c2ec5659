//! # evapo-io
//!
//! Read station observation tables from CSV or Parquet and write ET and
//! parameter tables back out. Bridges external file formats into the
//! column-oriented [`Observations`](evapo_params::Observations) used by the
//! estimation cascade.

mod csv_read;
mod csv_write;
mod error;
mod format;
mod frame;
mod observed;
mod parquet_read;
mod parquet_write;
mod reader;
mod time;
mod validate;
mod writer;

pub use error::IoError;
pub use format::FileFormat;
pub use frame::{FrameColumn, OutputFrame, QUALITY_COLUMN};
pub use reader::{ReaderConfig, read_observations};
pub use writer::{Compression, WriterConfig, write_frame};
