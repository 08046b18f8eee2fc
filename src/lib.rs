//! Worktime
//!
//! Davomat jadvalidan kunlik ish vaqti va yo'q vaqtni hisoblash.
//!
//! The pipeline runs in one pass: locate the header row inside a noisy
//! export, resolve the date / clock-in / clock-out columns by alias,
//! normalize the rows, then reduce each day to its metrics.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod normalizer;
pub mod report;

pub use config::{Shift, STANDARD_SHIFT};
pub use error::{Result, WorktimeError};
pub use normalizer::AttendanceRecord;
pub use report::{analyze_file, DailyMetrics, ReportRow};
