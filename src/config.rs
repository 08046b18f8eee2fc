//! Nominal shift configuration.
//!
//! The expected working day is 09:00-18:00 with 8 paid hours. The values
//! are process-wide constants; no environment or file override exists.

use chrono::NaiveTime;
use lazy_static::lazy_static;

/// Shift boundaries the actual attendance is compared against.
#[derive(Debug, Clone)]
pub struct Shift {
    /// Expected clock-in time.
    pub start: NaiveTime,
    /// Expected clock-out time.
    pub end: NaiveTime,
    /// Paid hours per day.
    pub expected_hours: f64,
}

lazy_static! {
    /// The standard 09:00-18:00, 8 hour shift.
    pub static ref STANDARD_SHIFT: Shift = Shift {
        start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        expected_hours: 8.0,
    };
}
