//! Per-day aggregation and report rendering.
//!
//! Groups normalized records by resolved date and folds each group into one
//! [`DailyMetrics`] row. Worked time counts only rows carrying both clock
//! events; orphan punches feed first-in/last-out tracking but are never
//! paired across rows.

use crate::config::Shift;
use crate::error::Result;
use crate::ingest::{self, header};
use crate::normalizer::{self, AttendanceRecord};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Metrics for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyMetrics {
    /// The day; `None` collects the rows whose date never resolved.
    pub date: Option<NaiveDate>,
    /// Sum of same-row clock-out minus clock-in durations, in hours.
    pub worked_hours: f64,
    /// Shortfall against the expected shift length, floored at zero.
    pub missing_hours: f64,
    /// Earliest clock-in of the day.
    pub first_in: Option<NaiveTime>,
    /// Latest clock-out of the day.
    pub last_out: Option<NaiveTime>,
    /// Minutes the first clock-in trails the nominal shift start.
    pub late_minutes: i64,
    /// Minutes the last clock-out precedes the nominal shift end.
    pub early_minutes: i64,
}

/// Presentation form of [`DailyMetrics`]: dates and times as display
/// strings, shared by the console table, JSON file and Excel report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub date: String,
    pub worked_hours: f64,
    pub missing_hours: f64,
    pub first_in: String,
    pub last_out: String,
    pub late_minutes: i64,
    pub early_minutes: i64,
}

impl From<&DailyMetrics> for ReportRow {
    fn from(day: &DailyMetrics) -> Self {
        Self {
            date: day
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            worked_hours: day.worked_hours,
            missing_hours: day.missing_hours,
            first_in: day
                .first_in
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            last_out: day
                .last_out
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            late_minutes: day.late_minutes,
            early_minutes: day.early_minutes,
        }
    }
}

/// Column captions of the report table, in output order.
pub const TABLE_HEADERS: &[&str] = &[
    "Дата",
    "Ish vaqti (soat)",
    "Ishxonada bo'lmagan (soat)",
    "Birinchi kirish",
    "Oxirgi chiqish",
    "Kechikish (min)",
    "Oldin chiqish (min)",
];

/// Run the whole pipeline over one workbook.
pub fn analyze_file(path: &Path, shift: &Shift) -> Result<Vec<DailyMetrics>> {
    let raw = ingest::load_raw(path)?;
    let header_row = header::detect_header_row(&raw, header::HEADER_TOKEN)?;
    let table = raw.with_header(header_row);
    let columns = header::resolve_columns(&table.headers)?;
    let records = normalizer::normalize(&table, &columns);
    Ok(aggregate(&records, shift))
}

/// Group records by resolved date and reduce each group, ascending by date.
/// The missing-date group, if present, comes first.
pub fn aggregate(records: &[AttendanceRecord], shift: &Shift) -> Vec<DailyMetrics> {
    let mut groups: BTreeMap<Option<NaiveDate>, Vec<&AttendanceRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.date).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(date, rows)| reduce_day(date, &rows, shift))
        .collect()
}

/// Fold one day's records into its metrics.
fn reduce_day(date: Option<NaiveDate>, rows: &[&AttendanceRecord], shift: &Shift) -> DailyMetrics {
    let mut total = Duration::zero();
    let mut first_in: Option<NaiveDateTime> = None;
    let mut last_out: Option<NaiveDateTime> = None;

    for row in rows {
        // Only rows carrying both clock events contribute worked time;
        // orphan punches are tracked below but never paired across rows.
        if let (Some(clock_in), Some(clock_out)) = (row.clock_in_time, row.clock_out_time) {
            total = total + (clock_out - clock_in);
        }
        if let Some(clock_in) = row.clock_in_time {
            if first_in.map_or(true, |earliest| clock_in < earliest) {
                first_in = Some(clock_in);
            }
        }
        if let Some(clock_out) = row.clock_out_time {
            if last_out.map_or(true, |latest| clock_out > latest) {
                last_out = Some(clock_out);
            }
        }
    }

    let worked_hours = round2(total.num_seconds() as f64 / 3600.0);
    let missing_hours = round2((shift.expected_hours - worked_hours).max(0.0));
    let late_minutes = first_in
        .map(|f| (minutes_of(f.time()) - minutes_of(shift.start)).max(0))
        .unwrap_or(0);
    let early_minutes = last_out
        .map(|l| (minutes_of(shift.end) - minutes_of(l.time())).max(0))
        .unwrap_or(0);

    DailyMetrics {
        date,
        worked_hours,
        missing_hours,
        first_in: first_in.map(|f| f.time()),
        last_out: last_out.map(|l| l.time()),
        late_minutes,
        early_minutes,
    }
}

/// Sum of the per-day absence figures, for the headline metric.
pub fn total_missing_hours(days: &[DailyMetrics]) -> f64 {
    round2(days.iter().map(|day| day.missing_hours).sum())
}

/// Render the per-day table for the console.
pub fn format_table(days: &[DailyMetrics]) -> String {
    let mut cells: Vec<Vec<String>> =
        vec![TABLE_HEADERS.iter().map(|h| h.to_string()).collect()];
    for day in days {
        let row = ReportRow::from(day);
        cells.push(vec![
            row.date,
            format!("{:.2}", row.worked_hours),
            format!("{:.2}", row.missing_hours),
            row.first_in,
            row.last_out,
            row.late_minutes.to_string(),
            row.early_minutes.to_string(),
        ]);
    }

    let widths: Vec<usize> = (0..TABLE_HEADERS.len())
        .map(|col| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for (i, row) in cells.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<w$}", cell, w = *width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("  "));
            out.push('\n');
        }
    }
    out
}

fn minutes_of(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
