//! Record normalization.
//!
//! Reduces the located table to the three logical columns, restores dates
//! collapsed by merged cells in the export, and parses clock values the way
//! people actually write them: «13:01 (1)», «(нет)», plain blanks.
//!
//! Structural problems abort the pipeline earlier, in [`crate::ingest`].
//! Here every failure is per-cell and resolves to "no value": one dirty
//! cell must not discard the rest of the day.

use crate::ingest::header::ColumnMap;
use crate::ingest::{cell_text, is_blank, HeaderedTable};
use calamine::{Data, DataType};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Literal placeholder for "no recorded clock event that day".
pub const NO_VALUE_MARKER: &str = "(нет)";

/// Date string layouts seen in the wild exports.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

/// One attendance row after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    /// Resolved calendar date; `None` when the sheet never provided one.
    pub date: Option<NaiveDate>,
    /// Raw clock-in cell text, annotations included.
    pub clock_in_raw: String,
    /// Raw clock-out cell text, annotations included.
    pub clock_out_raw: String,
    /// Parsed clock-in, on the record's own date.
    pub clock_in_time: Option<NaiveDateTime>,
    /// Parsed clock-out, on the record's own date.
    pub clock_out_time: Option<NaiveDateTime>,
}

/// Normalize all data rows: forward-fill dates, parse clock cells.
pub fn normalize(table: &HeaderedTable, columns: &ColumnMap) -> Vec<AttendanceRecord> {
    let mut records = Vec::with_capacity(table.rows.len());
    // Merged date cells export as one value followed by blanks: carry the
    // last resolved date forward.
    let mut current_date: Option<NaiveDate> = None;

    for row in &table.rows {
        if let Some(date_cell) = row.get(columns.date) {
            if !is_blank(date_cell) {
                current_date = parse_date_cell(date_cell);
            }
        }

        let clock_in_raw = row.get(columns.clock_in).map(cell_text).unwrap_or_default();
        let clock_out_raw = row
            .get(columns.clock_out)
            .map(cell_text)
            .unwrap_or_default();

        // No resolved date means no timestamp: parsing is always relative
        // to the row's own date.
        let clock_in_time = current_date.and_then(|date| parse_time(date, &clock_in_raw));
        let clock_out_time = current_date.and_then(|date| parse_time(date, &clock_out_raw));

        records.push(AttendanceRecord {
            date: current_date,
            clock_in_raw,
            clock_out_raw,
            clock_in_time,
            clock_out_time,
        });
    }

    records
}

/// Parse one clock cell relative to the row's resolved date.
///
/// `13:01 (1)` → 13:01 on `date`; «(нет)», blanks and anything that is not
/// a valid `HH:MM` value all resolve to `None`.
pub fn parse_time(date: NaiveDate, raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() || s.contains(NO_VALUE_MARKER) {
        return None;
    }

    // Keep the first token only: the rest is a hand-written annotation.
    let token = s.split_whitespace().next()?;
    let time = NaiveTime::parse_from_str(token, "%H:%M").ok()?;
    Some(date.and_time(time))
}

/// Parse a date cell: native date cells via calamine, strings via the
/// known layouts. Anything else resolves to `None`.
pub fn parse_date_cell(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::Empty => None,
        Data::DateTime(_) | Data::DateTimeIso(_) => cell.as_date(),
        Data::String(s) => parse_date_str(s.trim()),
        other => parse_date_str(other.to_string().trim()),
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }
    // Datetime re-exports ("2025-10-01 00:00:00") keep their date part.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn headered(rows: &[&[&str]]) -> HeaderedTable {
        HeaderedTable {
            headers: vec!["Дата".into(), "приход".into(), "уход".into()],
            rows: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|s| {
                            if s.is_empty() {
                                Data::Empty
                            } else {
                                Data::String(s.to_string())
                            }
                        })
                        .collect()
                })
                .collect(),
        }
    }

    const COLUMNS: ColumnMap = ColumnMap {
        date: 0,
        clock_in: 1,
        clock_out: 2,
    };

    #[test]
    fn test_parse_time_plain() {
        let result = parse_time(date("2025-10-01"), "09:15").unwrap();
        assert_eq!(result.date(), date("2025-10-01"));
        assert_eq!(result.time().hour(), 9);
        assert_eq!(result.time().minute(), 15);
    }

    #[test]
    fn test_parse_time_drops_annotation() {
        let result = parse_time(date("2025-10-01"), "13:01 (1)").unwrap();
        assert_eq!(result.time().hour(), 13);
        assert_eq!(result.time().minute(), 1);
    }

    #[test]
    fn test_parse_time_no_value_marker() {
        assert_eq!(parse_time(date("2025-10-01"), "(нет)"), None);
    }

    #[test]
    fn test_parse_time_empty() {
        assert_eq!(parse_time(date("2025-10-01"), ""), None);
        assert_eq!(parse_time(date("2025-10-01"), "   "), None);
    }

    #[test]
    fn test_parse_time_invalid_swallowed() {
        assert_eq!(parse_time(date("2025-10-01"), "25:99"), None);
        assert_eq!(parse_time(date("2025-10-01"), "bormadi"), None);
    }

    #[test]
    fn test_parse_time_rejects_seconds() {
        // Only HH:MM is recognized.
        assert_eq!(parse_time(date("2025-10-01"), "09:15:30"), None);
    }

    #[test]
    fn test_forward_fill_dates() {
        let table = headered(&[
            &["2025-10-01", "09:00", "18:00"],
            &["", "09:15", ""],
            &["", "", "17:00"],
            &["2025-10-02", "08:55", "18:05"],
        ]);

        let records = normalize(&table, &COLUMNS);
        let dates: Vec<_> = records.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                Some(date("2025-10-01")),
                Some(date("2025-10-01")),
                Some(date("2025-10-01")),
                Some(date("2025-10-02")),
            ]
        );
    }

    #[test]
    fn test_missing_leading_date_stays_missing() {
        let table = headered(&[
            &["", "09:00", "18:00"],
            &["2025-10-02", "09:00", "18:00"],
        ]);

        let records = normalize(&table, &COLUMNS);
        assert_eq!(records[0].date, None);
        // Without a date there is nothing to anchor the times to.
        assert_eq!(records[0].clock_in_time, None);
        assert_eq!(records[0].clock_out_time, None);
        assert_eq!(records[1].date, Some(date("2025-10-02")));
    }

    #[test]
    fn test_timestamps_carry_record_date() {
        let table = headered(&[
            &["2025-10-01", "09:00", "18:00"],
            &["", "10:00", "11:00"],
        ]);

        let records = normalize(&table, &COLUMNS);
        assert_eq!(
            records[1].clock_in_time.unwrap().date(),
            date("2025-10-01")
        );
    }

    #[test]
    fn test_unparseable_date_resolves_to_none() {
        let table = headered(&[&["birinchi kun", "09:00", "18:00"]]);

        let records = normalize(&table, &COLUMNS);
        assert_eq!(records[0].date, None);
        assert_eq!(records[0].clock_in_raw, "09:00");
        assert_eq!(records[0].clock_in_time, None);
    }

    #[test]
    fn test_raw_values_preserved() {
        let table = headered(&[&["2025-10-01", "13:01 (1)", "(нет)"]]);

        let records = normalize(&table, &COLUMNS);
        assert_eq!(records[0].clock_in_raw, "13:01 (1)");
        assert_eq!(records[0].clock_out_raw, "(нет)");
        assert!(records[0].clock_in_time.is_some());
        assert_eq!(records[0].clock_out_time, None);
    }

    #[test]
    fn test_parse_date_cell_formats() {
        let iso = Data::String("2025-10-01".to_string());
        let dotted = Data::String("01.10.2025".to_string());
        let slashed = Data::String("01/10/2025".to_string());
        let datetime = Data::String("2025-10-01 00:00:00".to_string());

        let expected = Some(date("2025-10-01"));
        assert_eq!(parse_date_cell(&iso), expected);
        assert_eq!(parse_date_cell(&dotted), expected);
        assert_eq!(parse_date_cell(&slashed), expected);
        assert_eq!(parse_date_cell(&datetime), expected);
        assert_eq!(parse_date_cell(&Data::Empty), None);
    }
}
