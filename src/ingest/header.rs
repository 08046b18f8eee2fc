//! Header detection and column aliasing.
//!
//! Attendance exports bury the real table under report titles and empty
//! rows, and the column captions drift between Russian and English. The
//! header row is located by the «Дата» token; the three logical columns are
//! then resolved by ordered alias substring matching.

use super::{cell_text, RawTable};
use crate::error::{Result, WorktimeError};

/// Token marking the start of real tabular data.
pub const HEADER_TOKEN: &str = "Дата";

/// Acceptable substrings per logical column, in match priority order.
const DATE_ALIASES: &[&str] = &["дата", "date"];
const CLOCK_IN_ALIASES: &[&str] = &["приход", "in", "entry"];
const CLOCK_OUT_ALIASES: &[&str] = &["уход", "out", "exit"];

/// Indexes of the three logical columns within the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub clock_in: usize,
    pub clock_out: usize,
}

/// Find the first row any of whose cells contains `token` as a
/// case-insensitive substring. Later matches are ignored.
pub fn detect_header_row(table: &RawTable, token: &str) -> Result<usize> {
    let needle = token.to_lowercase();
    table
        .rows
        .iter()
        .position(|row| {
            row.iter()
                .any(|cell| cell_text(cell).to_lowercase().contains(&needle))
        })
        .ok_or_else(|| WorktimeError::HeaderNotFound(token.to_string()))
}

/// Resolve the three logical columns against the real header names.
///
/// All three must resolve; otherwise the file shape is wrong and the
/// pipeline halts with the header names attached for diagnosis.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnMap> {
    let date = find_column(headers, DATE_ALIASES);
    let clock_in = find_column(headers, CLOCK_IN_ALIASES);
    let clock_out = find_column(headers, CLOCK_OUT_ALIASES);

    match (date, clock_in, clock_out) {
        (Some(date), Some(clock_in), Some(clock_out)) => Ok(ColumnMap {
            date,
            clock_in,
            clock_out,
        }),
        _ => Err(WorktimeError::ColumnsNotFound {
            available: headers.to_vec(),
        }),
    }
}

/// First alias that matches any column wins; within one alias the leftmost
/// matching column wins.
fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    for alias in aliases {
        for (idx, name) in headers.iter().enumerate() {
            if name.to_lowercase().contains(alias) {
                return Some(idx);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    fn table(rows: &[&[&str]]) -> RawTable {
        RawTable {
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

    #[test]
    fn test_detect_header_row_skips_preamble() {
        let raw = table(&[
            &["Davomat hisoboti", ""],
            &["", ""],
            &["Дата", "приход"],
            &["2025-10-01", "09:00"],
        ]);
        assert_eq!(detect_header_row(&raw, HEADER_TOKEN).unwrap(), 2);
    }

    #[test]
    fn test_detect_header_row_case_insensitive_substring() {
        let raw = table(&[&["Jadval: дата bo'yicha", "x"]]);
        assert_eq!(detect_header_row(&raw, HEADER_TOKEN).unwrap(), 0);
    }

    #[test]
    fn test_detect_header_row_first_match_only() {
        let raw = table(&[&["Дата"], &["Дата"]]);
        assert_eq!(detect_header_row(&raw, HEADER_TOKEN).unwrap(), 0);
    }

    #[test]
    fn test_detect_header_row_not_found() {
        let raw = table(&[&["Xodim", "Bo'lim"], &["Anvar", "IT"]]);
        let result = detect_header_row(&raw, HEADER_TOKEN);
        assert!(matches!(result, Err(WorktimeError::HeaderNotFound(_))));
    }

    #[test]
    fn test_resolve_columns_russian_captions() {
        let headers: Vec<String> = ["Дата", "приход", "уход"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let map = resolve_columns(&headers).unwrap();
        assert_eq!(
            map,
            ColumnMap {
                date: 0,
                clock_in: 1,
                clock_out: 2
            }
        );
    }

    #[test]
    fn test_resolve_columns_english_captions() {
        let headers: Vec<String> = ["Work date", "Entry time", "Exit time"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let map = resolve_columns(&headers).unwrap();
        assert_eq!(
            map,
            ColumnMap {
                date: 0,
                clock_in: 1,
                clock_out: 2
            }
        );
    }

    #[test]
    fn test_resolve_columns_leftmost_wins() {
        // Two date-like columns: the leftmost one must win.
        let headers: Vec<String> = ["Дата", "Дата изменения", "приход", "уход"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let map = resolve_columns(&headers).unwrap();
        assert_eq!(map.date, 0);
    }

    #[test]
    fn test_resolve_columns_alias_order_over_column_order() {
        // "приход" is a higher-priority alias than "in", even when an
        // "in"-matching column appears further left.
        let headers: Vec<String> = ["Дата", "Check-in", "приход", "уход"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let map = resolve_columns(&headers).unwrap();
        assert_eq!(map.clock_in, 2);
    }

    #[test]
    fn test_resolve_columns_missing_reports_available() {
        let headers: Vec<String> = ["Дата", "Xodim"].iter().map(|s| s.to_string()).collect();
        match resolve_columns(&headers) {
            Err(WorktimeError::ColumnsNotFound { available }) => {
                assert_eq!(available, vec!["Дата", "Xodim"]);
            }
            other => panic!("ColumnsNotFound kutilgan edi: {:?}", other),
        }
    }
}
