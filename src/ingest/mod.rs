//! Workbook ingestion.
//!
//! Reads the uploaded attendance workbook (.xls or .xlsx) into an untyped
//! grid of cells. Nothing here assumes a header row: the real table usually
//! sits below report titles and blank lines, and locating it is the job of
//! [`header`].

pub mod header;

use crate::error::{Result, WorktimeError};
use calamine::{open_workbook_auto, Data, DataType, Reader};
use std::path::Path;

/// Untyped rectangular grid of cells, the literal upload content.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub rows: Vec<Vec<Data>>,
}

/// The grid re-read with a located header row: column names plus the data
/// rows below them.
#[derive(Debug, Clone)]
pub struct HeaderedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

/// Read the first worksheet of the workbook as a raw cell grid.
pub fn load_raw(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(WorktimeError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(WorktimeError::NoSheet)??;

    let rows = range.rows().map(|row| row.to_vec()).collect();
    Ok(RawTable { rows })
}

impl RawTable {
    /// Split the grid at `header_row`: that row becomes the column names,
    /// everything below it becomes the data rows.
    pub fn with_header(self, header_row: usize) -> HeaderedTable {
        let headers = self
            .rows
            .get(header_row)
            .map(|row| row.iter().map(cell_text).collect())
            .unwrap_or_default();
        let rows = self.rows.into_iter().skip(header_row + 1).collect();
        HeaderedTable { headers, rows }
    }
}

/// Render a cell as trimmed text.
///
/// Native time cells become `HH:MM` and native date cells ISO dates, never
/// the raw Excel serial number.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::DateTime(serial) => match cell.as_datetime() {
            // Serial values below 1.0 are pure times of day.
            Some(ts) if serial.as_f64() < 1.0 => ts.format("%H:%M").to_string(),
            Some(ts) if ts.time() == chrono::NaiveTime::MIN => {
                ts.date().format("%Y-%m-%d").to_string()
            }
            Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
            None => serial.as_f64().to_string(),
        },
        Data::DateTimeIso(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

/// A cell that contributes no value: truly empty or whitespace only.
pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
