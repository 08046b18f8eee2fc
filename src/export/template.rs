//! Template workbook generation.
//!
//! A static example of the expected upload shape: three columns
//! (Дата / приход / уход) and three days, one of them fully absent.

use crate::error::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const TEMPLATE_HEADERS: [&str; 3] = ["Дата", "приход", "уход"];

/// Example rows shown to users; the last one demonstrates the «(нет)»
/// no-value marker.
const TEMPLATE_ROWS: &[[&str; 3]] = &[
    ["2025-10-01", "09:00", "18:00"],
    ["2025-10-02", "09:15", "17:30"],
    ["2025-10-03", "(нет)", "(нет)"],
];

pub fn write_template(output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("attendance_template")?;

    let header_format = Format::new().set_bold();
    for (col, caption) in TEMPLATE_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *caption, &header_format)?;
        worksheet.set_column_width(col as u16, 14)?;
    }

    for (i, row) in TEMPLATE_ROWS.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string((i + 1) as u32, col as u16, *value)?;
        }
    }

    workbook.save(output_path)?;
    Ok(())
}
