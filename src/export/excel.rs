//! Excel report generation.
//!
//! One worksheet: the per-day table, the headline absence total, and
//! (unless turned off) two charts - worked hours per day as a line or area
//! chart, missing hours per day as a column chart.

use crate::cli::ChartKind;
use crate::error::Result;
use crate::report::{self, DailyMetrics, ReportRow, TABLE_HEADERS};
use rust_xlsxwriter::{Chart, ChartType, Format, Workbook, Worksheet};
use std::path::Path;

const SHEET_NAME: &str = "hisobot";

pub fn write_report(
    days: &[DailyMetrics],
    output_path: &Path,
    charts: Option<ChartKind>,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, caption) in TABLE_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *caption, &header_format)?;
        worksheet.set_column_width(col as u16, 22)?;
    }

    let rows: Vec<ReportRow> = days.iter().map(ReportRow::from).collect();
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.date)?;
        worksheet.write_number(r, 1, row.worked_hours)?;
        worksheet.write_number(r, 2, row.missing_hours)?;
        worksheet.write_string(r, 3, &row.first_in)?;
        worksheet.write_string(r, 4, &row.last_out)?;
        worksheet.write_number(r, 5, row.late_minutes as f64)?;
        worksheet.write_number(r, 6, row.early_minutes as f64)?;
    }

    // Headline metric below the table.
    let total_row = (rows.len() + 2) as u32;
    worksheet.write_string_with_format(
        total_row,
        0,
        "Umumiy ishxonada bo'lmagan vaqt (soat)",
        &header_format,
    )?;
    worksheet.write_number(total_row, 2, report::total_missing_hours(days))?;

    if let Some(kind) = charts {
        if !rows.is_empty() {
            insert_charts(worksheet, rows.len() as u32, kind)?;
        }
    }

    workbook.save(output_path)?;
    Ok(())
}

/// Charts live to the right of the table and reference its own columns.
fn insert_charts(worksheet: &mut Worksheet, data_rows: u32, kind: ChartKind) -> Result<()> {
    let last_row = data_rows; // header row is row 0
    let chart_type = match kind {
        ChartKind::Line => ChartType::Line,
        ChartKind::Area => ChartType::Area,
    };
    let chart_col = (TABLE_HEADERS.len() + 1) as u16;

    let mut worked = Chart::new(chart_type);
    worked
        .add_series()
        .set_categories((SHEET_NAME, 1, 0, last_row, 0))
        .set_values((SHEET_NAME, 1, 1, last_row, 1))
        .set_name("Ish vaqti (soat)");
    worked.title().set_name("Ish vaqti (kunlik)");
    worked.x_axis().set_name("Дата");
    worked.y_axis().set_name("soat");

    let mut missing = Chart::new(ChartType::Column);
    missing
        .add_series()
        .set_categories((SHEET_NAME, 1, 0, last_row, 0))
        .set_values((SHEET_NAME, 1, 2, last_row, 2))
        .set_name("Ishxonada bo'lmagan (soat)");
    missing.title().set_name("Ishxonada bo'lmagan (soat) - kunlik");
    missing.x_axis().set_name("Дата");
    missing.y_axis().set_name("soat");

    worksheet.insert_chart(1, chart_col, &worked)?;
    worksheet.insert_chart(17, chart_col, &missing)?;
    Ok(())
}
