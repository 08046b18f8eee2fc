//! Report and template workbook generation.

pub mod excel;
pub mod template;

use crate::cli::ChartKind;
use crate::error::Result;
use crate::report::DailyMetrics;
use std::path::{Path, PathBuf};

/// Write the Excel report; `charts` is `None` when chart rendering is
/// turned off. Returns the path actually written.
pub fn export_report(
    days: &[DailyMetrics],
    output: &Path,
    charts: Option<ChartKind>,
) -> Result<PathBuf> {
    let path = output_path_with_name(output, "hisobot");
    excel::write_report(days, &path, charts)?;
    Ok(path)
}

/// Write the example template workbook. Returns the path actually written.
pub fn export_template(output: &Path) -> Result<PathBuf> {
    let path = output_path_with_name(output, "attendance_template");
    template::write_template(&path)?;
    Ok(path)
}

/// Directories and extension-less paths get a default `<name>.xlsx` file.
fn output_path_with_name(output: &Path, name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.xlsx", name))
    } else {
        output.to_path_buf()
    }
}
