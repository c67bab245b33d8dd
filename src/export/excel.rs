//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを作り、ファイルに保存する

use crate::error::{ReportError, Result};
use compliance_report_common::export::excel_core::generate_report_buffer;
use compliance_report_common::Report;
use std::path::Path;

pub fn write_excel(report: &Report, output_path: &Path) -> Result<()> {
    let buffer = generate_report_buffer(report)
        .map_err(|e| ReportError::ExcelGeneration(e.to_string()))?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
