pub mod excel;

use crate::error::Result;
use compliance_report_common::Report;
use std::path::{Path, PathBuf};
use tracing::info;

/// 出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Excel,
    Json,
}

/// 入力ファイル名から既定の出力パスを作る（`<stem>_processed.xlsx`）
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    let extension = match format {
        OutputFormat::Excel => "xlsx",
        OutputFormat::Json => "json",
    };
    parent.join(format!("{}_processed.{}", stem, extension))
}

/// レポートをファイルに書き出す
pub fn write_report(report: &Report, format: OutputFormat, output_path: &Path) -> Result<()> {
    match format {
        OutputFormat::Excel => excel::write_excel(report, output_path)?,
        OutputFormat::Json => {
            std::fs::write(output_path, report_json(report)?)?;
        }
    }
    info!(path = %output_path.display(), rows = report.len(), "レポートを出力しました");
    Ok(())
}

/// ヘッダー + 行の表をJSON文字列に
pub fn report_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(&report.to_table())?)
}
