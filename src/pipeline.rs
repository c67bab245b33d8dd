//! 読み込みから組み立てまでの一括処理

use crate::error::Result;
use crate::reader::read_first_sheet;
use compliance_report_common::{assemble, ClassificationConfig, Report};
use std::path::Path;
use tracing::{debug, info_span};

/// ブックを読み込み、判定済みレポートを返す
///
/// 失敗時は何も書き出さない（出力は呼び出し側が成功後に行う）。
pub fn process_workbook(input: &Path, config: &ClassificationConfig) -> Result<Report> {
    let _span = info_span!("process", input = %input.display()).entered();

    let sheet = read_first_sheet(input)?;
    debug!(
        keywords = config.high_risk_keywords.len(),
        codes = config.approved_codes.len(),
        "判定設定"
    );

    let report = assemble(&sheet.rows, config)?;
    debug!(rows = report.len(), skipped = report.skipped_blank(), "変換完了");
    Ok(report)
}
