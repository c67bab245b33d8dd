//! レポート組み立て
//!
//! 全行を順に変換し、固定ヘッダーを先頭に付けた表を作る。

use crate::cell::Cell;
use crate::config::ClassificationConfig;
use crate::error::{Error, Result};
use crate::status::Status;
use crate::transform::{transform_row, OutputRow, OUTPUT_WIDTH};
use serde::Serialize;

/// 出力ヘッダー（固定順）
pub const HEADER: [&str; OUTPUT_WIDTH] = [
    "Status",
    "File name",
    "Ref No",
    "Customer Name",
    "City",
    "CTR",
    "RPL 1",
    "RPL 2",
    "RPL 3",
    "RPL 4",
    "RPL 5",
    "Denial Type 1",
    "Denial Type 2",
    "Denial Type 3",
    "Denial Type 4",
    "Denial Type 5",
    "Splid 1",
    "Splid 2",
    "Splid 3",
    "Splid 4",
    "Splid 5",
];

/// 処理済みレポート
#[derive(Debug, Clone, Default)]
pub struct Report {
    rows: Vec<OutputRow>,
    skipped_blank: usize,
}

/// ステータス別の件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    pub skipped_blank: usize,
    pub counts: Vec<(Status, usize)>,
}

impl ReportSummary {
    pub fn count(&self, status: Status) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

impl Report {
    pub fn header(&self) -> &'static [&'static str] {
        &HEADER
    }

    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 読み飛ばした空行数
    pub fn skipped_blank(&self) -> usize {
        self.skipped_blank
    }

    /// ヘッダー + 全行の文字列表
    pub fn to_table(&self) -> Vec<Vec<String>> {
        std::iter::once(HEADER.iter().map(|h| h.to_string()).collect::<Vec<String>>())
            .chain(self.rows.iter().map(OutputRow::to_cells))
            .collect()
    }

    pub fn summary(&self) -> ReportSummary {
        let counts = Status::ALL
            .iter()
            .map(|status| {
                let n = self.rows.iter().filter(|r| r.status == *status).count();
                (*status, n)
            })
            .collect();
        ReportSummary {
            total: self.rows.len(),
            skipped_blank: self.skipped_blank,
            counts,
        }
    }
}

/// 全行を変換してレポートを作る
///
/// 行が0件、または全行が空の場合は `Error::Input`。
/// 途中の行が壊れていても失敗せず、空欄の多い行として出力する。
pub fn assemble<R: AsRef<[Cell]>>(raw_rows: &[R], config: &ClassificationConfig) -> Result<Report> {
    if raw_rows.is_empty() {
        return Err(Error::Input("sheet has no rows".into()));
    }

    let mut report = Report::default();
    for raw in raw_rows {
        match transform_row(raw.as_ref(), config) {
            Some(row) => report.rows.push(row),
            None => report.skipped_blank += 1,
        }
    }

    if report.rows.is_empty() {
        return Err(Error::Input("sheet has no readable content".into()));
    }

    Ok(report)
}
