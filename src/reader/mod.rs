//! スプレッドシート読み込み
//!
//! 先頭シートのみを読み、セル値を `Cell` に変換した行列を返す。
//! ヘッダー行は仮定しない（1行目も他の行と同様に扱う）。

use crate::error::{ReportError, Result};
use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use compliance_report_common::{Cell, Error as CommonError, RawRow};
use std::path::Path;
use tracing::{debug, info};

/// 読み込んだシート
#[derive(Debug, Clone)]
pub struct SheetRows {
    pub sheet_name: String,
    pub rows: Vec<RawRow>,
}

/// ブックの先頭シートを読み込み
pub fn read_first_sheet(path: &Path) -> Result<SheetRows> {
    if !path.exists() {
        return Err(ReportError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CommonError::Input("workbook has no sheets".into()))?;

    let range = workbook.worksheet_range(&sheet_name)?;
    if range.is_empty() {
        return Err(CommonError::Input(format!("sheet '{}' has no rows", sheet_name)).into());
    }

    let rows = range_to_rows(&range);
    info!(sheet = %sheet_name, rows = rows.len(), "シートを読み込みました");

    Ok(SheetRows { sheet_name, rows })
}

/// calamineの範囲を絶対列位置の行に変換
///
/// 範囲は最初の非空セルから始まるため、先頭の空行・空列を補って
/// 列インデックスがシート上の位置と一致するようにする。
pub fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    debug!(start_row, start_col, "範囲の開始位置");

    let leading = std::iter::repeat_with(RawRow::new).take(start_row as usize);
    let body = range.rows().map(|row| {
        let mut cells: RawRow = Vec::with_capacity(start_col as usize + row.len());
        cells.resize(start_col as usize, Cell::Empty);
        cells.extend(row.iter().map(convert_cell));
        cells
    });

    leading.chain(body).collect()
}

/// calamineのセル値を変換
pub fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::String(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => data
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::String(data.to_string())),
        Data::DurationIso(s) => Cell::String(s.clone()),
        Data::Error(e) => Cell::Error(e.to_string()),
    }
}
