//! Excel生成（共通ライブラリ）
//!
//! 処理済みレポートを1シートのxlsxとしてバッファに書き出す

use crate::error::{Error, Result};
use crate::report::Report;
use crate::transform::OUTPUT_WIDTH;
use rust_xlsxwriter::*;

/// 出力シート名
pub const SHEET_NAME: &str = "Processed Report";

/// 列幅（ステータス・固定列・抽出列）
const STATUS_COL_WIDTH: f64 = 14.0;
const FIXED_COL_WIDTH: f64 = 22.0;
const SLOT_COL_WIDTH: f64 = 16.0;

fn excel_err(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Excel(format!("{}: {}", context, e))
}

/// レポートをxlsxバッファに生成
pub fn generate_report_buffer(report: &Report) -> Result<Vec<u8>> {
    generate_table_buffer(&report.to_table())
}

/// 文字列表（先頭行をヘッダーとして太字）をxlsxバッファに生成
pub fn generate_table_buffer(table: &[Vec<String>]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(excel_err("シート名設定エラー"))?;

    for col in 0..OUTPUT_WIDTH {
        let width = match col {
            0 => STATUS_COL_WIDTH,
            1..=5 => FIXED_COL_WIDTH,
            _ => SLOT_COL_WIDTH,
        };
        worksheet
            .set_column_width(col as u16, width)
            .map_err(excel_err("列幅設定エラー"))?;
    }

    for (row_idx, row) in table.iter().enumerate() {
        let row_num = row_idx as u32;
        for (col_idx, value) in row.iter().enumerate() {
            let col_num = col_idx as u16;
            if row_idx == 0 {
                worksheet
                    .write_string_with_format(row_num, col_num, value, &header_format)
                    .map_err(excel_err("ヘッダー書き込みエラー"))?;
            } else if !value.is_empty() {
                worksheet
                    .write_string(row_num, col_num, value)
                    .map_err(excel_err("値書き込みエラー"))?;
            }
        }
    }

    if !table.is_empty() {
        worksheet
            .set_freeze_panes(1, 0)
            .map_err(excel_err("ウィンドウ枠固定エラー"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(excel_err("Excel保存エラー"))
}
