//! 行変換
//!
//! 生の1行から固定列を読み出し、ステータス判定と項目抽出を行って
//! 21列の出力行を組み立てる。

use crate::cell::{column, get_cell, is_blank_row, Cell};
use crate::config::ClassificationConfig;
use crate::extractor::FieldKey;
use crate::status::{classify, Status};

/// 項目ごとの出力スロット数
pub const MAX_FIELD_SLOTS: usize = 5;

/// 出力行の列数（ステータス + 固定5列 + 抽出3項目×5）
pub const OUTPUT_WIDTH: usize = 1 + 5 + MAX_FIELD_SLOTS * 3;

/// 1行から抽出した項目（各最大5件、出現順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub match_names: Vec<String>,
    pub denial_types: Vec<String>,
    pub split_ids: Vec<String>,
}

impl ExtractedFields {
    /// 検索テキストから3項目を抽出し、先頭5件に切り詰める
    pub fn from_search_text(text: &str) -> Self {
        let take = |key: FieldKey| -> Vec<String> {
            key.extract(text).into_iter().take(MAX_FIELD_SLOTS).collect()
        };
        Self {
            match_names: take(FieldKey::MatchName),
            denial_types: take(FieldKey::DenialType),
            split_ids: take(FieldKey::SplitId),
        }
    }
}

/// 出力行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub status: Status,
    pub file_name: String,
    pub ref_no: String,
    pub customer_name: String,
    pub city: String,
    pub ctr: String,
    pub match_names: [String; MAX_FIELD_SLOTS],
    pub denial_types: [String; MAX_FIELD_SLOTS],
    pub split_ids: [String; MAX_FIELD_SLOTS],
}

impl OutputRow {
    /// ヘッダー順のセル列（常に `OUTPUT_WIDTH` 個）
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(OUTPUT_WIDTH);
        cells.push(self.status.label().to_string());
        cells.push(self.file_name.clone());
        cells.push(self.ref_no.clone());
        cells.push(self.customer_name.clone());
        cells.push(self.city.clone());
        cells.push(self.ctr.clone());
        cells.extend(self.match_names.iter().cloned());
        cells.extend(self.denial_types.iter().cloned());
        cells.extend(self.split_ids.iter().cloned());
        cells
    }
}

/// 5スロットに右詰めで空文字を補う
fn into_slots(values: Vec<String>) -> [String; MAX_FIELD_SLOTS] {
    let mut slots: [String; MAX_FIELD_SLOTS] = Default::default();
    for (slot, value) in slots.iter_mut().zip(values) {
        *slot = value;
    }
    slots
}

/// 2列の検索テキストを連結（末尾の `|` で最後の値を閉じる）
pub fn combine_search_text(search_text_a: &str, search_text_b: &str) -> String {
    format!("{}|{}|", search_text_a, search_text_b)
}

/// 1行を変換
///
/// 全セルが空の行は `None`（レポートに含めない）。
pub fn transform_row(row: &[Cell], config: &ClassificationConfig) -> Option<OutputRow> {
    if is_blank_row(row) {
        return None;
    }

    let file_name = get_cell(row, column::FILE_NAME);
    let ref_no = get_cell(row, column::REF_NO);
    let customer_name = get_cell(row, column::CUSTOMER_NAME);
    let city = get_cell(row, column::CITY);
    let ctr = get_cell(row, column::CTR);
    let search_text_a = get_cell(row, column::SEARCH_TEXT_A);
    let search_text_b = get_cell(row, column::SEARCH_TEXT_B);

    let status = classify(&customer_name, &ctr, &city, &search_text_a, &search_text_b, config);
    let fields = ExtractedFields::from_search_text(&combine_search_text(&search_text_a, &search_text_b));

    Some(OutputRow {
        status,
        file_name,
        ref_no,
        customer_name,
        city,
        ctr,
        match_names: into_slots(fields.match_names),
        denial_types: into_slots(fields.denial_types),
        split_ids: into_slots(fields.split_ids),
    })
}
