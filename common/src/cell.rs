//! セル値の型とインデックスアクセス
//!
//! シート読み込み側から渡される生セル値を表現し、
//! 範囲外・空セルでも必ず文字列を返すアクセサを提供する。

use chrono::{NaiveDateTime, NaiveTime};

/// 生セル値
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    String(String),
    Float(f64),
    Int(i64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// `#N/A` などのエラーセル（値としては空扱い）
    Error(String),
}

/// 1行分の生セル列（シートの最大幅より短いことがある）
pub type RawRow = Vec<Cell>;

/// 入力フォーマットの固定列位置（0始まり）
pub mod column {
    pub const FILE_NAME: usize = 2;
    pub const REF_NO: usize = 3;
    pub const CUSTOMER_NAME: usize = 8;
    pub const CITY: usize = 11;
    pub const CTR: usize = 14;
    pub const SEARCH_TEXT_A: usize = 22;
    pub const SEARCH_TEXT_B: usize = 26;
}

impl Cell {
    /// セルの文字列表現（前後の空白はそのまま）
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty | Cell::Error(_) => String::new(),
            Cell::String(s) => s.clone(),
            Cell::Float(f) => format_float(*f),
            Cell::Int(i) => i.to_string(),
            Cell::Bool(b) => b.to_string(),
            Cell::DateTime(dt) => {
                if dt.time() == NaiveTime::MIN {
                    dt.format("%Y-%m-%d").to_string()
                } else {
                    dt.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
        }
    }

    /// 空セル、または空白のみの文字列か
    ///
    /// エラーセルは値を持たないが、セル自体は存在するので空扱いしない。
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::String(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::String(s)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

/// 整数値の浮動小数は小数部なしで表記（`42.0` → `42`）
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

/// 指定列の値をトリム済み文字列で取得
///
/// 範囲外の列や空セルは空文字を返す。失敗しない。
pub fn get_cell(row: &[Cell], index: usize) -> String {
    row.get(index)
        .map(|c| c.as_text().trim().to_string())
        .unwrap_or_default()
}

/// 全セルが空の行か（セル数0を含む）
pub fn is_blank_row(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_blank)
}
