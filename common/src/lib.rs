//! Compliance Report Common Library
//!
//! CLIと他のフロントエンドで共有される判定・抽出コア（I/Oなし）

pub mod cell;
pub mod normalize;
pub mod extractor;
pub mod config;
pub mod status;
pub mod transform;
pub mod report;
pub mod error;
pub mod export;

pub use cell::{get_cell, Cell, RawRow};
pub use config::ClassificationConfig;
pub use error::{Error, Result};
pub use extractor::{extract_field, FieldKey};
pub use status::{classify, Status};
pub use transform::{transform_row, ExtractedFields, OutputRow, MAX_FIELD_SLOTS, OUTPUT_WIDTH};
pub use report::{assemble, Report, ReportSummary, HEADER};
