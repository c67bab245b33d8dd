use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("スプレッドシート読み込みエラー: {0}")]
    SheetRead(#[from] calamine::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] compliance_report_common::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
