//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 入力シートが空、または読み取れない
    #[error("Input error: {0}")]
    Input(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel error: {0}")]
    Excel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_input() {
        let error = Error::Input("sheet has no rows".to_string());
        assert_eq!(format!("{}", error), "Input error: sheet has no rows");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_excel() {
        let error = Error::Excel("保存に失敗".to_string());
        assert_eq!(format!("{}", error), "Excel error: 保存に失敗");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Input("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Input"));
        assert!(debug.contains("テスト"));
    }
}
