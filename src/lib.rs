//! コンプライアンス出力のステータス判定・レポート生成
//!
//! 判定と抽出のコアは `compliance_report_common` にあり、
//! このクレートはシートの読み書き、設定の永続化、CLIを担う。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod reader;
