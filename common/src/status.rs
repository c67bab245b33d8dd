//! ステータス判定
//!
//! 優先順位付きルールを上から評価し、最初に一致したものを採用する。
//!
//! 1. High Risk: 顧客名に高リスクキーワードを含む
//! 2. APRV: CTRが承認済みコードと完全一致
//! 3. ZKWD / ZEMB / ZKWD & ZEMB: 検索テキストにマーカーを含む
//! 4. No add: 市区町村とCTRがどちらも空
//! 5. SPL: 上記以外

use crate::config::ClassificationConfig;
use crate::normalize::fold;
use serde::{Serialize, Serializer};
use std::fmt;

const ZKWD_MARKER: &str = "ZKWD";
const ZEMB_MARKER: &str = "ZEMB";

/// 行ステータス（必ずいずれか1つ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    HighRisk,
    Approved,
    Zkwd,
    Zemb,
    ZkwdAndZemb,
    NoAdd,
    Spl,
}

impl Status {
    /// 表示順
    pub const ALL: [Status; 7] = [
        Status::HighRisk,
        Status::Approved,
        Status::Zkwd,
        Status::Zemb,
        Status::ZkwdAndZemb,
        Status::NoAdd,
        Status::Spl,
    ];

    /// 出力セルに書くラベル
    pub fn label(&self) -> &'static str {
        match self {
            Status::HighRisk => "High Risk",
            Status::Approved => "APRV",
            Status::Zkwd => "ZKWD",
            Status::Zemb => "ZEMB",
            Status::ZkwdAndZemb => "ZKWD & ZEMB",
            Status::NoAdd => "No add",
            Status::Spl => "SPL",
        }
    }

    fn from_markers(has_zkwd: bool, has_zemb: bool) -> Option<Self> {
        match (has_zkwd, has_zemb) {
            (true, true) => Some(Status::ZkwdAndZemb),
            (true, false) => Some(Status::Zkwd),
            (false, true) => Some(Status::Zemb),
            (false, false) => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// 1行分のステータスを判定
///
/// 入力はすべてトリム済みを想定するが、空白が残っていても結果は変わらない。
/// 失敗しない純粋関数。
pub fn classify(
    customer_name: &str,
    ctr_code: &str,
    city: &str,
    search_text_a: &str,
    search_text_b: &str,
    config: &ClassificationConfig,
) -> Status {
    if config.is_high_risk(customer_name) {
        return Status::HighRisk;
    }

    if config.is_approved(ctr_code) {
        return Status::Approved;
    }

    let combined = fold(&format!("{} {}", search_text_a, search_text_b));
    let has_zkwd = combined.contains(ZKWD_MARKER);
    let has_zemb = combined.contains(ZEMB_MARKER);
    if let Some(status) = Status::from_markers(has_zkwd, has_zemb) {
        return status;
    }

    if city.trim().is_empty() && ctr_code.trim().is_empty() {
        return Status::NoAdd;
    }

    Status::Spl
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClassificationConfig {
        ClassificationConfig::new()
            .with_keywords(["sanction"])
            .with_codes(["ru"])
    }

    #[test]
    fn test_approved_code() {
        let status = classify("Acme Corp", "RU", "Moscow", "", "", &ClassificationConfig::new().with_codes(["ru"]));
        assert_eq!(status, Status::Approved);
    }

    #[test]
    fn test_high_risk_beats_approved() {
        let status = classify("Acme Sanction Partners", "RU", "Moscow", "", "", &config());
        assert_eq!(status, Status::HighRisk);
    }

    #[test]
    fn test_high_risk_beats_markers_and_blank_fields() {
        let status = classify("SANCTIONED LLC", "", "", "ZKWD", "ZEMB", &config());
        assert_eq!(status, Status::HighRisk);
    }

    #[test]
    fn test_approved_beats_markers() {
        let status = classify("Acme", "ru", "", "ZKWD=1|", "", &config());
        assert_eq!(status, Status::Approved);
    }

    #[test]
    fn test_padded_entries_compared_as_written() {
        let cfg = ClassificationConfig::new()
            .with_keywords([" bank"])
            .with_codes([" RU"]);
        assert_eq!(classify("Westbank", "DE", "x", "", "", &cfg), Status::Spl);
        assert_eq!(classify("Acme", "RU", "x", "", "", &cfg), Status::Spl);
        assert_eq!(classify("West bank Ltd", "DE", "x", "", "", &cfg), Status::HighRisk);
    }

    #[test]
    fn test_both_markers() {
        let status = classify("Acme", "DE", "Berlin", "ZKWD=1|", "ZEMB=1|", &config());
        assert_eq!(status, Status::ZkwdAndZemb);
    }

    #[test]
    fn test_single_markers_case_insensitive() {
        assert_eq!(classify("Acme", "DE", "Berlin", "hit zkwd", "", &config()), Status::Zkwd);
        assert_eq!(classify("Acme", "DE", "Berlin", "", "Zemb", &config()), Status::Zemb);
    }

    #[test]
    fn test_markers_beat_no_add() {
        let status = classify("", "", "", "", "ZEMB", &config());
        assert_eq!(status, Status::Zemb);
    }

    #[test]
    fn test_no_add() {
        assert_eq!(classify("", "", "", "", "", &config()), Status::NoAdd);
        assert_eq!(classify("Acme", "  ", " ", "", "", &config()), Status::NoAdd);
    }

    #[test]
    fn test_default_spl() {
        assert_eq!(classify("Acme", "DE", "", "", "", &config()), Status::Spl);
        assert_eq!(classify("Acme", "", "Berlin", "", "", &config()), Status::Spl);
    }

    #[test]
    fn test_keyword_order_does_not_matter() {
        let a = ClassificationConfig::new().with_keywords(["x", "sanction"]).with_codes(["ru", "de"]);
        let b = ClassificationConfig::new().with_keywords(["sanction", "x"]).with_codes(["de", "ru"]);
        let name = "Global Sanction Ltd";
        assert_eq!(classify(name, "RU", "", "", "", &a), Status::HighRisk);
        assert_eq!(classify(name, "RU", "", "", "", &b), Status::HighRisk);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let cfg = config();
        let first = classify("Acme", "DE", "Berlin", "ZKWD", "", &cfg);
        for _ in 0..5 {
            assert_eq!(classify("Acme", "DE", "Berlin", "ZKWD", "", &cfg), first);
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Status::ALL.iter().map(Status::label).collect();
        assert_eq!(
            labels,
            vec!["High Risk", "APRV", "ZKWD", "ZEMB", "ZKWD & ZEMB", "No add", "SPL"]
        );
        assert_eq!(Status::ZkwdAndZemb.to_string(), "ZKWD & ZEMB");
        assert_eq!(serde_json::to_string(&Status::NoAdd).unwrap(), "\"No add\"");
    }
}
