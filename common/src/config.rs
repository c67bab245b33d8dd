//! 判定設定
//!
//! 高リスクキーワードと承認済み国コードの2つの集合。
//! 実行中は変更されない。大文字小文字の正規化は比較時に行う。

use crate::error::Result;
use crate::normalize::{contains_folded, eq_folded};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// ステータス判定の設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassificationConfig {
    /// 顧客名に部分一致したら High Risk
    pub high_risk_keywords: BTreeSet<String>,
    /// CTRと完全一致したら APRV
    pub approved_codes: BTreeSet<String>,
}

impl ClassificationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.high_risk_keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn with_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.approved_codes.extend(codes.into_iter().map(Into::into));
        self
    }

    /// 顧客名に高リスクキーワードが含まれるか
    pub fn is_high_risk(&self, customer_name: &str) -> bool {
        self.high_risk_keywords
            .iter()
            .any(|keyword| contains_folded(customer_name, keyword))
    }

    /// CTRが承認済みコードか
    pub fn is_approved(&self, ctr_code: &str) -> bool {
        self.approved_codes
            .iter()
            .any(|code| eq_folded(ctr_code, code))
    }

    /// 設定を統合（後から追加した値を加える）
    pub fn merge(&mut self, other: &ClassificationConfig) {
        self.high_risk_keywords.extend(other.high_risk_keywords.iter().cloned());
        self.approved_codes.extend(other.approved_codes.iter().cloned());
    }
}
