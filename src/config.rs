use crate::error::{ReportError, Result};
use compliance_report_common::ClassificationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 永続化される設定（キーワード・承認コード一覧）
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub classification: ClassificationConfig,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let settings: Settings = serde_json::from_str(&content)?;
            debug!(path = %path.display(), "設定を読み込みました");
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "設定を保存しました");
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("compliance-report").join("config.json"))
    }

    pub fn add_keyword(&mut self, keyword: &str) -> bool {
        insert_trimmed(&mut self.classification.high_risk_keywords, keyword)
    }

    pub fn remove_keyword(&mut self, keyword: &str) -> bool {
        self.classification.high_risk_keywords.remove(keyword.trim())
    }

    pub fn add_code(&mut self, code: &str) -> bool {
        insert_trimmed(&mut self.classification.approved_codes, code)
    }

    pub fn remove_code(&mut self, code: &str) -> bool {
        self.classification.approved_codes.remove(code.trim())
    }
}

fn insert_trimmed(set: &mut std::collections::BTreeSet<String>, value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && set.insert(value.to_string())
}

/// 実行時の判定設定を組み立てる
///
/// `--config` のJSONがあれば永続設定の代わりに使い、
/// コマンドラインの追加キーワード・コードを加える。
pub fn resolve_classification(
    settings: &Settings,
    override_path: Option<&Path>,
    extra_keywords: &[String],
    extra_codes: &[String],
) -> Result<ClassificationConfig> {
    let mut config = match override_path {
        Some(path) => {
            if !path.exists() {
                return Err(ReportError::FileNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(path)?;
            ClassificationConfig::from_json(&content)?
        }
        None => settings.classification.clone(),
    };

    let extra = ClassificationConfig::new()
        .with_keywords(extra_keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()))
        .with_codes(extra_codes.iter().map(|c| c.trim()).filter(|c| !c.is_empty()));
    config.merge(&extra);

    Ok(config)
}
