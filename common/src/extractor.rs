//! インライン項目抽出
//!
//! 検索テキストに埋め込まれた `key=value|` 形式の値を抽出する。
//!
//! - キーはASCIIの範囲でのみ大文字小文字を区別しない
//! - 値は次の `|` までの最長の文字列（エスケープなし）
//! - 値は前後の空白を除去し、空になったものは捨てる
//! - 左から順に重複なしで走査し、出現順を保つ

use regex::Regex;

/// 抽出対象の項目キー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// 照合名（RPL列）
    MatchName,
    /// 拒否種別（Denial Type列）
    DenialType,
    /// 分割ID（Splid列）
    SplitId,
}

lazy_static::lazy_static! {
    static ref MATCH_NAME_RE: Regex = field_pattern("MatchName").unwrap();
    static ref DENIAL_TYPE_RE: Regex = field_pattern("DenialType").unwrap();
    static ref SPLIT_ID_RE: Regex = field_pattern("SPLID").unwrap();
}

impl FieldKey {
    /// 出力列の順序
    pub const ALL: [FieldKey; 3] = [FieldKey::MatchName, FieldKey::DenialType, FieldKey::SplitId];

    /// テキスト上のキー名
    pub fn key_name(&self) -> &'static str {
        match self {
            FieldKey::MatchName => "MatchName",
            FieldKey::DenialType => "DenialType",
            FieldKey::SplitId => "SPLID",
        }
    }

    /// 出力ヘッダーの列名プレフィックス
    pub fn column_label(&self) -> &'static str {
        match self {
            FieldKey::MatchName => "RPL",
            FieldKey::DenialType => "Denial Type",
            FieldKey::SplitId => "Splid",
        }
    }

    /// コンパイル済みパターンで抽出
    pub fn extract(&self, text: &str) -> Vec<String> {
        let re: &Regex = match self {
            FieldKey::MatchName => &*MATCH_NAME_RE,
            FieldKey::DenialType => &*DENIAL_TYPE_RE,
            FieldKey::SplitId => &*SPLIT_ID_RE,
        };
        collect_values(re, text)
    }
}

/// 任意のキー名で抽出
///
/// 件数の切り詰めは行わない（呼び出し側の責務）。
///
/// # Examples
/// ```
/// use compliance_report_common::extract_field;
///
/// let text = "MatchName=John Doe|DenialType=Fraud|";
/// assert_eq!(extract_field(text, "matchname"), vec!["John Doe"]);
/// assert!(extract_field(text, "SPLID").is_empty());
/// ```
pub fn extract_field(text: &str, key_name: &str) -> Vec<String> {
    if key_name.is_empty() {
        return Vec::new();
    }
    match field_pattern(key_name) {
        Ok(re) => collect_values(&re, text),
        Err(_) => Vec::new(),
    }
}

/// キー部分のASCII英字を `[sS]` のように展開する（`ſ` や `K` には一致しない）
fn field_pattern(key_name: &str) -> Result<Regex, regex::Error> {
    let key: String = key_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                format!("[{}{}]", c.to_ascii_lowercase(), c.to_ascii_uppercase())
            } else {
                regex::escape(c.encode_utf8(&mut [0; 4]))
            }
        })
        .collect();
    Regex::new(&format!(r"{}=([^|]*)\|", key))
}

fn collect_values(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_values() {
        let text = "MatchName=John Doe|DenialType=Fraud|";
        assert_eq!(FieldKey::MatchName.extract(text), vec!["John Doe"]);
        assert_eq!(FieldKey::DenialType.extract(text), vec!["Fraud"]);
        assert!(FieldKey::SplitId.extract(text).is_empty());
    }

    #[test]
    fn test_extract_keeps_order() {
        let text = "MatchName=B|x|MatchName=A|MatchName=C|";
        assert_eq!(FieldKey::MatchName.extract(text), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_extract_case_insensitive_key() {
        let text = "matchname=lower|MATCHNAME=upper|splid=S-1|";
        assert_eq!(FieldKey::MatchName.extract(text), vec!["lower", "upper"]);
        assert_eq!(FieldKey::SplitId.extract(text), vec!["S-1"]);
    }

    #[test]
    fn test_extract_key_folding_is_ascii_only() {
        assert!(extract_field("\u{17F}PLID=x|", "SPLID").is_empty());
        assert!(FieldKey::SplitId.extract("\u{17F}PLID=x|").is_empty());
        assert!(extract_field("\u{212A}EY=x|", "key").is_empty());
        assert_eq!(extract_field("KeY=x|", "key"), vec!["x"]);
    }

    #[test]
    fn test_extract_skips_empty_values() {
        let text = "DenialType=|DenialType=   |DenialType= Export |";
        assert_eq!(FieldKey::DenialType.extract(text), vec!["Export"]);
    }

    #[test]
    fn test_extract_requires_closing_delimiter() {
        assert!(FieldKey::MatchName.extract("MatchName=Dangling").is_empty());
        assert_eq!(
            FieldKey::MatchName.extract("MatchName=Dangling|"),
            vec!["Dangling"]
        );
    }

    #[test]
    fn test_extract_does_not_truncate() {
        let text: String = (1..=7).map(|i| format!("SPLID={}|", i)).collect();
        assert_eq!(FieldKey::SplitId.extract(&text).len(), 7);
    }

    #[test]
    fn test_extract_is_repeatable() {
        let text = "MatchName=A|noise MatchName=B|";
        let first = FieldKey::MatchName.extract(text);
        let second = FieldKey::MatchName.extract(text);
        assert_eq!(first, second);
        assert_eq!(extract_field(text, "MatchName"), first);
    }

    #[test]
    fn test_extract_field_escapes_key() {
        let text = "a.b=dot|axb=other|";
        assert_eq!(extract_field(text, "a.b"), vec!["dot"]);
        assert!(extract_field(text, "").is_empty());
    }

    #[test]
    fn test_extract_value_spanning_columns() {
        // 2列を `|` で連結した検索テキスト
        let text = format!("{}|{}|", "ZKWD MatchName=Alpha", "MatchName=Beta|");
        assert_eq!(FieldKey::MatchName.extract(&text), vec!["Alpha", "Beta"]);
    }
}
