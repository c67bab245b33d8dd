//! 大文字小文字の正規化
//!
//! キーワード部分一致・承認コード完全一致・マーカー検出は
//! すべてここの `fold` を通して比較する。

/// 比較用に正規化（Unicode大文字化）
pub fn fold(text: &str) -> String {
    text.to_uppercase()
}

/// `haystack` に `needle` が含まれるか（大文字小文字無視）
///
/// 空白のみの `needle` は一致しない扱い。それ以外は空白も含めて比較する。
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    !needle.trim().is_empty() && fold(haystack).contains(&fold(needle))
}

/// `value` が設定値 `entry` と完全一致するか（大文字小文字無視）
///
/// 空白のみの `entry` は一致しない扱い。
pub fn eq_folded(value: &str, entry: &str) -> bool {
    !entry.trim().is_empty() && fold(value) == fold(entry)
}
