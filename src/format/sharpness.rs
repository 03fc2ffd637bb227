// SPDX-License-Identifier: MPL-2.0
//! Sharpness scores embedded in EXIF user comments.
//!
//! Culling tools store a sharpness score in `Exif.Photo.UserComment`, either
//! in the legacy `sharpness=<value>` form or as a JSON object. Readers render
//! ASCII comments with a `charset="Ascii" ` prefix which is stripped first.

use crate::config::defaults::SHARPNESS_NOT_SET;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static CHARSET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^charset="Ascii" (?P<dict>.*)"#).expect("valid regex"));

static LEGACY_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sharpness=(?P<sharpness>.*)").expect("valid regex"));

/// Extracts the sharpness score from a user comment.
///
/// Resolution order:
/// 1. no comment → `""`
/// 2. legacy `sharpness=<value>` at the start → `<value>` verbatim
/// 3. the whole remaining text parses as a JSON object → its `sharpness`
///    member, or `"not set"` when the key is missing
/// 4. anything else, including JSON with surrounding text or single
///    quotes → `""`
///
/// # Example
///
/// ```
/// use media_columns::format::extract_sharpness;
///
/// assert_eq!(extract_sharpness(Some(r#"charset="Ascii" sharpness=0.1"#)), "0.1");
/// assert_eq!(extract_sharpness(Some(r#"{"sharpness": 0.25}"#)), "0.25");
/// assert_eq!(extract_sharpness(Some("{}")), "not set");
/// assert_eq!(extract_sharpness(None), "");
/// ```
pub fn extract_sharpness(comment: Option<&str>) -> String {
    let Some(comment) = comment else {
        return String::new();
    };

    let body = CHARSET_PREFIX
        .captures(comment)
        .and_then(|caps| caps.name("dict"))
        .map_or(comment, |m| m.as_str());

    if let Some(value) = LEGACY_PAIR
        .captures(body)
        .and_then(|caps| caps.name("sharpness"))
    {
        return value.as_str().to_string();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("sharpness") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => SHARPNESS_NOT_SET.to_string(),
        },
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_comment_is_empty() {
        assert_eq!(extract_sharpness(None), "");
    }

    #[test]
    fn legacy_pair_after_charset() {
        assert_eq!(extract_sharpness(Some(r#"charset="Ascii" sharpness=0.1"#)), "0.1");
    }

    #[test]
    fn legacy_pair_without_charset() {
        assert_eq!(extract_sharpness(Some("sharpness=12")), "12");
    }

    #[test]
    fn legacy_pair_wins_over_json_lookalike() {
        assert_eq!(
            extract_sharpness(Some(r#"sharpness={"sharpness":"x"}"#)),
            r#"{"sharpness":"x"}"#
        );
    }

    #[test]
    fn json_string_value() {
        assert_eq!(
            extract_sharpness(Some(r#"charset="Ascii" {"sharpness":"0.1"}"#)),
            "0.1"
        );
    }

    #[test]
    fn json_numeric_value() {
        assert_eq!(
            extract_sharpness(Some(r#"charset="Ascii" {"sharpness":0.1}"#)),
            "0.1"
        );
    }

    #[test]
    fn json_without_key_is_not_set() {
        assert_eq!(extract_sharpness(Some(r#"charset="Ascii" {}"#)), "not set");
        assert_eq!(extract_sharpness(Some(r#"{"iso": 100}"#)), "not set");
    }

    #[test]
    fn single_quoted_json_is_rejected() {
        assert_eq!(extract_sharpness(Some(r#"charset="Ascii" {'sharpness':0.1}"#)), "");
    }

    #[test]
    fn json_with_prefix_or_suffix_is_rejected() {
        assert_eq!(
            extract_sharpness(Some(r#"charset="Ascii" Prefix {"sharpness":"0.1"}"#)),
            ""
        );
        assert_eq!(
            extract_sharpness(Some(r#"charset="Ascii" {"sharpness":"0.1"} Postfix"#)),
            ""
        );
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert_eq!(extract_sharpness(Some("[1, 2]")), "");
        assert_eq!(extract_sharpness(Some("0.5")), "");
    }

    #[test]
    fn other_charsets_are_not_stripped() {
        assert_eq!(extract_sharpness(Some(r#"charset="Unicode" sharpness=1"#)), "");
    }

    #[test]
    fn plain_text_is_empty() {
        assert_eq!(extract_sharpness(Some("Holiday at the lake")), "");
        assert_eq!(extract_sharpness(Some("")), "");
    }
}
