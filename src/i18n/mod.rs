// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for column texts and values.
//!
//! This module provides localization using the Fluent localization system.
//! It handles language detection, translation file loading, and string lookup.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Gettext-style value translation: text without a translation is returned unchanged

pub mod fluent;

/// Translates text written into columns.
///
/// Implementations must return the input unchanged when they have no
/// translation, so numeric and free-form values pass through untouched.
pub trait Localizer {
    fn localize(&self, text: &str) -> String;
}

/// Localizer that never translates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalization;

impl Localizer for NoLocalization {
    fn localize(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Builds the Fluent message id used to translate a column value.
///
/// Lowercases ASCII alphanumerics and folds every other run of characters
/// into a single `-`, so `"Flash fired"` becomes `value-flash-fired`.
/// Returns `None` for text with no alphanumeric content.
pub fn value_message_id(text: &str) -> Option<String> {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        None
    } else {
        Some(format!("value-{slug}"))
    }
}

/// Message id for a column's label.
pub fn column_label_id(name: &str) -> String {
    format!("column-{}-label", name.replace('_', "-"))
}

/// Message id for a column's description.
pub fn column_description_id(name: &str) -> String {
    format!("column-{}-description", name.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_ids_are_slugged() {
        assert_eq!(value_message_id("Error").as_deref(), Some("value-error"));
        assert_eq!(
            value_message_id("Flash fired").as_deref(),
            Some("value-flash-fired")
        );
        assert_eq!(
            value_message_id("Tungsten (incandescent light)").as_deref(),
            Some("value-tungsten-incandescent-light")
        );
        assert_eq!(value_message_id("1/320").as_deref(), Some("value-1-320"));
    }

    #[test]
    fn value_ids_need_alphanumerics() {
        assert_eq!(value_message_id(""), None);
        assert_eq!(value_message_id("☆☆☆☆☆"), None);
    }

    #[test]
    fn column_ids_use_dashes() {
        assert_eq!(column_label_id("gps_altitude"), "column-gps-altitude-label");
        assert_eq!(column_description_id("title"), "column-title-description");
    }

    #[test]
    fn no_localization_is_identity() {
        assert_eq!(NoLocalization.localize("Inch"), "Inch");
    }
}
