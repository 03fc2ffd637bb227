// SPDX-License-Identifier: MPL-2.0
//! Generic field mapping from a metadata source into an [`AttributeBag`].
//!
//! Every column goes through [`FieldMapper::map_with`]: extract a raw value,
//! convert it, localize it, store it. A failure in either step marks that one
//! column with the localized `"Error"` marker and leaves the rest of the bag
//! alone, so a single corrupt tag never blanks a whole file.

use crate::columns::{is_known_column, AttributeBag};
use crate::config::defaults::ERROR_MARKER;
use crate::domain::metadata::FieldValue;
use crate::error::Result;
use crate::i18n::Localizer;

/// Default conversion: the value's canonical string form.
pub fn identity(value: FieldValue) -> Result<String> {
    Ok(value.to_string())
}

/// Writes converted metadata values into a per-file bag.
pub struct FieldMapper<'a> {
    bag: &'a mut AttributeBag,
    localizer: &'a dyn Localizer,
}

impl<'a> FieldMapper<'a> {
    pub fn new(bag: &'a mut AttributeBag, localizer: &'a dyn Localizer) -> Self {
        Self { bag, localizer }
    }

    /// Maps a field with the [`identity`] conversion.
    pub fn map<S: ?Sized>(
        &mut self,
        field: &str,
        source: &S,
        extract: impl FnOnce(&S) -> Result<FieldValue>,
    ) {
        self.map_with(field, source, extract, identity);
    }

    /// Extracts, converts and stores one field.
    ///
    /// - `Null` from `extract` leaves the current value untouched.
    /// - An error from `extract` or `convert` stores the error marker.
    /// - A `field` missing from the column registry is logged, then written anyway.
    pub fn map_with<S: ?Sized>(
        &mut self,
        field: &str,
        source: &S,
        extract: impl FnOnce(&S) -> Result<FieldValue>,
        convert: impl FnOnce(FieldValue) -> Result<String>,
    ) {
        if !is_known_column(field) {
            tracing::warn!(
                field,
                "setting attribute for a field with no corresponding column"
            );
        }

        let outcome = extract(source).and_then(|value| {
            if value.is_null() {
                Ok(None)
            } else {
                convert(value).map(Some)
            }
        });

        match outcome {
            Ok(Some(text)) => {
                let text = self.localizer.localize(&text);
                self.bag.set(field, text);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(field, %err, "field mapping failed");
                let marker = self.localizer.localize(ERROR_MARKER);
                self.bag.set(field, marker);
            }
        }
    }
}
