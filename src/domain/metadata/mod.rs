// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Metadata backends disagree on how they hand out values: tag readers return
//! text, EXIF accessors return integers or reals, `mediainfo` returns JSON
//! strings. [`FieldValue`] is the common currency that flows from a source
//! into a converter.

mod types;

pub use types::FieldValue;
