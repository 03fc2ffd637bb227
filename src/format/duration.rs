// SPDX-License-Identifier: MPL-2.0
//! `HH:MM:SS` rendering of media lengths.

use crate::config::defaults::ERROR_MARKER;
use crate::domain::metadata::FieldValue;

/// Formats a length in seconds as zero-padded `HH:MM:SS`.
///
/// Fractional seconds are truncated. Hours are padded to two digits but never
/// capped, so lengths past 99 hours keep sorting correctly as text widths
/// grow. Anything that is not a finite, non-negative number renders as
/// `"Error"`.
///
/// # Example
///
/// ```
/// use media_columns::format::format_duration;
///
/// assert_eq!(format_duration(&10.into()), "00:00:10");
/// assert_eq!(format_duration(&"15.9".into()), "00:00:15");
/// assert_eq!(format_duration(&(100 * 3600 + 100).into()), "100:01:40");
/// ```
pub fn format_duration(value: &FieldValue) -> String {
    let Some(seconds) = value.as_f64().filter(|s| s.is_finite() && *s >= 0.0) else {
        return ERROR_MARKER.to_string();
    };

    let seconds = seconds.trunc() as u64;
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    )
}
