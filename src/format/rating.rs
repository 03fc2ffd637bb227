// SPDX-License-Identifier: MPL-2.0
//! Five-star rating glyphs.

use crate::config::defaults::{EMPTY_STAR, FILLED_STAR, MAX_STARS};
use crate::domain::metadata::FieldValue;

/// Renders a rating as exactly five glyphs, filled stars first.
///
/// The value is clamped to `[0, 5]` and rounded to the nearest star, with
/// exact halves rounding down (`3.5` shows three stars). Missing or
/// non-numeric ratings render as five empty stars rather than an error.
///
/// # Example
///
/// ```
/// use media_columns::format::render_stars;
///
/// assert_eq!(render_stars(&4.into()), "★★★★☆");
/// assert_eq!(render_stars(&"5".into()), "★★★★★");
/// assert_eq!(render_stars(&(-1).into()), "☆☆☆☆☆");
/// ```
pub fn render_stars(value: &FieldValue) -> String {
    let rating = value
        .as_f64()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, MAX_STARS as f64);

    let filled = ((rating - 0.5).ceil().max(0.0) as usize).min(MAX_STARS);

    std::iter::repeat_n(FILLED_STAR, filled)
        .chain(std::iter::repeat_n(EMPTY_STAR, MAX_STARS - filled))
        .collect()
}
