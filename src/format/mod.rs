// SPDX-License-Identifier: MPL-2.0
//! Value formatters turning raw metadata into column text.
//!
//! Each formatter owns its failure policy instead of sharing one:
//!
//! | Formatter | Bad input renders as |
//! |-----------|----------------------|
//! | [`format_duration`] | `"Error"` |
//! | [`render_stars`] | five empty stars |
//! | [`extract_sharpness`] | `""` |
//! | [`lookup`] | `"Unknown"` |
//!
//! The unit converters in [`units`] return a `Result` and leave the error
//! marker to the field mapper.

pub mod duration;
pub mod lookup;
pub mod rating;
pub mod sharpness;
pub mod units;

pub use duration::format_duration;
pub use lookup::{
    lookup, LookupTable, EXPOSURE_MODE, FLASH, GAIN_CONTROL, LIGHT_SOURCE, METERING_MODE,
    ORIENTATION, RESOLUTION_UNIT,
};
pub use rating::render_stars;
pub use sharpness::extract_sharpness;
pub use units::{format_bitrate_kbps, format_sample_rate, points_to_mm};
