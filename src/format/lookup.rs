// SPDX-License-Identifier: MPL-2.0
//! Code-to-label tables for EXIF enumerations.
//!
//! Every table is keyed by the code's string form, so a `u16` tag value and
//! the text `"2"` resolve to the same label.

use crate::config::defaults::UNKNOWN_LABEL;
use std::fmt::Display;

/// Immutable code → label mapping.
pub type LookupTable = &'static [(&'static str, &'static str)];

/// `Exif.Image.ResolutionUnit`
pub static RESOLUTION_UNIT: LookupTable = &[
    ("1", "No absolute unit of measurement"),
    ("2", "Inch"),
    ("3", "Centimeter"),
];

/// `Exif.Image.Orientation`, mirrored and transposed variants collapse to "Flipped".
pub static ORIENTATION: LookupTable = &[
    ("1", "Normal"),
    ("2", "Flipped"),
    ("3", "180º"),
    ("4", "Flipped"),
    ("5", "Flipped"),
    ("6", "90º"),
    ("7", "Flipped"),
    ("8", "270º"),
];

/// `Exif.Photo.MeteringMode`
pub static METERING_MODE: LookupTable = &[
    ("1", "Average"),
    ("2", "Center weighted average"),
    ("3", "Spot"),
    ("4", "Multi spot"),
    ("5", "Pattern"),
    ("6", "Partial"),
    ("255", "Other"),
];

/// `Exif.Photo.LightSource`
pub static LIGHT_SOURCE: LookupTable = &[
    ("0", "Unknown"),
    ("1", "Daylight"),
    ("2", "Fluorescent"),
    ("3", "Tungsten (incandescent light)"),
    ("4", "Flash"),
    ("9", "Fine weather"),
    ("10", "Cloudy weather"),
    ("11", "Shade"),
    ("12", "Daylight fluorescent (D 5700 - 7100K)"),
    ("13", "Day white fluorescent (N 4600 - 5400K)"),
    ("14", "Cool white fluorescent (W 3900 - 4500K)"),
    ("15", "White fluorescent (WW 3200 - 3700K)"),
    ("17", "Standard light A"),
    ("18", "Standard light B"),
    ("19", "Standard light C"),
    ("20", "D55"),
    ("21", "D65"),
    ("22", "D75"),
    ("23", "D50"),
    ("24", "ISO studio tungsten"),
    ("255", "Other light source"),
];

/// `Exif.Photo.ExposureMode`
pub static EXPOSURE_MODE: LookupTable = &[
    ("0", "Auto exposure"),
    ("1", "Manual exposure"),
    ("2", "Auto bracket"),
];

/// `Exif.Photo.GainControl`
pub static GAIN_CONTROL: LookupTable = &[
    ("0", "None"),
    ("1", "Low Gain Up"),
    ("2", "High Gain Up"),
    ("3", "Low Gain Down"),
    ("4", "High Gain Down"),
];

/// `Exif.Photo.Flash`
///
/// Only single-bit values are labelled; combined bit fields (e.g. `25`)
/// resolve to "Unknown".
pub static FLASH: LookupTable = &[
    ("0", "Flash did not fire"),
    ("1", "Flash fired"),
    ("2", "Strobe return light detected"),
    ("4", "Strobe return light not detected"),
    ("8", "Compulsory flash mode"),
    ("16", "Auto mode"),
    ("32", "No flash function"),
    ("64", "Red eye reduction mode"),
];

/// Resolves `code` in `table`, returning `"Unknown"` when absent.
///
/// The code is compared by its `Display` form with no case folding or
/// trimming.
///
/// # Example
///
/// ```
/// use media_columns::format::{lookup, RESOLUTION_UNIT};
///
/// assert_eq!(lookup(RESOLUTION_UNIT, "2"), "Inch");
/// assert_eq!(lookup(RESOLUTION_UNIT, 3), "Centimeter");
/// assert_eq!(lookup(RESOLUTION_UNIT, "999"), "Unknown");
/// ```
pub fn lookup(table: LookupTable, code: impl Display) -> &'static str {
    let code = code.to_string();
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(UNKNOWN_LABEL, |(_, label)| *label)
}
