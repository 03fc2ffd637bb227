// SPDX-License-Identifier: MPL-2.0
//! Unit conversions for numeric columns.

use crate::domain::metadata::FieldValue;
use crate::error::{MetadataError, Result};

fn finite(value: &FieldValue, what: &str) -> Result<f64> {
    value
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MetadataError::Conversion(format!("{what}: {value:?} is not a number")).into())
}

/// Converts a length in PDF points to whole millimetres.
///
/// Uses `points * sqrt(2) / 4`, truncated toward zero. This is a fixed
/// approximation of the page size, not an exact 72 dpi conversion, and must
/// stay stable so column values sort the same across releases.
///
/// # Example
///
/// ```
/// use media_columns::format::points_to_mm;
///
/// assert_eq!(points_to_mm(&612.0.into()).unwrap(), 216);
/// assert_eq!(points_to_mm(&792.0.into()).unwrap(), 280);
/// ```
pub fn points_to_mm(points: &FieldValue) -> Result<i64> {
    let points = finite(points, "page size")?;
    Ok((points * std::f64::consts::SQRT_2 / 4.0).trunc() as i64)
}

/// Formats a bit rate in bits per second as rounded kilobits.
pub fn format_bitrate_kbps(bits_per_sec: &FieldValue) -> Result<String> {
    let bps = finite(bits_per_sec, "bitrate")?;
    Ok(format!("{} Kbps", (bps / 1000.0).round()))
}

/// Formats a sample rate in Hz.
pub fn format_sample_rate(hz: &FieldValue) -> Result<String> {
    let hz = finite(hz, "sample rate")?;
    Ok(format!("{} Hz", hz.round()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_page_in_mm() {
        assert_eq!(points_to_mm(&612.into()).unwrap(), 216);
        assert_eq!(points_to_mm(&792.into()).unwrap(), 280);
    }

    #[test]
    fn points_accept_numeric_text() {
        assert_eq!(points_to_mm(&"595.276".into()).unwrap(), 210);
    }

    #[test]
    fn points_reject_garbage() {
        assert!(points_to_mm(&"wide".into()).is_err());
        assert!(points_to_mm(&FieldValue::Null).is_err());
        assert!(points_to_mm(&f64::INFINITY.into()).is_err());
    }

    #[test]
    fn bitrate_in_kbps() {
        assert_eq!(format_bitrate_kbps(&128_000.into()).unwrap(), "128 Kbps");
        assert_eq!(format_bitrate_kbps(&130_860.into()).unwrap(), "131 Kbps");
        assert!(format_bitrate_kbps(&"fast".into()).is_err());
    }

    #[test]
    fn sample_rate_in_hz() {
        assert_eq!(format_sample_rate(&44_100.into()).unwrap(), "44100 Hz");
        assert!(format_sample_rate(&FieldValue::Null).is_err());
    }
}
