// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure domain types for media metadata with no external dependencies.

use std::fmt;

// =============================================================================
// FieldValue
// =============================================================================

/// A raw value read from a metadata source, before column conversion.
///
/// `Null` is the "absent" marker: a field mapper that receives it leaves the
/// column at its pre-seeded empty value.
///
/// # Example
///
/// ```
/// use media_columns::domain::metadata::FieldValue;
///
/// assert_eq!(FieldValue::from(11.0).to_string(), "11.0");
/// assert_eq!(FieldValue::from("1/320").to_string(), "1/320");
/// assert_eq!(FieldValue::from(" 42 ").as_f64(), Some(42.0));
/// assert!(FieldValue::Null.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// No value available.
    #[default]
    Null,
    /// Whole number.
    Integer(i64),
    /// Real number.
    Real(f64),
    /// Free text.
    Text(String),
}

impl FieldValue {
    /// Returns `true` for the absent marker.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Converts the value to a real number.
    ///
    /// Text is trimmed before parsing, so `" 5 "` becomes `5.0`. Returns `None`
    /// for `Null` and for text that is not a number. Non-finite values are
    /// returned as-is; callers decide whether they are acceptable.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Null => None,
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Real(r) => Some(*r),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Returns the text content when the value is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Integer(i) => write!(f, "{i}"),
            // Integral reals keep one decimal so "11.0" stays distinguishable from "11".
            FieldValue::Real(r) if r.is_finite() && r.fract() == 0.0 && r.abs() < 1e16 => {
                write!(f, "{r:.1}")
            }
            FieldValue::Real(r) => write!(f, "{r}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(FieldValue::Real(value as f64), FieldValue::Integer)
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        FieldValue::from(value as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Real(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Real(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

// =============================================================================
// Tests
// =============================================================================
