// SPDX-License-Identifier: MPL-2.0
//! EXIF tag access for still images.
//!
//! Tags are addressed by their exiv2-style keys (`Exif.Photo.FNumber`) and
//! rendered the way exiv2 prints raw values: rationals stay as `num/den`,
//! so `XResolution` reads `72/1` and an exposure bias reads `-1/3`.

use crate::domain::metadata::FieldValue;
use crate::error::{MetadataError, Result};
use exif::{Context, Field, In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// `Exif.Image.Rating` (Microsoft rating tag, 0–5).
const RATING: Tag = Tag(Context::Tiff, 0x4746);

static KEYED_TAGS: &[(&str, Tag)] = &[
    ("Exif.Image.Artist", Tag::Artist),
    ("Exif.Image.DateTime", Tag::DateTime),
    ("Exif.Image.ImageDescription", Tag::ImageDescription),
    ("Exif.Image.Make", Tag::Make),
    ("Exif.Image.Model", Tag::Model),
    ("Exif.Image.Orientation", Tag::Orientation),
    ("Exif.Image.Rating", RATING),
    ("Exif.Image.ResolutionUnit", Tag::ResolutionUnit),
    ("Exif.Image.XResolution", Tag::XResolution),
    ("Exif.Image.YResolution", Tag::YResolution),
    ("Exif.Photo.ApertureValue", Tag::ApertureValue),
    ("Exif.Photo.BrightnessValue", Tag::BrightnessValue),
    ("Exif.Photo.DateTimeOriginal", Tag::DateTimeOriginal),
    ("Exif.Photo.ExposureBiasValue", Tag::ExposureBiasValue),
    ("Exif.Photo.ExposureMode", Tag::ExposureMode),
    ("Exif.Photo.ExposureTime", Tag::ExposureTime),
    ("Exif.Photo.FNumber", Tag::FNumber),
    ("Exif.Photo.Flash", Tag::Flash),
    ("Exif.Photo.FocalLength", Tag::FocalLength),
    ("Exif.Photo.GainControl", Tag::GainControl),
    ("Exif.Photo.ISOSpeedRatings", Tag::PhotographicSensitivity),
    ("Exif.Photo.LightSource", Tag::LightSource),
    ("Exif.Photo.MaxApertureValue", Tag::MaxApertureValue),
    ("Exif.Photo.MeteringMode", Tag::MeteringMode),
    ("Exif.Photo.ShutterSpeedValue", Tag::ShutterSpeedValue),
    ("Exif.Photo.UserComment", Tag::UserComment),
];

/// EXIF fields of one image. Files without readable EXIF give an empty source.
#[derive(Default)]
pub struct ExifSource {
    exif: Option<exif::Exif>,
}

impl ExifSource {
    /// Reads EXIF from an image container.
    ///
    /// Never fails: a missing or unreadable block yields an empty source whose
    /// tags all read as absent.
    pub fn read(path: &Path) -> Self {
        match Self::try_read(path) {
            Ok(exif) => Self { exif: Some(exif) },
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no readable EXIF data");
                Self::default()
            }
        }
    }

    fn try_read(path: &Path) -> Result<exif::Exif> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Ok(exif::Reader::new().read_from_container(&mut reader)?)
    }

    /// Parses a raw TIFF/EXIF block (as found after a JPEG `Exif\0\0` header).
    pub fn from_raw(data: Vec<u8>) -> Result<Self> {
        let exif = exif::Reader::new().read_raw(data)?;
        Ok(Self { exif: Some(exif) })
    }

    pub fn is_empty(&self) -> bool {
        self.exif.is_none()
    }

    fn field(&self, tag: Tag) -> Option<&Field> {
        self.exif.as_ref()?.get_field(tag, In::PRIMARY)
    }

    /// Raw string form of the tag named by an exiv2-style key.
    pub fn tag_string(&self, key: &str) -> Result<FieldValue> {
        let tag = KEYED_TAGS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, tag)| *tag)
            .ok_or_else(|| MetadataError::Malformed(format!("unsupported EXIF key `{key}`")))?;

        Ok(self
            .field(tag)
            .map_or(FieldValue::Null, |f| render_value(tag, &f.value).into()))
    }

    /// Exposure time as a fraction, e.g. `1/320`.
    pub fn exposure_time(&self) -> Result<FieldValue> {
        match self.field(Tag::ExposureTime).map(|f| &f.value) {
            None => Ok(FieldValue::Null),
            Some(Value::Rational(r)) if !r.is_empty() => {
                Ok(format!("{}/{}", r[0].num, r[0].denom).into())
            }
            Some(other) => Err(malformed("ExposureTime", other)),
        }
    }

    pub fn fnumber(&self) -> Result<FieldValue> {
        self.rational_as_real(Tag::FNumber)
    }

    pub fn focal_length(&self) -> Result<FieldValue> {
        self.rational_as_real(Tag::FocalLength)
    }

    /// Altitude in metres, negative below sea level; `0.0` when absent.
    pub fn gps_altitude(&self) -> Result<FieldValue> {
        let Some(field) = self.field(Tag::GPSAltitude) else {
            return Ok(0.0.into());
        };
        let altitude = first_rational(&field.value)
            .ok_or_else(|| malformed("GPSAltitude", &field.value))?;
        let below_sea_level = self
            .field(Tag::GPSAltitudeRef)
            .and_then(|f| f.value.get_uint(0))
            == Some(1);
        Ok(if below_sea_level { -altitude } else { altitude }.into())
    }

    /// Latitude in decimal degrees, negative in the southern hemisphere; `0.0` when absent.
    pub fn gps_latitude(&self) -> Result<FieldValue> {
        self.gps_coordinate(Tag::GPSLatitude, Tag::GPSLatitudeRef, 'S')
    }

    /// Longitude in decimal degrees, negative west of Greenwich; `0.0` when absent.
    pub fn gps_longitude(&self) -> Result<FieldValue> {
        self.gps_coordinate(Tag::GPSLongitude, Tag::GPSLongitudeRef, 'W')
    }

    pub fn iso_speed(&self) -> Result<FieldValue> {
        Ok(self
            .field(Tag::PhotographicSensitivity)
            .and_then(|f| f.value.get_uint(0))
            .into())
    }

    /// Orientation code 1–8, or `0` when unspecified.
    pub fn orientation(&self) -> Result<FieldValue> {
        Ok(self
            .field(Tag::Orientation)
            .and_then(|f| f.value.get_uint(0))
            .unwrap_or(0)
            .into())
    }

    pub fn rating(&self) -> Result<FieldValue> {
        Ok(self.field(RATING).and_then(|f| f.value.get_uint(0)).into())
    }

    fn rational_as_real(&self, tag: Tag) -> Result<FieldValue> {
        match self.field(tag) {
            None => Ok(FieldValue::Null),
            Some(field) => first_rational(&field.value)
                .map(FieldValue::from)
                .ok_or_else(|| malformed(&tag.to_string(), &field.value)),
        }
    }

    fn gps_coordinate(&self, tag: Tag, ref_tag: Tag, negative_ref: char) -> Result<FieldValue> {
        let Some(field) = self.field(tag) else {
            return Ok(0.0.into());
        };
        let degrees = parse_gps_coordinate(&field.value)
            .ok_or_else(|| malformed(&tag.to_string(), &field.value))?;
        let negative = self
            .field(ref_tag)
            .is_some_and(|f| f.display_value().to_string().contains(negative_ref));
        Ok(if negative { -degrees } else { degrees }.into())
    }
}

fn malformed(tag: &str, value: &Value) -> crate::error::Error {
    MetadataError::Malformed(format!("{tag}: unexpected value {value:?}")).into()
}

fn first_rational(value: &Value) -> Option<f64> {
    match value {
        Value::Rational(r) => r.first().map(|r| r.to_f64()),
        Value::SRational(r) => r.first().map(|r| r.to_f64()),
        _ => None,
    }
}

/// Parse GPS coordinate from EXIF rational values (degrees, minutes, seconds).
fn parse_gps_coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Rational(rationals) if rationals.len() >= 3 => {
            let degrees = rationals[0].to_f64();
            let minutes = rationals[1].to_f64();
            let seconds = rationals[2].to_f64();
            Some(degrees + minutes / 60.0 + seconds / 3600.0)
        }
        _ => None,
    }
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a value the way exiv2 prints it uninterpreted.
fn render_value(tag: Tag, value: &Value) -> String {
    match value {
        Value::Ascii(parts) => parts
            .iter()
            .map(|p| String::from_utf8_lossy(p).trim_end_matches('\0').to_string())
            .collect::<Vec<_>>()
            .join(" "),
        Value::Byte(v) => join(v),
        Value::Short(v) => join(v),
        Value::Long(v) => join(v),
        Value::SByte(v) => join(v),
        Value::SShort(v) => join(v),
        Value::SLong(v) => join(v),
        Value::Float(v) => join(v),
        Value::Double(v) => join(v),
        Value::Rational(v) => join(v.iter().map(|r| format!("{}/{}", r.num, r.denom))),
        Value::SRational(v) => join(v.iter().map(|r| format!("{}/{}", r.num, r.denom))),
        Value::Undefined(bytes, _) if tag == Tag::UserComment => render_user_comment(bytes),
        Value::Undefined(bytes, _) => String::from_utf8_lossy(bytes).to_string(),
        _ => String::new(),
    }
}

/// Renders a UserComment with its character-code prefix, e.g. `charset="Ascii" text`.
fn render_user_comment(bytes: &[u8]) -> String {
    if bytes.len() < 8 {
        return String::from_utf8_lossy(bytes).trim_end_matches('\0').to_string();
    }
    let (code, body) = bytes.split_at(8);
    let charset = match code {
        b"ASCII\0\0\0" => "Ascii",
        b"UNICODE\0" => "Unicode",
        b"JIS\0\0\0\0\0" => "Jis",
        _ => "",
    };

    let text = if charset == "Unicode" {
        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(body).to_string()
    };
    let text = text.trim_end_matches(['\0', ' ']);

    if charset.is_empty() {
        text.to_string()
    } else {
        format!("charset=\"{charset}\" {text}")
    }
}
