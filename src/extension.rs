// SPDX-License-Identifier: MPL-2.0
//! Column provider contract with the file browser.
//!
//! The host asks once for the list of [`Column`]s, then calls
//! [`ColumnExtension::update_file_info`] for every file it displays. All
//! results travel back through [`FileInfo::add_string_attribute`].
//!
//! Which metadata sources run for a file is decided by a strategy table keyed
//! by [`MediaKind`], so adding a format means adding a row, not another branch.

use crate::columns::{AttributeBag, COLUMN_DEFINITIONS};
use crate::config::defaults::COLUMN_ID_PREFIX;
use crate::config::Config;
use crate::domain::media::MediaKind;
use crate::domain::metadata::FieldValue;
use crate::error::Error;
use crate::format::{
    extract_sharpness, format_bitrate_kbps, format_duration, format_sample_rate, lookup,
    points_to_mm, render_stars, LookupTable, EXPOSURE_MODE, FLASH, GAIN_CONTROL, LIGHT_SOURCE,
    METERING_MODE, ORIENTATION, RESOLUTION_UNIT,
};
use crate::i18n::fluent::I18n;
use crate::mapper::FieldMapper;
use crate::media::{AudioTags, ExifSource, ImageDimensions, MediaInfo, MpegInfo, PdfInfo};
use std::path::{Path, PathBuf};
use url::Url;

/// A file handle supplied by the host.
pub trait FileInfo {
    fn uri(&self) -> String;

    fn uri_scheme(&self) -> String {
        self.uri()
            .split_once(':')
            .map(|(scheme, _)| scheme.to_ascii_lowercase())
            .unwrap_or_default()
    }

    fn mime_type(&self) -> String;

    fn add_string_attribute(&mut self, name: &str, value: &str);
}

/// Column registration handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Globally unique column id, e.g. `MediaColumns::title_column`.
    pub name: String,
    /// Attribute the column displays.
    pub attribute: &'static str,
    pub label: String,
    pub description: String,
}

/// Reads metadata for files and writes it as string attributes.
pub struct ColumnExtension {
    config: Config,
    i18n: I18n,
}

impl ColumnExtension {
    pub fn new(config: Config, i18n: I18n) -> Self {
        Self { config, i18n }
    }

    /// Every column, localized, in registry order.
    pub fn columns(&self) -> Vec<Column> {
        COLUMN_DEFINITIONS
            .iter()
            .map(|def| Column {
                name: format!("{COLUMN_ID_PREFIX}::{}_column", def.name),
                attribute: def.name,
                label: self.i18n.column_label(def),
                description: self.i18n.column_description(def),
            })
            .collect()
    }

    /// Populates every column of `file`.
    ///
    /// Non-`file` URIs are left alone. Otherwise every column is first set
    /// to `""`, then overwritten by whatever the file's sources yield.
    pub fn update_file_info(&self, file: &mut dyn FileInfo) {
        if file.uri_scheme() != "file" {
            return;
        }

        let uri = file.uri();
        let bag = match path_from_uri(&uri) {
            Some(path) => self.collect(&path, &file.mime_type()),
            None => {
                tracing::warn!(%uri, "cannot derive a local path from URI");
                AttributeBag::seeded()
            }
        };

        for (name, value) in bag.iter() {
            file.add_string_attribute(name, value);
        }
    }

    /// Builds the attribute bag for a local file of the given MIME type.
    pub fn collect(&self, path: &Path, mime_type: &str) -> AttributeBag {
        let kind = MediaKind::from_mime(mime_type);
        tracing::debug!(path = %path.display(), mime_type, ?kind, "collecting columns");

        let mut bag = AttributeBag::seeded();
        let mut mapper = FieldMapper::new(&mut bag, &self.i18n);
        for extract in extractors(kind) {
            extract(path, &self.config, &mut mapper);
        }
        bag
    }
}

/// Converts a `file://` URI to a local path, decoding percent escapes.
pub fn path_from_uri(uri: &str) -> Option<PathBuf> {
    if let Some(path) = Url::parse(uri).ok().and_then(|url| url.to_file_path().ok()) {
        return Some(path);
    }
    // Relative URIs such as `file://photos/a.jpg` carry the first segment as host.
    uri.strip_prefix("file://")
        .filter(|rest| !rest.is_empty())
        .map(PathBuf::from)
}

type Extractor = fn(&Path, &Config, &mut FieldMapper<'_>);

const MP3_SOURCES: &[Extractor] = &[map_id3_tags, map_mpeg_stream];
const IMAGE_SOURCES: &[Extractor] = &[map_exif, map_image_dimensions];
const CONTAINER_SOURCES: &[Extractor] = &[map_mediainfo];
const PDF_SOURCES: &[Extractor] = &[map_pdf];

fn extractors(kind: MediaKind) -> &'static [Extractor] {
    match kind {
        MediaKind::Mp3Audio => MP3_SOURCES,
        MediaKind::Image => IMAGE_SOURCES,
        MediaKind::Container => CONTAINER_SOURCES,
        MediaKind::Pdf => PDF_SOURCES,
        MediaKind::Unsupported => &[],
    }
}

fn skipped(source: &str, path: &Path, err: &Error) {
    tracing::warn!(source, path = %path.display(), %err, "metadata source unavailable");
}

const ID3_COLUMNS: &[&str] = &["title", "album", "artist", "tracknumber", "genre", "date"];

fn map_id3_tags(path: &Path, _config: &Config, mapper: &mut FieldMapper<'_>) {
    let tags = match AudioTags::read(path) {
        Ok(tags) => tags,
        Err(err) => return skipped("id3", path, &err),
    };
    for &column in ID3_COLUMNS {
        mapper.map(column, &tags, |t| t.get(column));
    }
}

fn map_mpeg_stream(path: &Path, _config: &Config, mapper: &mut FieldMapper<'_>) {
    let info = match MpegInfo::read(path) {
        Ok(info) => info,
        Err(err) => return skipped("mpeg", path, &err),
    };
    mapper.map_with(
        "bitrate",
        &info,
        |i| Ok(i.bitrate()),
        |v| format_bitrate_kbps(&v),
    );
    mapper.map_with(
        "samplerate",
        &info,
        |i| Ok(i.sample_rate()),
        |v| format_sample_rate(&v),
    );
    mapper.map_with(
        "length",
        &info,
        |i| Ok(i.length()),
        |v| Ok(format_duration(&v)),
    );
}

/// Columns copied from a raw EXIF tag, optionally through a lookup table.
static EXIF_TAG_COLUMNS: &[(&str, &str, Option<LookupTable>)] = &[
    ("aperture_value", "Exif.Photo.ApertureValue", None),
    ("artist", "Exif.Image.Artist", None),
    ("brightness_value", "Exif.Photo.BrightnessValue", None),
    ("exposure_bias_value", "Exif.Photo.ExposureBiasValue", None),
    ("exposure_mode", "Exif.Photo.ExposureMode", Some(EXPOSURE_MODE)),
    ("flash", "Exif.Photo.Flash", Some(FLASH)),
    ("gain_control", "Exif.Photo.GainControl", Some(GAIN_CONTROL)),
    ("light_source", "Exif.Photo.LightSource", Some(LIGHT_SOURCE)),
    ("max_aperture_value", "Exif.Photo.MaxApertureValue", None),
    ("metering_mode", "Exif.Photo.MeteringMode", Some(METERING_MODE)),
    ("model", "Exif.Image.Model", None),
    ("resolution_unit", "Exif.Image.ResolutionUnit", Some(RESOLUTION_UNIT)),
    ("shutter_speed_value", "Exif.Photo.ShutterSpeedValue", None),
    ("title", "Exif.Image.ImageDescription", None),
    ("usercomment", "Exif.Photo.UserComment", None),
    ("xresolution", "Exif.Image.XResolution", None),
    ("yresolution", "Exif.Image.YResolution", None),
];

type ExifAccessor = fn(&ExifSource) -> crate::error::Result<FieldValue>;

/// Columns backed by computed EXIF accessors.
const EXIF_COMPUTED_COLUMNS: &[(&str, ExifAccessor)] = &[
    ("exposure_time", ExifSource::exposure_time),
    ("fnumber", ExifSource::fnumber),
    ("focal_length", ExifSource::focal_length),
    ("gps_altitude", ExifSource::gps_altitude),
    ("gps_latitude", ExifSource::gps_latitude),
    ("gps_longitude", ExifSource::gps_longitude),
    ("iso_speed", ExifSource::iso_speed),
];

fn map_exif(path: &Path, _config: &Config, mapper: &mut FieldMapper<'_>) {
    apply_exif(&ExifSource::read(path), mapper);
}

fn apply_exif(exif: &ExifSource, mapper: &mut FieldMapper<'_>) {
    for &(column, key, table) in EXIF_TAG_COLUMNS {
        match table {
            Some(table) => mapper.map_with(
                column,
                exif,
                |e| e.tag_string(key),
                |v| Ok(lookup(table, v).to_string()),
            ),
            None => mapper.map(column, exif, |e| e.tag_string(key)),
        }
    }

    for &(column, accessor) in EXIF_COMPUTED_COLUMNS {
        mapper.map(column, exif, accessor);
    }

    mapper.map_with(
        "orientation",
        exif,
        ExifSource::orientation,
        |v| Ok(lookup(ORIENTATION, v).to_string()),
    );
    mapper.map("datetime_original", exif, |e| {
        match e.tag_string("Exif.Photo.DateTimeOriginal")? {
            FieldValue::Null => e.tag_string("Exif.Image.DateTime"),
            value => Ok(value),
        }
    });
    mapper.map_with(
        "sharpness",
        exif,
        |e| e.tag_string("Exif.Photo.UserComment"),
        |v| Ok(extract_sharpness(v.as_text())),
    );
    mapper.map_with("rating", exif, ExifSource::rating, |v| Ok(render_stars(&v)));
}

fn map_image_dimensions(path: &Path, _config: &Config, mapper: &mut FieldMapper<'_>) {
    let dims = match ImageDimensions::read(path) {
        Ok(dims) => dims,
        Err(err) => return skipped("image", path, &err),
    };
    mapper.map("width", &dims, |d| Ok(d.width()));
    mapper.map("height", &dims, |d| Ok(d.height()));
}

/// `(column, mediainfo key)` pairs copied verbatim.
const MEDIAINFO_COLUMNS: &[(&str, &str)] = &[
    ("format", "Format"),
    ("overall_bitrate", "OverallBitRate"),
    ("frame_count", "FrameCount"),
    ("video_format", "VideoFormat"),
    ("width", "Width"),
    ("height", "Height"),
    ("bit_depth", "BitDepth"),
    ("audio_format", "AudioFormat"),
];

fn map_mediainfo(path: &Path, config: &Config, mapper: &mut FieldMapper<'_>) {
    let info = match MediaInfo::read(path, config.mediainfo_command()) {
        Ok(info) => info,
        Err(err) => return skipped("mediainfo", path, &err),
    };
    apply_mediainfo(&info, mapper);
}

fn apply_mediainfo(info: &MediaInfo, mapper: &mut FieldMapper<'_>) {
    for &(column, key) in MEDIAINFO_COLUMNS {
        mapper.map(column, info, |m| Ok(m.get(key)));
    }
    mapper.map_with(
        "duration",
        info,
        |m| Ok(m.get("Duration")),
        |v| Ok(format_duration(&v)),
    );
}

fn map_pdf(path: &Path, _config: &Config, mapper: &mut FieldMapper<'_>) {
    let pdf = match PdfInfo::read(path) {
        Ok(pdf) => pdf,
        Err(err) => return skipped("pdf", path, &err),
    };
    apply_pdf(&pdf, mapper);
}

fn apply_pdf(pdf: &PdfInfo, mapper: &mut FieldMapper<'_>) {
    mapper.map("pages", pdf, |p| Ok(p.page_count()));
    mapper.map("title", pdf, |p| Ok(p.title()));
    mapper.map("artist", pdf, |p| Ok(p.author()));

    if pdf.pages > 0 {
        let to_mm = |v: FieldValue| points_to_mm(&v).map(|mm| mm.to_string());
        mapper.map_with("width", pdf, PdfInfo::page_width, to_mm);
        mapper.map_with("height", pdf, PdfInfo::page_height, to_mm);
    }
}

/// A local file acting as its own host handle.
///
/// Used by the command-line host; attributes land in an [`AttributeBag`].
#[derive(Debug, Clone)]
pub struct LocalFile {
    uri: String,
    mime_type: String,
    attributes: AttributeBag,
}

impl LocalFile {
    /// Wraps `path`; relative paths are resolved against the working directory.
    pub fn new(path: &Path, mime_type: impl Into<String>) -> crate::error::Result<Self> {
        let absolute = std::path::absolute(path)?;
        let uri = Url::from_file_path(&absolute)
            .map_err(|()| Error::Io(format!("not a local path: {}", absolute.display())))?
            .to_string();
        Ok(Self {
            uri,
            mime_type: mime_type.into(),
            attributes: AttributeBag::new(),
        })
    }

    pub fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }
}

impl FileInfo for LocalFile {
    fn uri(&self) -> String {
        self.uri.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn add_string_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set(name, value);
    }
}
