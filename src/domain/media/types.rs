// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any backend dependencies.

use std::path::Path;

/// MIME types handled by the external container inspector.
pub const CONTAINER_MIME_TYPES: &[&str] = &[
    "video/x-msvideo",
    "video/mpeg",
    "video/x-ms-wmv",
    "audio/x-ms-wma",
    "video/mp4",
    "audio/x-flac",
    "video/x-flv",
    "video/x-matroska",
    "audio/x-wav",
];

/// Canonical classification of a file, selecting its metadata sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// MPEG audio with ID3 tags (`audio/mpeg`).
    Mp3Audio,
    /// Any `image/*` type, read through EXIF and pixel dimensions.
    Image,
    /// Video and lossless/legacy audio containers inspected by `mediainfo`.
    Container,
    /// PDF documents (`application/pdf`).
    Pdf,
    /// Everything else; only the empty defaults are written.
    Unsupported,
}

impl MediaKind {
    /// Classifies a MIME type.
    ///
    /// Matching is exact apart from ASCII case, except for images where the
    /// whole `image/` family qualifies.
    ///
    /// # Example
    ///
    /// ```
    /// use media_columns::domain::media::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_mime("image/jpeg"), MediaKind::Image);
    /// assert_eq!(MediaKind::from_mime("video/x-matroska"), MediaKind::Container);
    /// assert_eq!(MediaKind::from_mime("text/plain"), MediaKind::Unsupported);
    /// ```
    #[must_use]
    pub fn from_mime(mime_type: &str) -> Self {
        let mime = mime_type.trim().to_ascii_lowercase();
        if mime == "audio/mpeg" {
            MediaKind::Mp3Audio
        } else if mime.split('/').next() == Some("image") {
            MediaKind::Image
        } else if CONTAINER_MIME_TYPES.contains(&mime.as_str()) {
            MediaKind::Container
        } else if mime == "application/pdf" {
            MediaKind::Pdf
        } else {
            MediaKind::Unsupported
        }
    }
}

/// Guesses a MIME type from a file extension.
///
/// Used by the command-line host, which has no MIME sniffing of its own.
/// Unknown extensions map to `application/octet-stream`.
#[must_use]
pub fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "mp3" => "audio/mpeg",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        "ico" => "image/vnd.microsoft.icon",
        "heic" | "heif" => "image/heif",
        "avi" => "video/x-msvideo",
        "mpg" | "mpeg" => "video/mpeg",
        "wmv" => "video/x-ms-wmv",
        "wma" => "audio/x-ms-wma",
        "mp4" | "m4v" => "video/mp4",
        "flac" => "audio/x-flac",
        "flv" => "video/x-flv",
        "mkv" => "video/x-matroska",
        "wav" => "audio/x-wav",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
