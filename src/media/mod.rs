// SPDX-License-Identifier: MPL-2.0
//! Metadata sources, one per backend.
//!
//! Each source is read-only once opened. Opening may fail (unreadable file,
//! missing tool); accessors then report per-field results that the field
//! mapper turns into column values.
//!
//! | Source | Backend | Used for |
//! |--------|---------|----------|
//! | [`AudioTags`] | `id3` | MP3 text tags |
//! | [`MpegInfo`] | `symphonia` | MP3 stream parameters |
//! | [`ExifSource`] | `kamadak-exif` | Image EXIF fields |
//! | [`ImageDimensions`] | `image` | Image pixel size |
//! | [`MediaInfo`] | `mediainfo` subprocess | Video and container formats |
//! | [`PdfInfo`] | `lopdf` | PDF documents |

pub mod audio;
pub mod exif;
pub mod image;
pub mod mediainfo;
pub mod pdf;

pub use audio::{AudioTags, MpegInfo};
pub use self::exif::ExifSource;
pub use image::ImageDimensions;
pub use mediainfo::MediaInfo;
pub use pdf::PdfInfo;
