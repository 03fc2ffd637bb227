// SPDX-License-Identifier: MPL-2.0
//! MP3 metadata: ID3 text frames and MPEG stream parameters.

use crate::domain::metadata::FieldValue;
use crate::error::{MetadataError, Result};
use id3::frame::Content;
use id3::{Tag, TagLike};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

/// Simple-key access to an ID3 tag.
///
/// Keys are the column names (`title`, `album`, `artist`, `tracknumber`,
/// `genre`, `date`). A key whose frame is absent reads as empty text, so the
/// column is written blank rather than skipped.
#[derive(Debug, Clone)]
pub struct AudioTags {
    tag: Tag,
}

impl AudioTags {
    pub fn read(path: &Path) -> Result<Self> {
        Ok(Self::from_tag(Tag::read_from_path(path)?))
    }

    pub fn from_tag(tag: Tag) -> Self {
        Self { tag }
    }

    pub fn get(&self, key: &str) -> Result<FieldValue> {
        let frame_ids = frame_ids(key)
            .ok_or_else(|| MetadataError::Malformed(format!("no ID3 frame for `{key}`")))?;
        let value = frame_ids
            .iter()
            .find_map(|id| text_frame(&self.tag, id))
            .unwrap_or_default();
        Ok(FieldValue::Text(value))
    }
}

/// Frames consulted for a key, in priority order.
fn frame_ids(key: &str) -> Option<&'static [&'static str]> {
    let ids: &'static [&'static str] = match key {
        "title" => &["TIT2"],
        "album" => &["TALB"],
        "artist" => &["TPE1"],
        "tracknumber" => &["TRCK"],
        "genre" => &["TCON"],
        // ID3v2.4 recording time, then the v2.3 year frame.
        "date" => &["TDRC", "TYER"],
        _ => return None,
    };
    Some(ids)
}

/// First value of a text frame; multi-valued frames are NUL separated.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => s.split('\0').next().map(str::to_owned),
        _ => None,
    }
}

/// Stream parameters of an MPEG audio file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MpegInfo {
    /// Samples per second.
    pub sample_rate: Option<u32>,
    /// Length in seconds.
    pub length_secs: Option<f64>,
    /// Average bit rate in bits per second over the audio payload, tags excluded.
    pub bitrate: Option<u64>,
}

impl MpegInfo {
    pub fn read(path: &Path) -> Result<Self> {
        let mut file = File::open(path)?;
        let file_len = file.metadata()?.len();
        let audio_len = file_len.saturating_sub(tag_overhead(&mut file, file_len)?);
        file.rewind()?;
        let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

        let mut hint = Hint::new();
        hint.with_extension("mp3");

        let probed = symphonia::default::get_probe().format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;

        let format = probed.format;
        let track = format
            .default_track()
            .ok_or_else(|| MetadataError::ReadFailed("no audio track".into()))?;
        let params = &track.codec_params;

        let length_secs = length_from_params(params.time_base, params.n_frames);
        Ok(Self {
            sample_rate: params.sample_rate,
            length_secs,
            bitrate: average_bitrate(audio_len, length_secs),
        })
    }

    pub fn sample_rate(&self) -> FieldValue {
        self.sample_rate.into()
    }

    pub fn length(&self) -> FieldValue {
        self.length_secs.into()
    }

    pub fn bitrate(&self) -> FieldValue {
        self.bitrate.into()
    }
}

fn length_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<f64> {
    let tb = time_base?;
    let frames = n_frames?;

    let t = tb.calc_time(frames);
    Some(t.seconds as f64 + t.frac)
}

/// Bytes taken by a leading ID3v2 tag and a trailing ID3v1 tag.
fn tag_overhead(file: &mut File, file_len: u64) -> Result<u64> {
    let mut header = [0u8; 10];
    let leading = if file_len >= 10 {
        file.read_exact(&mut header)?;
        id3v2_len(&header)
    } else {
        0
    };

    let mut trailing = 0;
    if file_len >= leading + 128 {
        let mut marker = [0u8; 3];
        file.seek(SeekFrom::End(-128))?;
        file.read_exact(&mut marker)?;
        if &marker == b"TAG" {
            trailing = 128;
        }
    }
    Ok(leading + trailing)
}

/// Total size of an ID3v2 tag from its 10-byte header, footer included.
fn id3v2_len(header: &[u8; 10]) -> u64 {
    if &header[..3] != b"ID3" || header[6..].iter().any(|b| b & 0x80 != 0) {
        return 0;
    }
    let size = header[6..]
        .iter()
        .fold(0u64, |acc, b| (acc << 7) | u64::from(*b));
    let footer = if header[5] & 0x10 != 0 { 10 } else { 0 };
    10 + size + footer
}

/// Average bit rate of the audio payload, tags excluded.
fn average_bitrate(audio_len: u64, length_secs: Option<f64>) -> Option<u64> {
    let secs = length_secs.filter(|s| *s > 0.0)?;
    Some((audio_len as f64 * 8.0 / secs).round() as u64)
}
