// SPDX-License-Identifier: MPL-2.0
//! Container metadata through the external `mediainfo` tool.
//!
//! `mediainfo --Output=JSON -f <file>` reports one object per track
//! (`General`, `Video`, `Audio`, ...). The tracks are flattened into a single
//! key space where the first track to report a key wins, except for `Format`:
//! video and audio formats are kept apart as `VideoFormat` and `AudioFormat`.

use crate::domain::metadata::FieldValue;
use crate::error::{MetadataError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Deserialize)]
struct Report {
    media: Option<Media>,
}

#[derive(Debug, Deserialize)]
struct Media {
    #[serde(default)]
    track: Vec<Map<String, Value>>,
}

/// Merged `mediainfo` report for one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaInfo {
    merged: Map<String, Value>,
}

impl MediaInfo {
    /// Runs `command` on `path` and merges its report.
    pub fn read(path: &Path, command: &str) -> Result<Self> {
        if !path.is_file() {
            return Err(MetadataError::ReadFailed(format!("{} is not a file", path.display())).into());
        }

        let output = Command::new(command)
            .arg("--Output=JSON")
            .arg("-f")
            .arg(path)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    MetadataError::ToolNotFound(command.to_string())
                }
                _ => MetadataError::ToolFailed(e.to_string()),
            })?;

        if !output.status.success() {
            return Err(MetadataError::ToolFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            )
            .into());
        }

        Self::from_json(&String::from_utf8_lossy(&output.stdout))
    }

    /// Parses and merges a `mediainfo` JSON report.
    pub fn from_json(json: &str) -> Result<Self> {
        let report: Report = serde_json::from_str(json)?;
        let media = report
            .media
            .ok_or_else(|| MetadataError::ReadFailed("report has no media section".into()))?;

        let mut merged = Map::new();
        for track in media.track {
            let kind = track.get("@type").and_then(Value::as_str);
            let format_key = match kind {
                Some("Video") => Some("VideoFormat"),
                Some("Audio") => Some("AudioFormat"),
                _ => None,
            };
            if let Some(key) = format_key {
                let format = track
                    .get("Format")
                    .cloned()
                    .unwrap_or_else(|| Value::String("Unknown".into()));
                merged.insert(key.to_string(), format);
            }
            for (key, value) in track {
                merged.entry(key).or_insert(value);
            }
        }

        Ok(Self { merged })
    }

    /// Value of `key`; absent keys read as empty text.
    pub fn get(&self, key: &str) -> FieldValue {
        match self.merged.get(key) {
            None | Some(Value::Null) => FieldValue::Text(String::new()),
            Some(Value::String(s)) => FieldValue::Text(s.clone()),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(FieldValue::Integer)
                .or_else(|| n.as_f64().map(FieldValue::Real))
                .unwrap_or_else(|| FieldValue::Text(n.to_string())),
            Some(other) => FieldValue::Text(other.to_string()),
        }
    }

    /// Keys present in the merged report.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.merged.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MP4_REPORT: &str = r#"{
        "creatingLibrary": {"name": "MediaInfoLib", "version": "21.09"},
        "media": {
            "@ref": "gs-16b-2c-44100hz.mp4",
            "track": [
                {"@type": "General", "Format": "MPEG-4", "Duration": "15.046",
                 "OverallBitRate": "130860", "FrameCount": "683"},
                {"@type": "Audio", "Format": "AAC", "Duration": "15.000",
                 "BitDepth": "16", "FrameCount": "646"}
            ]
        }
    }"#;

    #[test]
    fn general_track_wins_for_shared_keys() {
        let info = MediaInfo::from_json(MP4_REPORT).unwrap();
        assert_eq!(info.get("Format"), FieldValue::from("MPEG-4"));
        assert_eq!(info.get("Duration"), FieldValue::from("15.046"));
        assert_eq!(info.get("FrameCount"), FieldValue::from("683"));
    }

    #[test]
    fn audio_format_is_kept_separately() {
        let info = MediaInfo::from_json(MP4_REPORT).unwrap();
        assert_eq!(info.get("AudioFormat"), FieldValue::from("AAC"));
        assert_eq!(info.get("VideoFormat"), FieldValue::from(""));
    }

    #[test]
    fn later_tracks_fill_missing_keys() {
        let info = MediaInfo::from_json(MP4_REPORT).unwrap();
        assert_eq!(info.get("BitDepth"), FieldValue::from("16"));
    }

    #[test]
    fn track_without_format_is_unknown() {
        let json = r#"{"media": {"track": [
            {"@type": "General", "Format": "Matroska"},
            {"@type": "Video", "Width": "1920"}
        ]}}"#;
        let info = MediaInfo::from_json(json).unwrap();
        assert_eq!(info.get("VideoFormat"), FieldValue::from("Unknown"));
        assert_eq!(info.get("Width"), FieldValue::from("1920"));
        assert_eq!(info.get("Format"), FieldValue::from("Matroska"));
    }

    #[test]
    fn last_video_track_sets_video_format() {
        let json = r#"{"media": {"track": [
            {"@type": "Video", "Format": "AVC"},
            {"@type": "Video", "Format": "HEVC"}
        ]}}"#;
        let info = MediaInfo::from_json(json).unwrap();
        assert_eq!(info.get("VideoFormat"), FieldValue::from("HEVC"));
        assert_eq!(info.get("Format"), FieldValue::from("AVC"));
    }

    #[test]
    fn numbers_keep_their_type() {
        let json = r#"{"media": {"track": [{"@type": "General", "Count": 3, "Ratio": 1.5}]}}"#;
        let info = MediaInfo::from_json(json).unwrap();
        assert_eq!(info.get("Count"), FieldValue::Integer(3));
        assert_eq!(info.get("Ratio"), FieldValue::Real(1.5));
        assert!(info.keys().any(|k| k == "@type"));
    }

    #[test]
    fn missing_media_section_is_an_error() {
        assert!(MediaInfo::from_json(r#"{"media": null}"#).is_err());
        assert!(MediaInfo::from_json("not json").is_err());
    }

    #[test]
    fn missing_tool_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"\0\0\0\x18ftypmp42").expect("write");

        let err = MediaInfo::read(&path, "mediainfo-does-not-exist").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Metadata Error: mediainfo-does-not-exist not found"
        );
    }

    #[test]
    fn non_file_path_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(MediaInfo::read(dir.path(), "mediainfo").is_err());
    }
}
