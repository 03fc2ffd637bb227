// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Metadata(MetadataError),
}

/// Failures raised while reading or converting a single metadata field.
///
/// These never reach the host: the field mapper turns them into the
/// localized error marker for the affected column only.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataError {
    /// The metadata backend could not parse the file.
    ReadFailed(String),

    /// The external `mediainfo` tool is not installed or not executable.
    ToolNotFound(String),

    /// The external tool ran but reported a failure.
    ToolFailed(String),

    /// A field exists but holds data of an unexpected shape.
    Malformed(String),

    /// A value could not be converted to the form a column expects.
    Conversion(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::ReadFailed(msg) => write!(f, "Failed to read metadata: {msg}"),
            MetadataError::ToolNotFound(tool) => write!(f, "{tool} not found"),
            MetadataError::ToolFailed(msg) => write!(f, "External tool failed: {msg}"),
            MetadataError::Malformed(msg) => write!(f, "Malformed metadata: {msg}"),
            MetadataError::Conversion(msg) => write!(f, "Conversion failed: {msg}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Metadata(e) => write!(f, "Metadata Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MetadataError> for Error {
    fn from(err: MetadataError) -> Self {
        Error::Metadata(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        MetadataError::Malformed(err.to_string()).into()
    }
}

impl From<exif::Error> for Error {
    fn from(err: exif::Error) -> Self {
        MetadataError::ReadFailed(format!("EXIF: {err}")).into()
    }
}

impl From<id3::Error> for Error {
    fn from(err: id3::Error) -> Self {
        MetadataError::ReadFailed(format!("ID3: {err}")).into()
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        MetadataError::ReadFailed(format!("PDF: {err}")).into()
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        MetadataError::ReadFailed(format!("image: {err}")).into()
    }
}

impl From<symphonia::core::errors::Error> for Error {
    fn from(err: symphonia::core::errors::Error) -> Self {
        MetadataError::ReadFailed(format!("audio stream: {err}")).into()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
