// SPDX-License-Identifier: MPL-2.0
//! Column definitions exposed to the file browser.
//!
//! The registry is the single list of attributes this extension may write.
//! Its order is the order the host offers the columns in; writing a name that
//! is not listed here is a programming error reported by the field mapper.

mod bag;

pub use bag::AttributeBag;

/// A displayable attribute: stable key plus UI-facing texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Attribute name the host binds values to.
    pub name: &'static str,
    /// Column header.
    pub label: &'static str,
    /// Tooltip / column chooser description.
    pub description: &'static str,
}

const fn column(
    name: &'static str,
    label: &'static str,
    description: &'static str,
) -> ColumnDefinition {
    ColumnDefinition {
        name,
        label,
        description,
    }
}

/// Every column, in display order.
pub static COLUMN_DEFINITIONS: &[ColumnDefinition] = &[
    // Media
    column("title", "Title", "Song title"),
    column("album", "Album", "Album"),
    column("artist", "Artist", "Artist"),
    column("tracknumber", "Track", "Track number"),
    column("genre", "Genre", "Genre"),
    column("date", "Date", "Date"),
    column("bitrate", "Bitrate", "Audio Bitrate in kilo bits per second"),
    column("samplerate", "Sample rate", "Sample rate in Hz"),
    column("length", "Length", "Length of audio"),
    // Images
    column("exposure_time", "Exposure time", "Exposure time in seconds"),
    column("fnumber", "F number", "Exposure F number"),
    column("focal_length", "Focal length", "The actual focal length of the lens, in mm."),
    column("gps_altitude", "Altitude", "GPS Altitude"),
    column("gps_latitude", "Latitude", "GPS Latitude"),
    column("gps_longitude", "Longitude", "GPS Longitude"),
    column("iso_speed", "ISO", "ISO Speed"),
    column("orientation", "Orientation", "Orientation"),
    column("model", "Model", "Model"),
    column("resolution_unit", "Resolution unit", "The unit for measuring"),
    column("xresolution", "X resolution", "The resolution in the x axis"),
    column("yresolution", "Y resolution", "The resolution in the y axis"),
    column("datetime_original", "Capture date", "Photo capture date"),
    column("shutter_speed_value", "Shutter speed", "Shutter speed"),
    column("aperture_value", "Aperture", "The lens aperture"),
    column("brightness_value", "Brightness", "Brightness"),
    column("exposure_bias_value", "Exposure", "The exposure bias"),
    column("max_aperture_value", "Max aperture", "The smallest F number of the lens"),
    column("metering_mode", "Metering mode", "The metering mode"),
    column("light_source", "Light source", "The kind of light source"),
    column("flash", "Flash", "Indicates the status of flash when the image was shot"),
    column("exposure_mode", "Exposure mode", "The exposure mode set when the image was shot"),
    column("gain_control", "Gain control", "The degree of overall image gain adjustment"),
    column("width", "Width", "Image/video/pdf width (pixel/mm)"),
    column("height", "Height", "Image/video/pdf height (pixel/mm)"),
    column("pages", "Pages", "Number of pages"),
    column("usercomment", "UserComment", "Comment of the user"),
    column("duration", "Duration", "Duration of the media file"),
    column("format", "Format", "Format of the media file"),
    column("overall_bitrate", "Overall bitrate", "Overall bitrate of the media file"),
    column("frame_count", "Frame count", "Number of frames in video file"),
    column("video_format", "Video format", "Format of the video"),
    column("bit_depth", "Bit depth", "Bit depth of the media file"),
    column("audio_format", "Audio format", "Format of the audio"),
    column("sharpness", "Sharpness", "Sharpness of subject in image file"),
    column("rating", "Rating", "Star rating of the file"),
];

/// Returns the definition registered under `name`.
pub fn find_column(name: &str) -> Option<&'static ColumnDefinition> {
    COLUMN_DEFINITIONS.iter().find(|c| c.name == name)
}

/// Returns `true` when `name` is a registered column.
pub fn is_known_column(name: &str) -> bool {
    find_column(name).is_some()
}
