// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and rendering constants.
//!
//! # Categories
//!
//! - **Markers**: Fixed strings written into columns when data is missing or broken
//! - **Rating**: Star glyphs and scale used by the rating column
//! - **External tools**: Command names for subprocess-backed metadata sources

// ==========================================================================
// Marker Defaults
// ==========================================================================

/// Value written to a column whose extraction or conversion failed.
pub const ERROR_MARKER: &str = "Error";

/// Label returned by a lookup table for a code it does not know.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Sharpness value reported when a JSON comment carries no `sharpness` key.
pub const SHARPNESS_NOT_SET: &str = "not set";

// ==========================================================================
// Rating Defaults
// ==========================================================================

/// Number of glyphs in a rendered rating.
pub const MAX_STARS: usize = 5;

/// Glyph for a filled rating position.
pub const FILLED_STAR: char = '★';

/// Glyph for an empty rating position.
pub const EMPTY_STAR: char = '☆';

// ==========================================================================
// External Tool Defaults
// ==========================================================================

/// Default command used to inspect video and container files.
pub const DEFAULT_MEDIAINFO_COMMAND: &str = "mediainfo";

/// Prefix of the column identifiers registered with the host.
pub const COLUMN_ID_PREFIX: &str = "MediaColumns";
