// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the media-kind classification that drives which
//! metadata sources run for a file, independent of any backend.

pub mod types;

// Re-export commonly used types
pub use types::{guess_mime_type, MediaKind, CONTAINER_MIME_TYPES};
