// SPDX-License-Identifier: MPL-2.0
//! Pixel dimensions of raster images.

use crate::domain::metadata::FieldValue;
use crate::error::Result;
use std::path::Path;

/// Decoded size of an image, independent of any size recorded in EXIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    /// Reads the dimensions from the image header without decoding pixels.
    pub fn read(path: &Path) -> Result<Self> {
        let (width, height) = image_rs::image_dimensions(path)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> FieldValue {
        self.width.into()
    }

    pub fn height(&self) -> FieldValue {
        self.height.into()
    }
}
