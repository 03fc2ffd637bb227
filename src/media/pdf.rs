// SPDX-License-Identifier: MPL-2.0
//! PDF page count, document info and first-page size.

use crate::domain::metadata::FieldValue;
use crate::error::{MetadataError, Result};
use lopdf::{Dictionary, Document, Object};
use std::path::Path;

/// Inherited attributes are looked up through at most this many `Parent` links.
const MAX_PAGE_TREE_DEPTH: usize = 32;

/// Facts read from a PDF document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfInfo {
    pub pages: usize,
    pub title: Option<String>,
    pub author: Option<String>,
    /// First page `MediaBox` as `[llx, lly, urx, ury]` in points.
    pub media_box: Option<[f64; 4]>,
}

impl PdfInfo {
    pub fn read(path: &Path) -> Result<Self> {
        let doc = Document::load(path)?;
        Ok(Self::from_document(&doc))
    }

    pub fn from_document(doc: &Document) -> Self {
        let pages = doc.get_pages();
        let info = doc
            .trailer
            .get(b"Info")
            .ok()
            .and_then(|obj| resolve(doc, obj))
            .and_then(|obj| obj.as_dict().ok());

        let media_box = pages
            .values()
            .next()
            .and_then(|id| doc.get_object(*id).ok())
            .and_then(|obj| obj.as_dict().ok())
            .and_then(|page| inherited_media_box(doc, page));

        Self {
            pages: pages.len(),
            title: info.and_then(|d| text_entry(doc, d, b"Title")),
            author: info.and_then(|d| text_entry(doc, d, b"Author")),
            media_box,
        }
    }

    pub fn page_count(&self) -> FieldValue {
        self.pages.into()
    }

    pub fn title(&self) -> FieldValue {
        self.title.clone().into()
    }

    pub fn author(&self) -> FieldValue {
        self.author.clone().into()
    }

    /// First page width in points.
    pub fn page_width(&self) -> Result<FieldValue> {
        self.extent(0)
    }

    /// First page height in points.
    pub fn page_height(&self) -> Result<FieldValue> {
        self.extent(1)
    }

    fn extent(&self, axis: usize) -> Result<FieldValue> {
        let [llx, lly, urx, ury] = self
            .media_box
            .ok_or_else(|| MetadataError::Malformed("first page has no MediaBox".into()))?;
        let (lower, upper) = if axis == 0 { (llx, urx) } else { (lly, ury) };
        Ok((upper - lower).abs().into())
    }
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn number(doc: &Document, obj: &Object) -> Option<f64> {
    match resolve(doc, obj)? {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        _ => None,
    }
}

fn inherited_media_box<'a>(doc: &'a Document, page: &'a Dictionary) -> Option<[f64; 4]> {
    let mut node = page;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Some(array) = node
            .get(b"MediaBox")
            .ok()
            .and_then(|obj| resolve(doc, obj))
            .and_then(|obj| obj.as_array().ok())
        {
            let coords: Vec<f64> = array.iter().filter_map(|o| number(doc, o)).collect();
            return match coords[..] {
                [a, b, c, d] => Some([a, b, c, d]),
                _ => None,
            };
        }
        node = node
            .get(b"Parent")
            .ok()
            .and_then(|obj| resolve(doc, obj))
            .and_then(|obj| obj.as_dict().ok())?;
    }
    None
}

fn text_entry(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<String> {
    match resolve(doc, dict.get(key).ok()?)? {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).to_string()),
        _ => None,
    }
}

/// Decodes a PDF text string: UTF-16BE with BOM, otherwise PDFDocEncoding
/// (treated as Latin-1, which matches it for printable characters).
fn decode_text_string(bytes: &[u8]) -> String {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).to_string(),
        _ => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
