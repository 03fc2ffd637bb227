// SPDX-License-Identifier: MPL-2.0
//! `media_columns` exposes media metadata as extra file browser columns.
//!
//! Audio tags, EXIF fields, container stream info and PDF document properties
//! are read per file and turned into plain text attributes, one per column.
//! A file that cannot be read, or a single field that fails to convert, never
//! blanks the other columns.

#![doc(html_root_url = "https://docs.rs/media_columns/0.3.0")]

pub mod columns;
pub mod config;
pub mod domain;
pub mod error;
pub mod extension;
pub mod format;
pub mod i18n;
pub mod mapper;
pub mod media;

pub use extension::{Column, ColumnExtension, FileInfo, LocalFile};
