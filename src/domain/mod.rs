// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains the pure types shared by every metadata source and
//! formatter. It has no dependencies on external crates (except `std`) so
//! the formatting rules can be tested without touching a real file.
//!
//! # Modules
//!
//! - [`media`]: Media kinds ([`MediaKind`](media::MediaKind)) and MIME helpers
//! - [`metadata`]: Raw field values ([`FieldValue`](metadata::FieldValue))

pub mod media;
pub mod metadata;
