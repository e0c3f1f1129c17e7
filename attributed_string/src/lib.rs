// Copyright 2026 the Stylize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An immutable attributed-string value model.
//!
//! An [`AttributedString`] pairs a block of text with an ordered list of
//! attribute spans. Values are never mutated: applying an attribute with
//! [`AttributedString::with_span`] produces a new value, so styling is a
//! pure transformation and previously-held references stay valid.
//!
//! Target ranges are described by [`Span`], which is either an explicit
//! byte range or the [`Span::Whole`] placeholder that resolves against the
//! input's length at application time. Explicit ranges are validated for
//! bounds and UTF-8 character-boundary alignment, reported via [`Error`].
//!
//! Overlapping spans are permitted; [`AttributedString::segments`] flattens
//! them into non-overlapping segments, exposing the covering spans of each
//! segment in application order so consumers can decide how overlaps
//! combine.
//!
//! All ranges are **byte** ranges into UTF-8 text.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided
//!   for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attributed_string;
mod error;
mod segments;
mod span;
mod text_storage;

pub use crate::attributed_string::AttributedString;
pub use crate::error::{Endpoint, Error};
pub use crate::segments::{ActiveSpans, ActiveSpansIter, Segments};
pub use crate::span::Span;
pub use crate::text_storage::TextStorage;
