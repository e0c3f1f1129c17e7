// Copyright 2026 the Stylize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composable styling functions for attributed strings.
//!
//! Each constructor ([`underline`], [`foreground_color`],
//! [`background_color`], [`underline_color`], [`link`], [`paragraph`],
//! [`kern`], [`baseline_offset`]) builds a [`Style`]: a pure, reusable
//! transformation that applies one attribute over a [`Span`] of a
//! [`StyledString`]. [`combine`] chains styles left to right into a single
//! transformation.
//!
//! Styling never mutates: applying a style returns a new value, so a style
//! can be built once and applied to many strings, and the same input can
//! be styled concurrently from independent references.
//!
//! ## Spans
//!
//! A constructor's span argument is anything convertible to [`Span`]:
//! an explicit byte range, or `..` for "the whole string", resolved
//! against the length of the input when the style is *applied*, not when
//! it is built. Ranges must lie on UTF-8 character boundaries;
//! [`Style::apply`] treats a bad range as a caller error and panics,
//! while [`Style::try_apply`] reports it as an [`Error`].
//!
//! ## Overlaps
//!
//! Overlapping spans of the same attribute kind resolve last-writer-wins:
//! [`StyledString::runs`] yields non-overlapping runs whose effective
//! attributes reflect the most recently applied span of each kind.
//!
//! ## Example
//!
//! ```
//! use peniko::color::palette::css;
//! use stylize::{StyledString, UnderlineStyle, combine, foreground_color, underline};
//!
//! let style = combine([
//!     foreground_color(css::RED, 0..5),
//!     underline(UnderlineStyle::Single, ..),
//! ]);
//! let styled = style.apply(&StyledString::new("Hello World"));
//!
//! let runs: Vec<_> = styled.runs().collect();
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].range, 0..5);
//! assert_eq!(runs[0].attributes.foreground_color, Some(css::RED));
//! assert_eq!(runs[0].attributes.underline, Some(UnderlineStyle::Single));
//! assert_eq!(runs[1].range, 5..11);
//! assert_eq!(runs[1].attributes.foreground_color, None);
//! assert_eq!(runs[1].attributes.underline, Some(UnderlineStyle::Single));
//! ```
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

mod attribute;
mod brush;
mod runs;
mod style;
mod styled_string;
mod value;


pub use attributed_string::{Endpoint, Error, Span, TextStorage};

pub use crate::attribute::{Attribute, AttributeKind};
pub use crate::brush::Brush;
pub use crate::runs::{Attributes, CoalescedRuns, Runs, StyleRun};
pub use crate::style::{
    Style, background_color, baseline_offset, combine, foreground_color, kern, link, paragraph,
    underline, underline_color,
};
pub use crate::styled_string::StyledString;
pub use crate::value::{Alignment, ParagraphFormat, UnderlineStyle};
