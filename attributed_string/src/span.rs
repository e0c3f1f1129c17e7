// Copyright 2026 the Stylize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Range, RangeFull};

use crate::{Endpoint, Error, TextStorage};

/// A target range for an attribute, resolved against a text at application
/// time.
///
/// A `Span` is either an explicit half-open byte range or [`Span::Whole`],
/// a placeholder meaning "the entire string". `Whole` carries no offsets of
/// its own: it resolves to `0..len` of whatever text the span is eventually
/// applied to, so the same span value can be reused across texts of
/// different lengths.
///
/// `..` converts to `Whole` and `Range<usize>` converts to an explicit
/// span, which keeps call sites terse:
///
/// ```
/// use attributed_string::Span;
///
/// assert_eq!(Span::from(..), Span::Whole);
/// assert_eq!(Span::from(2..5), Span::bytes(2, 5));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Span {
    /// Cover the whole string, whatever its length turns out to be.
    #[default]
    Whole,
    /// An explicit half-open byte range.
    Bytes {
        /// The start byte offset.
        start: usize,
        /// The end byte offset (exclusive).
        end: usize,
    },
}

impl Span {
    /// Creates an explicit span over `start..end`.
    #[must_use]
    #[inline]
    pub const fn bytes(start: usize, end: usize) -> Self {
        Self::Bytes { start, end }
    }

    /// Resolves this span against `text`, validating explicit offsets.
    ///
    /// [`Span::Whole`] always succeeds and resolves to `0..text.len()`.
    /// Explicit spans are checked for ordering, bounds, and UTF-8 character
    /// boundary alignment.
    ///
    /// ```
    /// use attributed_string::Span;
    ///
    /// let text = "Hello";
    /// assert_eq!(Span::Whole.resolve_in(&text), Ok(0..5));
    /// assert_eq!(Span::bytes(1, 3).resolve_in(&text), Ok(1..3));
    /// assert!(Span::bytes(1, 9).resolve_in(&text).is_err());
    /// ```
    pub fn resolve_in<T: TextStorage>(self, text: &T) -> Result<Range<usize>, Error> {
        match self {
            Self::Whole => Ok(0..text.len()),
            Self::Bytes { start, end } => {
                validate(text, start, end)?;
                Ok(start..end)
            }
        }
    }
}

impl From<RangeFull> for Span {
    #[inline]
    fn from(_: RangeFull) -> Self {
        Self::Whole
    }
}

impl From<Range<usize>> for Span {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::Bytes {
            start: range.start,
            end: range.end,
        }
    }
}

fn validate<T: TextStorage>(text: &T, start: usize, end: usize) -> Result<(), Error> {
    if start > end {
        return Err(Error::InvertedRange { start, end });
    }
    let len = text.len();
    if end > len {
        return Err(Error::OutOfBounds { start, end, len });
    }
    if !text.is_char_boundary(start) {
        return Err(Error::not_on_char_boundary(text, Endpoint::Start, start));
    }
    if !text.is_char_boundary(end) {
        return Err(Error::not_on_char_boundary(text, Endpoint::End, end));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Span;
    use crate::{Endpoint, Error};

    #[test]
    fn whole_resolves_to_full_length() {
        assert_eq!(Span::Whole.resolve_in(&""), Ok(0..0));
        assert_eq!(Span::Whole.resolve_in(&"Hello"), Ok(0..5));
    }

    #[test]
    fn explicit_span_is_validated() {
        let text = "Hello!";
        assert_eq!(Span::bytes(0, 0).resolve_in(&text), Ok(0..0));
        assert_eq!(Span::bytes(0, 6).resolve_in(&text), Ok(0..6));
        assert_eq!(
            Span::bytes(4, 3).resolve_in(&text),
            Err(Error::InvertedRange { start: 4, end: 3 })
        );
        assert_eq!(
            Span::bytes(0, 7).resolve_in(&text),
            Err(Error::OutOfBounds {
                start: 0,
                end: 7,
                len: 6
            })
        );
        assert_eq!(
            Span::bytes(7, 8).resolve_in(&text),
            Err(Error::OutOfBounds {
                start: 7,
                end: 8,
                len: 6
            })
        );
    }

    #[test]
    fn rejects_interior_byte_offsets() {
        // "é" is 2 bytes; byte 1 is interior.
        let text = "éclair";
        assert_eq!(
            Span::bytes(1, 2).resolve_in(&text),
            Err(Error::NotOnCharBoundary {
                which: Endpoint::Start,
                index: 1,
                char_start: 0,
                char_end: 2,
            })
        );
        assert_eq!(
            Span::bytes(0, 1).resolve_in(&text),
            Err(Error::NotOnCharBoundary {
                which: Endpoint::End,
                index: 1,
                char_start: 0,
                char_end: 2,
            })
        );
        assert!(Span::bytes(0, 2).resolve_in(&text).is_ok());
    }

    #[test]
    fn conversions() {
        assert_eq!(Span::from(..), Span::Whole);
        assert_eq!(Span::from(3..7), Span::bytes(3, 7));
        assert_eq!(Span::default(), Span::Whole);
    }
}
