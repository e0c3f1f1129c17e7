// Copyright 2026 the Stylize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::segments::Segments;
use crate::{Error, Span, TextStorage};

/// An immutable block of text with attributes applied to byte ranges.
///
/// An `AttributedString` is a value: applying an attribute never mutates the
/// receiver. [`with_span`](Self::with_span) returns a *new* string carrying
/// one additional attribute span, leaving the original untouched, so
/// independently-held references can be styled without coordination.
///
/// Spans are kept in application order and may overlap freely; how overlaps
/// combine is left to the consumer (see [`segments`](Self::segments), which
/// exposes active spans per non-overlapping segment in both application and
/// reverse-application order).
///
/// ```
/// use attributed_string::{AttributedString, Span};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Mark {
///     Bold,
///     Quiet,
/// }
///
/// let plain = AttributedString::new("Hello!");
/// let loud = plain.with_span(Span::bytes(0, 5), Mark::Bold)?;
/// let styled = loud.with_span(Span::Whole, Mark::Quiet)?;
///
/// // The inputs are unchanged.
/// assert_eq!(plain.span_count(), 0);
/// assert_eq!(loud.span_count(), 1);
/// assert_eq!(styled.span_count(), 2);
/// # Ok::<(), attributed_string::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedString<T, Attr> {
    text: T,
    spans: Vec<(Range<usize>, Attr)>,
}

impl<T: TextStorage, Attr> AttributedString<T, Attr> {
    /// Creates an `AttributedString` with no attributes applied.
    pub fn new(text: T) -> Self {
        Self {
            text,
            spans: Vec::new(),
        }
    }

    /// Borrows the underlying text storage.
    #[inline]
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrows the underlying text as `&str` when the storage is contiguous.
    #[inline]
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Returns a new string with `attr` applied over `span`.
    ///
    /// The span is resolved against this string's text at call time:
    /// [`Span::Whole`] becomes `0..len`, and explicit offsets are validated
    /// for ordering, bounds, and UTF-8 boundary alignment. The receiver is
    /// not modified.
    pub fn with_span(&self, span: Span, attr: Attr) -> Result<Self, Error>
    where
        T: Clone,
        Attr: Clone,
    {
        let range = span.resolve_in(&self.text)?;
        let mut spans = Vec::with_capacity(self.spans.len() + 1);
        spans.extend(self.spans.iter().cloned());
        spans.push((range, attr));
        Ok(Self {
            text: self.text.clone(),
            spans,
        })
    }

    /// Iterates over all attribute spans, in application order.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Attr)> {
        self.spans.iter().map(|(range, attr)| (range, attr))
    }

    /// Returns the attribute span at `index` in application order.
    #[inline]
    pub fn span_at(&self, index: usize) -> Option<(&Range<usize>, &Attr)> {
        self.spans.get(index).map(|(range, attr)| (range, attr))
    }

    /// Returns the number of attribute spans applied to the text.
    #[inline]
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Iterates over the attributes whose spans contain the byte at `index`.
    ///
    /// Attributes are yielded in application order; overlaps are not
    /// resolved here.
    pub fn attrs_at(&self, index: usize) -> impl Iterator<Item = &Attr> {
        self.spans.iter().filter_map(move |(range, attr)| {
            if range.contains(&index) {
                Some(attr)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over non-overlapping segments of this string.
    ///
    /// See [`Segments`] for the segmentation rules.
    pub fn segments(&self) -> Segments<'_, T, Attr> {
        Segments::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::AttributedString;
    use crate::{Endpoint, Error, Span};
    use alloc::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    enum Mark {
        First,
        Second,
    }

    #[test]
    fn with_span_leaves_input_untouched() {
        let plain = AttributedString::new("Hello!");
        let styled = plain.with_span(Span::bytes(1, 3), Mark::First).unwrap();

        assert_eq!(plain.span_count(), 0);
        assert_eq!(styled.span_count(), 1);
        assert_eq!(styled.span_at(0), Some((&(1..3), &Mark::First)));
        assert_eq!(styled.as_str(), "Hello!");
    }

    #[test]
    fn whole_span_resolves_against_receiver_length() {
        let short = AttributedString::new("abc");
        let long = AttributedString::new("abcdef");

        let styled_short = short.with_span(Span::Whole, Mark::First).unwrap();
        let styled_long = long.with_span(Span::Whole, Mark::First).unwrap();

        assert_eq!(styled_short.span_at(0), Some((&(0..3), &Mark::First)));
        assert_eq!(styled_long.span_at(0), Some((&(0..6), &Mark::First)));
    }

    #[test]
    fn spans_keep_application_order() {
        let styled = AttributedString::new("abcdef")
            .with_span(Span::bytes(0, 4), Mark::First)
            .unwrap()
            .with_span(Span::bytes(2, 6), Mark::Second)
            .unwrap();

        let collected: Vec<_> = styled.spans().collect();
        assert_eq!(
            collected,
            [(&(0..4), &Mark::First), (&(2..6), &Mark::Second)]
        );
    }

    #[test]
    fn invalid_spans_are_rejected() {
        let plain = AttributedString::new("Hello!");
        assert_eq!(
            plain.with_span(Span::bytes(4, 3), Mark::First).unwrap_err(),
            Error::InvertedRange { start: 4, end: 3 }
        );
        assert_eq!(
            plain.with_span(Span::bytes(2, 9), Mark::First).unwrap_err(),
            Error::OutOfBounds {
                start: 2,
                end: 9,
                len: 6
            }
        );

        let accented = AttributedString::new("éclair");
        assert_eq!(
            accented
                .with_span(Span::bytes(1, 4), Mark::First)
                .unwrap_err(),
            Error::NotOnCharBoundary {
                which: Endpoint::Start,
                index: 1,
                char_start: 0,
                char_end: 2,
            }
        );
    }

    #[test]
    fn attrs_at_reports_covering_spans() {
        let styled = AttributedString::new("Hello!")
            .with_span(Span::bytes(1, 3), Mark::First)
            .unwrap()
            .with_span(Span::bytes(2, 5), Mark::Second)
            .unwrap();

        assert!(styled.attrs_at(0).next().is_none());
        let at_two: Vec<_> = styled.attrs_at(2).collect();
        assert_eq!(at_two, [&Mark::First, &Mark::Second]);
        let at_four: Vec<_> = styled.attrs_at(4).collect();
        assert_eq!(at_four, [&Mark::Second]);
    }

    #[test]
    fn structural_equality() {
        let a = AttributedString::new("abc")
            .with_span(Span::Whole, Mark::First)
            .unwrap();
        let b = AttributedString::new("abc")
            .with_span(Span::bytes(0, 3), Mark::First)
            .unwrap();
        // Whole resolves to the same concrete range at application time.
        assert_eq!(a, b);
    }
}
