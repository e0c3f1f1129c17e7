// Copyright 2026 the Stylize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use attributed_string::{AttributedString, Error, Span, TextStorage};

use crate::attribute::Attribute;
use crate::brush::Brush;
use crate::runs::{CoalescedRuns, Runs};

/// An immutable string carrying formatting attributes.
///
/// `StyledString` is the value that [`Style`](crate::Style) transforms.
/// Equality is structural — two styled strings are equal when their text
/// and attribute spans (in application order) are equal — which makes the
/// determinism of styling directly observable.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledString<T, B: Brush> {
    pub(crate) attributed: AttributedString<T, Attribute<B>>,
}

impl<T: TextStorage, B: Brush> StyledString<T, B> {
    /// Creates an unstyled string.
    pub fn new(text: T) -> Self {
        Self {
            attributed: AttributedString::new(text),
        }
    }

    /// Borrows the underlying text storage.
    #[inline]
    pub fn text(&self) -> &T {
        self.attributed.text()
    }

    /// Returns the length of the underlying text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributed.len()
    }

    /// Returns `true` if the underlying text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributed.is_empty()
    }

    /// Borrows the underlying text as `&str` when the storage is contiguous.
    #[inline]
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.attributed.as_str()
    }

    /// Returns a new string with `attribute` applied over `span`.
    ///
    /// The span is resolved against this string at call time; see
    /// [`AttributedString::with_span`].
    pub fn with_attribute(&self, span: Span, attribute: Attribute<B>) -> Result<Self, Error>
    where
        T: Clone,
    {
        Ok(Self {
            attributed: self.attributed.with_span(span, attribute)?,
        })
    }

    /// Iterates over all attribute spans, in application order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Attribute<B>)> {
        self.attributed.spans()
    }

    /// Returns the number of attribute spans applied to the text.
    #[inline]
    pub fn attribute_count(&self) -> usize {
        self.attributed.span_count()
    }

    /// Returns an iterator over runs of effective attributes.
    ///
    /// Runs are non-overlapping, cover the whole text, and carry the
    /// [`Attributes`](crate::Attributes) in effect over each range, with
    /// later-applied attributes overriding earlier ones of the same kind.
    pub fn runs(&self) -> Runs<'_, T, B> {
        Runs::new(self)
    }

    /// Like [`runs`](Self::runs), but merges adjacent runs whose effective
    /// attributes are equal.
    pub fn runs_coalesced(&self) -> CoalescedRuns<'_, T, B> {
        CoalescedRuns::new(self)
    }
}
