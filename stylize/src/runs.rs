// Copyright 2026 the Stylize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::ops::Range;

use attributed_string::{Segments, TextStorage};

use crate::attribute::{Attribute, AttributeKind};
use crate::brush::Brush;
use crate::styled_string::StyledString;
use crate::value::{ParagraphFormat, UnderlineStyle};

/// The attributes in effect over one run of text.
///
/// One field per attribute kind; `None` means no span of that kind covers
/// the run.
#[derive(Clone, Debug, PartialEq)]
pub struct Attributes<B: Brush> {
    /// Underline decoration, if any.
    pub underline: Option<UnderlineStyle>,
    /// Text color, if any.
    pub foreground_color: Option<B>,
    /// Background fill color, if any.
    pub background_color: Option<B>,
    /// Underline color, if any.
    pub underline_color: Option<B>,
    /// Hyperlink target, if any.
    pub link: Option<Arc<str>>,
    /// Paragraph formatting, if any.
    pub paragraph: Option<ParagraphFormat>,
    /// Extra spacing between characters, if any.
    pub kern: Option<f32>,
    /// Vertical offset from the baseline, if any.
    pub baseline_offset: Option<f32>,
}

// Derived `Default` would require `B: Default`.
impl<B: Brush> Default for Attributes<B> {
    fn default() -> Self {
        Self {
            underline: None,
            foreground_color: None,
            background_color: None,
            underline_color: None,
            link: None,
            paragraph: None,
            kern: None,
            baseline_offset: None,
        }
    }
}

impl<B: Brush> Attributes<B> {
    /// Returns `true` if no attribute is in effect.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    fn record(&mut self, attribute: &Attribute<B>) {
        match attribute {
            Attribute::Underline(style) => self.underline = Some(*style),
            Attribute::ForegroundColor(color) => self.foreground_color = Some(color.clone()),
            Attribute::BackgroundColor(color) => self.background_color = Some(color.clone()),
            Attribute::UnderlineColor(color) => self.underline_color = Some(color.clone()),
            Attribute::Link(url) => self.link = Some(url.clone()),
            Attribute::Paragraph(format) => self.paragraph = Some(*format),
            Attribute::Kern(amount) => self.kern = Some(*amount),
            Attribute::BaselineOffset(offset) => self.baseline_offset = Some(*offset),
        }
    }
}

/// A run of text with its effective attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRun<B: Brush> {
    /// The byte range in the underlying text.
    pub range: Range<usize>,
    /// The attributes in effect over that range.
    pub attributes: Attributes<B>,
}

/// An iterator over runs of effective attributes.
///
/// Produced by [`StyledString::runs`]. For each non-overlapping segment,
/// covering spans are scanned newest-first and the first payload seen for
/// each attribute kind wins, so a later application overrides an earlier
/// one of the same kind wherever they overlap.
#[derive(Clone, Debug)]
pub struct Runs<'a, T, B: Brush> {
    segments: Segments<'a, T, Attribute<B>>,
}

impl<'a, T: TextStorage, B: Brush> Runs<'a, T, B> {
    pub(crate) fn new(styled: &'a StyledString<T, B>) -> Self {
        Self {
            segments: styled.attributed.segments(),
        }
    }
}

impl<T: TextStorage, B: Brush> Iterator for Runs<'_, T, B> {
    type Item = StyleRun<B>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.segments.next()?;

        let mut attributes = Attributes::default();
        let mut filled = [false; AttributeKind::COUNT];
        let mut remaining = AttributeKind::COUNT;
        for (_, attribute) in self.segments.active_spans().iter().rev() {
            let index = attribute.kind().index();
            if filled[index] {
                continue;
            }
            filled[index] = true;
            remaining -= 1;
            attributes.record(attribute);
            if remaining == 0 {
                break;
            }
        }

        Some(StyleRun { range, attributes })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.segments.size_hint()
    }
}

impl<T: TextStorage, B: Brush> ExactSizeIterator for Runs<'_, T, B> {}

/// An iterator over coalesced runs of effective attributes.
///
/// Produced by [`StyledString::runs_coalesced`].
#[derive(Clone, Debug)]
pub struct CoalescedRuns<'a, T, B: Brush> {
    inner: Runs<'a, T, B>,
    pending: Option<StyleRun<B>>,
}

impl<'a, T: TextStorage, B: Brush> CoalescedRuns<'a, T, B> {
    pub(crate) fn new(styled: &'a StyledString<T, B>) -> Self {
        Self {
            inner: Runs::new(styled),
            pending: None,
        }
    }
}

impl<T: TextStorage, B: Brush> Iterator for CoalescedRuns<'_, T, B> {
    type Item = StyleRun<B>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = self.pending.take().or_else(|| self.inner.next())?;

        for next_run in self.inner.by_ref() {
            if next_run.range.start == run.range.end && next_run.attributes == run.attributes {
                run.range.end = next_run.range.end;
                continue;
            }
            self.pending = Some(next_run);
            break;
        }

        Some(run)
    }
}
