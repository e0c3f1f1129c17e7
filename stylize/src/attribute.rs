// Copyright 2026 the Stylize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use crate::brush::Brush;
use crate::value::{ParagraphFormat, UnderlineStyle};

/// A single formatting attribute.
///
/// The set is closed: each variant pairs an attribute name with the payload
/// type that name expects, so a mistyped payload is unrepresentable.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute<B: Brush> {
    /// Underline decoration with the given style.
    Underline(UnderlineStyle),
    /// Text color.
    ForegroundColor(B),
    /// Background fill color.
    BackgroundColor(B),
    /// Color of the underline decoration.
    UnderlineColor(B),
    /// A hyperlink target.
    Link(Arc<str>),
    /// Paragraph-level formatting.
    Paragraph(ParagraphFormat),
    /// Extra spacing between characters.
    Kern(f32),
    /// Vertical offset from the baseline.
    BaselineOffset(f32),
}

impl<B: Brush> Attribute<B> {
    /// Returns the kind of this attribute, independent of its payload.
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Underline(_) => AttributeKind::Underline,
            Self::ForegroundColor(_) => AttributeKind::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKind::BackgroundColor,
            Self::UnderlineColor(_) => AttributeKind::UnderlineColor,
            Self::Link(_) => AttributeKind::Link,
            Self::Paragraph(_) => AttributeKind::Paragraph,
            Self::Kern(_) => AttributeKind::Kern,
            Self::BaselineOffset(_) => AttributeKind::BaselineOffset,
        }
    }
}

/// Identifies an attribute without its payload.
///
/// Two attributes of the same kind compete under last-writer-wins
/// resolution; attributes of different kinds are independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Underline decoration.
    Underline,
    /// Text color.
    ForegroundColor,
    /// Background fill color.
    BackgroundColor,
    /// Color of the underline decoration.
    UnderlineColor,
    /// A hyperlink target.
    Link,
    /// Paragraph-level formatting.
    Paragraph,
    /// Extra spacing between characters.
    Kern,
    /// Vertical offset from the baseline.
    BaselineOffset,
}

impl AttributeKind {
    pub(crate) const COUNT: usize = 8;

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Underline => 0,
            Self::ForegroundColor => 1,
            Self::BackgroundColor => 2,
            Self::UnderlineColor => 3,
            Self::Link => 4,
            Self::Paragraph => 5,
            Self::Kern => 6,
            Self::BaselineOffset => 7,
        }
    }
}
