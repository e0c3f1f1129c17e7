// Copyright 2026 the Stylize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The visual style of an underline decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnderlineStyle {
    /// A single line.
    #[default]
    Single,
    /// A single thick line.
    Thick,
    /// A double line.
    Double,
}

/// Horizontal alignment of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Aligned to the leading edge.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Aligned to the trailing edge.
    End,
    /// Stretched to fill the line width.
    Justified,
}

/// Paragraph-level formatting carried by the paragraph attribute.
///
/// This is a plain descriptor; interpreting the values (units, direction
/// of indentation, and so on) is up to whatever consumes the styled
/// string.
///
/// ```
/// use stylize::{Alignment, ParagraphFormat};
///
/// let format = ParagraphFormat::new()
///     .with_alignment(Alignment::Center)
///     .with_line_spacing(4.0);
/// assert_eq!(format.alignment, Alignment::Center);
/// assert_eq!(format.first_line_indent, 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParagraphFormat {
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Extra space between lines.
    pub line_spacing: f32,
    /// Extra space after the paragraph.
    pub paragraph_spacing: f32,
    /// Indentation of the first line.
    pub first_line_indent: f32,
}

impl ParagraphFormat {
    /// Creates a format with default values throughout.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alignment.
    #[inline]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the line spacing.
    #[inline]
    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// Sets the paragraph spacing.
    #[inline]
    pub fn with_paragraph_spacing(mut self, paragraph_spacing: f32) -> Self {
        self.paragraph_spacing = paragraph_spacing;
        self
    }

    /// Sets the first line indent.
    #[inline]
    pub fn with_first_line_indent(mut self, first_line_indent: f32) -> Self {
        self.first_line_indent = first_line_indent;
        self
    }
}
