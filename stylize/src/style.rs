// Copyright 2026 the Stylize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use attributed_string::{Error, Span, TextStorage};

use crate::attribute::Attribute;
use crate::brush::Brush;
use crate::styled_string::StyledString;
use crate::value::{ParagraphFormat, UnderlineStyle};

#[derive(Clone, Debug, PartialEq)]
struct Step<B: Brush> {
    attribute: Attribute<B>,
    span: Span,
}

/// A reusable styled-string transformation.
///
/// A `Style` is an ordered list of attribute applications. Applying it
/// walks the list left to right, resolving each step's [`Span`] against
/// the input *at application time*, so a style built with [`Span::Whole`]
/// covers the full length of whatever string it is later applied to.
///
/// Styles compose by concatenation: [`then`](Self::then) chains two,
/// [`combine`] chains any number, and the empty style
/// ([`identity`](Self::identity)) is the neutral element of both.
/// Composition is associative, and applying a combined style is exactly
/// applying its parts in sequence.
///
/// ```
/// use stylize::{Style, StyledString, UnderlineStyle, underline};
///
/// let style: Style<u32> = underline(UnderlineStyle::Double, 0..4);
/// let styled = style.apply(&StyledString::new("chained"));
/// assert_eq!(styled.attribute_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Style<B: Brush> {
    steps: Vec<Step<B>>,
}

impl<B: Brush> Style<B> {
    /// The style that applies no attributes.
    ///
    /// Applying it returns a structurally equal copy of the input.
    pub fn identity() -> Self {
        Self { steps: Vec::new() }
    }

    /// Creates a style that applies `attribute` over `span`.
    ///
    /// This is the primitive the per-attribute constructors
    /// ([`underline`], [`foreground_color`], …) specialize.
    pub fn from_attribute(attribute: Attribute<B>, span: impl Into<Span>) -> Self {
        Self {
            steps: alloc::vec![Step {
                attribute,
                span: span.into(),
            }],
        }
    }

    /// Appends one more attribute application to this style.
    pub fn push(mut self, attribute: Attribute<B>, span: impl Into<Span>) -> Self {
        self.steps.push(Step {
            attribute,
            span: span.into(),
        });
        self
    }

    /// Chains `next` after this style.
    ///
    /// Applying the result is equivalent to applying `self`, then applying
    /// `next` to the output.
    pub fn then(mut self, next: Self) -> Self {
        self.steps.extend(next.steps);
        self
    }

    /// Returns `true` if this style applies no attributes.
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the number of attribute applications in this style.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Applies this style to `input`, returning a new styled string.
    ///
    /// The input is never modified. Each step's span is resolved against
    /// the string it is applied to; any range error is returned and the
    /// input is left to the caller untouched.
    pub fn try_apply<T>(&self, input: &StyledString<T, B>) -> Result<StyledString<T, B>, Error>
    where
        T: TextStorage + Clone,
    {
        let mut output = input.clone();
        for step in &self.steps {
            output = output.with_attribute(step.span, step.attribute.clone())?;
        }
        Ok(output)
    }

    /// Applies this style to `input`, returning a new styled string.
    ///
    /// Like [`try_apply`](Self::try_apply), but treats an invalid span as a
    /// caller error rather than a recoverable condition.
    ///
    /// # Panics
    ///
    /// Panics if any step's span is out of bounds, inverted, or not
    /// aligned to a UTF-8 character boundary for `input`.
    pub fn apply<T>(&self, input: &StyledString<T, B>) -> StyledString<T, B>
    where
        T: TextStorage + Clone,
    {
        match self.try_apply(input) {
            Ok(styled) => styled,
            Err(err) => panic!("cannot apply style: {err}"),
        }
    }
}

impl<B: Brush> Default for Style<B> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Collects styles by [`combine`]-ing them; an empty iterator yields the
/// identity style.
impl<B: Brush> FromIterator<Style<B>> for Style<B> {
    fn from_iter<I: IntoIterator<Item = Style<B>>>(iter: I) -> Self {
        combine(iter)
    }
}

impl<B: Brush> Extend<Style<B>> for Style<B> {
    fn extend<I: IntoIterator<Item = Style<B>>>(&mut self, iter: I) {
        for style in iter {
            self.steps.extend(style.steps);
        }
    }
}

/// Chains any number of styles into one, left to right.
///
/// Applying the result is equivalent to applying each input style in
/// order, the output of one feeding the next. A single style passes
/// through unchanged; an empty sequence yields the identity style, so
/// `combine` is total and associative.
///
/// ```
/// use stylize::{Span, StyledString, UnderlineStyle, combine, kern, underline};
///
/// let style = combine::<u32, _>([
///     underline(UnderlineStyle::Single, Span::Whole),
///     kern(1.5, 0..3),
/// ]);
/// let styled = style.apply(&StyledString::new("spaced out"));
/// assert_eq!(styled.attribute_count(), 2);
/// ```
pub fn combine<B: Brush, I: IntoIterator<Item = Style<B>>>(styles: I) -> Style<B> {
    let mut combined = Style::identity();
    combined.extend(styles);
    combined
}

/// Creates a style that underlines with the given style.
pub fn underline<B: Brush, S: Into<Span>>(style: UnderlineStyle, span: S) -> Style<B> {
    Style::from_attribute(Attribute::Underline(style), span)
}

/// Creates a style that sets the text color.
pub fn foreground_color<B: Brush, S: Into<Span>>(color: B, span: S) -> Style<B> {
    Style::from_attribute(Attribute::ForegroundColor(color), span)
}

/// Creates a style that sets the background fill color.
pub fn background_color<B: Brush, S: Into<Span>>(color: B, span: S) -> Style<B> {
    Style::from_attribute(Attribute::BackgroundColor(color), span)
}

/// Creates a style that sets the underline color.
pub fn underline_color<B: Brush, S: Into<Span>>(color: B, span: S) -> Style<B> {
    Style::from_attribute(Attribute::UnderlineColor(color), span)
}

/// Creates a style that links to `url`.
pub fn link<B: Brush, U: Into<Arc<str>>, S: Into<Span>>(url: U, span: S) -> Style<B> {
    Style::from_attribute(Attribute::Link(url.into()), span)
}

/// Creates a style that applies paragraph formatting.
pub fn paragraph<B: Brush, S: Into<Span>>(format: ParagraphFormat, span: S) -> Style<B> {
    Style::from_attribute(Attribute::Paragraph(format), span)
}

/// Creates a style that kerns each character by `amount`.
pub fn kern<B: Brush, S: Into<Span>>(amount: f32, span: S) -> Style<B> {
    Style::from_attribute(Attribute::Kern(amount), span)
}

/// Creates a style that offsets text from the baseline by `amount`.
pub fn baseline_offset<B: Brush, S: Into<Span>>(amount: f32, span: S) -> Style<B> {
    Style::from_attribute(Attribute::BaselineOffset(amount), span)
}
