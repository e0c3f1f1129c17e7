// Copyright 2026 the Stylize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An opaque color-like payload for the color attributes.
///
/// The library never inspects a brush: it is stored, cloned, and compared,
/// and otherwise passed through to whatever consumes the styled string.
/// Any comparable, cloneable type qualifies via the blanket impl, so host
/// color types plug in directly.
pub trait Brush: Clone + PartialEq + core::fmt::Debug {}

impl<T: Clone + PartialEq + core::fmt::Debug> Brush for T {}
