// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text measurement adapter.
//!
//! This crate implements [`catax_text::TextMeasurer`] using Parley, enabling
//! shaping-aware label metrics and line breaking for axis layout.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use catax_text::{
    BlockMetrics, FontFamily, FontStyle, TextMeasurer, TextMetrics, TextStyle,
};
use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle, FontWeight};

/// A [`TextMeasurer`] backed by Parley.
///
/// Single lines are measured from Parley's line metrics; blocks use Parley's own line
/// breaker, so wrapped label sizes match what a Parley-based renderer would draw.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
    display_scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a new Parley-backed text measurer using the system font configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
            display_scale: 1.0,
            quantize: true,
        }
    }

    /// Sets the display scale passed to Parley.
    ///
    /// This is typically a device pixel ratio. Measurements returned by this
    /// measurer are scaled back into logical coordinates (divide by scale).
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    fn scale(&self) -> f32 {
        self.display_scale.max(1.0e-6)
    }

    fn parley_font_stack(family: &FontFamily) -> FontStack<'_> {
        let family = match family {
            FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        FontStack::from(family)
    }

    fn parley_font_style(style: FontStyle) -> ParleyFontStyle {
        match style {
            FontStyle::Normal => ParleyFontStyle::Normal,
            FontStyle::Italic => ParleyFontStyle::Italic,
            FontStyle::Oblique => ParleyFontStyle::Oblique(None),
        }
    }

    fn to_f32(value: f64) -> f32 {
        if !value.is_finite() {
            return 0.0;
        }
        let value = value.max(0.0);
        if value >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                value as f32
            }
        }
    }

    /// Shapes `text` and breaks it into lines no wider than `max_width` (logical units).
    fn layout(&self, text: &str, style: &TextStyle, max_width: Option<f64>) -> parley::Layout<()> {
        let scale = self.scale();
        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(Self::to_f32(style.font_size)));
        builder.push_default(StyleProperty::FontStack(Self::parley_font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontStyle(Self::parley_font_style(
            style.font_style,
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(f32::from(
            style.font_weight.0,
        ))));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(max_width.map(|w| Self::to_f32(w) * scale));
        layout.align(None, Alignment::Start, AlignmentOptions::default());
        layout
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return TextMetrics::ZERO;
        }

        let scale = f64::from(self.scale());
        let layout = self.layout(text, style, None);
        let Some(line) = layout.lines().next() else {
            return TextMetrics::ZERO;
        };

        let m = line.metrics();
        TextMetrics {
            advance_width: f64::from(m.advance) / scale,
            ascent: f64::from(m.ascent) / scale,
            descent: f64::from(m.descent) / scale,
            leading: f64::from(m.leading) / scale,
        }
    }

    fn measure_block(&self, text: &str, style: &TextStyle, max_width: Option<f64>) -> BlockMetrics {
        if text.is_empty() {
            return BlockMetrics {
                width: 0.0,
                height: self.line_height(style),
                lines: 1,
            };
        }
        let scale = f64::from(self.scale());
        let layout = self.layout(text, style, max_width);
        BlockMetrics {
            width: f64::from(layout.width()) / scale,
            height: f64::from(layout.height()) / scale,
            lines: layout.len(),
        }
    }
}
