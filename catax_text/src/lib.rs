// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for axis layout.
//!
//! Axis layout needs to size tick labels before anything is drawn: the widest expected
//! label decides how much room the axis reserves, and the first/last labels are measured
//! again at render time to keep them inside the chart. Shaping and glyph rasterization
//! stay downstream, so the axis code depends on this tiny measurement interface.
//!
//! This crate is intentionally:
//! - small and dependency-free,
//! - `no_std`-friendly (it uses `alloc` for owned font family names and wrap buffers), and
//! - renderer-agnostic (a shaping engine or a heuristic can implement the same trait).

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// A minimal text measurement interface used by axis layout.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate), or
/// - backed by a shaping engine (e.g. Parley).
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers wanting multi-line layout should use
    /// [`TextMeasurer::measure_block`].
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Returns the height of one line of text in `style`.
    ///
    /// The default measures a probe with an ascender and a descender.
    fn line_height(&self, style: &TextStyle) -> f64 {
        self.measure("Hg", style).line_height()
    }

    /// Measure a possibly multi-line block of text.
    ///
    /// Explicit `\n` always starts a new line. When `max_width` is `Some`, lines are
    /// additionally broken greedily at whitespace so that each line fits; a single word
    /// wider than `max_width` keeps its own line and overflows.
    fn measure_block(&self, text: &str, style: &TextStyle, max_width: Option<f64>) -> BlockMetrics {
        let line_height = self.line_height(style);
        let mut block = BlockMetrics::default();
        for line in wrap_lines(self, text, style, max_width) {
            block.push_line(self.measure(&line, style).advance_width, line_height);
        }
        block
    }
}

/// Splits `text` into the lines [`TextMeasurer::measure_block`] measures.
///
/// Explicit `\n` always starts a new line. With `max_width`, words are packed greedily
/// and a line is broken before the word that would make it wider than `max_width`.
/// Renderers that draw wrapped text should use this so drawn and measured lines agree.
pub fn wrap_lines<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    style: &TextStyle,
    max_width: Option<f64>,
) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let Some(max_width) = max_width else {
            lines.push(String::from(paragraph));
            continue;
        };
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let before = current.len();
            current.push(' ');
            current.push_str(word);
            if measurer.measure(&current, style).advance_width > max_width {
                current.truncate(before);
                lines.push(core::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }
    lines
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }

    fn line_height(&self, style: &TextStyle) -> f64 {
        (**self).line_height(style)
    }

    fn measure_block(&self, text: &str, style: &TextStyle, max_width: Option<f64>) -> BlockMetrics {
        (**self).measure_block(text, style, max_width)
    }
}

/// Text styling inputs relevant to measurement.
///
/// This is intentionally minimal: it’s just enough to make axis layout consistent.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart’s coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Horizontal alignment of a text block.
///
/// Used both for where a block sits relative to its anchor point and for how lines are
/// aligned inside a multi-line block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Block starts at the anchor / lines flush left.
    #[default]
    Left,
    /// Block centered on the anchor / lines centered.
    Center,
    /// Block ends at the anchor / lines flush right.
    Right,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width (useful for horizontal layout).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Metrics of an empty line.
    pub const ZERO: Self = Self {
        advance_width: 0.0,
        ascent: 0.0,
        descent: 0.0,
        leading: 0.0,
    };

    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// Measured extent of a (possibly wrapped) block of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockMetrics {
    /// Width of the widest line.
    pub width: f64,
    /// Sum of the line heights.
    pub height: f64,
    /// Number of laid out lines.
    pub lines: usize,
}

impl BlockMetrics {
    fn push_line(&mut self, width: f64, line_height: f64) {
        self.width = self.width.max(width);
        self.height += line_height;
        self.lines += 1;
    }
}

/// A tiny heuristic text measurer suitable for demos, tests, and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        let ascent = 0.8 * style.font_size;
        let descent = 0.2 * style.font_size;
        TextMetrics {
            advance_width,
            ascent,
            descent,
            leading: 0.0,
        }
    }
}
