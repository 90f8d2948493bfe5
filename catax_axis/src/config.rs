// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration.

use catax_text::TextStyle;
use peniko::Brush;
use peniko::color::palette::css;

use crate::ConfigError;
use crate::Viewport;
use crate::style::{StrokeStyle, validate_font};

/// Vertical gap between a label row and the edge it hangs from.
const LABEL_Y_OFFSET: f64 = 4.0;

/// Where tick labels (and the axis line) are placed relative to the content rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelPosition {
    /// Labels above the content area.
    #[default]
    Top,
    /// Labels below the content area.
    Bottom,
    /// Labels inside the content area, along its top edge.
    TopInside,
    /// Labels inside the content area, along its bottom edge.
    BottomInside,
    /// Labels both above and below the content area.
    BothSided,
}

/// One row of labels, i.e. one baseline the label pass runs on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum LabelRow {
    OutsideTop,
    InsideTop,
    /// `gap` multiplies [`LABEL_Y_OFFSET`].
    OutsideBottom { gap: f64 },
    InsideBottom,
}

impl LabelRow {
    /// The y coordinate labels in this row are drawn at.
    pub(crate) fn y(self, viewport: &Viewport, label_height: f64) -> f64 {
        match self {
            Self::OutsideTop => viewport.offset_top - label_height - LABEL_Y_OFFSET,
            Self::InsideTop => viewport.offset_top + LABEL_Y_OFFSET,
            Self::OutsideBottom { gap } => viewport.content_bottom + LABEL_Y_OFFSET * gap,
            Self::InsideBottom => viewport.content_bottom - label_height - LABEL_Y_OFFSET,
        }
    }
}

/// A horizontal content edge an axis line is drawn along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AxisEdge {
    Top,
    Bottom,
}

impl AxisEdge {
    pub(crate) fn y(self, viewport: &Viewport) -> f64 {
        match self {
            Self::Top => viewport.content_top,
            Self::Bottom => viewport.content_bottom,
        }
    }
}

impl LabelPosition {
    /// Label rows for this position, drawn in order.
    pub(crate) fn rows(self) -> &'static [LabelRow] {
        // The both-sided bottom gap (1.6) differs from the single bottom gap (1.5).
        match self {
            Self::Top => &[LabelRow::OutsideTop],
            Self::Bottom => &[LabelRow::OutsideBottom { gap: 1.5 }],
            Self::TopInside => &[LabelRow::InsideTop],
            Self::BottomInside => &[LabelRow::InsideBottom],
            Self::BothSided => &[LabelRow::OutsideTop, LabelRow::OutsideBottom { gap: 1.6 }],
        }
    }

    /// Content edges that get an axis line for this position.
    pub(crate) fn axis_edges(self) -> &'static [AxisEdge] {
        match self {
            Self::Top | Self::TopInside => &[AxisEdge::Top],
            Self::Bottom | Self::BottomInside => &[AxisEdge::Bottom],
            Self::BothSided => &[AxisEdge::Top, AxisEdge::Bottom],
        }
    }
}

/// Configuration of a category x-axis.
///
/// Values are checked by [`AxisConfig::validate`], which [`crate::XAxis`] runs whenever a
/// configuration is installed.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    /// Master switch; a disabled axis draws nothing.
    pub enabled: bool,
    /// Whether to draw tick labels.
    pub draw_labels: bool,
    /// Whether to draw the axis line.
    pub draw_axis_line: bool,
    /// Whether to draw vertical gridlines.
    pub draw_grid_lines: bool,
    /// Label (and axis line) placement.
    pub label_position: LabelPosition,
    /// Label rotation in degrees.
    pub label_rotation: f64,
    /// Label font.
    pub font: TextStyle,
    /// Label fill paint.
    pub text_fill: Brush,
    /// Axis line stroke.
    pub axis_line: StrokeStyle,
    /// Gridline stroke.
    pub grid_line: StrokeStyle,
    /// Draw every `label_stride`-th index. Must be at least 1.
    pub label_stride: usize,
    /// Let [`crate::AxisLayoutEngine::fit_label_stride`] pick the stride from the label width.
    pub auto_stride: bool,
    /// Shift the first and last labels inward so they are not cut off at the chart edges.
    pub avoid_first_last_clipping: bool,
    /// Wrap labels to [`AxisConfig::word_wrap_width_fraction`] of one category slot.
    pub word_wrap: bool,
    /// Wrap width as a fraction of the pixel width of one category slot.
    pub word_wrap_width_fraction: f64,
    /// Extra glyphs reserved between labels when sizing them.
    pub space_between_labels: usize,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            draw_labels: true,
            draw_axis_line: true,
            draw_grid_lines: true,
            label_position: LabelPosition::Top,
            label_rotation: 0.0,
            font: TextStyle::new(10.0),
            text_fill: Brush::Solid(css::BLACK),
            axis_line: StrokeStyle::default(),
            grid_line: StrokeStyle::solid(css::GRAY.with_alpha(0.9), 0.5),
            label_stride: 1,
            auto_stride: false,
            avoid_first_last_clipping: false,
            word_wrap: false,
            word_wrap_width_fraction: 1.0,
            space_between_labels: 4,
        }
    }
}

impl AxisConfig {
    /// Enable or disable the whole axis.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    /// Enable or disable the axis line.
    pub fn with_axis_line(mut self, draw_axis_line: bool) -> Self {
        self.draw_axis_line = draw_axis_line;
        self
    }

    /// Enable or disable gridlines.
    pub fn with_grid_lines(mut self, draw_grid_lines: bool) -> Self {
        self.draw_grid_lines = draw_grid_lines;
        self
    }

    /// Set the label position.
    pub fn with_label_position(mut self, label_position: LabelPosition) -> Self {
        self.label_position = label_position;
        self
    }

    /// Set label rotation angle in degrees.
    pub fn with_label_rotation(mut self, degrees: f64) -> Self {
        self.label_rotation = degrees;
        self
    }

    /// Set the label font.
    pub fn with_font(mut self, font: TextStyle) -> Self {
        self.font = font;
        self
    }

    /// Set the label fill paint.
    pub fn with_text_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.text_fill = fill.into();
        self
    }

    /// Set the axis line stroke.
    pub fn with_axis_line_style(mut self, style: StrokeStyle) -> Self {
        self.axis_line = style;
        self
    }

    /// Set the gridline stroke.
    pub fn with_grid_line_style(mut self, style: StrokeStyle) -> Self {
        self.grid_line = style;
        self
    }

    /// Set a fixed label stride.
    pub fn with_label_stride(mut self, stride: usize) -> Self {
        self.label_stride = stride;
        self
    }

    /// Let the layout engine fit the stride to the available width.
    pub fn with_auto_stride(mut self, auto_stride: bool) -> Self {
        self.auto_stride = auto_stride;
        self
    }

    /// Enable or disable first/last label clipping avoidance.
    pub fn with_avoid_first_last_clipping(mut self, avoid: bool) -> Self {
        self.avoid_first_last_clipping = avoid;
        self
    }

    /// Enable word wrap at `width_fraction` of a category slot.
    pub fn with_word_wrap(mut self, width_fraction: f64) -> Self {
        self.word_wrap = true;
        self.word_wrap_width_fraction = width_fraction;
        self
    }

    /// Disable word wrap.
    pub fn without_word_wrap(mut self) -> Self {
        self.word_wrap = false;
        self
    }

    /// Set the number of spare glyphs reserved between labels.
    pub fn with_space_between_labels(mut self, glyphs: usize) -> Self {
        self.space_between_labels = glyphs;
        self
    }

    /// Checks that this configuration can be rendered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label_stride == 0 {
            return Err(ConfigError::ZeroLabelStride);
        }
        if !self.label_rotation.is_finite() {
            return Err(ConfigError::InvalidRotation(self.label_rotation));
        }
        if !self.word_wrap_width_fraction.is_finite() || self.word_wrap_width_fraction < 0.0 {
            return Err(ConfigError::InvalidWrapFraction(
                self.word_wrap_width_fraction,
            ));
        }
        validate_font(&self.font, "label")?;
        self.axis_line.validate("axis line")?;
        self.grid_line.validate("grid line")?;
        Ok(())
    }
}
