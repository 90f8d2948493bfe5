// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limit lines: user-defined threshold markers drawn across the content area.

extern crate alloc;

use alloc::string::String;

use catax_text::{TextAlign, TextStyle};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::ConfigError;
use crate::config::AxisEdge;
use crate::style::{StrokeStyle, validate_font};

/// Distance between a limit label and the content edge it is attached to.
pub(crate) const LIMIT_LABEL_Y_OFFSET: f64 = 2.0;

/// Which corner of a limit line its label is drawn in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LimitLabelPosition {
    /// Left of the line, along the top content edge.
    LeftTop,
    /// Left of the line, along the bottom content edge.
    LeftBottom,
    /// Right of the line, along the top content edge.
    #[default]
    RightTop,
    /// Right of the line, along the bottom content edge.
    RightBottom,
}

/// Resolved geometry of a limit label corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LimitLabelPlacement {
    /// `+1` to place the label right of the line, `-1` for left.
    pub(crate) side: i8,
    /// Edge the label hangs from.
    pub(crate) edge: AxisEdge,
    /// Labels right of the line start at the anchor; labels left of it end there.
    pub(crate) align: TextAlign,
}

impl LimitLabelPosition {
    pub(crate) fn placement(self) -> LimitLabelPlacement {
        let (side, edge, align) = match self {
            Self::LeftTop => (-1, AxisEdge::Top, TextAlign::Right),
            Self::LeftBottom => (-1, AxisEdge::Bottom, TextAlign::Right),
            Self::RightTop => (1, AxisEdge::Top, TextAlign::Left),
            Self::RightBottom => (1, AxisEdge::Bottom, TextAlign::Left),
        };
        LimitLabelPlacement { side, edge, align }
    }
}

/// A vertical threshold line at a data position, with an optional label.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitLine {
    /// Position along the axis, in data units (category index space).
    pub value: f64,
    /// Disabled lines are skipped.
    pub enabled: bool,
    /// Line stroke, independent of the axis gridline style.
    pub stroke: StrokeStyle,
    /// Label text; an empty label is not drawn.
    pub label: String,
    /// Label corner.
    pub label_position: LimitLabelPosition,
    /// Label font.
    pub font: TextStyle,
    /// Label fill paint.
    pub text_fill: Brush,
    /// Extra horizontal distance between line and label.
    pub x_offset: f64,
    /// Extra vertical distance between content edge and label.
    pub y_offset: f64,
}

impl LimitLine {
    /// Creates an enabled, unlabeled limit line at `value` with default styling.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            enabled: true,
            stroke: StrokeStyle::solid(Color::from_rgb8(237, 91, 91), 2.0),
            label: String::new(),
            label_position: LimitLabelPosition::RightTop,
            font: TextStyle::new(13.0),
            text_fill: Brush::Solid(css::BLACK),
            x_offset: 5.0,
            y_offset: 5.0,
        }
    }

    /// Sets the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the label corner.
    pub fn with_label_position(mut self, position: LimitLabelPosition) -> Self {
        self.label_position = position;
        self
    }

    /// Sets the line stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the label font.
    pub fn with_font(mut self, font: TextStyle) -> Self {
        self.font = font;
        self
    }

    /// Sets the label fill paint.
    pub fn with_text_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.text_fill = fill.into();
        self
    }

    /// Sets the label offsets.
    pub fn with_offsets(mut self, x_offset: f64, y_offset: f64) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Enable or disable the line.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Checks that this line can be rendered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("value", self.value),
            ("x offset", self.x_offset),
            ("y offset", self.y_offset),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteLimit { field, value });
            }
        }
        self.stroke.validate("limit line")?;
        validate_font(&self.font, "limit label")
    }
}
