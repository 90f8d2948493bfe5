// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke styling shared by the axis line, gridlines, and limit lines.

use catax_text::{FontFamily, TextStyle};
use kurbo::Stroke;
use peniko::Brush;
use peniko::color::palette::css;
use smallvec::SmallVec;

use crate::ConfigError;

/// An on/off dash pattern with a starting phase.
#[derive(Clone, Debug, PartialEq)]
pub struct DashPattern {
    /// Offset into the pattern at which stroking starts.
    pub phase: f64,
    /// Alternating on/off lengths.
    pub lengths: SmallVec<[f64; 4]>,
}

impl DashPattern {
    /// Creates a dash pattern.
    pub fn new(phase: f64, lengths: impl IntoIterator<Item = f64>) -> Self {
        Self {
            phase,
            lengths: lengths.into_iter().collect(),
        }
    }

    fn validate(&self, what: &'static str) -> Result<(), ConfigError> {
        let invalid = |reason| ConfigError::InvalidDashPattern { what, reason };
        if !self.phase.is_finite() {
            return Err(invalid("phase is not finite"));
        }
        if self.lengths.is_empty() {
            return Err(invalid("no dash lengths"));
        }
        if self.lengths.iter().any(|l| !l.is_finite() || *l < 0.0) {
            return Err(invalid("lengths must be finite and non-negative"));
        }
        if self.lengths.iter().all(|l| *l == 0.0) {
            return Err(invalid("lengths are all zero"));
        }
        Ok(())
    }
}

/// A paint + width (+ optional dash) triple for stroked segments.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Optional dash pattern; `None` strokes solid.
    pub dash: Option<DashPattern>,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: None,
        }
    }

    /// Sets a dash pattern.
    pub fn with_dash(mut self, phase: f64, lengths: impl IntoIterator<Item = f64>) -> Self {
        self.dash = Some(DashPattern::new(phase, lengths));
        self
    }

    /// Removes the dash pattern.
    pub fn without_dash(mut self) -> Self {
        self.dash = None;
        self
    }

    /// Returns the `kurbo` stroke parameters (width and dashes) for this style.
    pub fn to_stroke(&self) -> Stroke {
        let stroke = Stroke::new(self.stroke_width);
        match &self.dash {
            Some(dash) => stroke.with_dashes(dash.phase, dash.lengths.iter().copied()),
            None => stroke,
        }
    }

    pub(crate) fn validate(&self, what: &'static str) -> Result<(), ConfigError> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ConfigError::InvalidStrokeWidth {
                what,
                width: self.stroke_width,
            });
        }
        if let Some(dash) = &self.dash {
            dash.validate(what)?;
        }
        Ok(())
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::GRAY, 0.5)
    }
}

pub(crate) fn validate_font(style: &TextStyle, what: &'static str) -> Result<(), ConfigError> {
    if !style.font_size.is_finite() || style.font_size <= 0.0 {
        return Err(ConfigError::InvalidFontSize {
            what,
            size: style.font_size,
        });
    }
    if let FontFamily::Named(name) = &style.font_family {
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyFontFamily { what });
        }
    }
    Ok(())
}
