// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label sizing for the x-axis.
//!
//! Labels are sized once per data or style change, not per frame: the layout engine
//! estimates a conservative label box from the average label length and stores it on
//! the axis, and the renderer reads it back every frame.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use catax_text::TextMeasurer;
use kurbo::Size;

use crate::XAxis;

/// A wide glyph used to build the label probe string.
const PROBE_GLYPH: &str = "h";

/// Computes label bounding boxes for an [`XAxis`].
#[derive(Clone, Copy, Debug)]
pub struct AxisLayoutEngine<M> {
    measurer: M,
}

impl<M: TextMeasurer> AxisLayoutEngine<M> {
    /// Creates a layout engine measuring with `measurer`.
    pub fn new(measurer: M) -> Self {
        Self { measurer }
    }

    /// Sizes labels and stores the category labels on `axis`.
    ///
    /// A probe of `round(average_label_length + space_between_labels)` wide glyphs is
    /// measured in the axis font, then rotated by the label rotation. The resulting box is
    /// stored as the axis label width/height and returned. `labels` is stored as-is,
    /// holes included, for lookup by index at render time.
    pub fn compute_label_bounds(
        &self,
        axis: &mut XAxis,
        average_label_length: f64,
        labels: Vec<Option<String>>,
    ) -> Size {
        let config = axis.config();
        let glyphs = probe_len(average_label_length, config.space_between_labels);
        let probe = PROBE_GLYPH.repeat(glyphs);
        let unrotated = Size::new(
            self.measurer.measure(&probe, &config.font).advance_width,
            self.measurer.line_height(&config.font),
        );
        let size = rotated_size(unrotated, config.label_rotation);
        tracing::debug!(
            glyphs,
            width = size.width,
            height = size.height,
            labels = labels.len(),
            "computed x-axis label bounds"
        );

        let state = axis.state_mut();
        state.label_width = size.width;
        state.label_height = size.height;
        state.values = labels;
        size
    }

    /// Picks a stride so that labels of the computed width do not overlap.
    ///
    /// Only applies when the axis has `auto_stride` set; otherwise the configured
    /// stride is returned untouched. The fitted stride is
    /// `ceil(value_count * label_width / (content_width * scale_x))`, at least 1.
    pub fn fit_label_stride(&self, axis: &mut XAxis, content_width: f64, scale_x: f64) -> usize {
        if !axis.config().auto_stride {
            return axis.config().label_stride;
        }
        let state = axis.state();
        let available = content_width * scale_x;
        let needed = state.values.len() as f64 * state.label_width;
        let stride = if available > 0.0 && available.is_finite() {
            to_count((needed / available).ceil()).max(1)
        } else {
            1
        };
        tracing::debug!(stride, needed, available, "fitted x-axis label stride");
        axis.state_mut().fitted_stride = Some(stride);
        stride
    }
}

/// Mean character count over all index slots; unlabeled slots count as empty.
pub fn average_label_length(labels: &[Option<String>]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let total: usize = labels
        .iter()
        .map(|l| l.as_deref().map_or(0, |s| s.chars().count()))
        .sum();
    total as f64 / labels.len() as f64
}

/// Bounding box of a `size` rectangle rotated by `degrees`.
pub fn rotated_size(size: Size, degrees: f64) -> Size {
    let theta = degrees.to_radians();
    let sin = theta.sin().abs();
    let cos = theta.cos().abs();
    Size::new(
        size.width * cos + size.height * sin,
        size.width * sin + size.height * cos,
    )
}

fn probe_len(average_label_length: f64, space_between_labels: usize) -> usize {
    to_count((average_label_length.max(0.0) + space_between_labels as f64).round())
}

fn to_count(v: f64) -> usize {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is finite and positive; `as` saturates at usize::MAX"
    )]
    {
        v as usize
    }
}
