// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart viewport as seen by the axis renderer.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Affine, Point, Rect, Size};

/// Visible content rectangle, chart offsets, and visible index range.
///
/// Owned by the host chart; the axis renderer only reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Left edge of the content rectangle.
    pub content_left: f64,
    /// Right edge of the content rectangle.
    pub content_right: f64,
    /// Top edge of the content rectangle.
    pub content_top: f64,
    /// Bottom edge of the content rectangle.
    pub content_bottom: f64,
    /// Space between the chart's left edge and the content rectangle.
    pub offset_left: f64,
    /// Space between the content rectangle and the chart's right edge.
    pub offset_right: f64,
    /// Space between the chart's top edge and the content rectangle.
    pub offset_top: f64,
    /// Total chart width.
    pub chart_width: f64,
    /// First data index to consider while drawing.
    pub min_visible_index: usize,
    /// Last data index to consider while drawing (inclusive).
    pub max_visible_index: usize,
}

impl Viewport {
    /// Creates a viewport for a chart of `chart_size` whose content occupies `content`.
    ///
    /// The visible index range starts out empty-ish (`0..=0`); see
    /// [`Viewport::with_visible_range`].
    pub fn from_content_rect(chart_size: Size, content: Rect) -> Self {
        Self {
            content_left: content.x0,
            content_right: content.x1,
            content_top: content.y0,
            content_bottom: content.y1,
            offset_left: content.x0,
            offset_right: chart_size.width - content.x1,
            offset_top: content.y0,
            chart_width: chart_size.width,
            min_visible_index: 0,
            max_visible_index: 0,
        }
    }

    /// Sets the visible index range explicitly.
    pub fn with_index_range(mut self, min: usize, max: usize) -> Self {
        self.min_visible_index = min;
        self.max_visible_index = max;
        self
    }

    /// Derives the visible index range from the value→pixel `transform`.
    ///
    /// The content edges are mapped back into index space. The lower bound is snapped
    /// down to a multiple of `stride` (one extra stride when already aligned) and the
    /// upper bound is extended by one stride, so labels keep their positions while
    /// scrolling. Both bounds are clamped to `0..value_count`.
    pub fn with_visible_range(mut self, transform: Affine, value_count: usize, stride: usize) -> Self {
        let stride = stride.max(1);
        let last = value_count.saturating_sub(1);
        let inverse = transform.inverse();
        let left = (inverse * Point::new(self.content_left, self.content_bottom)).x;
        let right = (inverse * Point::new(self.content_right, self.content_bottom)).x;

        let low = if left.is_nan() || left <= 0.0 {
            0
        } else {
            to_index(left + 1.0)
        };
        let high = if right.is_nan() {
            last
        } else {
            to_index(right).min(last)
        };

        let sub_low = if low % stride == 0 { stride } else { 0 };
        self.min_visible_index = (low / stride * stride).saturating_sub(sub_low);
        self.max_visible_index = (high / stride * stride).saturating_add(stride).min(last);
        self
    }

    /// Returns the content rectangle.
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.content_left,
            self.content_top,
            self.content_right,
            self.content_bottom,
        )
    }

    /// Returns the content width.
    pub fn content_width(&self) -> f64 {
        self.content_right - self.content_left
    }

    /// Whether `x` is right of the content's left edge, with one pixel of slack.
    pub fn is_in_bounds_left(&self, x: f64) -> bool {
        self.content_left <= x + 1.0
    }

    /// Whether `x` is left of the content's right edge, with one pixel of slack.
    ///
    /// `x` is truncated to hundredths first so rounding noise does not drop edge labels.
    pub fn is_in_bounds_right(&self, x: f64) -> bool {
        let x = (x * 100.0).floor() / 100.0;
        self.content_right >= x - 1.0
    }

    /// Whether `x` lies horizontally within the content rectangle.
    pub fn is_in_bounds_x(&self, x: f64) -> bool {
        self.is_in_bounds_left(x) && self.is_in_bounds_right(x)
    }
}

/// Truncates a non-negative index-space coordinate.
fn to_index(v: f64) -> usize {
    if !v.is_finite() {
        return if v > 0.0 { usize::MAX } else { 0 };
    }
    let v = v.max(0.0).floor();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is finite and non-negative; `as` saturates at usize::MAX"
    )]
    {
        v as usize
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn viewport() -> Viewport {
        Viewport::from_content_rect(Size::new(400.0, 300.0), Rect::new(40.0, 20.0, 360.0, 260.0))
    }

    #[test]
    fn offsets_are_derived_from_content_rect() {
        let vp = viewport();
        assert_eq!(vp.offset_left, 40.0);
        assert_eq!(vp.offset_right, 40.0);
        assert_eq!(vp.offset_top, 20.0);
        assert_eq!(vp.chart_width, 400.0);
        assert_eq!(vp.content_width(), 320.0);
        assert_eq!(vp.content_rect(), Rect::new(40.0, 20.0, 360.0, 260.0));
    }

    #[test]
    fn bounds_check_allows_one_pixel_of_slack() {
        let vp = viewport();
        assert!(vp.is_in_bounds_x(40.0));
        assert!(vp.is_in_bounds_x(39.5));
        assert!(!vp.is_in_bounds_x(38.0));
        assert!(vp.is_in_bounds_x(360.0));
        assert!(vp.is_in_bounds_x(361.0));
        assert!(!vp.is_in_bounds_x(361.5));
    }

    #[test]
    fn visible_range_is_derived_from_transform() {
        let transform = Affine::new([50.0, 0.0, 0.0, 1.0, 40.0, 0.0]);
        let vp = viewport().with_visible_range(transform, 20, 1);
        assert_eq!(vp.min_visible_index, 0);
        assert_eq!(vp.max_visible_index, 7);

        let vp = viewport().with_visible_range(transform, 20, 2);
        assert_eq!(vp.min_visible_index, 0);
        assert_eq!(vp.max_visible_index, 8);
    }

    #[test]
    fn visible_range_snaps_to_stride_when_scrolled() {
        // Index 5 sits at the content's left edge.
        let transform = Affine::new([50.0, 0.0, 0.0, 1.0, 40.0 - 250.0, 0.0]);
        let vp = viewport().with_visible_range(transform, 40, 4);
        // low = 6 -> 4; high = 11 -> 8 + 4.
        assert_eq!(vp.min_visible_index, 4);
        assert_eq!(vp.max_visible_index, 12);
    }

    #[test]
    fn visible_range_is_clamped_to_value_count() {
        let transform = Affine::new([10.0, 0.0, 0.0, 1.0, 40.0, 0.0]);
        let vp = viewport().with_visible_range(transform, 5, 1);
        assert_eq!(vp.min_visible_index, 0);
        assert_eq!(vp.max_visible_index, 4);

        let vp = viewport().with_visible_range(transform, 0, 1);
        assert_eq!(vp.min_visible_index, 0);
        assert_eq!(vp.max_visible_index, 0);
    }
}
