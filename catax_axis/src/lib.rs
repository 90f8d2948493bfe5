// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category x-axis layout and rendering.
//!
//! This crate draws the horizontal axis of a category chart (bar, line, candle charts):
//! - the **axis line** along the top and/or bottom content edge,
//! - vertical **gridlines** at every stride-th visible index,
//! - tick **labels**, optionally rotated, word-wrapped, and nudged inward at the ends so
//!   they are not clipped by the chart edge, and
//! - vertical **limit lines** marking reference values, each with an optional label.
//!
//! Work is split in two phases:
//! - [`AxisLayoutEngine`] sizes labels once per data or style change and stores the
//!   result on the [`XAxis`].
//! - [`XAxisRenderer`] draws one frame onto any [`DrawSurface`], given a [`Viewport`] and
//!   a value→pixel [`kurbo::Affine`].
//!
//! Text shaping is out of scope; sizes come from a [`TextMeasurer`] (see `catax_text`
//! and `catax_text_parley`).
//!
//! ```
//! use catax_axis::{
//!     AxisConfig, AxisLayoutEngine, HeuristicTextMeasurer, RecordingSurface, Viewport,
//!     XAxis, XAxisRenderer,
//! };
//! use kurbo::{Affine, Rect, Size};
//!
//! let labels: Vec<Option<String>> = ["Q1", "Q2", "Q3", "Q4"]
//!     .iter()
//!     .map(|l| Some(l.to_string()))
//!     .collect();
//! let mut axis = XAxis::new(AxisConfig::default()).unwrap();
//! AxisLayoutEngine::new(HeuristicTextMeasurer).compute_label_bounds(
//!     &mut axis,
//!     catax_axis::average_label_length(&labels),
//!     labels,
//! );
//!
//! let transform = Affine::new([80.0, 0.0, 0.0, 1.0, 40.0, 0.0]);
//! let viewport = Viewport::from_content_rect(
//!     Size::new(400.0, 300.0),
//!     Rect::new(40.0, 20.0, 360.0, 260.0),
//! )
//! .with_visible_range(transform, 4, axis.label_stride());
//!
//! let mut surface = RecordingSurface::new();
//! XAxisRenderer::new(&axis, &viewport, transform, HeuristicTextMeasurer).render_all(&mut surface);
//! assert_eq!(surface.texts().count(), 4);
//! ```

#![no_std]

extern crate alloc;

mod axis;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod limit_line;
mod renderer;
mod style;
mod surface;
mod viewport;

pub use axis::{AxisRuntimeState, IdentityFormatter, LabelFormatter, XAxis};
pub use config::{AxisConfig, LabelPosition};
pub use error::ConfigError;
pub use layout::{AxisLayoutEngine, average_label_length, rotated_size};
pub use limit_line::{LimitLabelPosition, LimitLine};
pub use renderer::XAxisRenderer;
pub use style::{DashPattern, StrokeStyle};
pub use surface::{DrawCommand, DrawSurface, RecordedText, RecordingSurface, TextRun};
pub use viewport::Viewport;

pub use catax_text::{
    BlockMetrics, FontFamily, FontStyle, FontWeight, HeuristicTextMeasurer, TextAlign,
    TextMeasurer, TextMetrics, TextStyle, wrap_lines,
};
