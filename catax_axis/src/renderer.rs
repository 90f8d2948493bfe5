// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! X-axis rendering.
//!
//! Each `render_*` call is a self-contained pass against a [`DrawSurface`]: it checks its
//! enable flags, wraps its drawing in a save/restore pair, and walks the visible index
//! range through the value→pixel transform. Passes can be called in any order;
//! [`XAxisRenderer::render_all`] uses the usual back-to-front order.

use catax_text::{TextAlign, TextMeasurer};
use kurbo::{Affine, Line, Point};

use crate::config::AxisEdge;
use crate::limit_line::LIMIT_LABEL_Y_OFFSET;
use crate::surface::SurfaceScope;
use crate::{DrawSurface, LabelFormatter, LimitLine, TextRun, Viewport, XAxis};

/// Draws an [`XAxis`] for one frame.
///
/// The axis must have been laid out with [`crate::AxisLayoutEngine::compute_label_bounds`]
/// after its last data, font, or rotation change; the renderer never recomputes layout.
#[derive(Clone, Copy, Debug)]
pub struct XAxisRenderer<'a, M> {
    axis: &'a XAxis,
    viewport: &'a Viewport,
    transform: Affine,
    measurer: M,
}

impl<'a, M: TextMeasurer> XAxisRenderer<'a, M> {
    /// Creates a renderer for one frame.
    ///
    /// `transform` maps `(index, 0)` in value space to pixels.
    pub fn new(axis: &'a XAxis, viewport: &'a Viewport, transform: Affine, measurer: M) -> Self {
        Self {
            axis,
            viewport,
            transform,
            measurer,
        }
    }

    /// Draws gridlines, axis line, labels, then limit lines.
    pub fn render_all<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        self.render_grid_lines(surface);
        self.render_axis_line(surface);
        self.render_axis_labels(surface);
        self.render_limit_lines(surface);
    }

    /// Draws the axis line along the content edge(s) selected by the label position.
    pub fn render_axis_line<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let config = self.axis.config();
        if !config.enabled || !config.draw_axis_line {
            return;
        }
        let vp = self.viewport;
        let stroke = config.axis_line.to_stroke();
        let mut surface = SurfaceScope::new(surface);
        for edge in config.label_position.axis_edges() {
            let y = edge.y(vp);
            let segment = [Line::new((vp.content_left, y), (vp.content_right, y))];
            surface.stroke_segments(&segment, &config.axis_line.brush, &stroke);
        }
    }

    /// Draws a vertical gridline at every stride-th visible index.
    pub fn render_grid_lines<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let config = self.axis.config();
        if !config.enabled || !config.draw_grid_lines {
            return;
        }
        let vp = self.viewport;
        let stroke = config.grid_line.to_stroke();
        let mut surface = SurfaceScope::new(surface);
        // The stride is validated to be at least 1 when the config is installed.
        for i in (vp.min_visible_index..=vp.max_visible_index).step_by(self.axis.label_stride()) {
            let x = self.pixel_x(i as f64);
            if x < vp.offset_left || x > vp.chart_width {
                continue;
            }
            let segment = [Line::new((x, vp.content_top), (x, vp.content_bottom))];
            surface.stroke_segments(&segment, &config.grid_line.brush, &stroke);
        }
    }

    /// Draws tick labels on one or two rows, depending on the label position.
    pub fn render_axis_labels<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let config = self.axis.config();
        if !config.enabled || !config.draw_labels {
            return;
        }
        let formatter = self.axis.formatter();
        let label_height = self.axis.state().label_height;
        let mut surface = SurfaceScope::new(surface);
        for row in config.label_position.rows() {
            self.draw_labels(&mut *surface, row.y(self.viewport, label_height), formatter);
        }
    }

    /// Draws every enabled limit line and its label.
    pub fn render_limit_lines<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let lines = self.axis.limit_lines();
        if !self.axis.config().enabled || lines.is_empty() {
            return;
        }
        let mut surface = SurfaceScope::new(surface);
        for line in lines.iter().filter(|l| l.enabled) {
            let x = self.pixel_x(line.value);
            self.draw_limit_line(&mut *surface, line, x);
            self.draw_limit_label(&mut *surface, line, x);
        }
    }

    fn pixel_x(&self, value: f64) -> f64 {
        (self.transform * Point::new(value, 0.0)).x
    }

    fn draw_labels<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        y: f64,
        formatter: &dyn LabelFormatter,
    ) {
        let config = self.axis.config();
        let values = self.axis.values();
        let vp = self.viewport;
        let wrap_width = self.axis.word_wrap_width(self.transform);
        let end = vp.max_visible_index.saturating_add(1).min(values.len());

        for i in (vp.min_visible_index..end).step_by(self.axis.label_stride()) {
            let Some(label) = values[i].as_deref() else {
                continue;
            };
            let mut x = self.pixel_x(i as f64);
            if !vp.is_in_bounds_x(x) {
                tracing::trace!(index = i, x, "x-axis label outside content");
                continue;
            }
            if config.avoid_first_last_clipping {
                x = self.avoid_clipping(i, values.len(), label, x, wrap_width);
            }

            let text = formatter.format_label(i, label, vp);
            surface.draw_text(&TextRun {
                text: &text,
                origin: Point::new(x, y),
                angle: config.label_rotation,
                anchor: TextAlign::Right,
                paragraph_align: TextAlign::Center,
                style: &config.font,
                fill: &config.text_fill,
                max_width: wrap_width,
            });
        }
    }

    /// Moves the first and last labels inward so their text stays inside the chart.
    fn avoid_clipping(
        &self,
        index: usize,
        count: usize,
        label: &str,
        x: f64,
        wrap_width: Option<f64>,
    ) -> f64 {
        let measure = || {
            self.measurer
                .measure_block(label, &self.axis.config().font, wrap_width)
                .width
        };
        let vp = self.viewport;
        if index + 1 == count && count > 1 {
            let width = measure();
            if width > vp.offset_right * 2.0 && x + width > vp.chart_width {
                return x - width / 2.0;
            }
            x
        } else if index == 0 {
            x + measure() / 2.0
        } else {
            x
        }
    }

    fn draw_limit_line<S: DrawSurface + ?Sized>(&self, surface: &mut S, line: &LimitLine, x: f64) {
        let vp = self.viewport;
        let segment = [Line::new((x, vp.content_top), (x, vp.content_bottom))];
        surface.stroke_segments(&segment, &line.stroke.brush, &line.stroke.to_stroke());
    }

    fn draw_limit_label<S: DrawSurface + ?Sized>(&self, surface: &mut S, line: &LimitLine, x: f64) {
        if line.label.is_empty() {
            return;
        }
        let placement = line.label_position.placement();
        let x_offset = line.stroke.stroke_width + line.x_offset;
        let y_offset = LIMIT_LABEL_Y_OFFSET + line.y_offset;
        let y = match placement.edge {
            AxisEdge::Top => self.viewport.content_top + y_offset,
            AxisEdge::Bottom => {
                self.viewport.content_bottom - self.measurer.line_height(&line.font) - y_offset
            }
        };
        surface.draw_text(&TextRun {
            text: &line.label,
            origin: Point::new(x + f64::from(placement.side) * x_offset, y),
            angle: 0.0,
            anchor: placement.align,
            paragraph_align: placement.align,
            style: &line.font,
            fill: &line.text_fill,
            max_width: None,
        });
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use catax_text::{HeuristicTextMeasurer, TextStyle};
    use kurbo::{Rect, Size};
    use peniko::color::palette::css;

    use super::*;
    use crate::{
        AxisConfig, AxisLayoutEngine, DrawCommand, LabelPosition, LimitLabelPosition,
        RecordingSurface, StrokeStyle,
    };

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    fn viewport(min: usize, max: usize) -> Viewport {
        Viewport::from_content_rect(Size::new(400.0, 300.0), Rect::new(40.0, 20.0, 360.0, 260.0))
            .with_index_range(min, max)
    }

    fn slots(scale: f64) -> Affine {
        Affine::new([scale, 0.0, 0.0, 1.0, 40.0, 0.0])
    }

    fn laid_out(config: AxisConfig, labels: Vec<Option<String>>) -> XAxis {
        let mut axis = XAxis::new(config).unwrap();
        AxisLayoutEngine::new(HeuristicTextMeasurer).compute_label_bounds(&mut axis, 3.0, labels);
        axis
    }

    fn months(n: usize) -> Vec<Option<String>> {
        MONTHS.iter().take(n).map(|m| Some(m.to_string())).collect()
    }

    fn record(
        axis: &XAxis,
        vp: &Viewport,
        transform: Affine,
        pass: impl Fn(&XAxisRenderer<'_, HeuristicTextMeasurer>, &mut RecordingSurface),
    ) -> RecordingSurface {
        let renderer = XAxisRenderer::new(axis, vp, transform, HeuristicTextMeasurer);
        let mut surface = RecordingSurface::new();
        pass(&renderer, &mut surface);
        surface
    }

    fn label_xs(surface: &RecordingSurface) -> Vec<f64> {
        surface.texts().map(|t| t.origin.x).collect()
    }

    #[test]
    fn disabled_axis_draws_nothing() {
        let mut axis = laid_out(AxisConfig::default().with_enabled(false), months(5));
        axis.add_limit_line(LimitLine::new(2.0).with_label("max")).unwrap();
        let vp = viewport(0, 4);
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_all(s));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn pass_toggles_are_respected() {
        let config = AxisConfig::default()
            .with_labels(false)
            .with_axis_line(false)
            .with_grid_lines(false);
        let axis = laid_out(config, months(5));
        let vp = viewport(0, 4);
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_all(s));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn axis_line_follows_label_position() {
        let vp = viewport(0, 4);
        let ys = |position| -> Vec<f64> {
            let axis = laid_out(AxisConfig::default().with_label_position(position), months(5));
            let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_axis_line(s));
            for segment in surface.segments() {
                assert_eq!((segment.p0.x, segment.p1.x), (40.0, 360.0));
                assert_eq!(segment.p0.y, segment.p1.y);
            }
            surface.segments().map(|l| l.p0.y).collect()
        };
        assert_eq!(ys(LabelPosition::Top), [20.0]);
        assert_eq!(ys(LabelPosition::TopInside), [20.0]);
        assert_eq!(ys(LabelPosition::Bottom), [260.0]);
        assert_eq!(ys(LabelPosition::BottomInside), [260.0]);
        assert_eq!(ys(LabelPosition::BothSided), [20.0, 260.0]);
    }

    #[test]
    fn axis_line_uses_axis_stroke() {
        let style = StrokeStyle::solid(css::BLUE, 1.5).with_dash(2.0, [6.0, 3.0]);
        let axis = laid_out(
            AxisConfig::default().with_axis_line_style(style.clone()),
            months(5),
        );
        let vp = viewport(0, 4);
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_axis_line(s));
        let [DrawCommand::Save, DrawCommand::Stroke { brush, stroke, .. }, DrawCommand::Restore] =
            surface.commands()
        else {
            panic!("unexpected commands: {:?}", surface.commands());
        };
        assert_eq!(brush, &style.brush);
        assert_eq!(stroke, &style.to_stroke());
    }

    #[test]
    fn gridlines_sit_at_transformed_indices() {
        let axis = laid_out(AxisConfig::default(), months(5));
        let vp = viewport(0, 4);
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_grid_lines(s));
        let xs: Vec<f64> = surface.segments().map(|l| l.p0.x).collect();
        assert_eq!(xs, [40.0, 90.0, 140.0, 190.0, 240.0]);
        for segment in surface.segments() {
            assert_eq!(segment.p0.x, segment.p1.x);
            assert_eq!((segment.p0.y, segment.p1.y), (20.0, 260.0));
        }
    }

    #[test]
    fn gridlines_outside_chart_are_skipped() {
        let axis = laid_out(AxisConfig::default(), months(5));
        let vp = viewport(0, 4);

        let surface = record(&axis, &vp, slots(100.0), |r, s| r.render_grid_lines(s));
        let xs: Vec<f64> = surface.segments().map(|l| l.p0.x).collect();
        assert_eq!(xs, [40.0, 140.0, 240.0, 340.0]);

        let scrolled = Affine::new([100.0, 0.0, 0.0, 1.0, -60.0, 0.0]);
        let surface = record(&axis, &vp, scrolled, |r, s| r.render_grid_lines(s));
        let xs: Vec<f64> = surface.segments().map(|l| l.p0.x).collect();
        assert_eq!(xs, [40.0, 140.0, 240.0, 340.0]);
        assert!(xs.iter().all(|x| *x >= vp.offset_left && *x <= vp.chart_width));
    }

    #[test]
    fn gridlines_step_by_stride() {
        let axis = laid_out(AxisConfig::default().with_label_stride(2), months(10));
        let vp = viewport(0, 9);
        let surface = record(&axis, &vp, slots(30.0), |r, s| r.render_grid_lines(s));
        let xs: Vec<f64> = surface.segments().map(|l| l.p0.x).collect();
        assert_eq!(xs, [40.0, 100.0, 160.0, 220.0, 280.0]);
    }

    #[test]
    fn one_label_per_visible_index_and_row() {
        let vp = viewport(0, 4);
        let axis = laid_out(AxisConfig::default(), months(5));
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_axis_labels(s));
        assert_eq!(surface.texts().count(), 5);
        // Top row: offset_top - label_height - 4.
        assert!(surface.texts().all(|t| t.origin.y == 20.0 - 10.0 - 4.0));

        let axis = laid_out(
            AxisConfig::default().with_label_position(LabelPosition::BothSided),
            months(5),
        );
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_axis_labels(s));
        assert_eq!(surface.texts().count(), 10);
        let bottom = surface.texts().filter(|t| (t.origin.y - 266.4).abs() < 1e-9);
        assert_eq!(bottom.count(), 5);
    }

    #[test]
    fn labels_step_by_stride() {
        let axis = laid_out(AxisConfig::default().with_label_stride(2), months(10));
        let vp = viewport(0, 9);
        let surface = record(&axis, &vp, slots(30.0), |r, s| r.render_axis_labels(s));
        let texts: Vec<&str> = surface.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Jan", "Mar", "May", "Jul", "Sep"]);
        assert_eq!(label_xs(&surface), [40.0, 100.0, 160.0, 220.0, 280.0]);
    }

    #[test]
    fn unlabeled_and_out_of_range_indices_are_skipped() {
        let mut labels = months(5);
        labels[1] = None;
        let axis = laid_out(AxisConfig::default(), labels);
        // Range extends past the labels; index 4 at x = 440 is outside the content.
        let vp = viewport(0, 8);
        let surface = record(&axis, &vp, slots(100.0), |r, s| r.render_axis_labels(s));
        let texts: Vec<&str> = surface.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Jan", "Mar", "Apr"]);
    }

    #[test]
    fn first_label_shifts_right_by_half_its_width() {
        let vp = viewport(0, 4);
        let plain = laid_out(AxisConfig::default(), months(5));
        let shifted = laid_out(
            AxisConfig::default().with_avoid_first_last_clipping(true),
            months(5),
        );
        let before = label_xs(&record(&plain, &vp, slots(50.0), |r, s| r.render_axis_labels(s)));
        let after = label_xs(&record(&shifted, &vp, slots(50.0), |r, s| r.render_axis_labels(s)));
        // "Jan" is 18px wide.
        assert_eq!(after[0], before[0] + 9.0);
        assert_eq!(after[1..], before[1..]);
    }

    #[test]
    fn last_label_shifts_left_when_it_would_overflow() {
        let vp = Viewport::from_content_rect(
            Size::new(400.0, 300.0),
            Rect::new(40.0, 20.0, 395.0, 260.0),
        )
        .with_index_range(0, 4);
        let mut labels = months(4);
        labels.push(Some("December".to_string()));
        let axis = laid_out(
            AxisConfig::default().with_avoid_first_last_clipping(true),
            labels,
        );
        let surface = record(&axis, &vp, slots(85.0), |r, s| r.render_axis_labels(s));
        // "December" is 48px: wider than 2 * offset_right (10) and 380 + 48 > 400.
        assert_eq!(label_xs(&surface), [49.0, 125.0, 210.0, 295.0, 356.0]);
    }

    #[test]
    fn last_label_stays_when_it_fits() {
        let vp = viewport(0, 4);
        let axis = laid_out(
            AxisConfig::default().with_avoid_first_last_clipping(true),
            months(5),
        );
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_axis_labels(s));
        assert_eq!(label_xs(&surface)[4], 240.0);
    }

    #[test]
    fn single_label_is_treated_as_first() {
        let vp = viewport(0, 0);
        let axis = laid_out(
            AxisConfig::default().with_avoid_first_last_clipping(true),
            months(1),
        );
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_axis_labels(s));
        assert_eq!(label_xs(&surface), [49.0]);
    }

    #[test]
    fn clipping_measure_respects_word_wrap() {
        let vp = viewport(0, 1);
        let labels = Vec::from([Some("New Year".to_string()), Some("Feb".to_string())]);
        let axis = laid_out(
            AxisConfig::default()
                .with_avoid_first_last_clipping(true)
                .with_word_wrap(0.5),
            labels,
        );
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_axis_labels(s));
        let first = surface.texts().next().unwrap();
        // Wrapped at 25px: "New" / "Year", widest line 24px.
        assert_eq!(first.origin.x, 52.0);
        assert_eq!(first.max_width, Some(25.0));
    }

    #[test]
    fn labels_carry_rotation_font_and_alignment() {
        let font = TextStyle::new(12.0);
        let axis = laid_out(
            AxisConfig::default()
                .with_label_rotation(45.0)
                .with_font(font.clone())
                .with_text_fill(css::DARK_GREEN),
            months(2),
        );
        let vp = viewport(0, 1);
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_axis_labels(s));
        for text in surface.texts() {
            assert_eq!(text.angle, 45.0);
            assert_eq!(text.style, font);
            assert_eq!(text.anchor, TextAlign::Right);
            assert_eq!(text.paragraph_align, TextAlign::Center);
            assert_eq!(text.max_width, None);
        }
    }

    #[test]
    fn formatter_rewrites_drawn_text() {
        let axis = laid_out(AxisConfig::default(), months(3))
            .with_formatter(|i: usize, label: &str, _: &Viewport| format!("{label} #{i}"));
        let vp = viewport(0, 2);
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_axis_labels(s));
        let texts: Vec<&str> = surface.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Jan #0", "Feb #1", "Mar #2"]);
    }

    #[test]
    fn limit_line_spans_content_and_places_label() {
        let mut axis = laid_out(AxisConfig::default(), months(5));
        let stroke = StrokeStyle::solid(css::RED, 2.0).with_dash(0.0, [4.0, 4.0]);
        axis.add_limit_line(
            LimitLine::new(2.0)
                .with_stroke(stroke.clone())
                .with_label("target")
                .with_offsets(5.0, 5.0),
        )
        .unwrap();
        axis.add_limit_line(
            LimitLine::new(2.0)
                .with_label("floor")
                .with_label_position(LimitLabelPosition::LeftBottom)
                .with_offsets(5.0, 5.0),
        )
        .unwrap();
        let vp = viewport(0, 4);
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_limit_lines(s));

        let lines: Vec<&Line> = surface.segments().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert_eq!(*line, Line::new((140.0, 20.0), (140.0, 260.0)));
        }
        let Some(DrawCommand::Stroke { brush, stroke: recorded, .. }) = surface.commands().get(1)
        else {
            panic!("expected the first limit line stroke");
        };
        assert_eq!(brush, &stroke.brush);
        assert_eq!(recorded, &stroke.to_stroke());

        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts[0].text, "target");
        assert_eq!(texts[0].origin, Point::new(147.0, 27.0));
        assert_eq!(texts[0].anchor, TextAlign::Left);
        // Bottom corner: content_bottom - 13pt line height - (2 + 5).
        assert_eq!(texts[1].text, "floor");
        assert_eq!(texts[1].origin.x, 133.0);
        assert!((texts[1].origin.y - 240.0).abs() < 1e-9);
        assert_eq!(texts[1].anchor, TextAlign::Right);
    }

    #[test]
    fn limit_labels_cover_every_corner() {
        let vp = viewport(0, 4);
        // Line at x = 140; xo = 2 (stroke) + 5, yo = 2 + 5; 13pt labels.
        let cases = [
            (LimitLabelPosition::LeftTop, 133.0, 27.0, TextAlign::Right),
            (LimitLabelPosition::LeftBottom, 133.0, 240.0, TextAlign::Right),
            (LimitLabelPosition::RightTop, 147.0, 27.0, TextAlign::Left),
            (LimitLabelPosition::RightBottom, 147.0, 240.0, TextAlign::Left),
        ];
        for (position, x, y, align) in cases {
            let mut axis = laid_out(AxisConfig::default(), months(5));
            axis.add_limit_line(
                LimitLine::new(2.0)
                    .with_label("limit")
                    .with_label_position(position)
                    .with_offsets(5.0, 5.0),
            )
            .unwrap();
            let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_limit_lines(s));
            let text = surface.texts().next().unwrap();
            assert_eq!(text.origin.x, x, "{position:?}");
            assert!((text.origin.y - y).abs() < 1e-9, "{position:?}");
            assert_eq!(text.anchor, align, "{position:?}");
            assert_eq!(text.paragraph_align, align, "{position:?}");
            assert_eq!(text.angle, 0.0, "{position:?}");
        }
    }

    #[test]
    fn limit_line_without_label_draws_only_the_line() {
        let mut axis = laid_out(AxisConfig::default(), months(5));
        axis.add_limit_line(LimitLine::new(1.0)).unwrap();
        axis.add_limit_line(LimitLine::new(3.0).with_label("off").with_enabled(false))
            .unwrap();
        let vp = viewport(0, 4);
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_limit_lines(s));
        assert_eq!(surface.segments().count(), 1);
        assert_eq!(surface.texts().count(), 0);
    }

    #[test]
    fn no_limit_lines_draws_nothing() {
        let axis = laid_out(AxisConfig::default(), months(5));
        let vp = viewport(0, 4);
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_limit_lines(s));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn every_pass_restores_surface_state() {
        let mut axis = laid_out(
            AxisConfig::default().with_label_position(LabelPosition::BothSided),
            months(5),
        );
        axis.add_limit_line(LimitLine::new(2.0).with_label("max")).unwrap();
        let vp = viewport(0, 4);
        let surface = record(&axis, &vp, slots(50.0), |r, s| r.render_all(s));
        assert_eq!(surface.depth(), 0);
        let saves = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Save))
            .count();
        assert_eq!(saves, 4);
        assert_eq!(surface.commands().first(), Some(&DrawCommand::Save));
        assert_eq!(surface.commands().last(), Some(&DrawCommand::Restore));
    }

    #[test]
    fn rendering_twice_records_identical_commands() {
        let mut axis = laid_out(
            AxisConfig::default()
                .with_avoid_first_last_clipping(true)
                .with_word_wrap(0.8)
                .with_label_rotation(-30.0),
            months(12),
        );
        axis.add_limit_line(LimitLine::new(4.5).with_label("launch")).unwrap();
        let vp = viewport(0, 11);
        let transform = slots(25.0);
        let first = record(&axis, &vp, transform, |r, s| r.render_all(s));
        let second = record(&axis, &vp, transform, |r, s| r.render_all(s));
        assert!(!first.commands().is_empty());
        assert_eq!(first, second);
    }
}
