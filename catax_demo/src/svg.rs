// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`DrawSurface`] that writes SVG.

use catax_axis::{DrawSurface, TextAlign, TextMeasurer, TextRun, wrap_lines};
use kurbo::{Line, Size, Stroke};
use peniko::Brush;

/// Accumulates SVG elements; `save`/`restore` map to `<g>` groups.
///
/// Text runs are laid out as blocks: the widest wrapped line sets the block width, the
/// run's `anchor` places the block relative to `origin.x`, and `paragraph_align` places
/// each line within the block. Lines stack downward from `origin.y`; rotation pivots on
/// `origin`.
#[derive(Debug)]
pub(crate) struct SvgSurface<M> {
    measurer: M,
    size: Size,
    body: String,
    depth: usize,
}

impl<M: TextMeasurer> SvgSurface<M> {
    pub(crate) fn new(size: Size, measurer: M) -> Self {
        Self {
            measurer,
            size,
            body: String::new(),
            depth: 0,
        }
    }

    /// Closes any open groups and returns the SVG document.
    pub(crate) fn finish(mut self) -> String {
        while self.depth > 0 {
            self.restore();
        }
        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.size.width,
            h = self.size.height,
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl<M: TextMeasurer> DrawSurface for SvgSurface<M> {
    fn save(&mut self) {
        self.body.push_str("<g>\n");
        self.depth += 1;
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            return;
        }
        self.body.push_str("</g>\n");
        self.depth -= 1;
    }

    fn stroke_segments(&mut self, segments: &[Line], brush: &Brush, stroke: &Stroke) {
        for segment in segments {
            self.body.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                segment.p0.x, segment.p0.y, segment.p1.x, segment.p1.y,
            ));
            write_paint_attr(&mut self.body, "stroke", brush);
            self.body
                .push_str(&format!(r#" stroke-width="{}""#, stroke.width));
            if !stroke.dash_pattern.is_empty() {
                let dashes: Vec<String> = stroke.dash_pattern.iter().map(f64::to_string).collect();
                self.body.push_str(&format!(
                    r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
                    dashes.join(","),
                    stroke.dash_offset,
                ));
            }
            self.body.push_str("/>\n");
        }
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        let lines = wrap_lines(&self.measurer, run.text, run.style, run.max_width);
        let line_height = self.measurer.line_height(run.style);
        let block_width = lines
            .iter()
            .map(|line| self.measurer.measure(line, run.style).advance_width)
            .fold(0.0, f64::max);
        let (x, y) = (run.origin.x, run.origin.y);
        let block_left = x - block_width * align_fraction(run.anchor);
        let line_x = block_left + block_width * align_fraction(run.paragraph_align);

        self.body.push_str(&format!(
            r#"<text x="{line_x}" y="{y}" font-size="{}" font-family="{}" dominant-baseline="hanging""#,
            run.style.font_size,
            escape_xml(run.style.font_family.as_css_family()),
        ));
        self.body.push_str(match run.paragraph_align {
            TextAlign::Left => r#" text-anchor="start""#,
            TextAlign::Center => r#" text-anchor="middle""#,
            TextAlign::Right => r#" text-anchor="end""#,
        });
        if run.angle != 0.0 {
            self.body
                .push_str(&format!(r#" transform="rotate({} {x} {y})""#, run.angle));
        }
        write_paint_attr(&mut self.body, "fill", run.fill);
        self.body.push('>');
        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { line_height };
            self.body.push_str(&format!(
                r#"<tspan x="{line_x}" dy="{dy}">{}</tspan>"#,
                escape_xml(line)
            ));
        }
        self.body.push_str("</text>\n");
    }
}

/// Share of the block width that lies left of an alignment point.
fn align_fraction(align: TextAlign) -> f64 {
    match align {
        TextAlign::Left => 0.0,
        TextAlign::Center => 0.5,
        TextAlign::Right => 1.0,
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
