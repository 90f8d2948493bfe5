// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category x-axis demos for `catax_axis`.
//!
//! Writes `catax_demo.html`. Set `RUST_LOG=catax_axis=trace` to see layout and skipped labels.

mod html;
mod svg;

use catax_axis::{
    AxisConfig, AxisLayoutEngine, ConfigError, LabelPosition, LimitLabelPosition, LimitLine,
    StrokeStyle, TextMeasurer, TextStyle, Viewport, XAxis, XAxisRenderer, average_label_length,
};
use kurbo::{Affine, Rect, Size};
use peniko::Color;
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;

const CHART: Size = Size::new(480.0, 200.0);
const CONTENT: Rect = Rect::new(40.0, 40.0, 440.0, 160.0);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "catax_demo=info".into()),
        )
        .init();

    let sections = vec![
        months_demo()?,
        rotated_wrapped_demo()?,
        limit_lines_demo()?,
        scrolled_stride_demo()?,
        formatter_demo()?,
    ];

    let html = html::render_report("Catax x-axis demo", &sections);
    std::fs::write("catax_demo.html", html)?;
    tracing::info!(sections = sections.len(), "wrote catax_demo.html");
    Ok(())
}

fn demo_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(catax_text_parley::ParleyTextMeasurer::new())
    }

    #[cfg(not(feature = "parley"))]
    {
        Box::new(catax_axis::HeuristicTextMeasurer)
    }
}

fn owned(labels: &[&str]) -> Vec<Option<String>> {
    labels.iter().map(|l| Some((*l).to_string())).collect()
}

/// A transform that spreads `count` slots over the content width, centered in each slot.
fn fit_transform(count: usize) -> Affine {
    let slot = CONTENT.width() / count.max(1) as f64;
    Affine::new([slot, 0.0, 0.0, 1.0, CONTENT.x0 + slot / 2.0, 0.0])
}

fn render_section(
    title: &str,
    mut axis: XAxis,
    labels: Vec<Option<String>>,
    transform: Affine,
) -> html::HtmlSection {
    let measurer = demo_measurer();
    let measurer: &dyn TextMeasurer = &*measurer;
    let count = labels.len();

    let engine = AxisLayoutEngine::new(measurer);
    engine.compute_label_bounds(&mut axis, average_label_length(&labels), labels);
    let zoom = transform.as_coeffs()[0] * count as f64 / CONTENT.width();
    engine.fit_label_stride(&mut axis, CONTENT.width(), zoom);

    let viewport = Viewport::from_content_rect(CHART, CONTENT).with_visible_range(
        transform,
        count,
        axis.label_stride(),
    );

    let mut surface = svg::SvgSurface::new(CHART, measurer);
    XAxisRenderer::new(&axis, &viewport, transform, measurer).render_all(&mut surface);
    tracing::info!(
        title,
        labels = count,
        stride = axis.label_stride(),
        min = viewport.min_visible_index,
        max = viewport.max_visible_index,
        "rendered axis"
    );

    html::HtmlSection {
        title: title.to_string(),
        svg: surface.finish(),
    }
}

fn months_demo() -> Result<html::HtmlSection, ConfigError> {
    let labels = owned(&[
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ]);
    let axis = XAxis::new(
        AxisConfig::default()
            .with_label_position(LabelPosition::Bottom)
            .with_auto_stride(true)
            .with_avoid_first_last_clipping(true),
    )?;
    let transform = fit_transform(labels.len());
    Ok(render_section(
        "Months, bottom labels, fitted stride",
        axis,
        labels,
        transform,
    ))
}

fn rotated_wrapped_demo() -> Result<html::HtmlSection, ConfigError> {
    let labels = owned(&[
        "North America",
        "South America",
        "Western Europe",
        "Eastern Europe",
        "Middle East",
        "Sub-Saharan Africa",
    ]);
    let axis = XAxis::new(
        AxisConfig::default()
            .with_label_position(LabelPosition::BothSided)
            .with_label_rotation(-20.0)
            .with_word_wrap(0.9)
            .with_font(TextStyle::new(9.0))
            .with_grid_line_style(
                StrokeStyle::solid(Color::from_rgba8(160, 160, 160, 230), 0.5)
                    .with_dash(0.0, [3.0, 3.0]),
            ),
    )?;
    let transform = fit_transform(labels.len());
    Ok(render_section(
        "Regions, both sides, rotated and wrapped",
        axis,
        labels,
        transform,
    ))
}

fn limit_lines_demo() -> Result<html::HtmlSection, ConfigError> {
    let labels = owned(&["Q1", "Q2", "Q3", "Q4", "Q5", "Q6", "Q7", "Q8"]);
    let mut axis = XAxis::new(AxisConfig::default().with_label_position(LabelPosition::Bottom))?;
    axis.add_limit_line(LimitLine::new(2.5).with_label("launch"))?;
    axis.add_limit_line(
        LimitLine::new(5.5)
            .with_label("code freeze")
            .with_label_position(LimitLabelPosition::LeftBottom)
            .with_stroke(StrokeStyle::solid(css::STEEL_BLUE, 1.0).with_dash(0.0, [6.0, 3.0]))
            .with_text_fill(css::STEEL_BLUE),
    )?;
    let transform = fit_transform(labels.len());
    Ok(render_section("Quarters with limit lines", axis, labels, transform))
}

fn scrolled_stride_demo() -> Result<html::HtmlSection, ConfigError> {
    let labels: Vec<Option<String>> = (1..=60)
        .map(|day| (day % 7 != 0).then(|| format!("D{day}")))
        .collect();
    let axis = XAxis::new(
        AxisConfig::default()
            .with_label_position(LabelPosition::TopInside)
            .with_label_stride(3),
    )?;
    // 20px per day, scrolled so day 17 sits at the content's left edge.
    let transform = Affine::new([20.0, 0.0, 0.0, 1.0, CONTENT.x0 - 16.0 * 20.0, 0.0]);
    Ok(render_section(
        "Scrolled daily axis, stride 3, weekly gaps",
        axis,
        labels,
        transform,
    ))
}

fn formatter_demo() -> Result<html::HtmlSection, ConfigError> {
    let labels = owned(&["alpha", "beta", "gamma", "delta", "epsilon"]);
    let axis = XAxis::new(
        AxisConfig::default()
            .with_label_position(LabelPosition::BottomInside)
            .with_text_fill(css::DARK_SLATE_GRAY),
    )?
    .with_formatter(|index: usize, label: &str, _: &Viewport| {
        format!("{}. {}", index + 1, label.to_uppercase())
    });
    let transform = fit_transform(labels.len());
    Ok(render_section("Custom label formatter", axis, labels, transform))
}
