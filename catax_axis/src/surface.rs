// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface the axis renderer paints onto.
//!
//! Renderers only need four primitives: state save/restore, stroked line segments, and
//! (possibly wrapped and rotated) text. Any 2D backend can implement [`DrawSurface`]; this
//! module also ships [`RecordingSurface`], a headless backend that records the calls.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use catax_text::{TextAlign, TextStyle};
use kurbo::{Line, Point, Stroke};
use peniko::Brush;

/// A text draw request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextRun<'a> {
    /// Text to draw; may contain `\n`.
    pub text: &'a str,
    /// Anchor point in scene coordinates (top of the text block).
    pub origin: Point,
    /// Rotation around `origin`, in degrees.
    pub angle: f64,
    /// Horizontal placement of the block relative to `origin`.
    pub anchor: TextAlign,
    /// Alignment of lines within the block.
    pub paragraph_align: TextAlign,
    /// Font.
    pub style: &'a TextStyle,
    /// Fill paint.
    pub fill: &'a Brush,
    /// Wrap width; `None` draws each `\n`-separated line unwrapped.
    pub max_width: Option<f64>,
}

/// A 2D drawing backend.
pub trait DrawSurface {
    /// Pushes the current drawing state.
    fn save(&mut self);

    /// Pops the drawing state pushed by the matching [`DrawSurface::save`].
    fn restore(&mut self);

    /// Strokes each segment independently.
    fn stroke_segments(&mut self, segments: &[Line], brush: &Brush, stroke: &Stroke);

    /// Draws a text run.
    fn draw_text(&mut self, run: &TextRun<'_>);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn save(&mut self) {
        (**self).save();
    }

    fn restore(&mut self) {
        (**self).restore();
    }

    fn stroke_segments(&mut self, segments: &[Line], brush: &Brush, stroke: &Stroke) {
        (**self).stroke_segments(segments, brush, stroke);
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        (**self).draw_text(run);
    }
}

/// Saves the surface on creation and restores it when dropped.
pub(crate) struct SurfaceScope<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> SurfaceScope<'a, S> {
    pub(crate) fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> Deref for SurfaceScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for SurfaceScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for SurfaceScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// An owned copy of a [`TextRun`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedText {
    /// Text.
    pub text: String,
    /// Anchor point.
    pub origin: Point,
    /// Rotation in degrees.
    pub angle: f64,
    /// Block placement.
    pub anchor: TextAlign,
    /// Line alignment.
    pub paragraph_align: TextAlign,
    /// Font.
    pub style: TextStyle,
    /// Fill paint.
    pub fill: Brush,
    /// Wrap width.
    pub max_width: Option<f64>,
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`DrawSurface::save`].
    Save,
    /// [`DrawSurface::restore`].
    Restore,
    /// [`DrawSurface::stroke_segments`].
    Stroke {
        /// Segments.
        segments: Vec<Line>,
        /// Paint.
        brush: Brush,
        /// Width and dashes.
        stroke: Stroke,
    },
    /// [`DrawSurface::draw_text`].
    Text(RecordedText),
}

/// A headless [`DrawSurface`] that records every call.
///
/// Useful as a test double, and for replaying axis output into another renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    depth: usize,
}

impl RecordingSurface {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recording empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Current save depth; zero when every save was restored.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// All recorded stroked segments, flattened.
    pub fn segments(&self) -> impl Iterator<Item = &Line> {
        self.commands.iter().flat_map(|c| match c {
            DrawCommand::Stroke { segments, .. } => segments.as_slice(),
            _ => &[][..],
        })
    }

    /// All recorded text draws.
    pub fn texts(&self) -> impl Iterator<Item = &RecordedText> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn stroke_segments(&mut self, segments: &[Line], brush: &Brush, stroke: &Stroke) {
        self.commands.push(DrawCommand::Stroke {
            segments: segments.to_vec(),
            brush: brush.clone(),
            stroke: stroke.clone(),
        });
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        self.commands.push(DrawCommand::Text(RecordedText {
            text: String::from(run.text),
            origin: run.origin,
            angle: run.angle,
            anchor: run.anchor,
            paragraph_align: run.paragraph_align,
            style: run.style.clone(),
            fill: run.fill.clone(),
            max_width: run.max_width,
        }));
    }
}
