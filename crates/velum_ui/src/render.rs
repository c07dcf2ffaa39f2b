//! Rendering seam between the component tree and a graphics backend.
//!
//! Components do not draw pixels. They describe what to draw through
//! the [`Renderer`] trait, and a backend (or a test harness) decides
//! what that means.

use crate::color::{Argb, MutableColor};

/// The drawing surface components render into.
///
/// Implementations receive one `begin_frame` / `end_frame` pair per
/// tree frame, with all drawing calls in between.
pub trait Renderer {
    /// Called once before any drawing in a frame.
    fn begin_frame(&mut self) {}

    /// Called once after all drawing in a frame.
    fn end_frame(&mut self) {}

    /// Fills an axis-aligned rectangle with a solid color.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Argb);

    /// Fills an axis-aligned rectangle with a two-color gradient.
    fn fill_gradient_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color1: Argb,
        color2: Argb,
        blend: crate::color::Blend,
    );
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    /// A solid rectangle.
    Rect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
        /// Fill color.
        color: Argb,
    },
    /// A gradient-filled rectangle.
    GradientRect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
        /// Endpoint 1 color.
        color1: Argb,
        /// Endpoint 2 color.
        color2: Argb,
        /// Blend geometry.
        blend: crate::color::Blend,
    },
}

/// A renderer that records commands instead of drawing them.
///
/// Used by tests and by backends that replay command lists.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Commands recorded for the current frame.
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// The commands recorded since the last `begin_frame`.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) {
        self.commands.clear();
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Argb) {
        self.commands.push(RenderCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_gradient_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color1: Argb,
        color2: Argb,
        blend: crate::color::Blend,
    ) {
        self.commands.push(RenderCommand::GradientRect {
            x,
            y,
            width,
            height,
            color1,
            color2,
            blend,
        });
    }
}

/// Fills a rectangle from a [`MutableColor`], dispatching to the
/// gradient path when the color has two endpoints.
pub fn fill_rect_with(
    renderer: &mut dyn Renderer,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: &MutableColor,
) {
    match (color.argb2(), color.blend()) {
        (Some(color2), Some(blend)) => {
            renderer.fill_gradient_rect(x, y, width, height, color.argb1(), color2, blend);
        }
        _ => renderer.fill_rect(x, y, width, height, color.argb()),
    }
}
