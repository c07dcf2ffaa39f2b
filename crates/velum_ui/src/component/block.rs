//! A solid or gradient-filled rectangle, the simplest component.

use velum_core::{Point, Size};

use crate::color::MutableColor;
use crate::component::{Drawable, DrawableState};
use crate::render::{fill_rect_with, Renderer};

/// A rectangle filled with a [`MutableColor`].
///
/// Blocks recolor, fade and cycle like any mutable color, and delay
/// their own removal until an in-flight recolor finishes.
#[derive(Debug)]
pub struct Block {
    /// Position and size.
    state: DrawableState,
    /// Fill color.
    color: MutableColor,
}

impl Block {
    /// Creates a block at a position with a size and fill color.
    #[must_use]
    pub const fn new(at: Point, sized: Size, color: MutableColor) -> Self {
        Self {
            state: DrawableState::with_size(at, sized),
            color,
        }
    }

    /// The fill color.
    #[must_use]
    pub const fn color(&self) -> &MutableColor {
        &self.color
    }

    /// Mutable access to the fill color, for recoloring.
    pub fn color_mut(&mut self) -> &mut MutableColor {
        &mut self.color
    }
}

impl Drawable for Block {
    fn state(&self) -> &DrawableState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DrawableState {
        &mut self.state
    }

    fn update(&mut self, delta_nanos: u64) {
        let _ = self.color.update(delta_nanos);
    }

    fn render(&mut self, renderer: &mut dyn Renderer) {
        let (x, y) = (self.x(), self.y());
        let (width, height) = (self.width(), self.height());
        fill_rect_with(renderer, x, y, width, height, &self.color);
    }

    fn has_animating_color(&self) -> bool {
        self.color.updating()
    }
}
