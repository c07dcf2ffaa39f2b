//! The component tree: owns drawables and drives the frame loop.

use velum_core::Size;

use crate::component::{Drawable, DrawableId};
use crate::event::FocusedEvent;
use crate::render::Renderer;

/// One hosted drawable and its tree-side bookkeeping.
struct Entry {
    /// Identifier handed back to the caller at add time.
    id: DrawableId,
    /// The hosted component.
    drawable: Box<dyn Drawable>,
    /// Set by [`ComponentTree::request_remove`]; the entry leaves on
    /// the first frame the drawable consents and no color animates.
    removal_requested: bool,
}

/// Owns a flat set of drawables and runs the per-frame sequence:
/// removal sweep, update, layout (when dirty), then the render pass
/// between the renderer's frame markers.
pub struct ComponentTree {
    /// Hosted components in add order, which is also draw order.
    entries: Vec<Entry>,
    /// Next ID to hand out.
    next_id: u64,
    /// Root size dynamic units resolve against.
    viewport: Size,
    /// Component currently receiving focused events.
    focused: Option<DrawableId>,
    /// Set when positions or sizes may be stale.
    layout_dirty: bool,
}

impl ComponentTree {
    /// Creates an empty tree with a viewport size in pixels.
    #[must_use]
    pub const fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            viewport: Size::px(viewport_width, viewport_height),
            focused: None,
            layout_dirty: true,
        }
    }

    /// Number of hosted components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tree hosts no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a component, fires its added hook and returns its ID.
    pub fn add(&mut self, mut drawable: Box<dyn Drawable>) -> DrawableId {
        let id = DrawableId::new(self.next_id);
        self.next_id += 1;

        drawable.on_added();
        tracing::debug!(id = id.raw(), "component added");
        self.entries.push(Entry {
            id,
            drawable,
            removal_requested: false,
        });
        self.layout_dirty = true;
        id
    }

    /// Shared access to a hosted component.
    #[must_use]
    pub fn get(&self, id: DrawableId) -> Option<&dyn Drawable> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.drawable.as_ref())
    }

    /// Mutable access to a hosted component.
    pub fn get_mut(&mut self, id: DrawableId) -> Option<&mut (dyn Drawable + 'static)> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| entry.drawable.as_mut())
    }

    /// Requests removal of a component. The entry stays in the tree
    /// until it consents and its colors stop animating, so exit
    /// recolors play out on screen. Returns false for an unknown ID.
    pub fn request_remove(&mut self, id: DrawableId) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.removal_requested = true;
                true
            }
            None => false,
        }
    }

    /// Gives keyboard focus to a component. Returns false for an
    /// unknown ID, leaving focus unchanged.
    pub fn focus(&mut self, id: DrawableId) -> bool {
        if self.entries.iter().any(|entry| entry.id == id) {
            self.focused = Some(id);
            true
        } else {
            false
        }
    }

    /// Clears keyboard focus.
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Delivers a keyboard event to the focused component. Returns
    /// true if a component consumed it.
    pub fn dispatch_focused_event(&mut self, event: FocusedEvent) -> bool {
        let Some(id) = self.focused else {
            return false;
        };
        self.get_mut(id)
            .is_some_and(|drawable| drawable.handle_focused_event(event))
    }

    /// Resizes the viewport. Dynamic units re-resolve on the next
    /// frame's layout pass.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Size::px(width, height);
        self.layout_dirty = true;
    }

    /// Rescales the viewport and every component, for DPI or window
    /// scale changes.
    pub fn rescale(&mut self, scale_x: f32, scale_y: f32) {
        self.viewport.scale(scale_x, scale_y);
        for entry in &mut self.entries {
            entry.drawable.rescale(scale_x, scale_y);
        }
        self.layout_dirty = true;
    }

    /// Runs one frame: removal sweep, update, layout when dirty, then
    /// the render pass.
    pub fn frame(&mut self, delta_nanos: u64, renderer: &mut dyn Renderer) {
        self.sweep_removals();

        for entry in &mut self.entries {
            entry.drawable.update(delta_nanos);
        }

        if self.layout_dirty {
            for entry in &mut self.entries {
                entry.drawable.calculate_bounds(Some(&self.viewport));
            }
            self.layout_dirty = false;
        }

        renderer.begin_frame();
        for entry in &mut self.entries {
            entry.drawable.pre_render(renderer);
            entry.drawable.render(renderer);
            entry.drawable.post_render(renderer);
        }
        renderer.end_frame();
    }

    /// Drops every entry whose removal was requested, consented to and
    /// not held open by an animating color.
    fn sweep_removals(&mut self) {
        let focused = &mut self.focused;
        self.entries.retain_mut(|entry| {
            let leaving = entry.removal_requested
                && entry.drawable.can_be_removed()
                && !entry.drawable.has_animating_color();
            if leaving {
                entry.drawable.on_removed();
                if *focused == Some(entry.id) {
                    *focused = None;
                }
                tracing::debug!(id = entry.id.raw(), "component removed");
            }
            !leaving
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::{Easing, Vec2};

    use crate::color::Color;
    use crate::component::Block;
    use crate::render::RecordingRenderer;

    fn block() -> Box<Block> {
        Box::new(Block::new(
            Vec2::px(0.0, 0.0),
            Vec2::px(10.0, 10.0),
            Color::GRAY.to_mutable(),
        ))
    }

    #[test]
    fn test_add_and_remove() {
        let mut tree = ComponentTree::new(100.0, 100.0);
        let mut renderer = RecordingRenderer::new();

        let id = tree.add(block());
        assert_eq!(tree.len(), 1);
        assert!(tree.get(id).is_some());

        assert!(tree.request_remove(id));
        tree.frame(16, &mut renderer);
        assert!(tree.is_empty());
        assert!(tree.get(id).is_none());
    }

    #[test]
    fn test_removal_deferred_while_animating() {
        let mut tree = ComponentTree::new(100.0, 100.0);
        let mut renderer = RecordingRenderer::new();

        let mut fading = block();
        fading
            .color_mut()
            .recolor(Color::TRANSPARENT, Some(Easing::Linear), 1_000_000)
            .unwrap();
        let id = tree.add(fading);
        tree.request_remove(id);

        // Mid-animation: the entry stays.
        tree.frame(500_000, &mut renderer);
        assert_eq!(tree.len(), 1);

        // The animation finishes and reports completion...
        tree.frame(500_000, &mut renderer);
        tree.frame(1, &mut renderer);
        // ...and the following sweep drops the entry.
        tree.frame(1, &mut renderer);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let mut tree = ComponentTree::new(100.0, 100.0);
        assert!(!tree.request_remove(DrawableId::new(99)));
        assert!(!tree.focus(DrawableId::new(99)));
    }

    #[test]
    fn test_removal_clears_focus() {
        let mut tree = ComponentTree::new(100.0, 100.0);
        let mut renderer = RecordingRenderer::new();

        let id = tree.add(block());
        assert!(tree.focus(id));
        tree.request_remove(id);
        tree.frame(1, &mut renderer);

        assert!(!tree.dispatch_focused_event(FocusedEvent::KeyPressed { key: 1 }));
    }

    #[test]
    fn test_draw_order_follows_add_order() {
        let mut tree = ComponentTree::new(100.0, 100.0);
        let mut renderer = RecordingRenderer::new();

        tree.add(block());
        tree.add(Box::new(Block::new(
            Vec2::px(5.0, 5.0),
            Vec2::px(10.0, 10.0),
            Color::WHITE.to_mutable(),
        )));
        tree.frame(16, &mut renderer);

        assert_eq!(renderer.commands().len(), 2);
    }
}
