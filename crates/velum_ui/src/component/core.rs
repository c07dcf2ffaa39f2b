//! Core component state and the drawable contract.

use velum_core::{Point, Size};

use crate::event::FocusedEvent;
use crate::render::Renderer;

/// Unique identifier for a drawable in a [`crate::ComponentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(pub u64);

impl DrawableId {
    /// Creates a new drawable ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Common component state: where the component sits and how big it is.
///
/// `sized` starts as `None` for components that compute their size
/// during layout; the size accessors treat reading it before then as a
/// programmer error.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableState {
    /// Position in the parent's coordinate space.
    pub at: Point,
    /// Extent, once known. `None` until set explicitly or computed by
    /// the layout pass.
    pub sized: Option<Size>,
}

impl DrawableState {
    /// Creates state at a position with no size yet.
    #[must_use]
    pub const fn new(at: Point) -> Self {
        Self { at, sized: None }
    }

    /// Creates state with both a position and a size.
    #[must_use]
    pub const fn with_size(at: Point, sized: Size) -> Self {
        Self {
            at,
            sized: Some(sized),
        }
    }

    /// Returns true if the position or size carries a dynamic unit.
    #[must_use]
    pub fn has_dynamic(&self) -> bool {
        self.at.has_dynamic() || self.sized.is_some_and(|sized| sized.has_dynamic())
    }
}

/// Base trait for everything a [`crate::ComponentTree`] can host.
///
/// The tree drives each drawable through a fixed per-frame sequence:
/// `update`, then (when layout is dirty) `calculate_bounds`, then
/// `pre_render` / `render` / `post_render` between the renderer's frame
/// markers.
pub trait Drawable {
    /// Returns the component's state.
    fn state(&self) -> &DrawableState;

    /// Returns mutable access to the component's state.
    fn state_mut(&mut self) -> &mut DrawableState;

    /// Advances time-driven state by `delta_nanos`.
    ///
    /// Called every frame, before layout and rendering.
    fn update(&mut self, delta_nanos: u64) {
        let _ = delta_nanos;
    }

    /// Recomputes position and size for this layout pass.
    ///
    /// The default resolves dynamic units against the parent and keeps
    /// everything else as-is; components that derive their size from
    /// content override this.
    fn calculate_bounds(&mut self, parent_size: Option<&Size>) {
        self.do_dynamic_size(parent_size);
    }

    /// Resolves any dynamic units in the position and size against the
    /// parent's size.
    ///
    /// Safe to call repeatedly; resolution is idempotent.
    ///
    /// # Panics
    ///
    /// Panics if this component uses dynamic units but `parent_size` is
    /// `None`. A parent without a set size cannot anchor a fraction.
    fn do_dynamic_size(&mut self, parent_size: Option<&Size>) {
        if !self.state().has_dynamic() {
            return;
        }
        let Some(parent) = parent_size else {
            panic!("dynamic units only work on parents with a set size");
        };
        let (parent_w, parent_h) = (parent.width(), parent.height());

        let state = self.state_mut();
        state.at.resolve(parent_w, parent_h);
        if let Some(sized) = state.sized.as_mut() {
            sized.resolve(parent_w, parent_h);
        }
    }

    /// X position in the parent's coordinate space.
    fn x(&self) -> f32 {
        self.state().at.x()
    }

    /// Y position in the parent's coordinate space.
    fn y(&self) -> f32 {
        self.state().at.y()
    }

    /// Width of this component.
    ///
    /// # Panics
    ///
    /// Panics if the size has not been set or computed yet.
    fn width(&self) -> f32 {
        self.state()
            .sized
            .as_ref()
            .map_or_else(
                || panic!("drawable has no size, but should have one by this point"),
                Size::width,
            )
    }

    /// Height of this component.
    ///
    /// # Panics
    ///
    /// Panics if the size has not been set or computed yet.
    fn height(&self) -> f32 {
        self.state()
            .sized
            .as_ref()
            .map_or_else(
                || panic!("drawable has no size, but should have one by this point"),
                Size::height,
            )
    }

    /// Returns true if the point lies inside this component's bounds.
    /// All four edges are inclusive.
    fn is_inside(&self, x: f32, y: f32) -> bool {
        let (sx, sy) = (self.x(), self.y());
        x >= sx && x <= sx + self.width() && y >= sy && y <= sy + self.height()
    }

    /// Scales position and size multiplicatively, for DPI or window
    /// scale changes.
    ///
    /// # Panics
    ///
    /// Panics if the size has not been set yet; an unsized component
    /// has no geometry to rescale.
    fn rescale(&mut self, scale_x: f32, scale_y: f32) {
        let state = self.state_mut();
        let Some(sized) = state.sized.as_mut() else {
            panic!("cannot rescale a drawable that has no size");
        };
        sized.scale(scale_x, scale_y);
        state.at.scale(scale_x, scale_y);
    }

    /// Hook called just before `render` each frame.
    fn pre_render(&mut self, renderer: &mut dyn Renderer) {
        let _ = renderer;
    }

    /// Draws this component.
    fn render(&mut self, renderer: &mut dyn Renderer);

    /// Hook called just after `render` each frame.
    fn post_render(&mut self, renderer: &mut dyn Renderer) {
        let _ = renderer;
    }

    /// Handles a keyboard event while this component holds focus.
    /// Returns true if the event was consumed.
    fn handle_focused_event(&mut self, event: FocusedEvent) -> bool {
        let _ = event;
        false
    }

    /// Returns true once this component consents to removal. The tree
    /// additionally waits for [`Drawable::has_animating_color`] to
    /// clear, so exit animations finish on screen.
    fn can_be_removed(&self) -> bool {
        true
    }

    /// Returns true while any color owned by this component has a
    /// recolor animation in flight.
    fn has_animating_color(&self) -> bool {
        false
    }

    /// Hook fired by the tree when this component is added.
    fn on_added(&mut self) {}

    /// Hook fired by the tree just before this component is dropped.
    fn on_removed(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::{Unit, Vec2};

    struct Probe {
        state: DrawableState,
    }

    impl Drawable for Probe {
        fn state(&self) -> &DrawableState {
            &self.state
        }
        fn state_mut(&mut self) -> &mut DrawableState {
            &mut self.state
        }
        fn render(&mut self, _renderer: &mut dyn Renderer) {}
    }

    fn probe(at: Point, sized: Option<Size>) -> Probe {
        Probe {
            state: DrawableState { at, sized },
        }
    }

    #[test]
    fn test_is_inside_edges_are_inclusive() {
        let p = probe(Vec2::px(10.0, 10.0), Some(Vec2::px(20.0, 20.0)));
        assert!(p.is_inside(10.0, 10.0));
        assert!(p.is_inside(30.0, 30.0));
        assert!(p.is_inside(20.0, 15.0));
        assert!(!p.is_inside(9.9, 10.0));
        assert!(!p.is_inside(30.1, 30.0));
    }

    #[test]
    fn test_dynamic_size_resolves_against_parent() {
        let mut p = probe(
            Vec2::new(Unit::dynamic(0.25), Unit::px(5.0)),
            Some(Vec2::new(Unit::dynamic(0.5), Unit::dynamic(1.0))),
        );
        let parent = Vec2::px(400.0, 300.0);
        p.calculate_bounds(Some(&parent));

        assert!((p.x() - 100.0).abs() < f32::EPSILON);
        assert!((p.y() - 5.0).abs() < f32::EPSILON);
        assert!((p.width() - 200.0).abs() < f32::EPSILON);
        assert!((p.height() - 300.0).abs() < f32::EPSILON);
    }

    #[test]
    #[should_panic(expected = "dynamic units only work on parents with a set size")]
    fn test_dynamic_size_without_parent_panics() {
        let mut p = probe(Vec2::new(Unit::dynamic(0.5), Unit::px(0.0)), None);
        p.do_dynamic_size(None);
    }

    #[test]
    fn test_fixed_units_ignore_missing_parent() {
        let mut p = probe(Vec2::px(1.0, 2.0), Some(Vec2::px(3.0, 4.0)));
        // No dynamic units: a missing parent is fine.
        p.do_dynamic_size(None);
        assert!((p.width() - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    #[should_panic(expected = "drawable has no size")]
    fn test_width_before_size_panics() {
        let p = probe(Vec2::px(0.0, 0.0), None);
        let _ = p.width();
    }

    #[test]
    #[should_panic(expected = "cannot rescale")]
    fn test_rescale_without_size_panics() {
        let mut p = probe(Vec2::px(0.0, 0.0), None);
        p.rescale(2.0, 2.0);
    }

    #[test]
    fn test_rescale_scales_position_and_size() {
        let mut p = probe(Vec2::px(10.0, 20.0), Some(Vec2::px(30.0, 40.0)));
        p.rescale(2.0, 0.5);
        assert!((p.x() - 20.0).abs() < f32::EPSILON);
        assert!((p.y() - 10.0).abs() < f32::EPSILON);
        assert!((p.width() - 60.0).abs() < f32::EPSILON);
        assert!((p.height() - 20.0).abs() < f32::EPSILON);
    }
}
