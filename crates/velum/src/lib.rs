//! # VELUM
//!
//! Retained-mode UI toolkit with time-driven color animation.
//!
//! This crate is the front door: it re-exports [`velum_core`] (units,
//! animation, configuration enums) and [`velum_ui`] (colors, the
//! drawable contract, the component tree and the renderer seam). Start
//! with [`ComponentTree`] for the frame loop and [`MutableColor`] for
//! animated color.

pub use velum_core::{
    Animation, Direction, Easing, Point, Size, SlideDirection, TextAlign, Unit, Vec2,
};
pub use velum_ui::{
    Argb, Blend, BlendWarning, Block, Color, ColorError, ColorKind, ColorResult, ComponentTree, Drawable,
    DrawableId, DrawableState, FocusedEvent, MutableColor, RecordingRenderer, RenderCommand,
    Renderer, Theme, ThemeError,
};
