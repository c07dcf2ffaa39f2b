//! # VELUM UI
//!
//! Retained-mode component toolkit: mutable animatable colors, a
//! drawable contract, and a tree that drives the per-frame sequence.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      FRAME PIPELINE                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  Removal Sweep → Update → Layout (dirty) → Render Pass   │
//! │       ↓            ↓           ↓               ↓         │
//! │  Exit Gating   Color Ticks  Unit Resolve  Renderer Seam  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Colors are the animated heart of the toolkit: a [`MutableColor`] is
//! plain, gradient or chroma, recolors over time through per-channel
//! animations, and holds its component in the tree until an exit
//! recolor finishes. Rendering goes through the [`Renderer`] trait so
//! backends and tests swap in freely.

pub mod color;
pub mod component;
pub mod error;
pub mod event;
pub mod render;
pub mod theme;

pub use color::{Argb, Blend, Color, ColorKind, MutableColor};
pub use component::{Block, ComponentTree, Drawable, DrawableId, DrawableState};
pub use error::{BlendWarning, ColorError, ColorResult, ThemeError};
pub use event::FocusedEvent;
pub use render::{RecordingRenderer, RenderCommand, Renderer};
pub use theme::Theme;
