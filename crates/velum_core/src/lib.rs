//! # VELUM Core
//!
//! Foundation types for the VELUM toolkit. Everything here is pure data
//! and math with no rendering dependencies:
//!
//! - [`unit`]: measurement units ([`Unit`], [`Vec2`], [`Point`], [`Size`])
//!   with a dynamic variant that resolves against a parent's resolved
//!   size in an explicit layout-pass step, plus the configuration enums
//!   shared across the toolkit.
//! - [`animation`]: the scalar animation primitive ([`Easing`],
//!   [`Animation`]) that drives time-based interpolation for colors and
//!   components. One animation owns one scalar; composite values own one
//!   animation per component.
//!
//! The toolkit is tick-driven and single-threaded: a host loop advances
//! animations with elapsed nanoseconds once per frame, resolves layout
//! when it is dirty, then renders. Nothing in this crate blocks or
//! spawns.

pub mod animation;
pub mod unit;

pub use animation::{Animation, Easing};
pub use unit::{Direction, Point, Size, SlideDirection, TextAlign, Unit, Vec2};
