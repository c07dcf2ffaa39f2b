//! Input events delivered to the focused component.

/// A keyboard event routed to whichever component currently holds
/// focus. The key is a backend-defined scancode; the toolkit only
/// carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusedEvent {
    /// A key went down.
    KeyPressed {
        /// Backend scancode of the key.
        key: u32,
    },
    /// A key came back up.
    KeyReleased {
        /// Backend scancode of the key.
        key: u32,
    },
}

impl FocusedEvent {
    /// The scancode this event carries, regardless of direction.
    #[must_use]
    pub const fn key(&self) -> u32 {
        match *self {
            Self::KeyPressed { key } | Self::KeyReleased { key } => key,
        }
    }

    /// Returns true for the key-down half of a press/release pair.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        matches!(self, Self::KeyPressed { .. })
    }
}
