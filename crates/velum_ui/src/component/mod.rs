//! Components: the drawable contract, built-in components and the tree
//! that hosts them.

mod block;
mod core;
mod tree;

pub use block::Block;
pub use self::core::{Drawable, DrawableId, DrawableState};
pub use tree::ComponentTree;
