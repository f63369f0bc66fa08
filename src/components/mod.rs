//! Components - Reusable View Components
//!
//! Pure components: each render maps its props and a [`RenderContext`] to a
//! node tree, with no I/O and no shared mutable state.
//!
//! [`RenderContext`]: crate::render::RenderContext

pub mod layout;
pub mod primitives;
