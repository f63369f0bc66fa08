//! Render - framework-agnostic render tree
//!
//! Components build a [`Node`] tree; the rendering backend takes it from there.
//! [`Node::to_html`] and [`Node::to_json`] are the two built-in outputs.

mod context;
mod html;
mod node;

pub use context::*;
pub use node::*;
