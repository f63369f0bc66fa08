//! Primitive Components
//!
//! Basic building blocks and the attribute types they accept.

mod attributes;
mod native_block;

pub use attributes::*;
pub use native_block::*;
