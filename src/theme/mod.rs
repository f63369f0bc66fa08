//! Theme - style tokens consumed by the views

mod tokens;

pub use tokens::*;
