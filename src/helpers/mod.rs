//! Helper Utilities
//!
//! Common utilities used across the views.

mod class_names;

pub use class_names::*;
