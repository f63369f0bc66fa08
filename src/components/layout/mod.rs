//! Layout Components
//!
//! Page-level layouts composed from style module tokens.

mod navigation_main;

pub use navigation_main::*;
