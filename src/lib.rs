//! Navigation Views Library
//!
//! View components that render to a framework-agnostic node tree: a
//! navigation layout with a menu slot and a sized list, and a static
//! native block. Class names come from a style token sheet and visible
//! text from the translation files.

rust_i18n::i18n!("locales", fallback = "en");

pub mod assets;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod render;
pub mod theme;
