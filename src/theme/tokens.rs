//! Style Tokens - class names keyed by style module and slot
//!
//! The token sheet is a TOML document with one table per style module:
//!
//! ```toml
//! [list]
//! list = "List_list__p3r7t"
//! list_l = "List_list_l__b8w1c"
//! ```
//!
//! Tokens are loaded once and never mutated afterwards, so a sheet can be
//! shared across threads behind an `Arc` without locking.

use std::collections::HashMap;
use std::path::Path;

use ahash::RandomState;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::assets::Assets;
use crate::constants::DEFAULT_TOKEN_SHEET;
use crate::error::Result;

type TokenMap<V> = HashMap<String, V, RandomState>;

/// Slot name → class name for one style module
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StyleModule {
    tokens: TokenMap<String>,
}

impl StyleModule {
    /// Look up a slot
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.tokens.get(slot).map(String::as_str)
    }

    /// Number of slots in this module
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the module has no slots
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Full token sheet: module name → [`StyleModule`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StyleTokens {
    modules: TokenMap<StyleModule>,
}

impl StyleTokens {
    /// Parse a token sheet from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let tokens: Self = toml::from_str(text)?;
        debug!(modules = tokens.modules.len(), "Parsed style token sheet");
        Ok(tokens)
    }

    /// Load the token sheet bundled with the crate
    pub fn embedded() -> Result<Self> {
        let text = Assets::load_text(DEFAULT_TOKEN_SHEET)?;
        Self::from_toml_str(&text)
    }

    /// Load a token sheet from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = ?path, "Loading style token sheet");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Get a view over one style module. Unknown modules resolve to an empty view.
    pub fn module<'a>(&'a self, name: &'a str) -> ModuleTokens<'a> {
        ModuleTokens {
            name,
            module: self.modules.get(name),
        }
    }

    /// Check whether a module exists in the sheet
    pub fn has_module(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }
}

/// Borrowed view over one style module
#[derive(Debug, Clone, Copy)]
pub struct ModuleTokens<'a> {
    name: &'a str,
    module: Option<&'a StyleModule>,
}

impl<'a> ModuleTokens<'a> {
    /// Module name this view was requested with
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Class name for a slot.
    ///
    /// Missing modules or slots yield an empty string, which class
    /// composition skips, so the render degrades instead of failing.
    pub fn class(&self, slot: &str) -> &'a str {
        match self.module.and_then(|module| module.get(slot)) {
            Some(class) => class,
            None => {
                warn!(module = self.name, slot, "Missing style token");
                ""
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SHEET: &str = r#"
[list]
list = "L_list"
list_l = "L_large"

[navigation_main_layout]
root = "N_root"
"#;

    #[test]
    fn test_parse_sheet() {
        let tokens = StyleTokens::from_toml_str(SHEET).expect("valid sheet");
        assert!(tokens.has_module("list"));
        assert_eq!(tokens.module("list").class("list"), "L_list");
        assert_eq!(tokens.module("navigation_main_layout").class("root"), "N_root");
    }

    #[test]
    fn test_missing_slot_and_module_are_empty() {
        let tokens = StyleTokens::from_toml_str(SHEET).expect("valid sheet");
        assert_eq!(tokens.module("list").class("list_m"), "");
        assert_eq!(tokens.module("unknown").class("root"), "");
        assert_eq!(tokens.module("unknown").name(), "unknown");
    }

    #[test]
    fn test_invalid_sheet_is_an_error() {
        let result = StyleTokens::from_toml_str("[list]\nlist = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_embedded_sheet_has_all_slots() {
        let tokens = StyleTokens::embedded().expect("embedded sheet");
        let list = tokens.module("list");
        for slot in ["list", "list_l", "list_m", "list_s", "inner", "item", "content", "title"] {
            assert!(!list.class(slot).is_empty(), "missing list.{slot}");
        }
        let layout = tokens.module("navigation_main_layout");
        for slot in ["root", "inner", "menu", "menu_top", "menu__item"] {
            assert!(!layout.class(slot).is_empty(), "missing navigation_main_layout.{slot}");
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SHEET.as_bytes()).expect("write sheet");
        let tokens = StyleTokens::load(file.path()).expect("load sheet");
        assert_eq!(tokens.module("list").class("list_l"), "L_large");
    }

    #[test]
    fn test_load_missing_file() {
        let result = StyleTokens::load("/definitely/not/here/tokens.toml");
        assert!(matches!(result, Err(crate::error::Error::Io { .. })));
    }
}
