//! Embedded assets for navigation views
//!
//! Uses rust-embed to bundle the default style token sheet at compile time.

use rust_embed::RustEmbed;
use std::borrow::Cow;

use crate::error::{Error, Result};

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "styles/*.toml"]
pub struct Assets;

impl Assets {
    /// Load an embedded asset as UTF-8 text
    pub fn load_text(path: &str) -> Result<Cow<'static, str>> {
        let file = Self::get(path).ok_or_else(|| Error::MissingAsset {
            path: path.to_string(),
        })?;

        match file.data {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| Error::Invalid {
                    message: format!("Asset {path} is not UTF-8: {e}"),
                }),
            Cow::Owned(bytes) => String::from_utf8(bytes)
                .map(Cow::Owned)
                .map_err(|e| Error::Invalid {
                    message: format!("Asset {path} is not UTF-8: {e}"),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_token_sheet_is_embedded() {
        let text = Assets::load_text("styles/tokens.toml").expect("token sheet");
        assert!(text.contains("[navigation_main_layout]"));
        assert!(text.contains("[list]"));
    }

    #[test]
    fn test_missing_asset() {
        let result = Assets::load_text("styles/missing.toml");
        assert!(matches!(result, Err(Error::MissingAsset { .. })));
    }
}
