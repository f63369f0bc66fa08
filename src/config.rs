//! View Configuration
//!
//! Optional TOML file selecting the locale and an alternate token sheet:
//!
//! ```toml
//! locale = "ru"
//! token_sheet = "/etc/navigation-views/tokens.toml"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::CONFIG_ENV_VAR;
use crate::error::Result;
use crate::i18n::Locale;

/// Persisted view configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    locale: Option<String>,
    token_sheet: Option<PathBuf>,
}

impl ViewConfig {
    /// Load configuration from a TOML file; an empty file yields defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(&value)?)
    }

    /// Load the file named by `NAVIGATION_VIEWS_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    /// Set the locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale.as_str().to_string());
        self
    }

    /// Set the token sheet path
    pub fn with_token_sheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_sheet = Some(path.into());
        self
    }

    pub fn token_sheet(&self) -> Option<&Path> {
        self.token_sheet.as_deref()
    }

    /// Configured locale, or the system locale when none is set.
    /// Unsupported locale codes fall back to the default locale.
    pub fn resolve_locale(&self) -> Locale {
        match self.locale.as_deref().map(str::trim) {
            None | Some("") => Locale::from_system(),
            Some(code) => Locale::parse(code).unwrap_or_else(|| {
                warn!(locale = code, "Unsupported locale, using default");
                Locale::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("navigation-views.toml");
        std::fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(&dir, "locale = \"ru\"\ntoken_sheet = \"/tmp/tokens.toml\"\n");
        let config = ViewConfig::load(&path).expect("load config");

        assert_eq!(config.resolve_locale(), Locale::Ru);
        assert_eq!(config.token_sheet(), Some(Path::new("/tmp/tokens.toml")));
    }

    #[test]
    fn test_load_empty_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(&dir, "  \n");
        let config = ViewConfig::load(&path).expect("load config");

        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(&dir, "locale = [");
        let result = ViewConfig::load(&path);

        assert!(matches!(result, Err(crate::error::Error::TomlDe { .. })));
    }

    #[test]
    fn test_unsupported_locale_falls_back() {
        let config = ViewConfig {
            locale: Some("xx".to_string()),
            token_sheet: None,
        };
        assert_eq!(config.resolve_locale(), Locale::En);
    }

    #[test]
    fn test_builder() {
        let config = ViewConfig::default()
            .with_locale(Locale::Ru)
            .with_token_sheet("tokens.toml");
        assert_eq!(config.resolve_locale(), Locale::Ru);
        assert_eq!(config.token_sheet(), Some(Path::new("tokens.toml")));
    }
}
