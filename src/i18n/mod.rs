//! i18n - Internationalization Module
//!
//! Thin wrapper over `rust-i18n` with a typed locale.

use rust_i18n::t as translate;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Russian
    Ru,
}

impl Locale {
    /// Locale code as used by the translation files
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Parse a locale code such as `ru` or `ru-RU`; unknown languages yield `None`
    pub fn parse(code: &str) -> Option<Self> {
        let lang = code.split(['-', '_']).next().unwrap_or_default();
        match lang.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Detect the locale from the operating system, falling back to English
    pub fn from_system() -> Self {
        let current = locale_config::Locale::current().to_string();
        let locale = Self::parse(&current).unwrap_or_default();
        tracing::debug!(system = %current, locale = locale.as_str(), "Detected system locale");
        locale
    }
}

/// Translate a key, falling back to English when the locale lacks it
pub fn t(locale: Locale, key: &str) -> String {
    translate!(key, locale = locale.as_str()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_codes() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("ru-RU"), Some(Locale::Ru));
        assert_eq!(Locale::parse("RU_ru"), Some(Locale::Ru));
        assert_eq!(Locale::parse("zh-CN"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_translate_delivery() {
        assert_eq!(t(Locale::En, "navigation.delivery"), "Delivery");
        assert_eq!(t(Locale::Ru, "navigation.delivery"), "Доставка");
    }
}
