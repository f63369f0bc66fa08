//! Render context shared by every render call.

use std::sync::Arc;

use crate::config::ViewConfig;
use crate::error::Result;
use crate::i18n::{self, Locale};
use crate::theme::{ModuleTokens, StyleTokens};

/// Read-only inputs every component renders against
#[derive(Debug, Clone)]
pub struct RenderContext {
    tokens: Arc<StyleTokens>,
    locale: Locale,
}

impl RenderContext {
    /// Create a context from a loaded token sheet
    pub fn new(tokens: Arc<StyleTokens>, locale: Locale) -> Self {
        Self { tokens, locale }
    }

    /// Context with the embedded token sheet and the default locale
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Arc::new(StyleTokens::embedded()?), Locale::default()))
    }

    /// Build a context from view configuration
    pub fn from_config(config: &ViewConfig) -> Result<Self> {
        let tokens = match config.token_sheet() {
            Some(path) => StyleTokens::load(path)?,
            None => StyleTokens::embedded()?,
        };
        Ok(Self::new(Arc::new(tokens), config.resolve_locale()))
    }

    /// Same tokens, different locale
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            tokens: Arc::clone(&self.tokens),
            locale,
        }
    }

    pub fn tokens(&self) -> &StyleTokens {
        &self.tokens
    }

    /// Shortcut for `self.tokens().module(name)`
    pub fn module<'a>(&'a self, name: &'a str) -> ModuleTokens<'a> {
        self.tokens.module(name)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate a key in this context's locale
    pub fn t(&self, key: &str) -> String {
        i18n::t(self.locale, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RenderContext>();
    }

    #[test]
    fn test_with_locale_shares_tokens() {
        let cx = RenderContext::embedded().expect("embedded context");
        let ru = cx.with_locale(Locale::Ru);
        assert_eq!(ru.locale(), Locale::Ru);
        assert!(std::ptr::eq(cx.tokens(), ru.tokens()));
        assert_eq!(ru.t("navigation.delivery"), "Доставка");
    }

    #[test]
    fn test_from_default_config_uses_embedded_sheet() {
        let config = ViewConfig::default().with_locale(Locale::En);
        let cx = RenderContext::from_config(&config).expect("context");
        assert_eq!(cx.locale(), Locale::En);
        assert!(cx.tokens().has_module("list"));
    }

    #[test]
    fn test_concurrent_renders_share_one_context() {
        use crate::components::layout::{ListSize, NavigationMainLayout};
        use crate::render::RenderOnce;

        let cx = RenderContext::embedded().expect("embedded context");
        let render = || {
            NavigationMainLayout::new("menu")
                .class_name("extra")
                .list_size(ListSize::Medium)
                .render(&cx)
        };

        let outputs: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(render)).collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("render thread"))
                .collect()
        });

        let expected = render();
        assert_eq!(outputs.len(), 4);
        assert!(outputs.iter().all(|node| *node == expected));
    }
}
