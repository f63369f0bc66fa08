//! Generic container attributes accepted by primitive components.

use std::fmt;

/// Click event passed to click handlers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// Number of consecutive clicks
    pub click_count: usize,
}

type ClickHandler = Box<dyn Fn(&ClickEvent) + Send + Sync + 'static>;

/// Standard attributes of a container element
#[derive(Default)]
pub struct ContainerAttributes {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub style: Option<String>,
    pub role: Option<String>,
    pub title: Option<String>,
    pub tab_index: Option<i32>,
    pub hidden: bool,
    /// `aria-*` attributes, name without the prefix
    pub aria: Vec<(String, String)>,
    /// `data-*` attributes, name without the prefix
    pub data: Vec<(String, String)>,
    pub on_click: Option<ClickHandler>,
}

impl ContainerAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Add an `aria-*` attribute
    pub fn aria(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.aria.push((name.into(), value.into()));
        self
    }

    /// Add a `data-*` attribute
    pub fn data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((name.into(), value.into()));
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Number of attributes that were set
    pub fn len(&self) -> usize {
        [
            self.id.is_some(),
            self.class_name.is_some(),
            self.style.is_some(),
            self.role.is_some(),
            self.title.is_some(),
            self.tab_index.is_some(),
            self.hidden,
            self.on_click.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
            + self.aria.len()
            + self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ContainerAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerAttributes")
            .field("id", &self.id)
            .field("class_name", &self.class_name)
            .field("style", &self.style)
            .field("role", &self.role)
            .field("title", &self.title)
            .field("tab_index", &self.tab_index)
            .field("hidden", &self.hidden)
            .field("aria", &self.aria)
            .field("data", &self.data)
            .field("on_click", &self.on_click.as_ref().map(|_| "Fn(&ClickEvent)"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_set_attributes() {
        assert!(ContainerAttributes::new().is_empty());

        let attrs = ContainerAttributes::new()
            .id("a")
            .hidden(true)
            .aria("label", "x")
            .data("k", "v")
            .on_click(|_| {});
        assert_eq!(attrs.len(), 5);
        assert!(format!("{attrs:?}").contains("Fn(&ClickEvent)"));
    }
}
