//! Navigation Main Layout
//!
//! A row section holding a menu slot on top and a sized list below it.
//!
//! ```text
//! row-section (root + extra class)
//! └── inner
//!     ├── menu (menu + menu_top) → menu content
//!     └── list (list list_top + list + size)
//!         └── list inner
//!             └── item → content → title ("Delivery")
//! ```

use crate::class_names;
use crate::constants::{
    DELIVERY_KEY, LIST_CLASS, LIST_INNER_CLASS, LIST_ITEM_CLASS, LIST_MODULE,
    NAVIGATION_MAIN_LAYOUT_MODULE, ROW_CONTAINER_TOPOLOGY, ROW_SECTION_ROLE,
};
use crate::render::{IntoNode, Node, RenderContext, RenderOnce, div};

/// List size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSize {
    Small,
    Medium,
    Large,
}

impl ListSize {
    /// Parse a size token. Only `S`, `M` and `L` are recognized.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "S" => Some(ListSize::Small),
            "M" => Some(ListSize::Medium),
            "L" => Some(ListSize::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListSize::Small => "S",
            ListSize::Medium => "M",
            ListSize::Large => "L",
        }
    }

    /// Slot of the size class in the list style module
    pub fn slot(&self) -> &'static str {
        match self {
            ListSize::Small => "list_s",
            ListSize::Medium => "list_m",
            ListSize::Large => "list_l",
        }
    }
}

/// Navigation layout with a menu slot and a sized list
#[derive(Debug)]
pub struct NavigationMainLayout {
    class_name: Option<String>,
    menu: Node,
    list_size: Option<ListSize>,
}

impl NavigationMainLayout {
    /// Create a layout around the given menu content
    pub fn new(menu: impl IntoNode) -> Self {
        Self {
            class_name: None,
            menu: menu.into_node(),
            list_size: None,
        }
    }

    /// Extra class appended to the root container only
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the list size
    pub fn list_size(mut self, list_size: impl Into<Option<ListSize>>) -> Self {
        self.list_size = list_size.into();
        self
    }

    /// Set the list size from a raw token; unrecognized tokens clear it
    pub fn list_size_token(mut self, token: &str) -> Self {
        self.list_size = ListSize::parse(token);
        if self.list_size.is_none() {
            tracing::debug!(token, "Unrecognized list size, rendering without size class");
        }
        self
    }
}

impl RenderOnce for NavigationMainLayout {
    fn render(self, cx: &RenderContext) -> Node {
        let layout = cx.module(NAVIGATION_MAIN_LAYOUT_MODULE);
        let list = cx.module(LIST_MODULE);
        let size = self.list_size;

        tracing::trace!(size = size.map(|s| s.as_str()), "Rendering navigation main layout");

        // Only the selected size slot is looked up.
        let size_class = size.map(|size| list.class(size.slot()));
        let list_class = class_names!(LIST_CLASS, list.class("list"), size_class);

        let item = div()
            .class(class_names!(
                list.class("item"),
                layout.class("menu__item"),
                LIST_ITEM_CLASS
            ))
            .child(
                div().class(list.class("content")).child(
                    div()
                        .class(list.class("title"))
                        .child(cx.t(DELIVERY_KEY)),
                ),
            );

        div()
            .class(class_names!(layout.class("root"), self.class_name.as_ref()))
            .attr("role", ROW_SECTION_ROLE)
            .attr("data-topology", ROW_CONTAINER_TOPOLOGY)
            .child(
                div()
                    .class(layout.class("inner"))
                    .child(
                        div()
                            .class(class_names!(layout.class("menu"), layout.class("menu_top")))
                            .child(self.menu),
                    )
                    .child(
                        div().class(list_class).child(
                            div()
                                .class(class_names!(list.class("inner"), LIST_INNER_CLASS))
                                .child(item),
                        ),
                    ),
            )
            .into_node()
    }
}
