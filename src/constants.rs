//! View Constants
//!
//! Literal class names, attribute values and translation keys shared by the views.

/// Role given to the outermost row section container
pub const ROW_SECTION_ROLE: &str = "row-section";

/// Topology of the row section wrapping the navigation layout
pub const ROW_CONTAINER_TOPOLOGY: &str = "ROW_CONTAINER";

/// Global (unhashed) class names applied to the list next to the module tokens
pub const LIST_CLASS: &str = "list list_top";
pub const LIST_INNER_CLASS: &str = "list__inner";
pub const LIST_ITEM_CLASS: &str = "list__item";

/// Native block classes
pub const NATIVE_CLASS: &str = "native";
/// Underscore joins `native_inner`; `block` is a separate class
pub const NATIVE_INNER_CLASS: &str = "native_inner block";
pub const NATIVE_TEXT: &str = "Test2";

/// Style module names in the token sheet
pub const NAVIGATION_MAIN_LAYOUT_MODULE: &str = "navigation_main_layout";
pub const LIST_MODULE: &str = "list";

/// Translation key of the single list item title
pub const DELIVERY_KEY: &str = "navigation.delivery";

/// Environment variable pointing at a view config file
pub const CONFIG_ENV_VAR: &str = "NAVIGATION_VIEWS_CONFIG";

/// Path of the default token sheet inside the embedded assets
pub const DEFAULT_TOKEN_SHEET: &str = "styles/tokens.toml";
