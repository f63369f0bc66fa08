//! Render tree nodes and the traits components use to build them.

use serde::Serialize;

use super::RenderContext;

/// A node in the render tree handed to the rendering backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Container element
    Element(Element),
    /// Plain text
    Text { text: String },
    /// Several sibling nodes without a wrapper
    Fragment { children: Vec<Node> },
    /// Nothing
    #[default]
    Empty,
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    /// Get the element if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// A container element with a composed class name, attributes and children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Create a `div` element
pub fn div() -> Element {
    Element::new("div")
}

impl Element {
    /// Create an element with the given tag
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class_name: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the class name
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Append an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl IntoNode) -> Self {
        self.children.push(child.into_node());
        self
    }

    /// Append several children
    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoNode::into_node));
        self
    }

    /// Look up an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child at `index`, if it is an element
    pub fn child_element(&self, index: usize) -> Option<&Element> {
        self.children.get(index).and_then(Node::as_element)
    }
}

/// Anything that can be placed into the render tree as-is
pub trait IntoNode {
    fn into_node(self) -> Node;
}

impl IntoNode for Node {
    fn into_node(self) -> Node {
        self
    }
}

impl IntoNode for Element {
    fn into_node(self) -> Node {
        Node::Element(self)
    }
}

impl IntoNode for &str {
    fn into_node(self) -> Node {
        Node::text(self)
    }
}

impl IntoNode for String {
    fn into_node(self) -> Node {
        Node::Text { text: self }
    }
}

impl<T: IntoNode> IntoNode for Option<T> {
    fn into_node(self) -> Node {
        self.map_or(Node::Empty, IntoNode::into_node)
    }
}

impl<T: IntoNode> IntoNode for Vec<T> {
    fn into_node(self) -> Node {
        Node::Fragment {
            children: self.into_iter().map(IntoNode::into_node).collect(),
        }
    }
}

/// A component consumed by a single render into a node tree
pub trait RenderOnce {
    fn render(self, cx: &RenderContext) -> Node;
}
