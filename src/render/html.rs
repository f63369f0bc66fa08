//! HTML output for render trees.

use super::{Element, Node};
use crate::error::Result;

impl Node {
    /// Serialize the tree to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, self);
        out
    }

    /// Serialize the tree to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text { text } => escape_into(out, text),
        Node::Fragment { children } => {
            for child in children {
                write_node(out, child);
            }
        }
        Node::Empty => {}
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag);
    if let Some(class_name) = &element.class_name {
        write_attribute(out, "class", class_name);
    }
    for (name, value) in &element.attributes {
        write_attribute(out, name, value);
    }
    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::render::{div, IntoNode, Node};

    #[test]
    fn test_html_nesting_and_attribute_order() {
        let html = div()
            .attr("role", "row-section")
            .class("a b")
            .child(div().class("inner").child("text"))
            .into_node()
            .to_html();
        assert_eq!(
            html,
            r#"<div class="a b" role="row-section"><div class="inner">text</div></div>"#
        );
    }

    #[test]
    fn test_html_escapes_text_and_attributes() {
        let html = div()
            .class(r#"x" onclick="y"#)
            .child("<b>&</b>")
            .into_node()
            .to_html();
        assert_eq!(
            html,
            r#"<div class="x&quot; onclick=&quot;y">&lt;b&gt;&amp;&lt;/b&gt;</div>"#
        );
    }

    #[test]
    fn test_empty_and_fragment() {
        assert_eq!(Node::Empty.to_html(), "");
        assert_eq!(vec!["a", "b"].into_node().to_html(), "ab");
    }
}
