//! Native Block Component
//!
//! Fixed two-level block. It takes the usual container attributes but does
//! not render any of them yet.

use super::ContainerAttributes;
use crate::constants::{NATIVE_CLASS, NATIVE_INNER_CLASS, NATIVE_TEXT};
use crate::render::{IntoNode, Node, RenderContext, RenderOnce, div};

/// A static block with a nested inner block
#[derive(Debug, Default)]
pub struct NativeBlock {
    attributes: ContainerAttributes,
}

impl NativeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container attributes
    pub fn attributes(mut self, attributes: ContainerAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl RenderOnce for NativeBlock {
    fn render(self, _cx: &RenderContext) -> Node {
        // TODO: forward id, class name and handlers once the block is used interactively.
        if !self.attributes.is_empty() {
            tracing::trace!(
                count = self.attributes.len(),
                "NativeBlock ignores container attributes"
            );
        }

        div()
            .class(NATIVE_CLASS)
            .child(div().class(NATIVE_INNER_CLASS).child(NATIVE_TEXT))
            .into_node()
    }
}
