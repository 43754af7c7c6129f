//! The output container that receives rendered cards.

use crate::markup::{Element, Node, nodes_to_html, to_html};

/// Default id of the projects container element.
pub const DEFAULT_CONTAINER_ID: &str = "projects-container";

/// Default class of the projects container element.
pub const DEFAULT_CONTAINER_CLASS: &str = "row";

/// A page element the renderer writes into.
///
/// Passed explicitly to the renderer; it only ever grows by
/// [`append`](Self::append) or is reset by [`clear`](Self::clear) /
/// [`replace_content`](Self::replace_content).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    class: String,
    children: Vec<Node>,
}

impl Container {
    /// Create an empty container.
    pub fn new(id: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
            children: Vec::new(),
        }
    }

    /// Element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remove all content.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Replace all content with `nodes`.
    pub fn replace_content(&mut self, nodes: Vec<Node>) {
        self.children = nodes;
    }

    /// Append one node after the existing content.
    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Current content in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in order, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Markup of the content only.
    pub fn inner_html(&self) -> String {
        nodes_to_html(&self.children)
    }

    /// Markup of the container element including its content.
    pub fn to_html(&self) -> String {
        let element = Element::new("div")
            .attr("id", self.id.as_str())
            .class(self.class.as_str())
            .children(self.children.iter().cloned());
        to_html(&element.into())
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID, DEFAULT_CONTAINER_CLASS)
    }
}
