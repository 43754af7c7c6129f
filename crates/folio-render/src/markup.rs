//! Structured markup nodes and their HTML serializer.
//!
//! Cards are assembled as a tree of [`Node`]s instead of concatenated
//! strings, so tests can inspect structure and the serializer is the only
//! place that deals with escaping.
//!
//! # Example
//!
//! ```rust
//! use folio_render::markup::{Element, to_html};
//!
//! let link = Element::new("a")
//!     .attr("href", "https://example.com/?a=1&b=2")
//!     .class("btn")
//!     .text("Go <now>");
//!
//! assert_eq!(
//!     to_html(&link.into()),
//!     r#"<a href="https://example.com/?a=1&amp;b=2" class="btn">Go &lt;now&gt;</a>"#
//! );
//! ```

use std::fmt::Write;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Escaped character data.
    Text(String),
}

/// An element: tag name, ordered attributes, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set the `class` attribute.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append a child in place.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child nodes in order.
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Depth-first list of descendant elements with the given tag.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        find_into(&self.children, tag, &mut found);
        found
    }

    /// First descendant element with the given tag.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.find_all(tag).into_iter().next()
    }

    /// Whether the element's class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(&e.children, out),
        }
    }
}

fn find_into<'a>(nodes: &'a [Node], tag: &str, found: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(e) = node {
            if e.tag == tag {
                found.push(e);
            }
            find_into(&e.children, tag, found);
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Serialize a node to HTML.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize a sequence of sibling nodes to HTML.
pub fn nodes_to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(e) => {
            out.push('<');
            out.push_str(&e.tag);
            for (name, value) in &e.attrs {
                // Writing to a String cannot fail.
                let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&e.tag.as_str()) {
                return;
            }
            for child in &e.children {
                write_node(child, out);
            }
            let _ = write!(out, "</{}>", e.tag);
        }
    }
}

/// Escape character data.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nested_serialization() {
        let node: Node = Element::new("div")
            .class("card")
            .child(Element::new("h5").text("Title"))
            .child(Element::new("p").text("Body"))
            .into();
        assert_eq!(
            to_html(&node),
            r#"<div class="card"><h5>Title</h5><p>Body</p></div>"#
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let node: Node = Element::new("div")
            .child(Element::new("img").attr("src", "a.png"))
            .child(Element::new("br"))
            .into();
        assert_eq!(to_html(&node), r#"<div><img src="a.png"><br></div>"#);
    }

    #[test]
    fn test_attribute_escaping() {
        let node: Node = Element::new("img")
            .attr("alt", r#"Tom's "best" <app>"#)
            .into();
        assert_eq!(
            to_html(&node),
            r#"<img alt="Tom&#39;s &quot;best&quot; &lt;app&gt;">"#
        );
    }

    #[test]
    fn test_attr_replaces_existing() {
        let e = Element::new("a").attr("href", "one").attr("href", "two");
        assert_eq!(e.get_attr("href"), Some("two"));
        assert_eq!(to_html(&e.into()), r#"<a href="two"></a>"#);
    }

    #[test]
    fn test_find_and_text_content() {
        let e = Element::new("div")
            .child(Element::new("span").class("html me-1").text("HTML"))
            .child(Element::new("p").child(Element::new("span").text("inner")));
        let spans = e.find_all("span");
        assert_eq!(spans.len(), 2);
        assert!(spans[0].has_class("html"));
        assert!(!spans[1].has_class("html"));
        assert_eq!(e.text_content(), "HTMLinner");
        assert!(e.find("a").is_none());
    }

    #[test]
    fn test_nodes_to_html_concatenates_siblings() {
        let nodes = vec![Node::from("a"), Element::new("br").into(), Node::from("b")];
        assert_eq!(nodes_to_html(&nodes), "a<br>b");
    }

    proptest! {
        #[test]
        fn test_escaped_text_never_opens_tags(s in "\\PC*") {
            let html = to_html(&Node::Text(s));
            prop_assert!(!html.contains('<'));
            prop_assert!(!html.contains('>'));
        }

        #[test]
        fn test_escaped_attr_stays_quoted(s in "\\PC*") {
            let html = to_html(&Element::new("a").attr("title", s).into());
            // Exactly the two delimiting quotes survive.
            prop_assert_eq!(html.matches('"').count(), 2);
        }
    }
}
