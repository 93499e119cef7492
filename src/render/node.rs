// src/render/node.rs
//
// Abstract node descriptors. The renderer produces these; `Node::to_html`
// serializes them and the browser mount step materializes them.

use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Trusted static markup (inline SVG icons). Never built from document data.
    Markup(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<&'static str>,
    /// Attribute order is preserved.
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Direct element children, skipping text and markup.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Depth-first search over this element and its descendants.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for child in self.elements() {
            child.find_all(pred, out);
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
                Node::Markup(_) => {}
            }
        }
        out
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => escape_into(t, out),
            Node::Markup(m) => out.push_str(m),
            Node::Element(e) => {
                let _ = write!(out, "<{}", e.tag);
                if !e.classes.is_empty() {
                    out.push_str(" class=\"");
                    escape_into(&e.classes.join(" "), out);
                    out.push('"');
                }
                for (name, value) in &e.attributes {
                    let _ = write!(out, " {}=\"", name);
                    escape_into(value, out);
                    out.push('"');
                }
                out.push('>');
                for child in &e.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", e.tag);
            }
        }
    }
}

pub fn nodes_to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
