//! Render output tree
//!
//! Every slot and component renders to a [`Node`]. The tree is deliberately
//! small: text leaves, tagged elements with children, fragments and the empty
//! node produced by hidden slots.

use serde::Serialize;
use std::fmt;

/// Rendered output of a component
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Renders nothing
    #[default]
    Empty,
    Text {
        text: String,
    },
    Element(Element),
    Fragment {
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment {
            children: children.into_iter().collect(),
        }
    }

    /// True when the node produces no output at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Empty => true,
            Node::Text { .. } | Node::Element(_) => false,
            Node::Fragment { children } => children.iter().all(Node::is_empty),
        }
    }

    /// Concatenation of all text leaves, depth first.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Empty => {}
            Node::Text { text } => out.push_str(text),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Node::Fragment { children } => children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// HTML-like markup; fragments and empty nodes leave no trace.
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text { text }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => Ok(()),
            Node::Text { text } => write_escaped(f, text),
            Node::Element(el) => write!(f, "{el}"),
            Node::Fragment { children } => children.iter().try_for_each(|c| write!(f, "{c}")),
        }
    }
}

/// Tagged element with ordered children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.tag)?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '&' => f.write_str("&amp;")?,
            '"' => f.write_str("&quot;")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}
