// Licensed under the Apache-2.0 license

//! A small typed HTML document tree.
//!
//! Generated markup is assembled as a tree of nodes and serialized once at
//! the end of a render. Building a tree instead of concatenating strings
//! means every opened element is closed by construction, text escaping
//! happens in exactly one place, and table structure can be asserted on
//! directly in tests.

use std::fmt::Write;

/// Element tags rendered inline with their siblings instead of on their own
/// indented line.
const INLINE_TAGS: &[&str] = &["b", "strong", "em", "i", "span", "br"];

/// One node in the document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Plain text, escaped during serialization.
    Text(String),
    /// A pre-escaped fragment emitted verbatim (translator output, style
    /// sheets).
    Raw(String),
    /// An HTML comment.
    Comment(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }

    pub fn raw(markup: impl Into<String>) -> Node {
        Node::Raw(markup.into())
    }

    pub fn comment(text: impl Into<String>) -> Node {
        Node::Comment(text.into())
    }

    fn is_inline(&self) -> bool {
        match self {
            Node::Element(element) => INLINE_TAGS.contains(&element.tag),
            Node::Text(_) | Node::Raw(_) => true,
            Node::Comment(_) => false,
        }
    }

    fn render_into(&self, output: &mut String, depth: usize) {
        match self {
            Node::Element(element) => element.render_into(output, depth),
            Node::Text(text) => output.push_str(&escape(text)),
            Node::Raw(markup) => output.push_str(markup),
            Node::Comment(text) => {
                write!(output, "<!-- {text} -->").unwrap();
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Node {
        Node::Element(element)
    }
}

/// An element with a tag, attributes and children.
///
/// Built with chained calls:
///
/// ```
/// use regmap_generator::doc::Element;
///
/// let cell = Element::new("td").attr("colspan", "5").text("spanning cell");
/// assert_eq!(cell.render(), "<td colspan=\"5\">spanning cell</td>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Element {
        Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Element {
        self.attrs.push((name, value.into()));
        self
    }

    /// Add a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Element {
        self.children.push(node.into());
        self
    }

    /// Add a text child.
    pub fn text(self, text: impl Into<String>) -> Element {
        self.child(Node::Text(text.into()))
    }

    /// Serialize the subtree rooted at this element.
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output, 0);
        output
    }

    fn render_into(&self, output: &mut String, depth: usize) {
        output.push('<');
        output.push_str(self.tag);
        for (name, value) in &self.attrs {
            write!(output, " {name}=\"{}\"", escape(value)).unwrap();
        }
        output.push('>');

        if self.children.iter().all(Node::is_inline) {
            // Text-level content stays on one line so no whitespace is
            // introduced inside phrasing content.
            for child in &self.children {
                child.render_into(output, depth);
            }
        } else {
            for child in &self.children {
                output.push('\n');
                for _ in 0..=depth {
                    output.push_str("  ");
                }
                child.render_into(output, depth + 1);
            }
            output.push('\n');
            for _ in 0..depth {
                output.push_str("  ");
            }
        }

        write!(output, "</{}>", self.tag).unwrap();
    }
}

/// Escape text for embedding in element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
