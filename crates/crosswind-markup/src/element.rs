//! The HTML node tree.
//!
//! [`Element`] and [`Node`] are plain value types: styling and attribute
//! helpers consume `self` and return an extended copy, so chaining composes
//! by producing new values rather than mutating in place. The class list is
//! ordered and append-only - repeated style calls may duplicate a class, and
//! that is tolerated here (stylesheet-size optimization is not this layer's
//! job; later classes must never be silently deduplicated against earlier
//! ones that carry a different modifier scope).

/// An HTML element: tag, optional id, classes, attributes, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
    void: bool,
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data, escaped on render.
    Text(String),
    /// Pre-rendered markup, passed through verbatim.
    Raw(String),
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
            void: false,
        }
    }

    /// An element with no closing tag (`<img>`, `<br>`, ...).
    pub fn void(tag: &'static str) -> Self {
        Self {
            void: true,
            ..Self::new(tag)
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn is_void(&self) -> bool {
        self.void
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Appends one literal class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Appends a batch of classes, preserving their order.
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Constructors for the tags the styling surfaces are exercised with.
///
/// The wide element-wrapper surface (headings, lists, tables, forms, media)
/// lives above this crate; these few cover the common cases.
pub mod tags {
    use super::Element;

    pub fn div() -> Element {
        Element::new("div")
    }

    pub fn span() -> Element {
        Element::new("span")
    }

    pub fn p() -> Element {
        Element::new("p")
    }

    pub fn a(href: impl Into<String>) -> Element {
        Element::new("a").attribute("href", href)
    }

    pub fn button() -> Element {
        Element::new("button")
    }

    pub fn img(src: impl Into<String>) -> Element {
        Element::void("img").attribute("src", src)
    }
}
