//! HTML string rendering.
//!
//! A single synchronous pass over the node tree. Classes join
//! space-separated into one `class="…"` attribute in call order; the `id`
//! attribute renders first, then `class`, then the remaining attributes in
//! insertion order. Text and attribute values are escaped; [`Node::Raw`]
//! passes through verbatim. Void elements render without a closing tag.

use crate::element::{Element, Node};

fn escape_text(input: &str, out: &mut String) {
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}

fn escape_attribute(input: &str, out: &mut String) {
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}

impl Element {
    /// Renders this element and its subtree to an HTML string.
    pub fn render(&self) -> String {
        log::trace!(
            "rendering <{}> with {} classes",
            self.tag(),
            self.classes().len()
        );
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }

    fn render_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag());
        if let Some(id) = self.element_id() {
            out.push_str(" id=\"");
            escape_attribute(id, out);
            out.push('"');
        }
        if !self.classes().is_empty() {
            out.push_str(" class=\"");
            let mut first = true;
            for class in self.classes() {
                if !first {
                    out.push(' ');
                }
                escape_attribute(class, out);
                first = false;
            }
            out.push('"');
        }
        for (name, value) in self.attributes() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attribute(value, out);
            out.push('"');
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in self.children() {
            child.render_to(out);
        }
        out.push_str("</");
        out.push_str(self.tag());
        out.push('>');
    }
}

impl Node {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }

    fn render_to(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.render_to(out),
            Self::Text(text) => escape_text(text, out),
            Self::Raw(markup) => out.push_str(markup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::tags;

    #[test]
    fn test_empty_element() {
        assert_eq!(tags::div().render(), "<div></div>");
    }

    #[test]
    fn test_attribute_order_is_id_class_rest() {
        let el = tags::a("/about")
            .id("nav-link")
            .class("p-2")
            .text("About");
        assert_eq!(
            el.render(),
            r#"<a id="nav-link" class="p-2" href="/about">About</a>"#
        );
    }

    #[test]
    fn test_text_is_escaped_raw_is_not() {
        let el = tags::p().text("1 < 2 & 3 > 2");
        assert_eq!(el.render(), "<p>1 &lt; 2 &amp; 3 &gt; 2</p>");

        let el = Node::Raw("<em>kept</em>".into());
        assert_eq!(el.render(), "<em>kept</em>");
    }

    #[test]
    fn test_attribute_values_escape_quotes() {
        let el = tags::div().attribute("title", r#"say "hi""#);
        assert_eq!(el.render(), r#"<div title="say &quot;hi&quot;"></div>"#);
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        assert_eq!(tags::img("/logo.png").render(), r#"<img src="/logo.png">"#);
    }

    #[test]
    fn test_nested_tree() {
        let el = tags::div().child(tags::span().text("a")).text("b");
        assert_eq!(el.render(), "<div><span>a</span>b</div>");
    }
}
