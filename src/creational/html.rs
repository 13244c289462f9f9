//! Builder for a small HTML element tree.
//!
//! Compare with assembling the markup by hand:
//!
//! ```
//! let words = ["hello", "world"];
//! let mut parts = vec!["<ul>".to_string()];
//! for w in words {
//!     parts.push(format!("  <li>{w}</li>"));
//! }
//! parts.push("</ul>".to_string());
//! assert_eq!(parts.join("\n"), "<ul>\n  <li>hello</li>\n  <li>world</li>\n</ul>");
//! ```
//!
//! This works for two list items but does not scale to nested structure.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlElement {
    pub name: String,
    pub text: String,
    pub elements: Vec<HtmlElement>,
}

impl HtmlElement {
    pub const INDENT_SIZE: usize = 2;

    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        HtmlElement {
            name: name.into(),
            text: text.into(),
            elements: Vec::new(),
        }
    }

    /// Start a builder rooted at an element called `root`.
    pub fn create(root: impl Into<String>) -> HtmlBuilder {
        HtmlBuilder::new(root)
    }

    fn render(&self, indent: usize, lines: &mut Vec<String>) {
        let pad = " ".repeat(indent * Self::INDENT_SIZE);
        lines.push(format!("{pad}<{}>", self.name));

        if !self.text.is_empty() {
            let text_pad = " ".repeat((indent + 1) * Self::INDENT_SIZE);
            lines.push(format!("{text_pad}{}", self.text));
        }

        for element in &self.elements {
            element.render(indent + 1, lines);
        }

        lines.push(format!("{pad}</{}>", self.name));
    }
}

impl fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        self.render(0, &mut lines);
        f.write_str(&lines.join("\n"))
    }
}

/// Reusable builder: methods borrow `&mut self`, so it can be cleared and
/// filled again after a build.
#[derive(Debug, Clone)]
pub struct HtmlBuilder {
    root_name: String,
    root: HtmlElement,
}

impl HtmlBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        let root_name = root_name.into();
        HtmlBuilder {
            root: HtmlElement::new(root_name.clone(), ""),
            root_name,
        }
    }

    pub fn add_child(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.root.elements.push(HtmlElement::new(name, text));
    }

    pub fn add_child_fluent(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.add_child(name, text);
        self
    }

    pub fn clear(&mut self) {
        self.root = HtmlElement::new(self.root_name.clone(), "");
    }

    pub fn build(&self) -> HtmlElement {
        self.root.clone()
    }
}

impl fmt::Display for HtmlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_WORLD: &str = "<ul>\n  <li>\n    hello\n  </li>\n  <li>\n    world\n  </li>\n</ul>";

    #[test]
    fn test_ordinary_builder() {
        let mut builder = HtmlElement::create("ul");
        builder.add_child("li", "hello");
        builder.add_child("li", "world");

        assert_eq!(builder.to_string(), HELLO_WORLD);
    }

    #[test]
    fn test_fluent_builder_after_clear() {
        let mut builder = HtmlElement::create("ul");
        builder.add_child("li", "stale");
        builder.clear();

        builder
            .add_child_fluent("li", "hello")
            .add_child_fluent("li", "world");

        assert_eq!(builder.to_string(), HELLO_WORLD);
    }

    #[test]
    fn test_builders_do_not_share_roots() {
        let mut list = HtmlElement::create("ul");
        list.add_child("li", "only here");
        let para = HtmlElement::create("p");

        assert_eq!(list.build().elements.len(), 1);
        assert!(para.build().elements.is_empty());
        assert_eq!(para.to_string(), "<p>\n</p>");
    }

    #[test]
    fn test_nested_elements_indent_per_level() {
        let mut item = HtmlElement::new("li", "");
        item.elements.push(HtmlElement::new("b", "deep"));
        let mut root = HtmlElement::new("ul", "");
        root.elements.push(item);

        assert_eq!(
            root.to_string(),
            "<ul>\n  <li>\n    <b>\n      deep\n    </b>\n  </li>\n</ul>"
        );
    }
}
