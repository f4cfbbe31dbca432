//! Display tree
//!
//! Renderers build a tree of typed nodes instead of splicing markup strings.
//! The tree serializes two ways: to escaped HTML via `Display`, and to JSON
//! via serde for clients that paint it themselves.

use serde::Serialize;
use std::fmt::{self, Write};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Elements whose text children are written verbatim
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A node in the display tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

/// A tag with attributes and children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<Attr>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// A single attribute; insertion order is preserved in output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

/// Start building an element
pub fn el(tag: &str) -> Element {
    Element {
        tag: tag.to_string(),
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A Font Awesome icon (`<i class="fa fa-…">`)
pub fn icon(name: &str) -> Element {
    el("i").class("fa").class(name)
}

impl Element {
    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attrs.push(Attr {
                name: name.to_string(),
                value,
            }),
        }
        self
    }

    /// Add a class to the `class` attribute
    pub fn class(mut self, class: &str) -> Self {
        if class.is_empty() {
            return self;
        }
        match self.attrs.iter_mut().find(|a| a.name == "class") {
            Some(existing) if existing.value.is_empty() => existing.value = class.to_string(),
            Some(existing) => {
                existing.value.push(' ');
                existing.value.push_str(class);
            }
            None => self.attrs.push(Attr {
                name: "class".to_string(),
                value: class.to_string(),
            }),
        }
        self
    }

    /// Add a class only when `enabled`
    pub fn class_if(self, class: &str, enabled: bool) -> Self {
        if enabled {
            self.class(class)
        } else {
            self
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child
    pub fn text(self, text: impl ToString) -> Self {
        self.child(Node::text(text))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|v| v.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

impl Node {
    pub fn text(text: impl ToString) -> Self {
        Node::Text {
            text: text.to_string(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text { .. } => None,
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element(e) => {
                for child in &e.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All elements in document order matching `pred`, including this one
    pub fn find_all<F>(&self, pred: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.walk(&pred, &mut found);
        found
    }

    fn walk<'a, F>(&'a self, pred: &F, found: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        if let Node::Element(e) = self {
            if pred(e) {
                found.push(e);
            }
            for child in &e.children {
                child.walk(pred, found);
            }
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|e| e.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|e| e.tag == tag)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find_all(|e| e.get_attr("id") == Some(id))
            .into_iter()
            .next()
    }

    /// Serialize to HTML
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::text(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text { text: s }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text { text } => write_escaped(f, text),
            Node::Element(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for attr in &self.attrs {
            write!(f, " {}=\"", attr.name)?;
            write_escaped(f, &attr.value)?;
            f.write_char('"')?;
        }
        f.write_char('>')?;

        if self.is_void() {
            return Ok(());
        }

        let raw = RAW_TEXT_ELEMENTS.contains(&self.tag.as_str());
        for child in &self.children {
            match child {
                Node::Text { text } if raw => f.write_str(text)?,
                _ => fmt::Display::fmt(child, f)?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_nested() {
        let node: Node = el("div")
            .class("card")
            .attr("data-count", 156)
            .child(el("span").class("counter").text("0"))
            .into();

        assert_eq!(
            node.to_html(),
            r#"<div class="card" data-count="156"><span class="counter">0</span></div>"#
        );
    }

    #[test]
    fn test_text_and_attributes_escaped() {
        let node: Node = el("p")
            .attr("title", "a \"quoted\" <title>")
            .text("<script>alert('x')</script> & more")
            .into();

        assert_eq!(
            node.to_html(),
            "<p title=\"a &quot;quoted&quot; &lt;title&gt;\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more</p>"
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let node: Node = el("input").attr("type", "checkbox").attr("checked", "").into();
        assert_eq!(node.to_html(), r#"<input type="checkbox" checked="">"#);
    }

    #[test]
    fn test_script_text_not_escaped() {
        let node: Node = el("script").text("if (a > b && c) { go('x'); }").into();
        assert_eq!(node.to_html(), "<script>if (a > b && c) { go('x'); }</script>");
    }

    #[test]
    fn test_class_accumulates() {
        let e = el("span")
            .class("status-badge")
            .class("active")
            .class_if("hidden", false);
        assert_eq!(e.get_attr("class"), Some("status-badge active"));
        assert!(e.has_class("active"));
        assert!(!e.has_class("hidden"));
    }

    #[test]
    fn test_attr_replaces() {
        let e = el("a").attr("href", "/").attr("href", "/?section=reports");
        assert_eq!(e.attrs.len(), 1);
        assert_eq!(e.get_attr("href"), Some("/?section=reports"));
    }

    #[test]
    fn test_queries() {
        let node: Node = el("ul")
            .child(el("li").class("report-item").id("first").text("One"))
            .child(el("li").class("report-item").text("Two"))
            .child(el("li").text("Three"))
            .into();

        assert_eq!(node.find_by_class("report-item").len(), 2);
        assert_eq!(node.find_by_tag("li").len(), 3);
        assert_eq!(node.find_by_id("first").unwrap().text_content(), "One");
        assert_eq!(node.text_content(), "OneTwoThree");
    }

    #[test]
    fn test_json_shape() {
        let node: Node = el("b").class("x").text("hi").into();
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["kind"], "element");
        assert_eq!(json["tag"], "b");
        assert_eq!(json["attrs"][0]["name"], "class");
        assert_eq!(json["children"][0]["kind"], "text");
        assert_eq!(json["children"][0]["text"], "hi");
    }

    #[test]
    fn test_icon() {
        let node: Node = icon("fa-edit").into();
        assert_eq!(node.to_html(), r#"<i class="fa fa-edit"></i>"#);
    }
}
