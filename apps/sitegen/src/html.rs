//! Small HTML element tree used by the block templates.
//!
//! Tag and attribute names are `&'static str`, so only template code can choose
//! them. Text children and attribute values are stored as plain strings and
//! escaped when the tree is written out; there is no way to splice raw markup.

use regex::Regex;
use std::sync::OnceLock;

const VOID_TAGS: [&str; 4] = ["img", "meta", "link", "br"];

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn maybe(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(element) => element.write_to(out),
                Node::Text(text) => out.push_str(&escape_html(text)),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn scheme_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").ok())
        .as_ref()
}

/// Link or image target safe to place in `href`/`src`.
///
/// Relative references pass through; absolute ones only with an `http`,
/// `https`, `mailto` or `tel` scheme. Blank or rejected values yield `None`.
pub fn safe_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // browsers drop whitespace and control characters while parsing schemes
    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let pattern = scheme_pattern()?;
    match pattern.captures(&compact) {
        Some(captures) => {
            let scheme = captures[1].to_ascii_lowercase();
            let allowed = matches!(scheme.as_str(), "http" | "https" | "mailto" | "tel");
            allowed.then(|| trimmed.to_string())
        }
        None => Some(trimmed.to_string()),
    }
}
