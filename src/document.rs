// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document model adapter over the `scraper` HTML tree.
//!
//! Rules only see [`Document`] and [`Node`], never parser types, so the
//! query surface stays small: find elements by tag, read attributes,
//! collect text, and pair text with its parent element. Parsing is lenient
//! (html5ever recovers from unclosed and unknown tags) and cannot fail for
//! `&str` input.

use crate::error::{AuditError, Result};
use regex::Regex;
use scraper::{ElementRef, Html};

/// Comments, or start/end tags with quoted attribute values kept intact
const TAG_PATTERN: &str =
    r#"(?s)<!--.*?(?:-->|\z)|<(/?)([a-z][^\s/>]*)(?:[^>"']|"[^"]*"|'[^']*')*>"#;

/// Elements whose content the tokenizer reads as text, not markup
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "textarea", "title", "xmp", "iframe", "noembed", "noframes", "noscript",
    "plaintext",
];

/// A parsed HTML document
pub struct Document {
    html: Html,
    authored_body: bool,
}

/// An element in a [`Document`]
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

/// A non-blank text node together with the element that contains it
#[derive(Clone)]
pub struct TextNode<'a> {
    pub text: &'a str,
    pub parent: Node<'a>,
}

impl Document {
    /// Parse markup text
    pub fn parse(text: &str) -> Self {
        // html5ever synthesizes <body> for every document; remember whether
        // the author actually wrote one.
        let authored_body = declares_body(text);
        Self {
            html: Html::parse_document(text),
            authored_body,
        }
    }

    /// Decode raw bytes and parse them. Fails only when the input is not text.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| AuditError::Parse(format!("input is not valid UTF-8: {}", e)))?;
        if text.contains('\0') {
            return Err(AuditError::Parse(
                "input contains NUL bytes and does not look like markup".to_string(),
            ));
        }
        Ok(Self::parse(text))
    }

    /// All elements with one of the given tag names, in document order
    pub fn find_all(&self, tags: &[&str]) -> Vec<Node<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| tags.contains(&el.value().name()))
            .map(Node::from)
            .collect()
    }

    /// First element with the tag name that satisfies `filter`
    pub fn first_matching<F>(&self, tag: &str, filter: F) -> Option<Node<'_>>
    where
        F: Fn(&Node<'_>) -> bool,
    {
        self.find_all(&[tag]).into_iter().find(|n| filter(n))
    }

    /// The `<body>` element, only if the markup declared one
    pub fn authored_body(&self) -> Option<Node<'_>> {
        if !self.authored_body {
            return None;
        }
        self.first_matching("body", |_| true)
    }

    /// Every text node with visible characters, in document order
    pub fn text_nodes(&self) -> Vec<TextNode<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                if text.trim().is_empty() {
                    return None;
                }
                let parent = node.parent().and_then(ElementRef::wrap)?;
                Some(TextNode {
                    text: &text.text,
                    parent: Node::from(parent),
                })
            })
            .collect()
    }
}

impl<'a> From<ElementRef<'a>> for Node<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

impl<'a> Node<'a> {
    /// Lowercase tag name
    pub fn name(&self) -> &'a str {
        self.element.value().name()
    }

    /// Raw attribute value
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Attribute value, treating an empty value as absent
    pub fn non_empty_attr(&self, name: &str) -> Option<&'a str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    /// Concatenated descendant text, trimmed
    pub fn text_content(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }

    /// Serialized outer HTML of the element
    pub fn outer_html(&self) -> String {
        self.element.html()
    }

    /// Descendant elements (excluding self) with one of the given tag names
    pub fn find_all(&self, tags: &[&str]) -> Vec<Node<'a>> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| tags.contains(&el.value().name()))
            .map(Node::from)
            .collect()
    }

    /// First descendant with the tag name that satisfies `filter`
    pub fn first_matching<F>(&self, tag: &str, filter: F) -> Option<Node<'a>>
    where
        F: Fn(&Node<'a>) -> bool,
    {
        self.find_all(&[tag]).into_iter().find(|n| filter(n))
    }
}

/// Whether the markup contains a real `<body>` start tag. Tags inside
/// comments, attribute values and raw-text elements do not count.
fn declares_body(text: &str) -> bool {
    let Ok(tag) = Regex::new(TAG_PATTERN) else {
        return false;
    };
    // ASCII lowercasing keeps byte offsets unchanged
    let lower = text.to_ascii_lowercase();
    let mut pos = 0;

    while let Some(caps) = tag.captures_at(&lower, pos) {
        pos = caps.get(0).map_or(lower.len(), |m| m.end());

        let (Some(slash), Some(name)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if !slash.as_str().is_empty() {
            continue;
        }

        match name.as_str() {
            "body" => return true,
            raw if RAW_TEXT_ELEMENTS.contains(&raw) => {
                let close = format!("</{}", raw);
                match lower[pos..].find(&close) {
                    Some(offset) => pos += offset + close.len(),
                    None => return false,
                }
            }
            _ => {}
        }
    }

    false
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node").field("name", &self.name()).finish()
    }
}
