//! A small owned element tree on top of quick-xml.
//!
//! The transcoder works on whole documents: it needs random access to an
//! element's attributes, to dump an element's children back to markup, and
//! to build new trees for serialization. This module provides exactly that
//! and nothing more. Comments, processing instructions and the doctype are
//! dropped while reading.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::error::MetadataError;

/// A node inside an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Unescaped character data (text and CDATA sections).
    Text(String),
}

/// An XML element with its attributes and children, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// An element holding a single text node.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut el = Self::new(name);
        el.push_text(text);
        el
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Set an attribute, replacing an existing one with the same name.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push_element(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(&text);
        } else {
            self.children.push(Node::Text(text));
        }
    }

    /// Direct child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    pub fn has_child_elements(&self) -> bool {
        self.child_elements().next().is_some()
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Trimmed text content, `None` when empty.
    pub fn trimmed_text(&self) -> Option<String> {
        let text = self.text_content();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Drop indentation: whitespace-only text nodes that span a line break.
    ///
    /// Inline spacing such as the blank between two `<em>` elements survives.
    pub fn strip_layout(&mut self) {
        self.children.retain(|node| match node {
            Node::Text(text) => !(text.contains('\n') && text.trim().is_empty()),
            Node::Element(_) => true,
        });
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.strip_layout();
            }
        }
    }

    /// Compact markup of this element, tags included.
    pub fn to_markup(&self) -> Result<String, MetadataError> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self, Layout::Compact)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    /// Whether this element holds inline markup whose whitespace is content.
    ///
    /// Paragraphs and list items always do, as does any element with
    /// non-blank text next to child elements.
    fn is_inline_container(&self) -> bool {
        if INLINE_CONTAINERS.contains(&self.name.as_str()) {
            return true;
        }
        self.has_child_elements()
            && self
                .children
                .iter()
                .any(|node| matches!(node, Node::Text(text) if !text.trim().is_empty()))
    }
}

/// Description markup elements that are never re-indented.
const INLINE_CONTAINERS: &[&str] = &["p", "li"];

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) => collect_text(inner, out),
        }
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Parse a complete document and return its root element.
///
/// Returns `Ok(None)` when the input holds no element at all (only
/// whitespace, a declaration or comments).
pub fn parse_document(data: &str) -> Result<Option<Element>, MetadataError> {
    let mut xml = Reader::from_str(data);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = match xml.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(MetadataError::malformed(format!(
                    "{e} (at byte {})",
                    xml.buffer_position()
                )));
            }
        };
        match event {
            Event::Start(ref e) => stack.push(element_from_start(e)?),
            Event::Empty(ref e) => {
                let el = element_from_start(e)?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(ref e) => {
                let el = stack.pop().ok_or_else(|| {
                    MetadataError::malformed(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    ))
                })?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(ref e) => {
                let text = e
                    .unescape()
                    .map_err(|err| MetadataError::malformed(err.to_string()))?;
                append_text(&mut stack, text)?;
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                append_text(&mut stack, String::from_utf8_lossy(&bytes))?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(MetadataError::malformed(format!(
            "element <{}> is never closed",
            open.name
        )));
    }

    Ok(root)
}

/// Parse a markup fragment such as `<p>One</p><p>Two</p>`.
///
/// The fragment is wrapped in a synthetic `<root>` element which is returned.
pub fn parse_fragment(markup: &str) -> Result<Element, MetadataError> {
    let wrapped = format!("<root>{markup}</root>");
    parse_document(&wrapped)?.ok_or_else(|| MetadataError::malformed("empty markup fragment"))
}

fn element_from_start(e: &BytesStart<'_>) -> Result<Element, MetadataError> {
    let mut el = Element::new(String::from_utf8_lossy(e.name().as_ref()));
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| MetadataError::malformed(err.to_string()))?;
        el.attributes.push((key, value.into_owned()));
    }
    Ok(el)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), MetadataError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(el));
        return Ok(());
    }
    if root.is_some() {
        return Err(MetadataError::malformed(format!(
            "second root element <{}>",
            el.name
        )));
    }
    *root = Some(el);
    Ok(())
}

fn append_text(stack: &mut [Element], text: Cow<'_, str>) -> Result<(), MetadataError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(MetadataError::malformed("text outside of the root element")),
    }
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Compact,
    Indented,
}

/// Serialize a full document with an XML declaration and two-space indentation.
///
/// Paragraphs, list items and other inline markup are written exactly as
/// stored, on one line.
pub fn write_document(root: &Element) -> Result<String, MetadataError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root, Layout::Indented)?;
    let mut out = String::from_utf8_lossy(&writer.into_inner()).into_owned();
    out.push('\n');
    Ok(out)
}

fn write_node<W: Write>(
    writer: &mut Writer<W>,
    node: &Node,
    layout: Layout,
) -> Result<(), MetadataError> {
    match node {
        Node::Element(el) => write_element(writer, el, layout),
        Node::Text(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
            Ok(())
        }
    }
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    el: &Element,
    layout: Layout,
) -> Result<(), MetadataError> {
    if layout == Layout::Indented && el.is_inline_container() {
        // Bypass the indenting writer so no layout whitespace lands inside.
        let markup = el.to_markup()?;
        writer.write_indent()?;
        writer.get_mut().write_all(markup.as_bytes())?;
        return Ok(());
    }

    let mut start = BytesStart::new(el.name.as_str());
    for (key, value) in &el.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if el.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &el.children {
        write_node(writer, child, layout)?;
    }
    writer.write_event(Event::End(BytesEnd::new(el.name.as_str())))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
