//! XML document handling
//!
//! This module provides the XML tree that the converter operates on. The tree
//! follows the ElementTree shape: an element owns its tag, an ordered
//! attribute map, its leading text, its child elements, and the tail text
//! that follows it inside its parent. Tail text is what makes mixed-content
//! detection possible in the decoder.
//!
//! Parsing is delegated to `quick-xml`; serialization is implemented here so
//! that escaping is under the library's control (reserved characters are
//! entity-escaped and non-ASCII characters are written as decimal character
//! references, giving byte-stable ASCII output).

use crate::error::{Error, Result};
use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;

/// XML Element in the document tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Element tag name
    pub tag: String,
    /// Element attributes, in source order
    pub attributes: IndexMap<String, String>,
    /// Text content preceding the first child (if any)
    pub text: Option<String>,
    /// Child elements, in document order
    pub children: Vec<Element>,
    /// Text following this element inside its parent (if any)
    pub tail: Option<String>,
}

impl Element {
    /// Create a new element
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Get the tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value by name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Set an attribute, preserving insertion order for new names
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Set text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Add a child element
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Find child elements by tag name
    pub fn find_children(&self, tag: &str) -> Vec<&Element> {
        self.children.iter().filter(|e| e.tag == tag).collect()
    }

    /// Append parsed character data at the current position: before any child
    /// it extends the leading text, after a child it extends that child's tail.
    fn append_text(&mut self, text: &str) {
        let slot = match self.children.last_mut() {
            Some(child) => &mut child.tail,
            None => &mut self.text,
        };
        match slot {
            Some(existing) => existing.push_str(text),
            None => *slot = Some(text.to_string()),
        }
    }

    /// Serialize this element (without its tail) to an XML string
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out);
        out
    }

    /// Serialize this element (without its tail) into `out`
    pub fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attribute(value, out);
            out.push('"');
        }
        let has_text = self.text.as_deref().is_some_and(|t| !t.is_empty());
        if !has_text && self.children.is_empty() {
            // ElementTree-compatible empty element, including the space
            out.push_str(" />");
            return;
        }
        out.push('>');
        if let Some(text) = &self.text {
            escape_text(text, out);
        }
        for child in &self.children {
            child.write_xml(out);
            if let Some(tail) = &child.tail {
                escape_text(tail, out);
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Escape text content: `&`, `<`, `>` become entities, non-ASCII characters
/// become decimal character references.
pub(crate) fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c if !c.is_ascii() => push_char_reference(c, out),
            c => out.push(c),
        }
    }
}

/// Escape an attribute value: like text, plus the quote character and
/// newlines (which would otherwise be normalized away on reparse).
fn escape_attribute(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            c if !c.is_ascii() => push_char_reference(c, out),
            c => out.push(c),
        }
    }
}

fn push_char_reference(ch: char, out: &mut String) {
    out.push_str("&#");
    out.push_str(&(ch as u32).to_string());
    out.push(';');
}

/// XML Document representation
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Root element of the document
    pub root: Element,
}

impl Document {
    /// Parse an XML document from a string
    pub fn from_string(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => {
                    stack.push(parse_element(&start)?);
                }
                Ok(Event::End(_)) => {
                    if let Some(current) = stack.pop() {
                        attach(current, &mut stack, &mut root)?;
                    }
                }
                Ok(Event::Empty(start)) => {
                    let element = parse_element(&start)?;
                    attach(element, &mut stack, &mut root)?;
                }
                Ok(Event::Text(text)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = text
                            .unescape()
                            .map_err(|e| Error::Xml(format!("failed to unescape text: {}", e)))?;
                        current.append_text(&text);
                    }
                }
                Ok(Event::CData(data)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = std::str::from_utf8(&data)
                            .map_err(|e| Error::Xml(format!("invalid CDATA content: {}", e)))?;
                        current.append_text(text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml(format!(
                        "error parsing XML at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                // Comments, processing instructions and declarations are not
                // part of the XON data model
                _ => {}
            }
        }

        match root {
            Some(root) => Ok(Self { root }),
            None => Err(Error::Xml("document has no root element".to_string())),
        }
    }

    /// Get the root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Serialize the document to an XML string
    pub fn to_xml(&self) -> String {
        self.root.to_xml()
    }
}

/// Build an element from a start tag, collecting attributes in source order
fn parse_element(start: &quick_xml::events::BytesStart) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| Error::Xml(format!("invalid element name: {}", e)))?
        .to_string();

    let mut element = Element::new(name);

    for attr_result in start.attributes() {
        let attr =
            attr_result.map_err(|e| Error::Xml(format!("failed to parse attribute: {}", e)))?;
        let attr_name = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| Error::Xml(format!("invalid attribute name: {}", e)))?;
        let attr_value = attr
            .unescape_value()
            .map_err(|e| Error::Xml(format!("failed to unescape attribute value: {}", e)))?;
        element.set_attribute(attr_name, attr_value.into_owned());
    }

    Ok(element)
}

/// Attach a completed element to its parent, or install it as the root
fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.add_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(Error::Xml("document has multiple root elements".to_string()));
    }
    *root = Some(element);
    Ok(())
}
