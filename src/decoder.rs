//! XON Decoder — converts an XML element tree into a JSON value.
//!
//! Decoding follows the Goessner convention: attributes become `"@name"`
//! keys, text content goes under `"#text"`, repeated sibling tags collapse
//! into arrays, and mixed content (a child element with non-whitespace tail
//! text) falls back to a literal markup string.
//!
//! # Example
//! ```
//! use serde_json::json;
//! use xon::decoder::{decode, DecodeOptions};
//!
//! let value = decode(r#"<e name="value">text</e>"#, &DecodeOptions::new()).unwrap();
//! assert_eq!(value, json!({"e": {"@name": "value", "#text": "text"}}));
//! ```

use crate::documents::{escape_text, Document, Element};
use crate::error::Result;
use crate::scalars::parse_scalar;
use crate::{ATTR_PREFIX, TEXT_KEY};
use serde_json::map::Entry;
use serde_json::{Map, Value};
use std::io::Read;

/// Options controlling XON decoding
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Return the root tag's value directly instead of `{tag: value}`
    unwrap: bool,
    /// Convert integers, floats and booleans from their string representations
    coerce: bool,
}

impl DecodeOptions {
    /// Create options with default values: no unwrapping, no coercion
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the top-level call returns the root value without its tag
    pub fn with_unwrap(mut self, unwrap: bool) -> Self {
        self.unwrap = unwrap;
        self
    }

    /// Set whether scalar text is coerced to native types
    pub fn with_coercion(mut self, coerce: bool) -> Self {
        self.coerce = coerce;
        self
    }

    /// Check if the root value is returned unwrapped
    pub fn unwrap_root(&self) -> bool {
        self.unwrap
    }

    /// Check if scalar coercion is enabled
    pub fn coerce(&self) -> bool {
        self.coerce
    }
}

/// Decode XON from an XML string.
///
/// Parsing errors from the XML reader are surfaced as [`crate::Error::Xml`].
pub fn decode(xml: &str, options: &DecodeOptions) -> Result<Value> {
    let doc = Document::from_string(xml)?;
    Ok(decode_element(&doc.root, options))
}

/// Decode XON from a reader.
pub fn decode_reader<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<Value> {
    let mut xml = String::new();
    reader.read_to_string(&mut xml)?;
    decode(&xml, options)
}

/// Decode XON from an element tree.
///
/// The transformation is purely structural and cannot fail; only parsing of
/// XML text can.
pub fn decode_element(element: &Element, options: &DecodeOptions) -> Value {
    let value = decode_value(element, options.coerce);
    if options.unwrap {
        value
    } else {
        let mut wrapper = Map::new();
        wrapper.insert(element.tag.clone(), value);
        Value::Object(wrapper)
    }
}

/// Decode one element's body. Recursive calls always unwrap: a child's value
/// is stored under its tag in the parent composite.
fn decode_value(element: &Element, coerce: bool) -> Value {
    let mut composite = Map::new();

    // Attributes first, in source order
    for (name, value) in &element.attributes {
        composite.insert(
            format!("{}{}", ATTR_PREFIX, name),
            Value::String(value.clone()),
        );
    }

    if has_tailed_children(element) {
        // Mixed content: the structural mapping would lose the text/markup
        // interleaving, so the children are flattened into a literal string.
        // Serialization goes through the crate's own writer, keeping the
        // fallback's escaping identical to the encoder's.
        let mut text = String::new();
        if let Some(lead) = &element.text {
            text.push_str(lead);
        }
        for child in &element.children {
            child.write_xml(&mut text);
            if let Some(tail) = &child.tail {
                escape_text(tail, &mut text);
            }
        }
        composite.insert(
            TEXT_KEY.to_string(),
            Value::String(normalize_whitespace(&text)),
        );
    } else {
        if let Some(text) = &element.text {
            let text = normalize_whitespace(text);
            // Whitespace-only text is treated as absent
            if !text.is_empty() {
                let value = if coerce {
                    parse_scalar(&text)
                } else {
                    Value::String(text)
                };
                composite.insert(TEXT_KEY.to_string(), value);
            }
        }

        // Accumulate every child into a list per tag, in first-occurrence
        // order, then reduce single-element lists back to bare values.
        for child in &element.children {
            let value = decode_value(child, coerce);
            match composite.entry(child.tag.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(Value::Array(vec![value]));
                }
                Entry::Occupied(mut slot) => {
                    if let Value::Array(items) = slot.get_mut() {
                        items.push(value);
                    }
                }
            }
        }
        for (key, value) in composite.iter_mut() {
            if key.starts_with(ATTR_PREFIX) || key == TEXT_KEY {
                continue;
            }
            if let Value::Array(items) = value {
                if items.len() == 1 {
                    if let Some(single) = items.pop() {
                        *value = single;
                    }
                }
            }
        }
    }

    if composite.is_empty() {
        return Value::Null;
    }
    if composite.len() == 1 {
        // A composite is never observably a single-text wrapper
        if let Some(text) = composite.remove(TEXT_KEY) {
            return text;
        }
    }
    Value::Object(composite)
}

/// Check for non-whitespace tails on an element's children
fn has_tailed_children(element: &Element) -> bool {
    element
        .children
        .iter()
        .any(|child| child.tail.as_deref().is_some_and(|t| !t.trim().is_empty()))
}

/// Collapse whitespace runs to single spaces and trim the ends
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
