//! XON Encoder — converts a JSON value into an XML element tree.
//!
//! The inverse of the decoder: `"@name"` keys become attributes, `"#text"`
//! becomes the element's leading text, other keys become child elements
//! (one per entry when the value is an array), and scalars are rendered as
//! text when coercion is enabled.
//!
//! # Example
//! ```
//! use serde_json::json;
//! use xon::encoder::{encode, EncodeOptions};
//!
//! let xml = encode(&json!({"e": {"@name": "value", "#text": "text"}}),
//!                  &EncodeOptions::new()).unwrap();
//! assert_eq!(xml, r#"<e name="value">text</e>"#);
//! ```

use crate::documents::Element;
use crate::error::{Error, Result};
use crate::scalars::stringify_scalar;
use crate::{ATTR_PREFIX, TEXT_KEY};
use serde_json::Value;
use std::io::Write;

/// Options controlling XON encoding
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// Convert integers, floats and booleans to string representations
    coerce: bool,
    /// Name of a parent tag to wrap the value in
    wrap: Option<String>,
}

impl EncodeOptions {
    /// Create options with default values: no coercion, no wrapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether native scalars are stringified instead of rejected
    pub fn with_coercion(mut self, coerce: bool) -> Self {
        self.coerce = coerce;
        self
    }

    /// Wrap the encoded value in a parent tag with the given name
    pub fn with_wrap(mut self, tag: impl Into<String>) -> Self {
        self.wrap = Some(tag.into());
        self
    }

    /// Check if scalar coercion is enabled
    pub fn coerce(&self) -> bool {
        self.coerce
    }

    /// Get the wrapping tag name, if any
    pub fn wrap(&self) -> Option<&str> {
        self.wrap.as_deref()
    }
}

/// Encode a JSON document to an XON string.
///
/// Without [`EncodeOptions::with_wrap`], the document must be an object with
/// exactly one key, which becomes the root tag.
pub fn encode(value: &Value, options: &EncodeOptions) -> Result<String> {
    Ok(encode_element(value, options)?.to_xml())
}

/// Encode a JSON document to a writer.
pub fn encode_writer<W: Write>(value: &Value, writer: &mut W, options: &EncodeOptions) -> Result<()> {
    let xml = encode(value, options)?;
    writer.write_all(xml.as_bytes())?;
    Ok(())
}

/// Encode a JSON document to an XML element tree.
pub fn encode_element(value: &Value, options: &EncodeOptions) -> Result<Element> {
    if let Some(tag) = options.wrap() {
        return encode_value(tag, value, options.coerce());
    }
    match value {
        Value::Object(map) => {
            let mut entries = map.iter();
            match (entries.next(), entries.next()) {
                (Some((tag, body)), None) => encode_value(tag, body, options.coerce()),
                (_, Some(_)) => Err(Error::Document(format!(
                    "document has {} keys, expected exactly one",
                    map.len()
                ))),
                (None, _) => Err(Error::Document(
                    "document has no keys, expected exactly one".to_string(),
                )),
            }
        }
        other => Err(Error::Document(format!(
            "document must be an object with exactly one key, got {}",
            kind_name(other)
        ))),
    }
}

/// Build the element for one `{tag: value}` pair. Non-object values are
/// treated as `{"#text": value}`.
fn encode_value(tag: &str, value: &Value, coerce: bool) -> Result<Element> {
    let mut element = Element::new(tag);

    match value {
        Value::Object(map) => {
            for (key, item) in map {
                if let Some(name) = key.strip_prefix(ATTR_PREFIX) {
                    if let Some(text) = scalar_text(key, item, coerce)? {
                        element.set_attribute(name, text);
                    }
                } else if key == TEXT_KEY {
                    if let Some(text) = scalar_text(key, item, coerce)? {
                        element.set_text(text);
                    }
                } else {
                    match item {
                        Value::Array(items) => {
                            for entry in items {
                                element.add_child(encode_value(key, entry, coerce)?);
                            }
                        }
                        _ => element.add_child(encode_value(key, item, coerce)?),
                    }
                }
            }
        }
        _ => {
            if let Some(text) = scalar_text(TEXT_KEY, value, coerce)? {
                element.set_text(text);
            }
        }
    }

    // Keep the text visually separated from the first child; the decoder's
    // whitespace normalization removes the space again on reload.
    if !element.children.is_empty() {
        if let Some(text) = element.text.as_mut() {
            text.push(' ');
        }
    }

    Ok(element)
}

/// Render a value destined for an attribute or text position. Nulls have no
/// text form and are skipped; without coercion only strings are accepted.
fn scalar_text(key: &str, value: &Value, coerce: bool) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        Value::Number(_) | Value::Bool(_) if coerce => Ok(stringify_scalar(value)),
        Value::Number(_) | Value::Bool(_) => Err(Error::type_error(
            key,
            format!(
                "{} value {} is only serializable with coercion enabled",
                kind_name(value),
                value
            ),
        )),
        other => Err(Error::type_error(
            key,
            format!("{} values are not serializable as text", kind_name(other)),
        )),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
