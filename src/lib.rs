//! # xon
//!
//! Read and write XML Object Notation (XON).
//!
//! XON is a way to represent the same vocabulary as JSON using XML, based on
//! the approach proposed by Stefan Goessner in
//! ["Converting Between XML and JSON"](http://www.xml.com/pub/a/2006/05/31/converting-between-xml-and-json.html):
//!
//! - attributes become `"@name"` keys,
//! - element text content goes under the reserved `"#text"` key,
//! - repeated sibling tags collapse into ordered JSON arrays,
//! - mixed content (text interleaved with markup) falls back to a literal
//!   markup string.
//!
//! The mapping is lossy by design: comments, processing instructions and
//! namespaces are not represented, and whitespace in text is normalized.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use xon::{decode, encode, DecodeOptions, EncodeOptions};
//!
//! let value = decode("<e><a>text</a><a>text</a></e>", &DecodeOptions::new())?;
//! assert_eq!(value, json!({"e": {"a": ["text", "text"]}}));
//!
//! let xml = encode(&value, &EncodeOptions::new())?;
//! assert_eq!(xml, "<e><a>text</a><a>text</a></e>");
//! # Ok::<(), xon::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decoder;
pub mod documents;
pub mod encoder;
pub mod error;
pub mod scalars;

// Re-exports for convenience
pub use decoder::{decode, decode_element, decode_reader, DecodeOptions};
pub use documents::{Document, Element};
pub use encoder::{encode, encode_element, encode_writer, EncodeOptions};
pub use error::{Error, Result};

/// Version of the xon library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reserved composite key holding an element's text content.
pub const TEXT_KEY: &str = "#text";

/// Prefix marking attribute keys in a composite.
pub const ATTR_PREFIX: char = '@';
