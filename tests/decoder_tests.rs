//! Decoder integration tests
//!
//! The vector table mirrors the documents a Goessner-convention reader has
//! to handle: empty elements, attributes, repeated tags, mixed content, and
//! real-world microformat snippets.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::{Seek, SeekFrom, Write};
use xon::{decode, decode_reader, DecodeOptions};

fn load_vectors() -> Vec<(&'static str, Value)> {
    vec![
        ("<e/>", json!({"e": null})),
        ("<e>text</e>", json!({"e": "text"})),
        (r#"<e name="value" />"#, json!({"e": {"@name": "value"}})),
        (
            r#"<e name="value">text</e>"#,
            json!({"e": {"@name": "value", "#text": "text"}}),
        ),
        (
            "<e> <a>text</a> <b>text</b> </e>",
            json!({"e": {"a": "text", "b": "text"}}),
        ),
        (
            "<e> <a>text</a> <a>text</a> </e>",
            json!({"e": {"a": ["text", "text"]}}),
        ),
        (
            "<e> text <a>text</a> </e>",
            json!({"e": {"#text": "text", "a": "text"}}),
        ),
        (
            "<e>\n  <a>some</a>\n  <b>textual</b>\n  <a>content</a>\n</e>",
            json!({"e": {"a": ["some", "content"], "b": "textual"}}),
        ),
        (
            "<e>\n  some textual\n  <a>content</a>\n</e>",
            json!({"e": {"#text": "some textual", "a": "content"}}),
        ),
        (
            "<e>\n  some\n  <a>textual</a>\n  content\n</e>",
            json!({"e": "some <a>textual</a> content"}),
        ),
        (
            r#"<ol class="xoxo">
                 <li>Subject 1
                   <ol>
                     <li>subpoint a</li>
                     <li>subpoint b</li>
                   </ol>
                 </li>
                 <li><span>Subject 2</span>
                   <ol compact="compact">
                     <li>subpoint c</li>
                     <li>subpoint d</li>
                   </ol>
                 </li>
               </ol>"#,
            json!({"ol": {"@class": "xoxo",
                          "li": [{"#text": "Subject 1",
                                  "ol": {"li": ["subpoint a", "subpoint b"]}},
                                 {"span": "Subject 2",
                                  "ol": {"@compact": "compact",
                                         "li": ["subpoint c", "subpoint d"]}}]}}),
        ),
        (
            r#"<span class="vevent">
                 <a class="url" href="http://www.web2con.com/">
                   <span class="summary">Web 2.0 Conference</span>
                   <abbr class="dtstart" title="2005-10-05">October 5</abbr>
                   <abbr class="dtend" title="2005-10-08">7</abbr>
                   <span class="location">Argent Hotel, SF, CA</span>
                 </a>
               </span>"#,
            json!({"span": {"@class": "vevent",
                            "a": {"@class": "url",
                                  "@href": "http://www.web2con.com/",
                                  "span": [{"@class": "summary",
                                            "#text": "Web 2.0 Conference"},
                                           {"@class": "location",
                                            "#text": "Argent Hotel, SF, CA"}],
                                  "abbr": [{"@class": "dtstart",
                                            "@title": "2005-10-05",
                                            "#text": "October 5"},
                                           {"@class": "dtend",
                                            "@title": "2005-10-08",
                                            "#text": "7"}]}}}),
        ),
    ]
}

#[test]
fn test_load_vectors() {
    for (xml, expected) in load_vectors() {
        let value = decode(xml, &DecodeOptions::new()).unwrap();
        assert_eq!(value, expected, "decoding {:?}", xml);
    }
}

#[test]
fn test_load_vectors_from_reader() {
    for (xml, expected) in load_vectors() {
        let value = decode_reader(xml.as_bytes(), &DecodeOptions::new()).unwrap();
        assert_eq!(value, expected, "decoding {:?}", xml);
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(b"<e> <a>text</a> <a>text</a> </e>").unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let value = decode_reader(&file, &DecodeOptions::new()).unwrap();
    assert_eq!(value, json!({"e": {"a": ["text", "text"]}}));
}

#[test]
fn test_unwrap_returns_bare_value() {
    let options = DecodeOptions::new().with_unwrap(true);
    let value = decode(
        "<wrapper><one>two</one><three>four</three><three>five</three></wrapper>",
        &options,
    )
    .unwrap();
    assert_eq!(value, json!({"one": "two", "three": ["four", "five"]}));
}

#[test]
fn test_coercion_vectors() {
    let options = DecodeOptions::new().with_coercion(true);
    assert_eq!(decode("<int>10</int>", &options).unwrap(), json!({"int": 10}));
    assert_eq!(
        decode("<float>123.456</float>", &options).unwrap(),
        json!({"float": 123.456})
    );
    assert_eq!(
        decode("<bool>true</bool>", &options).unwrap(),
        json!({"bool": true})
    );
    assert_eq!(
        decode("<bool>false</bool>", &options).unwrap(),
        json!({"bool": false})
    );
}

#[test]
fn test_without_coercion_numbers_stay_strings() {
    assert_eq!(
        decode("<int>10</int>", &DecodeOptions::new()).unwrap(),
        json!({"int": "10"})
    );
}

#[test]
fn test_unicode_character_reference() {
    let value = decode(
        "<unicode>a string&#8212;in Unicode</unicode>",
        &DecodeOptions::new(),
    )
    .unwrap();
    assert_eq!(value, json!({"unicode": "a string\u{2014}in Unicode"}));
}

#[test]
fn test_nested_empty_elements() {
    let value = decode("<e><a/><b><c/></b></e>", &DecodeOptions::new()).unwrap();
    assert_eq!(value, json!({"e": {"a": null, "b": {"c": null}}}));
}

#[test]
fn test_malformed_input_is_error() {
    assert!(decode("not xml at all", &DecodeOptions::new()).is_err());
    assert!(decode("<e><unclosed></e>", &DecodeOptions::new()).is_err());
}
