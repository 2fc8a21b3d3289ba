#![allow(dead_code)]

use std::path::PathBuf;
use vast_codec::xml::{self, Element, Node};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Path of a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name))
        .unwrap_or_else(|e| panic!("cannot read fixture {name}: {e}"))
}

/// Render a document as a string that is equal for two documents exactly when
/// they carry the same information.
///
/// Attribute order, indentation, comments and the distinction between CDATA
/// and escaped text are ignored. Child elements are compared as a sorted set
/// of their own canonical forms.
pub fn canonical_form(bytes: &[u8]) -> String {
    let root = xml::parse(bytes).unwrap_or_else(|e| panic!("not well-formed XML: {e:?}"));
    canonicalize(&root)
}

fn canonicalize(element: &Element) -> String {
    let mut attributes = element.attributes.clone();
    attributes.sort();

    let mut text = String::new();
    let mut children = Vec::new();
    for child in &element.children {
        match child {
            Node::Element(child) => children.push(canonicalize(child)),
            Node::Text(value) | Node::CData(value) | Node::Raw(value) => text.push_str(value),
            Node::Comment(_) => (),
        }
    }
    children.sort();

    let mut out = format!("<{}", element.name);
    for (key, value) in attributes {
        out.push_str(&format!(" {key}={value:?}"));
    }
    out.push('>');
    out.push_str(&format!("{:?}", text.trim()));
    for child in children {
        out.push_str(&child);
    }
    out.push_str(&format!("</{}>", element.name));
    out
}

/// Decode a fixture, encode it again and compare both documents.
pub fn assert_round_trip(name: &str) {
    let input = read_fixture(name);
    let vast = vast_codec::read(input.as_slice())
        .unwrap_or_else(|e| panic!("cannot decode {name}: {e:?}"));
    let output = vast
        .to_bytes()
        .unwrap_or_else(|e| panic!("cannot encode {name}: {e:?}"));

    let expected = canonical_form(&input);
    let actual = canonical_form(&output);
    if expected != actual {
        panic!(
            "{name} did not survive a round trip\n--- input ---\n{expected}\n--- output ---\n{}",
            String::from_utf8_lossy(&output)
        );
    }
}
