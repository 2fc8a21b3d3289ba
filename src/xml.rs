//! A small owned element tree on top of `quick-xml`.
//!
//! The codec never walks raw events directly: documents are parsed into an
//! [`Element`] tree first and written back from one. Text is trimmed of
//! surrounding whitespace on the way in, CDATA sections stay distinct from
//! escaped character data, and [`Node::Raw`] carries markup that must be
//! written verbatim.

use crate::error::{DecodeError, EncodeError};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fmt;

/// An XML element with its attributes in document order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// A child of an [`Element`]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Character data, stored unescaped
    Text(String),
    CData(String),
    Comment(String),
    /// Pre-serialized markup, written without escaping
    Raw(String),
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated character data and CDATA of the direct children.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                Node::Text(value) | Node::CData(value) => text.push_str(value),
                _ => (),
            }
        }
        text
    }

    /// Child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn with_attribute(mut self, name: &str, value: impl ToString) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_optional_attribute<T: fmt::Display>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.with_attribute(name, value),
            None => self,
        }
    }

    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Appends escaped character data; empty text adds nothing.
    pub fn push_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.children.push(Node::Text(text.to_string()));
        }
    }

    /// Appends a CDATA section; empty text adds nothing.
    pub fn push_cdata(&mut self, text: &str) {
        if !text.is_empty() {
            self.children.push(Node::CData(text.to_string()));
        }
    }

    pub fn push_raw(&mut self, markup: &str) {
        if !markup.is_empty() {
            self.children.push(Node::Raw(markup.to_string()));
        }
    }
}

/// Parse a complete XML document into its root element.
pub fn parse(bytes: &[u8]) -> Result<Element, DecodeError> {
    let mut reader = Reader::from_reader(bytes);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                stack.push(element_from_start(&e)?);
            }
            Event::Empty(e) => {
                let element = element_from_start(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                // quick-xml already rejects mismatched end tags
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element)?;
                }
            }
            Event::Text(e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = e.unescape()?;
                    parent.push_text(&text);
                }
            }
            Event::CData(e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8(e.into_inner().into_owned())?;
                    parent.children.push(Node::CData(text));
                }
            }
            Event::Comment(e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8(e.into_inner().into_owned())?;
                    parent.children.push(Node::Comment(text));
                }
            }
            Event::Eof => break,
            // Declarations, processing instructions and doctypes carry nothing we keep
            _ => (),
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(DecodeError::UnclosedElement(open.name));
    }

    root.ok_or(DecodeError::MissingRoot)
}

fn element_from_start(start: &BytesStart) -> Result<Element, DecodeError> {
    let mut element = Element::new(String::from_utf8(start.name().as_ref().to_vec())?);

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8(attr.key.as_ref().to_vec())?;
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), DecodeError> {
    match stack.last_mut() {
        Some(parent) => parent.push_element(element),
        None if root.is_some() => return Err(DecodeError::MultipleRoots(element.name)),
        None => *root = Some(element),
    }
    Ok(())
}

/// Serialize a document: XML declaration, newline, then the tree indented by two spaces.
pub fn to_document_bytes(root: &Element) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;
    Ok(writer.into_inner())
}

/// Serialize nodes without indentation, as they would appear inside a parent element.
pub fn to_fragment(nodes: &[Node]) -> quick_xml::Result<String> {
    let mut writer = Writer::new(Vec::new());
    for node in nodes {
        write_node(&mut writer, node)?;
    }
    String::from_utf8(writer.into_inner())
        .map_err(|e| quick_xml::Error::NonDecodable(Some(e.utf8_error())))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> quick_xml::Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    writer.write_event(Event::Start(start))?;

    if element.children.is_empty() {
        // An empty text event keeps the closing tag on the same line
        writer.write_event(Event::Text(BytesText::new("")))?;
    }
    for child in &element.children {
        write_node(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> quick_xml::Result<()> {
    match node {
        Node::Element(element) => write_element(writer, element)?,
        Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        Node::CData(text) => write_cdata(writer, text)?,
        Node::Comment(text) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?
        }
        Node::Raw(markup) => {
            writer.write_event(Event::Text(BytesText::from_escaped(markup.as_str())))?
        }
    }
    Ok(())
}

/// A CDATA section cannot contain `]]>`, so such text is split across sections.
fn write_cdata(writer: &mut Writer<Vec<u8>>, text: &str) -> quick_xml::Result<()> {
    let mut rest = text;
    while let Some(pos) = rest.find("]]>") {
        writer.write_event(Event::CData(BytesCData::new(&rest[..pos + 2])))?;
        rest = &rest[pos + 2..];
    }
    writer.write_event(Event::CData(BytesCData::new(rest)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_attributes_text_and_cdata() {
        let root = parse(
            br#"<?xml version="1.0"?>
<Root a="1" b="x &amp; y">
  <Plain>  hello &lt;world&gt;  </Plain>
  <Wrapped><![CDATA[ http://example.com/?a=1&b=2 ]]></Wrapped>
  <Empty/>
</Root>"#,
        )
        .unwrap();

        assert_eq!(root.name, "Root");
        assert_eq!(root.attribute("a"), Some("1"));
        assert_eq!(root.attribute("b"), Some("x & y"));

        let children: Vec<&Element> = root.elements().collect();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].children, vec![Node::Text("hello <world>".to_string())]);
        assert_eq!(
            children[1].children,
            vec![Node::CData(" http://example.com/?a=1&b=2 ".to_string())]
        );
        assert!(children[2].children.is_empty());
    }

    #[test]
    fn rejects_unclosed_and_mismatched_documents() {
        assert!(matches!(
            parse(b"<Root><Child></Child>"),
            Err(DecodeError::UnclosedElement(name)) if name == "Root"
        ));
        assert!(matches!(parse(b"<Root></Other>"), Err(DecodeError::Xml(_))));
        assert!(matches!(parse(b""), Err(DecodeError::MissingRoot)));
        assert!(matches!(
            parse(b"<A></A><B></B>"),
            Err(DecodeError::MultipleRoots(name)) if name == "B"
        ));
    }

    #[test]
    fn writes_indented_document() {
        let mut root = Element::new("Root").with_attribute("version", "1");
        let mut child = Element::new("Child");
        child.push_cdata("http://example.com");
        root.push_element(child);
        root.push_element(Element::new("Empty"));
        let mut text = Element::new("Text");
        text.push_text("a < b");
        root.push_element(text);

        let bytes = to_document_bytes(&root).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <Root version=\"1\">\n  \
             <Child><![CDATA[http://example.com]]></Child>\n  \
             <Empty></Empty>\n  \
             <Text>a &lt; b</Text>\n\
             </Root>"
        );
    }

    #[test]
    fn optional_attributes_are_written_only_when_set() {
        let present: Option<u32> = Some(720);
        let element = Element::new("MediaFile")
            .with_optional_attribute("height", present.as_ref())
            .with_optional_attribute::<String>("codec", None);

        assert_eq!(element.attributes, vec![("height".to_string(), "720".to_string())]);
    }

    #[test]
    fn empty_root_closes_on_the_same_line() {
        let bytes = to_document_bytes(&Element::new("VAST")).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<VAST></VAST>"
        );
    }

    #[test]
    fn cdata_terminator_is_split() {
        let mut root = Element::new("R");
        root.push_cdata("a]]>b");
        let bytes = to_document_bytes(&root).unwrap();
        let reparsed = parse(&bytes).unwrap();
        assert_eq!(reparsed.text(), "a]]>b");
    }

    #[test]
    fn fragment_round_trips_through_raw() {
        let source =
            parse(br#"<Ext><Vendor id="7"><Value><![CDATA[x]]></Value></Vendor><!-- note --></Ext>"#)
                .unwrap();
        let fragment = to_fragment(&source.children).unwrap();
        assert_eq!(fragment, r#"<Vendor id="7"><Value><![CDATA[x]]></Value></Vendor><!-- note -->"#);

        let mut copy = Element::new("Ext");
        copy.push_raw(&fragment);
        let reparsed = parse(&to_document_bytes(&copy).unwrap()).unwrap();
        assert_eq!(reparsed, source);
    }
}
