//! Minimal owned XML element tree built from quick-xml pull events.
//!
//! Only what the extractor needs is kept: element names, attributes, and
//! text. Comments, processing instructions, the XML declaration, and the
//! doctype are dropped.

use crate::error::{Result, WelcomeError};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its attributes and children in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Look up an attribute value by its (possibly prefixed) name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements in document order, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Child elements with the given name, in document order.
    pub fn children_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a Element> + use<'a, 'n> {
        self.elements().filter(move |element| element.name == name)
    }

    /// First child element with the given name.
    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.children_named(name).next()
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }
}

/// Parse a complete XML document and return its root element.
///
/// `source` names the document in error messages.
///
/// # Errors
///
/// Returns `WelcomeError::ParseError` when the input is not well-formed:
/// syntax errors, mismatched or unclosed tags, undefined entities, content
/// outside the root element, or no root element at all.
pub fn parse_document(xml: &str, source: &str) -> Result<Element> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    let fail = |position: u64, message: String| WelcomeError::ParseError {
        path: source.to_string(),
        position,
        message,
    };

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader
            .read_event()
            .map_err(|e| fail(reader.error_position() as u64, e.to_string()))?;

        match event {
            Event::Start(start) => {
                if root.is_some() && stack.is_empty() {
                    return Err(fail(position, "content after the root element".to_string()));
                }
                let element = start_element(&start).map_err(|message| fail(position, message))?;
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = start_element(&start).map_err(|message| fail(position, message))?;
                attach(&mut stack, &mut root, element)
                    .map_err(|message| fail(position, message))?;
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                let element = stack
                    .pop()
                    .ok_or_else(|| fail(position, format!("unexpected closing tag </{}>", name)))?;
                if element.name != name {
                    return Err(fail(
                        position,
                        format!("expected </{}>, found </{}>", element.name, name),
                    ));
                }
                attach(&mut stack, &mut root, element)
                    .map_err(|message| fail(position, message))?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| fail(position, e.to_string()))?;
                push_text(&mut stack, &text).map_err(|message| fail(position, message))?;
            }
            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                push_text(&mut stack, &text).map_err(|message| fail(position, message))?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(fail(
            reader.buffer_position() as u64,
            format!("unclosed element <{}>", open.name),
        ));
    }

    root.ok_or_else(|| fail(0, "document has no root element".to_string()))
}

fn start_element(start: &BytesStart<'_>) -> std::result::Result<Element, String> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| format!("invalid attribute on <{}>: {}", name, e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| format!("invalid value for attribute '{}' on <{}>: {}", key, name, e))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Attach a finished element to its parent, or make it the root.
fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> std::result::Result<(), String> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Element(element));
            Ok(())
        }
        None if root.is_some() => Err(format!(
            "second root element <{}> after the root element",
            element.name
        )),
        None => {
            *root = Some(element);
            Ok(())
        }
    }
}

fn push_text(stack: &mut [Element], text: &str) -> std::result::Result<(), String> {
    match stack.last_mut() {
        Some(parent) => {
            // Adjacent text and CDATA end up in one node.
            if let Some(Node::Text(previous)) = parent.children.last_mut() {
                previous.push_str(text);
            } else {
                parent.children.push(Node::Text(text.to_string()));
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err("text outside the root element".to_string()),
    }
}
