//! quick-xml reader producing a [`SourceNode`] tree.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::XmlError;
use crate::node::SourceNode;

/// Parse a MAM-XML document from a string.
///
/// # Errors
///
/// Returns an error for malformed XML, non-whitespace character data or a
/// document without a root element.
pub fn parse_str(xml: &str) -> Result<SourceNode, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);
    parse_document(&mut reader)
}

/// Parse a MAM-XML file.
///
/// # Errors
///
/// Returns [`XmlError::Io`] if the file cannot be read, and
/// [`XmlError::InFile`] wrapping the [`parse_str`] error otherwise.
pub fn parse_file(path: &Path) -> Result<SourceNode, XmlError> {
    let xml = std::fs::read_to_string(path).map_err(|source| XmlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = xml.len(), "Parsing MAM-XML");
    parse_str(&xml).map_err(|source| XmlError::InFile {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

fn parse_document<R: BufRead>(reader: &mut Reader<R>) -> Result<SourceNode, XmlError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let mut root = start_node(reader, &e)?;
                parse_children(reader, &mut root)?;
                return Ok(root);
            }
            Event::Empty(e) => return start_node(reader, &e),
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?;
                check_blank("(document)", &text)?;
            }
            Event::Eof => return Err(XmlError::NoRoot),
            Event::End(_)
            | Event::GeneralRef(_)
            | Event::CData(_)
            | Event::Comment(_)
            | Event::Decl(_)
            | Event::PI(_)
            | Event::DocType(_) => {}
        }
        buf.clear();
    }
}

fn parse_children<R: BufRead>(
    reader: &mut Reader<R>,
    node: &mut SourceNode,
) -> Result<(), XmlError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let mut child = start_node(reader, &e)?;
                parse_children(reader, &mut child)?;
                node.children.push(child);
            }
            Event::Empty(e) => {
                node.children.push(start_node(reader, &e)?);
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?;
                check_blank(&node.tag, &text)?;
            }
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?;
                return Err(XmlError::UnexpectedText {
                    tag: node.tag.clone(),
                    text: format!("&{entity};"),
                });
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e);
                check_blank(&node.tag, &text)?;
            }
            // quick-xml checks that end tags match, so this closes `node`.
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(XmlError::UnexpectedEof {
                    tag: node.tag.clone(),
                });
            }
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
        buf.clear();
    }
}

fn start_node<R: BufRead>(reader: &Reader<R>, e: &BytesStart) -> Result<SourceNode, XmlError> {
    let decoder = reader.decoder();
    let tag = decoder.decode(e.name().as_ref())?.into_owned();
    let mut attrs = BTreeMap::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = decoder.decode(attr.key.as_ref())?.into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| XmlError::AttrValue {
                tag: tag.clone(),
                key: key.clone(),
                message: err.to_string(),
            })?
            .into_owned();
        attrs.insert(key, value);
    }
    Ok(SourceNode {
        tag,
        attrs,
        children: Vec::new(),
    })
}

fn check_blank(tag: &str, text: &str) -> Result<(), XmlError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Ok(())
    } else {
        Err(XmlError::UnexpectedText {
            tag: tag.to_owned(),
            text: trimmed.to_owned(),
        })
    }
}
