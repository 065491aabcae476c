/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! a minimal mutable XML tree for acquisition plan (KML) documents.
//!
//! We only need to delete elements and read the text of a few others, but the rest of the document
//! has to be written back as it was read. Nodes therefore keep their raw (escaped) content and start
//! tags keep their original attributes. Text is kept as is, including leading and trailing whitespace.
//! Only whitespace-only text (i.e. the layout) is dropped on input and the output is re-indented

use std::str;
use quick_xml::{Reader, Writer};
use quick_xml::escape::unescape;
use quick_xml::events::{BytesCData, BytesDecl, BytesStart, BytesText, Event};

use crate::errors::{Result, document_error};

const INDENT_SIZE: usize = 2;

#[derive(Debug,Clone,PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    /// escaped character data
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
    DocType(String),
}

#[derive(Debug,Clone,PartialEq)]
pub struct XmlElement {
    start: BytesStart<'static>,
    local_name: String,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    fn new (start: BytesStart<'static>) -> Result<Self> {
        let local_name = str::from_utf8( start.local_name().as_ref())
            .map_err( |e| document_error( format!("non UTF-8 element name: {e}")))?
            .to_string();
        Ok( XmlElement { start, local_name, children: Vec::new() } )
    }

    /// element name without namespace prefix
    pub fn local_name (&self) -> &str { &self.local_name }

    pub fn is (&self, local_name: &str) -> bool { self.local_name == local_name }

    pub fn child_elements (&self) -> impl Iterator<Item=&XmlElement> {
        self.children.iter().filter_map( |n| if let XmlNode::Element(e) = n { Some(e) } else { None })
    }

    pub fn child (&self, local_name: &str) -> Option<&XmlElement> {
        self.child_elements().find( |e| e.is( local_name))
    }

    /// depth first search for the first descendant element with the given name
    pub fn descendant (&self, local_name: &str) -> Option<&XmlElement> {
        for e in self.child_elements() {
            if e.is( local_name) { return Some(e) }
            if let Some(d) = e.descendant( local_name) { return Some(d) }
        }
        None
    }

    /// concatenated (unescaped) text and CDATA content of direct children
    pub fn text (&self) -> String {
        let mut s = String::new();
        for n in &self.children {
            match n {
                XmlNode::Text(raw) => match unescape( raw) {
                    Ok(txt) => s.push_str( &txt),
                    Err(_) => s.push_str( raw)
                }
                XmlNode::CData(txt) => s.push_str( txt),
                _ => {}
            }
        }
        s
    }

    /// the text of the first child element with the given name
    pub fn child_text (&self, local_name: &str) -> Option<String> {
        self.child( local_name).map( |e| e.text())
    }

    /// number of elements with the given name in this sub-tree (including self)
    pub fn count (&self, local_name: &str) -> usize {
        let n = if self.is( local_name) { 1 } else { 0 };
        n + self.child_elements().map( |e| e.count( local_name)).sum::<usize>()
    }

    fn write<W: std::io::Write> (&self, writer: &mut Writer<W>) -> Result<()> {
        if self.children.is_empty() {
            writer.write_event( Event::Empty( self.start.borrow()))?;
        } else {
            writer.write_event( Event::Start( self.start.borrow()))?;
            for n in &self.children {
                n.write( writer)?;
            }
            writer.write_event( Event::End( self.start.to_end()))?;
        }
        Ok(())
    }
}

impl XmlNode {
    fn write<W: std::io::Write> (&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            XmlNode::Element(e) => e.write( writer)?,
            XmlNode::Text(raw) => writer.write_event( Event::Text( BytesText::from_escaped( raw.as_str())))?,
            XmlNode::CData(txt) => writer.write_event( Event::CData( BytesCData::new( txt.as_str())))?,
            XmlNode::Comment(raw) => writer.write_event( Event::Comment( BytesText::from_escaped( raw.as_str())))?,
            XmlNode::ProcessingInstruction(raw) => writer.write_event( Event::PI( BytesText::from_escaped( raw.as_str())))?,
            XmlNode::DocType(raw) => writer.write_event( Event::DocType( BytesText::from_escaped( raw.as_str())))?,
        }
        Ok(())
    }
}

/// a parsed acquisition plan document
#[derive(Debug,Clone,PartialEq)]
pub struct PlanDocument {
    /// comments, processing instructions and doctype before the root element
    prolog: Vec<XmlNode>,
    root: XmlElement,
    /// comments and processing instructions after the root element
    epilog: Vec<XmlNode>,
}

impl PlanDocument {
    pub fn parse (bytes: &[u8]) -> Result<Self> {
        let input = str::from_utf8( bytes).map_err( |e| document_error( format!("document is not UTF-8: {e}")))?;
        let mut reader = Reader::from_str( input);
        reader.trim_text( false);

        let mut prolog: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlElement> = None;
        let mut epilog: Vec<XmlNode> = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();

        loop {
            let node = match reader.read_event()? {
                Event::Start(e) => {
                    stack.push( XmlElement::new( e.into_owned())?);
                    continue
                }
                Event::End(_) => {
                    let elem = stack.pop().ok_or_else( || document_error("unbalanced end tag"))?;
                    XmlNode::Element(elem)
                }
                Event::Empty(e) => XmlNode::Element( XmlElement::new( e.into_owned())?),
                Event::Text(e) => {
                    if e.iter().all( |b| b.is_ascii_whitespace()) { continue }
                    XmlNode::Text( utf8_string( e.into_inner().as_ref())?)
                }
                Event::CData(e) => XmlNode::CData( utf8_string( e.into_inner().as_ref())?),
                Event::Comment(e) => XmlNode::Comment( utf8_string( e.into_inner().as_ref())?),
                Event::PI(e) => XmlNode::ProcessingInstruction( utf8_string( e.into_inner().as_ref())?),
                Event::DocType(e) => XmlNode::DocType( utf8_string( e.into_inner().as_ref())?),
                Event::Decl(_) => continue, // we always write our own UTF-8 declaration
                Event::Eof => break,
            };

            if let Some(parent) = stack.last_mut() {
                parent.children.push( node);
            } else {
                match node {
                    XmlNode::Element(e) => {
                        if root.is_some() { return Err( document_error("more than one root element")) }
                        root = Some(e);
                    }
                    XmlNode::Text(_) | XmlNode::CData(_) => return Err( document_error("text outside of root element")),
                    other => if root.is_none() { prolog.push( other) } else { epilog.push( other) }
                }
            }
        }

        if !stack.is_empty() { return Err( document_error("unclosed element at end of document")) }

        let root = root.ok_or_else( || document_error("no root element"))?;
        Ok( PlanDocument { prolog, root, epilog } )
    }

    /// serialize as indented UTF-8 XML
    pub fn to_bytes (&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent( Vec::new(), b' ', INDENT_SIZE);

        writer.write_event( Event::Decl( BytesDecl::new( "1.0", Some("UTF-8"), None)))?;
        for n in &self.prolog {
            n.write( &mut writer)?;
        }
        self.root.write( &mut writer)?;
        for n in &self.epilog {
            n.write( &mut writer)?;
        }

        let mut bytes = writer.into_inner();
        bytes.push( b'\n');
        Ok(bytes)
    }

    pub fn root (&self) -> &XmlElement { &self.root }

    pub fn root_mut (&mut self) -> &mut XmlElement { &mut self.root }

    /// number of elements with the given local name
    pub fn count (&self, local_name: &str) -> usize {
        self.root.count( local_name)
    }
}

fn utf8_string (bytes: &[u8]) -> Result<String> {
    str::from_utf8( bytes)
        .map( |s| s.to_string())
        .map_err( |e| document_error( format!("non UTF-8 content: {e}")))
}
