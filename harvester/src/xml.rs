//! Pretty-printed XML generation shared by the raw and enriched archives.

use std::io::Cursor;

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::archive::ArchiveError;

/// Builds a complete XML document with a declaration and two-space indentation.
pub struct XmlDocument {
    writer: Writer<Cursor<Vec<u8>>>,
    root: Option<String>,
}

impl XmlDocument {
    /// Starts a document whose root element is `root`.
    pub fn new(root: &str) -> Result<Self, ArchiveError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new(root)))?;

        Ok(Self {
            writer,
            root: Some(root.to_string()),
        })
    }

    /// Starts a bare fragment: no declaration and no enclosing root.
    pub fn fragment() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
            root: None,
        }
    }

    pub fn start(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<(), ArchiveError> {
        let mut el = BytesStart::new(tag);
        for (k, v) in attrs {
            el.push_attribute((*k, *v));
        }
        self.writer.write_event(Event::Start(el))?;
        Ok(())
    }

    pub fn end(&mut self, tag: &str) -> Result<(), ArchiveError> {
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// `<tag>text</tag>` on a single line.
    pub fn text_element(&mut self, tag: &str, text: &str) -> Result<(), ArchiveError> {
        self.start(tag, &[])?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(tag)
    }

    /// `<tag a="b"/>`
    pub fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<(), ArchiveError> {
        let mut el = BytesStart::new(tag);
        for (k, v) in attrs {
            el.push_attribute((*k, *v));
        }
        self.writer.write_event(Event::Empty(el))?;
        Ok(())
    }

    /// Closes the root element, if any, and returns the document text.
    pub fn finish(mut self) -> Result<String, ArchiveError> {
        if let Some(root) = self.root.take() {
            self.end(&root)?;
        }

        let mut bytes = self.writer.into_inner().into_inner();
        bytes.push(b'\n');
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_declaration_and_indented_children() {
        let mut doc = XmlDocument::new("bees").unwrap();
        doc.start("puzzle", &[("date", "2024-01-05")]).unwrap();
        doc.text_element("word", "SKY").unwrap();
        doc.empty("word", &[("original", "A&B")]).unwrap();
        doc.end("puzzle").unwrap();
        let xml = doc.finish().unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("\n  <puzzle date=\"2024-01-05\">"));
        assert!(xml.contains("\n    <word>SKY</word>"));
        assert!(xml.contains("<word original=\"A&amp;B\"/>"));
        assert!(xml.trim_end().ends_with("</bees>"));
    }

    #[test]
    fn fragment_has_no_declaration_or_root() {
        let mut doc = XmlDocument::fragment();
        doc.start("puzzle", &[("date", "2024-01-05")]).unwrap();
        doc.text_element("word", "SKY").unwrap();
        doc.end("puzzle").unwrap();

        assert_eq!(
            doc.finish().unwrap(),
            "<puzzle date=\"2024-01-05\">\n  <word>SKY</word>\n</puzzle>\n"
        );
    }
}
