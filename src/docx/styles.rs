//! `word/styles.xml` templates and a reader for defined styles.

use crate::error::{Error, Result};
use crate::model::HeadingLevel;
use std::collections::HashMap;

/// Styles with `basedOn`, `qFormat`, heading spacing and complex-script size.
pub const STYLES_DETAILED: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults>
    <w:rPrDefault>
      <w:rPr>
        <w:rFonts w:ascii="Times New Roman" w:hAnsi="Times New Roman" w:eastAsia="等线"/>
        <w:sz w:val="28"/>
        <w:szCs w:val="28"/>
      </w:rPr>
    </w:rPrDefault>
    <w:pPrDefault>
      <w:pPr>
        <w:spacing w:line="360" w:lineRule="auto" w:after="120"/>
      </w:pPr>
    </w:pPrDefault>
  </w:docDefaults>

  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>

  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:spacing w:before="120" w:after="120"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="40"/><w:color w:val="0F4761"/></w:rPr>
  </w:style>

  <w:style w:type="paragraph" w:styleId="Heading2">
    <w:name w:val="heading 2"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:spacing w:before="80" w:after="80"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="34"/><w:color w:val="1F4E79"/></w:rPr>
  </w:style>

  <w:style w:type="paragraph" w:styleId="Heading3">
    <w:name w:val="heading 3"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:spacing w:before="60" w:after="60"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="30"/><w:color w:val="2F6D9B"/></w:rPr>
  </w:style>
</w:styles>
"#;

/// The same style set, one line per style and no inheritance.
pub const STYLES_COMPACT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults>
    <w:rPrDefault>
      <w:rPr>
        <w:rFonts w:ascii="Times New Roman" w:hAnsi="Times New Roman" w:eastAsia="等线"/>
        <w:sz w:val="28"/>
      </w:rPr>
    </w:rPrDefault>
    <w:pPrDefault>
      <w:pPr><w:spacing w:line="360" w:lineRule="auto" w:after="120"/></w:pPr>
    </w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:rPr><w:b/><w:sz w:val="40"/><w:color w:val="0F4761"/></w:rPr></w:style>
  <w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:rPr><w:b/><w:sz w:val="34"/><w:color w:val="1F4E79"/></w:rPr></w:style>
  <w:style w:type="paragraph" w:styleId="Heading3"><w:name w:val="heading 3"/><w:rPr><w:b/><w:sz w:val="30"/><w:color w:val="2F6D9B"/></w:rPr></w:style>
</w:styles>
"#;

/// Which styles part a fixture ships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleSheet {
    #[default]
    Detailed,
    Compact,
}

impl StyleSheet {
    /// XML text of `word/styles.xml`.
    pub fn xml(&self) -> &'static str {
        match self {
            StyleSheet::Detailed => STYLES_DETAILED,
            StyleSheet::Compact => STYLES_COMPACT,
        }
    }
}

/// A defined style: its id and built-in name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Style ID (e.g., "Heading1")
    pub id: String,
    /// Style name (e.g., "heading 1")
    pub name: String,
}

/// Styles defined in styles.xml, by ID.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    pub styles: HashMap<String, Style>,
}

impl StyleMap {
    /// Parse styles from XML content.
    pub fn parse(xml: &str) -> Result<Self> {
        if xml.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut map = StyleMap::default();
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut current_style: Option<Style> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(e)) if e.name().as_ref() == b"w:style" => {
                    let id = e
                        .attributes()
                        .flatten()
                        .find(|attr| attr.key.as_ref() == b"w:styleId")
                        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
                        .unwrap_or_default();
                    current_style = Some(Style {
                        id,
                        name: String::new(),
                    });
                }
                Ok(quick_xml::events::Event::Empty(e)) if e.name().as_ref() == b"w:name" => {
                    if let (Some(style), Some(val)) = (current_style.as_mut(), get_val(&e)) {
                        style.name = val;
                    }
                }
                Ok(quick_xml::events::Event::End(e)) if e.name().as_ref() == b"w:style" => {
                    if let Some(style) = current_style.take() {
                        map.styles.insert(style.id.clone(), style);
                    }
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Check if a style ID is defined.
    pub fn contains(&self, id: &str) -> bool {
        self.styles.contains_key(id)
    }

    /// Heading level of a style, from its built-in name ("heading N").
    pub fn heading_level(&self, style_id: &str) -> Option<HeadingLevel> {
        let style = self.styles.get(style_id)?;
        let level = style.name.to_lowercase().strip_prefix("heading ")?.parse().ok()?;
        HeadingLevel::from_number(level)
    }
}

/// Read the `w:val` attribute of an element.
pub(crate) fn get_val(e: &quick_xml::events::BytesStart) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"w:val")
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}
