//! `word/numbering.xml` templates and a reader for numbering definitions.
//!
//! Both schemes define the same two instances: `numId` 1 is a decimal
//! outline (abstract 0) and `numId` 2 a bulleted outline (abstract 1).

use crate::error::{Error, Result};
use std::collections::HashMap;

/// `w:numId` of the numbered outline.
pub const NUMBERED_LIST: u32 = 1;

/// `w:numId` of the bulleted outline.
pub const BULLETED_LIST: u32 = 2;

/// Two levels per list: `%1.` / `%1.%2.` and `•` / `◦`.
pub const NUMBERING_TWO_LEVEL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0">
    <w:multiLevelType w:val="hybridMultilevel"/>
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="decimal"/>
      <w:lvlText w:val="%1."/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>
    </w:lvl>
    <w:lvl w:ilvl="1">
      <w:start w:val="1"/>
      <w:numFmt w:val="lowerLetter"/>
      <w:lvlText w:val="%1.%2."/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="1440" w:hanging="360"/></w:pPr>
    </w:lvl>
  </w:abstractNum>

  <w:abstractNum w:abstractNumId="1">
    <w:multiLevelType w:val="multilevel"/>
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="bullet"/>
      <w:lvlText w:val="•"/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>
    </w:lvl>
    <w:lvl w:ilvl="1">
      <w:start w:val="1"/>
      <w:numFmt w:val="bullet"/>
      <w:lvlText w:val="◦"/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="1440" w:hanging="360"/></w:pPr>
    </w:lvl>
  </w:abstractNum>

  <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
  <w:num w:numId="2"><w:abstractNumId w:val="1"/></w:num>
</w:numbering>
"#;

/// Three levels per list: adds `%1.%2.%3.` (lowerRoman) and `▪`.
pub const NUMBERING_THREE_LEVEL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0">
    <w:multiLevelType w:val="hybridMultilevel"/>
    <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl>
    <w:lvl w:ilvl="1"><w:start w:val="1"/><w:numFmt w:val="lowerLetter"/><w:lvlText w:val="%1.%2."/><w:pPr><w:ind w:left="1440" w:hanging="360"/></w:pPr></w:lvl>
    <w:lvl w:ilvl="2"><w:start w:val="1"/><w:numFmt w:val="lowerRoman"/><w:lvlText w:val="%1.%2.%3."/><w:pPr><w:ind w:left="2160" w:hanging="360"/></w:pPr></w:lvl>
  </w:abstractNum>
  <w:abstractNum w:abstractNumId="1">
    <w:multiLevelType w:val="multilevel"/>
    <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl>
    <w:lvl w:ilvl="1"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="◦"/><w:pPr><w:ind w:left="1440" w:hanging="360"/></w:pPr></w:lvl>
    <w:lvl w:ilvl="2"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="▪"/><w:pPr><w:ind w:left="2160" w:hanging="360"/></w:pPr></w:lvl>
  </w:abstractNum>
  <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
  <w:num w:numId="2"><w:abstractNumId w:val="1"/></w:num>
</w:numbering>
"#;

/// Which numbering part a fixture ships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberingScheme {
    #[default]
    TwoLevel,
    ThreeLevel,
}

impl NumberingScheme {
    /// XML text of `word/numbering.xml`.
    pub fn xml(&self) -> &'static str {
        match self {
            NumberingScheme::TwoLevel => NUMBERING_TWO_LEVEL,
            NumberingScheme::ThreeLevel => NUMBERING_THREE_LEVEL,
        }
    }

    /// Number of levels defined per list.
    pub fn depth(&self) -> u8 {
        match self {
            NumberingScheme::TwoLevel => 2,
            NumberingScheme::ThreeLevel => 3,
        }
    }
}

/// Abstract numbering definition.
#[derive(Debug, Clone)]
pub struct AbstractNum {
    /// Abstract numbering ID
    pub id: String,
    pub levels: Vec<NumLevel>,
}

/// A numbering level definition.
#[derive(Debug, Clone)]
pub struct NumLevel {
    /// Level index (0-8)
    pub level: u8,
}

/// Collection of numbering definitions.
#[derive(Debug, Clone, Default)]
pub struct NumberingMap {
    /// Abstract numbering definitions by ID
    pub abstract_nums: HashMap<String, AbstractNum>,
    /// `numId` → `abstractNumId`
    pub instances: HashMap<String, String>,
}

impl NumberingMap {
    /// Parse numbering from XML content.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut map = NumberingMap::default();
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut current_abstract: Option<AbstractNum> = None;
        let mut current_level: Option<NumLevel> = None;
        let mut current_num_id: Option<String> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(e)) => match e.name().as_ref() {
                    b"w:abstractNum" => {
                        let id = e
                            .attributes()
                            .flatten()
                            .find(|attr| attr.key.as_ref() == b"w:abstractNumId")
                            .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
                            .unwrap_or_default();
                        current_abstract = Some(AbstractNum {
                            id,
                            levels: Vec::new(),
                        });
                    }
                    b"w:lvl" if current_abstract.is_some() => {
                        let level = e
                            .attributes()
                            .flatten()
                            .find(|attr| attr.key.as_ref() == b"w:ilvl")
                            .and_then(|attr| String::from_utf8_lossy(&attr.value).parse().ok())
                            .unwrap_or(0);
                        current_level = Some(NumLevel { level });
                    }
                    b"w:num" => {
                        current_num_id = e
                            .attributes()
                            .flatten()
                            .find(|attr| attr.key.as_ref() == b"w:numId")
                            .map(|attr| String::from_utf8_lossy(&attr.value).to_string());
                    }
                    _ => {}
                },
                Ok(quick_xml::events::Event::Empty(e)) => {
                    let val = super::styles::get_val(&e);
                    match (e.name().as_ref(), current_level.as_mut()) {
                        (b"w:abstractNumId", None) => {
                            if let (Some(num_id), Some(abstract_id)) = (&current_num_id, val) {
                                map.instances.insert(num_id.clone(), abstract_id);
                            }
                        }
                        _ => {}
                    }
                }
                Ok(quick_xml::events::Event::End(e)) => match e.name().as_ref() {
                    b"w:abstractNum" => {
                        if let Some(abstract_num) = current_abstract.take() {
                            map.abstract_nums
                                .insert(abstract_num.id.clone(), abstract_num);
                        }
                    }
                    b"w:lvl" => {
                        if let (Some(level), Some(abstract_num)) =
                            (current_level.take(), current_abstract.as_mut())
                        {
                            abstract_num.levels.push(level);
                        }
                    }
                    b"w:num" => {
                        current_num_id = None;
                    }
                    _ => {}
                },
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Resolve a `numId` through its `w:num` to the abstract definition.
    pub fn resolve(&self, num_id: &str) -> Option<&AbstractNum> {
        let abstract_id = self.instances.get(num_id)?;
        self.abstract_nums.get(abstract_id)
    }

    /// Find the level definition for a `numId` and `ilvl`.
    pub fn level(&self, num_id: &str, level: u8) -> Option<&NumLevel> {
        self.resolve(num_id)?.levels.iter().find(|l| l.level == level)
    }
}
