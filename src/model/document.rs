//! Document body and section layout structures.

use super::{HeadingLevel, InlineImage, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A block-level content unit, a direct child of `w:body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    /// A paragraph (plain, heading, list item or mixed runs)
    Paragraph(Paragraph),
    /// A table
    Table(Table),
    /// An inline image in its own paragraph
    Image(InlineImage),
}

impl From<Paragraph> for Block {
    fn from(para: Paragraph) -> Self {
        Block::Paragraph(para)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

impl From<InlineImage> for Block {
    fn from(image: InlineImage) -> Self {
        Block::Image(image)
    }
}

/// Page size, margins and grid of the final `w:sectPr`, all in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSetup {
    pub width: u32,
    pub height: u32,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub header: u32,
    pub footer: u32,
    pub gutter: u32,
    /// Spacing between text columns
    pub column_space: u32,
    /// Document grid line pitch
    pub line_pitch: u32,
}

impl Default for PageSetup {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            width: 11906,
            height: 16838,
            margin_top: 1440,
            margin_right: 1800,
            margin_bottom: 1440,
            margin_left: 1800,
            header: 851,
            footer: 992,
            gutter: 0,
            column_space: 425,
            line_pitch: 312,
        }
    }
}

/// Ordered body content of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block.
    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over paragraph blocks.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Iterate over table blocks.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Iterate over image blocks.
    pub fn images(&self) -> impl Iterator<Item = &InlineImage> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Image(i) => Some(i),
            _ => None,
        })
    }

    /// Count headings at the given level.
    pub fn heading_count(&self, level: HeadingLevel) -> usize {
        self.paragraphs()
            .filter(|p| p.heading == Some(level))
            .count()
    }

    /// Count paragraphs that force a page break before them.
    pub fn page_break_count(&self) -> usize {
        self.paragraphs()
            .filter(|p| p.props.page_break_before)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_statistics() {
        let mut body = Body::new();
        body.push(Paragraph::heading(HeadingLevel::H1, "Title"));
        body.push(Paragraph::heading(HeadingLevel::H2, "One"));
        body.push(Paragraph::heading(HeadingLevel::H2, "Two"));
        body.push(Paragraph::with_text("Break").page_break_before(true));
        body.push(Table::uniform(2, 2, 2400, |r, c| format!("{}{}", r, c)));
        body.push(InlineImage::new("rId3", 1, "img", 10, 10));

        assert_eq!(body.len(), 6);
        assert_eq!(body.heading_count(HeadingLevel::H1), 1);
        assert_eq!(body.heading_count(HeadingLevel::H2), 2);
        assert_eq!(body.heading_count(HeadingLevel::H3), 0);
        assert_eq!(body.page_break_count(), 1);
        assert_eq!(body.tables().count(), 1);
        assert_eq!(body.images().count(), 1);
    }

    #[test]
    fn test_page_setup_default_is_a4() {
        let page = PageSetup::default();
        assert_eq!(page.width, 11906);
        assert_eq!(page.height, 16838);
        assert_eq!((page.margin_left, page.margin_right), (1800, 1800));
    }

    #[test]
    fn test_block_serialization() {
        let block = Block::from(Paragraph::with_text("x"));
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"type\":\"Paragraph\""));
    }
}
