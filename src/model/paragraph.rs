//! Paragraph and text run models.

use serde::{Deserialize, Serialize};

/// Paragraph justification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Both,
}

impl TextAlignment {
    /// Value of the `w:jc` element.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlignment::Left => "left",
            TextAlignment::Center => "center",
            TextAlignment::Right => "right",
            TextAlignment::Both => "both",
        }
    }
}

/// Heading level backed by the `Heading1`..`Heading3` paragraph styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Create a heading level from a number (1-3).
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    /// Get the numeric level.
    pub fn level(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Paragraph style ID carrying this level.
    pub fn style_id(&self) -> String {
        format!("Heading{}", self.level())
    }
}

/// Numbering reference for a list paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    /// `w:numId` of the numbering instance
    pub num_id: u32,
    /// Nesting level (`w:ilvl`, 0 = top level)
    pub level: u8,
}

/// Vertical alignment of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Superscript,
    Subscript,
}

impl VerticalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Superscript => "superscript",
            VerticalAlign::Subscript => "subscript",
        }
    }
}

/// Character formatting of a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFormat {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,

    /// Single underline
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub underline: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strikethrough: bool,

    /// Text color (hex, e.g., "EE0000")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Highlight color name (e.g., "yellow")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
}

impl RunFormat {
    /// Create an empty format.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn color(mut self, hex: impl Into<String>) -> Self {
        self.color = Some(hex.into());
        self
    }

    pub fn highlight(mut self, name: impl Into<String>) -> Self {
        self.highlight = Some(name.into());
        self
    }

    pub fn superscript(mut self) -> Self {
        self.vertical_align = Some(VerticalAlign::Superscript);
        self
    }

    pub fn subscript(mut self) -> Self {
        self.vertical_align = Some(VerticalAlign::Subscript);
        self
    }

    /// Check if the format carries any property, i.e. renders a `w:rPr`.
    pub fn has_formatting(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.strikethrough
            || self.color.is_some()
            || self.highlight.is_some()
            || self.vertical_align.is_some()
    }
}

/// A run of text with consistent formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Character formatting
    #[serde(default, skip_serializing_if = "is_default_format")]
    pub format: RunFormat,

    /// Emit `xml:space="preserve"` on the text element
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub preserve_space: bool,
}

fn is_default_format(format: &RunFormat) -> bool {
    *format == RunFormat::default()
}

impl TextRun {
    /// Create a plain run with no formatting.
    ///
    /// Leading or trailing whitespace turns on `preserve_space`.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let preserve_space = text.trim() != text;
        Self {
            text,
            preserve_space,
            ..Default::default()
        }
    }

    /// Create a plain run whose whitespace is preserved.
    pub fn preserved(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            preserve_space: true,
            ..Default::default()
        }
    }

    /// Create a formatted run.
    pub fn formatted(text: impl Into<String>, format: RunFormat) -> Self {
        Self {
            text: text.into(),
            format,
            preserve_space: false,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Paragraph-level properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphProps {
    /// Keep with the next paragraph
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub keep_next: bool,

    /// Keep all lines on one page
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub keep_lines: bool,

    /// Start the paragraph on a new page
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub page_break_before: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<TextAlignment>,
}

impl ParagraphProps {
    pub fn is_empty(&self) -> bool {
        !self.keep_next && !self.keep_lines && !self.page_break_before && self.alignment.is_none()
    }
}

/// A paragraph of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in this paragraph
    #[serde(default)]
    pub runs: Vec<TextRun>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<HeadingLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_info: Option<ListInfo>,

    #[serde(default, skip_serializing_if = "ParagraphProps::is_empty")]
    pub props: ParagraphProps,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a body paragraph with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::preserved(text)],
            ..Default::default()
        }
    }

    /// Create a heading paragraph.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::plain(text)],
            heading: Some(level),
            ..Default::default()
        }
    }

    /// Create a list item paragraph.
    pub fn list_item(num_id: u32, level: u8, text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::preserved(text)],
            list_info: Some(ListInfo { num_id, level }),
            ..Default::default()
        }
    }

    /// Create a paragraph from a sequence of runs.
    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            ..Default::default()
        }
    }

    pub fn keep_next(mut self, on: bool) -> Self {
        self.props.keep_next = on;
        self
    }

    pub fn keep_lines(mut self, on: bool) -> Self {
        self.props.keep_lines = on;
        self
    }

    pub fn page_break_before(mut self, on: bool) -> Self {
        self.props.page_break_before = on;
        self
    }

    pub fn aligned(mut self, alignment: TextAlignment) -> Self {
        self.props.alignment = Some(alignment);
        self
    }

    /// Get the plain text content.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Number of runs carrying their own formatting.
    pub fn formatted_run_count(&self) -> usize {
        self.runs.iter().filter(|r| r.format.has_formatting()).count()
    }

    pub fn is_heading(&self) -> bool {
        self.heading.is_some()
    }

    pub fn is_list_item(&self) -> bool {
        self.list_info.is_some()
    }
}
