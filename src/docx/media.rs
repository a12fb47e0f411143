//! Embedded image payloads.
//!
//! Three single-pixel PNGs (red, green, blue) back the small, medium and
//! large image slots. They are stored base64-encoded and decoded on demand.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;
use crate::model::InlineImage;

const PNG_RED: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mP8/x8AAwMCAO7Z6wAAAABJRU5ErkJggg==";
const PNG_GREEN: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mP8z8AARQMBgAq8rVQAAAAASUVORK5CYII=";
const PNG_BLUE: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mP8zwAAAgMBgN5n0WkAAAAASUVORK5CYII=";

/// The three image slots of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSize {
    Small,
    Medium,
    Large,
}

impl ImageSize {
    /// All slots in document order.
    pub const ALL: [ImageSize; 3] = [ImageSize::Small, ImageSize::Medium, ImageSize::Large];

    /// Relationship ID in `word/_rels/document.xml.rels`.
    pub fn rel_id(&self) -> &'static str {
        match self {
            ImageSize::Small => "rId3",
            ImageSize::Medium => "rId4",
            ImageSize::Large => "rId5",
        }
    }

    /// Archive path of the image part.
    pub fn part_path(&self) -> &'static str {
        match self {
            ImageSize::Small => "word/media/image-small.png",
            ImageSize::Medium => "word/media/image-medium.png",
            ImageSize::Large => "word/media/image-large.png",
        }
    }

    /// Default drawing object name.
    pub fn label(&self) -> &'static str {
        match self {
            ImageSize::Small => "small-image",
            ImageSize::Medium => "medium-image",
            ImageSize::Large => "large-image",
        }
    }

    /// Display extent (cx, cy) in EMUs: 1x0.75in, 3x2.25in, 5x3.75in.
    pub fn extent(&self) -> (u64, u64) {
        match self {
            ImageSize::Small => (914_400, 685_800),
            ImageSize::Medium => (2_743_200, 2_057_400),
            ImageSize::Large => (4_572_000, 3_429_000),
        }
    }

    /// Decoded PNG bytes.
    pub fn png(&self) -> Result<Vec<u8>> {
        let encoded = match self {
            ImageSize::Small => PNG_RED,
            ImageSize::Medium => PNG_GREEN,
            ImageSize::Large => PNG_BLUE,
        };
        Ok(STANDARD.decode(encoded)?)
    }

    /// Inline image block for this slot.
    pub fn inline(&self, doc_pr_id: u32, name: impl Into<String>) -> InlineImage {
        let (cx, cy) = self.extent();
        InlineImage::new(self.rel_id(), doc_pr_id, name, cx, cy)
    }
}
