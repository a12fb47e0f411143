//! WordprocessingML package parts.
//!
//! This module holds the fixed parts every fixture ships (manifest,
//! relationships, styles, numbering, media) and the archive layout they
//! are written to.

pub mod media;
pub mod numbering;
pub mod styles;
pub mod templates;

pub use media::ImageSize;
pub use numbering::{NumberingMap, NumberingScheme, BULLETED_LIST, NUMBERED_LIST};
pub use styles::{StyleMap, StyleSheet};

/// Content types manifest, at the archive root.
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
/// Package-level relationships.
pub const PACKAGE_RELS_PATH: &str = "_rels/.rels";
/// Main document part.
pub const DOCUMENT_PATH: &str = "word/document.xml";
pub const STYLES_PATH: &str = "word/styles.xml";
pub const NUMBERING_PATH: &str = "word/numbering.xml";
/// Relationships owned by the main document part.
pub const DOCUMENT_RELS_PATH: &str = "word/_rels/document.xml.rels";

/// Every part of a fixture package, in write order.
pub const FIXTURE_PARTS: [&str; 9] = [
    CONTENT_TYPES_PATH,
    PACKAGE_RELS_PATH,
    DOCUMENT_PATH,
    STYLES_PATH,
    NUMBERING_PATH,
    DOCUMENT_RELS_PATH,
    "word/media/image-small.png",
    "word/media/image-medium.png",
    "word/media/image-large.png",
];
