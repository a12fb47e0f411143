//! WordprocessingML rendering.
//!
//! Converts model values into XML fragments and assembles the main
//! document part around them.
//!
//! # Example
//!
//! ```
//! use mkdocx::model::{HeadingLevel, Paragraph};
//! use mkdocx::render;
//!
//! let fragment = render::paragraph(&Paragraph::heading(HeadingLevel::H1, "Title"));
//! assert!(fragment.as_str().contains("Heading1"));
//! ```

mod document;
mod fragment;

pub use document::{body_fragments, document_xml, section_properties, to_document_xml};
pub use fragment::{
    block, escape_xml, heading, inline_image, list_item, mixed_runs, paragraph, table, Fragment,
};
