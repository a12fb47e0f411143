//! Document model for generated fixtures.
//!
//! These structures describe block-level content (paragraphs, tables,
//! inline images) in a typed form. Composers build them, and the renderer
//! turns them into WordprocessingML fragments.

mod document;
mod paragraph;
mod resource;
mod table;

pub use document::*;
pub use paragraph::*;
pub use resource::*;
pub use table::*;
