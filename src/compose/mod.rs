//! Fixture composition.
//!
//! A [`Composer`] collects blocks in document order and renders them into
//! `word/document.xml`. [`build_package`] assembles the complete package
//! for a [`FixtureOptions`] value.
//!
//! # Example
//!
//! ```
//! use mkdocx::compose::{build_package, FixtureOptions};
//!
//! let package = build_package(&FixtureOptions::stress_test().with_sections(2))?;
//! assert_eq!(package.len(), 9);
//! # Ok::<(), mkdocx::Error>(())
//! ```

mod coverage;
mod options;
mod stress;

pub use options::{FixtureOptions, Preset, DEFAULT_OUTPUT_DIR, MAX_PARAGRAPHS, MAX_SECTIONS};

use tracing::debug;

use crate::docx::templates::{CONTENT_TYPES, DOCUMENT_RELS, PACKAGE_RELS};
use crate::docx::{
    ImageSize, CONTENT_TYPES_PATH, DOCUMENT_PATH, DOCUMENT_RELS_PATH, NUMBERING_PATH,
    PACKAGE_RELS_PATH, STYLES_PATH,
};
use crate::error::Result;
use crate::model::{
    Block, Body, HeadingLevel, PageSetup, Paragraph, RunFormat, TextAlignment, TextRun,
};
use crate::package::Package;
use crate::render;

/// Date line closing both fixtures.
pub const SIGN_OFF_DATE: &str = "2026 年 2 月 13 日";

/// A composed body and its rendered main document part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedDocument {
    pub body: Body,
    /// Content of `word/document.xml`
    pub xml: String,
}

/// Accumulates blocks in document order.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    body: Body,
    page: PageSetup,
}

impl Composer {
    /// Create a composer for the given page layout.
    pub fn new(page: PageSetup) -> Self {
        Self {
            body: Body::new(),
            page,
        }
    }

    /// Append any block.
    pub fn push(&mut self, block: impl Into<Block>) -> &mut Self {
        self.body.push(block);
        self
    }

    pub fn heading(&mut self, level: HeadingLevel, text: impl Into<String>) -> &mut Self {
        self.push(Paragraph::heading(level, text))
    }

    /// Append a plain body paragraph.
    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Paragraph::with_text(text))
    }

    pub fn list_item(&mut self, num_id: u32, level: u8, text: impl Into<String>) -> &mut Self {
        self.push(Paragraph::list_item(num_id, level, text))
    }

    /// Append an image slot with an explicit drawing id and name.
    pub fn image(&mut self, size: ImageSize, doc_pr_id: u32, name: impl Into<String>) -> &mut Self {
        self.push(size.inline(doc_pr_id, name))
    }

    /// Append the right-aligned date line.
    pub fn sign_off(&mut self) -> &mut Self {
        self.push(
            Paragraph::from_runs(vec![TextRun::plain(SIGN_OFF_DATE)])
                .aligned(TextAlignment::Right),
        )
    }

    /// Blocks collected so far.
    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Render the collected blocks into the main document part.
    pub fn finish(self) -> ComposedDocument {
        let xml = render::to_document_xml(&self.body, &self.page);
        ComposedDocument {
            body: self.body,
            xml,
        }
    }
}

/// The five styled samples shared by both mixed-run paragraphs.
///
/// `highlight_label` is the text of the highlighted run.
pub(crate) fn style_samples(highlight_label: &str) -> [TextRun; 5] {
    [
        TextRun::formatted("红色加粗", RunFormat::new().bold().color("EE0000")),
        TextRun::formatted("蓝色斜体", RunFormat::new().italic().color("0070C0")),
        TextRun::formatted("绿色下划线", RunFormat::new().underline().color("00B050")),
        TextRun::formatted(highlight_label, RunFormat::new().highlight("yellow")),
        TextRun::formatted("删除线", RunFormat::new().strikethrough()),
    ]
}

/// Join styled samples with plain separator runs.
pub(crate) fn interleave(samples: [TextRun; 5], separator: &str) -> Vec<TextRun> {
    let mut runs = Vec::with_capacity(samples.len() * 2);
    for (i, sample) in samples.into_iter().enumerate() {
        if i > 0 {
            runs.push(TextRun::plain(separator));
        }
        runs.push(sample);
    }
    runs
}

/// Compose the body of a fixture.
pub fn compose(options: &FixtureOptions) -> ComposedDocument {
    let document = match options.preset {
        Preset::FullCoverage => coverage::compose(options),
        Preset::StressTest => stress::compose(options),
    };
    debug!(
        preset = options.preset.name(),
        blocks = document.body.len(),
        bytes = document.xml.len(),
        "document composed"
    );
    document
}

/// Build the complete package of a fixture.
pub fn build_package(options: &FixtureOptions) -> Result<Package> {
    let document = compose(options);

    let mut package = Package::new();
    package.add_xml(CONTENT_TYPES_PATH, CONTENT_TYPES)?;
    package.add_xml(PACKAGE_RELS_PATH, PACKAGE_RELS)?;
    package.add_xml(DOCUMENT_PATH, document.xml)?;
    package.add_xml(STYLES_PATH, options.styles.xml())?;
    package.add_xml(NUMBERING_PATH, options.numbering.xml())?;
    package.add_xml(DOCUMENT_RELS_PATH, DOCUMENT_RELS)?;
    for size in ImageSize::ALL {
        package.add_binary(size.part_path(), size.png()?)?;
    }

    Ok(package)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::FIXTURE_PARTS;

    #[test]
    fn test_composer_preserves_order() {
        let mut composer = Composer::new(PageSetup::default());
        composer
            .heading(HeadingLevel::H1, "Title")
            .paragraph("Body")
            .list_item(1, 0, "Item")
            .image(ImageSize::Small, 7, "pic")
            .sign_off();

        assert_eq!(composer.len(), 5);
        let doc = composer.finish();

        let title = doc.xml.find("Title").unwrap();
        let body = doc.xml.find("Body").unwrap();
        let item = doc.xml.find("Item").unwrap();
        let pic = doc.xml.find(r#"name="pic""#).unwrap();
        let date = doc.xml.find(SIGN_OFF_DATE).unwrap();
        assert!(title < body && body < item && item < pic && pic < date);
        assert!(doc.xml.contains(r#"<w:jc w:val="right"/>"#));
    }

    #[test]
    fn test_interleave() {
        let runs = interleave(style_samples("高亮"), " / ");
        assert_eq!(runs.len(), 9);
        assert!(runs[1].preserve_space);
        assert_eq!(runs[6].text, "高亮");
        assert!(runs.iter().step_by(2).all(|r| r.format.has_formatting()));
    }

    #[test]
    fn test_package_parts_in_order() {
        for preset in Preset::ALL {
            let package = build_package(&preset.options()).unwrap();
            assert_eq!(package.part_names(), FIXTURE_PARTS.to_vec());
        }
    }

    #[test]
    fn test_presets_pick_their_templates() {
        let full = build_package(&FixtureOptions::full_coverage()).unwrap();
        let stress = build_package(&FixtureOptions::stress_test()).unwrap();

        let numbering = |p: &Package| p.get(NUMBERING_PATH).unwrap().data.clone();
        assert_ne!(numbering(&full), numbering(&stress));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let opts = FixtureOptions::stress_test();
        assert_eq!(compose(&opts), compose(&opts));
        assert_eq!(
            build_package(&opts).unwrap().to_bytes().unwrap(),
            build_package(&opts).unwrap().to_bytes().unwrap()
        );
    }
}
