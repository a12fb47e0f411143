//! Fixture generation options.

use std::path::PathBuf;

use crate::docx::{NumberingScheme, StyleSheet};
use crate::model::PageSetup;

/// Directory fixtures are written to by default.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/test-docs";

/// Upper bound on stress sections.
pub const MAX_SECTIONS: u32 = 10_000;

/// Upper bound on body paragraphs per stress section.
pub const MAX_PARAGRAPHS: u32 = 10_000;

/// Which fixture layout to compose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    /// One pass over every supported feature
    #[default]
    FullCoverage,
    /// Long document repeating every feature across many sections
    StressTest,
}

impl Preset {
    /// Both presets, in generation order.
    pub const ALL: [Preset; 2] = [Preset::FullCoverage, Preset::StressTest];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::FullCoverage => "full-coverage",
            Preset::StressTest => "stress-test",
        }
    }

    /// File name of the written fixture.
    pub fn file_name(&self) -> &'static str {
        match self {
            Preset::FullCoverage => "word-fidelity-full-coverage-test.docx",
            Preset::StressTest => "word-fidelity-stress-test.docx",
        }
    }

    /// Path under [`DEFAULT_OUTPUT_DIR`].
    pub fn default_path(&self) -> PathBuf {
        PathBuf::from(DEFAULT_OUTPUT_DIR).join(self.file_name())
    }

    /// Options reproducing this preset.
    pub fn options(&self) -> FixtureOptions {
        match self {
            Preset::FullCoverage => FixtureOptions::full_coverage(),
            Preset::StressTest => FixtureOptions::stress_test(),
        }
    }
}

/// Options for composing a fixture.
///
/// The loop parameters (`sections` through `page_break_sections`) drive the
/// stress layout. The full-coverage layout is fixed content and only reads
/// the table size, page setup, styles and numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureOptions {
    pub preset: Preset,

    /// Number of numbered H2 sections
    pub sections: u32,

    /// Body paragraphs per section
    pub paragraphs_per_section: u32,

    /// Every n-th body paragraph keeps its lines together (0 = never)
    pub keep_lines_every: u32,

    /// A mixed-run paragraph follows every n-th body paragraph (0 = never)
    pub mixed_runs_every: u32,

    /// Top-level items of the numbered list per section
    pub numbered_items: u32,

    /// Top-level items of the bulleted list per section
    pub bulleted_items: u32,

    /// Sections divisible by this value get a table
    pub table_every: Option<u32>,

    pub table_rows: usize,
    pub table_columns: usize,

    /// Sections divisible by this value get the three images
    pub image_every: Option<u32>,

    /// Sections closed by a paragraph with a forced page break
    pub page_break_sections: Vec<u32>,

    pub page_setup: PageSetup,
    pub styles: StyleSheet,
    pub numbering: NumberingScheme,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self::full_coverage()
    }
}

impl FixtureOptions {
    /// Create options for the default preset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options of the full-coverage fixture.
    ///
    /// The loop parameters are zeroed: the full-coverage layout ignores them.
    pub fn full_coverage() -> Self {
        Self {
            preset: Preset::FullCoverage,
            sections: 0,
            paragraphs_per_section: 0,
            keep_lines_every: 0,
            mixed_runs_every: 0,
            numbered_items: 0,
            bulleted_items: 0,
            table_every: None,
            table_rows: 3,
            table_columns: 3,
            image_every: None,
            page_break_sections: Vec::new(),
            page_setup: PageSetup::default(),
            styles: StyleSheet::Detailed,
            numbering: NumberingScheme::TwoLevel,
        }
    }

    /// Options of the stress-test fixture.
    pub fn stress_test() -> Self {
        Self {
            preset: Preset::StressTest,
            sections: 8,
            paragraphs_per_section: 10,
            keep_lines_every: 3,
            mixed_runs_every: 4,
            numbered_items: 5,
            bulleted_items: 4,
            table_every: Some(2),
            table_rows: 6,
            table_columns: 4,
            image_every: Some(3),
            page_break_sections: vec![3, 6],
            page_setup: PageSetup::default(),
            styles: StyleSheet::Compact,
            numbering: NumberingScheme::ThreeLevel,
        }
    }

    /// Set the number of sections (clamped to [`MAX_SECTIONS`]).
    pub fn with_sections(mut self, sections: u32) -> Self {
        self.sections = sections.min(MAX_SECTIONS);
        self
    }

    /// Set the body paragraphs per section (clamped to [`MAX_PARAGRAPHS`]).
    pub fn with_paragraphs(mut self, paragraphs: u32) -> Self {
        self.paragraphs_per_section = paragraphs.min(MAX_PARAGRAPHS);
        self
    }

    /// Set the table size.
    pub fn with_table_size(mut self, rows: usize, columns: usize) -> Self {
        self.table_rows = rows;
        self.table_columns = columns;
        self
    }

    /// Set which sections end with a forced page break.
    pub fn with_page_breaks(mut self, sections: impl IntoIterator<Item = u32>) -> Self {
        self.page_break_sections = sections.into_iter().collect();
        self
    }

    pub fn with_page_setup(mut self, page_setup: PageSetup) -> Self {
        self.page_setup = page_setup;
        self
    }

    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_numbering(mut self, numbering: NumberingScheme) -> Self {
        self.numbering = numbering;
        self
    }

    /// Whether `section` gets a table.
    pub fn has_table(&self, section: u32) -> bool {
        divides(self.table_every, section)
    }

    /// Whether `section` gets the three images.
    pub fn has_images(&self, section: u32) -> bool {
        divides(self.image_every, section)
    }

    /// Whether `section` ends with a forced page break.
    pub fn has_page_break(&self, section: u32) -> bool {
        self.page_break_sections.contains(&section)
    }
}

fn divides(every: Option<u32>, n: u32) -> bool {
    matches!(every, Some(k) if k != 0 && n % k == 0)
}

/// True for every `every`-th value of a 1-based counter; 0 disables.
pub(crate) fn nth(every: u32, i: u32) -> bool {
    every != 0 && i % every == 0
}
