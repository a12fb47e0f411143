//! # mkdocx
//!
//! Synthetic Word (`.docx`) fixtures for rendering-fidelity tests.
//!
//! The crate writes two fixtures: a short *full coverage* document using
//! every supported feature once, and a long *stress test* document that
//! repeats them over many sections. Both come out of one parametrized
//! generator driven by [`FixtureOptions`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use mkdocx::{generate, generate_preset, FixtureOptions, Preset};
//!
//! // Both fixtures at their default paths
//! for preset in Preset::ALL {
//!     let path = generate_preset(preset)?;
//!     println!("{}", path.display());
//! }
//!
//! // A shorter stress document
//! let options = FixtureOptions::stress_test().with_sections(3);
//! generate(&options, "out/stress-short.docx")?;
//! # Ok::<(), mkdocx::Error>(())
//! ```
//!
//! ## Reading a fixture back
//!
//! ```no_run
//! let report = mkdocx::inspect_file("assets/test-docs/word-fidelity-full-coverage-test.docx")?;
//! println!("images: {}, issues: {}", report.images.len(), report.issues.len());
//! # Ok::<(), mkdocx::Error>(())
//! ```

pub mod compose;
pub mod container;
pub mod docx;
pub mod error;
pub mod inspect;
pub mod model;
pub mod package;
pub mod render;

// Re-exports
pub use compose::{build_package, compose, Composer, FixtureOptions, Preset};
pub use container::{OoxmlContainer, Relationship, Relationships};
pub use error::{Error, Result};
pub use inspect::{inspect, inspect_file, PackageReport};
pub use model::{
    Block, Body, Cell, HeadingLevel, InlineImage, ListInfo, PageSetup, Paragraph, Row, RunFormat,
    Table, TextAlignment, TextRun,
};
pub use package::Package;

use std::path::{Path, PathBuf};
use tracing::info;

/// Generate a fixture and write it to `path`.
///
/// Parent directories are created and an existing file is overwritten.
/// Returns the written path.
pub fn generate(options: &FixtureOptions, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let package = build_package(options)?;
    package.write_to(path)?;
    info!(preset = options.preset.name(), path = %path.display(), "fixture written");
    Ok(path.to_path_buf())
}

/// Generate a preset fixture at its default path.
pub fn generate_preset(preset: Preset) -> Result<PathBuf> {
    generate(&preset.options(), preset.default_path())
}

/// Generate both presets under `dir`, in order.
pub fn generate_all(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    Preset::ALL
        .iter()
        .map(|preset| generate(&preset.options(), dir.join(preset.file_name())))
        .collect()
}
