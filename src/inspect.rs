//! Structural inspection of a written package.
//!
//! [`inspect`] reads a package back and reports what a fixture consumer
//! relies on: the part set, block counts and whether every symbolic
//! reference (relationship ids, numbering instances, paragraph styles)
//! resolves. Problems are collected as `issues` rather than returned as
//! errors so one pass reports all of them.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use tracing::debug;

use crate::container::{OoxmlContainer, Relationships};
use crate::docx::styles::get_val;
use crate::docx::{
    NumberingMap, StyleMap, DOCUMENT_PATH, FIXTURE_PARTS, NUMBERING_PATH, STYLES_PATH,
};
use crate::error::{Error, Result};
use crate::model::HeadingLevel;

/// Size of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub rows: usize,
    /// Number of `w:gridCol` entries
    pub columns: usize,
}

/// One inline image as referenced from the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageSummary {
    pub rel_id: String,
    pub doc_pr_id: u32,
    pub name: String,
    /// Extent in EMUs
    pub width: u64,
    pub height: u64,
}

/// What [`inspect`] found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    /// Part paths in archive order
    pub parts: Vec<String>,
    /// Top-level and table-cell paragraphs
    pub paragraphs: usize,
    /// Heading count per level
    pub headings: BTreeMap<u8, usize>,
    /// List paragraph count per `numId`
    pub list_items: BTreeMap<String, usize>,
    /// Paragraphs with `w:pageBreakBefore`
    pub page_breaks: usize,
    pub tables: Vec<TableSummary>,
    pub images: Vec<ImageSummary>,
    /// Largest number of runs with their own `w:rPr` in one paragraph
    pub max_formatted_runs: usize,
    pub issues: Vec<String>,
}

impl PackageReport {
    /// Count headings at `level`.
    pub fn heading_count(&self, level: HeadingLevel) -> usize {
        self.headings.get(&level.level()).copied().unwrap_or(0)
    }

    /// List paragraphs referencing `num_id`.
    pub fn list_item_count(&self, num_id: u32) -> usize {
        self.list_items
            .get(&num_id.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Check if no issues were found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Inspect a package file.
///
/// # Example
///
/// ```no_run
/// let report = mkdocx::inspect::inspect_file("assets/test-docs/word-fidelity-stress-test.docx")?;
/// assert!(report.is_clean(), "{:?}", report.issues);
/// # Ok::<(), mkdocx::Error>(())
/// ```
pub fn inspect_file(path: impl AsRef<Path>) -> Result<PackageReport> {
    let container = OoxmlContainer::open(path)?;
    inspect(&container)
}

/// Inspect an opened package.
pub fn inspect(container: &OoxmlContainer) -> Result<PackageReport> {
    let mut report = PackageReport {
        parts: container.list_files(),
        ..Default::default()
    };

    check_part_set(&mut report);

    let mut malformed = BTreeSet::new();
    for part in report.parts.clone() {
        if !(part.ends_with(".xml") || part.ends_with(".rels")) {
            continue;
        }
        if let Err(e) = container.read_xml(&part).and_then(|xml| check_well_formed(&xml)) {
            report.issues.push(format!("{} is not well-formed: {}", part, e));
            malformed.insert(part);
        }
    }

    for source in ["", DOCUMENT_PATH] {
        if let Ok(rels) = container.read_relationships(source) {
            check_relationships(container, source, &rels, &mut report);
        }
    }

    if !container.exists(DOCUMENT_PATH) || malformed.contains(DOCUMENT_PATH) {
        return Ok(report);
    }

    let styles = load(container, STYLES_PATH, &malformed, StyleMap::parse)?;
    let numbering = load(container, NUMBERING_PATH, &malformed, NumberingMap::parse)?;
    let doc_rels = container.read_relationships(DOCUMENT_PATH)?;

    let scan = scan_document(&container.read_xml(DOCUMENT_PATH)?, styles.as_ref())?;
    report.paragraphs = scan.paragraphs;
    report.headings = scan.headings;
    report.page_breaks = scan.page_breaks;
    report.tables = scan.tables;
    report.max_formatted_runs = scan.max_formatted_runs;
    for (num_id, _) in &scan.list_levels {
        *report.list_items.entry(num_id.clone()).or_default() += 1;
    }

    for image in &scan.images {
        if doc_rels.get(&image.rel_id).is_none() {
            report.issues.push(format!(
                "image {} embeds {} which has no relationship",
                image.doc_pr_id, image.rel_id
            ));
        }
    }

    if let Some(numbering) = &numbering {
        check_numbering(numbering, &scan.list_levels, &mut report.issues);
    }

    match &styles {
        Some(styles) => {
            for style in &scan.styles {
                if !styles.contains(style) {
                    report.issues.push(format!("paragraph style {} is not defined", style));
                }
            }
        }
        None if !scan.styles.is_empty() => {
            report.issues.push("paragraph styles used without a styles part".to_string());
        }
        None => {}
    }

    report.images = scan.images;
    debug!(
        parts = report.parts.len(),
        paragraphs = report.paragraphs,
        issues = report.issues.len(),
        "package inspected"
    );
    Ok(report)
}

fn check_part_set(report: &mut PackageReport) {
    for expected in FIXTURE_PARTS {
        if !report.parts.iter().any(|p| p == expected) {
            report.issues.push(format!("missing part {}", expected));
        }
    }
    for part in &report.parts {
        if !FIXTURE_PARTS.contains(&part.as_str()) {
            report.issues.push(format!("unexpected part {}", part));
        }
    }
}

fn check_relationships(
    container: &OoxmlContainer,
    source: &str,
    rels: &Relationships,
    report: &mut PackageReport,
) {
    let owner = if source.is_empty() { "package" } else { source };
    for id in &rels.duplicate_ids {
        report
            .issues
            .push(format!("{} declares relationship {} twice", owner, id));
    }

    let mut ids: Vec<&String> = rels.by_id.keys().collect();
    ids.sort();
    for id in ids {
        let rel = &rels.by_id[id];
        if rel.external {
            continue;
        }
        let target = OoxmlContainer::resolve_path(source, &rel.target);
        if !container.exists(&target) {
            report.issues.push(format!(
                "{} relationship {} targets missing part {}",
                owner, rel.id, target
            ));
        }
    }
}

fn check_numbering(numbering: &NumberingMap, used: &[(String, u8)], issues: &mut Vec<String>) {
    let mut instances: Vec<(&String, &String)> = numbering.instances.iter().collect();
    instances.sort();
    for (num_id, abstract_id) in instances {
        if !numbering.abstract_nums.contains_key(abstract_id) {
            issues.push(format!(
                "numbering instance {} points to undefined abstractNum {}",
                num_id, abstract_id
            ));
        }
    }

    let distinct: BTreeSet<&(String, u8)> = used.iter().collect();
    for (num_id, level) in distinct {
        if !numbering.instances.contains_key(num_id) {
            issues.push(format!("numId {} has no numbering instance", num_id));
        } else if numbering.resolve(num_id).is_some() && numbering.level(num_id, *level).is_none() {
            issues.push(format!("numId {} defines no level {}", num_id, level));
        }
    }
}

/// Parse an optional part; parse failures of a well-formed part propagate.
fn load<T>(
    container: &OoxmlContainer,
    path: &str,
    malformed: &BTreeSet<String>,
    parse: fn(&str) -> Result<T>,
) -> Result<Option<T>> {
    if !container.exists(path) || malformed.contains(path) {
        return Ok(None);
    }
    parse(&container.read_xml(path)?).map(Some)
}

/// Check that `xml` parses and every element is closed.
pub fn check_well_formed(xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Error::XmlParse(format!("{} unclosed element(s)", depth)));
    }
    Ok(())
}

#[derive(Debug, Default)]
struct DocumentScan {
    paragraphs: usize,
    headings: BTreeMap<u8, usize>,
    /// (numId, ilvl) of every list paragraph
    list_levels: Vec<(String, u8)>,
    page_breaks: usize,
    tables: Vec<TableSummary>,
    images: Vec<ImageSummary>,
    max_formatted_runs: usize,
    /// Distinct `pStyle` values
    styles: BTreeSet<String>,
}

#[derive(Debug, Default)]
struct ParagraphState {
    style: Option<String>,
    num_id: Option<String>,
    level: u8,
    page_break: bool,
    formatted_runs: usize,
}

fn scan_document(xml: &str, styles: Option<&StyleMap>) -> Result<DocumentScan> {
    let mut scan = DocumentScan::default();
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut paragraph: Option<ParagraphState> = None;
    let mut in_run = false;
    let mut tables: Vec<TableSummary> = Vec::new();
    let mut image: Option<ImageSummary> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => paragraph = Some(ParagraphState::default()),
                b"w:r" => in_run = true,
                b"w:rPr" if in_run => {
                    if let Some(p) = paragraph.as_mut() {
                        p.formatted_runs += 1;
                    }
                }
                b"w:tbl" => tables.push(TableSummary { rows: 0, columns: 0 }),
                b"w:tr" => {
                    if let Some(t) = tables.last_mut() {
                        t.rows += 1;
                    }
                }
                b"wp:inline" => image = Some(ImageSummary::default()),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:pStyle" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.style = get_val(&e);
                    }
                }
                b"w:pageBreakBefore" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.page_break = get_val(&e).map_or(true, |v| v != "0" && v != "false");
                    }
                }
                b"w:numId" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.num_id = get_val(&e);
                    }
                }
                b"w:ilvl" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.level = get_val(&e).and_then(|v| v.parse().ok()).unwrap_or(0);
                    }
                }
                b"w:rPr" if in_run => {
                    if let Some(p) = paragraph.as_mut() {
                        p.formatted_runs += 1;
                    }
                }
                b"w:gridCol" => {
                    if let Some(t) = tables.last_mut() {
                        t.columns += 1;
                    }
                }
                b"wp:extent" => {
                    if let Some(img) = image.as_mut() {
                        img.width = attr(&e, b"cx").and_then(|v| v.parse().ok()).unwrap_or(0);
                        img.height = attr(&e, b"cy").and_then(|v| v.parse().ok()).unwrap_or(0);
                    }
                }
                b"wp:docPr" => {
                    if let Some(img) = image.as_mut() {
                        img.doc_pr_id = attr(&e, b"id").and_then(|v| v.parse().ok()).unwrap_or(0);
                        img.name = attr(&e, b"name").unwrap_or_default();
                    }
                }
                b"a:blip" => {
                    if let Some(img) = image.as_mut() {
                        img.rel_id = attr(&e, b"r:embed").unwrap_or_default();
                    }
                }
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(p) = paragraph.take() {
                        finish_paragraph(&mut scan, p, styles);
                    }
                }
                b"w:r" => in_run = false,
                b"w:tbl" => {
                    if let Some(t) = tables.pop() {
                        scan.tables.push(t);
                    }
                }
                b"wp:inline" => {
                    if let Some(img) = image.take() {
                        scan.images.push(img);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(scan)
}

fn finish_paragraph(scan: &mut DocumentScan, p: ParagraphState, styles: Option<&StyleMap>) {
    scan.paragraphs += 1;
    scan.max_formatted_runs = scan.max_formatted_runs.max(p.formatted_runs);
    if p.page_break {
        scan.page_breaks += 1;
    }
    if let Some(num_id) = p.num_id {
        scan.list_levels.push((num_id, p.level));
    }
    if let Some(style) = p.style {
        let level = styles
            .and_then(|s| s.heading_level(&style))
            .or_else(|| heading_from_id(&style));
        if let Some(level) = level {
            *scan.headings.entry(level.level()).or_default() += 1;
        }
        scan.styles.insert(style);
    }
}

/// Heading level from a `HeadingN` style id.
fn heading_from_id(style_id: &str) -> Option<HeadingLevel> {
    style_id
        .strip_prefix("Heading")?
        .parse()
        .ok()
        .and_then(HeadingLevel::from_number)
}

fn attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{build_package, FixtureOptions};
    use crate::docx::templates::{CONTENT_TYPES, PACKAGE_RELS};
    use crate::docx::{CONTENT_TYPES_PATH, PACKAGE_RELS_PATH};
    use crate::package::Package;

    fn open(package: &Package) -> OoxmlContainer {
        OoxmlContainer::from_bytes(package.to_bytes().unwrap()).unwrap()
    }

    #[test]
    fn test_well_formed() {
        assert!(check_well_formed("<a><b/></a>").is_ok());
        assert!(check_well_formed("<a><b></a>").is_err());
        assert!(check_well_formed("<a>").is_err());
    }

    #[test]
    fn test_full_coverage_report() {
        let package = build_package(&FixtureOptions::full_coverage()).unwrap();
        let report = inspect(&open(&package)).unwrap();

        assert!(report.is_clean(), "{:?}", report.issues);
        assert_eq!(report.parts.len(), 9);
        assert_eq!(report.heading_count(HeadingLevel::H1), 1);
        assert_eq!(report.heading_count(HeadingLevel::H2), 4);
        assert_eq!(report.list_item_count(1), 4);
        assert_eq!(report.list_item_count(2), 3);
        assert_eq!(report.images.len(), 3);
        assert_eq!(report.max_formatted_runs, 5);
        assert_eq!(report.tables, vec![TableSummary { rows: 3, columns: 3 }]);
        assert_eq!(report.page_breaks, 0);
    }

    #[test]
    fn test_report_flags_broken_references() {
        let document = concat!(
            r#"<w:document xmlns:w="w" xmlns:wp="wp" xmlns:a="a" xmlns:r="r"><w:body>"#,
            r#"<w:p><w:pPr><w:pStyle w:val="Fancy"/><w:numPr><w:ilvl w:val="0"/><w:numId w:val="9"/></w:numPr></w:pPr></w:p>"#,
            r#"<w:p><w:r><w:drawing><wp:inline><wp:docPr id="5" name="x"/><a:blip r:embed="rId42"/></wp:inline></w:drawing></w:r></w:p>"#,
            r#"</w:body></w:document>"#,
        );
        let mut package = Package::new();
        package.add_xml(CONTENT_TYPES_PATH, CONTENT_TYPES).unwrap();
        package.add_xml(PACKAGE_RELS_PATH, PACKAGE_RELS).unwrap();
        package.add_xml(DOCUMENT_PATH, document).unwrap();
        package.add_xml(STYLES_PATH, crate::docx::StyleSheet::Compact.xml()).unwrap();
        package
            .add_xml(NUMBERING_PATH, crate::docx::NumberingScheme::TwoLevel.xml())
            .unwrap();
        package.add_xml("word/extra.xml", "<broken>").unwrap();

        let report = inspect(&open(&package)).unwrap();
        let issues = report.issues.join("\n");

        assert!(issues.contains("missing part word/_rels/document.xml.rels"));
        assert!(issues.contains("missing part word/media/image-small.png"));
        assert!(issues.contains("unexpected part word/extra.xml"));
        assert!(issues.contains("word/extra.xml is not well-formed"));
        assert!(issues.contains("embeds rId42"));
        assert!(issues.contains("numId 9 has no numbering instance"));
        assert!(issues.contains("paragraph style Fancy is not defined"));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_dangling_relationship_target() {
        let mut package = Package::new();
        package.add_xml(CONTENT_TYPES_PATH, CONTENT_TYPES).unwrap();
        package.add_xml(PACKAGE_RELS_PATH, PACKAGE_RELS).unwrap();

        let report = inspect(&open(&package)).unwrap();
        assert!(report
            .issues
            .iter()
            .any(|i| i == "package relationship rId1 targets missing part word/document.xml"));
        assert_eq!(report.paragraphs, 0);
    }
}
