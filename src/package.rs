//! In-memory OOXML package and its ZIP serialization.

use crate::docx::{CONTENT_TYPES_PATH, PACKAGE_RELS_PATH};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Payload of a part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartData {
    /// UTF-8 XML text
    Xml(String),
    /// Opaque bytes (images)
    Binary(Vec<u8>),
}

impl PartData {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PartData::Xml(text) => text.as_bytes(),
            PartData::Binary(data) => data,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A named entry of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Archive path (e.g., "word/document.xml")
    pub path: String,
    pub data: PartData,
}

/// Ordered set of parts with unique paths.
#[derive(Debug, Clone, Default)]
pub struct Package {
    parts: Vec<Part>,
    paths: HashSet<String>,
}

impl Package {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part; fails if the path is already taken.
    pub fn add_part(&mut self, path: impl Into<String>, data: PartData) -> Result<()> {
        let path = path.into();
        if !self.paths.insert(path.clone()) {
            return Err(Error::DuplicatePart(path));
        }
        self.parts.push(Part { path, data });
        Ok(())
    }

    /// Add an XML text part.
    pub fn add_xml(&mut self, path: impl Into<String>, xml: impl Into<String>) -> Result<()> {
        self.add_part(path, PartData::Xml(xml.into()))
    }

    /// Add a binary part.
    pub fn add_binary(&mut self, path: impl Into<String>, data: Vec<u8>) -> Result<()> {
        self.add_part(path, PartData::Binary(data))
    }

    /// Get a part by path.
    pub fn get(&self, path: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.path == path)
    }

    /// Check if a part exists.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Parts in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Part paths in insertion order.
    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.path.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Check the parts every archive-based document needs.
    pub fn validate(&self) -> Result<()> {
        for required in [CONTENT_TYPES_PATH, PACKAGE_RELS_PATH] {
            if !self.contains(required) {
                return Err(Error::MissingComponent(required.to_string()));
            }
        }
        Ok(())
    }

    /// Serialize the package to a ZIP archive in memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_archive(Cursor::new(&mut buffer))?;
        Ok(buffer)
    }

    /// Write the package to `path`, creating parent directories and
    /// overwriting any existing file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mkdocx::package::Package;
    ///
    /// let mut package = Package::new();
    /// package.add_xml("[Content_Types].xml", "<Types/>")?;
    /// package.add_xml("_rels/.rels", "<Relationships/>")?;
    /// package.write_to("out/minimal.docx")?;
    /// # Ok::<(), mkdocx::Error>(())
    /// ```
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.validate()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        self.write_archive(BufWriter::new(file))?;
        debug!(path = %path.display(), parts = self.len(), "package written");
        Ok(())
    }

    /// Write every part, deflated and with a fixed timestamp, in order.
    fn write_archive<W: Write + Seek>(&self, writer: W) -> Result<()> {
        self.validate()?;

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let mut zip = ZipWriter::new(writer);
        for part in &self.parts {
            zip.start_file(part.path.as_str(), options)?;
            zip.write_all(part.data.as_bytes())?;
            debug!(part = %part.path, bytes = part.data.len(), "part added");
        }
        let mut inner = zip.finish()?;
        inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn minimal() -> Package {
        let mut package = Package::new();
        package.add_xml(CONTENT_TYPES_PATH, "<Types/>").unwrap();
        package.add_xml(PACKAGE_RELS_PATH, "<Relationships/>").unwrap();
        package
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut package = minimal();
        let err = package.add_xml(CONTENT_TYPES_PATH, "<Types/>").unwrap_err();
        assert!(matches!(err, Error::DuplicatePart(ref p) if p == CONTENT_TYPES_PATH));
        assert_eq!(package.len(), 2);
    }

    #[test]
    fn test_validate_requires_manifest_and_rels() {
        let mut package = Package::new();
        package.add_xml("word/document.xml", "<w:document/>").unwrap();
        assert!(matches!(
            package.validate(),
            Err(Error::MissingComponent(ref p)) if p == CONTENT_TYPES_PATH
        ));
        assert!(package.to_bytes().is_err());
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn test_archive_entries_are_deflated_and_ordered() {
        let mut package = minimal();
        package.add_binary("word/media/a.png", vec![1, 2, 3]).unwrap();

        let bytes = package.to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);

        let names: Vec<String> = archive.file_names().map(String::from).collect();
        assert!(names.contains(&"word/media/a.png".to_string()));

        for i in 0..archive.len() {
            let entry = archive.by_index(i).unwrap();
            assert_eq!(entry.compression(), CompressionMethod::Deflated);
        }

        let mut data = Vec::new();
        archive
            .by_name("word/media/a.png")
            .unwrap()
            .read_to_end(&mut data)
            .unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_write_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.docx");

        minimal().write_to(&path).unwrap();
        assert!(path.exists());

        let mut bigger = minimal();
        bigger.add_xml("word/document.xml", "<w:document/>").unwrap();
        bigger.write_to(&path).unwrap();

        let archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 3);
    }

    #[test]
    fn test_invalid_package_leaves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        minimal().write_to(&path).unwrap();
        let before = fs::read(&path).unwrap();

        let mut invalid = Package::new();
        invalid.add_xml("word/document.xml", "<w:document/>").unwrap();
        let err = invalid.write_to(&path).unwrap_err();
        assert!(matches!(err, Error::MissingComponent(ref p) if p == CONTENT_TYPES_PATH));
        assert_eq!(fs::read(&path).unwrap(), before);

        let missing = dir.path().join("never/out.docx");
        assert!(invalid.write_to(&missing).is_err());
        assert!(!missing.parent().unwrap().exists());
    }

    #[test]
    fn test_write_into_missing_parent_that_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file").unwrap();

        let err = minimal().write_to(blocker.join("out.docx")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
