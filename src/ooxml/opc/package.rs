/// Objects that implement reading and writing OPC packages.
///
/// This module provides the main OpcPackage type, which represents an Open Packaging
/// Convention package in memory. It manages parts and package-level relationships.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashMap;
use std::path::Path;

/// Main API class for working with OPC packages.
///
/// Parts keep their insertion order, so a package written twice from the same
/// content lists its ZIP members in the same order.
#[derive(Debug)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in insertion order
    parts: Vec<Part>,

    /// Partname to index into `parts`
    index: HashMap<String, usize>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Open an OPC package from a file.
    ///
    /// # Example
    /// ```no_run
    /// use signal_deck::ooxml::opc::OpcPackage;
    ///
    /// let pkg = OpcPackage::open("deck.pptx").unwrap();
    /// println!("{} parts", pkg.part_count());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Load an OPC package from the bytes of a ZIP archive.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        PackageReader::new(data)?.load()
    }

    /// Serialize this package to the bytes of a ZIP archive.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Get a reference to the main document part.
    ///
    /// For PowerPoint, this is the presentation.xml part.
    pub fn main_document_part(&self) -> Result<&Part> {
        self.part_by_reltype(relationship_type::OFFICE_DOCUMENT)
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.index
            .get(partname.as_str())
            .map(|&i| &self.parts[i])
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get a part by relationship type from the package level.
    pub fn part_by_reltype(&self, reltype: &str) -> Result<&Part> {
        let rel = self.rels.part_with_reltype(reltype)?;
        let partname = rel.target_partname()?;
        self.get_part(&partname)
    }

    /// Add a new part to the package, replacing any part with the same name.
    pub fn add_part(&mut self, part: Part) {
        let partname = part.partname().to_string();
        match self.index.get(&partname) {
            Some(&i) => self.parts[i] = part,
            None => {
                self.index.insert(partname, self.parts.len());
                self.parts.push(part);
            },
        }
    }

    /// Get an iterator over all parts in the package.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Check if a part exists in the package.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.index.contains_key(partname.as_str())
    }

    /// Get a reference to the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub(crate) fn set_rels(&mut self, rels: Relationships) {
        self.rels = rels;
    }

    /// Relate the package to a part, returning the relationship ID.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        let target_ref = partname.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;

    fn pres_uri() -> PackURI {
        PackURI::new("/ppt/presentation.xml").unwrap()
    }

    #[test]
    fn test_main_document_part() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(Part::new(pres_uri(), ct::PML_PRESENTATION_MAIN, b"<p/>".to_vec()));
        let r_id = pkg.relate_to(&pres_uri(), relationship_type::OFFICE_DOCUMENT);
        assert_eq!(r_id, "rId1");
        assert_eq!(pkg.rels().get("rId1").unwrap().target_ref(), "ppt/presentation.xml");

        let main = pkg.main_document_part().unwrap();
        assert_eq!(main.content_type(), ct::PML_PRESENTATION_MAIN);
    }

    #[test]
    fn test_add_part_replaces_same_name() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(Part::new(pres_uri(), ct::XML, b"old".to_vec()));
        pkg.add_part(Part::new(pres_uri(), ct::XML, b"new".to_vec()));
        assert_eq!(pkg.part_count(), 1);
        assert_eq!(pkg.get_part(&pres_uri()).unwrap().blob(), b"new");
    }

    #[test]
    fn test_missing_part() {
        let pkg = OpcPackage::new();
        assert!(matches!(pkg.get_part(&pres_uri()), Err(OpcError::PartNotFound(_))));
        assert!(pkg.main_document_part().is_err());
        assert!(matches!(
            OpcPackage::open("/nonexistent/deck.pptx"),
            Err(OpcError::PackageNotFound(_))
        ));
    }
}
