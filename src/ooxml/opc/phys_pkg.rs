//! Provides a general interface to a physical OPC package (ZIP file).
//!
//! The reader decompresses members on demand; the writer deflates every
//! member into an in-memory archive.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PackURI};
use std::cell::RefCell;
use std::io::{Cursor, Read, Write};
use zip::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Physical package reader that provides access to parts in a ZIP-based OPC package.
pub struct PhysPkgReader {
    /// The underlying ZIP archive, borrowed mutably for each member read
    archive: RefCell<ZipArchive<Cursor<Vec<u8>>>>,
}

impl PhysPkgReader {
    /// Create a new reader over the bytes of a ZIP archive.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a readable ZIP archive.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Get the binary content for a part by its PackURI.
    pub fn blob_for(&self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(pack_uri.membername())
            .map_err(|_| OpcError::PartNotFound(pack_uri.to_string()))?;

        let mut content = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Get the [Content_Types].xml content.
    ///
    /// This is a required part of every OPC package that maps parts to content types.
    pub fn content_types_xml(&self) -> Result<Vec<u8>> {
        self.blob_for(&PackURI::new(CONTENT_TYPES_URI)?)
    }

    /// Get the relationships XML for a specific source URI.
    ///
    /// Returns None if the source has no relationships part.
    pub fn rels_xml_for(&self, source_uri: &PackURI) -> Result<Option<Vec<u8>>> {
        match self.blob_for(&source_uri.rels_uri()?) {
            Ok(blob) => Ok(Some(blob)),
            Err(OpcError::PartNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get the number of members in the archive.
    pub fn len(&self) -> usize {
        self.archive.borrow().len()
    }

    /// Check if the archive has no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// List all member names in the package.
    pub fn member_names(&self) -> Vec<String> {
        self.archive
            .borrow()
            .file_names()
            .map(String::from)
            .collect()
    }

    /// Check if a specific member exists in the package.
    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.archive
            .borrow()
            .index_for_name(pack_uri.membername())
            .is_some()
    }
}

/// Physical package writer for creating OPC packages in memory.
pub struct PhysPkgWriter {
    /// The underlying ZIP archive writer
    zip_writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            zip_writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip_writer.start_file(pack_uri.membername(), options)?;
        self.zip_writer.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip_writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        writer.write(&pack_uri, b"<p:sld/>").unwrap();
        let zip_data = writer.finish().unwrap();

        let reader = PhysPkgReader::from_bytes(zip_data).unwrap();
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), b"<p:sld/>");
        assert_eq!(reader.len(), 1);
        assert_eq!(reader.member_names(), vec!["ppt/slides/slide1.xml".to_string()]);
    }

    #[test]
    fn test_missing_members() {
        let mut writer = PhysPkgWriter::new();
        let content_types = PackURI::new(CONTENT_TYPES_URI).unwrap();
        writer.write(&content_types, b"<Types/>").unwrap();
        let reader = PhysPkgReader::from_bytes(writer.finish().unwrap()).unwrap();

        assert!(reader.contains(&content_types));
        assert_eq!(reader.content_types_xml().unwrap(), b"<Types/>");

        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert!(!reader.contains(&slide));
        assert!(matches!(reader.blob_for(&slide), Err(OpcError::PartNotFound(_))));
        assert!(reader.rels_xml_for(&slide).unwrap().is_none());
    }

    #[test]
    fn test_not_a_zip() {
        assert!(PhysPkgReader::from_bytes(b"plain text".to_vec()).is_err());
    }
}
