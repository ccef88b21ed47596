//! Low-level, read-only API to a serialized Open Packaging Convention (OPC) package.
//!
//! Parses the content type map, then walks the relationship graph from the
//! package relationships to load every reachable part.

use crate::common::xml::unescape_xml;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::{HashMap, HashSet, VecDeque};

/// Content type map for looking up content types by part name or extension.
///
/// Implements the OPC content type discovery algorithm using Default and Override elements
/// from [Content_Types].xml.
struct ContentTypeMap {
    /// Maps lowercase file extensions to default content types
    defaults: HashMap<String, String>,

    /// Maps specific partnames to override content types
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    /// Parse content types from [Content_Types].xml.
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self {
            defaults: HashMap::new(),
            overrides: HashMap::new(),
        };
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(ref e) | Event::Start(ref e) => match e.local_name().as_ref() {
                    b"Default" => {
                        if let (Some(ext), Some(ct)) =
                            (attr_value(e, b"Extension")?, attr_value(e, b"ContentType")?)
                        {
                            map.defaults.insert(ext.to_lowercase(), ct);
                        }
                    },
                    b"Override" => {
                        if let (Some(pn), Some(ct)) =
                            (attr_value(e, b"PartName")?, attr_value(e, b"ContentType")?)
                        {
                            map.overrides.insert(pn, ct);
                        }
                    },
                    _ => {},
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Get the content type for a partname.
    ///
    /// Overrides win; otherwise the default for the extension applies.
    fn get(&self, pack_uri: &PackURI) -> Result<String> {
        if let Some(ct) = self.overrides.get(pack_uri.as_str()) {
            return Ok(ct.clone());
        }

        self.defaults
            .get(&pack_uri.ext().to_lowercase())
            .cloned()
            .ok_or_else(|| OpcError::ContentTypeNotFound(pack_uri.to_string()))
    }
}

/// Read one attribute as an unescaped string.
fn attr_value(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            let raw = std::str::from_utf8(&attr.value)?;
            return Ok(Some(unescape_xml(raw)));
        }
    }
    Ok(None)
}

/// Package reader that loads a serialized package into an [`OpcPackage`].
pub struct PackageReader {
    phys_reader: PhysPkgReader,
    content_types: ContentTypeMap,
}

impl PackageReader {
    /// Open the ZIP archive and parse its content type map.
    pub fn new(data: Vec<u8>) -> Result<Self> {
        let phys_reader = PhysPkgReader::from_bytes(data)?;
        let content_types = ContentTypeMap::from_xml(&phys_reader.content_types_xml()?)?;
        Ok(Self {
            phys_reader,
            content_types,
        })
    }

    /// Load every part reachable from the package relationships.
    ///
    /// Parts are added in breadth-first discovery order. External
    /// relationships are kept but never followed.
    pub fn load(self) -> Result<OpcPackage> {
        let package_uri = PackURI::new(PACKAGE_URI)?;
        let pkg_rels = self.load_rels(&package_uri)?;

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        Self::enqueue_targets(&pkg_rels, &mut visited, &mut queue)?;

        let mut package = OpcPackage::new();
        while let Some(partname) = queue.pop_front() {
            let rels = self.load_rels(&partname)?;
            Self::enqueue_targets(&rels, &mut visited, &mut queue)?;

            let blob = self.phys_reader.blob_for(&partname)?;
            let content_type = self.content_types.get(&partname)?;
            log::trace!("loaded part {} ({})", partname, content_type);
            package.add_part(Part::with_rels(partname, content_type, blob, rels));
        }

        package.set_rels(pkg_rels);
        Ok(package)
    }

    fn load_rels(&self, source_uri: &PackURI) -> Result<Relationships> {
        let base_uri = source_uri.base_uri().to_string();
        match self.phys_reader.rels_xml_for(source_uri)? {
            Some(xml) => Relationships::from_xml(base_uri, &xml),
            None => Ok(Relationships::new(base_uri)),
        }
    }

    fn enqueue_targets(
        rels: &Relationships,
        visited: &mut HashSet<PackURI>,
        queue: &mut VecDeque<PackURI>,
    ) -> Result<()> {
        for rel in rels.iter().filter(|rel| !rel.is_external()) {
            let partname = rel.target_partname()?;
            if visited.insert(partname.clone()) {
                queue.push_back(partname);
            }
        }
        Ok(())
    }
}
