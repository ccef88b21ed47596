//! Presentation-level view: slide size, document title and slides in order.
use crate::common::xml::escape::resolve_entity;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::pptx::slide::Slide;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A PowerPoint presentation read from a package.
///
/// Slides are parsed eagerly and kept in `p:sldIdLst` order.
///
/// # Examples
///
/// ```rust,no_run
/// use signal_deck::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
///
/// println!("Slide size: {} x {} EMU", pres.slide_width(), pres.slide_height());
/// println!("Slides: {}", pres.slide_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    slides: Vec<Slide>,
    slide_width: i64,
    slide_height: i64,
    title: Option<String>,
}

impl Presentation {
    /// Load the presentation rooted at the package's main document part.
    pub(crate) fn load(opc: &OpcPackage) -> Result<Self> {
        let main_part = opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;
        let info = PresentationInfo::from_xml(main_part.blob())?;

        let mut slides = Vec::with_capacity(info.slide_rids.len());
        for r_id in &info.slide_rids {
            let partname = main_part.related_partname(r_id)?;
            let part = opc.get_part(&partname)?;
            log::trace!("parsing slide {}", partname);
            slides.push(Slide::from_xml(part.blob())?);
        }

        let title = match opc.part_by_reltype(rt::CORE_PROPERTIES) {
            Ok(part) => core_title(part.blob())?,
            Err(_) => None,
        };

        Ok(Self {
            slides,
            slide_width: info.slide_width,
            slide_height: info.slide_height,
            title,
        })
    }

    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide width in EMUs.
    #[inline]
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Slide height in EMUs.
    #[inline]
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Document title from the core properties, if present and non-empty.
    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// What `ppt/presentation.xml` itself says.
struct PresentationInfo {
    slide_rids: Vec<String>,
    slide_width: i64,
    slide_height: i64,
}

impl PresentationInfo {
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut info = Self {
            slide_rids: Vec::new(),
            slide_width: 0,
            slide_height: 0,
        };
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    b"sldId" => {
                        if let Some(r_id) = attr_value(e, b"r:id")? {
                            info.slide_rids.push(r_id);
                        }
                    },
                    b"sldSz" => {
                        info.slide_width = attr_i64(e, b"cx")?;
                        info.slide_height = attr_i64(e, b"cy")?;
                    },
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(info)
    }
}

/// Pull `dc:title` out of `docProps/core.xml`.
fn core_title(xml: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut in_title = false;
    let mut title = String::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"title" => in_title = true,
            Ok(Event::End(ref e)) if e.local_name().as_ref() == b"title" => break,
            Ok(Event::Text(ref e)) if in_title => {
                let raw = std::str::from_utf8(e).map_err(|e| OoxmlError::Xml(e.to_string()))?;
                title.push_str(&unescape_xml(raw));
            },
            Ok(Event::GeneralRef(ref e)) if in_title => {
                let name = std::str::from_utf8(e).map_err(|e| OoxmlError::Xml(e.to_string()))?;
                if let Some(resolved) = resolve_entity(name) {
                    title.push_str(&resolved);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    Ok((!title.is_empty()).then_some(title))
}

fn attr_value(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| OoxmlError::Xml(e.to_string()))?;
        if attr.key.as_ref() == name {
            let raw = std::str::from_utf8(&attr.value).map_err(|e| OoxmlError::Xml(e.to_string()))?;
            return Ok(Some(unescape_xml(raw)));
        }
    }
    Ok(None)
}

fn attr_i64(e: &BytesStart, name: &[u8]) -> Result<i64> {
    match attr_value(e, name)? {
        Some(v) => atoi_simd::parse::<i64, false, false>(v.as_bytes())
            .map_err(|_| OoxmlError::InvalidFormat(format!("invalid slide size: {}", v))),
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_info_reads_slide_list_and_size() {
        let xml = br#"<p:presentation xmlns:p="p" xmlns:r="r">
            <p:sldIdLst><p:sldId id="256" r:id="rId6"/><p:sldId id="257" r:id="rId7"/></p:sldIdLst>
            <p:sldSz cx="9144000" cy="6858000"/><p:notesSz cx="6858000" cy="9144000"/>
            </p:presentation>"#;
        let info = PresentationInfo::from_xml(xml).unwrap();
        assert_eq!(info.slide_rids, vec!["rId6", "rId7"]);
        assert_eq!(info.slide_width, 9_144_000);
        assert_eq!(info.slide_height, 6_858_000);
    }

    #[test]
    fn test_core_title() {
        let xml = br#"<cp:coreProperties xmlns:cp="cp" xmlns:dc="dc">
            <dc:title>R&amp;D Overview</dc:title><dc:creator>x</dc:creator></cp:coreProperties>"#;
        assert_eq!(core_title(xml).unwrap().as_deref(), Some("R&D Overview"));

        let empty = br#"<cp:coreProperties xmlns:cp="cp" xmlns:dc="dc"><dc:title/></cp:coreProperties>"#;
        assert_eq!(core_title(empty).unwrap(), None);
    }

    #[test]
    fn test_invalid_slide_size_is_rejected() {
        let xml = br#"<p:presentation xmlns:p="p"><p:sldSz cx="wide" cy="6858000"/></p:presentation>"#;
        assert!(matches!(
            PresentationInfo::from_xml(xml),
            Err(OoxmlError::InvalidFormat(_))
        ));
    }
}
