//! Package implementation for PowerPoint presentations.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::pptx::presentation::Presentation;
use std::path::Path;

/// A PowerPoint (.pptx) package.
///
/// This is the entry point for reading presentations back. It wraps an OPC
/// package whose main document part is a PresentationML presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use signal_deck::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
/// println!("Presentation has {} slides", pres.slide_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_opc(OpcPackage::open(path)?)
    }

    /// Read a .pptx package from the bytes of its ZIP archive.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_opc(OpcPackage::from_bytes(data)?)
    }

    fn from_opc(opc: OpcPackage) -> Result<Self> {
        let main_part = opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        // Support both regular and macro-enabled presentations
        let content_type = main_part.content_type();
        if content_type != ct::PML_PRESENTATION_MAIN && content_type != ct::PML_PRES_MACRO_MAIN {
            return Err(OoxmlError::InvalidContentType {
                expected: format!(
                    "{} or {}",
                    ct::PML_PRESENTATION_MAIN,
                    ct::PML_PRES_MACRO_MAIN
                ),
                got: content_type.to_string(),
            });
        }

        Ok(Self { opc })
    }

    /// Parse the main presentation and all of its slides.
    pub fn presentation(&self) -> Result<Presentation> {
        Presentation::load(&self.opc)
    }

    /// Get the underlying OPC package.
    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::packuri::PackURI;
    use crate::ooxml::opc::part::Part;
    use crate::ooxml::pptx::writer::{Bounds, MutablePresentation, TextFrame, TextParagraph};

    #[test]
    fn test_round_trip_through_bytes() {
        let mut pres = MutablePresentation::new();
        pres.set_title("Round Trip");
        pres.add_slide()
            .add_rectangle(Bounds::from_inches(0.0, 0.0, 10.0, 1.0))
            .fill(RGBColor::new(0, 102, 204));
        pres.add_slide().add_text_box(
            Bounds::from_inches(1.0, 2.5, 8.0, 1.5),
            TextFrame::from_text("Hello", &TextParagraph::new("").size(54.0)),
        );

        let pkg = Package::from_bytes(pres.to_bytes().unwrap()).unwrap();
        let read = pkg.presentation().unwrap();
        assert_eq!(read.slide_count(), 2);
        assert_eq!(read.slide_width(), 9_144_000);
        assert_eq!(read.slide_height(), 6_858_000);
        assert_eq!(read.title(), Some("Round Trip"));
        assert_eq!(read.slides()[0].rectangles().count(), 1);
        assert_eq!(read.slides()[1].text(), "Hello");
    }

    #[test]
    fn test_rejects_non_presentation_main_part() {
        let mut opc = OpcPackage::new();
        let partname = PackURI::new("/word/document.xml").unwrap();
        opc.add_part(Part::new(
            partname.clone(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
            b"<w:document/>".to_vec(),
        ));
        opc.relate_to(&partname, rt::OFFICE_DOCUMENT);

        let bytes = opc.to_bytes().unwrap();
        assert!(matches!(
            Package::from_bytes(bytes),
            Err(OoxmlError::InvalidContentType { .. })
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Package::open(dir.path().join("absent.pptx")).is_err());
    }
}
