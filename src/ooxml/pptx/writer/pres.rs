/// Presentation writer for PPTX.
use super::push_int;
use super::slide::MutableSlide;
use crate::common::{Error, Result as CrateResult};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use crate::ooxml::pptx::template;
use std::path::Path;

/// Default slide width: 10 inches.
pub const DEFAULT_SLIDE_WIDTH: i64 = 9_144_000;
/// Default slide height: 7.5 inches.
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6_858_000;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions and document properties,
/// and serialize the whole package.
///
/// # Examples
///
/// ```rust,no_run
/// use signal_deck::ooxml::pptx::writer::MutablePresentation;
///
/// let mut pres = MutablePresentation::new();
/// pres.add_slide();
/// pres.save("deck.pptx")?;
/// # Ok::<(), signal_deck::Error>(())
/// ```
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    title: Option<String>,
    creator: Option<String>,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            title: None,
            creator: None,
        }
    }

    /// Append a new blank slide and return it.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(MutableSlide::new(slide_id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    /// Set the document title stored in docProps/core.xml.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Set the author stored in docProps/core.xml.
    pub fn set_creator(&mut self, creator: &str) {
        self.creator = Some(creator.to_string());
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> String {
        let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a=""#);
        xml.push_str(namespace::DML_MAIN);
        xml.push_str(r#"" xmlns:r=""#);
        xml.push_str(namespace::OFC_RELATIONSHIPS);
        xml.push_str(r#"" xmlns:p=""#);
        xml.push_str(namespace::PML_MAIN);
        xml.push_str(r#"" saveSubsetFonts="1">"#);

        xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id=""#);
        xml.push_str(master_rel_id);
        xml.push_str(r#""/></p:sldMasterIdLst>"#);

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                xml.push_str(r#"<p:sldId id=""#);
                push_int(&mut xml, slide.slide_id());
                xml.push_str(r#"" r:id=""#);
                xml.push_str(rel_id);
                xml.push_str(r#""/>"#);
            }
            xml.push_str("</p:sldIdLst>");
        }

        xml.push_str(r#"<p:sldSz cx=""#);
        push_int(&mut xml, self.slide_width);
        xml.push_str(r#"" cy=""#);
        push_int(&mut xml, self.slide_height);
        xml.push_str(r#""/>"#);
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("<p:defaultTextStyle><a:defPPr><a:defRPr lang=\"en-US\"/></a:defPPr></p:defaultTextStyle>");
        xml.push_str("</p:presentation>");

        xml
    }

    /// Assemble the complete OPC package.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml")?;
        let layout_uri = PackURI::new("/ppt/slideLayouts/slideLayout1.xml")?;
        let theme_uri = PackURI::new("/ppt/theme/theme1.xml")?;
        let pres_props_uri = PackURI::new("/ppt/presProps.xml")?;
        let view_props_uri = PackURI::new("/ppt/viewProps.xml")?;
        let table_styles_uri = PackURI::new("/ppt/tableStyles.xml")?;
        let core_uri = PackURI::new("/docProps/core.xml")?;
        let app_uri = PackURI::new("/docProps/app.xml")?;

        let mut pres_part = Part::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
        pres_part.relate_to(&view_props_uri, rt::VIEW_PROPS);
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);

        let mut slide_parts = Vec::with_capacity(self.slides.len());
        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        for (index, slide) in self.slides.iter().enumerate() {
            let slide_uri = PackURI::new(format!("/ppt/slides/slide{}.xml", index + 1))?;
            slide_rel_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));

            let mut part = Part::new(slide_uri, ct::PML_SLIDE, slide.to_xml().into_bytes());
            part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            slide_parts.push(part);
        }

        pres_part.set_blob(
            self.generate_presentation_xml(&master_rel_id, &slide_rel_ids)
                .into_bytes(),
        );
        pkg.add_part(pres_part);

        let mut master = Part::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml().as_bytes().to_vec(),
        );
        // Layout first: the master XML refers to it as rId1.
        master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master.relate_to(&theme_uri, rt::THEME);
        pkg.add_part(master);

        let mut layout = Part::new(
            layout_uri,
            ct::PML_SLIDE_LAYOUT,
            template::blank_slide_layout_xml().as_bytes().to_vec(),
        );
        layout.relate_to(&master_uri, rt::SLIDE_MASTER);
        pkg.add_part(layout);

        pkg.add_part(Part::new(
            theme_uri,
            ct::OFC_THEME,
            template::default_theme_xml().as_bytes().to_vec(),
        ));
        pkg.add_part(Part::new(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml().as_bytes().to_vec(),
        ));
        pkg.add_part(Part::new(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml().as_bytes().to_vec(),
        ));
        pkg.add_part(Part::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml().as_bytes().to_vec(),
        ));

        for part in slide_parts {
            pkg.add_part(part);
        }

        let core_xml = template::core_props_xml(
            self.title.as_deref().unwrap_or_default(),
            self.creator.as_deref().unwrap_or(env!("CARGO_PKG_NAME")),
            chrono::Utc::now(),
        );
        pkg.add_part(Part::new(core_uri.clone(), ct::OPC_CORE_PROPERTIES, core_xml.into_bytes()));
        pkg.add_part(Part::new(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(self.slides.len()).into_bytes(),
        ));

        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(pkg)
    }

    /// Serialize the presentation to the bytes of a .pptx file.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.to_package()?.to_bytes()?)
    }

    /// Save the presentation, replacing any existing file at `path`.
    ///
    /// The package is fully serialized in memory before the file is opened,
    /// so a failure while building leaves an existing file untouched.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CrateResult<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        std::fs::write(path, &bytes).map_err(|source| Error::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;

        log::info!(
            "wrote {} ({} slides, {} bytes)",
            path.display(),
            self.slides.len(),
            bytes.len()
        );
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
