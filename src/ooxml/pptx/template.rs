//! Presentation template module.
//!
//! Fixed parts every new presentation carries (slide master, blank layout,
//! theme, presentation properties) plus the generated document property
//! parts.

use crate::common::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};

/// Slide master with one blank layout at `rId1`.
///
/// The master's relationships must relate the layout first and the theme
/// second.
pub fn default_slide_master_xml() -> &'static str {
    include_str!("../../../resources/slideMasters/slideMaster1.xml")
}

/// Blank slide layout (no placeholders).
pub fn blank_slide_layout_xml() -> &'static str {
    include_str!("../../../resources/slideLayouts/slideLayout1.xml")
}

/// Office theme: color, font and format schemes.
pub fn default_theme_xml() -> &'static str {
    include_str!("../../../resources/theme/theme1.xml")
}

pub fn default_table_styles_xml() -> &'static str {
    include_str!("../../../resources/tableStyles.xml")
}

pub fn default_view_props_xml() -> &'static str {
    include_str!("../../../resources/viewProps.xml")
}

pub fn default_pres_props_xml() -> &'static str {
    include_str!("../../../resources/presProps.xml")
}

/// docProps/core.xml with title, creator and W3CDTF timestamps.
pub fn core_props_xml(title: &str, creator: &str, timestamp: DateTime<Utc>) -> String {
    let stamp = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
    let creator = escape_xml(creator);

    let mut xml = String::with_capacity(768);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    xml.push_str("<dc:title>");
    xml.push_str(&escape_xml(title));
    xml.push_str("</dc:title><dc:creator>");
    xml.push_str(&creator);
    xml.push_str("</dc:creator><cp:lastModifiedBy>");
    xml.push_str(&creator);
    xml.push_str("</cp:lastModifiedBy><cp:revision>1</cp:revision>");
    xml.push_str(r#"<dcterms:created xsi:type="dcterms:W3CDTF">"#);
    xml.push_str(&stamp);
    xml.push_str(r#"</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">"#);
    xml.push_str(&stamp);
    xml.push_str("</dcterms:modified></cp:coreProperties>");
    xml
}

/// docProps/app.xml reporting the slide count.
pub fn app_props_xml(slide_count: usize) -> String {
    let mut buf = itoa::Buffer::new();
    let mut xml = String::with_capacity(640);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<TotalTime>0</TotalTime><Words>0</Words>");
    xml.push_str("<Application>");
    xml.push_str(env!("CARGO_PKG_NAME"));
    xml.push_str("</Application>");
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    xml.push_str("<Paragraphs>0</Paragraphs><Slides>");
    xml.push_str(buf.format(slide_count));
    xml.push_str("</Slides><Notes>0</Notes><HiddenSlides>0</HiddenSlides><MMClips>0</MMClips>");
    xml.push_str("<ScaleCrop>false</ScaleCrop><LinksUpToDate>false</LinksUpToDate>");
    xml.push_str("<SharedDoc>false</SharedDoc><HyperlinksChanged>false</HyperlinksChanged>");
    xml.push_str("<AppVersion>16.0000</AppVersion></Properties>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_master_references_layout_rid1() {
        assert!(default_slide_master_xml().contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(blank_slide_layout_xml().contains(r#"type="blank""#));
        assert!(default_table_styles_xml().contains("{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"));
    }

    #[test]
    fn test_core_props() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let xml = core_props_xml("Q&A", "signal-deck", ts);
        assert!(xml.contains("<dc:title>Q&amp;A</dc:title>"));
        assert!(xml.contains(">2026-01-02T03:04:05Z</dcterms:created>"));
    }

    #[test]
    fn test_app_props() {
        assert!(app_props_xml(14).contains("<Slides>14</Slides>"));
    }
}
