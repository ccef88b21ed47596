/// Slide types and implementation for PPTX presentations.
use super::shape::{Bounds, MutableShape};
use super::table::MutableTable;
use super::text::TextFrame;
use crate::ooxml::opc::constants::namespace;

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, 256 and up)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Shape ids start at 2; id 1 belongs to the shape tree.
    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Add a rectangle. Use the returned shape to set fill and outline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use signal_deck::common::RGBColor;
    /// use signal_deck::ooxml::pptx::writer::{Bounds, MutablePresentation};
    ///
    /// let mut pres = MutablePresentation::new();
    /// let slide = pres.add_slide();
    /// slide
    ///     .add_rectangle(Bounds::from_inches(0.0, 0.0, 10.0, 1.0))
    ///     .fill(RGBColor::new(0, 102, 204))
    ///     .no_line();
    /// assert_eq!(slide.shape_count(), 1);
    /// ```
    pub fn add_rectangle(&mut self, bounds: Bounds) -> &mut MutableShape {
        let shape = MutableShape::new_rectangle(self.next_shape_id(), bounds);
        self.push(shape)
    }

    /// Add a text box holding `frame`.
    pub fn add_text_box(&mut self, bounds: Bounds, frame: TextFrame) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(self.next_shape_id(), bounds, frame);
        self.push(shape)
    }

    /// Add a table inside a graphic frame.
    ///
    /// Columns without an explicit width share the frame width evenly, and
    /// rows share its height.
    pub fn add_table(&mut self, bounds: Bounds, table: MutableTable) -> &mut MutableShape {
        let shape = MutableShape::new_table(self.next_shape_id(), bounds, table);
        self.push(shape)
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Shapes in z-order.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Generate slide XML content.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 768);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:sld xmlns:a=""#);
        xml.push_str(namespace::DML_MAIN);
        xml.push_str(r#"" xmlns:r=""#);
        xml.push_str(namespace::OFC_RELATIONSHIPS);
        xml.push_str(r#"" xmlns:p=""#);
        xml.push_str(namespace::PML_MAIN);
        xml.push_str(r#"">"#);

        xml.push_str("<p:cSld><p:spTree>");

        // Group shape properties of the tree itself (required)
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str("<p:grpSpPr><a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm></p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml);
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::writer::TextParagraph;

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = MutableSlide::new(256);
        slide.add_rectangle(Bounds::default());
        slide.add_text_box(Bounds::default(), TextFrame::new());
        slide.add_table(Bounds::from_inches(1.0, 1.0, 3.0, 1.0), MutableTable::new(1, 3));

        let ids: Vec<u32> = slide.shapes().iter().map(|s| s.shape_id()).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert_eq!(slide.shape_count(), 3);
    }

    #[test]
    fn test_xml_structure() {
        let mut slide = MutableSlide::new(256);
        slide.add_text_box(
            Bounds::from_inches(1.0, 2.5, 8.0, 1.0),
            TextFrame::from_paragraph(TextParagraph::new("Title")),
        );

        let xml = slide.to_xml();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld "#));
        assert!(xml.contains(r#"<p:cNvPr id="1" name=""/>"#));
        assert!(xml.contains("<a:t>Title</a:t>"));
        assert!(xml.ends_with("</p:sld>"));
    }
}
