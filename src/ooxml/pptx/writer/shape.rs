/// Shape types and implementation for PPTX presentations.
use super::table::MutableTable;
use super::text::TextFrame;
use super::{push_int, push_solid_fill};
use crate::common::RGBColor;
use crate::common::unit::{inches, pt_to_emu_f64};

/// Position and size of a shape, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds given in inches.
    ///
    /// ```
    /// use signal_deck::ooxml::pptx::writer::Bounds;
    ///
    /// let b = Bounds::from_inches(0.5, 0.2, 9.0, 0.6);
    /// assert_eq!((b.x, b.y, b.width, b.height), (457_200, 182_880, 8_229_600, 548_640));
    /// ```
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(inches(x), inches(y), inches(width), inches(height))
    }

    fn write_xfrm(&self, xml: &mut String, tag: &str) {
        xml.push('<');
        xml.push_str(tag);
        xml.push_str(r#"><a:off x=""#);
        push_int(xml, self.x);
        xml.push_str(r#"" y=""#);
        push_int(xml, self.y);
        xml.push_str(r#""/><a:ext cx=""#);
        push_int(xml, self.width);
        xml.push_str(r#"" cy=""#);
        push_int(xml, self.height);
        xml.push_str(r#""/></"#);
        xml.push_str(tag);
        xml.push('>');
    }
}

/// Outline of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// No `a:ln` element; the renderer's default applies.
    #[default]
    Inherit,
    /// Explicitly no outline.
    None,
    /// Solid outline of the given color and width (EMU).
    Solid { color: RGBColor, width: i64 },
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) bounds: Bounds,
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    Rectangle {
        fill: Option<RGBColor>,
        line: LineStyle,
    },
    TextBox {
        frame: TextFrame,
    },
    Table {
        table: MutableTable,
    },
}

impl MutableShape {
    pub(crate) fn new_rectangle(shape_id: u32, bounds: Bounds) -> Self {
        Self {
            shape_id,
            bounds,
            shape_type: ShapeType::Rectangle {
                fill: None,
                line: LineStyle::Inherit,
            },
        }
    }

    pub(crate) fn new_text_box(shape_id: u32, bounds: Bounds, frame: TextFrame) -> Self {
        Self {
            shape_id,
            bounds,
            shape_type: ShapeType::TextBox { frame },
        }
    }

    pub(crate) fn new_table(shape_id: u32, bounds: Bounds, mut table: MutableTable) -> Self {
        table.fit_to(bounds.width, bounds.height);
        Self {
            shape_id,
            bounds,
            shape_type: ShapeType::Table { table },
        }
    }

    /// Builder method: solid fill (rectangles only).
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::Rectangle { ref mut fill, .. } = self.shape_type {
            *fill = Some(color);
        }
        self
    }

    /// Builder method: remove the outline (rectangles only).
    pub fn no_line(&mut self) -> &mut Self {
        if let ShapeType::Rectangle { ref mut line, .. } = self.shape_type {
            *line = LineStyle::None;
        }
        self
    }

    /// Builder method: solid outline with width in points (rectangles only).
    pub fn line(&mut self, color: RGBColor, width_pt: f64) -> &mut Self {
        if let ShapeType::Rectangle { ref mut line, .. } = self.shape_type {
            *line = LineStyle::Solid {
                color,
                width: pt_to_emu_f64(width_pt),
            };
        }
        self
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The text frame, for text boxes.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.shape_type {
            ShapeType::TextBox { frame } => Some(frame),
            _ => None,
        }
    }

    /// The table, for table frames.
    pub fn table(&self) -> Option<&MutableTable> {
        match &self.shape_type {
            ShapeType::Table { table } => Some(table),
            _ => None,
        }
    }

    /// Display name, numbered the way PowerPoint numbers new shapes.
    pub fn name(&self) -> String {
        let kind = match self.shape_type {
            ShapeType::Rectangle { .. } => "Rectangle",
            ShapeType::TextBox { .. } => "TextBox",
            ShapeType::Table { .. } => "Table",
        };
        format!("{} {}", kind, self.shape_id.saturating_sub(1))
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) {
        match &self.shape_type {
            ShapeType::Rectangle { fill, line } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                self.write_c_nv_pr(xml);
                xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");

                xml.push_str("<p:spPr>");
                self.bounds.write_xfrm(xml, "a:xfrm");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                if let Some(color) = fill {
                    push_solid_fill(xml, *color);
                }
                match line {
                    LineStyle::Inherit => {},
                    LineStyle::None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
                    LineStyle::Solid { color, width } => {
                        xml.push_str(r#"<a:ln w=""#);
                        push_int(xml, *width);
                        xml.push_str(r#"">"#);
                        push_solid_fill(xml, *color);
                        xml.push_str("</a:ln>");
                    },
                }
                xml.push_str("</p:spPr></p:sp>");
            },
            ShapeType::TextBox { frame } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                self.write_c_nv_pr(xml);
                xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);

                xml.push_str("<p:spPr>");
                self.bounds.write_xfrm(xml, "a:xfrm");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/>"#);
                xml.push_str("</p:spPr>");

                frame.write_shape_body(xml);
                xml.push_str("</p:sp>");
            },
            ShapeType::Table { table } => {
                xml.push_str("<p:graphicFrame><p:nvGraphicFramePr>");
                self.write_c_nv_pr(xml);
                xml.push_str(
                    r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr><p:nvPr/></p:nvGraphicFramePr>"#,
                );
                self.bounds.write_xfrm(xml, "p:xfrm");
                table.write_graphic(xml);
                xml.push_str("</p:graphicFrame>");
            },
        }
    }

    fn write_c_nv_pr(&self, xml: &mut String) {
        xml.push_str(r#"<p:cNvPr id=""#);
        push_int(xml, self.shape_id);
        xml.push_str(r#"" name=""#);
        xml.push_str(&self.name());
        xml.push_str(r#""/>"#);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::writer::TextParagraph;

    fn xml_of(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml);
        xml
    }

    #[test]
    fn test_rectangle_fill_and_no_line() {
        let mut shape = MutableShape::new_rectangle(2, Bounds::from_inches(0.0, 0.0, 10.0, 1.0));
        shape.fill(RGBColor::new(0, 102, 204)).no_line();

        let xml = xml_of(&shape);
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 1"/>"#));
        assert!(xml.contains(r#"<a:off x="0" y="0"/><a:ext cx="9144000" cy="914400"/>"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="0066CC"/></a:solidFill><a:ln><a:noFill/></a:ln>"#));
    }

    #[test]
    fn test_rectangle_outline() {
        let mut shape = MutableShape::new_rectangle(3, Bounds::default());
        shape.line(RGBColor::new(0, 102, 204), 2.0);
        let xml = xml_of(&shape);
        assert!(xml.contains(r#"<a:ln w="25400"><a:solidFill><a:srgbClr val="0066CC"/></a:solidFill></a:ln>"#));
    }

    #[test]
    fn test_builders_ignore_non_rectangles() {
        let frame = TextFrame::from_paragraph(TextParagraph::new("x"));
        let mut shape = MutableShape::new_text_box(2, Bounds::default(), frame);
        shape.fill(RGBColor::new(1, 2, 3)).no_line();
        let xml = xml_of(&shape);
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(!xml.contains("010203"));
        assert!(!xml.contains("<a:ln>"));
        assert_eq!(shape.name(), "TextBox 1");
    }

    #[test]
    fn test_table_frame() {
        let shape =
            MutableShape::new_table(4, Bounds::from_inches(1.0, 1.8, 8.0, 4.5), MutableTable::new(7, 3));
        let xml = xml_of(&shape);
        assert!(xml.starts_with("<p:graphicFrame>"));
        assert!(xml.contains(r#"<p:xfrm><a:off x="914400" y="1645920"/>"#));
        assert_eq!(xml.matches("<a:tr ").count(), 7);
        assert_eq!(shape.table().unwrap().row_height(), inches(4.5) / 7);
    }
}
