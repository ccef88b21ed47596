/// DrawingML tables for PPTX slides.
use super::text::{TextFrame, TextParagraph};
use super::{push_int, push_solid_fill};
use crate::common::RGBColor;
use crate::ooxml::opc::constants::namespace;

/// Table style applied by PowerPoint to new tables ("Medium Style 2 - Accent 1").
pub const DEFAULT_TABLE_STYLE_ID: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// A single table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    frame: TextFrame,
    fill: Option<RGBColor>,
}

impl TableCell {
    /// Replace the cell text; each line becomes a paragraph styled like `style`.
    pub fn set_text(&mut self, text: &str, style: &TextParagraph) {
        self.frame = TextFrame::from_text(text, style);
    }

    pub fn set_fill(&mut self, color: RGBColor) {
        self.fill = Some(color);
    }

    #[inline]
    pub fn frame(&self) -> &TextFrame {
        &self.frame
    }

    #[inline]
    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    pub fn text(&self) -> String {
        self.frame.text()
    }

    fn write_xml(&self, xml: &mut String) {
        xml.push_str("<a:tc>");
        self.frame.write_cell_body(xml);
        match self.fill {
            Some(color) => {
                xml.push_str("<a:tcPr>");
                push_solid_fill(xml, color);
                xml.push_str("</a:tcPr>");
            },
            None => xml.push_str("<a:tcPr/>"),
        }
        xml.push_str("</a:tc>");
    }
}

/// A rectangular grid of cells.
///
/// Column widths and the row height start at zero, meaning "share the frame
/// evenly"; they are resolved against the frame size when the table is
/// placed on a slide.
///
/// # Examples
///
/// ```
/// use signal_deck::ooxml::pptx::writer::{MutableTable, TextParagraph};
///
/// let mut table = MutableTable::new(2, 3);
/// if let Some(cell) = table.cell_mut(0, 0) {
///     cell.set_text("Feature", &TextParagraph::default());
/// }
/// assert_eq!(table.cell(0, 0).map(|c| c.text()), Some("Feature".to_string()));
/// assert!(table.cell(2, 0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MutableTable {
    rows: Vec<Vec<TableCell>>,
    column_widths: Vec<i64>,
    row_height: i64,
}

impl MutableTable {
    /// Create an empty `rows` × `cols` table.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![TableCell::default(); cols]; rows],
            column_widths: vec![0; cols],
            row_height: 0,
        }
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Set the width of one column in EMU. Out-of-range columns are ignored.
    pub fn set_column_width(&mut self, col: usize, width: i64) {
        if let Some(w) = self.column_widths.get_mut(col) {
            *w = width;
        }
    }

    #[inline]
    pub fn column_widths(&self) -> &[i64] {
        &self.column_widths
    }

    #[inline]
    pub fn row_height(&self) -> i64 {
        self.row_height
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Resolve unset column widths and the row height against a frame size.
    pub(crate) fn fit_to(&mut self, width: i64, height: i64) {
        let cols = self.column_widths.len() as i64;
        if cols > 0 {
            let even = width / cols;
            for w in self.column_widths.iter_mut().filter(|w| **w == 0) {
                *w = even;
            }
        }
        let rows = self.rows.len() as i64;
        if self.row_height == 0 && rows > 0 {
            self.row_height = height / rows;
        }
    }

    /// Serialize as `<a:graphic>` holding the `<a:tbl>`.
    pub(crate) fn write_graphic(&self, xml: &mut String) {
        xml.push_str(r#"<a:graphic><a:graphicData uri=""#);
        xml.push_str(namespace::DML_TABLE);
        xml.push_str(r#""><a:tbl><a:tblPr firstRow="1" bandRow="1"><a:tableStyleId>"#);
        xml.push_str(DEFAULT_TABLE_STYLE_ID);
        xml.push_str("</a:tableStyleId></a:tblPr>");

        xml.push_str("<a:tblGrid>");
        for &width in &self.column_widths {
            xml.push_str(r#"<a:gridCol w=""#);
            push_int(xml, width);
            xml.push_str(r#""/>"#);
        }
        xml.push_str("</a:tblGrid>");

        for row in &self.rows {
            xml.push_str(r#"<a:tr h=""#);
            push_int(xml, self.row_height);
            xml.push_str(r#"">"#);
            for cell in row {
                cell.write_xml(xml);
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl></a:graphicData></a:graphic>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_to_keeps_explicit_widths() {
        let mut table = MutableTable::new(7, 3);
        table.set_column_width(0, 2_286_000);
        table.fit_to(9_000_000, 4_200_000);
        assert_eq!(table.column_widths(), &[2_286_000, 3_000_000, 3_000_000]);
        assert_eq!(table.row_height(), 600_000);
    }

    #[test]
    fn test_graphic_xml() {
        let mut table = MutableTable::new(1, 2);
        table.fit_to(200, 100);
        let cell = table.cell_mut(0, 1).unwrap();
        cell.set_text("Weeks", &TextParagraph::default());
        cell.set_fill(RGBColor::new(240, 248, 255));

        let mut xml = String::new();
        table.write_graphic(&mut xml);
        assert!(xml.contains(r#"<a:gridCol w="100"/><a:gridCol w="100"/>"#));
        assert!(xml.contains(r#"<a:tr h="100">"#));
        assert!(xml.contains("<a:t>Weeks</a:t>"));
        assert!(xml.contains(r#"<a:tcPr><a:solidFill><a:srgbClr val="F0F8FF"/></a:solidFill></a:tcPr>"#));
        assert!(xml.contains("<a:tcPr/>"));
    }
}
