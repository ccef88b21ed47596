/// Text frames and paragraphs for PPTX text boxes and table cells.
use super::{push_int, push_solid_fill};
use crate::common::RGBColor;
use crate::common::unit::{pt_to_centipoints, spacing_pt_to_val};
use crate::common::xml::escape_xml;

/// Horizontal paragraph alignment (`a:pPr/@algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The DrawingML attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
        }
    }

    /// Parse a DrawingML `algn` value.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "l" => Some(Alignment::Left),
            "ctr" => Some(Alignment::Center),
            "r" => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// A single paragraph with one uniformly styled run.
///
/// # Examples
///
/// ```
/// use signal_deck::common::RGBColor;
/// use signal_deck::ooxml::pptx::writer::{Alignment, TextParagraph};
///
/// let para = TextParagraph::new("Thank You!")
///     .size(72.0)
///     .bold(true)
///     .color(RGBColor::new(255, 255, 255))
///     .align(Alignment::Center);
/// assert_eq!(para.text(), "Thank You!");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextParagraph {
    text: String,
    size_pt: Option<f64>,
    bold: bool,
    color: Option<RGBColor>,
    alignment: Option<Alignment>,
    level: u8,
    space_before_pt: Option<f64>,
}

impl TextParagraph {
    /// Create an unstyled paragraph.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Font size in points.
    pub fn size(mut self, pt: f64) -> Self {
        self.size_pt = Some(pt);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Outline level, 0 for top-level text.
    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Space before the paragraph, in points.
    pub fn space_before(mut self, pt: f64) -> Self {
        self.space_before_pt = Some(pt);
        self
    }

    /// Same style, different text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn size_pt(&self) -> Option<f64> {
        self.size_pt
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    #[inline]
    pub fn text_color(&self) -> Option<RGBColor> {
        self.color
    }

    #[inline]
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    #[inline]
    pub fn outline_level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn space_before_pt(&self) -> Option<f64> {
        self.space_before_pt
    }

    /// Serialize as `<a:p>`.
    pub(crate) fn write_xml(&self, xml: &mut String) {
        xml.push_str("<a:p>");
        self.write_ppr(xml);

        if self.text.is_empty() {
            xml.push_str("<a:endParaRPr");
            self.write_rpr_attrs(xml);
            self.write_rpr_children(xml, "a:endParaRPr");
        } else {
            xml.push_str("<a:r><a:rPr");
            self.write_rpr_attrs(xml);
            self.write_rpr_children(xml, "a:rPr");
            xml.push_str("<a:t>");
            xml.push_str(&escape_xml(&self.text));
            xml.push_str("</a:t></a:r>");
        }

        xml.push_str("</a:p>");
    }

    fn write_ppr(&self, xml: &mut String) {
        if self.level == 0 && self.alignment.is_none() && self.space_before_pt.is_none() {
            return;
        }

        xml.push_str("<a:pPr");
        if self.level > 0 {
            xml.push_str(r#" lvl=""#);
            push_int(xml, self.level);
            xml.push('"');
        }
        if let Some(alignment) = self.alignment {
            xml.push_str(r#" algn=""#);
            xml.push_str(alignment.as_str());
            xml.push('"');
        }

        match self.space_before_pt {
            Some(pt) => {
                xml.push_str(r#"><a:spcBef><a:spcPts val=""#);
                push_int(xml, spacing_pt_to_val(pt));
                xml.push_str(r#""/></a:spcBef></a:pPr>"#);
            },
            None => xml.push_str("/>"),
        }
    }

    fn write_rpr_attrs(&self, xml: &mut String) {
        xml.push_str(r#" lang="en-US""#);
        if let Some(pt) = self.size_pt {
            xml.push_str(r#" sz=""#);
            push_int(xml, pt_to_centipoints(pt));
            xml.push('"');
        }
        if self.bold {
            xml.push_str(r#" b="1""#);
        }
        xml.push_str(r#" dirty="0""#);
    }

    fn write_rpr_children(&self, xml: &mut String, tag: &str) {
        match self.color {
            Some(color) => {
                xml.push('>');
                push_solid_fill(xml, color);
                xml.push_str("</");
                xml.push_str(tag);
                xml.push('>');
            },
            None => xml.push_str("/>"),
        }
    }
}

/// The text body of a text box or table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<TextParagraph>,
    word_wrap: bool,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from text, one paragraph per `\n`-separated line.
    ///
    /// Every line receives the style of `style`; its own text is ignored.
    ///
    /// ```
    /// use signal_deck::ooxml::pptx::writer::{TextFrame, TextParagraph};
    ///
    /// let frame = TextFrame::from_text("first\nsecond", &TextParagraph::default().size(20.0));
    /// assert_eq!(frame.paragraphs().len(), 2);
    /// assert_eq!(frame.paragraphs()[1].text(), "second");
    /// assert_eq!(frame.paragraphs()[1].size_pt(), Some(20.0));
    /// ```
    pub fn from_text(text: &str, style: &TextParagraph) -> Self {
        Self {
            paragraphs: text.split('\n').map(|line| style.with_text(line)).collect(),
            word_wrap: false,
        }
    }

    /// Build a frame from a single paragraph.
    pub fn from_paragraph(paragraph: TextParagraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            word_wrap: false,
        }
    }

    /// Append a paragraph.
    pub fn push(&mut self, paragraph: TextParagraph) {
        self.paragraphs.push(paragraph);
    }

    /// Enable or disable word wrap (`wrap="square"` versus `wrap="none"`).
    pub fn word_wrap(mut self, wrap: bool) -> Self {
        self.word_wrap = wrap;
        self
    }

    #[inline]
    pub fn paragraphs(&self) -> &[TextParagraph] {
        &self.paragraphs
    }

    #[inline]
    pub fn wraps(&self) -> bool {
        self.word_wrap
    }

    /// Paragraph texts joined with `\n`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(TextParagraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialize as `<p:txBody>` for a text box.
    pub(crate) fn write_shape_body(&self, xml: &mut String) {
        xml.push_str("<p:txBody>");
        xml.push_str(if self.word_wrap {
            r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#
        } else {
            r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#
        });
        xml.push_str("<a:lstStyle/>");
        self.write_paragraphs(xml);
        xml.push_str("</p:txBody>");
    }

    /// Serialize as `<a:txBody>` for a table cell.
    pub(crate) fn write_cell_body(&self, xml: &mut String) {
        xml.push_str("<a:txBody><a:bodyPr/><a:lstStyle/>");
        self.write_paragraphs(xml);
        xml.push_str("</a:txBody>");
    }

    fn write_paragraphs(&self, xml: &mut String) {
        // A text body needs at least one paragraph.
        if self.paragraphs.is_empty() {
            xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
            return;
        }
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_xml(para: &TextParagraph) -> String {
        let mut xml = String::new();
        para.write_xml(&mut xml);
        xml
    }

    #[test]
    fn test_styled_run() {
        let para = TextParagraph::new("Platform")
            .size(36.0)
            .bold(true)
            .color(RGBColor::new(255, 255, 255));
        assert_eq!(
            to_xml(&para),
            r#"<a:p><a:r><a:rPr lang="en-US" sz="3600" b="1" dirty="0"><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:rPr><a:t>Platform</a:t></a:r></a:p>"#
        );
    }

    #[test]
    fn test_paragraph_properties() {
        let para = TextParagraph::new("item").align(Alignment::Center).space_before(12.0);
        let xml = to_xml(&para);
        assert!(xml.starts_with(
            r#"<a:p><a:pPr algn="ctr"><a:spcBef><a:spcPts val="1200"/></a:spcBef></a:pPr>"#
        ));

        let xml = to_xml(&TextParagraph::new("sub").level(1));
        assert!(xml.contains(r#"<a:pPr lvl="1"/>"#));
    }

    #[test]
    fn test_empty_paragraph_has_no_run() {
        let xml = to_xml(&TextParagraph::new("").size(20.0));
        assert_eq!(xml, r#"<a:p><a:endParaRPr lang="en-US" sz="2000" dirty="0"/></a:p>"#);
    }

    #[test]
    fn test_escaping() {
        let xml = to_xml(&TextParagraph::new("Cost <$$$$> & more"));
        assert!(xml.contains("<a:t>Cost &lt;$$$$&gt; &amp; more</a:t>"));
    }

    #[test]
    fn test_from_text_splits_lines() {
        let style = TextParagraph::default().size(20.0).align(Alignment::Center);
        let frame = TextFrame::from_text("one\ntwo", &style);
        assert_eq!(frame.paragraphs().len(), 2);
        assert!(frame.paragraphs().iter().all(|p| p.alignment() == Some(Alignment::Center)));
        assert_eq!(frame.text(), "one\ntwo");
    }

    #[test]
    fn test_body_wrap_modes() {
        let mut xml = String::new();
        TextFrame::new().word_wrap(true).write_shape_body(&mut xml);
        assert!(xml.contains(r#"wrap="square""#));
        assert!(xml.contains("<a:endParaRPr"));

        let mut xml = String::new();
        TextFrame::from_paragraph(TextParagraph::new("x")).write_shape_body(&mut xml);
        assert!(xml.contains(r#"wrap="none""#));
    }
}
