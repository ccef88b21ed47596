//! Paragraphs as read back from a slide.
use crate::common::RGBColor;
use crate::ooxml::pptx::writer::Alignment;

/// A paragraph of a text body.
///
/// The style fields come from the first run (or from `a:endParaRPr` when the
/// paragraph has no runs); the text is the concatenation of all runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub(crate) text: String,
    pub(crate) size_pt: Option<f64>,
    pub(crate) bold: bool,
    pub(crate) color: Option<RGBColor>,
    pub(crate) alignment: Option<Alignment>,
    pub(crate) level: u8,
    pub(crate) styled: bool,
}

impl Paragraph {
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Font size in points.
    #[inline]
    pub fn size_pt(&self) -> Option<f64> {
        self.size_pt
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    #[inline]
    pub fn color(&self) -> Option<RGBColor> {
        self.color
    }

    #[inline]
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }
}

/// Join paragraph texts with `\n`.
pub(crate) fn join_paragraphs(paragraphs: &[Paragraph]) -> String {
    paragraphs
        .iter()
        .map(Paragraph::text)
        .collect::<Vec<_>>()
        .join("\n")
}
