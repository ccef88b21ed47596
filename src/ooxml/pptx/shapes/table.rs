//! Table cells as read back from a graphic frame.
use super::textframe::{Paragraph, join_paragraphs};
use crate::common::RGBColor;

/// A cell of a DrawingML table (`a:tc`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub(crate) paragraphs: Vec<Paragraph>,
    pub(crate) fill: Option<RGBColor>,
}

impl Cell {
    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Solid fill from `a:tcPr`, if any.
    #[inline]
    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    /// Cell text, one line per paragraph.
    pub fn text(&self) -> String {
        join_paragraphs(&self.paragraphs)
    }
}
