//! Base shape types for PowerPoint presentations.
use super::table::Cell;
use super::textframe::{Paragraph, join_paragraphs};
use crate::common::RGBColor;
use crate::ooxml::pptx::writer::Bounds;

/// What kind of shape this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// An autoshape (`p:sp` without `txBox`)
    Rectangle,
    /// A text box (`p:sp` with `<p:cNvSpPr txBox="1"/>`)
    TextBox,
    /// A graphic frame holding a table
    Table,
}

/// A shape as read back from a slide.
///
/// # Examples
///
/// ```rust,no_run
/// use signal_deck::ooxml::pptx::Package;
///
/// let pres = Package::open("deck.pptx")?.presentation()?;
/// for shape in pres.slides()[0].shapes() {
///     println!("{} at ({}, {})", shape.name(), shape.bounds().x, shape.bounds().y);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) kind: ShapeKind,
    pub(crate) bounds: Bounds,
    pub(crate) fill: Option<RGBColor>,
    pub(crate) has_line: Option<bool>,
    pub(crate) paragraphs: Vec<Paragraph>,
    pub(crate) rows: Vec<Vec<Cell>>,
}

impl Shape {
    pub(crate) fn new(kind: ShapeKind) -> Self {
        Self {
            id: 0,
            name: String::new(),
            kind,
            bounds: Bounds::default(),
            fill: None,
            has_line: None,
            paragraphs: Vec::new(),
            rows: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Position and size in EMU.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Solid fill of the shape itself (not of its outline).
    #[inline]
    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    /// Whether an outline is drawn: `Some(false)` for `<a:ln><a:noFill/></a:ln>`,
    /// `Some(true)` for an explicit line, `None` when unspecified.
    #[inline]
    pub fn has_line(&self) -> Option<bool> {
        self.has_line
    }

    /// Paragraphs of the shape's text body (empty for tables).
    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Table rows (empty unless this is a table).
    #[inline]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Table cell texts, row by row.
    pub fn row_texts(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::text).collect())
            .collect()
    }

    /// Text of the shape, one line per paragraph.
    pub fn text(&self) -> String {
        join_paragraphs(&self.paragraphs)
    }
}
