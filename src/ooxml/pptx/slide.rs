//! Read-side view of a slide part.
use crate::common::RGBColor;
use crate::common::xml::escape::resolve_entity;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::shapes::{Cell, Paragraph, Shape, ShapeKind};
use crate::ooxml::pptx::writer::Alignment;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A slide in a presentation.
///
/// Shapes are kept in document order, which is also their z-order: the
/// first shape is drawn at the back.
///
/// # Examples
///
/// ```rust,no_run
/// use signal_deck::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
///
/// for slide in pres.slides() {
///     println!("{} shapes", slide.shapes().len());
///     println!("Text content: {}", slide.text());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slide {
    shapes: Vec<Shape>,
}

impl Slide {
    /// Parse the XML of a slide part (`p:sld`).
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut parser = SlideParser::default();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => parser.open(e, false)?,
                Ok(Event::Empty(ref e)) => {
                    parser.open(e, true)?;
                    parser.close(e.local_name().as_ref());
                },
                Ok(Event::End(ref e)) => parser.close(e.local_name().as_ref()),
                Ok(Event::Text(ref e)) if parser.in_text => {
                    let raw = std::str::from_utf8(e).map_err(|e| OoxmlError::Xml(e.to_string()))?;
                    parser.push_text(&unescape_xml(raw));
                },
                Ok(Event::GeneralRef(ref e)) if parser.in_text => {
                    let name = std::str::from_utf8(e).map_err(|e| OoxmlError::Xml(e.to_string()))?;
                    match resolve_entity(name) {
                        Some(resolved) => parser.push_text(&resolved),
                        None => parser.push_text(&format!("&{};", name)),
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(Self {
            shapes: parser.shapes,
        })
    }

    /// All shapes, back to front.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shapes of one kind, back to front.
    pub fn shapes_of(&self, kind: ShapeKind) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |s| s.kind() == kind)
    }

    pub fn text_boxes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes_of(ShapeKind::TextBox)
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &Shape> {
        self.shapes_of(ShapeKind::Rectangle)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Shape> {
        self.shapes_of(ShapeKind::Table)
    }

    /// Every paragraph of every text box and rectangle, in shape order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.shapes.iter().flat_map(|s| s.paragraphs().iter())
    }

    /// Extract all text content from the slide.
    ///
    /// Text boxes contribute one line per paragraph; tables contribute one
    /// line per row with cells separated by tabs.
    pub fn text(&self) -> String {
        let mut lines = Vec::new();
        for shape in &self.shapes {
            match shape.kind() {
                ShapeKind::Table => {
                    for row in shape.row_texts() {
                        lines.push(row.join("\t"));
                    }
                },
                _ => lines.extend(shape.paragraphs().iter().map(|p| p.text().to_string())),
            }
        }
        lines.join("\n")
    }
}

/// Streaming state while walking a slide's XML.
#[derive(Default)]
struct SlideParser {
    shapes: Vec<Shape>,
    current: Option<Shape>,
    row: Option<Vec<Cell>>,
    cell: Option<Cell>,
    paragraph: Option<Paragraph>,
    in_sp_pr: bool,
    in_xfrm: bool,
    in_line: bool,
    in_run_props: bool,
    in_cell_props: bool,
    in_text: bool,
    /// Set while the run properties being read are the ones the paragraph
    /// takes its style from.
    capture_run_style: bool,
}

impl SlideParser {
    fn open(&mut self, e: &BytesStart, empty: bool) -> Result<()> {
        match e.local_name().as_ref() {
            b"sp" => self.current = Some(Shape::new(ShapeKind::Rectangle)),
            b"graphicFrame" => self.current = Some(Shape::new(ShapeKind::Table)),
            b"cNvPr" => {
                if let Some(shape) = self.current.as_mut() {
                    if let Some(id) = attr_value(e, b"id")? {
                        shape.id = atoi_simd::parse::<u32, false, false>(id.as_bytes()).unwrap_or(0);
                    }
                    shape.name = attr_value(e, b"name")?.unwrap_or_default();
                }
            },
            b"cNvSpPr" => {
                if let Some(shape) = self.current.as_mut()
                    && attr_value(e, b"txBox")?.as_deref() == Some("1")
                {
                    shape.kind = ShapeKind::TextBox;
                }
            },
            b"spPr" => self.in_sp_pr = !empty,
            b"xfrm" => self.in_xfrm = !empty,
            b"off" if self.in_xfrm => {
                if let Some(shape) = self.current.as_mut() {
                    shape.bounds.x = attr_i64(e, b"x")?;
                    shape.bounds.y = attr_i64(e, b"y")?;
                }
            },
            b"ext" if self.in_xfrm => {
                if let Some(shape) = self.current.as_mut() {
                    shape.bounds.width = attr_i64(e, b"cx")?;
                    shape.bounds.height = attr_i64(e, b"cy")?;
                }
            },
            b"ln" if self.in_sp_pr => {
                self.in_line = !empty;
                if let Some(shape) = self.current.as_mut()
                    && !empty
                {
                    shape.has_line = Some(true);
                }
            },
            b"noFill" if self.in_line => {
                if let Some(shape) = self.current.as_mut() {
                    shape.has_line = Some(false);
                }
            },
            b"tr" => self.row = Some(Vec::new()),
            b"tc" => self.cell = Some(Cell::default()),
            b"tcPr" => self.in_cell_props = !empty,
            b"p" => self.paragraph = Some(Paragraph::default()),
            b"pPr" => {
                if let Some(para) = self.paragraph.as_mut() {
                    para.alignment = attr_value(e, b"algn")?.and_then(|a| Alignment::from_attr(&a));
                    if let Some(lvl) = attr_value(e, b"lvl")? {
                        para.level = atoi_simd::parse::<u8, false, false>(lvl.as_bytes()).unwrap_or(0);
                    }
                }
            },
            b"rPr" | b"endParaRPr" => {
                if let Some(para) = self.paragraph.as_mut()
                    && !para.styled
                {
                    para.styled = true;
                    if let Some(sz) = attr_value(e, b"sz")? {
                        para.size_pt = atoi_simd::parse::<u32, false, false>(sz.as_bytes())
                            .ok()
                            .map(|c| f64::from(c) / 100.0);
                    }
                    para.bold = matches!(attr_value(e, b"b")?.as_deref(), Some("1" | "true"));
                    self.capture_run_style = !empty;
                }
                self.in_run_props = !empty;
            },
            b"srgbClr" => {
                let color = attr_value(e, b"val")?.and_then(|v| RGBColor::from_hex(&v));
                self.apply_color(color);
            },
            b"t" => self.in_text = !empty,
            _ => {},
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"sp" | b"graphicFrame" => {
                if let Some(shape) = self.current.take() {
                    self.shapes.push(shape);
                }
            },
            b"spPr" => self.in_sp_pr = false,
            b"xfrm" => self.in_xfrm = false,
            b"ln" => self.in_line = false,
            b"tcPr" => self.in_cell_props = false,
            b"rPr" | b"endParaRPr" => {
                self.in_run_props = false;
                self.capture_run_style = false;
            },
            b"t" => self.in_text = false,
            b"p" => {
                if let Some(para) = self.paragraph.take() {
                    match (self.cell.as_mut(), self.current.as_mut()) {
                        (Some(cell), _) => cell.paragraphs.push(para),
                        (None, Some(shape)) => shape.paragraphs.push(para),
                        (None, None) => {},
                    }
                }
            },
            b"tc" => {
                if let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) {
                    row.push(cell);
                }
            },
            b"tr" => {
                if let (Some(row), Some(shape)) = (self.row.take(), self.current.as_mut()) {
                    shape.rows.push(row);
                }
            },
            _ => {},
        }
    }

    fn apply_color(&mut self, color: Option<RGBColor>) {
        if self.in_run_props {
            if self.capture_run_style
                && let Some(para) = self.paragraph.as_mut()
            {
                para.color = color;
            }
        } else if self.in_cell_props {
            if let Some(cell) = self.cell.as_mut() {
                cell.fill = color;
            }
        } else if self.in_sp_pr
            && !self.in_line
            && let Some(shape) = self.current.as_mut()
        {
            shape.fill = color;
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(para) = self.paragraph.as_mut() {
            para.text.push_str(text);
        }
    }
}

/// Read one attribute as an unescaped string.
fn attr_value(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| OoxmlError::Xml(e.to_string()))?;
        if attr.key.as_ref() == name {
            let raw = std::str::from_utf8(&attr.value).map_err(|e| OoxmlError::Xml(e.to_string()))?;
            return Ok(Some(unescape_xml(raw)));
        }
    }
    Ok(None)
}

fn attr_i64(e: &BytesStart, name: &[u8]) -> Result<i64> {
    match attr_value(e, name)? {
        Some(v) => atoi_simd::parse::<i64, false, false>(v.as_bytes())
            .map_err(|_| OoxmlError::InvalidFormat(format!("invalid coordinate: {}", v))),
        None => Ok(0),
    }
}
