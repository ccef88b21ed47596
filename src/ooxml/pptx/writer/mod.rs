//! Mutable presentation writer components for PPTX.
//!
//! A [`MutablePresentation`] owns its slides; each [`MutableSlide`] owns its
//! shapes. Nothing is serialized until [`MutablePresentation::to_bytes`] or
//! [`MutablePresentation::save`] is called.

pub mod pres;
pub mod shape;
pub mod slide;
pub mod table;
pub mod text;

// Re-export main types
pub use pres::MutablePresentation;
pub use shape::{Bounds, LineStyle, MutableShape};
pub use slide::MutableSlide;
pub use table::{MutableTable, TableCell};
pub use text::{Alignment, TextFrame, TextParagraph};

use crate::common::RGBColor;

/// Append an integer attribute value without going through `fmt`.
#[inline]
pub(crate) fn push_int<I: itoa::Integer>(xml: &mut String, value: I) {
    let mut buf = itoa::Buffer::new();
    xml.push_str(buf.format(value));
}

/// Append `<a:solidFill><a:srgbClr val="RRGGBB"/></a:solidFill>`.
#[inline]
pub(crate) fn push_solid_fill(xml: &mut String, color: RGBColor) {
    xml.push_str(r#"<a:solidFill><a:srgbClr val=""#);
    xml.push_str(&color.to_hex());
    xml.push_str(r#""/></a:solidFill>"#);
}
