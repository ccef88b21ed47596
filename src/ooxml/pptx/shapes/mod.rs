//! Shapes module for PowerPoint presentations.
//!
//! Read-side views of the shapes on a slide:
//! - Rectangles and text boxes with their paragraphs
//! - Tables with their cells
pub mod base;
pub mod table;
pub mod textframe;

pub use base::{Shape, ShapeKind};
pub use table::Cell;
pub use textframe::Paragraph;
