//! Style primitives shared by the writer and the reader.

pub mod color;

pub use color::RGBColor;
