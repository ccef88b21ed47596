//! Office Open XML (OOXML) support.
//!
//! - [`opc`] - Open Packaging Conventions: parts, relationships, content
//!   types and the ZIP container
//! - [`pptx`] - PresentationML: authoring new decks and reading them back

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
