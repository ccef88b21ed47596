//! signal-deck - generate the Signal Processing Visualization Platform
//! customer presentation as a PowerPoint (.pptx) file
//!
//! The crate has three layers:
//!
//! - [`common`]: the crate error type, unit conversions, colors and XML escaping
//! - [`ooxml`]: an Open Packaging Conventions container plus a PresentationML
//!   writer (rectangles, text boxes, tables) and a reader for checking the result
//! - [`deck`]: the slide builders and the literal content of the 14-slide deck
//!
//! # Example - Building the deck
//!
//! ```no_run
//! use signal_deck::deck::{DeckContext, OUTPUT_FILENAME, build_presentation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pres = build_presentation(&DeckContext::default())?;
//! pres.save(OUTPUT_FILENAME)?;
//! println!("{} slides", pres.slide_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a PPTX file
//!
//! ```no_run
//! use signal_deck::ooxml::pptx::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("Signal_Processing_Platform_Presentation.pptx")?;
//! let pres = pkg.presentation()?;
//!
//! for slide in pres.slides() {
//!     println!("Slide: {}", slide.text());
//! }
//! # Ok(())
//! # }
//! ```

/// Shared primitives: errors, units, colors, XML escaping
pub mod common;

/// Slide builders and deck content
pub mod deck;

/// OOXML (Office Open XML) packaging and PresentationML
///
/// This module provides the OPC container and the .pptx writer and reader.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
