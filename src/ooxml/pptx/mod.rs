//! PowerPoint (.pptx) presentation support.
//!
//! Two halves share this module:
//!
//! - [`writer`] builds decks in memory and serializes them to a package
//! - [`Package`], [`Presentation`] and [`Slide`] read packages back into
//!   shapes, paragraphs and table cells
//!
//! # Example
//!
//! ```rust,no_run
//! use signal_deck::ooxml::pptx::{Package, writer::{Bounds, MutablePresentation}};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide().add_rectangle(Bounds::from_inches(0.0, 0.0, 10.0, 1.0));
//! pres.save("deck.pptx")?;
//!
//! let pkg = Package::open("deck.pptx")?;
//! for slide in pkg.presentation()?.slides() {
//!     println!("{} shapes", slide.shapes().len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod package;
pub mod presentation;
pub mod shapes;
pub mod slide;
pub mod template;
pub mod writer;

pub use package::Package;
pub use presentation::Presentation;
pub use shapes::{Cell, Paragraph, Shape, ShapeKind};
pub use slide::Slide;
