//! Common types, traits, and utilities shared across the crate.
//!
//! This module provides the unified error type, unit conversions between
//! inches, points and EMUs, RGB colors and XML escaping used by both the
//! OOXML layer and the deck builders.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::RGBColor;
