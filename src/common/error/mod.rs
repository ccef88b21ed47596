//! Unified error types for the signal-deck crate.
//!
//! This module provides a unified error type that encompasses errors from the
//! OPC packaging layer, the PresentationML layer and file output, presenting
//! a consistent API to callers.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
