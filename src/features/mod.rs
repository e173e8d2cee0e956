//! Feature modules
//!
//! This module contains document-level pieces that sit around the core
//! line converter:
//! - Document templates (preamble and document end)

pub mod templates;

// Re-export commonly used items
pub use templates::{preamble_lines, wrap_document, DOCUMENT_END};
