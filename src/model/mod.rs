//! Document model types for the source text and its classified lines.
//!
//! This module defines the intermediate representation that bridges line
//! classification and page layout. The model is transient: it is built from
//! the source text, consumed by a single layout pass and then dropped.

mod document;
mod line;

pub use document::{Metadata, SourceDocument, DEFAULT_TITLE};
pub use line::LineKind;
