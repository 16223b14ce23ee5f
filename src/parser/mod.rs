//! Line classification for line-oriented markup.

mod classifier;

pub use classifier::{classify_document, classify_line, LineClassifier};
