//! Document-level types.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Title written to the PDF metadata unless overridden.
pub const DEFAULT_TITLE: &str = "Manual de Usuario · PetroArte Nóminas";

/// An immutable source document: the ordered lines of a plain-text file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    lines: Vec<String>,
}

impl SourceDocument {
    /// Build a document from text.
    ///
    /// Text is normalized to Unicode NFC and split on every Unicode line
    /// boundary: `\r\n`, `\n`, a lone `\r`, `\x0b`, `\x0c`, `\x1c`-`\x1e`,
    /// `\u{85}`, `\u{2028}` and `\u{2029}`. A trailing line terminator does not
    /// produce an extra empty line.
    pub fn from_text(text: &str) -> Self {
        let normalized: String = text.nfc().collect();
        let boundary = Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]")
            .expect("line boundary pattern is valid");

        let mut lines: Vec<String> = boundary.split(&normalized).map(str::to_string).collect();
        // the piece after a final terminator (or of empty text) is not a line
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self { lines }
    }

    /// Read a document from a UTF-8 text file.
    ///
    /// Fails with [`Error::MissingInput`] when the file does not exist, before
    /// any other work is done.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        log::debug!("Read {} bytes from {}", text.len(), path.display());
        Ok(Self::from_text(&text))
    }

    /// The raw lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&str> for SourceDocument {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

/// Metadata written into the generated PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: String,

    /// Producer application
    pub producer: String,
}

impl Metadata {
    /// Create metadata with the given title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            producer: format!("pagemark {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_lines() {
        let doc = SourceDocument::from_text("# Title\r\n\r\nBody\n");
        assert_eq!(doc.lines(), &["# Title", "", "Body"]);
        assert_eq!(doc.line_count(), 3);
    }

    #[test]
    fn test_from_text_splits_on_every_line_boundary() {
        let doc = SourceDocument::from_text("a\rb");
        assert_eq!(doc.lines(), &["a", "b"]);

        let doc = SourceDocument::from_text("# T\u{2028}x");
        assert_eq!(doc.lines(), &["# T", "x"]);

        let doc = SourceDocument::from_text("a\x0bb\x0cc\x1cd\u{85}e\u{2029}f");
        assert_eq!(doc.lines(), &["a", "b", "c", "d", "e", "f"]);

        // "\r\n" is one boundary, "\n\r" is two
        let doc = SourceDocument::from_text("a\r\nb\n\rc");
        assert_eq!(doc.lines(), &["a", "b", "", "c"]);
    }

    #[test]
    fn test_from_text_trailing_terminator() {
        assert_eq!(SourceDocument::from_text("a\r").lines(), &["a"]);
        assert_eq!(SourceDocument::from_text("a\n\n").lines(), &["a", ""]);
        assert_eq!(SourceDocument::from_text("\n").lines(), &[""]);
    }

    #[test]
    fn test_from_text_empty() {
        let doc = SourceDocument::from_text("");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_from_text_normalizes_to_nfc() {
        // "o" followed by a combining acute accent
        let doc = SourceDocument::from_text("No\u{301}minas");
        assert_eq!(doc.lines()[0], "N\u{f3}minas");
    }

    #[test]
    fn test_open_missing_file() {
        let result = SourceDocument::open("definitely/not/here.md");
        assert!(matches!(result, Err(Error::MissingInput(_))));
    }

    #[test]
    fn test_metadata_defaults() {
        let meta = Metadata::default();
        assert_eq!(meta.title, DEFAULT_TITLE);
        assert!(meta.producer.starts_with("pagemark "));

        let meta = Metadata::with_title("Guide");
        assert_eq!(meta.title, "Guide");
    }
}
