//! Line classifier.
//!
//! Each source line is right-trimmed and then matched against a fixed list of
//! rules. The first rule that matches wins:
//!
//! 1. empty line → [`LineKind::Blank`]
//! 2. `"# "` prefix → [`LineKind::Heading`]
//! 3. `"## "` prefix → [`LineKind::SubHeading`]
//! 4. `^\d+\.\s+` → [`LineKind::NumberedItem`]
//! 5. `"- "` prefix → [`LineKind::BulletItem`]
//! 6. anything else → [`LineKind::Paragraph`]
//!
//! Prefixes are literal. `"## x"` does not start with `"# "`, so the two
//! heading rules never overlap.

use regex::Regex;

use crate::model::{LineKind, SourceDocument};

/// Classifies source lines into [`LineKind`]s.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    numbered: Regex,
}

impl LineClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self {
            numbered: Regex::new(r"^(\d+)\.\s+(.*)$").expect("numbered-item pattern is valid"),
        }
    }

    /// Classify one raw line.
    pub fn classify(&self, raw: &str) -> LineKind {
        let line = raw.trim_end();

        if line.is_empty() {
            return LineKind::Blank;
        }
        if let Some(rest) = line.strip_prefix("# ") {
            return LineKind::Heading(rest.trim().to_string());
        }
        if let Some(rest) = line.strip_prefix("## ") {
            return LineKind::SubHeading(rest.trim().to_string());
        }
        if let Some(caps) = self.numbered.captures(line) {
            return LineKind::NumberedItem {
                number: caps[1].to_string(),
                text: caps[2].trim().to_string(),
            };
        }
        if let Some(rest) = line.strip_prefix("- ") {
            return LineKind::BulletItem(rest.trim().to_string());
        }
        LineKind::Paragraph(line.trim().to_string())
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a single line with a fresh classifier.
pub fn classify_line(raw: &str) -> LineKind {
    LineClassifier::new().classify(raw)
}

/// Classify every line of a document, in order.
pub fn classify_document(doc: &SourceDocument) -> Vec<LineKind> {
    let classifier = LineClassifier::new();
    doc.lines().iter().map(|l| classifier.classify(l)).collect()
}
