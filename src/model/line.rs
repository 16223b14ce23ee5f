//! Line classification types.

use serde::{Deserialize, Serialize};

/// The markup kind of a single source line, with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind {
    /// `# ` heading
    Heading(String),

    /// `## ` sub-heading
    SubHeading(String),

    /// `N. ` numbered item
    NumberedItem {
        /// The digits before the period, as written
        number: String,
        /// Item text
        text: String,
    },

    /// `- ` bullet item
    BulletItem(String),

    /// Empty line
    Blank,

    /// Anything else
    Paragraph(String),
}

impl LineKind {
    /// Text that gets drawn for this line, or `None` for blank lines.
    ///
    /// Numbered items keep their number; bullet items are drawn without a
    /// marker, relying on the indent alone.
    pub fn display_text(&self) -> Option<String> {
        match self {
            LineKind::Heading(text)
            | LineKind::SubHeading(text)
            | LineKind::BulletItem(text)
            | LineKind::Paragraph(text) => Some(text.clone()),
            LineKind::NumberedItem { number, text } => Some(format!("{}. {}", number, text)),
            LineKind::Blank => None,
        }
    }

    /// Check if this is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self, LineKind::Blank)
    }

    /// Short lowercase name of the kind, used in logs and plans.
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Heading(_) => "heading",
            LineKind::SubHeading(_) => "sub_heading",
            LineKind::NumberedItem { .. } => "numbered_item",
            LineKind::BulletItem(_) => "bullet_item",
            LineKind::Blank => "blank",
            LineKind::Paragraph(_) => "paragraph",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        let item = LineKind::NumberedItem {
            number: "3".to_string(),
            text: "Save".to_string(),
        };
        assert_eq!(item.display_text().as_deref(), Some("3. Save"));
        assert_eq!(
            LineKind::BulletItem("Point".into()).display_text().as_deref(),
            Some("Point")
        );
        assert_eq!(LineKind::Blank.display_text(), None);
    }

    #[test]
    fn test_name() {
        assert_eq!(LineKind::Heading("x".into()).name(), "heading");
        assert_eq!(LineKind::Blank.name(), "blank");
        assert!(LineKind::Blank.is_blank());
    }
}
