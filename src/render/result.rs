//! Rendering results and statistics.

use serde::{Deserialize, Serialize};

use super::DrawCommand;
use crate::layout::PageGeometry;
use crate::model::{LineKind, Metadata};

/// Statistics collected during a layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Total number of pages produced
    pub page_count: u32,

    /// Number of `# ` headings
    pub heading_count: u32,

    /// Number of `## ` sub-headings
    pub sub_heading_count: u32,

    /// Number of numbered items
    pub numbered_item_count: u32,

    /// Number of bullet items
    pub bullet_item_count: u32,

    /// Number of plain paragraphs
    pub paragraph_count: u32,

    /// Number of blank lines
    pub blank_count: u32,

    /// Number of text lines drawn, captions included
    pub drawn_line_count: u32,

    /// Approximate word count of the source (whitespace-separated tokens)
    pub word_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified source line.
    pub fn add_line(&mut self, kind: &LineKind) {
        match kind {
            LineKind::Heading(_) => self.heading_count += 1,
            LineKind::SubHeading(_) => self.sub_heading_count += 1,
            LineKind::NumberedItem { .. } => self.numbered_item_count += 1,
            LineKind::BulletItem(_) => self.bullet_item_count += 1,
            LineKind::Paragraph(_) => self.paragraph_count += 1,
            LineKind::Blank => self.blank_count += 1,
        }
        if let Some(text) = kind.display_text() {
            self.word_count += text.split_whitespace().count() as u32;
        }
    }

    /// Count one drawn line.
    pub fn add_drawn_line(&mut self) {
        self.drawn_line_count += 1;
    }

    /// Total number of classified source lines.
    pub fn source_line_count(&self) -> u32 {
        self.heading_count
            + self.sub_heading_count
            + self.numbered_item_count
            + self.bullet_item_count
            + self.paragraph_count
            + self.blank_count
    }
}

/// The full rendering description of a document: what would be drawn where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPlan {
    /// Document metadata
    pub metadata: Metadata,

    /// Geometry used for the layout
    pub geometry: PageGeometry,

    /// Canvas calls in order
    pub commands: Vec<DrawCommand>,

    /// Layout statistics
    pub stats: RenderStats,
}

impl RenderPlan {
    /// Create a new plan.
    pub fn new(
        metadata: Metadata,
        geometry: PageGeometry,
        commands: Vec<DrawCommand>,
        stats: RenderStats,
    ) -> Self {
        Self {
            metadata,
            geometry,
            commands,
            stats,
        }
    }

    /// Number of pages in the plan.
    pub fn page_count(&self) -> u32 {
        self.stats.page_count
    }

    /// Text of every draw command, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(|c| c.text()).collect()
    }
}
