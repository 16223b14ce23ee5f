//! A canvas that records draw calls as a rendering plan.

use serde::{Deserialize, Serialize};

use super::Canvas;
use crate::layout::Font;

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    /// A line of text
    Text {
        /// Page the text was drawn on (1-indexed)
        page: u32,
        /// Baseline x
        x: f32,
        /// Baseline y
        y: f32,
        /// Font used
        font: Font,
        /// Font size in points
        size: f32,
        /// The drawn text
        text: String,
    },

    /// A page break; `page` is the number of the page being started
    PageBreak {
        /// New page number
        page: u32,
    },
}

impl DrawCommand {
    /// The text of a text command.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            DrawCommand::PageBreak { .. } => None,
        }
    }

    /// Check if this is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, DrawCommand::PageBreak { .. })
    }
}

/// Records every canvas call in order.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    page: u32,
}

impl RecordingCanvas {
    /// Create an empty recording positioned on page 1.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            page: 1,
        }
    }

    /// All recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of pages touched so far (at least 1).
    pub fn page_count(&self) -> u32 {
        self.page
    }

    /// Text commands only.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| !c.is_page_break())
    }

    /// Consume the recording.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_text(&mut self, x: f32, y: f32, font: Font, size: f32, text: &str) {
        self.commands.push(DrawCommand::Text {
            page: self.page,
            x,
            y,
            font,
            size,
            text: text.to_string(),
        });
    }

    fn start_new_page(&mut self) {
        self.page += 1;
        self.commands.push(DrawCommand::PageBreak { page: self.page });
    }
}
