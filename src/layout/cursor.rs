//! Vertical cursor and page-break logic.

use serde::{Deserialize, Serialize};

use crate::render::Canvas;

/// Fixed page dimensions, margins and line spacing for a run.
///
/// Coordinates follow PDF conventions: the origin is the bottom-left corner of
/// the page and `y` grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Distance from the top edge to the first baseline
    pub margin_top: f32,

    /// Lowest allowed baseline
    pub margin_bottom: f32,

    /// Base x position for all text
    pub margin_left: f32,

    /// Extra spacing added to every line, and the gap unit after headings
    pub line_gap: f32,
}

impl PageGeometry {
    /// A4 portrait with the default margins and gap.
    pub const fn a4() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin_top: 30.0,
            margin_bottom: 30.0,
            margin_left: 30.0,
            line_gap: 4.0,
        }
    }

    /// Set all three margins to the same value.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin_top = margin;
        self.margin_bottom = margin;
        self.margin_left = margin;
        self
    }

    /// Set the line gap.
    pub fn with_line_gap(mut self, gap: f32) -> Self {
        self.line_gap = gap;
        self
    }

    /// Vertical advance of one line at `font_size`.
    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size * 1.25 + self.line_gap
    }

    /// The `y` of the first baseline on a fresh page.
    pub fn top(&self) -> f32 {
        self.height - self.margin_top
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// The vertical cursor. Owns `y` and the page counter.
#[derive(Debug, Clone)]
pub struct Cursor {
    geometry: PageGeometry,
    y: f32,
    page: u32,
}

impl Cursor {
    /// Place a cursor at the top of page 1.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            y: geometry.top(),
            geometry,
            page: 1,
        }
    }

    /// Current baseline position.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Current page number (1-indexed).
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The geometry this cursor was built with.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Vertical advance of one line at `font_size`.
    pub fn line_height(&self, font_size: f32) -> f32 {
        self.geometry.line_height(font_size)
    }

    /// Break the page if `lines` lines at `font_size` would pass the bottom margin.
    ///
    /// Returns `true` when a page break happened.
    pub fn ensure_space<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        lines: u32,
        font_size: f32,
    ) -> bool {
        let needed = self.line_height(font_size) * lines as f32;
        if self.y - needed < self.geometry.margin_bottom {
            self.new_page(canvas);
            true
        } else {
            false
        }
    }

    /// Start a new page and reset `y` to the top.
    pub fn new_page<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        canvas.start_new_page();
        self.page += 1;
        self.y = self.geometry.top();
        log::debug!("Page break: now on page {}", self.page);
    }

    /// Move down one line at `font_size`.
    pub fn advance(&mut self, font_size: f32) {
        self.y -= self.line_height(font_size);
    }

    /// Move down by one gap unit.
    pub fn gap(&mut self) {
        self.y -= self.geometry.line_gap;
    }
}
