//! The drawing surface used by the layout engine.

use crate::layout::Font;

/// An output surface that accepts absolutely positioned text and page breaks.
///
/// Coordinates are in points with the origin at the bottom-left corner of the
/// page. Both operations are infallible; surfaces that write to external
/// resources report errors when they are finished, not while drawing.
pub trait Canvas {
    /// Draw one line of text with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, font: Font, size: f32, text: &str);

    /// Close the current page and start a fresh one.
    fn start_new_page(&mut self);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_text(&mut self, x: f32, y: f32, font: Font, size: f32, text: &str) {
        (**self).draw_text(x, y, font, size, text);
    }

    fn start_new_page(&mut self) {
        (**self).start_new_page();
    }
}
