//! The layout pass: classified lines in, canvas calls out.

use super::{wrap, Cursor, Style, StyleSheet, BLANK_LINE_SIZE};
use crate::model::{LineKind, SourceDocument};
use crate::parser::LineClassifier;
use crate::render::{Canvas, RenderOptions, RenderStats};

/// Lays out lines top to bottom onto a [`Canvas`].
///
/// The engine owns the vertical [`Cursor`]; the canvas only ever sees absolute
/// positions and page breaks.
pub struct LayoutEngine<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    cursor: Cursor,
    styles: StyleSheet,
    caption: String,
    stats: RenderStats,
}

impl<'a, C: Canvas + ?Sized> LayoutEngine<'a, C> {
    /// Create an engine drawing onto `canvas`.
    ///
    /// The caption text is fixed here, so every heading in one run shows the
    /// same date.
    pub fn new(canvas: &'a mut C, options: &RenderOptions) -> Self {
        Self {
            canvas,
            cursor: Cursor::new(options.geometry),
            styles: options.styles.clone(),
            caption: options.caption_text(),
            stats: RenderStats::new(),
        }
    }

    /// The cursor, for inspection.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Classify and lay out every line of `doc`.
    pub fn render_document(&mut self, doc: &SourceDocument) {
        let classifier = LineClassifier::new();
        for raw in doc.lines() {
            let kind = classifier.classify(raw);
            self.render_line(&kind);
        }
        log::debug!(
            "Laid out {} lines ({} headings, {} paragraphs) on {} pages",
            self.stats.source_line_count(),
            self.stats.heading_count,
            self.stats.paragraph_count,
            self.cursor.page()
        );
    }

    /// Lay out one classified line.
    pub fn render_line(&mut self, kind: &LineKind) {
        self.stats.add_line(kind);

        let (style, text) = match (self.styles.resolve(kind), kind.display_text()) {
            (Some(style), Some(text)) => (*style, text),
            _ => {
                // Blank lines move the cursor without a space check; the next
                // drawn line breaks the page if needed.
                self.cursor.advance(BLANK_LINE_SIZE);
                return;
            }
        };

        if style.reserve_lines > 0 {
            self.cursor
                .ensure_space(&mut *self.canvas, style.reserve_lines, style.size);
        }
        self.draw_wrapped(&text, &style);

        match kind {
            LineKind::Heading(_) => {
                self.draw_caption();
                self.cursor.gap();
            }
            LineKind::SubHeading(_) => self.cursor.gap(),
            _ => {}
        }
    }

    /// Wrap `text` and draw each sub-line, breaking pages as needed.
    pub fn draw_wrapped(&mut self, text: &str, style: &Style) {
        let x = self.cursor.geometry().margin_left + style.indent;
        for line in wrap(text, style.wrap_width) {
            self.cursor.ensure_space(&mut *self.canvas, 1, style.size);
            self.canvas
                .draw_text(x, self.cursor.y(), style.font, style.size, &line);
            self.cursor.advance(style.size);
            self.stats.add_drawn_line();
        }
    }

    fn draw_caption(&mut self) {
        let style = self.styles.caption;
        if style.reserve_lines > 0 {
            self.cursor
                .ensure_space(&mut *self.canvas, style.reserve_lines, style.size);
        }
        let x = self.cursor.geometry().margin_left + style.indent;
        self.canvas
            .draw_text(x, self.cursor.y(), style.font, style.size, &self.caption);
        self.cursor.advance(style.size);
        self.stats.add_drawn_line();
    }

    /// Finish the pass and return its statistics.
    pub fn finish(mut self) -> RenderStats {
        self.stats.page_count = self.cursor.page();
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FontVariant, PageGeometry};
    use crate::render::{DrawCommand, RecordingCanvas};
    use chrono::NaiveDate;

    fn options() -> RenderOptions {
        RenderOptions::new().with_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
    }

    fn run(text: &str, options: &RenderOptions) -> (Vec<DrawCommand>, RenderStats) {
        let mut canvas = RecordingCanvas::new();
        let mut engine = LayoutEngine::new(&mut canvas, options);
        engine.render_document(&SourceDocument::from_text(text));
        let stats = engine.finish();
        (canvas.into_commands(), stats)
    }

    fn text_at(cmd: &DrawCommand) -> (f32, f32, f32, &str) {
        match cmd {
            DrawCommand::Text {
                x, y, size, text, ..
            } => (*x, *y, *size, text.as_str()),
            DrawCommand::PageBreak { .. } => panic!("expected text, got page break"),
        }
    }

    #[test]
    fn test_heading_blank_paragraph_sequence() {
        let (commands, stats) = run("# My Title\n\nHello world", &options());
        assert_eq!(commands.len(), 3);

        // heading at the top of page 1
        assert_eq!(text_at(&commands[0]), (30.0, 812.0, 24.0, "My Title"));
        // caption one heading line lower, oblique at 10pt
        assert_eq!(
            text_at(&commands[1]),
            (30.0, 778.0, 10.0, "Generated on 02/01/2024")
        );
        match &commands[1] {
            DrawCommand::Text { font, .. } => assert_eq!(font.variant, FontVariant::Oblique),
            _ => unreachable!(),
        }
        // 778 - 16.5 (caption) - 4 (gap) - 16.5 (blank) = 741
        assert_eq!(text_at(&commands[2]), (30.0, 741.0, 12.0, "Hello world"));

        assert_eq!(stats.page_count, 1);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.blank_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.drawn_line_count, 3);
    }

    #[test]
    fn test_sub_heading_adds_gap() {
        let (commands, _) = run("## Section\nBody", &options());
        assert_eq!(text_at(&commands[0]), (30.0, 812.0, 16.0, "Section"));
        // 812 - (16 * 1.25 + 4) - 4 = 784
        assert_eq!(text_at(&commands[1]).1, 784.0);
    }

    #[test]
    fn test_item_indents() {
        let (commands, _) = run("1. First\n- Point", &options());
        assert_eq!(text_at(&commands[0]), (46.0, 812.0, 12.0, "1. First"));
        assert_eq!(text_at(&commands[1]), (44.0, 793.0, 12.0, "Point"));
    }

    #[test]
    fn test_long_paragraph_wraps() {
        let text = "word ".repeat(40);
        let (commands, stats) = run(&text, &options());
        // 40 * 5 - 1 = 199 chars at width 90 -> 3 lines
        assert_eq!(commands.len(), 3);
        assert_eq!(stats.drawn_line_count, 3);
        assert_eq!(text_at(&commands[1]).1, 812.0 - 19.0);
    }

    #[test]
    fn test_page_break_resets_to_top() {
        // 41 lines of 19pt fit between 812 and the 30pt margin
        let text = "line\n".repeat(60);
        let (commands, stats) = run(&text, &options());

        let break_index = commands.iter().position(|c| c.is_page_break()).unwrap();
        let (_, last_y, _, _) = text_at(&commands[break_index - 1]);
        assert!(last_y - 19.0 >= 30.0);
        assert!(last_y - 19.0 - 19.0 < 30.0);
        let (_, y, _, _) = text_at(&commands[break_index + 1]);
        assert_eq!(y, 812.0);
        assert!(matches!(commands[break_index + 1], DrawCommand::Text { page: 2, .. }));
        assert_eq!(stats.page_count, 2);
    }

    #[test]
    fn test_blank_lines_never_break() {
        let text = "\n".repeat(200);
        let (commands, stats) = run(&text, &options());
        assert!(commands.is_empty());
        assert_eq!(stats.page_count, 1);
        assert_eq!(stats.blank_count, 200);
    }

    #[test]
    fn test_text_after_blank_overflow_breaks() {
        let text = format!("{}after", "\n".repeat(60));
        let (commands, _) = run(&text, &options());
        assert_eq!(commands.len(), 2);
        assert!(commands[0].is_page_break());
        assert_eq!(text_at(&commands[1]).1, 812.0);
    }

    #[test]
    fn test_heading_reserves_two_lines() {
        let geometry = PageGeometry::a4();
        let mut canvas = RecordingCanvas::new();
        let opts = options();
        let mut engine = LayoutEngine::new(&mut canvas, &opts);
        // Leave room for exactly one 24pt line.
        while engine.cursor().y() - 34.0 * 2.0 >= geometry.margin_bottom {
            engine.render_line(&LineKind::Blank);
        }
        assert!(engine.cursor().y() - 34.0 >= geometry.margin_bottom);
        engine.render_line(&LineKind::Heading("Late".into()));
        let stats = engine.finish();

        assert!(canvas.commands()[0].is_page_break());
        assert_eq!(stats.page_count, 2);
    }

    #[test]
    fn test_empty_heading_still_takes_a_line() {
        let mut canvas = RecordingCanvas::new();
        let opts = options();
        let mut engine = LayoutEngine::new(&mut canvas, &opts);
        engine.render_line(&LineKind::Heading(String::new()));
        let y = engine.cursor().y();
        engine.finish();

        assert_eq!(text_at(&canvas.commands()[0]).3, "");
        assert_eq!(y, 812.0 - 34.0 - 16.5 - 4.0);
    }
}
