//! Rendering module: canvases, options and output formats.

mod canvas;
mod json;
mod options;
mod pdf;
mod recording;
mod result;

pub use canvas::Canvas;
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_CAPTION_PREFIX, DEFAULT_DATE_FORMAT};
pub use pdf::{to_win_ansi, PdfCanvas};
pub use recording::{DrawCommand, RecordingCanvas};
pub use result::{RenderPlan, RenderStats};

use crate::error::Result;
use crate::layout::LayoutEngine;
use crate::model::SourceDocument;
use std::io::Write;

/// Lay out a document onto any canvas and return the statistics.
pub fn render_to_canvas<C: Canvas + ?Sized>(
    doc: &SourceDocument,
    canvas: &mut C,
    options: &RenderOptions,
) -> RenderStats {
    let mut engine = LayoutEngine::new(canvas, options);
    engine.render_document(doc);
    engine.finish()
}

/// Lay out a document and return the recorded rendering plan.
pub fn to_plan(doc: &SourceDocument, options: &RenderOptions) -> RenderPlan {
    let mut canvas = RecordingCanvas::new();
    let stats = render_to_canvas(doc, &mut canvas, options);
    RenderPlan::new(
        options.metadata.clone(),
        options.geometry,
        canvas.into_commands(),
        stats,
    )
}

/// Lay out a document as PDF and write it to `writer`.
pub fn to_pdf<W: Write>(
    doc: &SourceDocument,
    options: &RenderOptions,
    writer: &mut W,
) -> Result<RenderStats> {
    let mut canvas = PdfCanvas::new(options);
    let stats = render_to_canvas(doc, &mut canvas, options);
    canvas.finish(writer)?;
    Ok(stats)
}

/// Lay out a document as PDF in memory.
pub fn to_pdf_bytes(doc: &SourceDocument, options: &RenderOptions) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_pdf(doc, options, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pinned() -> RenderOptions {
        RenderOptions::new().with_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_to_plan() {
        let doc = SourceDocument::from_text("# Title\nBody");
        let plan = to_plan(&doc, &pinned());
        assert_eq!(plan.texts(), vec!["Title", "Generated on 01/06/2024", "Body"]);
        assert_eq!(plan.page_count(), 1);
    }

    #[test]
    fn test_pdf_and_plan_agree_on_pages() {
        let text = "para\n".repeat(100);
        let doc = SourceDocument::from_text(&text);
        let plan = to_plan(&doc, &pinned());

        let mut canvas = PdfCanvas::new(&pinned());
        let stats = render_to_canvas(&doc, &mut canvas, &pinned());
        assert_eq!(stats.page_count, plan.page_count());
        assert_eq!(canvas.page_count(), plan.page_count());
    }

    #[test]
    fn test_to_pdf_bytes_is_deterministic() {
        let doc = SourceDocument::from_text("# Title\n\n- a\n1. b\nc");
        let first = to_pdf_bytes(&doc, &pinned()).unwrap();
        let second = to_pdf_bytes(&doc, &pinned()).unwrap();
        assert_eq!(first, second);
    }
}
