//! # pagemark
//!
//! Render line-oriented plain-text manuals into paginated PDF documents.
//!
//! The input uses a handful of line-level conventions: `# ` headings, `## `
//! sub-headings, `1. ` numbered items, `- ` bullet items, blank lines and plain
//! paragraphs. Each line is classified, word-wrapped by character count and
//! drawn top to bottom, with a page break whenever the next line would cross
//! the bottom margin.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagemark::render_file;
//!
//! fn main() -> pagemark::Result<()> {
//!     let stats = render_file("manual_usuario.md", "manual_usuario.pdf")?;
//!     println!("{} pages", stats.page_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **PDF output**: standard base-14 fonts, no font files required
//! - **Rendering plans**: inspect every draw call and page break as JSON
//! - **Custom canvases**: implement [`Canvas`] to lay out onto any surface
//! - **Reproducible output**: pin the caption date for byte-identical files

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{Font, FontFamily, FontVariant, LayoutEngine, PageGeometry, Style, StyleSheet};
pub use model::{LineKind, Metadata, SourceDocument, DEFAULT_TITLE};
pub use parser::{classify_document, classify_line, LineClassifier};
pub use render::{
    Canvas, DrawCommand, JsonFormat, PdfCanvas, RecordingCanvas, RenderOptions, RenderPlan,
    RenderStats,
};

use chrono::NaiveDate;
use std::path::Path;

/// Source file rendered when no input is given.
pub const DEFAULT_INPUT: &str = "manual_usuario.md";

/// Output file written when no output is given.
pub const DEFAULT_OUTPUT: &str = "manual_usuario.pdf";

/// Render a text file to a PDF file with default options.
///
/// The input is checked before the output is created, so a missing input
/// leaves no partial file behind.
///
/// # Example
///
/// ```no_run
/// use pagemark::render_file;
///
/// render_file("manual.md", "manual.pdf").unwrap();
/// ```
pub fn render_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<RenderStats> {
    render_file_with_options(input, output, &RenderOptions::default())
}

/// Render a text file to a PDF file with custom options.
pub fn render_file_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &RenderOptions,
) -> Result<RenderStats> {
    let doc = SourceDocument::open(input)?;
    write_pdf(&doc, output.as_ref(), options)
}

/// Render text to PDF bytes.
///
/// # Example
///
/// ```
/// use pagemark::{render_str, RenderOptions};
///
/// let pdf = render_str("# Hello\n\nWorld", &RenderOptions::default()).unwrap();
/// assert!(pdf.starts_with(b"%PDF-"));
/// ```
pub fn render_str(text: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    render::to_pdf_bytes(&SourceDocument::from_text(text), options)
}

/// Lay out text and return the rendering plan without producing a PDF.
///
/// # Example
///
/// ```
/// use pagemark::{plan_str, RenderOptions};
///
/// let plan = plan_str("- one\n- two", &RenderOptions::default());
/// assert_eq!(plan.texts(), vec!["one", "two"]);
/// ```
pub fn plan_str(text: &str, options: &RenderOptions) -> RenderPlan {
    render::to_plan(&SourceDocument::from_text(text), options)
}

/// Lay out a text file and return the rendering plan.
pub fn plan_file<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<RenderPlan> {
    let doc = SourceDocument::open(path)?;
    Ok(render::to_plan(&doc, options))
}

fn write_pdf(doc: &SourceDocument, output: &Path, options: &RenderOptions) -> Result<RenderStats> {
    let mut canvas = PdfCanvas::new(options);
    let stats = render::render_to_canvas(doc, &mut canvas, options);
    canvas.finish_to_path(output)?;
    Ok(stats)
}

/// Builder for loading and rendering documents.
///
/// # Example
///
/// ```no_run
/// use pagemark::Pagemark;
///
/// let stats = Pagemark::new()
///     .with_title("Operator Guide")
///     .with_caption_prefix("Printed on")
///     .load("guide.md")?
///     .write_pdf("guide.pdf")?;
/// # Ok::<(), pagemark::Error>(())
/// ```
pub struct Pagemark {
    options: RenderOptions,
}

impl Pagemark {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_title(title);
        self
    }

    /// Pin the caption date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.options = self.options.with_date(date);
        self
    }

    /// Set the caption prefix.
    pub fn with_caption_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options = self.options.with_caption_prefix(prefix);
        self
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.options = self.options.with_geometry(geometry);
        self
    }

    /// Set the style sheet.
    pub fn with_stylesheet(mut self, styles: StyleSheet) -> Self {
        self.options = self.options.with_stylesheet(styles);
        self
    }

    /// Write uncompressed content streams.
    pub fn uncompressed(mut self) -> Self {
        self.options = self.options.with_compression(false);
        self
    }

    /// Load a text file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<PagemarkResult> {
        let document = SourceDocument::open(path)?;
        Ok(PagemarkResult {
            document,
            options: self.options,
        })
    }

    /// Load text from memory.
    pub fn load_str(self, text: &str) -> PagemarkResult {
        PagemarkResult {
            document: SourceDocument::from_text(text),
            options: self.options,
        }
    }
}

impl Default for Pagemark {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document together with its render options.
pub struct PagemarkResult {
    /// The source document
    pub document: SourceDocument,
    /// Render options to use
    options: RenderOptions,
}

impl PagemarkResult {
    /// Render to PDF bytes.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>> {
        render::to_pdf_bytes(&self.document, &self.options)
    }

    /// Render to a PDF file.
    pub fn write_pdf<P: AsRef<Path>>(&self, path: P) -> Result<RenderStats> {
        write_pdf(&self.document, path.as_ref(), &self.options)
    }

    /// Lay out without producing a PDF.
    pub fn plan(&self) -> RenderPlan {
        render::to_plan(&self.document, &self.options)
    }

    /// Lay out and serialize the plan to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.plan(), format)
    }

    /// The render options in effect.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}
