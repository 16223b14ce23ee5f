//! PDF canvas backed by `lopdf`.
//!
//! Text is drawn with the standard base-14 Type1 fonts using
//! `WinAnsiEncoding`, so no font files are embedded. Page content is buffered
//! in memory and the document is assembled in [`PdfCanvas::finish`].

use std::fs;
use std::io::Write;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document as LopdfDocument, Object, Stream, StringFormat};

use super::{Canvas, RenderOptions};
use crate::error::Result;
use crate::layout::{Font, PageGeometry};
use crate::model::Metadata;

const PDF_VERSION: &str = "1.5";

/// A [`Canvas`] that produces a PDF document.
#[derive(Debug, Clone)]
pub struct PdfCanvas {
    geometry: PageGeometry,
    metadata: Metadata,
    compress: bool,
    fonts: Vec<Font>,
    finished_pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
}

impl PdfCanvas {
    /// Create a canvas with one empty page.
    ///
    /// Fonts from the style sheet are registered up front so resource names are
    /// stable regardless of drawing order.
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            geometry: options.geometry,
            metadata: options.metadata.clone(),
            compress: options.compress,
            fonts: options.styles.fonts(),
            finished_pages: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Number of pages, including the one being drawn.
    pub fn page_count(&self) -> u32 {
        self.finished_pages.len() as u32 + 1
    }

    fn font_key(&mut self, font: Font) -> Vec<u8> {
        let index = match self.fonts.iter().position(|f| *f == font) {
            Some(i) => i,
            None => {
                self.fonts.push(font);
                self.fonts.len() - 1
            }
        };
        format!("F{}", index + 1).into_bytes()
    }

    /// Assemble the `lopdf` document.
    pub fn into_document(mut self) -> Result<LopdfDocument> {
        self.finished_pages.push(std::mem::take(&mut self.current));

        let mut doc = LopdfDocument::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (i, font) in self.fonts.iter().enumerate() {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(format!("F{}", i + 1), font_id);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        let media_box = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(self.geometry.width),
            Object::Real(self.geometry.height),
        ];

        let mut kids = Vec::with_capacity(self.finished_pages.len());
        for operations in self.finished_pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => text_string(&self.metadata.title),
            "Producer" => text_string(&self.metadata.producer),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        if self.compress {
            doc.compress();
        }

        log::debug!("Assembled PDF with {} pages", page_count);
        Ok(doc)
    }

    /// Serialize the document to a writer.
    pub fn finish<W: Write>(self, writer: &mut W) -> Result<()> {
        let mut doc = self.into_document()?;
        doc.save_to(writer)?;
        Ok(())
    }

    /// Serialize the document to memory.
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.finish(&mut buffer)?;
        Ok(buffer)
    }

    /// Serialize the document to a file.
    ///
    /// The document is fully assembled in memory before the file is created,
    /// so a serialization failure leaves no file behind.
    pub fn finish_to_path<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.finish_to_bytes()?;
        fs::write(path, &bytes)?;
        log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

impl Canvas for PdfCanvas {
    fn draw_text(&mut self, x: f32, y: f32, font: Font, size: f32, text: &str) {
        let key = self.font_key(font);
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(key), Object::Real(size)]),
            Operation::new("Td", vec![Object::Real(x), Object::Real(y)]),
            Operation::new(
                "Tj",
                vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    fn start_new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.finished_pages.push(page);
    }
}

/// Encode text for a `WinAnsiEncoding` font. Unmappable characters become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\t' => b' ',
        ' '..='~' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => b'?',
    }
}

/// A PDF text string: literal for ASCII, UTF-16BE with BOM otherwise.
fn text_string(s: &str) -> Object {
    if s.is_ascii() {
        return Object::String(s.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xfe, 0xff];
    for unit in s.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}
