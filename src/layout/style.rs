//! Style descriptors and the per-kind style table.

use serde::{Deserialize, Serialize};

use crate::model::LineKind;

/// Font size used to advance the cursor over a blank line.
pub const BLANK_LINE_SIZE: f32 = 10.0;

/// One of the standard PDF base-14 families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Helvetica (sans serif)
    #[default]
    Helvetica,
    /// Times (serif)
    Times,
    /// Courier (monospace)
    Courier,
}

/// Weight/slant variant of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontVariant {
    /// Upright, normal weight
    #[default]
    Regular,
    /// Bold weight
    Bold,
    /// Slanted (oblique or italic depending on family)
    Oblique,
}

/// A concrete font: family plus variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Font {
    /// Font family
    pub family: FontFamily,
    /// Weight/slant
    pub variant: FontVariant,
}

impl Font {
    /// Create a font.
    pub const fn new(family: FontFamily, variant: FontVariant) -> Self {
        Self { family, variant }
    }

    /// PostScript name of the base-14 font, as used in the PDF `BaseFont` entry.
    pub fn postscript_name(&self) -> &'static str {
        match (self.family, self.variant) {
            (FontFamily::Helvetica, FontVariant::Regular) => "Helvetica",
            (FontFamily::Helvetica, FontVariant::Bold) => "Helvetica-Bold",
            (FontFamily::Helvetica, FontVariant::Oblique) => "Helvetica-Oblique",
            (FontFamily::Times, FontVariant::Regular) => "Times-Roman",
            (FontFamily::Times, FontVariant::Bold) => "Times-Bold",
            (FontFamily::Times, FontVariant::Oblique) => "Times-Italic",
            (FontFamily::Courier, FontVariant::Regular) => "Courier",
            (FontFamily::Courier, FontVariant::Bold) => "Courier-Bold",
            (FontFamily::Courier, FontVariant::Oblique) => "Courier-Oblique",
        }
    }
}

/// How one kind of line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Font to draw with
    pub font: Font,

    /// Font size in points
    pub size: f32,

    /// Indent from the left margin in points
    pub indent: f32,

    /// Maximum characters per wrapped line
    pub wrap_width: usize,

    /// Lines reserved with `ensure_space` before the block starts (0 = none)
    pub reserve_lines: u32,
}

impl Style {
    /// Create a style with no block reservation.
    pub fn new(font: Font, size: f32, indent: f32, wrap_width: usize) -> Self {
        Self {
            font,
            size,
            indent,
            wrap_width,
            reserve_lines: 0,
        }
    }

    /// Set the number of lines reserved before the block.
    pub fn with_reserve(mut self, lines: u32) -> Self {
        self.reserve_lines = lines;
        self
    }
}

/// The style for every line kind, plus the date caption under headings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// `# ` headings
    pub heading: Style,

    /// `## ` sub-headings
    pub sub_heading: Style,

    /// Numbered items
    pub numbered_item: Style,

    /// Bullet items
    pub bullet_item: Style,

    /// Plain paragraphs
    pub paragraph: Style,

    /// Date caption drawn after each heading
    pub caption: Style,
}

impl StyleSheet {
    /// Create the default style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the style for a line kind. Blank lines have no style.
    pub fn resolve(&self, kind: &LineKind) -> Option<&Style> {
        match kind {
            LineKind::Heading(_) => Some(&self.heading),
            LineKind::SubHeading(_) => Some(&self.sub_heading),
            LineKind::NumberedItem { .. } => Some(&self.numbered_item),
            LineKind::BulletItem(_) => Some(&self.bullet_item),
            LineKind::Paragraph(_) => Some(&self.paragraph),
            LineKind::Blank => None,
        }
    }

    /// Switch every style to another font family, keeping variants.
    pub fn with_family(mut self, family: FontFamily) -> Self {
        for style in [
            &mut self.heading,
            &mut self.sub_heading,
            &mut self.numbered_item,
            &mut self.bullet_item,
            &mut self.paragraph,
            &mut self.caption,
        ] {
            style.font.family = family;
        }
        self
    }

    /// Every distinct font the sheet can draw with.
    pub fn fonts(&self) -> Vec<Font> {
        let mut fonts = Vec::new();
        for style in [
            &self.heading,
            &self.sub_heading,
            &self.numbered_item,
            &self.bullet_item,
            &self.paragraph,
            &self.caption,
        ] {
            if !fonts.contains(&style.font) {
                fonts.push(style.font);
            }
        }
        fonts
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        let regular = Font::new(FontFamily::Helvetica, FontVariant::Regular);
        let bold = Font::new(FontFamily::Helvetica, FontVariant::Bold);
        let oblique = Font::new(FontFamily::Helvetica, FontVariant::Oblique);

        Self {
            heading: Style::new(bold, 24.0, 0.0, 60).with_reserve(2),
            sub_heading: Style::new(bold, 16.0, 0.0, 80).with_reserve(2),
            numbered_item: Style::new(regular, 12.0, 16.0, 74).with_reserve(1),
            bullet_item: Style::new(regular, 12.0, 14.0, 70).with_reserve(1),
            paragraph: Style::new(regular, 12.0, 0.0, 90),
            caption: Style::new(oblique, 10.0, 0.0, usize::MAX).with_reserve(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let sheet = StyleSheet::default();

        let h = sheet.resolve(&LineKind::Heading("x".into())).unwrap();
        assert_eq!(h.font.postscript_name(), "Helvetica-Bold");
        assert_eq!((h.size, h.indent, h.wrap_width), (24.0, 0.0, 60));

        let s = sheet.resolve(&LineKind::SubHeading("x".into())).unwrap();
        assert_eq!((s.size, s.indent, s.wrap_width), (16.0, 0.0, 80));

        let n = sheet
            .resolve(&LineKind::NumberedItem {
                number: "1".into(),
                text: "x".into(),
            })
            .unwrap();
        assert_eq!(n.font.postscript_name(), "Helvetica");
        assert_eq!((n.size, n.indent, n.wrap_width), (12.0, 16.0, 74));

        let b = sheet.resolve(&LineKind::BulletItem("x".into())).unwrap();
        assert_eq!((b.size, b.indent, b.wrap_width), (12.0, 14.0, 70));

        let p = sheet.resolve(&LineKind::Paragraph("x".into())).unwrap();
        assert_eq!((p.size, p.indent, p.wrap_width), (12.0, 0.0, 90));

        assert!(sheet.resolve(&LineKind::Blank).is_none());
        assert_eq!(sheet.caption.font.postscript_name(), "Helvetica-Oblique");
    }

    #[test]
    fn test_heading_and_paragraph_differ_everywhere() {
        let sheet = StyleSheet::default();
        let (h, p) = (sheet.heading, sheet.paragraph);
        assert_ne!(h.font, p.font);
        assert_ne!(h.size, p.size);
        assert_ne!(h.wrap_width, p.wrap_width);
    }

    #[test]
    fn test_fonts_are_deduplicated() {
        let fonts = StyleSheet::default().fonts();
        assert_eq!(fonts.len(), 3);
    }

    #[test]
    fn test_with_family() {
        let sheet = StyleSheet::default().with_family(FontFamily::Times);
        assert_eq!(sheet.heading.font.postscript_name(), "Times-Bold");
        assert_eq!(sheet.caption.font.postscript_name(), "Times-Italic");
        assert_eq!(sheet.paragraph.font.postscript_name(), "Times-Roman");
    }
}
