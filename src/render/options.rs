//! Rendering options and configuration.

use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};
use crate::layout::{PageGeometry, StyleSheet};
use crate::model::Metadata;

/// Default caption prefix drawn under every heading.
pub const DEFAULT_CAPTION_PREFIX: &str = "Generated on";

/// Default `strftime` format for the caption date.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Options for laying out and writing a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page size, margins and line gap
    pub geometry: PageGeometry,

    /// Style for every line kind
    pub styles: StyleSheet,

    /// Metadata written to the PDF
    pub metadata: Metadata,

    /// Text before the date in the heading caption
    pub caption_prefix: String,

    /// `strftime` format of the caption date
    pub date_format: String,

    /// Fixed caption date (today's local date if `None`)
    pub date: Option<NaiveDate>,

    /// Compress page content streams
    pub compress: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the style sheet.
    pub fn with_stylesheet(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = title.into();
        self
    }

    /// Set the caption prefix.
    pub fn with_caption_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.caption_prefix = prefix.into();
        self
    }

    /// Set the caption date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Pin the caption date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Pin the caption date from a `DD/MM/YYYY` string.
    pub fn with_date_str(self, date: &str) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(date.trim(), DEFAULT_DATE_FORMAT)
            .map_err(|_| Error::InvalidDate(date.to_string()))?;
        Ok(self.with_date(parsed))
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// The date shown in captions.
    pub fn caption_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Full caption text, e.g. `"Generated on 18/10/2026"`.
    pub fn caption_text(&self) -> String {
        format!(
            "{} {}",
            self.caption_prefix,
            self.caption_date().format(&self.date_format)
        )
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            styles: StyleSheet::default(),
            metadata: Metadata::default(),
            caption_prefix: DEFAULT_CAPTION_PREFIX.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            date: None,
            compress: true,
        }
    }
}
