//! Writes every configured format for a rendered book.

use std::path::{Path, PathBuf};

use mam_core::BookOutput;

use crate::error::OutputError;
use crate::format::OutputFormat;
use crate::html::render_html;
use crate::layout::{output_path, write_atomic};
use crate::sefaria::render_csv;
use crate::unicode_names::render_unicode_names;
use crate::xml::render_xml;

/// Output settings for a run.
#[derive(Debug, Clone)]
pub struct BookWriter {
    output_dir: PathBuf,
    path_qual: String,
    formats: Vec<OutputFormat>,
    include_csv_header: bool,
    add_wbr: bool,
    include_ab_cantillation: bool,
}

impl BookWriter {
    /// Writer for `formats` under `output_dir`, with the CSV header on and
    /// no path qualifier.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, formats: Vec<OutputFormat>) -> Self {
        Self {
            output_dir: output_dir.into(),
            path_qual: String::new(),
            formats,
            include_csv_header: true,
            add_wbr: false,
            include_ab_cantillation: false,
        }
    }

    /// Suffix appended to every format folder, e.g. `-ajf`.
    #[must_use]
    pub fn with_path_qual(mut self, path_qual: impl Into<String>) -> Self {
        self.path_qual = path_qual.into();
        self
    }

    #[must_use]
    pub fn with_csv_header(mut self, include: bool) -> Self {
        self.include_csv_header = include;
        self
    }

    /// Insert `<wbr>` after maqafs in HTML documents.
    #[must_use]
    pub fn with_wbr(mut self, add_wbr: bool) -> Self {
        self.add_wbr = add_wbr;
        self
    }

    /// Add the alef and bet readings as extra CSV columns.
    #[must_use]
    pub fn with_ab_cantillation(mut self, include: bool) -> Self {
        self.include_ab_cantillation = include;
        self
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path `format` is written to for `book`.
    #[must_use]
    pub fn path_for(&self, format: OutputFormat, book: &BookOutput) -> PathBuf {
        output_path(
            &self.output_dir,
            format,
            &self.path_qual,
            book.book.sefaria_name(),
        )
    }

    /// Write every configured format for `book`, returning the paths
    /// written in format order.
    ///
    /// # Errors
    ///
    /// Returns the first rendering or file error.
    pub fn write(&self, book: &BookOutput) -> Result<Vec<PathBuf>, OutputError> {
        let mut written = Vec::with_capacity(self.formats.len());
        for &format in &self.formats {
            let contents = match format {
                OutputFormat::Csv => {
                    render_csv(book, self.include_csv_header, self.include_ab_cantillation)?
                }
                OutputFormat::UnicodeNames => render_unicode_names(book)?.into_bytes(),
                OutputFormat::Xml => render_xml(book)?,
                OutputFormat::Html => render_html(book, self.add_wbr).into_bytes(),
            };
            let path = self.path_for(format, book);
            write_atomic(&path, &contents)?;
            tracing::info!(
                book = %book.book,
                format = %format,
                path = %path.display(),
                "Wrote output file"
            );
            written.push(path);
        }
        Ok(written)
    }
}
