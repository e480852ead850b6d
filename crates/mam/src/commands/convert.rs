//! `mam convert` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use mam_books::{BookId, book_groups};
use mam_config::{CliSettings, Config, Variant};
use mam_core::process_all_passes;
use mam_output::{BookWriter, OutputFormat};

use super::selected_books;
use crate::error::CliError;
use crate::output::Output;

/// Output format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Csv,
    UnicodeNames,
    Xml,
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Self::Csv,
            FormatArg::UnicodeNames => Self::UnicodeNames,
            FormatArg::Xml => Self::Xml,
            FormatArg::Html => Self::Html,
        }
    }
}

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Convert one book, e.g. `Genesis`, `1Samuel`, `Song of Songs`.
    #[arg(long, conflicts_with = "section6")]
    book39: Option<String>,

    /// Convert one section: Torah, NevRish, NevAh, SifEm, HamMeg, KetAh.
    #[arg(long)]
    section6: Option<String>,

    /// Output format, repeatable (overrides config).
    #[arg(short, long = "format", value_enum)]
    formats: Vec<FormatArg>,

    /// MAM-XML input directory (overrides config).
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also render the separate alef and bet cantillation readings.
    #[arg(long)]
    include_ab: bool,

    /// Path to configuration file (default: auto-discover mam.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (log every file written).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ConvertArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let books = selected_books(self.book39.as_deref(), self.section6.as_deref())?;
        let cli_settings = CliSettings {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            formats: (!self.formats.is_empty())
                .then(|| self.formats.into_iter().map(OutputFormat::from).collect()),
            include_ab_cantillation: self.include_ab.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let variant = config.variant();

        output.info(&format!("Input: {}", variant.input_dir.display()));
        output.info(&format!("Output: {}", variant.output_dir.display()));

        let written = convert_books(&variant, &books, &output)?;

        output.success(&format!(
            "Converted {} book(s), {written} file(s) written",
            books.len()
        ));
        Ok(())
    }
}

/// Render the groups covering `books` and write the selected books.
/// Returns the number of files written.
pub(crate) fn convert_books(
    variant: &Variant,
    books: &[BookId],
    output: &Output,
) -> Result<usize, CliError> {
    let writer = BookWriter::new(&variant.output_dir, variant.formats.clone())
        .with_path_qual(variant.path_qual.clone())
        .with_csv_header(!variant.exclude_csv_header)
        .with_wbr(variant.add_wbr)
        .with_ab_cantillation(variant.include_ab_cantillation);

    let mut written = 0;
    for group in book_groups(books) {
        let path = variant.input_path(&group.name)?;
        output.highlight(&group.name);
        output.detail(&format!("  reading {}", path.display()));

        let root = mam_xml::parse_file(&path)?;
        let rendered = process_all_passes(
            &root,
            variant.tradition,
            variant.include_ab_cantillation,
            &variant.handler_options,
        )?;
        tracing::debug!(group = %group.name, books = rendered.len(), "Rendered group");

        for book in rendered.iter().filter(|b| books.contains(&b.book)) {
            for file in writer.write(book)? {
                output.detail(&format!("  wrote {}", file.display()));
                written += 1;
            }
        }
    }
    Ok(written)
}
