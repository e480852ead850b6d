//! CLI error types.

use mam_books::LocaleError;
use mam_config::ConfigError;
use mam_core::RenderError;
use mam_output::OutputError;
use mam_xml::XmlError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Locale(#[from] LocaleError),

    #[error("{0}")]
    Xml(#[from] XmlError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Output(#[from] OutputError),
}
