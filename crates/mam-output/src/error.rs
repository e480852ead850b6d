use std::path::PathBuf;

/// Error writing an output file.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML write error: {0}")]
    Xml(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("No Unicode name for U+{:04X}", u32::from(*.0))]
    UnknownCharName(char),

    #[error("Failed to move temporary file to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}
