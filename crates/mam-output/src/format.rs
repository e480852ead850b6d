use std::fmt;

/// A file format a conversion run can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OutputFormat {
    /// Sefaria import CSV.
    Csv,
    /// Debug dump with one line per run of characters.
    UnicodeNames,
    /// The rendered markup re-serialized as XML.
    Xml,
    /// Standalone HTML document.
    Html,
}

impl OutputFormat {
    pub const ALL: [Self; 4] = [Self::Csv, Self::UnicodeNames, Self::Xml, Self::Html];

    /// Name used in configuration and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::UnicodeNames => "unicode-names",
            Self::Xml => "xml",
            Self::Html => "html",
        }
    }

    /// Output folder, before the path qualifier is appended.
    #[must_use]
    pub fn folder(self) -> &'static str {
        self.name()
    }

    /// File extension including the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => ".csv",
            Self::UnicodeNames => ".txt",
            Self::Xml => ".xml",
            Self::Html => ".html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
