//! Configuration management for the MAM converter.
//!
//! Parses `mam.toml` with serde and auto-discovers it in the current
//! directory or its parents. CLI settings override file values via
//! [`CliSettings`]. The result of loading is a [`Config`]; converters work
//! from its immutable [`Variant`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `input.dir`
//! - `output.dir`
//! - `output.path_qual`

mod expand;

use std::path::{Path, PathBuf};

use mam_books::Tradition;
use mam_core::{HandlerOptions, KetivMaqaf, NoteStyle};
use mam_output::OutputFormat;
use serde::Deserialize;

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the MAM-XML input directory.
    pub input_dir: Option<PathBuf>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the list of output formats.
    pub formats: Option<Vec<OutputFormat>>,
    /// Override whether alef/bet cantillation passes run.
    pub include_ab_cantillation: Option<bool>,
}

const CONFIG_FILENAME: &str = "mam.toml";

const DEFAULT_INPUT_DIR: &str = "../MAM-XML/out";
const DEFAULT_OUTPUT_DIR: &str = "out";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    input: InputConfigRaw,
    output: OutputConfigRaw,
    /// Rendering conventions.
    pub render: RenderConfig,

    /// Resolved input configuration (set after loading).
    #[serde(skip)]
    pub input_resolved: InputConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct InputConfigRaw {
    dir: Option<String>,
    tradition: Tradition,
}

/// Resolved input configuration.
#[derive(Debug, Default)]
pub struct InputConfig {
    /// Directory holding `xml-vtrad-*` folders.
    pub dir: PathBuf,
    /// Versification of the input files.
    pub tradition: Tradition,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    path_qual: String,
    formats: Vec<OutputFormat>,
    exclude_csv_header: bool,
    add_wbr: bool,
}

impl Default for OutputConfigRaw {
    fn default() -> Self {
        Self {
            dir: None,
            path_qual: String::new(),
            formats: default_formats(),
            exclude_csv_header: false,
            add_wbr: false,
        }
    }
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Csv, OutputFormat::UnicodeNames]
}

/// Resolved output configuration.
#[derive(Debug)]
pub struct OutputConfig {
    /// Root of the output tree.
    pub dir: PathBuf,
    /// Suffix appended to each format folder (e.g. `-vtrad-bhs`).
    pub path_qual: String,
    /// Formats to write.
    pub formats: Vec<OutputFormat>,
    /// Skip the Sefaria metadata rows at the top of CSV files.
    pub exclude_csv_header: bool,
    /// Insert `<wbr>` after maqafs in HTML documents.
    pub add_wbr: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            path_qual: String::new(),
            formats: default_formats(),
            exclude_csv_header: false,
            add_wbr: false,
        }
    }
}

/// Rendering conventions.
#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(default)]
pub struct RenderConfig {
    /// How scroll-difference notes are rendered.
    pub note_style: NoteStyle,
    /// Where `append-maqaf` puts the maqaf.
    pub ketiv_maqaf: KetivMaqaf,
    /// Also render the separate lower/upper cantillation readings.
    pub include_ab_cantillation: bool,
}

/// The immutable record a conversion run works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub tradition: Tradition,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub path_qual: String,
    pub formats: Vec<OutputFormat>,
    pub exclude_csv_header: bool,
    pub add_wbr: bool,
    pub include_ab_cantillation: bool,
    pub handler_options: HandlerOptions,
}

impl Variant {
    /// Input file for a book group, e.g. `{input}/xml-vtrad-sef/1Sam2Sam.xml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a tradition with no input
    /// folder.
    pub fn input_path(&self, group_name: &str) -> Result<PathBuf, ConfigError> {
        let folder = input_folder(self.tradition)?;
        Ok(self.input_dir.join(folder).join(format!("{group_name}.xml")))
    }
}

fn input_folder(tradition: Tradition) -> Result<&'static str, ConfigError> {
    tradition.input_dir_name().ok_or_else(|| {
        ConfigError::Validation(format!(
            "input.tradition = \"{}\" has no input files; use \"sefaria\" or \"bhs\"",
            tradition.name()
        ))
    })
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`input.dir`").
        field: String,
        /// Error message (e.g., "${`MAM_HOME`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `mam.toml` in the current directory and parents, and
    /// falls back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after path resolution and are validated
    /// together with the file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(input_dir) = &settings.input_dir {
            self.input_resolved.dir.clone_from(input_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
        if let Some(formats) = &settings.formats {
            self.output_resolved.formats.clone_from(formats);
        }
        if let Some(include) = settings.include_ab_cantillation {
            self.render.include_ab_cantillation = include;
        }
    }

    /// The immutable record for a conversion run.
    #[must_use]
    pub fn variant(&self) -> Variant {
        Variant {
            tradition: self.input_resolved.tradition,
            input_dir: self.input_resolved.dir.clone(),
            output_dir: self.output_resolved.dir.clone(),
            path_qual: self.output_resolved.path_qual.clone(),
            formats: self.output_resolved.formats.clone(),
            exclude_csv_header: self.output_resolved.exclude_csv_header,
            add_wbr: self.output_resolved.add_wbr,
            include_ab_cantillation: self.render.include_ab_cantillation,
            handler_options: HandlerOptions {
                note_style: self.render.note_style,
                ketiv_maqaf: self.render.ketiv_maqaf,
            },
        }
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            input: InputConfigRaw::default(),
            output: OutputConfigRaw::default(),
            render: RenderConfig::default(),
            input_resolved: InputConfig {
                dir: base.join(DEFAULT_INPUT_DIR),
                tradition: Tradition::default(),
            },
            output_resolved: OutputConfig {
                dir: base.join(DEFAULT_OUTPUT_DIR),
                ..OutputConfig::default()
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        input_folder(self.input_resolved.tradition)?;

        if self.output_resolved.formats.is_empty() {
            return Err(ConfigError::Validation(
                "output.formats cannot be empty".to_owned(),
            ));
        }

        let path_qual = &self.output_resolved.path_qual;
        if path_qual.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "output.path_qual must not contain path separators: {path_qual:?}"
            )));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.input.dir {
            self.input.dir = Some(expand::expand_env(dir, "input.dir")?);
        }
        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }
        self.output.path_qual = expand::expand_env(&self.output.path_qual, "output.path_qual")?;
        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.input_resolved = InputConfig {
            dir: resolve(self.input.dir.as_deref(), DEFAULT_INPUT_DIR),
            tradition: self.input.tradition,
        };
        self.output_resolved = OutputConfig {
            dir: resolve(self.output.dir.as_deref(), DEFAULT_OUTPUT_DIR),
            path_qual: self.output.path_qual.clone(),
            formats: self.output.formats.clone(),
            exclude_csv_header: self.output.exclude_csv_header,
            add_wbr: self.output.add_wbr,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn load_str(dir: &Path, toml: &str) -> Result<Config, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, toml).unwrap();
        Config::load(Some(&path), None)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/work"));
        assert_eq!(
            config.input_resolved.dir,
            PathBuf::from("/work/../MAM-XML/out")
        );
        assert_eq!(config.output_resolved.dir, PathBuf::from("/work/out"));
        assert_eq!(config.input_resolved.tradition, Tradition::Sefaria);
        assert_eq!(
            config.output_resolved.formats,
            vec![OutputFormat::Csv, OutputFormat::UnicodeNames]
        );
        assert!(!config.render.include_ab_cantillation);
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.note_style, NoteStyle::TargetRelative);
        assert_eq!(config.render.ketiv_maqaf, KetivMaqaf::AfterBracket);
    }

    #[test]
    fn test_parse_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_str(
            dir.path(),
            r#"
[input]
dir = "xml"
tradition = "bhs"

[output]
dir = "generated"
path_qual = "-vtrad-bhs"
formats = ["csv", "xml", "html"]
exclude_csv_header = true
add_wbr = true

[render]
note_style = "trailing"
ketiv_maqaf = "before-bracket"
include_ab_cantillation = true
"#,
        )
        .unwrap();

        let variant = config.variant();
        assert_eq!(variant.tradition, Tradition::Bhs);
        assert_eq!(variant.input_dir, dir.path().join("xml"));
        assert_eq!(variant.output_dir, dir.path().join("generated"));
        assert_eq!(variant.path_qual, "-vtrad-bhs");
        assert_eq!(
            variant.formats,
            vec![OutputFormat::Csv, OutputFormat::Xml, OutputFormat::Html]
        );
        assert!(variant.exclude_csv_header);
        assert!(variant.add_wbr);
        assert!(variant.include_ab_cantillation);
        assert_eq!(variant.handler_options.note_style, NoteStyle::Trailing);
        assert_eq!(variant.handler_options.ketiv_maqaf, KetivMaqaf::BeforeBracket);
        assert_eq!(config.config_path, Some(dir.path().join(CONFIG_FILENAME)));
    }

    #[test]
    fn test_unknown_enum_value_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_str(dir.path(), "[render]\nnote_style = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_mam_tradition_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_str(dir.path(), "[input]\ntradition = \"mam\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("input.tradition"));
    }

    #[test]
    fn test_empty_formats_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_str(dir.path(), "[output]\nformats = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_path_qual_separator_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_str(dir.path(), "[output]\npath_qual = \"a/b\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_explicit_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Config::load(Some(&missing), None),
            Err(ConfigError::NotFound(p)) if p == missing
        ));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/work"));
        config.apply_cli_settings(&CliSettings {
            input_dir: Some(PathBuf::from("/data/xml")),
            output_dir: Some(PathBuf::from("/data/out")),
            formats: Some(vec![OutputFormat::Html]),
            include_ab_cantillation: Some(true),
        });
        let variant = config.variant();
        assert_eq!(variant.input_dir, PathBuf::from("/data/xml"));
        assert_eq!(variant.output_dir, PathBuf::from("/data/out"));
        assert_eq!(variant.formats, vec![OutputFormat::Html]);
        assert!(variant.include_ab_cantillation);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/work"));
        let before = config.variant();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.variant(), before);
    }

    #[test]
    fn test_cli_formats_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let settings = CliSettings {
            formats: Some(Vec::new()),
            ..CliSettings::default()
        };
        assert!(matches!(
            Config::load(Some(&path), Some(&settings)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_expand_env_vars_dirs() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MAM_CONFIG_TEST_ROOT", "/srv/mam");
        }
        let mut config: Config = toml::from_str(
            r#"
[input]
dir = "${MAM_CONFIG_TEST_ROOT}/xml"

[output]
dir = "${MAM_CONFIG_TEST_OUT:-/tmp/out}"
"#,
        )
        .unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/ignored"));

        assert_eq!(config.input_resolved.dir, PathBuf::from("/srv/mam/xml"));
        assert_eq!(config.output_resolved.dir, PathBuf::from("/tmp/out"));
        unsafe {
            std::env::remove_var("MAM_CONFIG_TEST_ROOT");
        }
    }

    #[test]
    fn test_input_path() {
        let variant = Config::default_with_base(Path::new("/work")).variant();
        assert_eq!(
            variant.input_path("1Sam2Sam").unwrap(),
            PathBuf::from("/work/../MAM-XML/out/xml-vtrad-sef/1Sam2Sam.xml")
        );
    }
}
