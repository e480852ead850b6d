//! Output path layout and atomic file writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::OutputError;
use crate::format::OutputFormat;

/// `{output_dir}/{folder}{path_qual}/{name}{ext}`.
#[must_use]
pub fn output_path(output_dir: &Path, format: OutputFormat, path_qual: &str, name: &str) -> PathBuf {
    output_dir
        .join(format!("{}{path_qual}", format.folder()))
        .join(format!("{name}{}", format.extension()))
}

/// Write `contents` to `path` through a temporary file in the same
/// directory, so readers never see a partial file.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`OutputError::Io`] if the directory or temporary file cannot be
/// created or written, and [`OutputError::Persist`] if the rename fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let io_err = |source| OutputError::Io {
        path: dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(io_err)?;
    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(contents).map_err(io_err)?;
    file.persist(path).map_err(|source| OutputError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path_with_qualifier() {
        let path = output_path(Path::new("out"), OutputFormat::Csv, "-ajf", "I Samuel");
        assert_eq!(path, Path::new("out/csv-ajf/I Samuel.csv"));
    }

    #[test]
    fn test_output_path_unicode_names() {
        let path = output_path(Path::new("out"), OutputFormat::UnicodeNames, "", "Genesis");
        assert_eq!(path, Path::new("out/unicode-names/Genesis.txt"));
    }

    #[test]
    fn test_write_atomic_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/file.txt");

        write_atomic(&path, b"hello").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        fs::write(&path, "old contents").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        let entries = fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
