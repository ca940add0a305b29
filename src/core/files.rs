//! core::files
//!
//! Source file access and directory enumeration.
//!
//! # Design
//!
//! Reads check for existence explicitly before touching the file so that a
//! missing path is reported as [`FileError::NotFound`] rather than as a
//! generic I/O failure.
//!
//! Enumeration is recursive and returns paths sorted lexicographically, so
//! folder modes process files in the same order on every platform.
//! Subdirectories that cannot be read are left out of the result; only an
//! unreadable root is an error.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::language::{self, Language};

/// Errors from file access.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// A source file loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as given by the caller
    pub path: PathBuf,
    /// Full UTF-8 contents
    pub text: String,
    /// Language detected from the extension
    pub language: Language,
}

/// Read a file as UTF-8 text.
///
/// # Errors
///
/// - [`FileError::NotFound`] if nothing exists at `path`
/// - [`FileError::Read`] if the file cannot be read or is not valid UTF-8
pub fn read_text(path: &Path) -> Result<String, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a file and classify its language.
pub fn read_source(path: &Path) -> Result<SourceFile, FileError> {
    let text = read_text(path)?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        text,
        language: Language::from_path(path),
    })
}

/// List every file under `root`, recursively, as `root/<relative>`.
///
/// No extension filtering is applied: binaries and build artifacts are
/// listed along with source files.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>, FileError> {
    Ok(walk_files(root)?
        .into_iter()
        .map(|rel| root.join(rel))
        .collect())
}

/// Relative paths of the supported source files under `root`.
pub fn discover_supported(root: &Path) -> Result<Vec<PathBuf>, FileError> {
    Ok(walk_files(root)?
        .into_iter()
        .filter(|rel| language::is_supported(rel))
        .collect())
}

/// Render a file listing one path per line.
pub fn render_listing(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn walk_files(root: &Path) -> Result<Vec<PathBuf>, FileError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            // Only the root is fatal; unreadable descendants are skipped.
            Err(source) if source.depth() == 0 || source.path() == Some(root) => {
                return Err(FileError::Walk {
                    path: root.to_path_buf(),
                    source,
                });
            }
            Err(_) => continue,
        };
        if !entry.path().is_file() {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            files.push(rel.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_text(&dir.path().join("nope.py")).unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
        assert!(err.to_string().starts_with("File not found:"));
    }

    #[test]
    fn read_invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.py");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_text(&path), Err(FileError::Read { .. })));
    }

    #[test]
    fn read_source_detects_language() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.go", "package main\n");
        let source = read_source(&dir.path().join("main.go")).unwrap();
        assert_eq!(source.language, Language::Go);
        assert_eq!(source.text, "package main\n");
    }

    #[test]
    fn discover_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "z.py", "");
        touch(dir.path(), "a/b.rs", "");
        touch(dir.path(), "a/notes.md", "");
        touch(dir.path(), "image.png", "");

        let found = discover_supported(dir.path()).unwrap();
        assert_eq!(found, vec![PathBuf::from("a/b.rs"), PathBuf::from("z.py")]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ok.py", "");
        touch(dir.path(), "locked/hidden.py", "");
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read through the permission bits.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let found = discover_supported(dir.path());
        let listed = list_files(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(found.unwrap(), vec![PathBuf::from("ok.py")]);
        assert_eq!(listed.unwrap(), vec![dir.path().join("ok.py")]);
    }

    #[test]
    fn missing_root_is_walk_error() {
        let dir = TempDir::new().unwrap();
        let err = discover_supported(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, FileError::Walk { .. }));
    }

    #[test]
    fn list_includes_unsupported_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "build/out.bin", "");
        touch(dir.path(), "main.py", "");

        let listed = list_files(dir.path()).unwrap();
        assert_eq!(
            listed,
            vec![dir.path().join("build/out.bin"), dir.path().join("main.py")]
        );
        assert!(!listed.contains(&dir.path().join("build")));
    }
}
