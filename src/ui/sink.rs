//! ui::sink
//!
//! Output sink for single-file modes.
//!
//! With no destination the reply is printed. With a destination the reply
//! is written to that file, parents created as needed, replacing whatever
//! was there. The write is a plain overwrite with no temp file or fsync.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Deliver `content` to `out`, or print it to `stdout` when `out` is `None`.
///
/// Returns the absolute path written, if any.
pub fn write_output(
    content: &str,
    out: Option<&Path>,
    stdout: &mut dyn Write,
) -> io::Result<Option<PathBuf>> {
    let Some(path) = out else {
        writeln!(stdout, "{}", content)?;
        stdout.flush()?;
        return Ok(None);
    };

    write_file(path, content)?;
    Ok(Some(absolute(path)))
}

/// Write `content` to `path`, creating missing parent directories.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)
}

fn absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
