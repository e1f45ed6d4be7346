//! Locating and reading hand-history files.

mod error;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use error::ScanError;

/// Default transcript extensions.
pub const DEFAULT_EXTENSIONS: &[&str] = &["txt", "log"];

/// Transcripts found under an input, plus entries that could not be read.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Transcript paths, sorted
    pub files: Vec<PathBuf>,
    /// Directory entries the walk failed on
    pub unreadable: usize,
}

/// Collect the transcripts to scan, sorted by path.
///
/// A file path is taken as-is whatever its extension. A directory is walked
/// recursively and only files whose extension is in `extensions` are kept
/// (compared case-insensitively). Symlinked files count as files. Entries
/// the walk cannot read are logged and skipped; only a missing input fails.
pub fn discover<S: AsRef<str>>(input: &Path, extensions: &[S]) -> Result<Discovery, ScanError> {
    if !input.exists() {
        return Err(ScanError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    if input.is_file() {
        return Ok(Discovery {
            files: vec![input.to_path_buf()],
            unreadable: 0,
        });
    }

    let mut found = Discovery::default();
    for entry in WalkDir::new(input) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(
                    path = %err.path().unwrap_or(input).display(),
                    error = %err,
                    "skipping unreadable entry"
                );
                found.unreadable += 1;
                continue;
            }
        };
        // `Path::is_file` follows symlinks, `DirEntry::file_type` does not
        if entry.path().is_file() && has_extension(entry.path(), extensions) {
            found.files.push(entry.into_path());
        }
    }
    found.files.sort();

    Ok(found)
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.as_ref().eq_ignore_ascii_case(ext))
        })
}

/// Read a transcript, replacing undecodable bytes instead of failing.
pub fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Name used for the default output file: the file stem for a single file,
/// the directory name otherwise.
pub fn output_stem(input: &Path) -> String {
    let name = if input.is_file() {
        input.file_stem()
    } else {
        input.file_name()
    };
    name.and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("hands")
        .to_string()
}
