//! Input discovery errors.

use std::path::PathBuf;

/// Errors that stop a run before any transcript is parsed.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Input not found: {}", path.display())]
    InputNotFound { path: PathBuf },
}
