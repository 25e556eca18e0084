//! Driver-level fatal errors.
//!
//! Per-declaration problems never reach this type — they are folded into an
//! [`crate::decl::Emission`]'s `commented` flag and a [`crate::diagnostics::Diagnostic`].
//! `TranslateError` exists only for the handful of conditions that abort the
//! whole run: a manifest that cannot be read or parsed, or an output path
//! that cannot be written.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum TranslateError {
    /// The manifest file could not be read from disk.
    Io { path: PathBuf, source: std::io::Error },
    /// The manifest's extension is neither `.json` nor `.toml`.
    UnknownManifestFormat { path: PathBuf },
    /// The manifest parsed as the wrong shape or contained invalid data.
    Deserialize { path: PathBuf, message: String },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Io { path, source } => write!(f, "reading {}: {source}", path.display()),
            TranslateError::UnknownManifestFormat { path } => {
                write!(f, "{}: unrecognized manifest format (expected .json or .toml)", path.display())
            }
            TranslateError::Deserialize { path, message } => write!(f, "parsing {}: {message}", path.display()),
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
