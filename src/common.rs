extern crate thiserror;
use thiserror::Error;

use std::path::{Path, PathBuf};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Could not run {0}, is it installed and on the PATH?")]
    ToolNotFound(String),

    #[error("{program} exited with {status}")]
    ToolExitStatus { program: String, status: String },

    #[error("Inspection of {path:?} failed: {reason}")]
    InspectionFailed { path: PathBuf, reason: String },

    #[error("Could not enumerate the scan directory: {0}")]
    EnumerationError(String),

    #[error("Serialization error")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

impl From<glob::PatternError> for ScanError {
    fn from(e: glob::PatternError) -> Self {
        ScanError::EnumerationError(e.to_string())
    }
}

impl From<glob::GlobError> for ScanError {
    fn from(e: glob::GlobError) -> Self {
        ScanError::EnumerationError(e.to_string())
    }
}

/// Bare file name of a path, as it is used for keys and dependency names
pub fn file_name_string<P: AsRef<Path>>(p: P) -> Option<String> {
    p.as_ref()
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
}

pub fn path_to_string<P: AsRef<Path>>(p: P) -> String {
    p.as_ref()
        .to_str()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{:?}", p.as_ref()))
}

/// True if the name is a single file name, with no directory part, root or drive prefix
///
/// Both separators are rejected on every platform, since report lines come from Windows tools.
pub fn is_bare_file_name(name: &str) -> bool {
    !name.contains(['/', '\\'])
        && Path::new(name).file_name() == Some(std::ffi::OsStr::new(name))
}

/// Suffix to match against report lines and directory entries, e.g. "dll" -> ".dll"
pub fn extension_suffix(extension: &str) -> String {
    format!(".{}", extension.trim_start_matches('.').to_lowercase())
}
