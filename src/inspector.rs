//! Access to the external tool reporting the DLLs a binary depends on
//!
//! The scanner never reads the binaries itself: it asks an [`Inspector`] for the textual
//! dependents report (by default `dumpbin /DEPENDENTS <file>`) and picks the lines that look
//! like file names.

use crate::common::{extension_suffix, path_to_string, ScanError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Produces the raw dependents report for a binary file
pub trait Inspector {
    fn dependents_report(&self, path: &Path) -> Result<String, ScanError>;
}

impl<F> Inspector for F
where
    F: Fn(&Path) -> Result<String, ScanError>,
{
    fn dependents_report(&self, path: &Path) -> Result<String, ScanError> {
        self(path)
    }
}

/// The Visual Studio `dumpbin` tool, or any program taking the same arguments
#[derive(Debug, Clone)]
pub struct Dumpbin {
    pub program: PathBuf,
    pub mode_flag: String,
}

impl Default for Dumpbin {
    fn default() -> Self {
        Self {
            program: PathBuf::from("dumpbin"),
            mode_flag: "/DEPENDENTS".to_owned(),
        }
    }
}

impl Dumpbin {
    pub fn new<P: AsRef<Path>>(program: P, mode_flag: &str) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            mode_flag: mode_flag.to_owned(),
        }
    }
}

impl Inspector for Dumpbin {
    fn dependents_report(&self, path: &Path) -> Result<String, ScanError> {
        let output = Command::new(&self.program)
            .arg(&self.mode_flag)
            .arg(path)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    ScanError::ToolNotFound(path_to_string(&self.program))
                }
                _ => ScanError::IOError(e),
            })?;

        if !output.status.success() {
            return Err(ScanError::ToolExitStatus {
                program: path_to_string(&self.program),
                status: output.status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Outcome of the inspection of a single file
///
/// A failed inspection and a file without dependencies end up the same in the scan output;
/// the distinction is kept here for callers that want to be strict about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// candidate dependency names, in report order (duplicates are kept)
    Dependents(Vec<String>),
    /// the tool could not be run or reported an error
    Failed(String),
}

impl Inspection {
    pub fn is_failed(&self) -> bool {
        matches!(self, Inspection::Failed(_))
    }

    /// Collapse a failure into "no dependencies"
    pub fn into_dependents(self) -> Vec<String> {
        match self {
            Inspection::Dependents(deps) => deps,
            Inspection::Failed(_) => Vec::new(),
        }
    }
}

/// Pick the lines of a dependents report that name a file with the given extension
///
/// The match is on the trimmed line, case insensitive on the extension only; this relies on
/// dumpbin printing each dependency alone on its line.
pub fn parse_dependents_report(report: &str, extension: &str) -> Vec<String> {
    let suffix = extension_suffix(extension);
    report
        .lines()
        .map(str::trim)
        .filter(|l| l.to_lowercase().ends_with(&suffix))
        .map(str::to_owned)
        .collect()
}

/// List the candidate dependencies of a single file
pub fn list_dependents<I: Inspector + ?Sized>(
    inspector: &I,
    path: &Path,
    extension: &str,
) -> Inspection {
    match inspector.dependents_report(path) {
        Ok(report) => Inspection::Dependents(parse_dependents_report(&report, extension)),
        Err(e) => Inspection::Failed(e.to_string()),
    }
}
