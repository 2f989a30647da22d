//! Data structures that must be filled with the input and the parameters for the DLL scan

use crate::common::{path_to_string, ScanError};
use std::path::{Path, PathBuf};

/// File written next to the scanned DLLs when no output path is given
pub const DEFAULT_JSON_OUTPUT: &str = "dll_dependencies.json";
pub const DEFAULT_TEXT_OUTPUT: &str = "dll_dependencies.txt";

pub const DEFAULT_EXTENSION: &str = "dll";

#[derive(Clone, Debug)]
pub struct ScanTarget {
    /// Folder whose direct children are scanned (not recursive)
    pub directory: PathBuf,
    /// Extension of the files to scan, without the leading dot
    pub extension: String,
}

#[derive(Clone, Debug)]
pub struct ScanParameters {
    /// Abort on the first failed inspection instead of treating it as "no dependencies"
    pub strict: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `{"a.dll": ["b.dll", "c.dll"]}`
    Json,
    /// `a.dll: b.dll, c.dll`
    Text,
}

impl OutputFormat {
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => DEFAULT_JSON_OUTPUT,
            OutputFormat::Text => DEFAULT_TEXT_OUTPUT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OutputSpec {
    pub path: PathBuf,
    pub format: OutputFormat,
}

/// Complete specification of a scan task
#[derive(Clone, Debug)]
pub struct ScanQuery {
    pub target: ScanTarget,
    pub parameters: ScanParameters,
    pub output: OutputSpec,
}

impl ScanQuery {
    /// Query for the given folder with the default settings: *.dll files, lenient inspection,
    /// JSON output in the scanned folder
    pub fn for_directory<P: AsRef<Path>>(directory: P) -> Self {
        let directory = directory.as_ref().to_owned();
        let format = OutputFormat::Json;
        Self {
            output: OutputSpec {
                path: directory.join(format.default_file_name()),
                format,
            },
            target: ScanTarget {
                directory,
                extension: DEFAULT_EXTENSION.to_owned(),
            },
            parameters: ScanParameters { strict: false },
        }
    }

    /// Query for the current working directory, as the tool behaves when run without arguments
    pub fn deduce_from_working_directory() -> Result<Self, ScanError> {
        Ok(Self::for_directory(std::env::current_dir()?))
    }

    /// Switch the output format; the output path follows if it was still the default one
    pub fn set_output_format(&mut self, format: OutputFormat) {
        let default_path = self
            .target
            .directory
            .join(self.output.format.default_file_name());
        if self.output.path == default_path {
            self.output.path = self.target.directory.join(format.default_file_name());
        }
        self.output.format = format;
    }

    /// Glob pattern selecting the files to scan
    pub fn pattern(&self) -> String {
        let escaped_dir = glob::Pattern::escape(&path_to_string(&self.target.directory));
        let extension = self.target.extension.trim_start_matches('.');
        if escaped_dir.is_empty() {
            format!("*.{}", extension)
        } else {
            format!("{}/*.{}", escaped_dir.trim_end_matches('/'), extension)
        }
    }
}
