use crate::common::{file_name_string, is_bare_file_name, path_to_string, ScanError};
use crate::dependency_map::DependencyMap;
use crate::inspector::{list_dependents, Inspection, Inspector};
use crate::query::ScanQuery;
use fs_err as fs;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Finds the dependencies of the files in the folder specified by the query
///
/// Single pass over the folder, one file at a time; only dependencies lying in the same folder
/// are retained.
pub struct Scanner<'a, I: Inspector + ?Sized> {
    query: &'a ScanQuery,
    inspector: &'a I,
}

impl<'a, I: Inspector + ?Sized> Scanner<'a, I> {
    pub fn new(query: &'a ScanQuery, inspector: &'a I) -> Self {
        Self { query, inspector }
    }

    /// Files to be scanned, in the order glob yields them
    pub fn enumerate(&self) -> Result<Vec<PathBuf>, ScanError> {
        let directory = &self.query.target.directory;
        // glob silently yields nothing for a missing folder
        if !fs::metadata(directory)?.is_dir() {
            return Err(ScanError::EnumerationError(format!(
                "{} is not a directory",
                path_to_string(directory)
            )));
        }

        // Windows file names are case insensitive, so is the extension match
        let options = glob::MatchOptions {
            case_sensitive: false,
            ..Default::default()
        };

        // a previous run may have left its output among the matching files
        let output = fs::canonicalize(&self.query.output.path).ok();

        let mut files = Vec::new();
        for entry in glob::glob_with(&self.query.pattern(), options)? {
            let path = entry?;
            if output.is_some() && fs::canonicalize(&path).ok() == output {
                debug!("Skipping {}, output of a previous scan", path_to_string(&path));
            } else if path.is_file() {
                files.push(path);
            } else {
                debug!("Skipping {}, not a file", path_to_string(&path));
            }
        }
        Ok(files)
    }

    // only simple names relative to the scanned folder are considered, never paths
    fn exists_in_directory(&self, name: &str) -> bool {
        is_bare_file_name(name) && self.query.target.directory.join(name).is_file()
    }

    fn dependencies_of(&self, path: &Path) -> Result<Vec<String>, ScanError> {
        match list_dependents(self.inspector, path, &self.query.target.extension) {
            Inspection::Dependents(deps) => Ok(deps),
            Inspection::Failed(reason) => {
                if self.query.parameters.strict {
                    Err(ScanError::InspectionFailed {
                        path: path.to_owned(),
                        reason,
                    })
                } else {
                    warn!(
                        "Could not inspect {}, assuming no dependencies: {}",
                        path_to_string(path),
                        reason
                    );
                    Ok(Vec::new())
                }
            }
        }
    }

    pub fn run(&self) -> Result<DependencyMap, ScanError> {
        let mut map = DependencyMap::new();
        let files = self.enumerate()?;

        for path in &files {
            let name = match file_name_string(path) {
                Some(n) => n,
                None => {
                    warn!(
                        "Skipping {}, file name is not valid unicode",
                        path_to_string(path)
                    );
                    continue;
                }
            };
            debug!("Inspecting {}", name);

            let candidates = self.dependencies_of(path)?;
            let found: Vec<String> = candidates
                .into_iter()
                .filter(|d| {
                    let exists = self.exists_in_directory(d);
                    if !exists {
                        debug!("{}: dependency {} not found in the folder", name, d);
                    }
                    exists
                })
                .collect();

            map.insert(&name, found);
        }

        info!(
            "Scanned {} files in {}, {} with dependencies in the same folder",
            files.len(),
            path_to_string(&self.query.target.directory),
            map.len()
        );

        Ok(map)
    }
}

/// Scan the folder described by the query with the given inspector
pub fn scan<I: Inspector + ?Sized>(
    query: &ScanQuery,
    inspector: &I,
) -> Result<DependencyMap, ScanError> {
    Scanner::new(query, inspector).run()
}
