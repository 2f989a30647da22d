//! Serialization of a scan result, either as JSON or as one `name: dep1, dep2` line per file

use crate::common::ScanError;
use crate::dependency_map::DependencyMap;
use crate::query::{OutputFormat, OutputSpec};
use fs_err as fs;

/// `{"a.dll": ["b.dll", "c.dll"]}`, pretty-printed with two-space indentation
pub fn to_json(map: &DependencyMap) -> Result<String, ScanError> {
    let mut js = serde_json::to_string_pretty(map)?;
    js.push('\n');
    Ok(js)
}

/// One line per entry, in scan order: `a.dll: b.dll, c.dll`
pub fn to_text(map: &DependencyMap) -> String {
    map.iter()
        .map(|(name, deps)| format!("{}: {}\n", name, deps.join(", ")))
        .collect()
}

pub fn render(map: &DependencyMap, format: OutputFormat) -> Result<String, ScanError> {
    match format {
        OutputFormat::Json => to_json(map),
        OutputFormat::Text => Ok(to_text(map)),
    }
}

/// Write the map to the output file, replacing its content
///
/// Called once, after the whole folder has been scanned.
pub fn write_output(map: &DependencyMap, output: &OutputSpec) -> Result<(), ScanError> {
    let content = render(map, output.format)?;
    fs::write(&output.path, content)?;
    Ok(())
}
