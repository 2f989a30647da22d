extern crate thiserror;

pub mod common;
pub mod dependency_map;
pub mod inspector;
pub mod output;
pub mod query;
pub mod scanner;

pub use common::ScanError;
pub use dependency_map::DependencyMap;
pub use inspector::{Dumpbin, Inspection, Inspector};
pub use query::{OutputFormat, ScanQuery};

/// Scan the folder and write the result to the output file of the query
///
/// Nothing is written if the scan fails.
pub fn scan_and_write<I: Inspector + ?Sized>(
    query: &ScanQuery,
    inspector: &I,
) -> Result<DependencyMap, ScanError> {
    let map = scanner::scan(query, inspector)?;
    output::write_output(&map, &query.output)?;
    Ok(map)
}
