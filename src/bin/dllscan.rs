extern crate dll_scan;

use anyhow::Context;
use clap::Parser;
use dll_scan::common::path_to_string;
use dll_scan::output::{render, write_output};
use dll_scan::query::{OutputFormat, ScanQuery};
use dll_scan::scanner::scan;
use dll_scan::Dumpbin;
use log::{debug, info};
use std::path::PathBuf;

/// Map the DLLs in a folder to the DLLs of the same folder they depend on
#[derive(Parser, Debug)]
#[command(name = "dllscan", version, author)]
struct Args {
    /// Folder to scan (default: current working directory)
    #[arg(short = 'd', long, value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// Extension of the files to scan
    #[arg(short = 'e', long, default_value = "dll")]
    extension: String,

    /// Output file (default: dll_dependencies.json or dll_dependencies.txt in the scanned folder)
    #[arg(short = 'o', long, value_name = "OUTPUT_PATH")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Program listing the dependencies of a binary
    #[arg(long, default_value = "dumpbin")]
    tool: PathBuf,

    /// Flag asking the program for the list of dependencies
    #[arg(long, default_value = "/DEPENDENTS", allow_hyphen_values = true)]
    tool_flag: String,

    /// Fail if a file cannot be inspected, instead of treating it as having no dependencies
    #[arg(long)]
    strict: bool,

    /// Also print the result on the standard output
    #[arg(long)]
    print: bool,

    /// Verbosity level (repeat for more)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // a missing folder is reported by the scan itself
    let mut query = match &args.directory {
        Some(dir) => ScanQuery::for_directory(dir),
        None => ScanQuery::deduce_from_working_directory()?,
    };

    query.target.extension = args.extension.trim_start_matches('.').to_owned();
    query.parameters.strict = args.strict;
    query.set_output_format(args.format);
    if let Some(output) = &args.output {
        query.output.path = output.clone();
    }

    let dumpbin = Dumpbin::new(&args.tool, &args.tool_flag);
    debug!("Query: {:?}", query);
    info!(
        "Scanning {} with {} {}",
        query.pattern(),
        path_to_string(&dumpbin.program),
        dumpbin.mode_flag
    );

    let map = scan(&query, &dumpbin).context(format!(
        "Scan of {} failed",
        path_to_string(&query.target.directory)
    ))?;

    if args.print {
        print!("{}", render(&map, query.output.format)?);
    }

    let display = query.output.path.display();
    write_output(&map, &query.output).context(format!("couldn't write to {}", display))?;
    info!("successfully wrote to {}", display);

    Ok(())
}
