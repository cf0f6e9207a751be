use clap::Parser;
use std::path::PathBuf;

use crate::output::OutputFormat;

const AFTER_HELP: &str = "\
Examples:
  $ scip-finder MyFunction
  $ scip-finder MyThing.myProp
  $ scip-finder MyThing.method()
  $ scip-finder --scip ./index.scip SymbolName
  $ scip-finder --from lib/main.ts SymbolName
  $ scip-finder --folder src/ SymbolName
  $ scip-finder --format json SymbolName

Property/method search is detected from the query:
  - \"Thing.prop\" searches properties only
  - \"Thing.method()\" searches methods only
  - \"Thing\" searches all symbol kinds";

#[derive(Parser, Debug)]
#[command(name = "scip-finder")]
#[command(author, version, about = "Search for symbols in SCIP code intelligence indexes")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Symbol name to search for (case-sensitive exact match)
    pub symbol: String,

    /// Path to SCIP index file (searched for upward if not provided)
    #[arg(long, value_name = "PATH")]
    pub scip: Option<PathBuf>,

    /// Only show symbols defined in this file
    #[arg(long, value_name = "FILE")]
    pub from: Option<String>,

    /// Only show occurrences in files within this folder
    #[arg(long, value_name = "PATH")]
    pub folder: Option<String>,

    /// Output format (defaults to the configured format, text otherwise)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}
