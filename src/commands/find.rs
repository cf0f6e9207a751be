use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::output::{self, OutputFormat};
use crate::scip::{load_index, IndexLocator};
use crate::symbol::{detect_query_kind, QueryEngine, QueryOptions, QueryResult, SymbolIndex};
use crate::Config;

/// A single symbol lookup, with CLI flags merged over configuration
#[derive(Debug, Clone)]
pub struct FindRequest {
    pub symbol: String,
    pub scip: Option<PathBuf>,
    pub from: Option<String>,
    pub folder: Option<String>,
    pub format: OutputFormat,
}

impl FindRequest {
    pub fn from_cli(cli: Cli, config: &Config) -> Self {
        Self {
            symbol: cli.symbol,
            scip: cli.scip,
            from: cli.from,
            folder: cli.folder,
            format: cli.format.unwrap_or(config.output.format),
        }
    }

    fn query_options(&self) -> QueryOptions {
        QueryOptions {
            defining_file: self.from.clone(),
            folder: self.folder.clone(),
            kind: detect_query_kind(&self.symbol),
        }
    }
}

/// Results of a lookup plus the warning to show, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOutcome {
    pub results: Vec<QueryResult>,
    pub warning: Option<String>,
}

/// Query `index` for the request.
///
/// In text mode an empty `--from` result falls back to every occurrence
/// under the folder filter and carries a warning. JSON output never falls
/// back.
pub fn find_symbol(index: &SymbolIndex, request: &FindRequest) -> FindOutcome {
    let engine = QueryEngine::new(index);
    let options = request.query_options();

    if request.format != OutputFormat::Text {
        return FindOutcome {
            results: engine.find(&request.symbol, &options),
            warning: None,
        };
    }

    let found = engine.find_with_fallback(&request.symbol, &options);
    let warning = match (&request.from, found.used_fallback) {
        (Some(from), true) => Some(format!(
            "Warning: Symbol '{}' is not defined in '{}'. Showing all occurrences.",
            request.symbol, from
        )),
        _ => None,
    };

    FindOutcome {
        results: found.results,
        warning,
    }
}

/// Locate, load and index the SCIP file for `request`.
pub fn load_symbol_index(request: &FindRequest, config: &Config, cwd: &Path) -> Result<SymbolIndex> {
    let locator = IndexLocator::new(&config.index.file_name, config.index.max_parent_search);
    let path = locator.locate(request.scip.as_deref(), cwd)?;

    let documents = load_index(&path)
        .with_context(|| format!("Failed to load SCIP index from {}", path.display()))?;

    Ok(SymbolIndex::build_with(
        &documents,
        &config.index.declaration_convention(),
    ))
}

/// Run the find command
///
/// Resolves and loads the index, runs the query and prints the rendered
/// result to stdout. Fallback warnings go to stderr.
pub fn run(request: &FindRequest, config: &Config, cwd: &Path) -> Result<()> {
    info!(symbol = %request.symbol, format = %request.format, "Running find");

    let index = load_symbol_index(request, config, cwd)?;
    let outcome = find_symbol(&index, request);

    debug!("{} results for '{}'", outcome.results.len(), request.symbol);

    if let Some(ref warning) = outcome.warning {
        eprintln!("{}\n", warning);
    }

    let rendered = output::render(request.format, &request.symbol, &outcome.results)
        .context("Failed to render results")?;
    println!("{}", rendered);

    Ok(())
}
