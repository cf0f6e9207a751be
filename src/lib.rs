pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod scip;
pub mod symbol;

pub use config::Config;
pub use output::OutputFormat;
pub use symbol::{QueryEngine, QueryOptions, QueryResult, SymbolIndex, SymbolKind};
