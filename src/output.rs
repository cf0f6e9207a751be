//! Rendering query results for the terminal.

use serde::{Deserialize, Serialize};

use crate::symbol::roles;
use crate::symbol::QueryResult;

/// Output format for query results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// grep-style `file:line:column: Role` lines
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    symbol: &'a str,
    occurrences: Vec<JsonOccurrence<'a>>,
    count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOccurrence<'a> {
    file: &'a str,
    line: u32,
    column: u32,
    end_line: u32,
    end_column: u32,
    role: String,
    is_definition: bool,
    is_reference: bool,
    is_import: bool,
    is_export: bool,
}

impl<'a> From<&'a QueryResult> for JsonOccurrence<'a> {
    fn from(result: &'a QueryResult) -> Self {
        Self {
            file: &result.file_path,
            line: result.line,
            column: result.column,
            end_line: result.end_line,
            end_column: result.end_column,
            role: roles::role_names(result.roles).join(", "),
            is_definition: roles::is_definition(result.roles),
            is_reference: roles::is_reference(result.roles),
            is_import: roles::is_import(result.roles),
            is_export: roles::is_export(result.roles),
        }
    }
}

/// One `file:line:column: Role, Role` line per result, or a not-found
/// message when there are none.
pub fn format_text(symbol: &str, results: &[QueryResult]) -> String {
    if results.is_empty() {
        return format!("symbol not found: {}", symbol);
    }

    results
        .iter()
        .map(|r| {
            format!(
                "{}:{}:{}: {}",
                r.file_path,
                r.line,
                r.column,
                roles::role_names(r.roles).join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON with the queried symbol, its occurrences and their count.
pub fn format_json(symbol: &str, results: &[QueryResult]) -> serde_json::Result<String> {
    let occurrences: Vec<JsonOccurrence> = results.iter().map(JsonOccurrence::from).collect();
    let report = JsonReport {
        symbol,
        count: occurrences.len(),
        occurrences,
    };
    serde_json::to_string_pretty(&report)
}

/// Render `results` in the requested format.
pub fn render(format: OutputFormat, symbol: &str, results: &[QueryResult]) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(symbol, results)),
        OutputFormat::Json => format_json(symbol, results),
    }
}
