//! Symbol query engine
//!
//! Queries are exact and case-sensitive. A query without `.` or `#` is
//! matched against leaf names (`getAllProjects()`, `Ticket`); anything else
//! is converted to SCIP descriptor form and matched against the descriptor
//! chain of each occurrence (`ProjectService.getAllProjects()` becomes
//! `ProjectService#getAllProjects().`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::descriptor::full_qualifier;
use super::index::{Occurrence, SymbolIndex};
use super::kind::SymbolKind;
use super::roles;

/// Filters applied to a query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Only keep symbols defined in this file
    pub defining_file: Option<String>,
    /// Only keep occurrences inside this folder
    pub folder: Option<String>,
    /// Only keep occurrences of this kind
    pub kind: Option<SymbolKind>,
}

impl QueryOptions {
    pub fn defining_file(mut self, file: impl Into<String>) -> Self {
        self.defining_file = Some(file.into());
        self
    }

    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn kind(mut self, kind: SymbolKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// One matching occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub symbol: String,
    pub file_path: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub roles: u32,
    pub kind: Option<SymbolKind>,
    pub is_definition: bool,
}

impl From<&Occurrence> for QueryResult {
    fn from(occ: &Occurrence) -> Self {
        Self {
            symbol: occ.symbol.clone(),
            file_path: occ.file_path.clone(),
            line: occ.line,
            column: occ.column,
            end_line: occ.end_line,
            end_column: occ.end_column,
            roles: occ.roles,
            kind: occ.kind,
            is_definition: roles::is_definition(occ.roles),
        }
    }
}

/// Results of [`QueryEngine::find_with_fallback`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackResult {
    pub results: Vec<QueryResult>,
    /// True when the defining-file filter matched nothing and the results
    /// come from the broader query without it
    pub used_fallback: bool,
}

/// Resolves queries against a built [`SymbolIndex`]
pub struct QueryEngine<'a> {
    index: &'a SymbolIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a SymbolIndex) -> Self {
        Self { index }
    }

    /// Find all occurrences of `query` that pass the filters in `options`.
    ///
    /// Every key of the index is scanned. An empty query returns no results.
    pub fn find(&self, query: &str, options: &QueryOptions) -> Vec<QueryResult> {
        if query.is_empty() {
            return Vec::new();
        }

        let qualified = is_qualified(query);
        let pattern = if qualified {
            to_descriptor_pattern(query)
        } else {
            query.to_string()
        };
        let folder = options.folder.as_deref().and_then(normalize_folder);

        debug!(
            query,
            pattern = %pattern,
            qualified,
            defining_file = ?options.defining_file,
            folder = ?folder,
            kind = ?options.kind,
            "Searching symbol index"
        );

        let mut results = Vec::new();

        for (key, occurrences) in self.index.iter() {
            let is_match = if qualified {
                matches_qualified(&pattern, occurrences)
            } else {
                key.display_name == query
            };

            if !is_match {
                continue;
            }

            if let Some(ref file) = options.defining_file {
                if !is_defined_in(occurrences, file) {
                    continue;
                }
            }

            results.extend(
                occurrences
                    .iter()
                    .filter(|occ| folder.as_deref().map_or(true, |f| occ.file_path.starts_with(f)))
                    .filter(|occ| options.kind.map_or(true, |k| occ.kind == Some(k)))
                    .map(QueryResult::from),
            );
        }

        debug!("Found {} occurrences for '{}'", results.len(), query);

        results
    }

    /// Like [`find`](Self::find), but when a defining-file filter leaves
    /// nothing, re-run with only the folder filter and flag the result.
    pub fn find_with_fallback(&self, query: &str, options: &QueryOptions) -> FallbackResult {
        let results = self.find(query, options);
        if options.defining_file.is_none() || !results.is_empty() {
            return FallbackResult {
                results,
                used_fallback: false,
            };
        }

        let broader = QueryOptions {
            folder: options.folder.clone(),
            ..QueryOptions::default()
        };
        let results = self.find(query, &broader);
        let used_fallback = !results.is_empty();

        FallbackResult {
            results,
            used_fallback,
        }
    }
}

/// A query naming a scope as well as a member
pub fn is_qualified(query: &str) -> bool {
    query.contains('.') || query.contains('#')
}

/// Convert user dot-notation into a SCIP descriptor pattern.
///
/// - `ProjectService.getAllProjects()` -> `ProjectService#getAllProjects().`
/// - `ProjectService.name` -> `ProjectService#name.`
/// - `ProjectService#getAllProjects()` -> `ProjectService#getAllProjects().`
/// - `Ticket#` -> `Ticket#`
///
/// A dotted query with a single segment is returned unchanged.
pub fn to_descriptor_pattern(query: &str) -> String {
    if query.contains('#') {
        if let Some(base) = query.strip_suffix("()") {
            return format!("{}().", base);
        }
        if query.ends_with(|c: char| matches!(c, '.' | '#' | '/')) {
            return query.to_string();
        }
        return format!("{}.", query);
    }

    let parts: Vec<&str> = query.split('.').collect();
    let Some((last, scope)) = parts.split_last() else {
        return query.to_string();
    };
    if scope.is_empty() {
        return query.to_string();
    }

    let (member, is_method) = match last.strip_suffix("()") {
        Some(base) => (base, true),
        None => (*last, false),
    };
    let suffix = if is_method { "()." } else { "." };

    format!("{}#{}{}", scope.join("#"), member, suffix)
}

/// Kind implied by the shape of a query.
///
/// `name()` and `Scope.method()` ask for methods, `Scope.prop` for terms;
/// a bare name matches every kind.
pub fn detect_query_kind(query: &str) -> Option<SymbolKind> {
    if query.is_empty() {
        None
    } else if query.contains('(') {
        Some(SymbolKind::Method)
    } else if query.contains('.') {
        Some(SymbolKind::Term)
    } else {
        None
    }
}

/// Drop the first balanced `(...)` group and everything after it.
///
/// `ProjectService.getAllProjects()` gives `ProjectService.getAllProjects`.
/// Unbalanced parentheses leave the query unchanged.
pub fn strip_method_parameters(query: &str) -> &str {
    let Some(open) = query.find('(') else {
        return query;
    };

    let mut depth = 0usize;
    for c in query[open..].chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return &query[..open];
                }
            }
            _ => {}
        }
    }

    query
}

fn matches_qualified(pattern: &str, occurrences: &[Occurrence]) -> bool {
    let nested = format!("/{}", pattern);
    occurrences.iter().any(|occ| {
        let descriptor = full_qualifier(&occ.symbol);
        descriptor == pattern || descriptor.ends_with(&nested)
    })
}

fn is_defined_in(occurrences: &[Occurrence], file: &str) -> bool {
    occurrences
        .iter()
        .any(|occ| roles::is_definition(occ.roles) && occ.file_path == file)
}

/// Folder prefix with a trailing `/`; an empty folder means no filter.
fn normalize_folder(folder: &str) -> Option<String> {
    if folder.is_empty() {
        None
    } else if folder.ends_with('/') {
        Some(folder.to_string())
    } else {
        Some(format!("{}/", folder))
    }
}
