//! In-memory symbol index built from SCIP documents

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, trace};

use super::descriptor::ParsedDescriptor;
use super::kind::SymbolKind;

/// One document as handed over by the loader
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    /// Path relative to the project root
    pub relative_path: String,
    pub occurrences: Vec<RawOccurrence>,
}

/// One occurrence record as stored in the index file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOccurrence {
    pub symbol: String,
    pub symbol_roles: i32,
    /// `[startLine, startCol, endCol]` or `[startLine, startCol, endLine, endCol]`
    pub range: Vec<i32>,
    /// Kind supplied by the loader, overriding the descriptor suffix
    pub kind: Option<SymbolKind>,
}

/// Canonical occurrence of a symbol in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Raw SCIP symbol identifier
    pub symbol: String,
    /// Path of the document the occurrence was found in
    pub file_path: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    /// Role bitmask (see [`super::roles`])
    pub roles: u32,
    /// `None` when the occurrence was recorded without a kind
    #[serde(default)]
    pub kind: Option<SymbolKind>,
}

impl Occurrence {
    /// Normalize a raw record found in `document_path`.
    ///
    /// Returns `None` for records without a symbol, with fewer than three
    /// range elements, with negative coordinates, or ending before they start.
    pub fn from_raw(document_path: &str, raw: &RawOccurrence, kind: SymbolKind) -> Option<Self> {
        if raw.symbol.is_empty() {
            return None;
        }

        let coords: Vec<u32> = raw
            .range
            .iter()
            .take(4)
            .map(|&v| u32::try_from(v).ok())
            .collect::<Option<_>>()?;

        let (line, column, end_line, end_column) = match coords.as_slice() {
            [line, column, end_column] => (*line, *column, *line, *end_column),
            [line, column, end_line, end_column] => (*line, *column, *end_line, *end_column),
            _ => return None,
        };
        if (end_line, end_column) < (line, column) {
            return None;
        }

        Some(Self {
            symbol: raw.symbol.clone(),
            file_path: document_path.to_string(),
            line,
            column,
            end_line,
            end_column,
            roles: raw.symbol_roles as u32,
            kind: Some(raw.kind.unwrap_or(kind)),
        })
    }
}

/// Lookup key: package, file identity and leaf name.
///
/// Kind is deliberately not part of the key so a plain name finds every
/// kind of symbol. Matching on it is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexKey {
    pub package_name: String,
    /// File path with declaration extensions mapped to implementation ones
    pub file_path: String,
    pub display_name: String,
}

impl IndexKey {
    pub fn new(
        package_name: impl Into<String>,
        file_path: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            file_path: file_path.into(),
            display_name: display_name.into(),
        }
    }
}

impl std::fmt::Display for IndexKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.package_name, self.file_path, self.display_name)
    }
}

/// Maps a declaration-file suffix onto its implementation counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationExtension {
    /// e.g. `.d.ts`
    pub declaration: String,
    /// e.g. `.ts`
    pub implementation: String,
}

impl DeclarationExtension {
    pub fn new(declaration: &str, implementation: &str) -> Self {
        Self {
            declaration: declaration.to_string(),
            implementation: implementation.to_string(),
        }
    }
}

/// Default declaration extensions (`.d.ts`, `.d.mts`, `.d.cts`)
pub fn default_declaration_extensions() -> Vec<DeclarationExtension> {
    vec![
        DeclarationExtension::new(".d.ts", ".ts"),
        DeclarationExtension::new(".d.mts", ".mts"),
        DeclarationExtension::new(".d.cts", ".cts"),
    ]
}

/// Identifies declaration files by path suffix and folds them onto the
/// implementation file identity.
#[derive(Debug, Clone)]
pub struct DeclarationConvention {
    extensions: Vec<DeclarationExtension>,
}

impl DeclarationConvention {
    pub fn new(extensions: Vec<DeclarationExtension>) -> Self {
        Self { extensions }
    }

    fn matching(&self, path: &str) -> Option<&DeclarationExtension> {
        self.extensions
            .iter()
            .find(|ext| !ext.declaration.is_empty() && path.ends_with(&ext.declaration))
    }

    pub fn is_declaration_file(&self, path: &str) -> bool {
        self.matching(path).is_some()
    }

    /// `models/Ticket.d.ts` becomes `models/Ticket.ts`; other paths are unchanged.
    pub fn normalize_path(&self, path: &str) -> String {
        match self.matching(path) {
            Some(ext) => format!(
                "{}{}",
                &path[..path.len() - ext.declaration.len()],
                ext.implementation
            ),
            None => path.to_string(),
        }
    }
}

impl Default for DeclarationConvention {
    fn default() -> Self {
        Self::new(default_declaration_extensions())
    }
}

/// Occurrences of one key, split by the kind of document they came from
#[derive(Default)]
struct Variants {
    implementation: Vec<Occurrence>,
    declaration: Vec<Occurrence>,
}

/// In-memory index for symbol lookups.
///
/// Keys keep first-seen order so results are deterministic.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    entries: IndexMap<IndexKey, Vec<Occurrence>>,
    file_count: usize,
    skipped_count: usize,
}

impl SymbolIndex {
    /// Create a new empty symbol index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index with the default declaration conventions
    pub fn build(documents: &[RawDocument]) -> Self {
        Self::build_with(documents, &DeclarationConvention::default())
    }

    /// Build the index from loaded documents.
    ///
    /// Never fails: malformed records are dropped and counted.
    pub fn build_with(documents: &[RawDocument], convention: &DeclarationConvention) -> Self {
        let mut variants: IndexMap<IndexKey, Variants> = IndexMap::new();
        let mut files = HashSet::new();
        let mut skipped_count = 0;

        for document in documents {
            let path = document.relative_path.as_str();
            let is_declaration = convention.is_declaration_file(path);

            for raw in &document.occurrences {
                let parsed = ParsedDescriptor::parse(&raw.symbol);

                let Some(occurrence) = Occurrence::from_raw(path, raw, parsed.kind) else {
                    trace!(file = path, symbol = %raw.symbol, range = ?raw.range, "Skipping malformed occurrence");
                    skipped_count += 1;
                    continue;
                };

                let key = IndexKey {
                    file_path: convention.normalize_path(&parsed.file_path),
                    package_name: parsed.package_name,
                    display_name: parsed.display_name,
                };

                let bucket = variants.entry(key).or_default();
                if is_declaration {
                    bucket.declaration.push(occurrence);
                } else {
                    bucket.implementation.push(occurrence);
                }
                files.insert(path);
            }
        }

        let entries: IndexMap<IndexKey, Vec<Occurrence>> = variants
            .into_iter()
            .map(|(key, v)| (key, merge_symbol_variants(v.implementation, v.declaration)))
            .collect();

        let index = Self {
            entries,
            file_count: files.len(),
            skipped_count,
        };

        info!(
            "Built symbol index with {} occurrences under {} keys across {} files ({} skipped)",
            index.symbol_count(),
            index.key_count(),
            index.file_count,
            index.skipped_count
        );

        index
    }

    /// Occurrences stored under `key`
    pub fn get(&self, key: &IndexKey) -> Option<&[Occurrence]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Iterate over every key and its occurrences in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&IndexKey, &[Occurrence])> {
        self.entries.iter().map(|(key, occs)| (key, occs.as_slice()))
    }

    /// Number of distinct keys
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of occurrences after merging
    pub fn symbol_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Number of documents that contributed at least one occurrence
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// Number of records dropped as malformed during the build
    pub fn skipped_count(&self) -> usize {
        self.skipped_count
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(IndexKey, Vec<Occurrence>)> for SymbolIndex {
    fn from_iter<I: IntoIterator<Item = (IndexKey, Vec<Occurrence>)>>(iter: I) -> Self {
        let entries: IndexMap<IndexKey, Vec<Occurrence>> = iter.into_iter().collect();
        let file_count = entries
            .values()
            .flatten()
            .map(|occ| occ.file_path.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            entries,
            file_count,
            skipped_count: 0,
        }
    }
}

/// Merge implementation and declaration occurrences of one key.
///
/// Implementation occurrences come first, then declaration ones; an
/// occurrence whose (file, line, column) was already seen is dropped.
pub fn merge_symbol_variants(
    implementation: Vec<Occurrence>,
    declaration: Vec<Occurrence>,
) -> Vec<Occurrence> {
    let mut seen: HashSet<(String, u32, u32)> = HashSet::new();
    let mut merged = Vec::with_capacity(implementation.len() + declaration.len());

    for occurrence in implementation.into_iter().chain(declaration) {
        if seen.insert((occurrence.file_path.clone(), occurrence.line, occurrence.column)) {
            merged.push(occurrence);
        }
    }

    merged
}
