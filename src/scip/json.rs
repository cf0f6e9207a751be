//! JSON fixture format for SCIP indexes
//!
//! Test fixtures and hand-written indexes use a JSON rendering of the SCIP
//! `Index` message. Two shapes are accepted for occurrences: the protobuf
//! one (`range: [line, char, endChar]`, `symbolRoles`) and an LSP-style one
//! (`range: {start: {line, character}, end: {...}}`, `role`).

use serde::Deserialize;
use tracing::debug;

use crate::symbol::{RawDocument, RawOccurrence, SymbolKind};

#[derive(Debug, Deserialize)]
struct JsonIndex {
    #[serde(default)]
    documents: Option<Vec<JsonDocument>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument {
    #[serde(default)]
    relative_path: Option<String>,
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    occurrences: Vec<JsonOccurrence>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonOccurrence {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    symbol_roles: Option<i32>,
    #[serde(default)]
    role: Option<i32>,
    #[serde(default)]
    range: Option<JsonRange>,
    #[serde(default)]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonRange {
    Array(Vec<i32>),
    Object {
        #[serde(default)]
        start: Option<JsonPosition>,
        #[serde(default)]
        end: Option<JsonPosition>,
    },
}

#[derive(Debug, Default, Deserialize)]
struct JsonPosition {
    #[serde(default)]
    line: Option<i32>,
    #[serde(default)]
    character: Option<i32>,
}

impl JsonRange {
    fn into_vec(self) -> Vec<i32> {
        match self {
            JsonRange::Array(range) => range,
            JsonRange::Object { start, end } => {
                let start = start.unwrap_or_default();
                let start_line = start.line.unwrap_or(0);
                let start_char = start.character.unwrap_or(0);
                let end = end.unwrap_or_default();
                vec![
                    start_line,
                    start_char,
                    end.line.unwrap_or(start_line),
                    end.character.unwrap_or(start_char),
                ]
            }
        }
    }
}

impl JsonDocument {
    fn path(&self) -> String {
        if let Some(path) = self.relative_path.as_deref().filter(|p| !p.is_empty()) {
            return path.to_string();
        }
        match self.uri.as_deref() {
            Some(uri) => uri.replacen("file:///", "", 1),
            None => String::new(),
        }
    }
}

impl From<JsonOccurrence> for RawOccurrence {
    fn from(occ: JsonOccurrence) -> Self {
        Self {
            symbol: occ.symbol.unwrap_or_default(),
            symbol_roles: occ.role.or(occ.symbol_roles).unwrap_or(0),
            range: occ.range.map(JsonRange::into_vec).unwrap_or_default(),
            kind: occ.kind.as_deref().and_then(SymbolKind::from_name),
        }
    }
}

/// Parse `content` as a JSON index.
///
/// Returns `None` when the content does not look like a JSON object or
/// fails to deserialize, so the caller can try another format.
pub fn parse_json_index(content: &str) -> Option<Vec<RawDocument>> {
    let trimmed = content.trim();
    if !trimmed.starts_with('{') {
        return None;
    }

    let index: JsonIndex = match serde_json::from_str(trimmed) {
        Ok(index) => index,
        Err(e) => {
            debug!(error = %e, "Content is not a JSON SCIP index");
            return None;
        }
    };

    let documents = index
        .documents
        .unwrap_or_default()
        .into_iter()
        .map(|doc| RawDocument {
            relative_path: doc.path(),
            occurrences: doc.occurrences.into_iter().map(RawOccurrence::from).collect(),
        })
        .collect();

    Some(documents)
}
