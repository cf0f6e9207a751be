//! Reading SCIP indexes from disk
//!
//! Binary indexes are decoded with the generated `scip` protobuf types.
//! Content that looks like a JSON object is tried as a JSON index first.

use std::path::{Path, PathBuf};

use protobuf::Message;
use thiserror::Error;
use tracing::{debug, info};

use super::json::parse_json_index;
use crate::symbol::{RawDocument, RawOccurrence};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("SCIP file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read SCIP file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse SCIP file: {0}")]
    Decode(#[from] protobuf::Error),
}

/// Load the documents of the index at `path`.
pub fn load_index(path: &Path) -> Result<Vec<RawDocument>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "Read SCIP index");

    let documents = decode_index(&bytes)?;

    info!(
        "Loaded {} documents from {}",
        documents.len(),
        path.display()
    );

    Ok(documents)
}

/// Decode index bytes, JSON or protobuf.
///
/// Empty input yields an empty document list.
pub fn decode_index(bytes: &[u8]) -> Result<Vec<RawDocument>, LoadError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        if let Some(documents) = parse_json_index(text) {
            debug!("Decoded index as JSON");
            return Ok(documents);
        }
    }

    let index = ::scip::types::Index::parse_from_bytes(bytes)?;
    debug!("Decoded index as protobuf");

    Ok(from_scip(index))
}

fn from_scip(index: ::scip::types::Index) -> Vec<RawDocument> {
    index
        .documents
        .into_iter()
        .map(|doc| RawDocument {
            relative_path: doc.relative_path,
            occurrences: doc
                .occurrences
                .into_iter()
                .map(|occ| RawOccurrence {
                    symbol: occ.symbol,
                    symbol_roles: occ.symbol_roles,
                    range: occ.range,
                    kind: None,
                })
                .collect(),
        })
        .collect()
}
