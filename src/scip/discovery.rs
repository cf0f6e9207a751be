//! Locating the SCIP index to load.
//!
//! An explicit path always wins. Otherwise the locator walks up from the
//! starting directory looking for the index file by name, stopping after a
//! bounded number of directories.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// File name looked for when no explicit path is given.
pub const DEFAULT_INDEX_FILE: &str = "index.scip";

/// Number of directories checked, starting directory included.
pub const MAX_PARENT_SEARCH: usize = 10;

/// Errors that can occur while locating an index.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The explicitly requested index does not exist.
    #[error("SCIP file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No index was found walking up from the starting directory.
    #[error(
        "No SCIP file found. Please specify a SCIP file using --scip option, \
         or run from a directory containing {file_name}"
    )]
    NoIndexFound {
        start_dir: PathBuf,
        file_name: String,
    },
}

/// Finds index files by name in a directory and its ancestors.
#[derive(Debug, Clone)]
pub struct IndexLocator {
    file_name: String,
    max_parent_search: usize,
}

impl Default for IndexLocator {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_INDEX_FILE.to_string(),
            max_parent_search: MAX_PARENT_SEARCH,
        }
    }
}

impl IndexLocator {
    pub fn new(file_name: impl Into<String>, max_parent_search: usize) -> Self {
        Self {
            file_name: file_name.into(),
            max_parent_search,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Resolve the index path.
    ///
    /// `explicit` is returned as-is when it exists. Without it, `start_dir`
    /// and its ancestors are searched for the configured file name.
    pub fn locate(&self, explicit: Option<&Path>, start_dir: &Path) -> Result<PathBuf, DiscoveryError> {
        if let Some(path) = explicit {
            if path.exists() {
                debug!(path = %path.display(), "Using explicit SCIP index");
                return Ok(path.to_path_buf());
            }
            return Err(DiscoveryError::NotFound(path.to_path_buf()));
        }

        self.search_upward(start_dir)
    }

    fn search_upward(&self, start_dir: &Path) -> Result<PathBuf, DiscoveryError> {
        let start = start_dir
            .canonicalize()
            .unwrap_or_else(|_| start_dir.to_path_buf());

        debug!(start_dir = %start.display(), file_name = %self.file_name, "Searching for SCIP index");

        let mut current = Some(start.as_path());
        let mut depth = 0;

        while let Some(dir) = current {
            if depth >= self.max_parent_search {
                debug!(
                    max_parent_search = self.max_parent_search,
                    "Reached search limit without finding SCIP index"
                );
                break;
            }

            let candidate = dir.join(&self.file_name);
            trace!(depth, candidate = %candidate.display(), "Checking for SCIP index");

            if candidate.is_file() {
                debug!(path = %candidate.display(), "Found SCIP index");
                return Ok(candidate);
            }

            current = dir.parent();
            depth += 1;
        }

        Err(DiscoveryError::NoIndexFound {
            start_dir: start_dir.to_path_buf(),
            file_name: self.file_name.clone(),
        })
    }
}

/// Locate an index with the given file name and search limit.
pub fn find_index_file(
    explicit: Option<&Path>,
    start_dir: &Path,
    file_name: &str,
    max_parent_search: usize,
) -> Result<PathBuf, DiscoveryError> {
    IndexLocator::new(file_name, max_parent_search).locate(explicit, start_dir)
}
