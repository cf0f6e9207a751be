//! SCIP index input: locating the index file and decoding it into raw
//! documents for [`SymbolIndex`](crate::symbol::SymbolIndex).

pub mod discovery;
pub mod json;
pub mod loader;

pub use discovery::{find_index_file, DiscoveryError, IndexLocator, DEFAULT_INDEX_FILE, MAX_PARENT_SEARCH};
pub use loader::{decode_index, load_index, LoadError};
