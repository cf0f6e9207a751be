//! Symbol indexing and search module
//!
//! This module decodes SCIP symbol identifiers, builds an in-memory index of
//! symbol occurrences keyed by (package, file, name), and resolves plain and
//! qualified name queries against it.

pub mod descriptor;
pub mod index;
pub mod kind;
pub mod roles;
pub mod search;

pub use descriptor::{parse_descriptor, ParsedDescriptor};
pub use index::{
    merge_symbol_variants, DeclarationConvention, DeclarationExtension, IndexKey, Occurrence,
    RawDocument, RawOccurrence, SymbolIndex,
};
pub use kind::SymbolKind;
pub use search::{
    detect_query_kind, strip_method_parameters, to_descriptor_pattern, FallbackResult,
    QueryEngine, QueryOptions, QueryResult,
};
