//! Symbol kinds derived from SCIP descriptor suffixes

use serde::{Deserialize, Serialize};

/// Semantic category of a symbol, decided by the trailing descriptor marker.
///
/// | Suffix            | Kind            |
/// |-------------------|-----------------|
/// | `/`               | `Namespace`     |
/// | `#`               | `Type`          |
/// | `.`               | `Term`          |
/// | `().`             | `Method`        |
/// | contains `#(`/`.(`| `Parameter`     |
/// | contains `[..]`   | `TypeParameter` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Namespace,
    Type,
    Term,
    Method,
    Parameter,
    TypeParameter,
}

impl SymbolKind {
    /// Classify a descriptor chain by its suffix.
    ///
    /// Single-character suffixes are checked first, with `().` ahead of `.`
    /// so methods are never taken for terms. The containment checks for
    /// parameters and type parameters only apply when no suffix matched.
    pub fn from_descriptor(descriptor: &str) -> Self {
        if descriptor.ends_with("().") {
            return Self::Method;
        }

        match descriptor.chars().last() {
            Some('#') => return Self::Type,
            Some('.') => return Self::Term,
            Some('/') => return Self::Namespace,
            _ => {}
        }

        if descriptor.contains("#(") || descriptor.contains(".(") {
            return Self::Parameter;
        }

        if descriptor.contains('[') && descriptor.contains(']') {
            return Self::TypeParameter;
        }

        Self::Namespace
    }

    /// Parse a kind name as produced by [`as_str`](Self::as_str), ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "namespace" => Some(Self::Namespace),
            "type" => Some(Self::Type),
            "term" => Some(Self::Term),
            "method" => Some(Self::Method),
            "parameter" => Some(Self::Parameter),
            "typeparameter" => Some(Self::TypeParameter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Type => "type",
            Self::Term => "term",
            Self::Method => "method",
            Self::Parameter => "parameter",
            Self::TypeParameter => "typeparameter",
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
