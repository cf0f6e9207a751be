//! SCIP symbol descriptor parsing
//!
//! A symbol identifier looks like
//! `scip-typescript npm @mdt/shared 1.0.0 models/`Ticket.ts`/Ticket#`:
//! a five-field preamble followed by a `/`-separated path whose last
//! segment (usually backtick-quoted) is the file, then the descriptor chain.
//!
//! Parsing never fails. Anything that cannot be recognized comes back as an
//! empty string so that odd index entries are still indexed instead of
//! aborting the build.

use super::kind::SymbolKind;

/// Decoded parts of a SCIP symbol identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDescriptor {
    /// Package name from the preamble (`@mdt/shared`)
    pub package_name: String,
    /// File path with the backtick escaping removed (`models/Ticket.ts`)
    pub file_path: String,
    /// Leaf name with one suffix marker stripped (`Ticket`, `getAllProjects()`)
    pub display_name: String,
    /// Descriptor chain after the file path, suffix included
    /// (`ProjectService#getAllProjects().`)
    pub full_qualifier: String,
    pub kind: SymbolKind,
}

impl ParsedDescriptor {
    pub fn parse(symbol: &str) -> Self {
        let full_qualifier = full_qualifier(symbol);

        Self {
            package_name: package_name(symbol).to_string(),
            file_path: file_path(symbol),
            display_name: display_name(full_qualifier).to_string(),
            full_qualifier: full_qualifier.to_string(),
            kind: SymbolKind::from_descriptor(full_qualifier),
        }
    }
}

/// Parse a raw symbol identifier into its parts
pub fn parse_descriptor(symbol: &str) -> ParsedDescriptor {
    ParsedDescriptor::parse(symbol)
}

/// Package name: third field of `<tool> <manager> <package> <version> <descriptor>`.
pub fn package_name(symbol: &str) -> &str {
    let fields: Vec<&str> = symbol.splitn(5, ' ').collect();
    if fields.len() < 5 || fields[..4].iter().any(|f| f.is_empty()) {
        return "";
    }
    fields[2]
}

/// File path: the run of non-whitespace up to a `/` followed by a
/// backtick-quoted segment, joined with the unescaped segment content.
///
/// The quoted segment may carry a run of backslashes inside each backtick
/// (`\`Ticket.ts\``), which is dropped. When several quoted segments
/// qualify, the earliest whitespace-delimited run wins and, inside it, the
/// rightmost segment.
pub fn file_path(symbol: &str) -> String {
    let mut best: Option<(usize, usize, &str)> = None;

    for (slash, _) in symbol.match_indices('/') {
        let run_start = non_whitespace_run_start(symbol, slash);
        if run_start == slash {
            continue;
        }

        let Some(content) = quoted_segment(&symbol[slash + 1..]) else {
            continue;
        };

        match best {
            Some((start, _, _)) if start != run_start => break,
            _ => best = Some((run_start, slash, content)),
        }
    }

    match best {
        Some((start, slash, content)) => format!("{}{}", &symbol[start..=slash], content),
        None => String::new(),
    }
}

/// Descriptor chain following the file path.
///
/// This is everything after the last `/` outside backticks in the final
/// whitespace-separated field. A trailing `/` or no `/` at all yields "".
pub fn full_qualifier(symbol: &str) -> &str {
    let mut in_backticks = false;
    let mut last_slash = None;

    for (i, c) in symbol.char_indices() {
        match c {
            '`' => in_backticks = !in_backticks,
            '/' if !in_backticks => last_slash = Some(i),
            c if c.is_whitespace() && !in_backticks => last_slash = None,
            _ => {}
        }
    }

    match last_slash {
        Some(i) => &symbol[i + 1..],
        None => "",
    }
}

/// Leaf name of a descriptor chain with one suffix marker removed.
///
/// `Outer#Inner.` gives `Inner`, `Ticket#` gives `Ticket` and
/// `ProjectService#getAllProjects().` gives `getAllProjects()`.
pub fn display_name(qualifier: &str) -> &str {
    let leaf = match qualifier.rfind(|c: char| c == '#' || c == '/') {
        Some(i) if i + 1 < qualifier.len() => &qualifier[i + 1..],
        _ => qualifier,
    };

    leaf.strip_suffix(|c: char| c == '#' || c == '.' || c == '/')
        .unwrap_or(leaf)
}

fn non_whitespace_run_start(symbol: &str, end: usize) -> usize {
    symbol[..end]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

/// Content of a segment shaped like `` \\*`name`\\* `` at the start of `rest`.
fn quoted_segment(rest: &str) -> Option<&str> {
    let rest = rest.trim_start_matches('\\').strip_prefix('`')?;
    let end = rest.find(|c: char| c == '`' || c == '\\')?;
    if end == 0 {
        return None;
    }

    let (content, tail) = rest.split_at(end);
    tail.trim_start_matches('\\')
        .starts_with('`')
        .then_some(content)
}
