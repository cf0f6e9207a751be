use scip_finder::symbol::roles::{DEFINITION, EXPORT, IMPORT, REFERENCE};
use scip_finder::symbol::{RawDocument, RawOccurrence};

/// Symbol id for `descriptor` declared in `file` of the `app` package
pub fn ts_symbol(file: &str, descriptor: &str) -> String {
    let (dir, name) = match file.rfind('/') {
        Some(pos) => (&file[..=pos], &file[pos + 1..]),
        None => ("", file),
    };
    format!("scip-typescript npm app 1.0.0 {}`{}`/{}", dir, name, descriptor)
}

pub fn occurrence(symbol: &str, roles: u32, range: &[i32]) -> RawOccurrence {
    RawOccurrence {
        symbol: symbol.to_string(),
        symbol_roles: roles as i32,
        range: range.to_vec(),
        kind: None,
    }
}

pub fn document(path: &str, occurrences: Vec<RawOccurrence>) -> RawDocument {
    RawDocument {
        relative_path: path.to_string(),
        occurrences,
    }
}

/// A small TypeScript project:
///
/// - `src/models/Ticket.ts` defines `Ticket` and its `title` property,
///   restated by `src/models/Ticket.d.ts`
/// - `src/services/ProjectService.ts` defines `ProjectService` with a
///   `getAllProjects()` method and a `name` property
/// - `src/app.ts` and `lib/legacy.ts` reference them
pub fn sample_project() -> Vec<RawDocument> {
    let ticket = ts_symbol("src/models/Ticket.ts", "Ticket#");
    let title = ts_symbol("src/models/Ticket.ts", "Ticket#title.");
    let service = ts_symbol("src/services/ProjectService.ts", "ProjectService#");
    let get_all = ts_symbol(
        "src/services/ProjectService.ts",
        "ProjectService#getAllProjects().",
    );
    let name = ts_symbol("src/services/ProjectService.ts", "ProjectService#name.");
    let ticket_decl = ts_symbol("src/models/Ticket.d.ts", "Ticket#");
    let title_decl = ts_symbol("src/models/Ticket.d.ts", "Ticket#title.");

    vec![
        document(
            "src/models/Ticket.ts",
            vec![
                occurrence(&ticket, DEFINITION | EXPORT, &[2, 13, 19]),
                occurrence(&title, DEFINITION, &[3, 2, 7]),
            ],
        ),
        document(
            "src/services/ProjectService.ts",
            vec![
                occurrence(&ticket, IMPORT, &[0, 9, 15]),
                occurrence(&service, DEFINITION | EXPORT, &[4, 13, 27]),
                occurrence(&name, DEFINITION, &[5, 2, 6]),
                occurrence(&get_all, DEFINITION, &[7, 2, 16]),
                occurrence(&ticket, REFERENCE, &[7, 22, 28]),
            ],
        ),
        document(
            "src/app.ts",
            vec![
                occurrence(&service, IMPORT, &[0, 9, 23]),
                occurrence(&get_all, REFERENCE, &[3, 10, 24]),
                occurrence(&name, REFERENCE, &[4, 10, 14]),
            ],
        ),
        document(
            "lib/legacy.ts",
            vec![
                occurrence(&ticket, REFERENCE, &[10, 4, 10]),
                occurrence(&get_all, REFERENCE, &[12, 4, 12, 18]),
            ],
        ),
        document(
            "src/models/Ticket.d.ts",
            vec![
                occurrence(&ticket_decl, DEFINITION, &[0, 21, 27]),
                occurrence(&title_decl, DEFINITION, &[1, 4, 9]),
            ],
        ),
    ]
}
