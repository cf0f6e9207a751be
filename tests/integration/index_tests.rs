use scip_finder::symbol::roles::{DEFINITION, EXPORT, IMPORT, REFERENCE};
use scip_finder::symbol::{
    parse_descriptor, DeclarationConvention, DeclarationExtension, IndexKey, SymbolIndex,
};

use crate::helpers::fixtures::{document, occurrence, sample_project, ts_symbol};

#[test]
fn test_sample_project_keys() {
    let index = SymbolIndex::build(&sample_project());

    let keys: Vec<String> = index.iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(
        keys,
        vec![
            "app:src/models/Ticket.ts:Ticket",
            "app:src/models/Ticket.ts:title",
            "app:src/services/ProjectService.ts:ProjectService",
            "app:src/services/ProjectService.ts:name",
            "app:src/services/ProjectService.ts:getAllProjects()",
        ]
    );
    assert_eq!(index.key_count(), 5);
    assert_eq!(index.symbol_count(), 14);
    assert_eq!(index.file_count(), 5);
    assert_eq!(index.skipped_count(), 0);
}

#[test]
fn test_declaration_positions_are_deduplicated() {
    let implementation = ts_symbol("src/Ticket.ts", "Ticket#");
    let declaration = ts_symbol("src/Ticket.d.ts", "Ticket#");

    // The declaration document is reported twice, its first record wins
    let index = SymbolIndex::build(&[
        document(
            "src/Ticket.d.ts",
            vec![occurrence(&declaration, DEFINITION, &[0, 13, 19])],
        ),
        document(
            "src/Ticket.ts",
            vec![occurrence(&implementation, DEFINITION | EXPORT, &[0, 13, 19])],
        ),
        document(
            "src/Ticket.d.ts",
            vec![occurrence(&declaration, DEFINITION | IMPORT, &[0, 13, 19])],
        ),
    ]);

    let bucket = index
        .get(&IndexKey::new("app", "src/Ticket.ts", "Ticket"))
        .unwrap();
    assert_eq!(bucket.len(), 2);
    assert_eq!(bucket[0].file_path, "src/Ticket.ts");
    assert_eq!(bucket[0].roles, DEFINITION | EXPORT);
    assert_eq!(bucket[1].file_path, "src/Ticket.d.ts");
    assert_eq!(bucket[1].roles, DEFINITION);
}

#[test]
fn test_malformed_records_are_skipped() {
    let symbol = ts_symbol("src/a.ts", "run().");
    let index = SymbolIndex::build(&[document(
        "src/a.ts",
        vec![
            occurrence(&symbol, DEFINITION, &[1, 0, 3]),
            occurrence("", REFERENCE, &[2, 0, 3]),
            occurrence(&symbol, REFERENCE, &[2, 0]),
            occurrence(&symbol, REFERENCE, &[]),
            occurrence(&symbol, REFERENCE, &[-1, 0, 3]),
        ],
    )]);

    assert_eq!(index.symbol_count(), 1);
    assert_eq!(index.skipped_count(), 4);
}

#[test]
fn test_unrecognized_descriptor_is_indexed_under_empty_key() {
    let index = SymbolIndex::build(&[document(
        "src/a.ts",
        vec![occurrence("local 4", REFERENCE, &[1, 0, 3])],
    )]);

    let bucket = index.get(&IndexKey::new("", "", "")).unwrap();
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].symbol, "local 4");
}

#[test]
fn test_custom_declaration_convention() {
    let convention = DeclarationConvention::new(vec![DeclarationExtension::new(".pyi", ".py")]);
    let implementation = "scip-python python app 1.0.0 pkg/`models.py`/Ticket#";
    let stub = "scip-python python app 1.0.0 pkg/`models.pyi`/Ticket#";

    let index = SymbolIndex::build_with(
        &[
            document("pkg/models.pyi", vec![occurrence(stub, DEFINITION, &[0, 6, 12])]),
            document("pkg/models.py", vec![occurrence(implementation, DEFINITION, &[3, 6, 12])]),
        ],
        &convention,
    );

    assert_eq!(index.key_count(), 1);
    let bucket = index
        .get(&IndexKey::new("app", "pkg/models.py", "Ticket"))
        .unwrap();
    assert_eq!(bucket[0].file_path, "pkg/models.py");
    assert_eq!(bucket[1].file_path, "pkg/models.pyi");
}

#[test]
fn test_display_name_is_part_of_qualifier() {
    for doc in sample_project() {
        for raw in doc.occurrences {
            let parsed = parse_descriptor(&raw.symbol);
            assert!(!parsed.display_name.is_empty());
            assert!(parsed.full_qualifier.contains(&parsed.display_name));
        }
    }
}
