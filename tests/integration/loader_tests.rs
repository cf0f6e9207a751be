use anyhow::Result;

use scip_finder::scip::{find_index_file, load_index, DiscoveryError, LoadError, DEFAULT_INDEX_FILE};
use scip_finder::symbol::SymbolIndex;

use crate::helpers::fixtures::sample_project;
use crate::helpers::TestHarness;

#[test]
fn test_json_and_protobuf_load_the_same_documents() -> Result<()> {
    let harness = TestHarness::new()?;
    let documents = sample_project();

    let json_path = harness.write_json_index("index.json", &documents)?;
    let proto_path = harness.write_protobuf_index("index.scip", &documents)?;

    let from_json = load_index(&json_path)?;
    let from_proto = load_index(&proto_path)?;

    assert_eq!(from_json, documents);
    assert_eq!(from_proto, documents);
    Ok(())
}

#[test]
fn test_loaded_index_builds() -> Result<()> {
    let harness = TestHarness::new()?;
    let path = harness.write_protobuf_index("index.scip", &sample_project())?;

    let index = SymbolIndex::build(&load_index(&path)?);
    assert_eq!(index.key_count(), 5);
    Ok(())
}

#[test]
fn test_lsp_style_json_fixture() -> Result<()> {
    let harness = TestHarness::new()?;
    let path = harness.write_file(
        "fixture.json",
        r#"
        {
          "documents": [
            {
              "uri": "file:///src/util.ts",
              "occurrences": [
                {
                  "symbol": "scip-typescript npm app 1.0.0 src/`util.ts`/format().",
                  "role": 1,
                  "range": { "start": { "line": 4, "character": 16 }, "end": { "line": 4, "character": 22 } }
                },
                {
                  "symbol": "scip-typescript npm app 1.0.0 src/`util.ts`/format().",
                  "role": 2,
                  "range": { "start": { "line": 9, "character": 2 } }
                }
              ]
            }
          ]
        }
        "#,
    )?;

    let documents = load_index(&path)?;
    assert_eq!(documents[0].relative_path, "src/util.ts");

    let index = SymbolIndex::build(&documents);
    let results = scip_finder::QueryEngine::new(&index)
        .find("format()", &scip_finder::QueryOptions::default());

    assert_eq!(results.len(), 2);
    assert_eq!((results[0].line, results[0].column, results[0].end_column), (4, 16, 22));
    assert_eq!((results[1].line, results[1].end_line, results[1].end_column), (9, 9, 2));
    Ok(())
}

#[test]
fn test_empty_file_has_no_documents() -> Result<()> {
    let harness = TestHarness::new()?;
    let path = harness.write_file("index.scip", "")?;

    assert!(load_index(&path)?.is_empty());
    Ok(())
}

#[test]
fn test_corrupt_file_is_reported() -> Result<()> {
    let harness = TestHarness::new()?;
    let path = harness.write_file("index.scip", [0x0a, 0xff, 0xff, 0xff])?;

    let err = load_index(&path).unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
    assert!(err.to_string().starts_with("Failed to parse SCIP file"));
    Ok(())
}

#[test]
fn test_discovery_walks_up_to_the_index() -> Result<()> {
    let harness = TestHarness::new()?;
    let index_path = harness.write_protobuf_index(DEFAULT_INDEX_FILE, &sample_project())?;
    let nested = harness.create_dir("src/services")?;

    let found = find_index_file(None, &nested, DEFAULT_INDEX_FILE, 10)?;
    assert_eq!(found, index_path.canonicalize()?);
    Ok(())
}

#[test]
fn test_discovery_without_index() -> Result<()> {
    let harness = TestHarness::new()?;
    let nested = harness.create_dir("a/b")?;

    let err = find_index_file(None, &nested, "missing-name.scip", 3).unwrap_err();
    assert!(matches!(err, DiscoveryError::NoIndexFound { .. }));
    assert!(err.to_string().contains("missing-name.scip"));
    Ok(())
}
