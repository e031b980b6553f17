//! Integration tests for IDS ingestion: file on disk to decomposition graph.

use std::fs;

use kanjigraph::prelude::*;
use tempfile::TempDir;

/// A small but realistic slice of an IDS file, including lines that must be
/// skipped or cleaned before they reach the graph.
const IDS_DATA: &str = "\
U+5F0F\t式\t⿹弋工
U+8A66\t試\t⿰言式
U+6BBA\t殺\t⿰杀殳[GTKV]
U+349A\t㒚\t⿰亻&CDP-8C4B;
truncated line
U+4E00\t一\t一
";

#[test]
fn test_load_path_builds_graph_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ids.txt");
    fs::write(&path, IDS_DATA)?;

    let loader = IdsLoader::new()?;
    let graph = loader.load_path(&path)?;

    // 式, 弋, 工, 試, 言, 殺, 杀, 殳. The CDP line, the truncated line and
    // the self-referential 一 record contribute nothing.
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), 6);
    assert!(graph.vertex("㒚").is_none());
    assert!(graph.vertex("一").is_none());

    Ok(())
}

#[test]
fn test_variant_suffix_does_not_leak_into_components() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ids.txt");
    fs::write(&path, IDS_DATA)?;

    let loader = IdsLoader::new()?;
    let graph = loader.load_path(&path)?;

    let engine = SearchEngine::new(graph);
    assert_eq!(engine.decompose("殺"), ["杀", "殳"]);

    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let loader = IdsLoader::new().unwrap();
    let result = loader.load_path("/nonexistent/ids.txt");

    match result {
        Err(KanjiGraphError::Io(_)) => {}
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_reloading_the_same_file_gives_an_identical_graph() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ids.txt");
    fs::write(&path, IDS_DATA)?;

    let loader = IdsLoader::new()?;
    let first = loader.load_path(&path)?;
    let second = loader.load_path(&path)?;

    let mut first_export = Vec::new();
    let mut second_export = Vec::new();
    first.serialize(&mut first_export)?;
    second.serialize(&mut second_export)?;
    assert_eq!(first_export, second_export);

    Ok(())
}
