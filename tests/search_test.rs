//! Integration tests for the multi-character search strategies.

use kanjigraph::prelude::*;

/// Synthetic dataset shaped like the interesting corners of real IDS data:
/// shared components at several depths, one isolated cluster, and a record
/// with a variant-selector suffix.
const IDS_DATA: &str = "\
U+5F0F\t式\t⿹弋工
U+8A66\t試\t⿰言式
U+8AA0\t誠\t⿰言成
U+6210\t成\t⿵戊丁
U+5DE7\t巧\t⿰工丂
U+6BBA\t殺\t⿰杀殳[GTKV]
U+5F12\t弒\t⿰杀式
";

fn engine() -> SearchEngine {
    let loader = IdsLoader::new().unwrap();
    SearchEngine::new(loader.load_str(IDS_DATA))
}

#[test]
fn test_empty_input_fails_for_both_strategies() {
    let engine = engine();
    assert!(engine.search_by_intersection(&[]).is_err());
    assert!(engine.search_by_pairwise_filter(&[]).is_err());
}

#[test]
fn test_unknown_characters_yield_empty_results() -> Result<()> {
    let engine = engine();
    assert!(engine.search_by_intersection(&['無'])?.is_empty());
    assert!(engine.search_by_pairwise_filter(&['無'])?.is_empty());
    Ok(())
}

#[test]
fn test_intersection_finds_character_bridging_both_inputs() -> Result<()> {
    let engine = engine();

    // 弒 contains 杀 (shared with 殺) and, through 式, both 弋 and 工
    // (shared with 式): it must survive the intersection of both inputs'
    // indirect compound sets.
    let result = engine.search_by_intersection(&['殺', '式'])?;
    assert!(result.contains("弒"));
    // 巧 shares 工 with 式 but nothing with 殺.
    assert!(!result.contains("巧"));

    Ok(())
}

#[test]
fn test_intersection_with_no_bridge_is_empty() -> Result<()> {
    let engine = engine();

    // Nothing shares components with both 殺 and 誠.
    let result = engine.search_by_intersection(&['殺', '誠'])?;
    assert!(result.is_empty());

    Ok(())
}

#[test]
fn test_pairwise_filter_is_anchored_to_each_input() -> Result<()> {
    let engine = engine();

    // Candidates from 殺 are the characters using 杀 or 殳; of those only
    // 弒 also shares a component with 式.
    let result = engine.search_by_pairwise_filter(&['殺', '式'])?;
    assert_eq!(result, ["弒"]);

    Ok(())
}

#[test]
fn test_pairwise_filter_is_stricter_than_intersection() -> Result<()> {
    let engine = engine();

    // Every pairwise survivor also survives the intersection; the converse
    // does not hold in general.
    let loose = engine.search_by_intersection(&['殺', '式'])?;
    let strict = engine.search_by_pairwise_filter(&['殺', '式'])?;
    for hit in &strict {
        assert!(loose.contains(hit), "{hit} missing from intersection");
    }

    Ok(())
}

#[test]
fn test_pairwise_filter_shrinks_monotonically() -> Result<()> {
    let engine = engine();

    let mut previous = engine.search_by_pairwise_filter(&['式'])?.len();
    for inputs in [&['式', '試'][..], &['式', '試', '誠'][..]] {
        let current = engine.search_by_pairwise_filter(inputs)?.len();
        assert!(current <= previous);
        previous = current;
    }

    Ok(())
}

#[test]
fn test_repeated_queries_are_byte_identical() -> Result<()> {
    let engine = engine();

    let first = engine.search_by_pairwise_filter(&['殺', '式'])?;
    let second = engine.search_by_pairwise_filter(&['殺', '式'])?;
    assert_eq!(first, second);

    let first: Vec<String> = {
        let mut hits: Vec<String> = engine.search_by_intersection(&['殺', '式'])?.into_iter().collect();
        hits.sort();
        hits
    };
    let second: Vec<String> = {
        let mut hits: Vec<String> = engine.search_by_intersection(&['殺', '式'])?.into_iter().collect();
        hits.sort();
        hits
    };
    assert_eq!(first, second);

    Ok(())
}
