//! The component search engine.
//!
//! [`SearchEngine`] owns a frozen [`DecompositionGraph`] and answers every
//! query of the library over it. Two multi-character search strategies are
//! provided and deliberately kept distinct:
//!
//! - [`search_by_intersection`](SearchEngine::search_by_intersection)
//!   returns characters that share *some* transitive component with every
//!   input character, not necessarily the same one. A loose relation.
//! - [`search_by_pairwise_filter`](SearchEngine::search_by_pairwise_filter)
//!   anchors the shared-component check to each input character in turn,
//!   which makes it strictly harder to survive.
//!
//! All operations are pure reads; once built, the graph is never mutated,
//! so the engine can be shared freely across threads.

use ahash::AHashSet;

use crate::error::{KanjiGraphError, Result};
use crate::graph::decomposition::{DecompositionGraph, Direction};
use crate::graph::traversal::{traverse, traverse_with_edges};

/// Query engine over a fully built decomposition graph.
///
/// # Examples
///
/// ```
/// use kanjigraph::ids::loader::IdsLoader;
/// use kanjigraph::search::engine::SearchEngine;
///
/// let loader = IdsLoader::new().unwrap();
/// let graph = loader.load_str("U+5F0F\t式\t⿹弋工\n");
/// let engine = SearchEngine::new(graph);
///
/// assert_eq!(engine.decompose("式"), ["弋", "工"]);
/// assert!(engine.component_exists("式", "工"));
/// ```
#[derive(Debug)]
pub struct SearchEngine {
    graph: DecompositionGraph,
}

impl SearchEngine {
    /// Create a search engine over a fully built graph.
    pub fn new(graph: DecompositionGraph) -> Self {
        SearchEngine { graph }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &DecompositionGraph {
        &self.graph
    }

    /// All components of `character`, direct and indirect.
    ///
    /// The result is a depth-first multiset: a component reachable through
    /// two different parents appears once per parent edge. An unknown
    /// character yields an empty sequence.
    pub fn decompose(&self, character: &str) -> Vec<String> {
        traverse(&self.graph, Direction::Components, character)
    }

    /// Like [`decompose`](Self::decompose), additionally returning the
    /// traversed `(parent, child)` edges for rendering.
    pub fn decompose_with_edges(&self, character: &str) -> (Vec<String>, Vec<(String, String)>) {
        traverse_with_edges(&self.graph, Direction::Components, character)
    }

    /// All characters that incorporate `component`, directly or indirectly.
    pub fn compounds(&self, component: &str) -> Vec<String> {
        traverse(&self.graph, Direction::Compounds, component)
    }

    /// Like [`compounds`](Self::compounds), additionally returning the
    /// traversed `(parent, child)` edges for rendering.
    pub fn compounds_with_edges(&self, component: &str) -> (Vec<String>, Vec<(String, String)>) {
        traverse_with_edges(&self.graph, Direction::Compounds, component)
    }

    /// Whether `component` occurs anywhere in the decomposition of `kanji`.
    ///
    /// An unknown `kanji` has an empty decomposition, so the answer is
    /// `false` for any component.
    pub fn component_exists(&self, kanji: &str, component: &str) -> bool {
        self.decompose(kanji).iter().any(|c| c == component)
    }

    /// The indirect compound set of `character`.
    ///
    /// Decomposes `character` transitively, then collects every character
    /// that transitively incorporates any of the resulting components.
    /// Deduplicated, in first-seen order, which keeps downstream results
    /// deterministic across runs.
    pub fn indirect_compounds(&self, character: &str) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut result = Vec::new();
        for component in self.decompose(character) {
            for compound in self.compounds(&component) {
                if seen.insert(compound.clone()) {
                    result.push(compound);
                }
            }
        }
        result
    }

    /// Characters whose indirect compound set contains every input character's.
    ///
    /// A character is returned when it shares *some* transitive component
    /// with every input character; the shared component need not be the same
    /// one across inputs. Computed as an incremental set intersection,
    /// starting from the first input's indirect compound set.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-argument error when `characters` is empty.
    pub fn search_by_intersection(&self, characters: &[char]) -> Result<AHashSet<String>> {
        let (first, rest) = split_input(characters)?;

        let mut result: AHashSet<String> = self
            .indirect_compounds(&first.to_string())
            .into_iter()
            .collect();
        for &character in rest {
            let next: AHashSet<String> = self
                .indirect_compounds(&character.to_string())
                .into_iter()
                .collect();
            result.retain(|candidate| next.contains(candidate));
        }
        Ok(result)
    }

    /// Incremental pairwise filter over the first input's candidates.
    ///
    /// The candidate list starts as the first character's indirect compound
    /// set. Each subsequent input character keeps only the candidates that
    /// share a decomposed component with it: some component of the candidate
    /// must occur anywhere in that character's own decomposition. Candidate
    /// order survives filtering, so the output is deterministic and
    /// non-increasing in length with every additional input.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-argument error when `characters` is empty.
    pub fn search_by_pairwise_filter(&self, characters: &[char]) -> Result<Vec<String>> {
        let (first, rest) = split_input(characters)?;

        let mut candidates = self.indirect_compounds(&first.to_string());
        for &character in rest {
            // One decomposition of the incoming character covers the
            // component_exists test for every candidate in this step.
            let components: AHashSet<String> =
                self.decompose(&character.to_string()).into_iter().collect();
            candidates.retain(|candidate| {
                self.decompose(candidate)
                    .iter()
                    .any(|component| components.contains(component))
            });
        }
        Ok(candidates)
    }
}

fn split_input(characters: &[char]) -> Result<(char, &[char])> {
    match characters.split_first() {
        Some((&first, rest)) => Ok((first, rest)),
        None => Err(KanjiGraphError::invalid_argument(
            "not enough characters in input",
        )),
    }
}
