//! Transitive-closure traversal over the decomposition graph.
//!
//! A single depth-first walk implements both derived operations: run against
//! the component direction it decomposes a character, run against the
//! compound direction it lists every character using a component.
//!
//! The walk is iterative with an explicit frame stack, so recursion depth is
//! never a concern even if corrupt data produces long decomposition chains.
//! A visited guard keyed by vertex identity makes cycles terminate: a vertex
//! once descended into is never descended into again within one call.
//!
//! The guard does **not** deduplicate the emitted result. Every traversed
//! edge emits its target's value, so a value reachable through two different
//! parents appears once per parent edge. The output is a multiset in
//! depth-first order; callers that need a set must deduplicate.

use crate::graph::decomposition::{DecompositionGraph, Direction};
use crate::graph::vertex::VertexId;

/// Walk the graph from `start`, returning every reachable value.
///
/// Children are visited in link-insertion order. An absent start value
/// yields an empty sequence.
///
/// # Examples
///
/// ```
/// use kanjigraph::graph::decomposition::{DecompositionGraph, Direction};
/// use kanjigraph::graph::traversal::traverse;
///
/// let mut graph = DecompositionGraph::new();
/// graph.add_edge("式", "弋");
/// graph.add_edge("式", "工");
///
/// let components = traverse(&graph, Direction::Components, "式");
/// assert_eq!(components, ["弋", "工"]);
/// ```
pub fn traverse(graph: &DecompositionGraph, direction: Direction, start: &str) -> Vec<String> {
    let mut result = Vec::new();
    walk(graph, direction, start, &mut result, None);
    result
}

/// Like [`traverse`], additionally collecting each traversed
/// `(parent, child)` edge, in emission order, for rendering.
pub fn traverse_with_edges(
    graph: &DecompositionGraph,
    direction: Direction,
    start: &str,
) -> (Vec<String>, Vec<(String, String)>) {
    let mut result = Vec::new();
    let mut edges = Vec::new();
    walk(graph, direction, start, &mut result, Some(&mut edges));
    (result, edges)
}

fn walk(
    graph: &DecompositionGraph,
    direction: Direction,
    start: &str,
    result: &mut Vec<String>,
    mut edges: Option<&mut Vec<(String, String)>>,
) {
    let Some(start_id) = graph.resolve(start) else {
        return;
    };

    // One slot per arena entry; a vertex is expanded at most once per call.
    let mut visited = vec![false; graph.vertex_count()];
    // Each frame is a vertex being expanded and the index of its next link.
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    visited[start_id.index()] = true;
    stack.push((start_id, 0));

    while let Some(frame) = stack.last_mut() {
        let (vertex, cursor) = *frame;
        let links = graph.links(vertex, direction);

        if cursor >= links.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        // Emission happens per incoming edge; descent only on first reach.
        let child = links[cursor];
        result.push(graph.value(child).to_string());
        if let Some(edges) = edges.as_deref_mut() {
            edges.push((
                graph.value(vertex).to_string(),
                graph.value(child).to_string(),
            ));
        }
        if !visited[child.index()] {
            visited[child.index()] = true;
            stack.push((child, 0));
        }
    }
}
