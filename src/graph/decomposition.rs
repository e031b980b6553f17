//! The decomposition graph.
//!
//! [`DecompositionGraph`] stores every edge exactly once in a single vertex
//! arena. The "decomposes into" adjacency and its transpose, "is used by",
//! are the two directions of the same structure, selected by [`Direction`],
//! so they can never fall out of sync.
//!
//! The graph is built once from the full decomposition dataset and is
//! read-only thereafter; no operation ever removes a vertex or an edge.
//!
//! # Examples
//!
//! ```
//! use kanjigraph::graph::decomposition::DecompositionGraph;
//!
//! let mut graph = DecompositionGraph::new();
//! graph.add_edge("式", "弋");
//! graph.add_edge("式", "工");
//!
//! let vertex = graph.vertex("式").unwrap();
//! assert_eq!(vertex.components().len(), 2);
//! assert_eq!(graph.vertex_count(), 3);
//! ```

use std::io::Write;

use ahash::AHashMap;

use crate::error::Result;
use crate::graph::vertex::{Vertex, VertexId};

/// Which adjacency of the graph a walk follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Container to component: "decomposes into".
    Components,
    /// Component to container: "is used by".
    Compounds,
}

/// A directed graph over characters and their graphical components.
#[derive(Debug, Clone, Default)]
pub struct DecompositionGraph {
    /// Arena owning every vertex; `VertexId` indexes into it.
    vertices: Vec<Vertex>,
    /// Value to vertex lookup; keys are unique.
    index: AHashMap<String, VertexId>,
    /// Number of distinct decomposition edges.
    edge_count: usize,
}

impl DecompositionGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        DecompositionGraph::default()
    }

    /// Ensure a directed edge `container -> component` exists.
    ///
    /// Both endpoints are created on first reference. The operation is
    /// idempotent: repeated calls with the same pair leave the graph
    /// structurally unchanged after the first. The mirrored compound link is
    /// registered in the same step, so the transpose stays exact. Self-loops
    /// are stored as given; whether they are meaningful is decided by the
    /// ingestion layer.
    pub fn add_edge(&mut self, container: &str, component: &str) {
        let container_id = self.intern(container);
        let component_id = self.intern(component);

        if self.vertices[container_id.index()].add_component(component_id) {
            self.edge_count += 1;
        }
        self.vertices[component_id.index()].add_compound(container_id);
    }

    /// Look up the vertex for a value, if present.
    pub fn vertex(&self, value: &str) -> Option<&Vertex> {
        self.resolve(value).map(|id| &self.vertices[id.index()])
    }

    /// Look up a value's identity, if present.
    pub fn resolve(&self, value: &str) -> Option<VertexId> {
        self.index.get(value).copied()
    }

    /// The value a vertex represents.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn value(&self, id: VertexId) -> &str {
        self.vertices[id.index()].value()
    }

    /// The outgoing links of a vertex in the given direction.
    pub fn links(&self, id: VertexId, direction: Direction) -> &[VertexId] {
        let vertex = &self.vertices[id.index()];
        match direction {
            Direction::Components => vertex.components(),
            Direction::Compounds => vertex.compounds(),
        }
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct decomposition edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph holds no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over all vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Write the graph in a line-oriented text form.
    ///
    /// One vertex per line, `id|value|link;link;...`, with links in the
    /// component direction. Lines appear in creation order, so the output is
    /// stable for a given insertion sequence.
    pub fn serialize<W: Write>(&self, output: &mut W) -> Result<()> {
        for vertex in &self.vertices {
            write!(output, "{}|{}|", vertex.id().index(), vertex.value())?;
            for link in vertex.components() {
                write!(output, "{};", link.index())?;
            }
            writeln!(output)?;
        }
        Ok(())
    }

    /// Return the vertex for a value, creating it on first reference.
    fn intern(&mut self, value: &str) -> VertexId {
        if let Some(&id) = self.index.get(value) {
            return id;
        }
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex::new(id, value));
        self.index.insert(value.to_string(), id);
        id
    }
}
