//! Decomposition graph structures and traversal.
//!
//! This module provides the directed graph over characters and their
//! graphical components, and the transitive-closure traversal that powers
//! every query in the library.

pub mod decomposition;
pub mod traversal;
pub mod vertex;

// Re-export commonly used types
pub use decomposition::{DecompositionGraph, Direction};
pub use traversal::{traverse, traverse_with_edges};
pub use vertex::{Vertex, VertexId};
