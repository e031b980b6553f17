//! Loading IDS data into a decomposition graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::graph::decomposition::DecompositionGraph;
use crate::ids::parser::IdsParser;

/// Builds a [`DecompositionGraph`] from raw IDS data.
///
/// Every usable record contributes one `container -> component` edge per
/// surviving component; malformed and unsupported lines are skipped
/// silently, so the graph only ever sees complete pairs.
///
/// # Examples
///
/// ```
/// use kanjigraph::ids::loader::IdsLoader;
///
/// let loader = IdsLoader::new().unwrap();
/// let graph = loader.load_str("U+5F0F\t式\t⿹弋工\n");
/// assert_eq!(graph.vertex_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct IdsLoader {
    parser: IdsParser,
}

impl IdsLoader {
    /// Create a new loader.
    pub fn new() -> Result<Self> {
        Ok(IdsLoader {
            parser: IdsParser::new()?,
        })
    }

    /// Load IDS records from a file on disk.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<DecompositionGraph> {
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    /// Load IDS records from any buffered reader.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<DecompositionGraph> {
        let mut graph = DecompositionGraph::new();
        for line in reader.lines() {
            self.add_line(&mut graph, &line?);
        }
        Ok(graph)
    }

    /// Load IDS records from an in-memory string.
    pub fn load_str(&self, data: &str) -> DecompositionGraph {
        let mut graph = DecompositionGraph::new();
        for line in data.lines() {
            self.add_line(&mut graph, line);
        }
        graph
    }

    fn add_line(&self, graph: &mut DecompositionGraph, line: &str) {
        let Some(record) = self.parser.parse_line(line) else {
            return;
        };
        let mut buffer = [0u8; 4];
        for &component in &record.components {
            graph.add_edge(&record.character, component.encode_utf8(&mut buffer));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_str_builds_both_directions() {
        let loader = IdsLoader::new().unwrap();
        let graph = loader.load_str("U+5F0F\t式\t⿹弋工\nU+6B66\t武\t⿻弋⿱一止\n");

        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 5);

        let shared = graph.vertex("弋").unwrap();
        let users: Vec<&str> = shared
            .compounds()
            .iter()
            .map(|&id| graph.value(id))
            .collect();
        assert_eq!(users, ["式", "武"]);
    }

    #[test]
    fn test_unusable_lines_leave_graph_empty() {
        let loader = IdsLoader::new().unwrap();
        let graph = loader.load_str("not a record\nU+349A\t㒚\t⿰亻&CDP-8C4B;\n");
        assert!(graph.is_empty());
    }
}
