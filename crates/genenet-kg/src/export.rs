//! Edge list export for Cytoscape and friends.

use crate::error::{KgError, Result};
use crate::graph::GeneGraph;

pub const EDGE_CSV_HEADER: [&str; 2] = ["source", "target"];

/// Deduplicated edge list as CSV, one `source,target` row per edge.
pub fn edges_to_csv(graph: &GeneGraph) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EDGE_CSV_HEADER)?;
    for edge in graph.edges() {
        writer.write_record([edge.source.as_str(), edge.target.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| KgError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| KgError::Buffer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use genenet_ingestion::Edge;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fshr_lhcgr_export() {
        let graph = GeneGraph::build(&[Edge::new("FSHR", "LHCGR", 0.9)]);
        assert_eq!(edges_to_csv(&graph).unwrap(), "source,target\nFSHR,LHCGR\n");
    }

    #[test]
    fn test_export_is_deduplicated() {
        let graph = GeneGraph::build(&[
            Edge::new("B", "A", 0.5),
            Edge::new("A", "B", 0.7),
            Edge::new("A", "C", 0.1),
        ]);
        assert_eq!(edges_to_csv(&graph).unwrap(), "source,target\nA,B\nA,C\n");
    }

    #[test]
    fn test_empty_graph_header_only() {
        assert_eq!(edges_to_csv(&GeneGraph::new()).unwrap(), "source,target\n");
    }

    #[test]
    fn test_symbols_with_commas_are_quoted() {
        let graph = GeneGraph::build(&[Edge::new("A,1", "B", 0.5)]);
        assert_eq!(edges_to_csv(&graph).unwrap(), "source,target\n\"A,1\",B\n");
    }
}
