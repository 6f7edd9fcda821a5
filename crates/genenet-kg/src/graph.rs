//! Undirected simple graph over gene symbols.

use std::collections::BTreeSet;

use genenet_ingestion::Edge;
use serde::Serialize;

/// An unordered endpoint pair, stored with `source <= target`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GeneEdge {
    pub source: String,
    pub target: String,
}

impl GeneEdge {
    pub fn new(a: &str, b: &str) -> Self {
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        Self { source: source.to_string(), target: target.to_string() }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Node and edge sets built by set union.
///
/// Building from any permutation or duplication of the same edges gives an
/// equal graph: `(A,B)` and `(B,A)` collapse to one edge, scores are not
/// looked at, and self-loops are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneGraph {
    nodes: BTreeSet<String>,
    edges: BTreeSet<GeneEdge>,
}

impl GeneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(edges: &[Edge]) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.source, &edge.target);
        }
        graph
    }

    pub fn add_node(&mut self, name: &str) -> bool {
        self.nodes.insert(name.to_string())
    }

    /// Returns `true` if the pair was not already present.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        self.add_node(a);
        self.add_node(b);
        self.edges.insert(GeneEdge::new(a, b))
    }

    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeSet<GeneEdge> {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edges.contains(&GeneEdge::new(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn e(a: &str, b: &str, score: f64) -> Edge {
        Edge::new(a, b, score)
    }

    #[test]
    fn test_single_edge() {
        let g = GeneGraph::build(&[e("FSHR", "LHCGR", 0.9)]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.contains_edge("LHCGR", "FSHR"));
    }

    #[test]
    fn test_reverse_duplicate_collapses() {
        let g = GeneGraph::build(&[e("A", "B", 0.5), e("B", "A", 0.7)]);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_permutation_and_duplication_invariant() {
        let base = vec![e("A", "B", 0.1), e("B", "C", 0.2), e("C", "D", 0.3), e("D", "A", 0.4)];
        let mut shuffled = vec![e("C", "D", 0.9), e("A", "D", 0.1), e("B", "A", 0.3), e("C", "B", 0.2)];
        shuffled.extend(base.iter().cloned());
        shuffled.reverse();

        assert_eq!(GeneGraph::build(&base), GeneGraph::build(&shuffled));
    }

    #[test]
    fn test_scores_are_not_validated() {
        let g = GeneGraph::build(&[e("A", "B", -3.0), e("C", "D", f64::MAX)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_kept() {
        let g = GeneGraph::build(&[e("A", "A", 1.0)]);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 1);
        assert!(g.edges().iter().next().unwrap().is_self_loop());
    }

    #[test]
    fn test_empty_input() {
        let g = GeneGraph::build(&[]);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_reports_novelty() {
        let mut g = GeneGraph::new();
        assert!(g.add_edge("A", "B"));
        assert!(!g.add_edge("B", "A"));
    }
}
