//! Root derivation
//!
//! Two policies combine into [`Graph::roots`]:
//! - in-degree roots: vertices nothing points at that touch at least one edge
//! - equivalence representatives: when the edge set is an equivalence
//!   relation, the smallest member of each class reached by an edge source

use super::Graph;
use crate::order::VertexOrder;
use std::collections::HashSet;
use std::hash::Hash;

impl<T, O> Graph<T, O>
where
    T: Clone + Eq + Hash,
    O: VertexOrder<T>,
{
    /// Roots in ascending order. Isolated vertices are never roots.
    pub fn roots(&self) -> Vec<T> {
        self.root_refs().into_iter().cloned().collect()
    }

    /// Vertices with in-degree zero and at least one incident edge, ascending
    pub fn in_degree_roots(&self) -> Vec<T> {
        self.in_degree_root_refs().into_iter().cloned().collect()
    }

    /// Smallest member of every equivalence class containing an edge source,
    /// ascending. Empty unless the graph is an equivalence relation.
    pub fn equivalence_representatives(&self) -> Vec<T> {
        self.representative_refs().into_iter().cloned().collect()
    }

    pub(crate) fn root_refs(&self) -> Vec<&T> {
        let mut roots = self.in_degree_root_refs();
        let mut seen: HashSet<&T> = roots.iter().copied().collect();
        for representative in self.representative_refs() {
            if seen.insert(representative) {
                roots.push(representative);
            }
        }
        self.sort_refs(&mut roots);
        tracing::debug!(roots = roots.len(), "roots derived");
        roots
    }

    fn in_degree_root_refs(&self) -> Vec<&T> {
        let mut destinations: HashSet<&T> = HashSet::new();
        let mut touched: HashSet<&T> = HashSet::new();
        for edge in &self.edges {
            destinations.insert(edge.destination());
            touched.insert(edge.source());
            touched.insert(edge.destination());
        }

        let mut roots: Vec<&T> = self
            .vertices
            .iter()
            .filter(|v| !destinations.contains(v) && touched.contains(v))
            .collect();
        self.sort_refs(&mut roots);
        roots
    }

    fn representative_refs(&self) -> Vec<&T> {
        let sources: HashSet<&T> = self.edges.iter().map(|edge| edge.source()).collect();
        self.partition()
            .into_iter()
            .filter(|class| class.iter().any(|v| sources.contains(v)))
            .filter_map(|class| class.into_iter().next())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::edge::Edge;
    use crate::graph::Graph;
    use crate::order::NumericLabelOrder;

    fn graph(vertices: &[u32], pairs: &[(u32, u32)]) -> Graph<u32> {
        Graph::new(
            vertices.iter().copied(),
            pairs.iter().map(|&(a, b)| Edge::new(a, b)),
        )
    }

    #[test]
    fn test_in_degree_roots() {
        let g = graph(&[1, 2, 3, 4, 5], &[(1, 2), (3, 4), (4, 2)]);
        assert_eq!(g.roots(), vec![1, 3]);
        assert_eq!(g.in_degree_roots(), vec![1, 3]);
        assert!(g.equivalence_representatives().is_empty());
    }

    #[test]
    fn test_isolated_vertex_is_not_root() {
        let g = graph(&[1, 2, 9], &[(1, 2)]);
        assert_eq!(g.roots(), vec![1]);
    }

    #[test]
    fn test_no_edges_means_no_roots() {
        assert!(graph(&[1, 2, 3], &[]).roots().is_empty());
        assert!(graph(&[], &[]).roots().is_empty());
    }

    #[test]
    fn test_cycle_has_no_in_degree_roots() {
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]);
        assert!(g.roots().is_empty());
    }

    #[test]
    fn test_self_loop_vertex_is_not_in_degree_root() {
        let g = graph(&[1, 2], &[(1, 1), (1, 2)]);
        assert!(g.roots().is_empty());
    }

    #[test]
    fn test_equivalence_roots_are_class_minimums() {
        let g = graph(
            &[1, 2, 3, 4, 5],
            &[
                (1, 1),
                (2, 2),
                (3, 3),
                (4, 4),
                (5, 5),
                (2, 4),
                (4, 2),
                (3, 5),
                (5, 3),
            ],
        );
        assert!(g.is_equivalence());
        assert!(g.in_degree_roots().is_empty());
        assert_eq!(g.equivalence_representatives(), vec![1, 2, 3]);
        assert_eq!(g.roots(), vec![1, 2, 3]);
    }

    #[test]
    fn test_roots_follow_supplied_order() {
        let label = |s: &str| s.to_string();
        let g = Graph::with_order(
            ["10", "9", "100", "1"].map(label),
            [Edge::new(label("10"), label("1")), Edge::new(label("9"), label("100"))],
            NumericLabelOrder,
        );
        assert_eq!(g.roots(), vec!["9", "10"]);
    }
}
