use crate::edge::Edge;
use crate::graph::{Graph, TraversalKind};
use crate::order::{NaturalOrder, NumericLabelOrder};

fn graph(vertices: &[u32], pairs: &[(u32, u32)]) -> Graph<u32> {
    Graph::new(
        vertices.iter().copied(),
        pairs.iter().map(|&(a, b)| Edge::new(a, b)),
    )
}

fn bfs(g: &Graph<u32>) -> Vec<u32> {
    g.iterative_breadth_first_search().unwrap()
}

fn dfs(g: &Graph<u32>) -> Vec<u32> {
    g.iterative_depth_first_search().unwrap()
}

/// Graphs covering forests, diamonds, equivalence relations and cycles
fn fixtures() -> Vec<Graph<u32>> {
    vec![
        graph(&[1, 2, 3, 4], &[(1, 2), (1, 3), (3, 4)]),
        graph(&[1, 2, 3, 4, 5, 6], &[(1, 2), (1, 3), (2, 4), (3, 5), (4, 6)]),
        graph(&[1, 2, 3, 4, 5], &[(5, 1), (2, 3), (3, 1)]),
        graph(&[1, 2, 3, 4, 5], &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]),
        graph(
            &[1, 2, 3, 4],
            &[(1, 1), (2, 2), (3, 3), (4, 4), (1, 3), (3, 1), (2, 4), (4, 2)],
        ),
        graph(&[1, 2], &[(1, 2), (2, 1)]),
        graph(&[], &[]),
        graph(
            &[1, 2, 3, 4, 5, 6, 7, 8],
            &[(8, 3), (8, 1), (3, 7), (1, 7), (7, 2), (2, 5), (5, 7), (6, 4)],
        ),
    ]
}

/// Test the reference four-vertex graph in every traversal
#[test]
fn test_reference_graph_order() {
    let g = graph(&[1, 2, 3, 4], &[(1, 2), (1, 3), (3, 4)]);
    for kind in TraversalKind::ALL {
        assert_eq!(g.traverse(kind).unwrap(), vec![1, 2, 3, 4], "{}", kind);
    }
}

/// Test that BFS goes level by level while DFS follows paths
#[test]
fn test_bfs_and_dfs_diverge_on_deeper_tree() {
    let g = graph(&[1, 2, 3, 4, 5, 6], &[(1, 2), (1, 3), (2, 4), (3, 5), (4, 6)]);
    assert_eq!(bfs(&g), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(dfs(&g), vec![1, 2, 4, 6, 3, 5]);
}

/// Test that roots are seeded in ascending order and isolated vertices skipped
#[test]
fn test_multiple_roots_ascending() {
    let g = graph(&[1, 2, 3, 4, 5], &[(5, 1), (2, 3), (3, 1)]);
    assert_eq!(g.roots(), vec![2, 5]);
    assert_eq!(bfs(&g), vec![2, 3, 1, 5]);
    assert_eq!(dfs(&g), vec![2, 3, 1, 5]);
    assert!(!bfs(&g).contains(&4));
}

/// Test that neighbours are expanded in ascending order, not edge order
#[test]
fn test_neighbours_ascending() {
    let g = graph(&[1, 4, 7, 9], &[(1, 9), (1, 4), (1, 7)]);
    assert_eq!(bfs(&g), vec![1, 4, 7, 9]);
    assert_eq!(dfs(&g), vec![1, 4, 7, 9]);
}

/// Test that a vertex queued twice in BFS is appended once
#[test]
fn test_diamond_visits_once() {
    let g = graph(&[1, 2, 3, 4, 5], &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]);
    assert_eq!(bfs(&g), vec![1, 2, 3, 4, 5]);
    assert_eq!(dfs(&g), vec![1, 2, 4, 5, 3]);
}

/// Test traversal seeded from equivalence class representatives
#[test]
fn test_equivalence_graph_traversal() {
    let g = graph(
        &[1, 2, 3, 4],
        &[(1, 1), (2, 2), (3, 3), (4, 4), (1, 3), (3, 1), (2, 4), (4, 2)],
    );
    assert_eq!(g.roots(), vec![1, 2]);
    assert_eq!(bfs(&g), vec![1, 3, 2, 4]);
    assert_eq!(dfs(&g), vec![1, 3, 2, 4]);
}

/// Test that a rootless graph produces an empty traversal
#[test]
fn test_cycle_without_roots_is_empty() {
    let g = graph(&[1, 2], &[(1, 2), (2, 1)]);
    for kind in TraversalKind::ALL {
        assert!(g.traverse(kind).unwrap().is_empty());
    }
}

/// Test that cycles reachable from a root terminate
#[test]
fn test_reachable_cycle_terminates() {
    let g = graph(
        &[1, 2, 3, 4, 5, 6, 7, 8],
        &[(8, 3), (8, 1), (3, 7), (1, 7), (7, 2), (2, 5), (5, 7), (6, 4)],
    );
    assert_eq!(g.roots(), vec![6, 8]);
    assert_eq!(bfs(&g), vec![6, 4, 8, 1, 3, 7, 2, 5]);
    assert_eq!(dfs(&g), vec![6, 4, 8, 1, 7, 2, 5, 3]);
}

/// Test that edge endpoints outside the vertex set are still reached
#[test]
fn test_dangling_endpoint_is_visited() {
    let g = graph(&[1, 2], &[(1, 2), (2, 7)]);
    assert_eq!(bfs(&g), vec![1, 2, 7]);
    assert_eq!(dfs(&g), vec![1, 2, 7]);
}

/// Test that iterative and recursive variants agree element for element
#[test]
fn test_iterative_matches_recursive() {
    for g in fixtures() {
        assert_eq!(
            g.iterative_breadth_first_search().unwrap(),
            g.recursive_breadth_first_search().unwrap()
        );
        assert_eq!(
            g.iterative_depth_first_search().unwrap(),
            g.recursive_depth_first_search().unwrap()
        );
    }
}

/// Test that every traversal visits each reachable vertex exactly once
#[test]
fn test_no_duplicates_in_any_traversal() {
    for g in fixtures() {
        for kind in TraversalKind::ALL {
            let order = g.traverse(kind).unwrap();
            let mut deduped = order.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), order.len(), "{}", kind);
        }
    }
}

/// Test that the supplied order drives tie-breaks for string labels
#[test]
fn test_numeric_labels_vs_natural_order() {
    let label = |s: &str| s.to_string();
    let vertices = ["1", "2", "3", "10"].map(label);
    let edges = [("1", "10"), ("1", "2"), ("1", "3")].map(|(a, b)| Edge::new(label(a), label(b)));

    let numeric = Graph::with_order(vertices.clone(), edges.clone(), NumericLabelOrder);
    assert_eq!(
        numeric.iterative_breadth_first_search().unwrap(),
        vec!["1", "2", "3", "10"]
    );

    let natural = Graph::with_order(vertices, edges, NaturalOrder);
    assert_eq!(
        natural.iterative_breadth_first_search().unwrap(),
        vec!["1", "10", "2", "3"]
    );
}

/// Test that a long chain survives the recursive variants
#[test]
fn test_long_chain_recursive() {
    let n: u32 = 300;
    let vertices: Vec<u32> = (0..n).collect();
    let pairs: Vec<(u32, u32)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    let g = graph(&vertices, &pairs);

    let expected: Vec<u32> = (0..n).collect();
    assert_eq!(g.recursive_breadth_first_search().unwrap(), expected);
    assert_eq!(g.recursive_depth_first_search().unwrap(), expected);
}

/// Test that a wide star does not grow the recursion with its fan-out
#[test]
fn test_wide_star_recursive() {
    let g = Graph::new(0..5000u32, (1..5000).map(|i| Edge::new(0, i)));

    let expected: Vec<u32> = (0..5000).collect();
    for kind in TraversalKind::ALL {
        assert_eq!(g.traverse(kind).unwrap(), expected, "{kind}");
    }
}

/// Test dispatch through the configured default traversal
#[test]
fn test_traverse_default() {
    let g = graph(&[1, 2, 3, 4, 5, 6], &[(1, 2), (1, 3), (2, 4), (3, 5), (4, 6)]);
    assert_eq!(g.default_traversal(), TraversalKind::IterativeBfs);
    assert_eq!(g.traverse_default().unwrap(), vec![1, 2, 3, 4, 5, 6]);

    let g = g.with_default_traversal(TraversalKind::RecursiveDfs);
    assert_eq!(g.traverse_default().unwrap(), vec![1, 2, 4, 6, 3, 5]);
}
