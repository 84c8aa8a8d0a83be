//! Ordered traversals seeded from the graph's roots
//!
//! All four traversals share one policy:
//! - roots are taken in ascending order, the next only once the current
//!   root's component is exhausted
//! - neighbours are explored in ascending order
//! - a vertex is appended to the result exactly once; a frontier entry for an
//!   already visited vertex is dropped without effect
//!
//! The recursive variants produce the same order as the iterative ones.

mod bfs;
mod dfs;

#[cfg(test)]
mod tests;

use super::{Graph, TraversalKind};
use crate::edge::Edge;
use crate::error::Result;
use crate::order::VertexOrder;
use crate::trace_time;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::time::Instant;

/// Sorted out-neighbour lists, built once per traversal
pub(crate) struct Adjacency<'g, T> {
    successors: HashMap<&'g T, Vec<&'g T>>,
}

impl<'g, T: Eq + Hash> Adjacency<'g, T> {
    fn build<O: VertexOrder<T>>(edges: &'g HashSet<Edge<T>>, order: &O) -> Self {
        let mut successors: HashMap<&'g T, Vec<&'g T>> = HashMap::new();
        for edge in edges {
            successors
                .entry(edge.source())
                .or_default()
                .push(edge.destination());
        }
        for list in successors.values_mut() {
            order.sort_refs(list);
        }
        Self { successors }
    }

    fn successors(&self, vertex: &T) -> &[&'g T] {
        self.successors
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Unvisited out-neighbours of `vertex`, ascending
    fn unvisited<'s>(
        &'s self,
        vertex: &T,
        state: &'s TraversalState<'g, T>,
    ) -> impl Iterator<Item = &'g T> + 's {
        self.successors(vertex)
            .iter()
            .copied()
            .filter(move |n| !state.is_visited(n))
    }

    /// Smallest unvisited out-neighbour of `vertex`
    fn first_unvisited(&self, vertex: &T, state: &TraversalState<'g, T>) -> Option<&'g T> {
        self.unvisited(vertex, state).next()
    }
}

/// Accumulators threaded through a traversal
pub(crate) struct TraversalState<'g, T> {
    visited: HashSet<&'g T>,
    visit_order: Vec<&'g T>,
    remaining: VecDeque<&'g T>,
}

impl<'g, T: Eq + Hash> TraversalState<'g, T> {
    /// `roots` must already be in ascending order
    fn new(roots: Vec<&'g T>) -> Self {
        Self {
            visited: HashSet::new(),
            visit_order: Vec::new(),
            remaining: roots.into(),
        }
    }

    fn is_visited(&self, vertex: &T) -> bool {
        self.visited.contains(vertex)
    }

    /// Mark `vertex` visited and append it. Returns false if it already was.
    fn visit(&mut self, vertex: &'g T) -> bool {
        if !self.visited.insert(vertex) {
            return false;
        }
        self.visit_order.push(vertex);
        tracing::trace!(visited = self.visit_order.len(), "vertex visited");
        true
    }

    /// Smallest root not yet reached by an earlier component
    fn next_root(&mut self) -> Option<&'g T> {
        while let Some(root) = self.remaining.pop_front() {
            if !self.is_visited(root) {
                return Some(root);
            }
        }
        None
    }

    fn into_order(self) -> Vec<&'g T> {
        self.visit_order
    }
}

impl<T, O> Graph<T, O>
where
    T: Clone + Eq + Hash,
    O: VertexOrder<T>,
{
    /// Queue-based breadth-first search over every root's component
    #[tracing::instrument(level = "debug", skip(self), fields(vertices = self.vertices.len(), edges = self.edges.len()))]
    pub fn iterative_breadth_first_search(&self) -> Result<Vec<T>> {
        self.run(TraversalKind::IterativeBfs)
    }

    /// Stack-based depth-first search that extends from the top of the
    /// stack or backtracks, appending each vertex when first reached
    #[tracing::instrument(level = "debug", skip(self), fields(vertices = self.vertices.len(), edges = self.edges.len()))]
    pub fn iterative_depth_first_search(&self) -> Result<Vec<T>> {
        self.run(TraversalKind::IterativeDfs)
    }

    /// Same order as [`Graph::iterative_breadth_first_search`], one
    /// recursive call per BFS level.
    ///
    /// Recursion depth grows with the number of levels below a root, not with
    /// component size.
    #[tracing::instrument(level = "debug", skip(self), fields(vertices = self.vertices.len(), edges = self.edges.len()))]
    pub fn recursive_breadth_first_search(&self) -> Result<Vec<T>> {
        self.run(TraversalKind::RecursiveBfs)
    }

    /// Same order as [`Graph::iterative_depth_first_search`], one recursive
    /// call per descent. Recursion depth is the length of the longest DFS path.
    #[tracing::instrument(level = "debug", skip(self), fields(vertices = self.vertices.len(), edges = self.edges.len()))]
    pub fn recursive_depth_first_search(&self) -> Result<Vec<T>> {
        self.run(TraversalKind::RecursiveDfs)
    }

    /// Run the traversal named by `kind`
    pub fn traverse(&self, kind: TraversalKind) -> Result<Vec<T>> {
        match kind {
            TraversalKind::IterativeBfs => self.iterative_breadth_first_search(),
            TraversalKind::IterativeDfs => self.iterative_depth_first_search(),
            TraversalKind::RecursiveBfs => self.recursive_breadth_first_search(),
            TraversalKind::RecursiveDfs => self.recursive_depth_first_search(),
        }
    }

    /// Run the configured default traversal
    pub fn traverse_default(&self) -> Result<Vec<T>> {
        self.traverse(self.default_traversal)
    }

    fn run(&self, kind: TraversalKind) -> Result<Vec<T>> {
        let start = Instant::now();
        let adjacency = Adjacency::build(&self.edges, &self.order);
        let mut state = TraversalState::new(self.root_refs());

        match kind {
            TraversalKind::IterativeBfs => bfs::iterative(&adjacency, &mut state)?,
            TraversalKind::IterativeDfs => dfs::iterative(&adjacency, &mut state)?,
            TraversalKind::RecursiveBfs => bfs::recursive(&adjacency, &mut state)?,
            TraversalKind::RecursiveDfs => dfs::recursive(&adjacency, &mut state)?,
        }

        let order: Vec<T> = state.into_order().into_iter().cloned().collect();
        tracing::debug!(kind = %kind, visited = order.len(), "traversal complete");
        trace_time!(start, "traversal", kind = kind.as_str());
        Ok(order)
    }
}
