//! Finite directed graphs and the queries they answer
//!
//! - `relation`: reflexive / symmetric / transitive / antisymmetric checks
//!   and equivalence classes
//! - `roots`: in-degree roots and equivalence-class representatives
//! - `traversal`: iterative and recursive BFS / DFS seeded from the roots
//!
//! A `Graph` is built once and never mutated. Every query recomputes its
//! derived sets from the vertex and edge sets.

pub mod relation;
pub mod roots;
pub mod traversal;
pub mod types;

pub use types::{GraphSummary, RelationProperties, TraversalKind};

use crate::config::GraphConfig;
use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::order::{LabelOrder, NaturalOrder, VertexOrder};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph over vertices of type `T`, ordered by `O`
#[derive(Debug, Clone)]
pub struct Graph<T, O = NaturalOrder> {
    vertices: HashSet<T>,
    edges: HashSet<Edge<T>>,
    order: O,
    default_traversal: TraversalKind,
}

impl<T> Graph<T, NaturalOrder>
where
    T: Clone + Eq + Hash + Ord,
{
    /// Build a graph ordered by `T`'s own `Ord`
    pub fn new(
        vertices: impl IntoIterator<Item = T>,
        edges: impl IntoIterator<Item = Edge<T>>,
    ) -> Self {
        Self::with_order(vertices, edges, NaturalOrder)
    }
}

impl<T> Graph<T, LabelOrder>
where
    T: Clone + Eq + Hash + Ord + std::fmt::Display + Debug,
{
    /// Build a graph using the order, validation and default traversal from
    /// `config`
    pub fn from_config(
        vertices: impl IntoIterator<Item = T>,
        edges: impl IntoIterator<Item = Edge<T>>,
        config: &GraphConfig,
    ) -> Result<Self> {
        let mut graph = Self::with_order(vertices, edges, config.order);
        graph.default_traversal = config.traversal;
        if config.strict_endpoints {
            graph.check_endpoints()?;
        }
        Ok(graph)
    }
}

impl<T, O> Graph<T, O>
where
    T: Clone + Eq + Hash,
    O: VertexOrder<T>,
{
    /// Build a graph with an explicit vertex order.
    ///
    /// Edge endpoints are not required to be vertices; see
    /// [`Graph::check_endpoints`].
    pub fn with_order(
        vertices: impl IntoIterator<Item = T>,
        edges: impl IntoIterator<Item = Edge<T>>,
        order: O,
    ) -> Self {
        let graph = Self {
            vertices: vertices.into_iter().collect(),
            edges: edges.into_iter().collect(),
            order,
            default_traversal: TraversalKind::default(),
        };
        tracing::debug!(
            vertices = graph.vertices.len(),
            edges = graph.edges.len(),
            "graph constructed"
        );
        graph
    }

    /// Replace the traversal run by [`Graph::traverse_default`]
    pub fn with_default_traversal(mut self, kind: TraversalKind) -> Self {
        self.default_traversal = kind;
        self
    }

    pub fn vertices(&self) -> &HashSet<T> {
        &self.vertices
    }

    pub fn edges(&self) -> &HashSet<Edge<T>> {
        &self.edges
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    pub fn default_traversal(&self) -> TraversalKind {
        self.default_traversal
    }

    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }

    /// Vertices in ascending order
    pub fn sorted_vertices(&self) -> Vec<T> {
        let mut vertices: Vec<T> = self.vertices.iter().cloned().collect();
        self.order.sort(&mut vertices);
        vertices
    }

    /// Out-neighbours of `vertex` in ascending order
    pub fn successors(&self, vertex: &T) -> Vec<&T> {
        let mut successors: Vec<&T> = self
            .edges
            .iter()
            .filter(|edge| edge.source() == vertex)
            .map(|edge| edge.destination())
            .collect();
        self.order.sort_refs(&mut successors);
        successors
    }

    /// Vertex/edge counts, roots and relation properties in one value
    pub fn summary(&self) -> GraphSummary<T> {
        GraphSummary {
            vertex_count: self.vertices.len(),
            edge_count: self.edges.len(),
            roots: self.roots(),
            properties: self.relation_properties(),
        }
    }

    fn sort_refs(&self, items: &mut [&T]) {
        self.order.sort_refs(items);
    }
}

impl<T, O> Graph<T, O>
where
    T: Clone + Eq + Hash + Debug,
    O: VertexOrder<T>,
{
    /// Fail with `UnknownVertex` if any edge endpoint is not a vertex
    pub fn check_endpoints(&self) -> Result<()> {
        for edge in &self.edges {
            for endpoint in [edge.source(), edge.destination()] {
                if !self.vertices.contains(endpoint) {
                    tracing::warn!(edge = ?edge, vertex = ?endpoint, "edge endpoint outside vertex set");
                    return Err(GraphError::unknown_vertex(
                        (edge.source(), edge.destination()),
                        endpoint,
                    ));
                }
            }
        }
        Ok(())
    }
}
