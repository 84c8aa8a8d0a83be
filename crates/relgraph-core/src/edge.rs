use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// A directed edge from `source` to `destination`.
///
/// Equality is structural: two edges are equal when both endpoints compare
/// equal by value. Self-loops are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    source: T,
    destination: T,
}

impl<T> Edge<T> {
    pub fn new(source: T, destination: T) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn destination(&self) -> &T {
        &self.destination
    }

    pub fn into_parts(self) -> (T, T) {
        (self.source, self.destination)
    }
}

impl<T: PartialEq> Edge<T> {
    /// True if `vertex` is either endpoint of this edge
    pub fn contains(&self, vertex: &T) -> bool {
        self.source == *vertex || self.destination == *vertex
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl<T: Clone> Edge<T> {
    /// The same edge pointing the other way
    pub fn reversed(&self) -> Self {
        Edge::new(self.destination.clone(), self.source.clone())
    }
}

impl<T: Eq + Hash> Edge<T> {
    /// True if a structurally equal edge is present in `edges`
    pub fn is_in(&self, edges: &HashSet<Edge<T>>) -> bool {
        edges.contains(self)
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from((source, destination): (T, T)) -> Self {
        Edge::new(source, destination)
    }
}
