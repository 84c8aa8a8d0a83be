//! Relation properties of the edge set and equivalence classes

use super::{Graph, RelationProperties};
use crate::edge::Edge;
use crate::order::VertexOrder;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

impl<T, O> Graph<T, O>
where
    T: Clone + Eq + Hash,
    O: VertexOrder<T>,
{
    /// Every vertex has a self-loop. Vacuously true with no vertices.
    pub fn is_reflexive(&self) -> bool {
        self.vertices
            .iter()
            .all(|v| Edge::new(v.clone(), v.clone()).is_in(&self.edges))
    }

    /// Every edge has its reverse. Vacuously true with no edges.
    pub fn is_symmetric(&self) -> bool {
        self.edges
            .iter()
            .all(|edge| edge.reversed().is_in(&self.edges))
    }

    /// For every chain `(a, b)`, `(b, c)` the edge `(a, c)` is present
    pub fn is_transitive(&self) -> bool {
        let mut successors: HashMap<&T, Vec<&T>> = HashMap::new();
        for edge in &self.edges {
            successors
                .entry(edge.source())
                .or_default()
                .push(edge.destination());
        }

        self.edges.iter().all(|first| {
            successors
                .get(first.destination())
                .into_iter()
                .flatten()
                .all(|&c| Edge::new(first.source().clone(), c.clone()).is_in(&self.edges))
        })
    }

    /// No edge between distinct vertices has its reverse. Self-loops are
    /// allowed.
    pub fn is_antisymmetric(&self) -> bool {
        self.edges
            .iter()
            .all(|edge| edge.is_self_loop() || !edge.reversed().is_in(&self.edges))
    }

    /// Reflexive, symmetric and transitive
    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }

    pub fn relation_properties(&self) -> RelationProperties {
        let reflexive = self.is_reflexive();
        let symmetric = self.is_symmetric();
        let transitive = self.is_transitive();
        RelationProperties {
            reflexive,
            symmetric,
            transitive,
            antisymmetric: self.is_antisymmetric(),
            equivalence: reflexive && symmetric && transitive,
        }
    }

    /// The equivalence class containing `vertex`.
    ///
    /// Empty when `vertex` is not in the graph or the graph is not an
    /// equivalence relation.
    pub fn equivalence_class(&self, vertex: &T) -> HashSet<T> {
        let Some(start) = self.vertices.get(vertex) else {
            return HashSet::new();
        };
        if !self.is_equivalence() {
            return HashSet::new();
        }
        self.closure(start).into_iter().cloned().collect()
    }

    /// Every equivalence class, each sorted ascending, ordered by their
    /// smallest member. Empty when the graph is not an equivalence relation.
    pub fn equivalence_classes(&self) -> Vec<Vec<T>> {
        self.partition()
            .into_iter()
            .map(|class| class.into_iter().cloned().collect())
            .collect()
    }

    /// Classes as borrowed vertices; see [`Graph::equivalence_classes`]
    pub(crate) fn partition(&self) -> Vec<Vec<&T>> {
        if !self.is_equivalence() {
            return Vec::new();
        }

        let mut vertices: Vec<&T> = self.vertices.iter().collect();
        self.sort_refs(&mut vertices);

        let mut assigned: HashSet<&T> = HashSet::new();
        let mut classes = Vec::new();
        for vertex in vertices {
            if assigned.contains(vertex) {
                continue;
            }
            let mut class: Vec<&T> = self.closure(vertex).into_iter().collect();
            self.sort_refs(&mut class);
            assigned.extend(class.iter().copied());
            classes.push(class);
        }

        tracing::debug!(classes = classes.len(), "equivalence partition computed");
        classes
    }

    /// Grow `{start}` by any vertex sharing an edge with a member until a
    /// full pass over the edges adds nothing
    fn closure<'g>(&'g self, start: &'g T) -> HashSet<&'g T> {
        let mut class: HashSet<&T> = HashSet::from([start]);
        loop {
            let mut newly_added: HashSet<&T> = HashSet::new();
            for edge in &self.edges {
                let (source, destination) = (edge.source(), edge.destination());
                if class.contains(source) && !class.contains(destination) {
                    newly_added.insert(destination);
                }
                if class.contains(destination) && !class.contains(source) {
                    newly_added.insert(source);
                }
            }
            if newly_added.is_empty() {
                return class;
            }
            class.extend(newly_added);
        }
    }
}
