use crate::bail_invalid;
use serde::{Deserialize, Serialize};

/// Which of the four traversals to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalKind {
    #[default]
    IterativeBfs,
    IterativeDfs,
    RecursiveBfs,
    RecursiveDfs,
}

impl TraversalKind {
    pub const ALL: [TraversalKind; 4] = [
        TraversalKind::IterativeBfs,
        TraversalKind::IterativeDfs,
        TraversalKind::RecursiveBfs,
        TraversalKind::RecursiveDfs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalKind::IterativeBfs => "iterative-bfs",
            TraversalKind::IterativeDfs => "iterative-dfs",
            TraversalKind::RecursiveBfs => "recursive-bfs",
            TraversalKind::RecursiveDfs => "recursive-dfs",
        }
    }

    pub fn is_breadth_first(&self) -> bool {
        matches!(
            self,
            TraversalKind::IterativeBfs | TraversalKind::RecursiveBfs
        )
    }

    pub fn is_recursive(&self) -> bool {
        matches!(
            self,
            TraversalKind::RecursiveBfs | TraversalKind::RecursiveDfs
        )
    }
}

impl std::fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TraversalKind {
    type Err = crate::error::GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iterative-bfs" | "bfs" => Ok(TraversalKind::IterativeBfs),
            "iterative-dfs" | "dfs" => Ok(TraversalKind::IterativeDfs),
            "recursive-bfs" => Ok(TraversalKind::RecursiveBfs),
            "recursive-dfs" => Ok(TraversalKind::RecursiveDfs),
            other => bail_invalid!(
                "traversal kind (expected: iterative-bfs, iterative-dfs, recursive-bfs, recursive-dfs)",
                other
            ),
        }
    }
}

/// Which relation properties the edge set satisfies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationProperties {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
    pub antisymmetric: bool,
    pub equivalence: bool,
}

/// Snapshot of a graph's structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary<T> {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Roots in ascending order
    pub roots: Vec<T>,
    pub properties: RelationProperties,
}
