//! Relgraph Core Library
//!
//! Finite directed graphs over a totally-ordered vertex type: relation
//! properties, equivalence classes, root derivation and deterministic
//! breadth-first / depth-first traversals.

pub mod collections;
pub mod config;
pub mod edge;
pub mod error;
pub mod graph;
pub mod logging;
pub mod order;

pub use collections::{Queue, Stack};
pub use config::GraphConfig;
pub use edge::Edge;
pub use error::{GraphError, Result};
pub use graph::{Graph, GraphSummary, RelationProperties, TraversalKind};
pub use order::{LabelOrder, NaturalOrder, NumericLabelOrder, OrderFn, VertexOrder};
