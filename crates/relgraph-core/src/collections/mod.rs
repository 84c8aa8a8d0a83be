//! Sequential containers used as traversal frontiers
//!
//! - `Queue`: FIFO, backed by `VecDeque`
//! - `Stack`: LIFO, backed by `Vec`
//!
//! Reading from an empty container returns `GraphError::EmptyCollection`.

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;
