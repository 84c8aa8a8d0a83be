//! Error types for relgraph
//!
//! Only one failure can escape a graph query: reading from an empty queue or
//! stack. Everything else here belongs to construction and configuration.

mod macros;

use thiserror::Error;

/// Errors that can occur during relgraph operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// A queue or stack was read while empty. This is a caller contract
    /// violation, not a recoverable condition.
    #[error("{collection} is empty")]
    EmptyCollection { collection: &'static str },

    #[error("edge {edge} references unknown vertex {vertex}")]
    UnknownVertex { edge: String, vertex: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for reading from an empty collection
    pub fn empty_collection(collection: &'static str) -> Self {
        GraphError::EmptyCollection { collection }
    }

    /// Create an error for an edge whose endpoint is not a graph vertex
    pub fn unknown_vertex(edge: impl std::fmt::Debug, vertex: impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertex {
            edge: format!("{:?}", edge),
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// True for programmer-contract violations as opposed to bad input
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, GraphError::EmptyCollection { .. })
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::EmptyCollection { .. } => "empty_collection",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }
}

/// Result type alias for relgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
