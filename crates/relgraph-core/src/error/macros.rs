//! Error macros for relgraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for reporting a read from an empty collection
#[macro_export]
macro_rules! bail_empty {
    ($collection:expr) => {
        return Err($crate::error::GraphError::empty_collection($collection))
    };
}
