//! Error types for graph generation and export

use thiserror::Error;

/// Failures raised by the graph model, the generators and the exporters
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop { vertex: usize },

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("a graph needs at least one vertex")]
    EmptyGraph,

    #[error("maximum edge weight must be at least 1")]
    InvalidMaxWeight,

    #[error("cluster count {clusters} must be between 1 and {vertex_count}")]
    InvalidClusterCount { clusters: usize, vertex_count: usize },

    #[error("strongly connected component {index} has size 0")]
    EmptyComponent { index: usize },

    #[error("component sizes sum to {total}, more than the {vertex_count} available vertices")]
    ComponentsExceedVertexCount { total: usize, vertex_count: usize },

    #[error("unsupported output format '{0}', expected 'plaintext' or 'csharp'")]
    UnsupportedFormat(String),
}

/// Result alias for library operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;
