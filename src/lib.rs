//! Core library functions for the synthetic graph generator

pub mod cluster;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod scc;
pub mod storage;

pub use anyhow::{anyhow, Result};
pub use cluster::generator::{generate_clustered_graph, ClusteredGenerator, ClusteredGraph};
pub use error::{GraphError, GraphResult};
pub use graph::{DirectedGraph, GraphBuilder, WeightedGraph};
pub use scc::{generate_scc_graph, SccGenerator};
