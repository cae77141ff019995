//! Vertex clusters and the clustered sparse-graph generator

pub mod connectivity;
pub mod generator;
pub mod metrics;

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// A contiguous block of vertices `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRange {
    /// Position of this cluster in the partition
    pub id: usize,

    /// First vertex of the cluster
    pub start: usize,

    /// One past the last vertex of the cluster
    pub end: usize,
}

impl ClusterRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices().contains(&vertex)
    }

    pub fn vertices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `[0, vertex_count)` into `clusters` contiguous ranges.
///
/// Every range has `vertex_count / clusters` vertices except the last, which
/// also absorbs the remainder.
pub fn partition(vertex_count: usize, clusters: usize) -> GraphResult<Vec<ClusterRange>> {
    if vertex_count == 0 {
        return Err(GraphError::EmptyGraph);
    }
    if clusters == 0 || clusters > vertex_count {
        return Err(GraphError::InvalidClusterCount {
            clusters,
            vertex_count,
        });
    }

    let cluster_size = vertex_count / clusters;

    Ok((0..clusters)
        .map(|id| {
            let start = id * cluster_size;
            let end = if id == clusters - 1 {
                vertex_count
            } else {
                start + cluster_size
            };
            ClusterRange { id, start, end }
        })
        .collect())
}
