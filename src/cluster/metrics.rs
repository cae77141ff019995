//! Cluster statistics and metrics

use serde::{Deserialize, Serialize};

use crate::cluster::ClusterRange;
use crate::graph::WeightedGraph;

/// Edge statistics for a single cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMetrics {
    pub id: usize,
    pub start: usize,
    pub end: usize,

    /// Edges with both endpoints inside the cluster
    pub internal_edges: usize,

    /// Edges with exactly one endpoint inside the cluster
    pub boundary_edges: usize,

    /// internal edges / potential internal edges
    pub density: f64,
}

/// Calculate metrics for every cluster of a finalized graph
pub fn calculate_cluster_metrics(
    graph: &WeightedGraph,
    clusters: &[ClusterRange],
) -> Vec<ClusterMetrics> {
    clusters
        .iter()
        .map(|cluster| {
            let mut internal_edges = 0;
            let mut boundary_edges = 0;

            for (i, j, _) in graph.edges() {
                match (cluster.contains(i), cluster.contains(j)) {
                    (true, true) => internal_edges += 1,
                    (true, false) | (false, true) => boundary_edges += 1,
                    (false, false) => {}
                }
            }

            ClusterMetrics {
                id: cluster.id,
                start: cluster.start,
                end: cluster.end,
                internal_edges,
                boundary_edges,
                density: calculate_density(cluster.len(), internal_edges),
            }
        })
        .collect()
}

/// Density of an undirected vertex set (actual edges / potential edges)
pub fn calculate_density(size: usize, edges: usize) -> f64 {
    if size <= 1 {
        return 1.0; // By convention, singleton clusters have density 1
    }

    let potential_edges = size * (size - 1) / 2;
    edges as f64 / potential_edges as f64
}
