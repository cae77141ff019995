//! Clustered sparse weighted graph generation

use rand::Rng;

use crate::cluster::connectivity::{ensure_connected, RepairReport};
use crate::cluster::{partition, ClusterRange};
use crate::config::GeneratorConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::{GraphBuilder, WeightedGraph};

/// Chance of an edge between two vertices of the same cluster
pub const INTRA_CLUSTER_PROBABILITY: f64 = 0.7;

/// Chance of an edge between vertices of consecutive clusters
pub const INTER_CLUSTER_PROBABILITY: f64 = 0.3;

/// Output of [`ClusteredGenerator::generate`]
#[derive(Debug, Clone)]
pub struct ClusteredGraph {
    /// The finalized, connected graph
    pub graph: WeightedGraph,

    /// Partition the edges were wired against
    pub clusters: Vec<ClusterRange>,

    /// Edges the connectivity pass had to add
    pub repair: RepairReport,
}

/// Generator owning the matrix through the intra-cluster, inter-cluster and
/// repair passes
pub struct ClusteredGenerator {
    max_weight: u32,
    clusters: Vec<ClusterRange>,
    builder: GraphBuilder,
}

impl ClusteredGenerator {
    /// Validate the configuration and allocate an empty matrix
    pub fn new(config: &GeneratorConfig) -> GraphResult<Self> {
        if config.max_weight == 0 {
            return Err(GraphError::InvalidMaxWeight);
        }

        let clusters = partition(config.vertex_count, config.cluster_count)?;

        Ok(Self {
            max_weight: config.max_weight,
            clusters,
            builder: GraphBuilder::new(config.vertex_count),
        })
    }

    /// Run all passes and finalize the graph
    pub fn generate<R: Rng>(mut self, rng: &mut R) -> GraphResult<ClusteredGraph> {
        log::info!(
            "Generating clustered graph with {} vertices in {} clusters",
            self.builder.vertex_count(),
            self.clusters.len()
        );

        let intra = self.wire_intra_cluster(rng)?;
        log::debug!("Intra-cluster pass added {} edges", intra);

        let inter = self.wire_inter_cluster(rng)?;
        log::debug!("Inter-cluster pass added {} edges", inter);

        let repair = ensure_connected(&mut self.builder, self.max_weight, rng)?;

        let graph = self.builder.build();
        log::info!("Generated graph with {} edges", graph.edge_count());

        Ok(ClusteredGraph {
            graph,
            clusters: self.clusters,
            repair,
        })
    }

    /// Dense wiring of every pair inside each cluster
    fn wire_intra_cluster<R: Rng>(&mut self, rng: &mut R) -> GraphResult<usize> {
        let mut added = 0;

        for cluster in &self.clusters {
            for i in cluster.vertices() {
                for j in (i + 1)..cluster.end {
                    if rng.gen_bool(INTRA_CLUSTER_PROBABILITY) {
                        let weight = rng.gen_range(1..=self.max_weight);
                        self.builder.set_edge(i, j, weight)?;
                        added += 1;
                    }
                }
            }
        }

        Ok(added)
    }

    /// Sparse wiring between each pair of consecutive clusters
    fn wire_inter_cluster<R: Rng>(&mut self, rng: &mut R) -> GraphResult<usize> {
        let mut added = 0;

        for pair in self.clusters.windows(2) {
            let (left, right) = (pair[0], pair[1]);

            for i in left.vertices() {
                for j in right.vertices() {
                    if rng.gen_bool(INTER_CLUSTER_PROBABILITY) {
                        let weight = rng.gen_range(1..=self.max_weight);
                        self.builder.set_edge(i, j, weight)?;
                        added += 1;
                    }
                }
            }
        }

        Ok(added)
    }
}

/// Build a connected clustered sparse graph in one call
pub fn generate_clustered_graph<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> GraphResult<ClusteredGraph> {
    ClusteredGenerator::new(config)?.generate(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algorithms::{is_connected, reachable_from};
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn assert_well_formed(graph: &WeightedGraph, max_weight: u32) {
        for (i, row) in graph.rows().enumerate() {
            assert_eq!(row[i], 0);
            for (j, &w) in row.iter().enumerate() {
                assert_eq!(w, graph.weight(j, i).unwrap());
                assert!(w <= max_weight);
            }
        }
    }

    #[rstest]
    #[case(42)]
    #[case(123)]
    #[case(456)]
    #[case(789)]
    fn six_vertices_two_clusters(#[case] seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = generate_clustered_graph(&GeneratorConfig::new(6, 2, 10), &mut rng).unwrap();

        assert_eq!(
            result.clusters.iter().map(ClusterRange::vertices).collect::<Vec<_>>(),
            vec![0..3, 3..6]
        );
        assert_well_formed(&result.graph, 10);
        assert!(is_connected(&result.graph));
        assert!(result.graph.edge_count() <= 15);
    }

    #[test]
    fn single_vertex_graph_is_trivial() {
        let mut rng = SmallRng::seed_from_u64(3);
        let result = generate_clustered_graph(&GeneratorConfig::new(1, 1, 10), &mut rng).unwrap();

        assert_eq!(result.graph.rows().collect::<Vec<_>>(), vec![vec![0]]);
        assert_eq!(result.graph.edge_count(), 0);
        assert!(result.repair.is_noop());
    }

    #[test]
    fn non_consecutive_clusters_only_joined_by_repair() {
        let mut rng = SmallRng::seed_from_u64(99);
        let result = generate_clustered_graph(&GeneratorConfig::new(30, 3, 10), &mut rng).unwrap();
        let repaired: Vec<_> = result
            .repair
            .added_edges
            .iter()
            .map(|&(u, v, _)| (u.min(v), u.max(v)))
            .collect();

        for (i, j, _) in result.graph.edges() {
            if i < 10 && j >= 20 {
                assert!(repaired.contains(&(i, j)));
            }
        }
    }

    #[test]
    fn rejects_invalid_configuration() {
        assert_eq!(
            ClusteredGenerator::new(&GeneratorConfig::new(5, 2, 0)).err(),
            Some(GraphError::InvalidMaxWeight)
        );
        assert_eq!(
            ClusteredGenerator::new(&GeneratorConfig::new(5, 6, 10)).err(),
            Some(GraphError::InvalidClusterCount {
                clusters: 6,
                vertex_count: 5
            })
        );
        assert_eq!(
            ClusteredGenerator::new(&GeneratorConfig::new(0, 1, 10)).err(),
            Some(GraphError::EmptyGraph)
        );
    }

    proptest! {
        #[test]
        fn generated_graph_is_symmetric_bounded_and_connected(
            vertex_count in 1usize..40,
            cluster_seed in 0usize..40,
            max_weight in prop::sample::select(vec![1u32, 10, 100]),
            seed in any::<u64>(),
        ) {
            let clusters = cluster_seed % vertex_count + 1;
            let mut rng = SmallRng::seed_from_u64(seed);
            let config = GeneratorConfig::new(vertex_count, clusters, max_weight);
            let result = generate_clustered_graph(&config, &mut rng).unwrap();
            let graph = &result.graph;

            for (i, row) in graph.rows().enumerate() {
                prop_assert_eq!(row[i], 0);
                for (j, &w) in row.iter().enumerate() {
                    prop_assert_eq!(w, graph.weight(j, i).unwrap_or(0));
                    prop_assert!(w <= max_weight);
                }
            }
            for root in 0..vertex_count {
                prop_assert!(reachable_from(graph, root).unwrap().is_complete());
            }
        }

        #[test]
        fn repair_is_idempotent(vertex_count in 1usize..30, seed in any::<u64>()) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let config = GeneratorConfig::new(vertex_count, 1, 10);
            let result = generate_clustered_graph(&config, &mut rng).unwrap();

            let mut builder = result.graph.clone().into_builder();
            let report = ensure_connected(&mut builder, 10, &mut rng).unwrap();

            prop_assert!(report.is_noop());
            prop_assert_eq!(builder.build(), result.graph);
        }
    }
}
