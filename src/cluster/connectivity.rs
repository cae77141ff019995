//! Connectivity repair for generated graphs

use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::algorithms::reachable_from;
use crate::graph::GraphBuilder;

/// Edges added by a repair pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairReport {
    /// `(unreached vertex, reached partner, weight)` in insertion order
    pub added_edges: Vec<(usize, usize, u32)>,
}

impl RepairReport {
    /// True when the graph was already connected
    pub fn is_noop(&self) -> bool {
        self.added_edges.is_empty()
    }
}

/// Make the graph connected by adding edges only.
///
/// Searches from vertex 0, then repeatedly joins the lowest-index unreached
/// vertex to a uniformly chosen reached vertex with a weight in
/// `[1, max_weight]`. Existing edges are never touched.
pub fn ensure_connected<R: Rng>(
    builder: &mut GraphBuilder,
    max_weight: u32,
    rng: &mut R,
) -> GraphResult<RepairReport> {
    if max_weight == 0 {
        return Err(GraphError::InvalidMaxWeight);
    }

    let mut report = RepairReport::default();
    if builder.vertex_count() == 0 {
        return Ok(report);
    }

    let mut reached = reachable_from(&*builder, 0)?;

    while let Some(isolated) = reached.first_unvisited() {
        // vertex 0 is always reached, so the choice is never empty
        let partner = reached.vertices().choose(rng).unwrap_or(0);
        let weight = rng.gen_range(1..=max_weight);

        builder.set_edge(isolated, partner, weight)?;
        reached.insert(isolated);
        report.added_edges.push((isolated, partner, weight));
    }

    if report.is_noop() {
        log::debug!("Graph already connected, no repair needed");
    } else {
        log::warn!(
            "Connectivity repair added {} edges",
            report.added_edges.len()
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algorithms::is_connected;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case(42)]
    #[case(123)]
    #[case(456)]
    fn connects_edgeless_graph(#[case] seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut builder = GraphBuilder::new(8);

        let report = ensure_connected(&mut builder, 10, &mut rng).unwrap();

        assert_eq!(report.added_edges.len(), 7);
        assert!(is_connected(&builder));
        for &(isolated, partner, weight) in &report.added_edges {
            assert!(isolated > 0);
            assert!(partner < isolated);
            assert!((1..=10).contains(&weight));
        }
    }

    #[test]
    fn second_pass_changes_nothing() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut builder = GraphBuilder::new(6);
        builder.set_edge(0, 1, 4).unwrap();
        builder.set_edge(4, 5, 4).unwrap();

        let first = ensure_connected(&mut builder, 5, &mut rng).unwrap();
        let snapshot = builder.clone().build();
        let second = ensure_connected(&mut builder, 5, &mut rng).unwrap();

        assert_eq!(first.added_edges.len(), 4);
        assert!(second.is_noop());
        assert_eq!(builder.build(), snapshot);
    }

    #[test]
    fn keeps_existing_edges() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut builder = GraphBuilder::new(4);
        builder.set_edge(2, 3, 9).unwrap();

        ensure_connected(&mut builder, 3, &mut rng).unwrap();

        assert_eq!(builder.weight(2, 3).unwrap(), 9);
    }

    #[test]
    fn single_vertex_needs_no_repair() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut builder = GraphBuilder::new(1);

        assert!(ensure_connected(&mut builder, 10, &mut rng).unwrap().is_noop());
    }

    #[test]
    fn rejects_zero_max_weight() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut builder = GraphBuilder::new(3);

        assert_eq!(
            ensure_connected(&mut builder, 0, &mut rng),
            Err(GraphError::InvalidMaxWeight)
        );
    }
}
