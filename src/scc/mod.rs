//! Directed graphs assembled from strongly connected blocks
//!
//! Each block is a contiguous clique with arcs in both directions. The first
//! vertex of every block points at the first vertex of the next block, and
//! `N / 2` random arcs are layered on top as decoration.

use rand::seq::index;
use rand::Rng;

use crate::config::SccConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::DirectedGraph;

/// Contiguous vertex range of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SccBlock {
    pub start: usize,
    pub size: usize,
}

impl SccBlock {
    pub fn end(&self) -> usize {
        self.start + self.size
    }
}

/// Lay the blocks out from vertex 0, checking they fit in `vertex_count`
pub fn layout_blocks(vertex_count: usize, sizes: &[usize]) -> GraphResult<Vec<SccBlock>> {
    let mut blocks = Vec::with_capacity(sizes.len());
    let mut start = 0;

    for (position, &size) in sizes.iter().enumerate() {
        if size == 0 {
            return Err(GraphError::EmptyComponent { index: position });
        }
        blocks.push(SccBlock { start, size });
        start += size;
    }

    if start > vertex_count {
        return Err(GraphError::ComponentsExceedVertexCount {
            total: start,
            vertex_count,
        });
    }

    Ok(blocks)
}

/// Arcs contributed by the cliques and bridges, excluding decoration
pub fn deterministic_arc_count(sizes: &[usize]) -> usize {
    let clique_arcs: usize = sizes.iter().map(|&size| size * size.saturating_sub(1)).sum();
    clique_arcs + sizes.len().saturating_sub(1)
}

/// Generator for the SCC-block variant
pub struct SccGenerator {
    blocks: Vec<SccBlock>,
    graph: DirectedGraph,
}

impl SccGenerator {
    pub fn new(config: &SccConfig) -> GraphResult<Self> {
        let blocks = layout_blocks(config.vertex_count, &config.component_sizes)?;

        Ok(Self {
            blocks,
            graph: DirectedGraph::new(config.vertex_count),
        })
    }

    pub fn blocks(&self) -> &[SccBlock] {
        &self.blocks
    }

    /// Build cliques, bridges and decoration, returning the finished graph
    pub fn generate<R: Rng>(mut self, rng: &mut R) -> GraphResult<DirectedGraph> {
        self.add_cliques()?;
        self.add_bridges()?;

        let deterministic = self.graph.arc_count();
        log::debug!("Cliques and bridges produced {} arcs", deterministic);

        self.add_decoration(rng)?;
        log::info!(
            "Generated SCC graph with {} vertices, {} blocks and {} arcs",
            self.graph.vertex_count(),
            self.blocks.len(),
            self.graph.arc_count()
        );

        Ok(self.graph)
    }

    fn add_cliques(&mut self) -> GraphResult<()> {
        for block in &self.blocks {
            for i in block.start..block.end() {
                for j in block.start..block.end() {
                    if i != j {
                        self.graph.add_arc(i, j)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn add_bridges(&mut self) -> GraphResult<()> {
        for pair in self.blocks.windows(2) {
            self.graph.add_arc(pair[0].start, pair[1].start)?;
        }
        Ok(())
    }

    fn add_decoration<R: Rng>(&mut self, rng: &mut R) -> GraphResult<()> {
        let vertex_count = self.graph.vertex_count();
        if vertex_count < 2 {
            return Ok(());
        }

        for _ in 0..vertex_count / 2 {
            let pair = index::sample(rng, vertex_count, 2);
            self.graph.add_arc(pair.index(0), pair.index(1))?;
        }
        Ok(())
    }
}

/// Build an SCC-block graph in one call
pub fn generate_scc_graph<R: Rng>(config: &SccConfig, rng: &mut R) -> GraphResult<DirectedGraph> {
    SccGenerator::new(config)?.generate(rng)
}
