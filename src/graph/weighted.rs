//! Finalized undirected weighted graph

use itertools::Itertools;
use ndarray::Array2;

use crate::error::GraphResult;
use crate::graph::builder::{check_vertex, neighbours_in};
use crate::graph::GraphBuilder;

/// Read-only undirected graph backed by a symmetric adjacency matrix.
///
/// Produced by [`GraphBuilder::build`] once every generation pass has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    pub(crate) matrix: Array2<u32>,
}

impl WeightedGraph {
    pub(crate) fn from_matrix(matrix: Array2<u32>) -> Self {
        Self { matrix }
    }

    /// Number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.matrix.nrows()
    }

    /// Weight of the edge `{i, j}`, 0 when absent
    pub fn weight(&self, i: usize, j: usize) -> GraphResult<u32> {
        check_vertex(i, self.vertex_count())?;
        check_vertex(j, self.vertex_count())?;
        Ok(self.matrix[[i, j]])
    }

    pub fn has_edge(&self, i: usize, j: usize) -> GraphResult<bool> {
        Ok(self.weight(i, j)? > 0)
    }

    pub fn neighbours(
        &self,
        vertex: usize,
    ) -> GraphResult<impl Iterator<Item = (usize, u32)> + '_> {
        check_vertex(vertex, self.vertex_count())?;
        Ok(neighbours_in(&self.matrix, vertex))
    }

    /// Every edge once, as `(i, j, weight)` with `i < j`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.vertex_count())
            .tuple_combinations()
            .map(move |(i, j)| (i, j, self.matrix[[i, j]]))
            .filter(|&(_, _, weight)| weight > 0)
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Degree of a vertex (number of incident edges)
    pub fn degree(&self, vertex: usize) -> GraphResult<usize> {
        Ok(self.neighbours(vertex)?.count())
    }

    /// Ratio of present edges to possible undirected edges
    pub fn density(&self) -> f64 {
        let n = self.vertex_count();
        if n <= 1 {
            return 0.0;
        }

        let potential_edges = n * (n - 1) / 2;
        self.edge_count() as f64 / potential_edges as f64
    }

    /// Matrix rows in vertex order
    pub fn rows(&self) -> impl Iterator<Item = Vec<u32>> + '_ {
        self.matrix.outer_iter().map(|row| row.to_vec())
    }

    /// Re-open the graph for mutation
    pub fn into_builder(self) -> GraphBuilder {
        GraphBuilder::from_matrix(self.matrix)
    }
}
