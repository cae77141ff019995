//! Graph construction module

use ndarray::Array2;

use crate::error::{GraphError, GraphResult};
use crate::graph::WeightedGraph;

/// Builder for incrementally wiring an undirected weighted graph.
///
/// Every write goes through [`GraphBuilder::set_edge`], which updates both
/// `(i, j)` and `(j, i)`, so the matrix stays symmetric with a zero diagonal.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    /// Number of vertices
    vertex_count: usize,

    /// Adjacency matrix, 0 meaning "no edge"
    pub(crate) matrix: Array2<u32>,
}

impl GraphBuilder {
    /// Create a builder for `vertex_count` vertices with no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            matrix: Array2::zeros((vertex_count, vertex_count)),
        }
    }

    pub(crate) fn from_matrix(matrix: Array2<u32>) -> Self {
        Self {
            vertex_count: matrix.nrows(),
            matrix,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Set the weight of the undirected edge `{i, j}`; a weight of 0 clears it
    pub fn set_edge(&mut self, i: usize, j: usize, weight: u32) -> GraphResult<()> {
        self.check_pair(i, j)?;

        self.matrix[[i, j]] = weight;
        self.matrix[[j, i]] = weight;

        Ok(())
    }

    /// Weight stored for `{i, j}`, 0 when absent
    pub fn weight(&self, i: usize, j: usize) -> GraphResult<u32> {
        self.check_pair(i, j)?;
        Ok(self.matrix[[i, j]])
    }

    pub fn has_edge(&self, i: usize, j: usize) -> GraphResult<bool> {
        Ok(self.weight(i, j)? > 0)
    }

    /// Neighbours of `vertex` with the weight of the connecting edge
    pub fn neighbours(
        &self,
        vertex: usize,
    ) -> GraphResult<impl Iterator<Item = (usize, u32)> + '_> {
        check_vertex(vertex, self.vertex_count)?;
        Ok(neighbours_in(&self.matrix, vertex))
    }

    /// Finalize the matrix into a read-only graph
    pub fn build(self) -> WeightedGraph {
        WeightedGraph::from_matrix(self.matrix)
    }

    fn check_pair(&self, i: usize, j: usize) -> GraphResult<()> {
        check_vertex(i, self.vertex_count)?;
        check_vertex(j, self.vertex_count)?;

        if i == j {
            return Err(GraphError::SelfLoop { vertex: i });
        }

        Ok(())
    }
}

pub(crate) fn neighbours_in(
    matrix: &Array2<u32>,
    vertex: usize,
) -> impl Iterator<Item = (usize, u32)> + '_ {
    matrix
        .row(vertex)
        .into_iter()
        .copied()
        .enumerate()
        .filter(|&(_, weight)| weight > 0)
}

pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> GraphResult<()> {
    if vertex >= vertex_count {
        return Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        });
    }
    Ok(())
}
