//! Directed unweighted graph used by the SCC-block generator

use ndarray::Array2;

use crate::error::{GraphError, GraphResult};
use crate::graph::builder::check_vertex;

/// Directed graph stored as an N×N arc matrix (`true` = arc present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph {
    matrix: Array2<bool>,
}

impl DirectedGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            matrix: Array2::from_elem((vertex_count, vertex_count), false),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.matrix.nrows()
    }

    /// Add the arc `source -> target`; adding an existing arc is a no-op
    pub fn add_arc(&mut self, source: usize, target: usize) -> GraphResult<()> {
        self.check_pair(source, target)?;
        self.matrix[[source, target]] = true;
        Ok(())
    }

    pub fn has_arc(&self, source: usize, target: usize) -> GraphResult<bool> {
        self.check_pair(source, target)?;
        Ok(self.matrix[[source, target]])
    }

    /// Every arc as `(source, target)`, row-major
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.matrix
            .indexed_iter()
            .filter(|&(_, &present)| present)
            .map(|((source, target), _)| (source, target))
    }

    pub fn arc_count(&self) -> usize {
        self.matrix.iter().filter(|&&present| present).count()
    }

    /// Matrix rows as 0/1 integers in vertex order
    pub fn rows(&self) -> impl Iterator<Item = Vec<u32>> + '_ {
        self.matrix
            .outer_iter()
            .map(|row| row.iter().map(|&present| u32::from(present)).collect())
    }

    fn check_pair(&self, source: usize, target: usize) -> GraphResult<()> {
        check_vertex(source, self.vertex_count())?;
        check_vertex(target, self.vertex_count())?;

        if source == target {
            return Err(GraphError::SelfLoop { vertex: source });
        }

        Ok(())
    }
}
