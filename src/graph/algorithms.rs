//! Reachability algorithms over undirected adjacency matrices

use ndarray::Array2;

use crate::error::GraphResult;
use crate::graph::builder::check_vertex;
use crate::graph::{GraphBuilder, WeightedGraph};

/// Anything exposing a symmetric weight matrix
pub trait Adjacency {
    fn adjacency(&self) -> &Array2<u32>;
}

impl Adjacency for GraphBuilder {
    fn adjacency(&self) -> &Array2<u32> {
        &self.matrix
    }
}

impl Adjacency for WeightedGraph {
    fn adjacency(&self) -> &Array2<u32> {
        &self.matrix
    }
}

/// Set of vertices reached by a traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability {
    visited: Vec<bool>,
    count: usize,
}

impl Reachability {
    pub fn contains(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// True when every vertex of the graph was reached
    pub fn is_complete(&self) -> bool {
        self.count == self.visited.len()
    }

    /// Lowest-index vertex not yet reached
    pub fn first_unvisited(&self) -> Option<usize> {
        self.visited.iter().position(|&seen| !seen)
    }

    /// Reached vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|&(_, &seen)| seen)
            .map(|(vertex, _)| vertex)
    }

    /// Mark `vertex` as reached; returns false if it already was
    pub fn insert(&mut self, vertex: usize) -> bool {
        match self.visited.get_mut(vertex) {
            Some(seen) if !*seen => {
                *seen = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }
}

/// Depth-first search with an explicit stack, following every edge with
/// weight > 0.
pub fn reachable_from<G: Adjacency>(graph: &G, root: usize) -> GraphResult<Reachability> {
    let matrix = graph.adjacency();
    let vertex_count = matrix.nrows();
    check_vertex(root, vertex_count)?;

    let mut reached = Reachability {
        visited: vec![false; vertex_count],
        count: 0,
    };
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        if !reached.insert(current) {
            continue;
        }

        for (neighbour, &weight) in matrix.row(current).iter().enumerate() {
            if weight > 0 && !reached.contains(neighbour) {
                stack.push(neighbour);
            }
        }
    }

    Ok(reached)
}

/// True when every vertex reaches every other; an empty graph counts as connected
pub fn is_connected<G: Adjacency>(graph: &G) -> bool {
    if graph.adjacency().nrows() == 0 {
        return true;
    }

    reachable_from(graph, 0)
        .map(|reached| reached.is_complete())
        .unwrap_or(false)
}
