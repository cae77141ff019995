//! Independent structural checks backed by petgraph

use petgraph::algo::{connected_components, tarjan_scc};
use petgraph::graph::{DiGraph, UnGraph};

use crate::graph::{DirectedGraph, WeightedGraph};

/// Convert to a petgraph undirected graph, one node per vertex
pub fn to_petgraph(graph: &WeightedGraph) -> UnGraph<usize, u32> {
    let mut pg = UnGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    for vertex in 0..graph.vertex_count() {
        pg.add_node(vertex);
    }
    pg.extend_with_edges(graph.edges().map(|(i, j, weight)| (i as u32, j as u32, weight)));
    pg
}

/// Convert to a petgraph directed graph, one node per vertex
pub fn to_petgraph_directed(graph: &DirectedGraph) -> DiGraph<usize, ()> {
    let mut pg = DiGraph::with_capacity(graph.vertex_count(), graph.arc_count());
    for vertex in 0..graph.vertex_count() {
        pg.add_node(vertex);
    }
    pg.extend_with_edges(graph.arcs().map(|(source, target)| (source as u32, target as u32)));
    pg
}

/// Number of connected components
pub fn component_count(graph: &WeightedGraph) -> usize {
    connected_components(&to_petgraph(graph))
}

/// Strongly connected components, each as a sorted list of vertices,
/// ordered by their smallest vertex
pub fn strongly_connected_components(graph: &DirectedGraph) -> Vec<Vec<usize>> {
    let pg = to_petgraph_directed(graph);
    let mut components: Vec<Vec<usize>> = tarjan_scc(&pg)
        .into_iter()
        .map(|component| {
            let mut members: Vec<usize> = component.into_iter().map(|node| pg[node]).collect();
            members.sort_unstable();
            members
        })
        .collect();

    components.sort_by_key(|members| members.first().copied());
    components
}
