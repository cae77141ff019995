//! Results persistence module
//!
//! Every output file is rendered in memory first, then staged as a temporary
//! file inside the output directory and renamed into place. If any step
//! fails, files already renamed by the same call are removed again.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, to_string_pretty};
use tempfile::NamedTempFile;

use crate::cluster::generator::ClusteredGraph;
use crate::cluster::metrics::calculate_cluster_metrics;
use crate::export::csv::{write_directed_edge_list, write_node_list, write_undirected_edge_list};
use crate::graph::analysis::{component_count, strongly_connected_components};
use crate::graph::{DirectedGraph, WeightedGraph};

/// Edge list written for the clustered generator
pub const SPARSE_EDGES_FILE: &str = "sparse_graph.csv";

/// Node list shared by both generators
pub const NODES_FILE: &str = "nodes.csv";

/// Edge list written for the SCC generator
pub const SCC_EDGES_FILE: &str = "edges.csv";

pub const SUMMARY_FILE: &str = "summary.json";

/// A fully rendered output file awaiting persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub name: &'static str,
    pub contents: Vec<u8>,
}

impl RenderedFile {
    pub fn new(name: &'static str, contents: Vec<u8>) -> Self {
        Self { name, contents }
    }
}

/// Save a finalized clustered graph to the specified directory
pub fn save_clustered(result: &ClusteredGraph, output_dir: &Path) -> Result<Vec<PathBuf>> {
    log::info!("Saving clustered graph to {}", output_dir.display());
    let files = render_clustered(result)?;
    write_outputs(output_dir, files)
}

/// Save a finalized SCC-block graph to the specified directory
pub fn save_scc(graph: &DirectedGraph, output_dir: &Path) -> Result<Vec<PathBuf>> {
    log::info!("Saving SCC graph to {}", output_dir.display());
    let files = render_scc(graph)?;
    write_outputs(output_dir, files)
}

/// Render node list, edge list and summary of a clustered graph
pub fn render_clustered(result: &ClusteredGraph) -> Result<Vec<RenderedFile>> {
    let graph = &result.graph;

    let mut nodes = Vec::new();
    write_node_list(&mut nodes, graph.vertex_count())?;

    let mut edges = Vec::new();
    write_undirected_edge_list(&mut edges, graph)?;

    let (min_degree, max_degree) = degree_range(graph);
    let summary = json!({
        "variant": "clustered",
        "graph_stats": {
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "density": graph.density(),
            "min_degree": min_degree,
            "max_degree": max_degree,
            "component_count": component_count(graph),
        },
        "repair": {
            "added_edge_count": result.repair.added_edges.len(),
            "added_edges": &result.repair.added_edges,
        },
        "clusters": calculate_cluster_metrics(graph, &result.clusters),
    });

    Ok(vec![
        RenderedFile::new(NODES_FILE, nodes),
        RenderedFile::new(SPARSE_EDGES_FILE, edges),
        RenderedFile::new(SUMMARY_FILE, to_string_pretty(&summary)?.into_bytes()),
    ])
}

/// Render node list, arc list and summary of an SCC-block graph
pub fn render_scc(graph: &DirectedGraph) -> Result<Vec<RenderedFile>> {
    let mut nodes = Vec::new();
    write_node_list(&mut nodes, graph.vertex_count())?;

    let mut edges = Vec::new();
    write_directed_edge_list(&mut edges, graph)?;

    let components = strongly_connected_components(graph);
    let summary = json!({
        "variant": "scc",
        "graph_stats": {
            "vertex_count": graph.vertex_count(),
            "arc_count": graph.arc_count(),
            "strongly_connected_component_count": components.len(),
        },
        "strongly_connected_components": components,
    });

    Ok(vec![
        RenderedFile::new(NODES_FILE, nodes),
        RenderedFile::new(SCC_EDGES_FILE, edges),
        RenderedFile::new(SUMMARY_FILE, to_string_pretty(&summary)?.into_bytes()),
    ])
}

/// Smallest and largest vertex degree, `(0, 0)` for an empty graph
fn degree_range(graph: &WeightedGraph) -> (usize, usize) {
    let degrees: Vec<usize> = (0..graph.vertex_count())
        .filter_map(|vertex| graph.degree(vertex).ok())
        .collect();

    let min = degrees.iter().copied().min().unwrap_or(0);
    let max = degrees.iter().copied().max().unwrap_or(0);
    (min, max)
}

/// Stage every file, then move them all into place
fn write_outputs(output_dir: &Path, files: Vec<RenderedFile>) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let mut staged = Vec::with_capacity(files.len());
    for file in files {
        let mut temp = NamedTempFile::new_in(output_dir)
            .with_context(|| format!("failed to stage {}", file.name))?;
        temp.write_all(&file.contents)?;
        temp.flush()?;
        staged.push((temp, output_dir.join(file.name)));
    }

    let mut persisted: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for (temp, path) in staged {
        if let Err(err) = temp.persist(&path) {
            for written in &persisted {
                if let Err(remove_err) = fs::remove_file(written) {
                    log::warn!("Could not remove {}: {}", written.display(), remove_err);
                }
            }
            return Err(anyhow::Error::new(err.error))
                .with_context(|| format!("failed to write {}", path.display()));
        }

        log::debug!("Wrote {}", path.display());
        persisted.push(path);
    }

    Ok(persisted)
}
