//! CSV node and edge lists in the column layout graph-visualization tools import

use std::io::{self, Write};

use crate::graph::{DirectedGraph, WeightedGraph};

/// Write `Id,Label` with one row per vertex
pub fn write_node_list<W: Write>(writer: &mut W, vertex_count: usize) -> io::Result<()> {
    writeln!(writer, "Id,Label")?;
    for vertex in 0..vertex_count {
        writeln!(writer, "{},\"Node {}\"", vertex, vertex)?;
    }
    Ok(())
}

/// Write `Source,Target,Type,Weight` with one row per arc.
///
/// The weight column is always 1.
pub fn write_directed_edge_list<W: Write>(
    writer: &mut W,
    graph: &DirectedGraph,
) -> io::Result<()> {
    writeln!(writer, "Source,Target,Type,Weight")?;
    for (source, target) in graph.arcs() {
        writeln!(writer, "{},{},Directed,1", source, target)?;
    }
    Ok(())
}

/// Write `Source,Target,Weight` with one row per undirected edge (`i < j`)
pub fn write_undirected_edge_list<W: Write>(
    writer: &mut W,
    graph: &WeightedGraph,
) -> io::Result<()> {
    writeln!(writer, "Source,Target,Weight")?;
    for (i, j, weight) in graph.edges() {
        writeln!(writer, "{},{},{}", i, j, weight)?;
    }
    Ok(())
}
