//! Configuration management for the graph generators

/// Default maximum edge weight
pub const DEFAULT_MAX_WEIGHT: u32 = 10;

/// Vertex count used by the SCC-block generator
pub const DEFAULT_SCC_VERTICES: usize = 10;

/// Block sizes used by the SCC-block generator
pub const DEFAULT_SCC_SIZES: [usize; 3] = [3, 4, 3];

/// Parameters of the clustered sparse-graph generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Total number of vertices
    pub vertex_count: usize,

    /// Number of contiguous clusters
    pub cluster_count: usize,

    /// Largest weight an edge may carry
    pub max_weight: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vertex_count: 10,
            cluster_count: 2,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with custom values
    pub fn new(vertex_count: usize, cluster_count: usize, max_weight: u32) -> Self {
        Self {
            vertex_count,
            cluster_count,
            max_weight,
        }
    }
}

/// Parameters of the SCC-block generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccConfig {
    /// Total number of vertices
    pub vertex_count: usize,

    /// Size of each strongly connected block, laid out in order from vertex 0
    pub component_sizes: Vec<usize>,
}

impl Default for SccConfig {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_SCC_VERTICES,
            component_sizes: DEFAULT_SCC_SIZES.to_vec(),
        }
    }
}

impl SccConfig {
    pub fn new(vertex_count: usize, component_sizes: Vec<usize>) -> Self {
        Self {
            vertex_count,
            component_sizes,
        }
    }
}
