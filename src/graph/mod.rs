//! Graph representation and algorithms module

pub mod algorithms;
pub mod analysis;
pub mod builder;
pub mod directed;
pub mod weighted;

pub use builder::GraphBuilder;
pub use directed::DirectedGraph;
pub use weighted::WeightedGraph;
