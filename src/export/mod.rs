//! Matrix rendering and CSV export for visualization tools

pub mod csv;
pub mod matrix;

pub use matrix::MatrixFormat;
