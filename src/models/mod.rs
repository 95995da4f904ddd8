/// Decoded symbol result
pub mod data_matrix;
/// Bit-packed module grid
pub mod grid;

pub use data_matrix::DataMatrix;
pub use grid::ModuleGrid;
