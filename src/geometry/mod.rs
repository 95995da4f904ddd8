//! ECC200 symbol geometry
//!
//! - Size table lookup for encoding (by capacity) and decoding (by dimensions)
//! - Finder pattern layout
//! - The zig-zag placement order shared by the encoder and decoder

/// Finder pattern stamping and checks
pub mod finder;
/// Module placement order for data bits
pub mod placement;
/// ECC200 symbol size table
pub mod tables;

pub use tables::{SYMBOL_SIZES, SymbolSize};
