//! RustDMTX - ECC200 Data Matrix encoding and decoding
//!
//! Encodes ASCII payloads into Data Matrix module grids and decodes grids back
//! to text, repairing damaged codewords with Reed-Solomon error correction.
//! Image acquisition and rendering live in [`tools`], outside the codec.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults
pub mod config;
mod debug;
/// Data Matrix decoder (grid to text)
pub mod decoder;
/// GF(256) arithmetic and Reed-Solomon coding
pub mod ecc;
/// Data Matrix encoder (text to grid)
pub mod encoder;
/// Error type shared by every module
pub mod error;
/// Symbol sizes, finder pattern and module placement
pub mod geometry;
/// Core data structures (ModuleGrid, DataMatrix)
pub mod models;
/// Codeword modes (ASCII, plus the compaction-mode table)
pub mod modes;
/// Image acquisition and rendering
pub mod tools;

pub use decoder::Decoder;
pub use ecc::CorrectionMode;
pub use encoder::encode;
pub use error::{DmtxError, Result};
pub use geometry::SymbolSize;
pub use models::{DataMatrix, ModuleGrid};

use rayon::prelude::*;

/// Decode a grid to text with the default decoder
pub fn decode(grid: &ModuleGrid) -> Result<String> {
    Decoder::new().decode(grid)
}

/// Decode a grid and keep the symbol metadata
pub fn decode_symbol(grid: &ModuleGrid) -> Result<DataMatrix> {
    Decoder::new().decode_symbol(grid)
}

/// Encode many payloads in parallel; results keep the input order
pub fn encode_batch<S: AsRef<str> + Sync>(payloads: &[S]) -> Vec<Result<ModuleGrid>> {
    payloads.par_iter().map(|p| encode(p.as_ref())).collect()
}

/// Decode many grids in parallel; results keep the input order
pub fn decode_batch(grids: &[ModuleGrid]) -> Vec<Result<String>> {
    let decoder = Decoder::new();
    grids.par_iter().map(|grid| decoder.decode(grid)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let grid = encode("Hello World").unwrap();
        assert_eq!(decode(&grid), Ok("Hello World".to_string()));
    }

    #[test]
    fn test_batch_matches_single_calls() {
        let payloads = ["A", "(01)09501101020917", "Hello World", "\u{e9}"];
        let grids = encode_batch(&payloads);
        assert_eq!(grids.len(), 4);
        for (payload, grid) in payloads.iter().zip(&grids) {
            assert_eq!(grid, &encode(payload));
        }
        assert!(grids[3].is_err());

        let ok: Vec<ModuleGrid> = grids.into_iter().filter_map(|g| g.ok()).collect();
        let decoded = decode_batch(&ok);
        let expected: Vec<Result<String>> = payloads[..3].iter().map(|p| Ok(p.to_string())).collect();
        assert_eq!(decoded, expected);
    }
}
