//! Data Matrix decoder
//!
//! Module grid -> placement-order bits -> codewords -> Reed-Solomon
//! correction -> ASCII interpretation.

/// Bit packing into codewords
pub mod bitstream;

use crate::config;
use crate::debug::debug_enabled;
use crate::ecc::{CorrectionMode, ReedSolomonDecoder};
use crate::error::Result;
use crate::geometry::SymbolSize;
use crate::geometry::finder::finder_mismatches;
use crate::geometry::placement::read_bits;
use crate::models::{DataMatrix, ModuleGrid};
use crate::modes::ascii::AsciiDecoder;
use bitstream::codeword_stream;

/// Decoder with a configurable Reed-Solomon correction mode
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    correction: CorrectionMode,
}

impl Decoder {
    /// Decoder using the correction mode from `DMTX_RS_MODE` (algebraic by default)
    pub fn new() -> Self {
        Self::with_correction(config::correction_mode())
    }

    pub fn with_correction(correction: CorrectionMode) -> Self {
        Self { correction }
    }

    pub fn correction(&self) -> CorrectionMode {
        self.correction
    }

    /// Decode a grid whose dimensions match an ECC200 size exactly
    pub fn decode_symbol(&self, grid: &ModuleGrid) -> Result<DataMatrix> {
        let size = SymbolSize::for_dimensions(grid.rows(), grid.cols())?;

        let mismatches = finder_mismatches(grid, size);
        if mismatches > 0 && debug_enabled() {
            eprintln!(
                "DECODE: {} finder module(s) differ from the {}x{} pattern",
                mismatches, size.rows, size.cols
            );
        }

        let bits = read_bits(grid, size);
        let mut codewords = codeword_stream(&bits, size);

        let rs = ReedSolomonDecoder::with_mode(size.ec_cw, self.correction);
        let corrected = rs.decode(&mut codewords)?;
        codewords.truncate(size.data_cw);

        let text = AsciiDecoder::decode(&codewords)?;

        Ok(DataMatrix {
            data: codewords,
            content: text.content,
            size: *size,
            gs1: text.gs1,
            corrected_errors: corrected,
            null_codewords: text.null_codewords,
            finder_mismatches: mismatches,
            modules: grid.clone(),
        })
    }

    /// Decode a grid to its text
    pub fn decode(&self, grid: &ModuleGrid) -> Result<String> {
        self.decode_symbol(grid).map(|symbol| symbol.content)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
