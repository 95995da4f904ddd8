use super::ModuleGrid;
use crate::geometry::SymbolSize;

/// A decoded Data Matrix symbol
#[derive(Debug, Clone)]
pub struct DataMatrix {
    /// Corrected data codewords, padding included
    pub data: Vec<u8>,
    /// Decoded text
    pub content: String,
    /// Symbol size the grid matched
    pub size: SymbolSize,
    /// An FNC1 codeword marked the payload as GS1
    pub gs1: bool,
    /// Codewords repaired by Reed-Solomon
    pub corrected_errors: usize,
    /// Codeword-0 values skipped while interpreting the data
    pub null_codewords: usize,
    /// Finder modules that disagreed with the expected pattern
    pub finder_mismatches: usize,
    /// Module grid as received
    pub modules: ModuleGrid,
}

impl DataMatrix {
    /// True when decoding needed no repairs and raised no integrity flags
    pub fn is_clean(&self) -> bool {
        self.corrected_errors == 0 && self.null_codewords == 0 && self.finder_mismatches == 0
    }
}
