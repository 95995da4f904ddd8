use crate::error::{DmtxError, Result};

/// One ECC200 symbol size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolSize {
    /// Module rows, finder border included
    pub rows: usize,
    /// Module columns, finder border included
    pub cols: usize,
    /// Data codewords
    pub data_cw: usize,
    /// Error correction codewords
    pub ec_cw: usize,
}

const fn size(rows: usize, cols: usize, data_cw: usize, ec_cw: usize) -> SymbolSize {
    SymbolSize {
        rows,
        cols,
        data_cw,
        ec_cw,
    }
}

/// ISO/IEC 16022 ECC200 sizes, ascending data capacity (square first on ties)
pub static SYMBOL_SIZES: [SymbolSize; 30] = [
    size(10, 10, 3, 5),
    size(12, 12, 5, 7),
    size(14, 14, 8, 10),
    size(8, 18, 10, 10),
    size(16, 16, 12, 12),
    size(18, 18, 18, 14),
    size(8, 32, 20, 16),
    size(20, 20, 22, 18),
    size(22, 22, 30, 20),
    size(12, 26, 32, 24),
    size(24, 24, 36, 24),
    size(26, 26, 44, 28),
    size(12, 36, 44, 28),
    size(32, 32, 62, 36),
    size(16, 36, 64, 44),
    size(36, 36, 86, 42),
    size(16, 48, 98, 56),
    size(40, 40, 114, 48),
    size(44, 44, 144, 56),
    size(48, 48, 174, 68),
    size(52, 52, 204, 84),
    size(64, 64, 280, 112),
    size(72, 72, 368, 144),
    size(80, 80, 456, 192),
    size(88, 88, 576, 224),
    size(96, 96, 696, 272),
    size(104, 104, 816, 336),
    size(120, 120, 1050, 408),
    size(132, 132, 1304, 496),
    size(144, 144, 1558, 620),
];

impl SymbolSize {
    /// Smallest symbol whose data region holds `codewords` data codewords
    /// and whose module area fits the whole data + EC stream.
    pub fn for_capacity(codewords: usize) -> Result<&'static SymbolSize> {
        SYMBOL_SIZES
            .iter()
            .find(|s| s.data_cw >= codewords && s.fits_placement())
            .ok_or_else(|| DmtxError::DataTooLong {
                codewords,
                capacity: Self::max_data_codewords(),
            })
    }

    /// The table entry with exactly these dimensions
    pub fn for_dimensions(rows: usize, cols: usize) -> Result<&'static SymbolSize> {
        SYMBOL_SIZES
            .iter()
            .find(|s| s.rows == rows && s.cols == cols)
            .ok_or(DmtxError::UnsupportedSymbolSize { rows, cols })
    }

    /// Largest data capacity in the table
    pub fn max_data_codewords() -> usize {
        SYMBOL_SIZES.iter().map(|s| s.data_cw).max().unwrap_or(0)
    }

    pub fn total_codewords(&self) -> usize {
        self.data_cw + self.ec_cw
    }

    /// Bits written by the encoder and read back by the decoder
    pub fn bit_budget(&self) -> usize {
        self.total_codewords() * 8
    }

    /// Modules inside the finder border
    pub fn data_region_modules(&self) -> usize {
        (self.rows - 2) * (self.cols - 2)
    }

    /// True when every bit of the codeword stream gets its own module.
    /// Rectangular sizes fall short under the single-region layout.
    pub fn fits_placement(&self) -> bool {
        self.data_region_modules() >= self.bit_budget()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(SYMBOL_SIZES.iter().filter(|s| s.is_square()).count(), 24);
        assert_eq!(SYMBOL_SIZES.iter().filter(|s| !s.is_square()).count(), 6);
        for s in &SYMBOL_SIZES {
            assert!(s.rows >= 8 && s.cols >= 8, "{:?}", s);
            assert_eq!(s.rows % 2, 0);
            assert_eq!(s.cols % 2, 0);
        }
        for pair in SYMBOL_SIZES.windows(2) {
            assert!(pair[0].data_cw <= pair[1].data_cw);
        }
    }

    #[test]
    fn test_every_square_fits_placement() {
        for s in SYMBOL_SIZES.iter().filter(|s| s.is_square()) {
            assert!(s.fits_placement(), "{:?}", s);
        }
        for s in SYMBOL_SIZES.iter().filter(|s| !s.is_square()) {
            assert!(!s.fits_placement(), "{:?}", s);
        }
    }

    #[test]
    fn test_for_capacity_is_smallest_fit() {
        for k in 0..=SymbolSize::max_data_codewords() {
            let chosen = SymbolSize::for_capacity(k).unwrap();
            assert!(chosen.data_cw >= k);
            let smaller = SYMBOL_SIZES
                .iter()
                .filter(|s| s.fits_placement() && s.data_cw >= k)
                .all(|s| s.data_cw >= chosen.data_cw);
            assert!(smaller, "k={} chose {:?}", k, chosen);
        }
        assert_eq!(SymbolSize::for_capacity(0).unwrap().rows, 10);
        assert_eq!(SymbolSize::for_capacity(11).unwrap().rows, 16);
    }

    #[test]
    fn test_for_capacity_too_long() {
        assert_eq!(
            SymbolSize::for_capacity(1559),
            Err(DmtxError::DataTooLong {
                codewords: 1559,
                capacity: 1558
            })
        );
    }

    #[test]
    fn test_for_dimensions() {
        let s = SymbolSize::for_dimensions(8, 18).unwrap();
        assert_eq!((s.data_cw, s.ec_cw), (10, 10));
        let s = SymbolSize::for_dimensions(144, 144).unwrap();
        assert_eq!(s.total_codewords(), 2178);
        assert_eq!(
            SymbolSize::for_dimensions(18, 8),
            Err(DmtxError::UnsupportedSymbolSize { rows: 18, cols: 8 })
        );
    }
}
