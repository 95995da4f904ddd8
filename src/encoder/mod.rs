//! Data Matrix encoder
//!
//! Payload -> ASCII codewords -> padded data region -> Reed-Solomon stream
//! -> module grid with finder pattern and zig-zag data placement.

use crate::ecc::ReedSolomonEncoder;
use crate::error::Result;
use crate::geometry::finder::stamp_finder;
use crate::geometry::placement::place_codewords;
use crate::geometry::SymbolSize;
use crate::models::ModuleGrid;
use crate::modes::ascii::AsciiEncoder;
use crate::modes::{FNC1, PAD};

/// Data codewords for `payload`, FNC1 prefix included, before padding
pub fn encode_codewords(payload: &str) -> Result<Vec<u8>> {
    let mut codewords = Vec::with_capacity(payload.len() + 1);
    if AsciiEncoder::is_gs1(payload) {
        codewords.push(FNC1);
    }
    codewords.extend(AsciiEncoder::encode(payload)?);
    Ok(codewords)
}

/// Full data + error correction stream for `payload` and the chosen size
pub fn encode_message(payload: &str) -> Result<(Vec<u8>, &'static SymbolSize)> {
    let mut codewords = encode_codewords(payload)?;
    let size = SymbolSize::for_capacity(codewords.len())?;
    codewords.resize(size.data_cw, PAD);
    let message = ReedSolomonEncoder::new(size.ec_cw).encode(&codewords);
    Ok((message, size))
}

/// Encode `payload` and also return the symbol size used
pub fn encode_with_size(payload: &str) -> Result<(ModuleGrid, &'static SymbolSize)> {
    let (message, size) = encode_message(payload)?;

    let mut grid = ModuleGrid::new(size.rows, size.cols);
    stamp_finder(&mut grid, size);
    place_codewords(&mut grid, size, &message);

    Ok((grid, size))
}

/// Encode `payload` into an ECC200 module grid
pub fn encode(payload: &str) -> Result<ModuleGrid> {
    encode_with_size(payload).map(|(grid, _)| grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DmtxError;
    use crate::geometry::finder::finder_mismatches;

    #[test]
    fn test_encode_codewords() {
        assert_eq!(encode_codewords("Hi"), Ok(vec![73, 106]));
        assert_eq!(encode_codewords("(01)"), Ok(vec![FNC1, 41, 49, 50, 42]));
    }

    #[test]
    fn test_encode_message_pads() {
        let (message, size) = encode_message("A").unwrap();
        assert_eq!((size.rows, size.cols), (10, 10));
        assert_eq!(message.len(), 8);
        assert_eq!(&message[..3], &[66, PAD, PAD]);
    }

    #[test]
    fn test_encode_picks_size() {
        let (grid, size) = encode_with_size("Hello World").unwrap();
        assert_eq!(size.data_cw, 12);
        assert_eq!((grid.rows(), grid.cols()), (16, 16));
        assert_eq!(finder_mismatches(&grid, size), 0);
    }

    #[test]
    fn test_encode_too_long() {
        let payload = "x".repeat(1559);
        assert_eq!(
            encode(&payload),
            Err(DmtxError::DataTooLong {
                codewords: 1559,
                capacity: 1558
            })
        );
        assert!(encode(&"x".repeat(1558)).is_ok());
    }

    #[test]
    fn test_encode_rejects_non_ascii() {
        assert!(matches!(
            encode("\u{fc}ber"),
            Err(DmtxError::UnsupportedCharacter { position: 0, .. })
        ));
    }
}
