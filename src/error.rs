use thiserror::Error;

/// Errors produced while encoding or decoding a Data Matrix symbol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DmtxError {
    /// No ECC200 table entry has these dimensions
    #[error("unsupported symbol size {rows}x{cols}")]
    UnsupportedSymbolSize {
        /// Rows of the offending grid
        rows: usize,
        /// Columns of the offending grid
        cols: usize,
    },
    /// The payload needs more data codewords than the largest symbol holds
    #[error("data too long: {codewords} codewords, largest symbol holds {capacity}")]
    DataTooLong {
        /// Data codewords required by the payload
        codewords: usize,
        /// Capacity of the largest symbol
        capacity: usize,
    },
    /// Division by the zero element of GF(256)
    #[error("division by zero in GF(256)")]
    DivisionByZero,
    /// Reed-Solomon correction could not produce a valid codeword
    #[error("uncorrectable error: {reason}")]
    UncorrectableError {
        /// Which check failed
        reason: &'static str,
    },
    /// A codeword switches to a compaction mode that is not implemented
    #[error("unsupported mode codeword {codeword} at data position {position}")]
    UnsupportedMode {
        /// The codeword value
        codeword: u8,
        /// Index in the data codewords
        position: usize,
    },
    /// The payload contains a character ASCII mode cannot carry
    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter {
        /// The rejected character
        character: char,
        /// Character index in the payload
        position: usize,
    },
    /// A textual grid could not be parsed
    #[error("malformed grid: {reason}")]
    MalformedGrid {
        /// What was wrong with the input
        reason: String,
    },
}

impl DmtxError {
    pub(crate) fn uncorrectable(reason: &'static str) -> Self {
        DmtxError::UncorrectableError { reason }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DmtxError>;
