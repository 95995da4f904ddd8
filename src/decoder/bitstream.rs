/// Packing of placement-order bits into codewords
use crate::geometry::SymbolSize;

/// Pack bits MSB first. A trailing partial byte keeps its bits in the high
/// positions with the low bits zero.
pub fn bits_to_codewords(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (j, &bit)| byte | ((bit as u8) << (7 - j)))
        })
        .collect()
}

/// Codeword stream for `size`, zero-filled when the data region ran out
/// before the bit budget.
pub fn codeword_stream(bits: &[bool], size: &SymbolSize) -> Vec<u8> {
    let mut codewords = bits_to_codewords(bits);
    codewords.resize(size.total_codewords(), 0);
    codewords
}
