/// Zig-zag placement of codeword bits into the data region
///
/// Module rows are walked pairwise from the bottom up; within a pair, columns
/// run right to left and each column visits the lower row before the upper one.
/// The encoder and decoder both walk this exact order and stop at the same bit
/// budget, so they stay inverses for every symbol size.
use super::finder::is_finder;
use super::tables::SymbolSize;
use crate::models::ModuleGrid;

/// Data module coordinates `(row, col)` in placement order
pub fn placement_order(size: &SymbolSize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(size.data_region_modules());
    let row_range = 1..=size.rows - 2;
    let col_range = 1..=size.cols - 2;

    for y in (1..=size.rows - 2).rev().step_by(2) {
        for x in (0..size.cols).rev() {
            for yy in [y, y - 1] {
                if col_range.contains(&x) && row_range.contains(&yy) && !is_finder(size, yy, x) {
                    order.push((yy, x));
                }
            }
        }
    }

    order
}

/// Write codeword bits, MSB first, into the data modules of `grid`.
/// Returns the number of bits placed.
pub fn place_codewords(grid: &mut ModuleGrid, size: &SymbolSize, codewords: &[u8]) -> usize {
    let budget = (codewords.len() * 8).min(size.bit_budget());
    let mut placed = 0;

    for (bit_index, (row, col)) in placement_order(size).into_iter().take(budget).enumerate() {
        let codeword = codewords[bit_index / 8];
        let bit = (codeword >> (7 - bit_index % 8)) & 1 == 1;
        grid.set(row, col, bit);
        placed += 1;
    }

    placed
}

/// Read data module values in placement order, up to the symbol's bit budget
pub fn read_bits(grid: &ModuleGrid, size: &SymbolSize) -> Vec<bool> {
    placement_order(size)
        .into_iter()
        .take(size.bit_budget())
        .map(|(row, col)| grid.get(row, col))
        .collect()
}
