use super::tables::SymbolSize;
use crate::models::ModuleGrid;

/// True for modules on the outer ring of the symbol
pub fn is_finder(size: &SymbolSize, row: usize, col: usize) -> bool {
    row == 0 || col == 0 || row == size.rows - 1 || col == size.cols - 1
}

/// Expected colour of a finder module: solid bottom row and left column,
/// alternating top row (dark on even columns) and right column (dark on odd rows).
pub fn expected_finder(size: &SymbolSize, row: usize, col: usize) -> bool {
    if row == size.rows - 1 || col == 0 {
        true
    } else if row == 0 {
        col % 2 == 0
    } else if col == size.cols - 1 {
        (row + 1) % 2 == 0
    } else {
        false
    }
}

/// Write the finder pattern into `grid`
pub fn stamp_finder(grid: &mut ModuleGrid, size: &SymbolSize) {
    for col in 0..size.cols {
        grid.set(0, col, expected_finder(size, 0, col));
        grid.set(size.rows - 1, col, expected_finder(size, size.rows - 1, col));
    }
    for row in 0..size.rows {
        grid.set(row, 0, expected_finder(size, row, 0));
        grid.set(row, size.cols - 1, expected_finder(size, row, size.cols - 1));
    }
}

/// Count finder modules that disagree with the expected pattern
pub fn finder_mismatches(grid: &ModuleGrid, size: &SymbolSize) -> usize {
    let mut mismatches = 0;
    for row in 0..size.rows {
        for col in 0..size.cols {
            if is_finder(size, row, col) && grid.get(row, col) != expected_finder(size, row, col) {
                mismatches += 1;
            }
        }
    }
    mismatches
}
