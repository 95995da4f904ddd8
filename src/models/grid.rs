use crate::error::{DmtxError, Result};
use std::fmt;

/// Row-major, bit-packed grid of symbol modules (true = dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl ModuleGrid {
    /// Create an all-light grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; (rows * cols).div_ceil(8)],
        }
    }

    /// Build a grid from a row-major slice of modules
    pub fn from_modules(modules: &[bool], cols: usize) -> Result<Self> {
        if cols == 0 || modules.len() % cols != 0 {
            return Err(DmtxError::MalformedGrid {
                reason: format!("{} modules do not split into rows of {}", modules.len(), cols),
            });
        }
        let mut grid = Self::new(modules.len() / cols, cols);
        for (i, &dark) in modules.iter().enumerate() {
            grid.set(i / cols, i % cols, dark);
        }
        Ok(grid)
    }

    /// Build a grid from nested rows
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(DmtxError::MalformedGrid {
                    reason: format!("row {} has {} modules, expected {}", row, values.len(), cols),
                });
            }
            for (col, &dark) in values.iter().enumerate() {
                grid.set(row, col, dark);
            }
        }
        Ok(grid)
    }

    /// Parse lines of `1`/`0` (or `#`/`.`); blank lines are ignored.
    pub fn parse_bits(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|c| match c {
                    '1' | '#' => Ok(true),
                    '0' | '.' => Ok(false),
                    other => Err(DmtxError::MalformedGrid {
                        reason: format!("unexpected {:?} on line {}", other, line_no + 1),
                    }),
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Module at (row, col); out of range reads as light
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let index = row * self.cols + col;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set module at (row, col); out of range is ignored
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let index = row * self.cols + col;
        if dark {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let index = row * self.cols + col;
        self.data[index / 8] ^= 1 << (index % 8);
    }

    pub fn dark_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Row-major copy of every module
    pub fn to_modules(&self) -> Vec<bool> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| self.get(row, col)))
            .collect()
    }
}

impl Default for ModuleGrid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for ModuleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                f.write_str(if self.get(row, col) { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
