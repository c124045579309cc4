//! Map-backed sparse matrix storage
//!
//! A matrix is its declared dimensions plus a coordinate-to-value map that
//! never holds a zero: absence of a coordinate means zero, and writing a
//! zero removes the coordinate.

use alloc::vec::Vec;
use hashbrown::HashMap;

/// Sparse matrix over signed integer values
///
/// Coordinates are not checked against the declared dimensions; reads
/// outside them return 0 and writes outside them are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of non-zero elements
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix has no non-zero elements
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value at a position, 0 when no entry is stored there
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Set the value at a position
    ///
    /// Setting 0 removes any stored entry for the coordinate, preserving
    /// the invariant that the map only holds non-zero values.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        if value == 0 {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Iterate over stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), i64)> + '_ {
        self.entries.iter().map(|(&coord, &value)| (coord, value))
    }

    /// Stored entries sorted ascending by row, then by column
    pub fn sorted_entries(&self) -> Vec<(usize, usize, i64)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
            .collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }
}

/// Renders the canonical text form: the two header lines followed by one
/// `(row, col, value)` line per entry in row-major order.
impl core::fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "rows={}", self.rows)?;
        writeln!(f, "cols={}", self.cols)?;
        for (row, col, value) in self.sorted_entries() {
            writeln!(f, "({row}, {col}, {value})")?;
        }
        Ok(())
    }
}
