//! Sparse matrix arithmetic
//!
//! All three operations are pure: operands are borrowed immutably and a
//! freshly built matrix is returned. Addition and subtraction perform no
//! dimension check and widen the result to the element-wise maximum of the
//! operand dimensions; only multiplication requires the inner dimensions
//! to agree.

use crate::{MatrixError, Result, SparseMatrix};
use hashbrown::HashMap;

/// Add two matrices, widening to the larger dimensions
///
/// Outer join over both supports with implicit-zero fill. Cells that sum
/// to zero are not stored.
pub fn add(lhs: &SparseMatrix, rhs: &SparseMatrix) -> SparseMatrix {
    joined(lhs, rhs, |a, b| a + b)
}

/// Subtract `rhs` from `lhs`, widening to the larger dimensions
pub fn sub(lhs: &SparseMatrix, rhs: &SparseMatrix) -> SparseMatrix {
    joined(lhs, rhs, |a, b| a - b)
}

/// Outer join over the two supports, combining paired values with `f`
fn joined(
    lhs: &SparseMatrix,
    rhs: &SparseMatrix,
    f: impl Fn(i64, i64) -> i64,
) -> SparseMatrix {
    let mut result = SparseMatrix::new(
        lhs.rows().max(rhs.rows()),
        lhs.cols().max(rhs.cols()),
    );
    for ((row, col), value) in lhs.iter() {
        result.set(row, col, f(value, rhs.get(row, col)));
    }
    for ((row, col), value) in rhs.iter() {
        if lhs.get(row, col) == 0 {
            result.set(row, col, f(0, value));
        }
    }
    result
}

/// Multiply two matrices
///
/// Fails with `DimensionMismatch` unless `lhs.cols() == rhs.rows()`. Work
/// is restricted to the structural intersection of the operands' non-zero
/// supports: for each populated row of `lhs` and populated column of
/// `rhs`, only the inner indices present on both sides contribute to the
/// cell sum, so cost scales with non-zero density rather than matrix area.
pub fn mul(lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
    if lhs.cols() != rhs.rows() {
        return Err(MatrixError::DimensionMismatch {
            lhs_cols: lhs.cols(),
            rhs_rows: rhs.rows(),
        });
    }

    let mut result = SparseMatrix::new(lhs.rows(), rhs.cols());
    if lhs.is_empty() || rhs.is_empty() {
        return Ok(result);
    }

    // Group lhs entries by row and rhs entries by column, with direct
    // inner-index lookup inside each group.
    let mut lhs_by_row: HashMap<usize, HashMap<usize, i64>> = HashMap::new();
    for ((row, col), value) in lhs.iter() {
        lhs_by_row.entry(row).or_default().insert(col, value);
    }
    let mut rhs_by_col: HashMap<usize, HashMap<usize, i64>> = HashMap::new();
    for ((row, col), value) in rhs.iter() {
        rhs_by_col.entry(col).or_default().insert(row, value);
    }

    for (&row, row_entries) in &lhs_by_row {
        for (&col, col_entries) in &rhs_by_col {
            // Probe from the smaller index set into the larger one
            let sum: i64 = if row_entries.len() <= col_entries.len() {
                row_entries
                    .iter()
                    .filter_map(|(k, &a)| col_entries.get(k).map(|&b| a * b))
                    .sum()
            } else {
                col_entries
                    .iter()
                    .filter_map(|(k, &b)| row_entries.get(k).map(|&a| a * b))
                    .sum()
            };
            if sum != 0 {
                result.set(row, col, sum);
            }
        }
    }

    Ok(result)
}
