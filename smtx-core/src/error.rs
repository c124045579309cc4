//! Error types for sparse matrix operations

/// Errors that can occur while parsing or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Malformed `rows=`/`cols=` header line
    InvalidHeader,
    /// Malformed `(row, col, value)` data line
    InvalidEntry,
    /// Multiplication with incompatible inner dimensions
    DimensionMismatch { lhs_cols: usize, rhs_rows: usize },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidHeader | MatrixError::InvalidEntry => {
                write!(f, "Input file has wrong format")
            }
            MatrixError::DimensionMismatch { lhs_cols, rhs_rows } => {
                write!(
                    f,
                    "Matrix multiplication is not possible: left matrix has {lhs_cols} columns, right matrix has {rhs_rows} rows"
                )
            }
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
