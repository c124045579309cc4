//! SMTX - Sparse Matrix Text Format Implementation
//!
//! This library provides file persistence and a command line surface for
//! sparse matrices in the coordinate text format.
//!
//! ## Architecture
//!
//! SMTX follows a clean specification/implementation separation:
//!
//! - **smtx-core**: Matrix storage, arithmetic, and pure line parsing (no I/O)
//! - **smtx**: Text-file reading and writing plus the interactive CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{mul, read_matrix, write_matrix};
//!
//! fn example() -> Result<(), smtx::Error> {
//!     let lhs = read_matrix("a.txt")?;
//!     let rhs = read_matrix("b.txt")?;
//!     let product = mul(&lhs, &rhs)?;
//!     write_matrix("result.txt", &product)?;
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 1, 5)
//! (1, 2, -8)
//! ```
//!
//! Only non-zero entries are persisted, sorted by row then column. Blank
//! lines are skipped on read; the first malformed line aborts the load.

// Re-export core storage, arithmetic, and parsing
pub use smtx_core::{
    // Matrix type
    SparseMatrix,
    // Arithmetic operations
    add, mul, sub,
    // Core error handling
    MatrixError,
    // Pure line parsers
    parse_dimension, parse_entry,
};

// Implementation modules
pub mod error;
pub mod text;

// Public exports
pub use error::Error;
pub use text::{read_matrix, write_matrix};
