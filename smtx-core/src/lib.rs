#![no_std]

//! SMTX Core - Sparse Matrix Text Format Definitions
//!
//! This crate provides the map-backed sparse matrix type, the pure line
//! parsers for the coordinate text format, and the add/sub/mul operations.
//! No I/O lives here; file access is provided by the `smtx` crate.

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod ops;
pub mod parse;

pub use error::*;
pub use matrix::*;
pub use ops::*;
pub use parse::*;
