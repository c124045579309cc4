//! Text-file reader and writer for the coordinate format
//!
//! This module implements the file boundary over the pure parsers in
//! `smtx-core`: a two-line `rows=`/`cols=` header followed by one
//! `(row, col, value)` line per non-zero entry.

use crate::error::Error;
use smtx_core::{parse_dimension, parse_entry, MatrixError, SparseMatrix};
use std::{fs, io, path::Path};

/// Load a matrix from a coordinate text file
///
/// Dimensions come from the header; entries are applied in file order, so
/// a later duplicate coordinate overwrites an earlier one. Blank lines are
/// skipped, and the first malformed line aborts the whole load. A missing
/// file maps to [`Error::FileNotFound`] carrying the path; every other
/// I/O failure is propagated unchanged.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix, Error> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        Err(err) => return Err(Error::Io(err)),
    };

    let mut lines = content.lines();
    let rows_line = lines.next().ok_or(MatrixError::InvalidHeader)?;
    let cols_line = lines.next().ok_or(MatrixError::InvalidHeader)?;
    let rows = parse_dimension(rows_line, "rows")?;
    let cols = parse_dimension(cols_line, "cols")?;

    let mut matrix = SparseMatrix::new(rows, cols);
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (row, col, value) = parse_entry(line)?;
        matrix.set(row, col, value);
    }
    Ok(matrix)
}

/// Save a matrix in canonical form, creating or overwriting the file
///
/// Entries are written sorted by row then column, with `, ` separators.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<(), Error> {
    fs::write(path, matrix.to_string()).map_err(Error::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_basic_file() {
        let file = file_with("rows=3\ncols=3\n(0, 1, 5)\n(1, 2, -8)\n");
        let matrix = read_matrix(file.path()).unwrap();
        assert_eq!(matrix.dimensions(), (3, 3));
        assert_eq!(matrix.get(0, 1), 5);
        assert_eq!(matrix.get(1, 2), -8);
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let file = file_with("rows=2\ncols=2\n\n(0, 0, 1)\n\n\n(1, 1, 2)\n");
        let matrix = read_matrix(file.path()).unwrap();
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_read_duplicate_coordinate_last_wins() {
        let file = file_with("rows=2\ncols=2\n(0, 0, 1)\n(0, 0, 9)\n");
        let matrix = read_matrix(file.path()).unwrap();
        assert_eq!(matrix.get(0, 0), 9);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_read_zero_value_entry_not_stored() {
        let file = file_with("rows=2\ncols=2\n(0, 0, 5)\n(0, 0, 0)\n");
        let matrix = read_matrix(file.path()).unwrap();
        assert_eq!(matrix.get(0, 0), 0);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_matrix("no/such/matrix.txt").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert!(err.to_string().contains("no/such/matrix.txt"));
    }

    #[test]
    fn test_read_bad_second_header_line() {
        let file = file_with("rows=2\ncolumns=2\n");
        let err = read_matrix(file.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(MatrixError::InvalidHeader)
        ));
    }

    #[test]
    fn test_read_missing_header_line() {
        let file = file_with("rows=2\n");
        assert!(matches!(
            read_matrix(file.path()),
            Err(Error::Format(MatrixError::InvalidHeader))
        ));
    }

    #[test]
    fn test_read_bad_data_line_aborts() {
        let file = file_with("rows=2\ncols=2\n(0, 0, 1)\nnot an entry\n(1, 1, 2)\n");
        assert!(matches!(
            read_matrix(file.path()),
            Err(Error::Format(MatrixError::InvalidEntry))
        ));
    }

    #[test]
    fn test_write_canonical_form() {
        let mut matrix = SparseMatrix::new(3, 3);
        matrix.set(1, 2, -8);
        matrix.set(0, 1, 5);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_matrix(&path, &matrix).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "rows=3\ncols=3\n(0, 1, 5)\n(1, 2, -8)\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let mut matrix = SparseMatrix::new(10, 7);
        matrix.set(0, 0, 1);
        matrix.set(9, 6, -42);
        matrix.set(4, 3, 1000);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.txt");
        write_matrix(&path, &matrix).unwrap();
        assert_eq!(read_matrix(&path).unwrap(), matrix);
    }
}
