//! File-level error type for matrix I/O

use smtx_core::MatrixError;
use std::path::PathBuf;

/// Errors that can occur while loading or saving a matrix file
#[derive(Debug)]
pub enum Error {
    /// Malformed header or data line
    Format(MatrixError),
    /// The given path does not resolve to a readable file
    FileNotFound(PathBuf),
    /// Any other underlying I/O failure, propagated unchanged
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Format(err) => write!(f, "{err}"),
            Error::FileNotFound(path) => write!(f, "File {} not found.", path.display()),
            Error::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Format(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::FileNotFound(_) => None,
        }
    }
}

impl From<MatrixError> for Error {
    fn from(err: MatrixError) -> Self {
        Error::Format(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message_echoes_path() {
        let err = Error::FileNotFound(PathBuf::from("missing/matrix.txt"));
        assert_eq!(err.to_string(), "File missing/matrix.txt not found.");
    }

    #[test]
    fn test_format_message_forwarded() {
        let err = Error::from(MatrixError::InvalidEntry);
        assert_eq!(err.to_string(), "Input file has wrong format");
    }
}
