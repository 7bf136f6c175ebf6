//! Error types for rsactivations

use pyo3::exceptions::{PyIndexError, PyTypeError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

use crate::numeric::Kind;

/// rsactivations error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument's type is outside the accepted set.
    #[error("expected one of ({expected}), got {actual}")]
    TypeMismatch {
        /// Name of the type that was received.
        actual: String,
        /// The accepted set the value was checked against.
        expected: String,
    },

    /// A softmax index does not address an element of the distribution.
    #[error("index {index} out of range for distribution of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// No activation function is registered under this name.
    #[error("unknown activation function: {0}")]
    UnknownActivation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn mismatch(actual: impl Into<String>, expected: &[Kind]) -> Self {
        let expected = expected.iter().map(Kind::to_string).collect::<Vec<_>>().join(", ");
        Error::TypeMismatch { actual: actual.into(), expected }
    }
}

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        match err {
            Error::TypeMismatch { .. } => PyTypeError::new_err(err.to_string()),
            Error::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
            Error::UnknownActivation(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_lists_expected_kinds() {
        let err = Error::mismatch("str", &[Kind::Int, Kind::Float, Kind::Float16]);
        assert_eq!(err.to_string(), "expected one of (int, float, numpy.float16), got str");
    }

    #[test]
    fn test_index_message() {
        let err = Error::IndexOutOfRange { index: -4, len: 3 };
        assert_eq!(err.to_string(), "index -4 out of range for distribution of length 3");
    }

    #[test]
    fn test_unknown_activation_message() {
        let err = Error::UnknownActivation("swish".into());
        assert_eq!(err.to_string(), "unknown activation function: swish");
    }
}
