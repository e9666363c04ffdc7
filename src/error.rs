//! Error types for arrangement solving.

use thiserror::Error;

/// Errors raised by matrix construction and solvers.
///
/// Every error is local to the call that produced it; a failed solve
/// leaves no cached result behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrangeError {
    /// Input rejected on construction or installation (empty, non-square,
    /// asymmetric or out-of-range matrix, malformed projection or text).
    #[error("validation error: {0}")]
    Validation(String),

    /// A solve was requested before the solver had what it needs.
    #[error("invalid state: {0}")]
    State(String),

    /// The solver has no use for the supplied input.
    #[error("{solver} does not support {operation}")]
    Unsupported {
        /// Name of the rejecting solver.
        solver: &'static str,
        /// The rejected operation.
        operation: &'static str,
    },
}

impl ArrangeError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, ArrangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ArrangeError::validation("matrix is empty").to_string(),
            "validation error: matrix is empty"
        );
        assert_eq!(
            ArrangeError::state("no matrix").to_string(),
            "invalid state: no matrix"
        );
        let err = ArrangeError::Unsupported {
            solver: "branch-and-bound",
            operation: "sorted neighbors",
        };
        assert_eq!(err.to_string(), "branch-and-bound does not support sorted neighbors");
    }
}
