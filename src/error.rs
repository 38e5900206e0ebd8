//! Error types for QFT construction and execution.

use thiserror::Error;

/// Errors raised while validating inputs to the transform.
///
/// Every error is produced before any amplitude is touched, so a failed call
/// never leaves a partially transformed result behind.
#[derive(Debug, Error)]
pub enum QftError {
    /// Malformed caller input: a state length that is not a power of two,
    /// an unusable qubit count, or an invalid gate operand.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A gate sequence was paired with a state or register of another size.
    #[error("dimension mismatch: gate sequence acts on {expected} qubits, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A serialized gate sequence could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QftError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

pub type Result<T> = std::result::Result<T, QftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = QftError::invalid_input("state vector length 3 is not a power of 2");
        let msg = err.to_string();
        assert!(msg.contains("invalid input"));
        assert!(msg.contains("power of 2"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = QftError::dimension_mismatch(3, 2);
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
        assert!(matches!(err, QftError::DimensionMismatch { expected: 3, actual: 2 }));
    }
}
