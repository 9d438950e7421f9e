//! Error types for dualquat-rs.

use thiserror::Error;

/// The main error type for the algebra.
#[derive(Error, Debug)]
pub enum MathError {
    /// A `*_normalized` operation was called on a non-normalized value.
    #[error("{operation}(): {subject} must be normalized")]
    NotNormalized {
        /// Fully qualified operation name, e.g. `DualQuaternion::inverted_normalized`.
        operation: &'static str,
        /// What had to be normalized, e.g. `dual quaternion`.
        subject: &'static str,
    },

    /// Options could not be parsed or serialized.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for the algebra.
pub type MathResult<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_normalized_message() {
        let err = MathError::NotNormalized {
            operation: "DualQuaternion::inverted_normalized",
            subject: "dual quaternion",
        };
        assert_eq!(
            err.to_string(),
            "DualQuaternion::inverted_normalized(): dual quaternion must be normalized"
        );
    }
}
