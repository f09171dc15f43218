use thiserror::Error;

/// Errors returned by the index builders and the labeler.
///
/// Every variant except [`Error::Incomplete`] describes invalid input and is
/// raised before any clustering work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Dataset is empty and the caller disallowed empty input.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A point (or the tolerance vector) has the wrong number of components.
    #[error("dimension mismatch at point {index}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Index of the offending point.
        index: usize,
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at point {index}, axis {axis}")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        index: usize,
        /// Axis holding the bad value.
        axis: usize,
    },

    /// The configured step budget ran out before every point was labeled.
    #[error("clustering stopped after {steps} range queries")]
    Incomplete {
        /// Range queries performed before stopping.
        steps: usize,
    },
}

impl Error {
    /// True for the input-validation causes.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::Incomplete { .. })
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = Error::DimensionMismatch {
            index: 3,
            expected: 2,
            found: 1,
        };
        assert_eq!(
            e.to_string(),
            "dimension mismatch at point 3: expected 2, found 1"
        );

        let e = Error::InvalidParameter {
            name: "tolerance",
            message: "components must be non-negative",
        };
        assert_eq!(
            e.to_string(),
            "invalid parameter tolerance: components must be non-negative"
        );
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(Error::EmptyInput.is_invalid_input());
        assert!(Error::NonFiniteCoordinate { index: 0, axis: 1 }.is_invalid_input());
        assert!(!Error::Incomplete { steps: 10 }.is_invalid_input());
    }
}
