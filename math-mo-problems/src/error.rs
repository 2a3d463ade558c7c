//! Error types for multi-objective test problems.
//!
//! Every evaluation is a one-shot pure computation, so errors only report
//! malformed inputs or problem definitions; nothing is retried.

use thiserror::Error;

/// Errors raised while defining or evaluating a problem.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProblemError {
    /// Sample batch column count does not match the problem's variable count.
    #[error("invalid shape: expected {expected} variables per sample, got {got}")]
    InvalidShape {
        /// Declared number of variables
        expected: usize,
        /// Column count of the provided batch
        got: usize,
    },

    /// A variable bound is not finite or has `lower > upper`.
    #[error("invalid bounds for variable '{name}': lower ({lower}) > upper ({upper}) or not finite")]
    InvalidBounds {
        /// Variable name
        name: String,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Two variables share the same name.
    #[error("duplicate variable name '{name}'")]
    DuplicateVariable {
        /// The repeated name
        name: String,
    },

    /// A problem parameter is outside its valid range.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value, rendered as text
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// No problem is registered under this name.
    #[error("unknown problem: {0}")]
    UnknownProblem(String),
}

/// A specialized `Result` type for problem operations.
pub type Result<T> = std::result::Result<T, ProblemError>;

impl ProblemError {
    /// Returns `true` for shape mismatches between a batch and a problem.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, ProblemError::InvalidShape { .. })
    }

    /// Returns `true` if this error comes from a malformed problem definition.
    ///
    /// This includes `InvalidBounds`, `DuplicateVariable` and `InvalidParameter`.
    pub fn is_definition_error(&self) -> bool {
        matches!(
            self,
            ProblemError::InvalidBounds { .. }
                | ProblemError::DuplicateVariable { .. }
                | ProblemError::InvalidParameter { .. }
        )
    }
}
