//! Error types for multi-fidelity evaluation.

use crate::error_functions::ErrorFunction;
use math_mo_problems::ProblemError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a multi-fidelity problem.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FidelityError {
    /// The wrapped problem rejected the batch or its definition.
    #[error(transparent)]
    Problem(#[from] ProblemError),

    /// Requested level is not in the calibration table of the active error function.
    #[error(
        "unknown fidelity level {level} for objective f{} with error function {error_function} (calibrated levels: 0..={max_level})",
        .objective + 1
    )]
    UnknownFidelityLevel {
        /// Zero-based objective index
        objective: usize,
        /// The requested level
        level: u32,
        /// Active error function
        error_function: ErrorFunction,
        /// Highest calibrated level
        max_level: u32,
    },

    /// The active error function has no calibration for this problem, so only
    /// level 0 can be requested.
    #[error("error function {error_function} is not calibrated for {problem}")]
    Uncalibrated {
        /// Active error function
        error_function: ErrorFunction,
        /// Problem name
        problem: String,
    },

    /// Calibration table and problem disagree on the objective count.
    #[error("calibration table {table} has {expected} objective scales, problem {problem} has {got} objectives")]
    CalibrationMismatch {
        /// Calibration table name
        table: String,
        /// Problem name
        problem: String,
        /// Objective scales in the table
        expected: usize,
        /// Objectives of the problem
        got: usize,
    },

    /// Fidelity request names an objective the problem does not have.
    #[error("objective index {objective} out of range for a problem with {n_obj} objectives")]
    ObjectiveOutOfRange {
        /// Zero-based objective index
        objective: usize,
        /// Number of objectives
        n_obj: usize,
    },

    /// Position-anchored resolution error used without a baseline vector.
    #[error("error function {0} requires a baseline vector")]
    MissingBaseline(ErrorFunction),

    /// Baseline vector length differs from the variable count.
    #[error("baseline dimension mismatch: expected {expected}, got {got}")]
    BaselineDimension {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        got: usize,
    },

    /// Name does not match any error function.
    #[error("unknown error function: {0}")]
    UnknownErrorFunction(String),

    /// Name does not match any multi-fidelity problem.
    #[error("unknown multi-fidelity problem: {0}")]
    UnknownProblem(String),

    /// A fidelity request could not be parsed.
    #[error("invalid fidelity request '{0}'")]
    InvalidRequest(String),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized `Result` type for multi-fidelity operations.
pub type Result<T> = std::result::Result<T, FidelityError>;

impl FidelityError {
    /// Returns `true` if the fidelity request itself is at fault.
    ///
    /// This includes `UnknownFidelityLevel`, `Uncalibrated`,
    /// `ObjectiveOutOfRange` and `InvalidRequest`.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            FidelityError::UnknownFidelityLevel { .. }
                | FidelityError::Uncalibrated { .. }
                | FidelityError::ObjectiveOutOfRange { .. }
                | FidelityError::InvalidRequest(_)
        )
    }

    /// Returns `true` if the sample batch has the wrong number of columns.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, FidelityError::Problem(e) if e.is_shape_error())
    }
}
