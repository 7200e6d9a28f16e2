//! Errors for the variational optimizer driver.
//!
//! [`OptError`] normalizes everything that can go wrong while minimizing an
//! expectation value over a parameter set: invalid options, evaluator
//! failures, non-finite costs or gradients, parametrization errors, and
//! backend (argmin) failures. Public entry points return [`OptResult<T>`].
use crate::parametrization::errors::ParamError;
use argmin::core::{ArgminError, Error};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Gradient ----
    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- OptimOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Cost change tolerance needs to be positive and finite.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// Invalid solver name.
    InvalidSolver {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLBFGSMem {
        mem: usize,
        reason: &'static str,
    },

    /// Nelder–Mead simplex step needs to be positive and finite.
    InvalidSimplexStep {
        step: f64,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Expectation evaluator returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    /// Expectation evaluator reported a failure.
    EvaluatorFailed {
        reason: String,
    },

    // ---- Optimizer outcome ----
    /// Optimized raw parameters must be finite.
    InvalidRawHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// The solver did not report a best parameter vector.
    MissingRawHat,

    // ---- Parametrization ----
    /// Error raised by the parameter set while mapping raw vectors.
    Parametrization(ParamError),

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- OptimOptions ----
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            OptError::InvalidTolCost { tol, reason } => {
                write!(f, "Invalid cost function change tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            OptError::InvalidSolver { name, reason } => {
                write!(f, "Invalid solver '{name}': {reason}")
            }
            OptError::InvalidLBFGSMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }
            OptError::InvalidSimplexStep { step, reason } => {
                write!(f, "Invalid simplex step {step}: {reason}")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }
            OptError::EvaluatorFailed { reason } => {
                write!(f, "Expectation evaluation failed: {reason}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidRawHat { index, value, reason } => {
                write!(f, "Invalid optimized parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingRawHat => {
                write!(f, "Missing optimized parameters")
            }

            // ---- Parametrization ----
            OptError::Parametrization(err) => write!(f, "Parametrization error: {err}"),

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    /// Recover crate errors raised inside the argmin problem, then map
    /// argmin's own error kinds; anything else becomes `BackendError`.
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        let original_err = match original_err.downcast::<ParamError>() {
            Ok(param_err) => return OptError::Parametrization(param_err),
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<ParamError> for OptError {
    fn from(err: ParamError) -> Self {
        OptError::Parametrization(err)
    }
}

/// Convert an [`OptError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<OptError> for PyErr {
    fn from(err: OptError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Recovery of crate errors that travelled through `argmin::core::Error`.
    // - Mapping of argmin's own error kinds and of foreign errors.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Errors raised inside the argmin problem must come back unchanged.
    //
    // Given
    // -----
    // - An `OptError` and a `ParamError` boxed into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - The same `OptError`; the `ParamError` wrapped in `Parametrization`.
    fn from_argmin_error_recovers_crate_errors() {
        // Arrange
        let opt: Error = OptError::NonFiniteCost { value: f64::INFINITY }.into();
        let param: Error = ParamError::RawLengthMismatch { expected: 2, actual: 1 }.into();

        // Act
        let opt_back = OptError::from(opt);
        let param_back = OptError::from(param);

        // Assert
        assert_eq!(opt_back, OptError::NonFiniteCost { value: f64::INFINITY });
        assert_eq!(
            param_back,
            OptError::Parametrization(ParamError::RawLengthMismatch { expected: 2, actual: 1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Map argmin error kinds and fall back to `BackendError` otherwise.
    //
    // Given
    // -----
    // - `ArgminError::InvalidParameter` and an `std::fmt::Error`.
    //
    // Expect
    // ------
    // - `OptError::InvalidParameter` with the text; `BackendError` otherwise.
    fn from_argmin_error_maps_backend_kinds() {
        let argmin_err: Error = ArgminError::InvalidParameter { text: "tol".to_string() }.into();
        let foreign: Error = std::fmt::Error.into();

        assert_eq!(OptError::from(argmin_err), OptError::InvalidParameter { text: "tol".into() });
        assert!(matches!(OptError::from(foreign), OptError::BackendError { .. }));
    }
}
