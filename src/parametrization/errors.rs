//! Errors for cost specifications and QAOA parameter sets.
//!
//! This module defines a single error type, [`ParamError`], shared by the
//! cost-specification builders and every parametrization variant. Variants
//! are grouped into four families, reported by [`ParamError::kind`]:
//!
//! - **Malformed specification**: the register or the weights of a
//!   [`CostSpecification`](crate::cost::CostSpecification) are inconsistent.
//! - **Shape mismatch**: a raw vector or angle array does not have the length
//!   implied by the hyperparameters.
//! - **Unsupported variant**: an operation was invoked on a parametrization
//!   that does not define it (e.g. constraints on `Standard`).
//! - **Invalid configuration**: step counts, Fourier orders, or time
//!   parameters are out of range.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Qubits are identified by their register label, not by their position in
//!   the register.
//! - Errors are raised at the call that detects the violation and never
//!   leave partially updated state behind.
use crate::parametrization::params::Variant;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Result alias for parametrization and cost-specification operations.
pub type ParamResult<T> = Result<T, ParamError>;

/// Coarse classification of a [`ParamError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamErrorKind {
    MalformedSpec,
    ShapeMismatch,
    UnsupportedVariant,
    InvalidConfig,
}

/// Unified error type for cost specifications and parameter sets.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    // ---- Cost specification ----
    /// The register holds no qubits.
    EmptyRegister,

    /// A qubit label appears more than once in an explicit register.
    DuplicateQubit { qubit: usize },

    /// A term references a qubit that is not part of the register.
    QubitNotInRegister { qubit: usize },

    /// A pairwise term couples a qubit with itself.
    SelfCoupling { qubit: usize },

    /// A single-qubit weight is NaN/±inf.
    NonFiniteSingleWeight { qubit: usize, value: f64 },

    /// A pairwise weight is NaN/±inf.
    NonFinitePairWeight { pair: (usize, usize), value: f64 },

    /// The register is too large for enumeration or for a `u64` assignment.
    RegisterTooLarge { n_qubits: usize, max: usize },

    /// A bit assignment does not fit into the register.
    AssignmentOutOfRange { assignment: u64, n_qubits: usize },

    // ---- Shapes ----
    /// Raw vector length does not match the parameter count of the variant.
    RawLengthMismatch { expected: usize, actual: usize },

    /// Raw vector entries need to be finite.
    NonFiniteRaw { index: usize, value: f64 },

    /// An angle array handed to a constructor has the wrong shape.
    AngleShapeMismatch { name: &'static str, expected: (usize, usize), actual: (usize, usize) },

    /// Angle arrays handed to a constructor need to be finite.
    ///
    /// `index` is the row-major position of the first offending entry.
    NonFiniteAngle { name: &'static str, index: usize, value: f64 },

    // ---- Configuration ----
    /// The number of timesteps must be at least one.
    InvalidSteps { n_steps: usize, reason: &'static str },

    /// The number of Fourier components must satisfy `1 <= q <= p`.
    InvalidFourierOrder { q: usize, n_steps: usize, reason: &'static str },

    /// Time discretization must be finite and strictly positive.
    InvalidTimeStep { value: f64, reason: &'static str },

    /// Total annealing time must be finite and strictly positive.
    InvalidAnnealingTime { value: f64, reason: &'static str },

    /// Unknown parametrization name.
    UnknownVariant { name: String, reason: &'static str },

    // ---- Variant dispatch ----
    /// The operation is not defined for this parametrization.
    UnsupportedVariant { variant: Variant, operation: &'static str },
}

impl ParamError {
    /// Classify the error into one of the four families.
    pub fn kind(&self) -> ParamErrorKind {
        match self {
            ParamError::EmptyRegister
            | ParamError::DuplicateQubit { .. }
            | ParamError::QubitNotInRegister { .. }
            | ParamError::SelfCoupling { .. }
            | ParamError::NonFiniteSingleWeight { .. }
            | ParamError::NonFinitePairWeight { .. }
            | ParamError::RegisterTooLarge { .. }
            | ParamError::AssignmentOutOfRange { .. } => ParamErrorKind::MalformedSpec,
            ParamError::RawLengthMismatch { .. }
            | ParamError::NonFiniteRaw { .. }
            | ParamError::AngleShapeMismatch { .. }
            | ParamError::NonFiniteAngle { .. } => ParamErrorKind::ShapeMismatch,
            ParamError::InvalidSteps { .. }
            | ParamError::InvalidFourierOrder { .. }
            | ParamError::InvalidTimeStep { .. }
            | ParamError::InvalidAnnealingTime { .. }
            | ParamError::UnknownVariant { .. } => ParamErrorKind::InvalidConfig,
            ParamError::UnsupportedVariant { .. } => ParamErrorKind::UnsupportedVariant,
        }
    }
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Cost specification ----
            ParamError::EmptyRegister => write!(f, "Cost specification has an empty register"),
            ParamError::DuplicateQubit { qubit } => {
                write!(f, "Qubit {qubit} appears more than once in the register")
            }
            ParamError::QubitNotInRegister { qubit } => {
                write!(f, "Qubit {qubit} is referenced by a term but is not in the register")
            }
            ParamError::SelfCoupling { qubit } => {
                write!(f, "Pairwise term couples qubit {qubit} with itself")
            }
            ParamError::NonFiniteSingleWeight { qubit, value } => {
                write!(f, "Weight of single term on qubit {qubit} is {value}, must be finite")
            }
            ParamError::NonFinitePairWeight { pair, value } => {
                write!(f, "Weight of pair term on qubits {pair:?} is {value}, must be finite")
            }
            ParamError::RegisterTooLarge { n_qubits, max } => {
                write!(f, "Register of {n_qubits} qubits is too large (max {max})")
            }
            ParamError::AssignmentOutOfRange { assignment, n_qubits } => {
                write!(f, "Assignment {assignment:#b} does not fit into {n_qubits} qubits")
            }

            // ---- Shapes ----
            ParamError::RawLengthMismatch { expected, actual } => {
                write!(f, "Raw vector length mismatch: expected {expected}, actual {actual}")
            }
            ParamError::NonFiniteRaw { index, value } => {
                write!(f, "Invalid raw entry at index {index}: {value}, must be finite")
            }
            ParamError::AngleShapeMismatch { name, expected, actual } => {
                write!(f, "Shape mismatch for {name}: expected {expected:?}, actual {actual:?}")
            }
            ParamError::NonFiniteAngle { name, index, value } => {
                write!(f, "Invalid {name} entry at index {index}: {value}, must be finite")
            }

            // ---- Configuration ----
            ParamError::InvalidSteps { n_steps, reason } => {
                write!(f, "Invalid number of timesteps {n_steps}: {reason}")
            }
            ParamError::InvalidFourierOrder { q, n_steps, reason } => {
                write!(f, "Invalid Fourier order q = {q} for p = {n_steps}: {reason}")
            }
            ParamError::InvalidTimeStep { value, reason } => {
                write!(f, "Invalid time step {value}: {reason}")
            }
            ParamError::InvalidAnnealingTime { value, reason } => {
                write!(f, "Invalid annealing time {value}: {reason}")
            }
            ParamError::UnknownVariant { name, reason } => {
                write!(f, "Unknown parametrization '{name}': {reason}")
            }

            // ---- Variant dispatch ----
            ParamError::UnsupportedVariant { variant, operation } => {
                write!(f, "Operation '{operation}' is not supported by {variant} parameters")
            }
        }
    }
}

/// Convert a [`ParamError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<ParamError> for PyErr {
    fn from(err: ParamError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
