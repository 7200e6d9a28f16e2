//! variational::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the numeric types and solver aliases used by the variational
//! driver so the rest of the code stays agnostic to `ndarray` and argmin
//! generics.
//!
//! Conventions
//! -----------
//! - `Theta` is the raw parameter vector of a
//!   [`ParameterSet`](crate::parametrization::ParameterSet).
//! - `Cost` is the expectation value being minimized.
//! - `DEFAULT_LBFGS_MEM` and `DEFAULT_SIMPLEX_STEP` are the fallbacks used
//!   when options leave them unset.
//!
//! Testing notes
//! -------------
//! - Aliases and constants only; exercised by the builder and runner tests.
use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    neldermead::NelderMead,
    quasinewton::LBFGS,
};
use ndarray::Array1;
use std::collections::HashMap;

/// Raw parameter vector handed to the solver.
pub type Theta = Array1<f64>;

/// Gradient of the expectation with respect to `Theta`.
pub type Grad = Array1<f64>;

/// Scalar objective value: the expectation returned by the evaluator.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default history size (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Default offset of the initial Nelder–Mead simplex vertices.
pub const DEFAULT_SIMPLEX_STEP: f64 = 0.1;

/// Hager–Zhang line search specialized to this crate’s numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

/// More–Thuente line search specialized to this crate’s numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS solver wired to the Hager–Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Theta, Grad, Cost>;

/// L-BFGS solver wired to the More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;

/// Derivative-free Nelder–Mead solver over raw vectors.
pub type Simplex = NelderMead<Theta, Cost>;
