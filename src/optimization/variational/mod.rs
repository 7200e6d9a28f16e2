//! variational — argmin-powered tuning of QAOA angles.
//!
//! Purpose
//! -------
//! Close the variational loop around a [`ParameterSet`]: a caller-provided
//! circuit evaluator turns expanded angles into an expectation value, and
//! this module searches the raw vector that minimizes it. Callers implement
//! [`ExpectationEvaluator`] and invoke [`minimize`].
//!
//! Key behaviors
//! -------------
//! - Bridge evaluators into argmin via [`adapter::ArgMinAdapter`], which maps
//!   raw vectors to [`ExpandedAngles`] through a scratch copy of the
//!   parameter set and records every expectation value.
//! - Run either Nelder–Mead (default) or L-BFGS with a Hager–Zhang or
//!   More–Thuente line search, built in [`builders`] and executed in [`run`].
//! - Optionally project every proposal into the Extended periodicity box.
//! - Normalize results into an [`OptimOutcome`] with the evaluation history.
//!
//! Invariants & assumptions
//! ------------------------
//! - The driver always *minimizes* the expectation value.
//! - Evaluators see only [`ExpandedAngles`], never raw vectors.
//! - Gradients are finite differences of the expectation; evaluators do not
//!   provide derivatives.
//! - Options ([`Tolerances`], [`OptimOptions`]) are validated on
//!   construction.
//!
//! Conventions
//! -----------
//! - Errors bubble up as [`OptResult<T>`](crate::optimization::errors::OptResult);
//!   parametrization failures arrive wrapped in
//!   `OptError::Parametrization`.
//! - Progress is reported through `tracing` events; the per-iteration slog
//!   observer is attached only with the `obs_slog` feature and
//!   `OptimOptions::verbose`.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover adapter routing and projection, builder
//!   wiring, option validation, and toy end-to-end solves in [`api`].
//!
//! [`ParameterSet`]: crate::parametrization::ParameterSet
//! [`ExpandedAngles`]: crate::parametrization::ExpandedAngles

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::traits::{
    ExpectationEvaluator, LineSearcher, OptimOptions, OptimOutcome, SolverChoice, Tolerances,
};
pub use self::types::{
    Cost, DEFAULT_LBFGS_MEM, DEFAULT_SIMPLEX_STEP, FnEvalMap, Grad, Theta,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use qaoa_params::optimization::variational::prelude::*;
//
// to import the main driver surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::traits::{
        ExpectationEvaluator, LineSearcher, OptimOptions, OptimOutcome, SolverChoice, Tolerances,
    };
    pub use super::types::{Cost, Grad, Theta};
}
