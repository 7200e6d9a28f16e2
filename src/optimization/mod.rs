//! optimization — variational angle tuning and its error surface.
//!
//! Purpose
//! -------
//! Provide the classical half of the QAOA loop: given a parameter set and a
//! circuit evaluator, search for angles that minimize the expectation value
//! and report the result in a solver-agnostic form.
//!
//! Key behaviors
//! -------------
//! - Expose [`variational::minimize`] together with its configuration
//!   ([`variational::OptimOptions`], [`variational::Tolerances`]) and result
//!   ([`variational::OptimOutcome`]).
//! - Normalize configuration issues, evaluator failures, parametrization
//!   errors and backend solver errors into a single enum
//!   ([`errors::OptError`]) with a common result alias
//!   ([`errors::OptResult`]).
//!
//! Conventions
//! -----------
//! - Public entrypoints that can fail return `OptResult<T>`; callers never
//!   see raw argmin errors.
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`.

pub mod errors;
pub mod variational;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use qaoa_params::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::variational::prelude::*;
}
