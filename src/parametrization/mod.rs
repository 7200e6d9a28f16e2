//! parametrization — compact QAOA angle encodings and their expansion.
//!
//! Purpose
//! -------
//! Translate between optimizer-facing raw vectors and the per-timestep,
//! per-term rotation angles a circuit evaluator consumes. Four encodings
//! are supported:
//!
//! - **Standard**: one β and one γ per timestep ([`StandardParams`]).
//! - **Extended**: one angle per qubit / term per timestep ([`ExtendedParams`]).
//! - **Annealing**: a schedule `s_j ∈ [0, 1]` and a fixed total time
//!   ([`AnnealingParams`]).
//! - **Fourier**: `q` cosine/sine coefficients ([`FourierParams`]).
//!
//! [`ParameterSet`] wraps all four behind one round-trip contract.
//!
//! Key behaviors
//! -------------
//! - Hyperparameters (register, nonzero terms, `p`, `q`) are derived once
//!   from a [`CostSpecification`](crate::cost::CostSpecification) and never
//!   change; only the variable parameters are updated.
//! - `raw()` / `update_from_raw()` round-trip exactly; failed updates leave
//!   state untouched.
//! - Linear-ramp initializers provide heuristic starting points.
//! - Extended parameters expose periodicity box constraints.
//!
//! Invariants & assumptions
//! ------------------------
//! - `p >= 1` for every variant; `1 <= q <= p` for Fourier.
//! - Raw vectors are finite.
//! - No global state: every call receives what it needs explicitly.
//!
//! Downstream usage
//! ----------------
//! - Bounded or unbounded optimizers drive `raw()` / `update_from_raw()`
//!   directly, or use [`crate::optimization::variational::minimize`].
//! - Circuit evaluators consume [`ExpandedAngles`].
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each container; cross-variant contracts are
//!   tested in `params`, and the full pipeline in `tests/`.

pub mod annealing;
pub mod core;
pub mod errors;
pub mod extended;
pub mod fourier;
pub mod params;
pub mod standard;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::annealing::AnnealingParams;
pub use self::core::{
    angles::{ConstraintList, ExpandedAngles, SharedAngles},
    hyperparams::{Hyperparameters, derive_hyperparameters},
    options::{DEFAULT_TIME_STEP, RampOptions},
};
pub use self::errors::{ParamError, ParamErrorKind, ParamResult};
pub use self::extended::ExtendedParams;
pub use self::fourier::FourierParams;
pub use self::params::{ParameterSet, ParametrizationKind, Variant};
pub use self::standard::StandardParams;

/// Convenience imports for building and expanding parameter sets.
pub mod prelude {
    pub use super::{
        AnnealingParams, ExpandedAngles, ExtendedParams, FourierParams, Hyperparameters,
        ParamError, ParameterSet, ParametrizationKind, RampOptions, StandardParams, Variant,
    };
    pub use crate::cost::CostSpecification;
}
