//! Core building blocks shared by every parametrization variant.
//!
//! - [`hyperparams`]: register and nonzero-weight terms of a cost specification.
//! - [`options`]: linear-ramp time discretization.
//! - [`fourier`]: cosine/sine series transforms and their exact inverses.
//! - [`angles`]: expanded per-term angles and the constraint list type.
//! - [`validation`]: shape, finiteness and configuration guards.
pub mod angles;
pub mod fourier;
pub mod hyperparams;
pub mod options;
pub mod validation;
