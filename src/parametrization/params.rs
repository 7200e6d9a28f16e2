//! ParameterSet — the tagged union over the four QAOA parametrizations.
//!
//! Purpose
//! -------
//! Give optimizers and circuit evaluators one type to work with, whatever
//! the encoding. Every variant shares the same contract:
//!
//! - `raw()` / `update_from_raw()` round-trip exactly.
//! - `n_raw()` depends only on hyperparameters (register, terms, `p`, `q`).
//! - `to_expanded_angles()` is pure and deterministic.
//!
//! Variant-specific operations ([`ParameterSet::get_constraints`] on
//! Extended, [`ParameterSet::to_standard`] on the standard-style variants)
//! fail with [`ParamError::UnsupportedVariant`] elsewhere.
//!
//! Dispatch is a plain `match` on the tag; there are no trait objects.
use crate::{
    cost::CostSpecification,
    parametrization::{
        annealing::AnnealingParams,
        core::{
            angles::{ConstraintList, ExpandedAngles},
            hyperparams::Hyperparameters,
            options::RampOptions,
        },
        errors::{ParamError, ParamResult},
        extended::ExtendedParams,
        fourier::FourierParams,
        standard::StandardParams,
    },
};
use ndarray::{Array1, ArrayView1};
use std::str::FromStr;

/// Name of a parametrization, without its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Standard,
    Extended,
    Annealing,
    Fourier,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Variant::Standard => "Standard",
            Variant::Extended => "Extended",
            Variant::Annealing => "Annealing",
            Variant::Fourier => "Fourier",
        };
        f.write_str(name)
    }
}

impl FromStr for Variant {
    type Err = ParamError;

    /// Parse a variant name, case-insensitively.
    fn from_str(s: &str) -> ParamResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "extended" => Ok(Variant::Extended),
            "annealing" => Ok(Variant::Annealing),
            "fourier" => Ok(Variant::Fourier),
            _ => Err(ParamError::UnknownVariant {
                name: s.to_string(),
                reason: "Expected one of: standard, extended, annealing, fourier.",
            }),
        }
    }
}

/// Variant plus the shape hyperparameters it needs beyond `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParametrizationKind {
    Standard,
    Extended,
    Annealing,
    /// Fourier series truncated to `q` components.
    Fourier { q: usize },
}

impl ParametrizationKind {
    pub fn variant(&self) -> Variant {
        match self {
            ParametrizationKind::Standard => Variant::Standard,
            ParametrizationKind::Extended => Variant::Extended,
            ParametrizationKind::Annealing => Variant::Annealing,
            ParametrizationKind::Fourier { .. } => Variant::Fourier,
        }
    }
}

/// A QAOA parameter set in one of four encodings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterSet {
    Standard(StandardParams),
    Extended(ExtendedParams),
    Annealing(AnnealingParams),
    Fourier(FourierParams),
}

impl ParameterSet {
    /// Zero-valued parameters of the requested kind and depth.
    ///
    /// Annealing sets use the default total time `0.7 · p`.
    pub fn empty(
        hyper: Hyperparameters, kind: ParametrizationKind, n_steps: usize,
    ) -> ParamResult<Self> {
        Ok(match kind {
            ParametrizationKind::Standard => StandardParams::empty(hyper, n_steps)?.into(),
            ParametrizationKind::Extended => ExtendedParams::empty(hyper, n_steps)?.into(),
            ParametrizationKind::Annealing => {
                let total_time = RampOptions::default().annealing_time(n_steps);
                AnnealingParams::empty(hyper, n_steps, total_time)?.into()
            }
            ParametrizationKind::Fourier { q } => FourierParams::empty(hyper, n_steps, q)?.into(),
        })
    }

    /// Linear-ramp initial guess of the requested kind.
    ///
    /// See the variant containers for the exact formulas. This is a
    /// heuristic starting point, not an optimality guarantee.
    ///
    /// # Errors
    /// - `InvalidSteps` if `n_steps == 0`.
    /// - `InvalidFourierOrder` unless `1 <= q <= n_steps` for Fourier.
    pub fn linear_ramp_init(
        spec: &CostSpecification, kind: ParametrizationKind, n_steps: usize, opts: &RampOptions,
    ) -> ParamResult<Self> {
        Ok(match kind {
            ParametrizationKind::Standard => StandardParams::linear_ramp(spec, n_steps, opts)?.into(),
            ParametrizationKind::Extended => ExtendedParams::linear_ramp(spec, n_steps, opts)?.into(),
            ParametrizationKind::Annealing => {
                AnnealingParams::linear_ramp(spec, n_steps, opts)?.into()
            }
            ParametrizationKind::Fourier { q } => {
                FourierParams::linear_ramp(spec, n_steps, q, opts)?.into()
            }
        })
    }

    pub fn variant(&self) -> Variant {
        self.kind().variant()
    }

    pub fn kind(&self) -> ParametrizationKind {
        match self {
            ParameterSet::Standard(_) => ParametrizationKind::Standard,
            ParameterSet::Extended(_) => ParametrizationKind::Extended,
            ParameterSet::Annealing(_) => ParametrizationKind::Annealing,
            ParameterSet::Fourier(ps) => ParametrizationKind::Fourier { q: ps.q() },
        }
    }

    pub fn hyperparameters(&self) -> &Hyperparameters {
        match self {
            ParameterSet::Standard(ps) => ps.hyperparameters(),
            ParameterSet::Extended(ps) => ps.hyperparameters(),
            ParameterSet::Annealing(ps) => ps.hyperparameters(),
            ParameterSet::Fourier(ps) => ps.hyperparameters(),
        }
    }

    /// Number of timesteps `p`.
    pub fn n_steps(&self) -> usize {
        match self {
            ParameterSet::Standard(ps) => ps.n_steps(),
            ParameterSet::Extended(ps) => ps.n_steps(),
            ParameterSet::Annealing(ps) => ps.n_steps(),
            ParameterSet::Fourier(ps) => ps.n_steps(),
        }
    }

    /// Expected raw-vector length.
    pub fn n_raw(&self) -> usize {
        match self {
            ParameterSet::Standard(ps) => ps.n_raw(),
            ParameterSet::Extended(ps) => ps.n_raw(),
            ParameterSet::Annealing(ps) => ps.n_raw(),
            ParameterSet::Fourier(ps) => ps.n_raw(),
        }
    }

    /// Optimizer-facing flattening of the variable parameters.
    pub fn raw(&self) -> Array1<f64> {
        match self {
            ParameterSet::Standard(ps) => ps.raw(),
            ParameterSet::Extended(ps) => ps.raw(),
            ParameterSet::Annealing(ps) => ps.raw(),
            ParameterSet::Fourier(ps) => ps.raw(),
        }
    }

    /// Overwrite the variable parameters in place.
    ///
    /// # Errors
    /// - `RawLengthMismatch` if `raw.len() != self.n_raw()`.
    /// - `NonFiniteRaw` if any entry is NaN/±inf.
    ///
    /// On error the parameters are left untouched.
    pub fn update_from_raw(&mut self, raw: ArrayView1<f64>) -> ParamResult<()> {
        match self {
            ParameterSet::Standard(ps) => ps.update_from_raw(raw),
            ParameterSet::Extended(ps) => ps.update_from_raw(raw),
            ParameterSet::Annealing(ps) => ps.update_from_raw(raw),
            ParameterSet::Fourier(ps) => ps.update_from_raw(raw),
        }
    }

    /// Per-step, per-term angles for a circuit evaluator.
    pub fn to_expanded_angles(&self) -> ExpandedAngles {
        match self {
            ParameterSet::Standard(ps) => ps.expanded_angles(),
            ParameterSet::Extended(ps) => ps.expanded_angles(),
            ParameterSet::Annealing(ps) => ps.expanded_angles(),
            ParameterSet::Fourier(ps) => ps.expanded_angles(),
        }
    }

    /// Periodicity bounds in raw order; Extended only.
    pub fn get_constraints(&self) -> ParamResult<ConstraintList> {
        match self {
            ParameterSet::Extended(ps) => Ok(ps.get_constraints()),
            other => Err(ParamError::UnsupportedVariant {
                variant: other.variant(),
                operation: "get_constraints",
            }),
        }
    }

    /// Collapse to Standard parameters with the same expansion.
    ///
    /// Extended sets generally have no Standard equivalent and are rejected.
    pub fn to_standard(&self) -> ParamResult<StandardParams> {
        match self {
            ParameterSet::Standard(ps) => Ok(ps.clone()),
            ParameterSet::Annealing(ps) => Ok(ps.to_standard()),
            ParameterSet::Fourier(ps) => Ok(ps.to_standard()),
            ParameterSet::Extended(_) => Err(ParamError::UnsupportedVariant {
                variant: Variant::Extended,
                operation: "to_standard",
            }),
        }
    }
}

impl From<StandardParams> for ParameterSet {
    fn from(ps: StandardParams) -> Self {
        ParameterSet::Standard(ps)
    }
}

impl From<ExtendedParams> for ParameterSet {
    fn from(ps: ExtendedParams) -> Self {
        ParameterSet::Extended(ps)
    }
}

impl From<AnnealingParams> for ParameterSet {
    fn from(ps: AnnealingParams) -> Self {
        ParameterSet::Annealing(ps)
    }
}

impl From<FourierParams> for ParameterSet {
    fn from(ps: FourierParams) -> Self {
        ParameterSet::Fourier(ps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parametrization::errors::ParamErrorKind;
    use approx::assert_abs_diff_eq;
    use ndarray::Array1;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The shared round-trip and shape contract across all four variants.
    // - Variant-restricted operations and their error kind.
    // - Variant name parsing.
    //
    // They intentionally DO NOT cover:
    // - Variant-specific formulas; those live next to each container.
    // -------------------------------------------------------------------------

    fn spec() -> CostSpecification {
        CostSpecification::new(vec![0, 1, 2], &[(0, -0.5)], &[((0, 1), 0.7), ((1, 2), 1.2)])
            .expect("valid spec")
    }

    fn all_kinds() -> [ParametrizationKind; 5] {
        [
            ParametrizationKind::Standard,
            ParametrizationKind::Extended,
            ParametrizationKind::Annealing,
            ParametrizationKind::Fourier { q: 2 },
            ParametrizationKind::Fourier { q: 3 },
        ]
    }

    #[test]
    // Purpose
    // -------
    // Every variant must round-trip its raw vector and report the expected length.
    //
    // Given
    // -----
    // - 3 qubits, 1 single, 2 pairs; p = 3; all kinds.
    //
    // Expect
    // ------
    // - n_raw = 6, 18, 3, 4, 6; writing a perturbed raw vector then reading
    //   it back matches within 1e-12; `update_from_raw(raw())` is a no-op.
    fn round_trip_for_every_variant() {
        let expected_len = [6, 18, 3, 4, 6];
        for (kind, n) in all_kinds().into_iter().zip(expected_len) {
            // Arrange
            let mut ps = ParameterSet::linear_ramp_init(&spec(), kind, 3, &RampOptions::default())
                .expect("valid ramp");
            let before = ps.clone();
            let target = Array1::from_shape_fn(ps.n_raw(), |i| 0.1 * i as f64 - 0.35);

            // Act
            ps.update_from_raw(before.raw().view()).expect("identity update");
            let unchanged = ps.clone();
            ps.update_from_raw(target.view()).expect("valid raw");

            // Assert
            assert_eq!(ps.n_raw(), n, "{kind:?}");
            assert_eq!(unchanged, before, "{kind:?}");
            for (a, b) in ps.raw().iter().zip(target.iter()) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // `n_raw` depends on hyperparameters only.
    //
    // Given
    // -----
    // - Empty and ramp-initialized sets of the same kind and depth.
    //
    // Expect
    // ------
    // - Equal `n_raw` and equal `raw().len()`.
    fn n_raw_is_independent_of_values() {
        let hyper = Hyperparameters::from_cost(&spec());
        for kind in all_kinds() {
            let empty = ParameterSet::empty(hyper.clone(), kind, 3).expect("valid empty");
            let ramp = ParameterSet::linear_ramp_init(&spec(), kind, 3, &RampOptions::default())
                .expect("valid ramp");
            assert_eq!(empty.n_raw(), ramp.n_raw());
            assert_eq!(empty.raw().len(), empty.n_raw());
            assert_eq!(empty.kind(), kind);
            assert!(empty.raw().iter().all(|&x| x == 0.0));
        }
    }

    #[test]
    // Purpose
    // -------
    // Variant-restricted operations report `UnsupportedVariant`.
    //
    // Given
    // -----
    // - Standard, Annealing and Fourier sets asked for constraints; an
    //   Extended set asked for its Standard form.
    //
    // Expect
    // ------
    // - Errors of kind `UnsupportedVariant`; Extended constraints succeed.
    fn restricted_operations_are_rejected() {
        let opts = RampOptions::default();
        for kind in [
            ParametrizationKind::Standard,
            ParametrizationKind::Annealing,
            ParametrizationKind::Fourier { q: 1 },
        ] {
            let ps = ParameterSet::linear_ramp_init(&spec(), kind, 2, &opts).expect("valid ramp");
            let err = ps.get_constraints().expect_err("constraints unsupported");
            assert_eq!(err.kind(), ParamErrorKind::UnsupportedVariant);
            assert!(ps.to_standard().is_ok());
        }
        let ext = ParameterSet::linear_ramp_init(&spec(), ParametrizationKind::Extended, 2, &opts)
            .expect("valid ramp");
        assert_eq!(ext.get_constraints().expect("extended constraints").len(), ext.n_raw());
        assert!(matches!(
            ext.to_standard(),
            Err(ParamError::UnsupportedVariant { variant: Variant::Extended, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Expansion is idempotent and consistent with the Standard collapse.
    //
    // Given
    // -----
    // - Annealing and Fourier ramps with p = 4.
    //
    // Expect
    // ------
    // - Two expansions are equal; they match `to_standard().expanded_angles()`.
    fn expansion_idempotent_and_consistent() {
        let opts = RampOptions::default();
        for kind in [ParametrizationKind::Annealing, ParametrizationKind::Fourier { q: 4 }] {
            let ps = ParameterSet::linear_ramp_init(&spec(), kind, 4, &opts).expect("valid ramp");
            let a = ps.to_expanded_angles();
            assert_eq!(a, ps.to_expanded_angles());
            let std = ps.to_standard().expect("standard form");
            assert_eq!(a, std.expanded_angles());
        }
    }

    #[test]
    // Purpose
    // -------
    // Variant names parse case-insensitively and display canonically.
    //
    // Given
    // -----
    // - "FOURIER", " annealing ", and "trotter".
    //
    // Expect
    // ------
    // - Fourier, Annealing, `UnknownVariant`; Display gives "Fourier".
    fn variant_parsing() {
        assert_eq!("FOURIER".parse::<Variant>(), Ok(Variant::Fourier));
        assert_eq!(" annealing ".parse::<Variant>(), Ok(Variant::Annealing));
        assert!(matches!("trotter".parse::<Variant>(), Err(ParamError::UnknownVariant { .. })));
        assert_eq!(Variant::Fourier.to_string(), "Fourier");
    }
}
