//! Integration tests for the QAOA parametrization pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: from a validated cost specification,
//!   through hyperparameter derivation and linear-ramp initialization of
//!   every variant, to raw-vector round trips, expanded angles, box
//!   constraints and variational optimization against a toy evaluator.
//!
//! Coverage
//! --------
//! - `cost`:
//!   - Exhaustive evaluation and brute-force minimum of a textbook QUBO.
//!   - QUBO → Ising rewrite feeding the parametrization layer.
//! - `parametrization`:
//!   - Round trips and `n_raw` for all four variants.
//!   - Extended constraints for a mixed-sign register.
//!   - Fourier ↔ Standard equivalence at `q = p`.
//! - `optimization::variational`:
//!   - `minimize` with Nelder–Mead on Annealing parameters.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of individual containers and helpers; those
//!   are covered by unit tests.
//! - Python bindings.
use std::f64::consts::{PI, TAU};

use approx::assert_abs_diff_eq;
use ndarray::Array1;
use qaoa_params::{
    cost::CostSpecification,
    optimization::{
        errors::OptResult,
        variational::{
            ExpectationEvaluator, LineSearcher, OptimOptions, SolverChoice, Tolerances, minimize,
        },
    },
    parametrization::{
        ExpandedAngles, FourierParams, ParameterSet, ParametrizationKind, RampOptions,
        StandardParams, Variant, derive_hyperparameters,
    },
};

/// `y = -5x1 - 3x2 - 8x3 - 6x4 + 4x1x2 + 8x1x3 + 2x2x3 + 10x3x4` on qubits 0..3.
fn textbook_qubo() -> CostSpecification {
    CostSpecification::from_terms(
        &[(0, -5.0), (1, -3.0), (2, -8.0), (3, -6.0)],
        &[((0, 1), 4.0), ((0, 2), 8.0), ((1, 2), 2.0), ((2, 3), 10.0)],
    )
    .expect("textbook QUBO should be valid")
}

fn all_kinds(p: usize) -> Vec<ParametrizationKind> {
    vec![
        ParametrizationKind::Standard,
        ParametrizationKind::Extended,
        ParametrizationKind::Annealing,
        ParametrizationKind::Fourier { q: p.min(2) },
    ]
}

#[test]
// Purpose
// -------
// The classical reference values and the minimum of the textbook QUBO.
//
// Given
// -----
// - The 4-variable QUBO, x4 as the most significant bit.
//
// Expect
// ------
// - The 16-entry reference table, minimum −11 at 0b1001, and an Ising
//   rewrite that reproduces every value.
fn textbook_qubo_reference_values() {
    // Arrange
    let spec = textbook_qubo();
    let expected = [0., -5., -3., -4., -8., -5., -9., -2., -6., -11., -9., -10., -4., -1., -5., 2.];

    // Act
    let values = spec.evaluate_all().expect("4 qubits is enumerable");
    let (best, value) = spec.brute_force_minimum().expect("4 qubits is enumerable");
    let (ising, offset) = spec.to_ising();

    // Assert
    for (k, want) in expected.iter().enumerate() {
        assert_abs_diff_eq!(values[k], *want, epsilon = 1e-12);
        let spin = ising.evaluate_spins(k as u64).expect("in range") + offset;
        assert_abs_diff_eq!(spin, *want, epsilon = 1e-12);
    }
    assert_eq!(best, 0b1001);
    assert_abs_diff_eq!(value, -11.0, epsilon = 1e-12);
    assert_eq!(values.iter().filter(|&&v| (v + 11.0).abs() < 1e-12).count(), 1);
}

#[test]
// Purpose
// -------
// Every variant round-trips perturbed raw vectors and reports a length
// derived only from hyperparameters.
//
// Given
// -----
// - The textbook QUBO (4 singles, 4 pairs), p = 3.
//
// Expect
// ------
// - n_raw: Standard 6, Extended 3·(4+4+4) = 36, Annealing 3, Fourier 4.
// - raw(update_from_raw(r)) == r exactly.
fn all_variants_round_trip() {
    // Arrange
    let spec = textbook_qubo();
    let expected_len = [6, 36, 3, 4];

    for (kind, n_raw) in all_kinds(3).into_iter().zip(expected_len) {
        let mut params = ParameterSet::linear_ramp_init(&spec, kind, 3, &RampOptions::default())
            .expect("valid ramp");
        let perturbed: Array1<f64> =
            params.raw().iter().enumerate().map(|(i, x)| x + 0.01 * (i as f64 + 1.0)).collect();

        // Act
        params.update_from_raw(perturbed.view()).expect("valid raw");

        // Assert
        assert_eq!(params.n_raw(), n_raw, "{:?}", kind);
        assert_eq!(params.raw().len(), n_raw);
        assert_eq!(params.raw(), perturbed);
        assert_eq!(params.to_expanded_angles(), params.to_expanded_angles());
    }
}

#[test]
// Purpose
// -------
// Extended constraints for a register with a negative single weight.
//
// Given
// -----
// - 3 qubits, h_0 = −0.5, J_01 = 0.7, J_12 = 1.2, p = 1.
//
// Expect
// ------
// - [(0,2π)×3, (0,−4π), (0,2π/0.7), (0,2π/1.2)]; other variants refuse.
fn extended_constraints_for_mixed_signs() {
    let spec =
        CostSpecification::new(vec![0, 1, 2], &[(0, -0.5)], &[((0, 1), 0.7), ((1, 2), 1.2)])
            .expect("valid spec");
    let extended =
        ParameterSet::linear_ramp_init(&spec, ParametrizationKind::Extended, 1, &RampOptions::default())
            .expect("valid ramp");
    let expected = [(0.0, TAU), (0.0, TAU), (0.0, TAU), (0.0, -4.0 * PI), (0.0, TAU / 0.7), (0.0, TAU / 1.2)];

    let constraints = extended.get_constraints().expect("Extended has constraints");

    assert_eq!(constraints.len(), extended.n_raw());
    for ((lo, hi), (want_lo, want_hi)) in constraints.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*lo, *want_lo);
        assert_abs_diff_eq!(*hi, *want_hi, epsilon = 1e-12);
    }
    for kind in [ParametrizationKind::Standard, ParametrizationKind::Annealing] {
        let params = ParameterSet::linear_ramp_init(&spec, kind, 1, &RampOptions::default())
            .expect("valid ramp");
        assert!(params.get_constraints().is_err(), "{:?}", kind.variant());
    }
}

#[test]
// Purpose
// -------
// Fourier with q = p reproduces the Standard ramp angles.
//
// Given
// -----
// - Textbook QUBO, p = 1..=5, Standard ramp projected to q = p.
//
// Expect
// ------
// - Expanded mixer and cost angles agree within 1e-6.
fn fourier_matches_standard_at_full_order() {
    let spec = textbook_qubo();
    let hyper = derive_hyperparameters(&spec);
    assert_eq!(hyper.n_singles(), 4);

    for p in 1..=5 {
        let standard =
            StandardParams::linear_ramp(&spec, p, &RampOptions::default()).expect("valid ramp");
        let fourier = FourierParams::from_standard(&standard, p).expect("q = p is valid");

        let a = standard.expanded_angles();
        let b = fourier.expanded_angles();

        for (x, y) in a.mixer.iter().zip(b.mixer.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-6);
        }
        for (x, y) in a.pair_cost.iter().zip(b.pair_cost.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-6);
        }
    }
}

/// Prefers the annealing schedule s = [0.3, 0.6] at total time 1.4.
struct ScheduleTarget;

impl ExpectationEvaluator for ScheduleTarget {
    fn expectation(&self, angles: &ExpandedAngles) -> OptResult<f64> {
        let b0 = angles.mixer[[0, 0]];
        let b1 = angles.mixer[[1, 0]];
        Ok((b0 - 0.49).powi(2) + (b1 - 0.28).powi(2))
    }
}

#[test]
// Purpose
// -------
// `minimize` tunes Annealing parameters against a smooth evaluator.
//
// Given
// -----
// - Textbook QUBO, Annealing p = 2, T = dt·p = 1.4 (Δt = 0.7).
// - Minimum where (1 − s_j)·0.7 = [0.49, 0.28], i.e. s = [0.3, 0.6].
//
// Expect
// ------
// - The parameter set holds s ≈ [0.3, 0.6] and the best value ≈ 0.
fn minimize_tunes_annealing_schedule() {
    // Arrange
    let mut params = ParameterSet::linear_ramp_init(
        &textbook_qubo(),
        ParametrizationKind::Annealing,
        2,
        &RampOptions::default(),
    )
    .expect("valid ramp");
    let tols = Tolerances::new(None, Some(1e-14), Some(1000)).expect("valid tolerances");
    let opts = OptimOptions::new(
        tols,
        SolverChoice::NelderMead,
        LineSearcher::MoreThuente,
        false,
        None,
        None,
        false,
    )
    .expect("valid options");

    // Act
    let outcome = minimize(&ScheduleTarget, &mut params, &opts).expect("minimize should succeed");

    // Assert
    assert_eq!(params.variant(), Variant::Annealing);
    let raw = params.raw();
    assert_abs_diff_eq!(raw[0], 0.3, epsilon = 1e-4);
    assert_abs_diff_eq!(raw[1], 0.6, epsilon = 1e-4);
    assert_abs_diff_eq!(outcome.value, 0.0, epsilon = 1e-8);
    assert!(!outcome.history.is_empty());
}
