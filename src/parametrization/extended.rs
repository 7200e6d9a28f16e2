//! Extended QAOA parameters — an independent angle per qubit and per term.
//!
//! Purpose
//! -------
//! Give the optimizer full freedom within each layer: at step `t`, qubit `q`
//! is rotated by its own `β[t, q]`, and every single/pair term carries its
//! own `γ`. The Standard parametrization is the special case where each row
//! is constant.
//!
//! Raw layout
//! ----------
//! Step-major blocks, concatenated:
//! `betas (p × n_qubits) | gammas_singles (p × n_singles) | gammas_pairs (p × n_pairs)`.
//!
//! Constraints
//! -----------
//! A rotation `exp(−i·γ·w·Z)` is periodic in `γ·w` with period `2π`, so each
//! angle only needs to range over one period:
//! - mixer angles: `(0, 2π)`
//! - single terms: `(0, 2π/h)`
//! - pair terms: `(0, 2π/J)`
//!
//! Negative weights yield `(0, negative)` pairs; they are reported as-is
//! (not reordered) so the bound keeps the sign of the weight.
use crate::{
    cost::CostSpecification,
    parametrization::{
        core::{
            angles::{ConstraintList, ExpandedAngles},
            hyperparams::Hyperparameters,
            options::RampOptions,
            validation::{validate_finite, validate_matrix_shape, validate_raw, validate_steps},
        },
        errors::ParamResult,
        standard::StandardParams,
    },
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::f64::consts::TAU;

/// Per-qubit mixer angles and per-term cost angles for every timestep.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedParams {
    hyper: Hyperparameters,
    betas: Array2<f64>,
    gammas_singles: Array2<f64>,
    gammas_pairs: Array2<f64>,
}

impl ExtendedParams {
    /// Build parameters from explicit per-term angles.
    ///
    /// The number of timesteps is `betas.nrows()`.
    ///
    /// # Errors
    /// - `InvalidSteps` if `betas` has no rows.
    /// - `AngleShapeMismatch` if any array does not match
    ///   `(p, n_qubits)`, `(p, n_singles)` or `(p, n_pairs)`.
    /// - `NonFiniteAngle` for the first NaN/±inf angle.
    pub fn new(
        hyper: Hyperparameters, betas: Array2<f64>, gammas_singles: Array2<f64>,
        gammas_pairs: Array2<f64>,
    ) -> ParamResult<Self> {
        let p = betas.nrows();
        validate_steps(p)?;
        validate_matrix_shape("betas", &betas, (p, hyper.n_qubits()))?;
        validate_matrix_shape("gammas_singles", &gammas_singles, (p, hyper.n_singles()))?;
        validate_matrix_shape("gammas_pairs", &gammas_pairs, (p, hyper.n_pairs()))?;
        validate_finite("betas", betas.view())?;
        validate_finite("gammas_singles", gammas_singles.view())?;
        validate_finite("gammas_pairs", gammas_pairs.view())?;
        Ok(ExtendedParams { hyper, betas, gammas_singles, gammas_pairs })
    }

    /// All-zero parameters for `n_steps` timesteps.
    pub fn empty(hyper: Hyperparameters, n_steps: usize) -> ParamResult<Self> {
        validate_steps(n_steps)?;
        let betas = Array2::zeros((n_steps, hyper.n_qubits()));
        let gammas_singles = Array2::zeros((n_steps, hyper.n_singles()));
        let gammas_pairs = Array2::zeros((n_steps, hyper.n_pairs()));
        Ok(ExtendedParams { hyper, betas, gammas_singles, gammas_pairs })
    }

    /// Linear ramp broadcast to every qubit and term.
    pub fn linear_ramp(
        spec: &CostSpecification, n_steps: usize, opts: &RampOptions,
    ) -> ParamResult<Self> {
        let standard = StandardParams::linear_ramp(spec, n_steps, opts)?;
        Ok(ExtendedParams::from_standard(&standard))
    }

    /// Lift Standard parameters: each row repeats the step's β or γ.
    ///
    /// The result expands to the same angles as `standard`.
    pub fn from_standard(standard: &StandardParams) -> ExtendedParams {
        let hyper = standard.hyperparameters().clone();
        let betas = broadcast_rows(standard.betas(), hyper.n_qubits());
        let gammas_singles = broadcast_rows(standard.gammas(), hyper.n_singles());
        let gammas_pairs = broadcast_rows(standard.gammas(), hyper.n_pairs());
        ExtendedParams { hyper, betas, gammas_singles, gammas_pairs }
    }

    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyper
    }

    pub fn n_steps(&self) -> usize {
        self.betas.nrows()
    }

    pub fn betas(&self) -> ArrayView2<'_, f64> {
        self.betas.view()
    }

    pub fn gammas_singles(&self) -> ArrayView2<'_, f64> {
        self.gammas_singles.view()
    }

    pub fn gammas_pairs(&self) -> ArrayView2<'_, f64> {
        self.gammas_pairs.view()
    }

    /// Length of the raw vector, `p · (n_qubits + n_singles + n_pairs)`.
    pub fn n_raw(&self) -> usize {
        self.n_steps() * (self.hyper.n_qubits() + self.hyper.n_singles() + self.hyper.n_pairs())
    }

    /// Flatten the three blocks, each in step-major order.
    pub fn raw(&self) -> Array1<f64> {
        self.betas
            .iter()
            .chain(self.gammas_singles.iter())
            .chain(self.gammas_pairs.iter())
            .copied()
            .collect()
    }

    /// Overwrite the angles from a raw vector; on error `self` is unchanged.
    pub fn update_from_raw(&mut self, raw: ArrayView1<f64>) -> ParamResult<()> {
        validate_raw(raw, self.n_raw())?;
        let targets = self
            .betas
            .iter_mut()
            .chain(self.gammas_singles.iter_mut())
            .chain(self.gammas_pairs.iter_mut());
        for (dst, &src) in targets.zip(raw.iter()) {
            *dst = src;
        }
        Ok(())
    }

    /// Periodicity bounds for every raw entry, in raw order.
    pub fn get_constraints(&self) -> ConstraintList {
        let p = self.n_steps();
        let mut constraints = Vec::with_capacity(self.n_raw());
        constraints.extend(std::iter::repeat((0.0, TAU)).take(p * self.hyper.n_qubits()));
        for _ in 0..p {
            constraints.extend(self.hyper.single_weights.iter().map(|&h| (0.0, TAU / h)));
        }
        for _ in 0..p {
            constraints.extend(self.hyper.pair_weights.iter().map(|&j| (0.0, TAU / j)));
        }
        constraints
    }

    /// Scale each per-term angle by its term weight.
    pub fn expanded_angles(&self) -> ExpandedAngles {
        ExpandedAngles::from_per_term(
            &self.hyper,
            self.betas.view(),
            self.gammas_singles.view(),
            self.gammas_pairs.view(),
        )
    }
}

/// `out[t, j] = v[t]` for `j < n_cols`.
fn broadcast_rows(v: ArrayView1<f64>, n_cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((v.len(), n_cols), |(t, _)| v[t])
}
