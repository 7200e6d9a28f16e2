//! Expanded angles — the per-timestep, per-term rotation angles a circuit
//! evaluator consumes.
//!
//! Every parametrization reduces to the same shape:
//! - `mixer[p × n_qubits]`: the X-rotation angle of each qubit at each step.
//! - `single_cost[p × n_singles]`: `γ · h_i` for each single-qubit term.
//! - `pair_cost[p × n_pairs]`: `γ · J_ij` for each pairwise term.
//!
//! Columns follow the ordering of
//! [`Hyperparameters`](crate::parametrization::core::hyperparams::Hyperparameters).
//! Angles are returned as-is; circuit-specific factors (e.g. the 2 in
//! `RZ(2γh)`) are applied by the evaluator.
use crate::parametrization::core::hyperparams::Hyperparameters;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Box constraints `(lower, upper)`, one per raw entry, in raw order.
pub type ConstraintList = Vec<(f64, f64)>;

/// Per-step angles shared by every qubit and term.
///
/// Present for the standard-style variants (Standard, Annealing, Fourier),
/// where one β and one γ drive the whole layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedAngles {
    pub betas: Array1<f64>,
    pub gammas: Array1<f64>,
}

/// ExpandedAngles — derived rotation angles for a depth-`p` circuit.
///
/// Fields
/// ------
/// - `mixer`: `Array2<f64>` of shape `(p, n_qubits)`.
/// - `single_cost`: `Array2<f64>` of shape `(p, n_singles)`.
/// - `pair_cost`: `Array2<f64>` of shape `(p, n_pairs)`.
/// - `shared`: `Option<SharedAngles>`; `None` for Extended parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedAngles {
    pub mixer: Array2<f64>,
    pub single_cost: Array2<f64>,
    pub pair_cost: Array2<f64>,
    pub shared: Option<SharedAngles>,
}

impl ExpandedAngles {
    /// Broadcast per-step `betas`/`gammas` across the register and terms.
    ///
    /// `betas` and `gammas` must have equal length `p`.
    pub fn from_shared(
        hyper: &Hyperparameters, betas: Array1<f64>, gammas: Array1<f64>,
    ) -> ExpandedAngles {
        let n_steps = betas.len();
        let mixer = Array2::from_shape_fn((n_steps, hyper.n_qubits()), |(t, _)| betas[t]);
        let single_cost = outer(gammas.view(), hyper.single_weights.view());
        let pair_cost = outer(gammas.view(), hyper.pair_weights.view());
        ExpandedAngles {
            mixer,
            single_cost,
            pair_cost,
            shared: Some(SharedAngles { betas, gammas }),
        }
    }

    /// Scale per-term angles by their term weights.
    pub fn from_per_term(
        hyper: &Hyperparameters, betas: ArrayView2<f64>, gammas_singles: ArrayView2<f64>,
        gammas_pairs: ArrayView2<f64>,
    ) -> ExpandedAngles {
        let single_cost = &gammas_singles * &hyper.single_weights.view().insert_axis(Axis(0));
        let pair_cost = &gammas_pairs * &hyper.pair_weights.view().insert_axis(Axis(0));
        ExpandedAngles { mixer: betas.to_owned(), single_cost, pair_cost, shared: None }
    }

    /// Number of timesteps `p`.
    pub fn n_steps(&self) -> usize {
        self.mixer.nrows()
    }
}

/// `out[t, j] = a[t] * b[j]`.
fn outer(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Array2<f64> {
    Array2::from_shape_fn((a.len(), b.len()), |(t, j)| a[t] * b[j])
}
