//! Standard QAOA parameters — one β and one γ per timestep.
//!
//! Purpose
//! -------
//! Hold the textbook QAOA angles: at step `t` every qubit is rotated by the
//! mixer angle `β_t` and every cost term by `γ_t` times its weight.
//!
//! Raw layout
//! ----------
//! `[β_0, …, β_{p−1}, γ_0, …, γ_{p−1}]` (length `2p`).
//!
//! Linear ramp
//! -----------
//! For `i = 1..=p`: `β_i = (1 − i/(p+1))·π·dt`, `γ_i = (i/(p+1))·π·dt`.
//! β decreases and γ increases strictly, mimicking a discretized adiabatic
//! sweep from the mixer to the cost Hamiltonian.
use crate::{
    cost::CostSpecification,
    parametrization::{
        core::{
            angles::ExpandedAngles,
            hyperparams::Hyperparameters,
            options::RampOptions,
            validation::{validate_finite, validate_raw, validate_steps, validate_vector_len},
        },
        errors::ParamResult,
    },
};
use ndarray::{Array1, ArrayView1, s};
use std::f64::consts::PI;

/// Per-step mixer and cost angles shared across the register.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardParams {
    hyper: Hyperparameters,
    betas: Array1<f64>,
    gammas: Array1<f64>,
}

impl StandardParams {
    /// Build parameters from explicit angles.
    ///
    /// # Errors
    /// - `InvalidSteps` if `betas` is empty.
    /// - `AngleShapeMismatch` if `gammas.len() != betas.len()`.
    /// - `NonFiniteAngle` for the first NaN/±inf angle.
    pub fn new(
        hyper: Hyperparameters, betas: Array1<f64>, gammas: Array1<f64>,
    ) -> ParamResult<Self> {
        validate_steps(betas.len())?;
        validate_vector_len("gammas", gammas.view(), betas.len())?;
        validate_finite("betas", betas.view())?;
        validate_finite("gammas", gammas.view())?;
        Ok(StandardParams { hyper, betas, gammas })
    }

    /// Assemble from angles whose lengths are already known to agree.
    pub(crate) fn from_parts(
        hyper: Hyperparameters, betas: Array1<f64>, gammas: Array1<f64>,
    ) -> StandardParams {
        debug_assert_eq!(betas.len(), gammas.len());
        StandardParams { hyper, betas, gammas }
    }

    /// All-zero parameters for `n_steps` timesteps.
    pub fn empty(hyper: Hyperparameters, n_steps: usize) -> ParamResult<Self> {
        validate_steps(n_steps)?;
        Ok(StandardParams { hyper, betas: Array1::zeros(n_steps), gammas: Array1::zeros(n_steps) })
    }

    /// Linear-ramp initial guess for a cost specification.
    pub fn linear_ramp(
        spec: &CostSpecification, n_steps: usize, opts: &RampOptions,
    ) -> ParamResult<Self> {
        validate_steps(n_steps)?;
        let (betas, gammas) = ramp_angles(n_steps, opts.dt);
        Ok(StandardParams { hyper: Hyperparameters::from_cost(spec), betas, gammas })
    }

    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyper
    }

    pub fn n_steps(&self) -> usize {
        self.betas.len()
    }

    pub fn betas(&self) -> ArrayView1<'_, f64> {
        self.betas.view()
    }

    pub fn gammas(&self) -> ArrayView1<'_, f64> {
        self.gammas.view()
    }

    /// Length of the raw vector, `2p`.
    pub fn n_raw(&self) -> usize {
        2 * self.n_steps()
    }

    /// Flatten to `[betas | gammas]`.
    pub fn raw(&self) -> Array1<f64> {
        self.betas.iter().chain(self.gammas.iter()).copied().collect()
    }

    /// Overwrite the angles from a raw vector; on error `self` is unchanged.
    pub fn update_from_raw(&mut self, raw: ArrayView1<f64>) -> ParamResult<()> {
        validate_raw(raw, self.n_raw())?;
        let p = self.n_steps();
        self.betas.assign(&raw.slice(s![..p]));
        self.gammas.assign(&raw.slice(s![p..]));
        Ok(())
    }

    /// Broadcast β to every qubit and scale γ by every term weight.
    pub fn expanded_angles(&self) -> ExpandedAngles {
        ExpandedAngles::from_shared(&self.hyper, self.betas.clone(), self.gammas.clone())
    }
}

/// Linear-ramp betas and gammas for `n_steps` timesteps.
pub(crate) fn ramp_angles(n_steps: usize, dt: f64) -> (Array1<f64>, Array1<f64>) {
    let denom = (n_steps + 1) as f64;
    let betas = Array1::from_shape_fn(n_steps, |t| (1.0 - (t + 1) as f64 / denom) * PI * dt);
    let gammas = Array1::from_shape_fn(n_steps, |t| (t + 1) as f64 / denom * PI * dt);
    (betas, gammas)
}
