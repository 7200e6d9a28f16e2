//! Fourier QAOA parameters — low-frequency series for β and γ.
//!
//! Purpose
//! -------
//! Describe a depth-`p` circuit by `q <= p` cosine coefficients `v` (mixer)
//! and `q` sine coefficients `u` (cost). Smooth schedules need far fewer
//! than `2p` numbers, and a solution found at depth `p` is a good seed for
//! depth `p + 1` because the coefficients keep their meaning.
//!
//! Key behaviors
//! -------------
//! - Per-step angles come from [`fourier_to_betas`] / [`fourier_to_gammas`];
//!   expansion then follows the Standard rules.
//! - [`FourierParams::from_standard`] projects Standard angles onto the first
//!   `q` coefficients with the exact inverse transforms. At `q = p` the
//!   round trip Standard → Fourier → Standard is exact.
//! - Raw layout: `[v_0, …, v_{q−1}, u_0, …, u_{q−1}]`.
//!
//! Invariants
//! ----------
//! - `1 <= q <= p`; `q` and `p` are hyperparameters and never change.
use crate::{
    cost::CostSpecification,
    parametrization::{
        core::{
            angles::ExpandedAngles,
            fourier::{betas_to_fourier, fourier_to_betas, fourier_to_gammas, gammas_to_fourier},
            hyperparams::Hyperparameters,
            options::RampOptions,
            validation::{
                validate_finite, validate_fourier_order, validate_raw, validate_steps,
                validate_vector_len,
            },
        },
        errors::ParamResult,
        standard::StandardParams,
    },
};
use ndarray::{Array1, ArrayView1, s};

/// Fourier coefficients for a depth-`n_steps` circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierParams {
    hyper: Hyperparameters,
    n_steps: usize,
    v: Array1<f64>,
    u: Array1<f64>,
}

impl FourierParams {
    /// Build parameters from explicit coefficients; `q = v.len()`.
    ///
    /// # Errors
    /// - `InvalidSteps` if `n_steps == 0`.
    /// - `InvalidFourierOrder` unless `1 <= q <= n_steps`.
    /// - `AngleShapeMismatch` if `u.len() != v.len()`.
    /// - `NonFiniteAngle` for the first NaN/±inf coefficient.
    pub fn new(
        hyper: Hyperparameters, n_steps: usize, v: Array1<f64>, u: Array1<f64>,
    ) -> ParamResult<Self> {
        validate_steps(n_steps)?;
        validate_fourier_order(v.len(), n_steps)?;
        validate_vector_len("u", u.view(), v.len())?;
        validate_finite("v", v.view())?;
        validate_finite("u", u.view())?;
        Ok(FourierParams { hyper, n_steps, v, u })
    }

    /// All-zero coefficients.
    pub fn empty(hyper: Hyperparameters, n_steps: usize, q: usize) -> ParamResult<Self> {
        FourierParams::new(hyper, n_steps, Array1::zeros(q), Array1::zeros(q))
    }

    /// Standard linear ramp projected onto `q` components.
    pub fn linear_ramp(
        spec: &CostSpecification, n_steps: usize, q: usize, opts: &RampOptions,
    ) -> ParamResult<Self> {
        validate_steps(n_steps)?;
        validate_fourier_order(q, n_steps)?;
        let standard = StandardParams::linear_ramp(spec, n_steps, opts)?;
        FourierParams::from_standard(&standard, q)
    }

    /// Project Standard angles onto the first `q` Fourier components.
    ///
    /// # Errors
    /// - `InvalidFourierOrder` unless `1 <= q <= standard.n_steps()`.
    pub fn from_standard(standard: &StandardParams, q: usize) -> ParamResult<Self> {
        let n_steps = standard.n_steps();
        validate_fourier_order(q, n_steps)?;
        Ok(FourierParams {
            hyper: standard.hyperparameters().clone(),
            n_steps,
            v: betas_to_fourier(standard.betas(), q),
            u: gammas_to_fourier(standard.gammas(), q),
        })
    }

    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyper
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of retained Fourier components.
    pub fn q(&self) -> usize {
        self.v.len()
    }

    pub fn v(&self) -> ArrayView1<'_, f64> {
        self.v.view()
    }

    pub fn u(&self) -> ArrayView1<'_, f64> {
        self.u.view()
    }

    /// Per-step mixer angles from the cosine series.
    pub fn betas(&self) -> Array1<f64> {
        fourier_to_betas(self.v.view(), self.n_steps)
    }

    /// Per-step cost angles from the sine series.
    pub fn gammas(&self) -> Array1<f64> {
        fourier_to_gammas(self.u.view(), self.n_steps)
    }

    /// Equivalent Standard parameters.
    pub fn to_standard(&self) -> StandardParams {
        StandardParams::from_parts(self.hyper.clone(), self.betas(), self.gammas())
    }

    /// Length of the raw vector, `2q`.
    pub fn n_raw(&self) -> usize {
        2 * self.q()
    }

    pub fn raw(&self) -> Array1<f64> {
        self.v.iter().chain(self.u.iter()).copied().collect()
    }

    /// Overwrite the coefficients from a raw vector; on error `self` is unchanged.
    pub fn update_from_raw(&mut self, raw: ArrayView1<f64>) -> ParamResult<()> {
        validate_raw(raw, self.n_raw())?;
        let q = self.q();
        self.v.assign(&raw.slice(s![..q]));
        self.u.assign(&raw.slice(s![q..]));
        Ok(())
    }

    pub fn expanded_angles(&self) -> ExpandedAngles {
        ExpandedAngles::from_shared(&self.hyper, self.betas(), self.gammas())
    }
}
