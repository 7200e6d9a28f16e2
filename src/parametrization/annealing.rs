//! Annealing QAOA parameters — a discretized annealing schedule.
//!
//! Purpose
//! -------
//! Parametrize the circuit by a schedule `s(t) ∈ [0, 1]` sampled at `p`
//! points, mirroring adiabatic evolution under `(1 − s)·H_mixer + s·H_cost`
//! for a total time `T`. Only the schedule is optimized; `T` is a fixed
//! hyperparameter.
//!
//! Conventions
//! -----------
//! - Step duration `Δt = T / p`.
//! - `β_j = (1 − s_j)·Δt`, `γ_j = s_j·Δt`; expansion then follows the
//!   Standard rules.
//! - Linear ramp uses midpoints `s_j = (j − ½)/p` for `j = 1..=p`
//!   (p = 5 → `[0.1, 0.3, 0.5, 0.7, 0.9]`).
//! - Raw layout: the schedule itself (length `p`).
//!
//! The schedule is not clamped to `[0, 1]`; optimizers are free to leave it.
use crate::{
    cost::CostSpecification,
    parametrization::{
        core::{
            angles::ExpandedAngles,
            hyperparams::Hyperparameters,
            options::RampOptions,
            validation::{validate_annealing_time, validate_finite, validate_raw, validate_steps},
        },
        errors::ParamResult,
        standard::StandardParams,
    },
};
use ndarray::{Array1, ArrayView1};

/// Annealing schedule sampled at `p` steps plus the fixed total time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingParams {
    hyper: Hyperparameters,
    schedule: Array1<f64>,
    total_time: f64,
}

impl AnnealingParams {
    /// Build parameters from an explicit schedule.
    ///
    /// # Errors
    /// - `InvalidSteps` if `schedule` is empty.
    /// - `InvalidAnnealingTime` if `total_time` is non-finite or `<= 0`.
    /// - `NonFiniteAngle` for the first NaN/±inf schedule entry.
    pub fn new(
        hyper: Hyperparameters, schedule: Array1<f64>, total_time: f64,
    ) -> ParamResult<Self> {
        validate_steps(schedule.len())?;
        validate_annealing_time(total_time)?;
        validate_finite("schedule", schedule.view())?;
        Ok(AnnealingParams { hyper, schedule, total_time })
    }

    /// All-zero schedule for `n_steps` timesteps.
    pub fn empty(hyper: Hyperparameters, n_steps: usize, total_time: f64) -> ParamResult<Self> {
        AnnealingParams::new(hyper, Array1::zeros(n_steps), total_time)
    }

    /// Midpoint linear schedule for a cost specification.
    ///
    /// The total time is `opts.total_time`, or `opts.dt · p` when unset.
    pub fn linear_ramp(
        spec: &CostSpecification, n_steps: usize, opts: &RampOptions,
    ) -> ParamResult<Self> {
        validate_steps(n_steps)?;
        let total_time = opts.annealing_time(n_steps);
        validate_annealing_time(total_time)?;
        let p = n_steps as f64;
        let schedule = Array1::from_shape_fn(n_steps, |j| (j as f64 + 0.5) / p);
        Ok(AnnealingParams { hyper: Hyperparameters::from_cost(spec), schedule, total_time })
    }

    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyper
    }

    pub fn n_steps(&self) -> usize {
        self.schedule.len()
    }

    pub fn schedule(&self) -> ArrayView1<'_, f64> {
        self.schedule.view()
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Duration of one step, `T / p`.
    pub fn time_step(&self) -> f64 {
        self.total_time / self.n_steps() as f64
    }

    /// Per-step mixer angles `(1 − s_j)·Δt`.
    pub fn betas(&self) -> Array1<f64> {
        let dt = self.time_step();
        self.schedule.mapv(|s| (1.0 - s) * dt)
    }

    /// Per-step cost angles `s_j·Δt`.
    pub fn gammas(&self) -> Array1<f64> {
        let dt = self.time_step();
        self.schedule.mapv(|s| s * dt)
    }

    /// Equivalent Standard parameters.
    pub fn to_standard(&self) -> StandardParams {
        StandardParams::from_parts(self.hyper.clone(), self.betas(), self.gammas())
    }

    pub fn n_raw(&self) -> usize {
        self.n_steps()
    }

    pub fn raw(&self) -> Array1<f64> {
        self.schedule.clone()
    }

    /// Overwrite the schedule from a raw vector; on error `self` is unchanged.
    pub fn update_from_raw(&mut self, raw: ArrayView1<f64>) -> ParamResult<()> {
        validate_raw(raw, self.n_raw())?;
        self.schedule.assign(&raw);
        Ok(())
    }

    pub fn expanded_angles(&self) -> ExpandedAngles {
        ExpandedAngles::from_shared(&self.hyper, self.betas(), self.gammas())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parametrization::errors::ParamError;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn spec() -> CostSpecification {
        CostSpecification::new(vec![0, 1], &[(0, 1.0)], &[((0, 1), -2.0)]).expect("valid spec")
    }

    #[test]
    // Purpose
    // -------
    // Check the midpoint schedule of the linear ramp.
    //
    // Given
    // -----
    // - p = 5 with default options.
    //
    // Expect
    // ------
    // - schedule = [0.1, 0.3, 0.5, 0.7, 0.9], T = 3.5, Δt = 0.7.
    fn linear_ramp_uses_midpoints() {
        // Arrange / Act
        let params =
            AnnealingParams::linear_ramp(&spec(), 5, &RampOptions::default()).expect("valid ramp");

        // Assert
        let expected = [0.1, 0.3, 0.5, 0.7, 0.9];
        for (s, e) in params.schedule().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*s, *e, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(params.total_time(), 3.5, epsilon = 1e-12);
        assert_abs_diff_eq!(params.time_step(), 0.7, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the schedule → (β, γ) map and the expansion.
    //
    // Given
    // -----
    // - schedule [0.25, 0.75] with T = 2 (Δt = 1).
    //
    // Expect
    // ------
    // - β = [0.75, 0.25], γ = [0.25, 0.75]; pair cost = γ·(−2).
    fn angles_follow_schedule() {
        let hyper = Hyperparameters::from_cost(&spec());
        let params = AnnealingParams::new(hyper, array![0.25, 0.75], 2.0).expect("valid params");

        let angles = params.expanded_angles();

        assert_eq!(params.betas(), array![0.75, 0.25]);
        assert_eq!(params.gammas(), array![0.25, 0.75]);
        let shared = angles.shared.expect("shared angles");
        assert_eq!(shared.betas, params.betas());
        assert_abs_diff_eq!(angles.pair_cost[[1, 0]], -1.5, epsilon = 1e-15);
        assert_eq!(params.to_standard().expanded_angles(), params.expanded_angles());
    }

    #[test]
    // Purpose
    // -------
    // Round trip and guards.
    //
    // Given
    // -----
    // - A p = 3 ramp; a new schedule; an invalid total time.
    //
    // Expect
    // ------
    // - raw() returns the new schedule; `InvalidAnnealingTime` for T = 0;
    //   `RawLengthMismatch` on a short raw.
    fn round_trip_and_guards() {
        let mut params =
            AnnealingParams::linear_ramp(&spec(), 3, &RampOptions::default()).expect("valid ramp");
        let target = array![0.0, 0.4, 1.2];

        params.update_from_raw(target.view()).expect("valid raw");

        assert_eq!(params.raw(), target);
        assert_eq!(params.n_raw(), 3);
        assert!(matches!(
            params.update_from_raw(array![0.5].view()),
            Err(ParamError::RawLengthMismatch { expected: 3, actual: 1 })
        ));
        let hyper = Hyperparameters::from_cost(&spec());
        assert!(matches!(
            AnnealingParams::empty(hyper, 3, 0.0),
            Err(ParamError::InvalidAnnealingTime { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // A non-finite schedule is refused by `new`.
    //
    // Given
    // -----
    // - schedule = [0.2, NaN] with T = 1.4.
    //
    // Expect
    // ------
    // - `NonFiniteAngle { name: "schedule", index: 1 }`.
    fn new_rejects_non_finite_schedule() {
        let hyper = Hyperparameters::from_cost(&spec());
        assert!(matches!(
            AnnealingParams::new(hyper, array![0.2, f64::NAN], 1.4),
            Err(ParamError::NonFiniteAngle { name: "schedule", index: 1, .. })
        ));
    }
}
