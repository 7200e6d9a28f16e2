//! Ramp options — configuration for linear-ramp initialization.
//!
//! Purpose
//! -------
//! Collect the time-discretization knobs used when a parameter set is seeded
//! from a cost specification, so call sites pass one validated value instead
//! of loose scalars.
//!
//! Conventions
//! -----------
//! - `dt` scales the Standard ramp: `β_i = (1 − i/(p+1))·π·dt`,
//!   `γ_i = (i/(p+1))·π·dt`.
//! - `total_time` is the Annealing duration `T`; each of the `p` steps lasts
//!   `Δt = T/p`. When unset it defaults to `dt · p`, i.e. `Δt = dt`.
use crate::parametrization::{
    core::validation::{validate_annealing_time, validate_time_step},
    errors::ParamResult,
};

/// Default time discretization for linear-ramp initialization.
pub const DEFAULT_TIME_STEP: f64 = 0.7;

/// RampOptions — time discretization used by the linear-ramp initializers.
///
/// Fields
/// ------
/// - `dt`: `f64`
///   Finite, strictly positive scale of the Standard ramp (default `0.7`).
/// - `total_time`: `Option<f64>`
///   Finite, strictly positive annealing time; `None` means `dt · p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampOptions {
    pub dt: f64,
    pub total_time: Option<f64>,
}

impl RampOptions {
    /// Construct validated ramp options.
    ///
    /// # Errors
    /// - [`ParamError::InvalidTimeStep`](crate::parametrization::errors::ParamError::InvalidTimeStep)
    ///   if `dt` is non-finite or `<= 0`.
    /// - [`ParamError::InvalidAnnealingTime`](crate::parametrization::errors::ParamError::InvalidAnnealingTime)
    ///   if `total_time` is provided and non-finite or `<= 0`.
    pub fn new(dt: f64, total_time: Option<f64>) -> ParamResult<Self> {
        validate_time_step(dt)?;
        if let Some(t) = total_time {
            validate_annealing_time(t)?;
        }
        Ok(RampOptions { dt, total_time })
    }

    /// Annealing time for `n_steps` steps.
    pub fn annealing_time(&self, n_steps: usize) -> f64 {
        self.total_time.unwrap_or(self.dt * n_steps as f64)
    }
}

impl Default for RampOptions {
    fn default() -> Self {
        RampOptions { dt: DEFAULT_TIME_STEP, total_time: None }
    }
}
