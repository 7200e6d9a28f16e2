//! Validation helpers shared by the parameter containers.
//!
//! - **Configuration**: [`validate_steps`], [`validate_fourier_order`],
//!   [`validate_time_step`], [`validate_annealing_time`].
//! - **Raw vectors**: [`validate_raw`] checks length and finiteness before
//!   any in-place update, so failed updates never leave partial writes.
//! - **Angle arrays**: [`validate_vector_len`], [`validate_matrix_shape`] and
//!   [`validate_finite`] guard hand-built parameter containers, so that
//!   anything a constructor accepts also passes [`validate_raw`].
use crate::parametrization::errors::{ParamError, ParamResult};
use ndarray::{Array2, ArrayView, ArrayView1, Dimension};

/// Validate the number of timesteps `p >= 1`.
pub fn validate_steps(n_steps: usize) -> ParamResult<()> {
    if n_steps == 0 {
        return Err(ParamError::InvalidSteps {
            n_steps,
            reason: "At least one timestep is required.",
        });
    }
    Ok(())
}

/// Validate the Fourier order `1 <= q <= p`.
pub fn validate_fourier_order(q: usize, n_steps: usize) -> ParamResult<()> {
    if q == 0 {
        return Err(ParamError::InvalidFourierOrder {
            q,
            n_steps,
            reason: "At least one Fourier component is required.",
        });
    }
    if q > n_steps {
        return Err(ParamError::InvalidFourierOrder {
            q,
            n_steps,
            reason: "The number of Fourier components cannot exceed the number of timesteps.",
        });
    }
    Ok(())
}

/// Validate a ramp time discretization: finite and strictly positive.
pub fn validate_time_step(dt: f64) -> ParamResult<()> {
    if !dt.is_finite() {
        return Err(ParamError::InvalidTimeStep { value: dt, reason: "Time step must be finite." });
    }
    if dt <= 0.0 {
        return Err(ParamError::InvalidTimeStep {
            value: dt,
            reason: "Time step must be positive.",
        });
    }
    Ok(())
}

/// Validate a total annealing time: finite and strictly positive.
pub fn validate_annealing_time(total_time: f64) -> ParamResult<()> {
    if !total_time.is_finite() || total_time <= 0.0 {
        return Err(ParamError::InvalidAnnealingTime {
            value: total_time,
            reason: "Annealing time must be finite and positive.",
        });
    }
    Ok(())
}

/// Validate a raw vector against the expected length and finiteness.
///
/// # Errors
/// - [`ParamError::RawLengthMismatch`] if `raw.len() != expected`.
/// - [`ParamError::NonFiniteRaw`] for the first NaN/±inf entry.
pub fn validate_raw(raw: ArrayView1<f64>, expected: usize) -> ParamResult<()> {
    if raw.len() != expected {
        return Err(ParamError::RawLengthMismatch { expected, actual: raw.len() });
    }
    if let Some((index, &value)) = raw.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ParamError::NonFiniteRaw { index, value });
    }
    Ok(())
}

/// Validate the length of a per-step or per-component vector.
pub fn validate_vector_len(name: &'static str, v: ArrayView1<f64>, expected: usize) -> ParamResult<()> {
    if v.len() != expected {
        return Err(ParamError::AngleShapeMismatch {
            name,
            expected: (expected, 1),
            actual: (v.len(), 1),
        });
    }
    Ok(())
}

/// Validate the `(rows, cols)` shape of a per-term angle matrix.
pub fn validate_matrix_shape(
    name: &'static str, m: &Array2<f64>, expected: (usize, usize),
) -> ParamResult<()> {
    if m.dim() != expected {
        return Err(ParamError::AngleShapeMismatch { name, expected, actual: m.dim() });
    }
    Ok(())
}

/// Validate that every entry of an angle array is finite.
///
/// # Errors
/// [`ParamError::NonFiniteAngle`] for the first NaN/±inf entry in row-major
/// order.
pub fn validate_finite<D: Dimension>(name: &'static str, a: ArrayView<f64, D>) -> ParamResult<()> {
    if let Some((index, &value)) = a.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ParamError::NonFiniteAngle { name, index, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Check the raw-vector guard on length and finiteness.
    //
    // Given
    // -----
    // - Expected length 3; vectors of length 2, with a NaN, and a valid one.
    //
    // Expect
    // ------
    // - `RawLengthMismatch`, `NonFiniteRaw { index: 1 }`, `Ok`.
    fn validate_raw_checks_length_then_finiteness() {
        assert_eq!(
            validate_raw(array![1.0, 2.0].view(), 3),
            Err(ParamError::RawLengthMismatch { expected: 3, actual: 2 })
        );
        assert!(matches!(
            validate_raw(array![1.0, f64::NAN, 0.0].view(), 3),
            Err(ParamError::NonFiniteRaw { index: 1, .. })
        ));
        assert!(validate_raw(array![1.0, -2.0, 0.0].view(), 3).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Check step-count and Fourier-order bounds.
    //
    // Given
    // -----
    // - `p = 0`, `q = 0`, `q > p`, and `q == p`.
    //
    // Expect
    // ------
    // - Errors for the first three, `Ok` for `q == p`.
    fn steps_and_fourier_order_bounds() {
        assert!(validate_steps(0).is_err());
        assert!(validate_steps(1).is_ok());
        assert!(validate_fourier_order(0, 3).is_err());
        assert!(validate_fourier_order(4, 3).is_err());
        assert!(validate_fourier_order(3, 3).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Check the finiteness guard on vectors and matrices.
    //
    // Given
    // -----
    // - A finite vector, a vector with +inf at index 2, and a 2×2 matrix with
    //   NaN at `[1, 0]`.
    //
    // Expect
    // ------
    // - `Ok`, then `NonFiniteAngle` with the row-major index (2 and 2).
    fn validate_finite_reports_first_offending_entry() {
        assert!(validate_finite("betas", array![0.1, -0.2, 0.0].view()).is_ok());
        assert!(matches!(
            validate_finite("betas", array![0.1, -0.2, f64::INFINITY].view()),
            Err(ParamError::NonFiniteAngle { name: "betas", index: 2, .. })
        ));
        assert!(matches!(
            validate_finite("gammas_pairs", array![[0.1, 0.2], [f64::NAN, 0.3]].view()),
            Err(ParamError::NonFiniteAngle { name: "gammas_pairs", index: 2, .. })
        ));
    }
}
