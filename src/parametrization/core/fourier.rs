//! Fourier basis transforms between per-step angles and series coefficients.
//!
//! The Fourier parametrization stores `q` mixer coefficients `v` and `q` cost
//! coefficients `u`; the per-step angles of a depth-`p` circuit follow from a
//! cosine and a sine series. With zero-based step index `i = 0..p−1`:
//!
//! ```text
//! β_i = Σ_{k<q} v_k · cos[(2k+1)·i·π/(2p)]
//! γ_i = Σ_{k<q} u_k · sin[(k+½)·(i+1)·π/p]
//! ```
//!
//! These are the unnormalized DCT-II and DST-II of the coefficient vectors.
//! Their exact inverses are
//!
//! ```text
//! v_k = (1/p) Σ_i w_i β_i cos[(2k+1)·i·π/(2p)],   w_0     = 1, else 2
//! u_k = (1/p) Σ_i w_i γ_i sin[(k+½)·(i+1)·π/p],   w_{p−1} = 1, else 2
//! ```
//!
//! Keeping only the first `q < p` inverse coefficients is the weighted
//! least-squares projection of the angles onto the retained basis, so
//! `betas_to_fourier(fourier_to_betas(v, p), q) == v` for any `q <= p`.
//!
//! All functions are pure and allocate a fresh output array.
use ndarray::{Array1, ArrayView1};
use std::f64::consts::PI;

#[inline]
fn cos_basis(k: usize, i: usize, n_steps: usize) -> f64 {
    ((2 * k + 1) as f64 * i as f64 * PI / (2.0 * n_steps as f64)).cos()
}

#[inline]
fn sin_basis(k: usize, i: usize, n_steps: usize) -> f64 {
    ((k as f64 + 0.5) * (i + 1) as f64 * PI / n_steps as f64).sin()
}

/// Expand mixer coefficients `v` into `n_steps` per-step betas.
pub fn fourier_to_betas(v: ArrayView1<f64>, n_steps: usize) -> Array1<f64> {
    Array1::from_shape_fn(n_steps, |i| {
        v.iter().enumerate().map(|(k, &vk)| vk * cos_basis(k, i, n_steps)).sum()
    })
}

/// Expand cost coefficients `u` into `n_steps` per-step gammas.
pub fn fourier_to_gammas(u: ArrayView1<f64>, n_steps: usize) -> Array1<f64> {
    Array1::from_shape_fn(n_steps, |i| {
        u.iter().enumerate().map(|(k, &uk)| uk * sin_basis(k, i, n_steps)).sum()
    })
}

/// Project per-step betas onto the first `q` cosine coefficients.
///
/// `q` is expected to satisfy `1 <= q <= betas.len()`; callers validate it.
pub fn betas_to_fourier(betas: ArrayView1<f64>, q: usize) -> Array1<f64> {
    let n_steps = betas.len();
    let scale = 1.0 / n_steps as f64;
    Array1::from_shape_fn(q, |k| {
        let acc: f64 = betas
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                let w = if i == 0 { 1.0 } else { 2.0 };
                w * b * cos_basis(k, i, n_steps)
            })
            .sum();
        acc * scale
    })
}

/// Project per-step gammas onto the first `q` sine coefficients.
///
/// `q` is expected to satisfy `1 <= q <= gammas.len()`; callers validate it.
pub fn gammas_to_fourier(gammas: ArrayView1<f64>, q: usize) -> Array1<f64> {
    let n_steps = gammas.len();
    let scale = 1.0 / n_steps as f64;
    Array1::from_shape_fn(q, |k| {
        let acc: f64 = gammas
            .iter()
            .enumerate()
            .map(|(i, &g)| {
                let w = if i + 1 == n_steps { 1.0 } else { 2.0 };
                w * g * sin_basis(k, i, n_steps)
            })
            .sum();
        acc * scale
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact inversion of both series for every depth 1..=6 at q = p.
    // - Projection consistency when fewer coefficients are retained.
    // - Closed-form values for p = 1 and p = 2.
    // -------------------------------------------------------------------------

    fn sample(n: usize, seed: f64) -> Array1<f64> {
        Array1::from_shape_fn(n, |i| (seed * (i as f64 + 1.0)).sin() + 0.1 * i as f64)
    }

    #[test]
    // Purpose
    // -------
    // Verify that the inverse transforms exactly undo the forward expansions.
    //
    // Given
    // -----
    // - Deterministic angle vectors of length p = 1..=6.
    //
    // Expect
    // ------
    // - `fourier_to_*(*_to_fourier(x, p), p) == x` within 1e-12.
    fn inverse_then_forward_reproduces_angles() {
        for p in 1..=6 {
            // Arrange
            let betas = sample(p, 0.37);
            let gammas = sample(p, 1.91);

            // Act
            let v = betas_to_fourier(betas.view(), p);
            let u = gammas_to_fourier(gammas.view(), p);
            let betas_back = fourier_to_betas(v.view(), p);
            let gammas_back = fourier_to_gammas(u.view(), p);

            // Assert
            for i in 0..p {
                assert_abs_diff_eq!(betas_back[i], betas[i], epsilon = 1e-12);
                assert_abs_diff_eq!(gammas_back[i], gammas[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the projection recovers the coefficients of a truncated series.
    //
    // Given
    // -----
    // - q = 2 coefficients expanded to p = 5 steps.
    //
    // Expect
    // ------
    // - Projecting back onto 2 coefficients returns the original ones.
    fn projection_recovers_truncated_coefficients() {
        // Arrange
        let v = array![0.8, -0.2];
        let u = array![0.4, 0.15];

        // Act
        let v_back = betas_to_fourier(fourier_to_betas(v.view(), 5).view(), 2);
        let u_back = gammas_to_fourier(fourier_to_gammas(u.view(), 5).view(), 2);

        // Assert
        for k in 0..2 {
            assert_abs_diff_eq!(v_back[k], v[k], epsilon = 1e-12);
            assert_abs_diff_eq!(u_back[k], u[k], epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Pin down the basis convention with closed-form values.
    //
    // Given
    // -----
    // - p = 1 with v = [0.3], u = [0.6]; p = 2 with v = [1, 1], u = [1, 0].
    //
    // Expect
    // ------
    // - p = 1: β = [0.3], γ = [0.6].
    // - p = 2: β_0 = 2, β_1 = cos(π/4) + cos(3π/4) = 0,
    //   γ = [sin(π/4), sin(π/2)].
    fn closed_form_values() {
        let b1 = fourier_to_betas(array![0.3].view(), 1);
        let g1 = fourier_to_gammas(array![0.6].view(), 1);
        assert_abs_diff_eq!(b1[0], 0.3, epsilon = 1e-15);
        assert_abs_diff_eq!(g1[0], 0.6, epsilon = 1e-15);

        let b2 = fourier_to_betas(array![1.0, 1.0].view(), 2);
        let g2 = fourier_to_gammas(array![1.0, 0.0].view(), 2);
        assert_abs_diff_eq!(b2[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b2[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g2[0], (PI / 4.0).sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(g2[1], 1.0, epsilon = 1e-12);
    }
}
