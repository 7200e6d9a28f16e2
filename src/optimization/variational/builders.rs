//! variational::builders — solver construction helpers.
//!
//! Purpose
//! -------
//! Hide argmin's generic wiring behind small builders that apply the
//! crate-level [`OptimOptions`]: L-BFGS with either line search, and a
//! Nelder–Mead simplex seeded around the initial raw vector.
//!
//! Conventions
//! -----------
//! - Builders never set the initial parameter vector or `max_iters`; the
//!   runner applies those to the executor state.
//! - Invalid tolerances rejected by argmin are surfaced as [`OptError`]
//!   through `From<argmin::core::Error>`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover memory defaults, tolerance wiring and the simplex
//!   geometry; full solves are exercised in `api`.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::{OptError, OptResult},
    variational::{
        traits::OptimOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Simplex, Theta,
        },
    },
};

/// Construct L-BFGS with the Hager–Zhang line search.
///
/// Uses `opts.lbfgs_mem` (default [`DEFAULT_LBFGS_MEM`]) and applies the
/// optional gradient and cost tolerances.
pub fn build_optimizer_hager_zhang(opts: &OptimOptions) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct L-BFGS with the More–Thuente line search.
pub fn build_optimizer_more_thuente(opts: &OptimOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional gradient and cost tolerances to an L-BFGS solver.
///
/// When a tolerance is `None` argmin's default stays in effect.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &OptimOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}

/// Construct a Nelder–Mead solver around `theta0`.
///
/// The initial simplex holds `theta0` and, for each coordinate `i`,
/// `theta0 + step·e_i`. `opts.tols.tol_cost` becomes the standard-deviation
/// tolerance of the simplex costs.
///
/// # Errors
/// - [`OptError::InvalidParameter`] if `theta0` is empty.
/// - Argmin rejections of the tolerance, converted via `From`.
pub fn build_optimizer_nelder_mead(theta0: &Theta, opts: &OptimOptions) -> OptResult<Simplex> {
    if theta0.is_empty() {
        return Err(OptError::InvalidParameter {
            text: "Nelder-Mead needs at least one free parameter.".to_string(),
        });
    }
    let mut solver = Simplex::new(initial_simplex(theta0, opts.simplex_step));
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_sd_tolerance(c)?;
    }
    Ok(solver)
}

/// `theta0` followed by one vertex per coordinate offset by `step`.
pub fn initial_simplex(theta0: &Theta, step: f64) -> Vec<Theta> {
    let mut vertices = Vec::with_capacity(theta0.len() + 1);
    vertices.push(theta0.clone());
    for i in 0..theta0.len() {
        let mut v = theta0.clone();
        v[i] += step;
        vertices.push(v);
    }
    vertices
}
