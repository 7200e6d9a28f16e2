//! High-level entry point for tuning QAOA angles against an evaluator.
//!
//! Wraps a [`ParameterSet`] and an [`ExpectationEvaluator`] in an
//! `ArgMinAdapter`, selects Nelder–Mead or L-BFGS from the options, runs it
//! and writes the best raw vector back into the parameter set.
use std::cell::RefCell;

use tracing::{debug, info};

use crate::{
    optimization::{
        errors::OptResult,
        variational::{
            adapter::ArgMinAdapter,
            builders::{
                build_optimizer_hager_zhang, build_optimizer_more_thuente,
                build_optimizer_nelder_mead,
            },
            run::{run_lbfgs, run_nelder_mead},
            traits::{ExpectationEvaluator, LineSearcher, OptimOptions, OptimOutcome, SolverChoice},
        },
    },
    parametrization::ParameterSet,
};

/// Minimize the expectation value of `evaluator` over the raw vector of
/// `params`.
///
/// # Behavior
/// - Calls `evaluator.check(params)` once.
/// - Starts from `params.raw()`, projected into the constraint box when
///   `opts.bounded` is set.
/// - Runs Nelder–Mead or L-BFGS (with the chosen line search) per
///   `opts.solver`.
/// - On success, `params` holds the best raw vector found and the outcome
///   carries the full history of evaluated expectation values.
///
/// On error `params` is left untouched.
///
/// # Errors
/// - Any error from `evaluator.check` or `evaluator.expectation`.
/// - `OptError::Parametrization(UnsupportedVariant)` when `opts.bounded` is
///   set for a variant without constraints.
/// - Builder and runtime errors from argmin, converted into `OptError`.
///
/// # Example
/// ```no_run
/// use qaoa_params::cost::CostSpecification;
/// use qaoa_params::optimization::errors::OptResult;
/// use qaoa_params::optimization::variational::{ExpectationEvaluator, OptimOptions, minimize};
/// use qaoa_params::parametrization::{ExpandedAngles, ParameterSet, ParametrizationKind, RampOptions};
///
/// struct Toy;
/// impl ExpectationEvaluator for Toy {
///     fn expectation(&self, angles: &ExpandedAngles) -> OptResult<f64> {
///         Ok(angles.mixer.mapv(|b| (b - 0.3).powi(2)).sum())
///     }
/// }
///
/// let spec = CostSpecification::new(vec![0, 1], &[(0, 1.0)], &[((0, 1), 1.0)])?;
/// let mut params = ParameterSet::linear_ramp_init(
///     &spec, ParametrizationKind::Standard, 2, &RampOptions::default(),
/// )?;
/// let out = minimize(&Toy, &mut params, &OptimOptions::default())?;
/// println!("best = {:.6} after {} iterations", out.value, out.iterations);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn minimize<E: ExpectationEvaluator>(
    evaluator: &E, params: &mut ParameterSet, opts: &OptimOptions,
) -> OptResult<OptimOutcome> {
    evaluator.check(params)?;
    let history = RefCell::new(Vec::new());
    let problem = ArgMinAdapter::new(evaluator, params, opts.bounded, &history)?;
    let theta0 = problem.project(&params.raw());
    info!(
        variant = %params.variant(),
        n_steps = params.n_steps(),
        n_raw = theta0.len(),
        solver = ?opts.solver,
        bounded = opts.bounded,
        "starting angle optimization"
    );

    let outcome = match opts.solver {
        SolverChoice::NelderMead => {
            let solver = build_optimizer_nelder_mead(&theta0, opts)?;
            run_nelder_mead(opts, problem, solver, &history)?
        }
        SolverChoice::Lbfgs => match opts.line_searcher {
            LineSearcher::MoreThuente => {
                let solver = build_optimizer_more_thuente(opts)?;
                run_lbfgs(theta0, opts, problem, solver, &history)?
            }
            LineSearcher::HagerZhang => {
                let solver = build_optimizer_hager_zhang(opts)?;
                run_lbfgs(theta0, opts, problem, solver, &history)?
            }
        },
    };

    params.update_from_raw(outcome.raw_hat.view())?;
    info!(
        value = outcome.value,
        iterations = outcome.iterations,
        converged = outcome.converged,
        "finished angle optimization"
    );
    debug!(status = %outcome.status, evaluations = outcome.history.len(), "termination");
    Ok(outcome)
}
