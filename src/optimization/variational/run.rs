//! Execution helpers that run an `argmin` solver on an expectation problem
//! and return a crate-friendly [`OptimOutcome`].
use std::cell::RefCell;

use crate::optimization::{
    errors::OptResult,
    variational::{
        adapter::{ArgMinAdapter, project_into_box},
        traits::{ExpectationEvaluator, OptimOptions, OptimOutcome},
        types::{Grad, Theta},
    },
};
#[cfg(feature = "obs_slog")]
use argmin::core::CostFunction;
use argmin::core::{Executor, IterState, Solver, State};

/// Run a gradient-based solver (L-BFGS) over an [`ArgMinAdapter`].
///
/// Wires up the adapter, the solver, `theta0`, the optional slog observer
/// (feature `obs_slog`, only when `opts.verbose`) and `max_iters`, then runs
/// the executor and converts its final state into an [`OptimOutcome`].
///
/// The best raw vector is projected into the adapter's box before it is
/// returned, so bounded runs never report a point outside the constraints.
///
/// # Errors
/// - Any `argmin` runtime error, converted via `From<argmin::core::Error>`.
/// - Validation errors from [`OptimOutcome::new`].
pub fn run_lbfgs<'a, E, S>(
    theta0: Theta, opts: &OptimOptions, problem: ArgMinAdapter<'a, E>, solver: S,
    history: &RefCell<Vec<f64>>,
) -> OptResult<OptimOutcome>
where
    E: ExpectationEvaluator,
    S: Solver<ArgMinAdapter<'a, E>, IterState<Theta, Grad, (), (), (), f64>> + Send + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&theta0, &problem)?;
    }
    let bounds = problem.bounds().map(<[(f64, f64)]>::to_vec);
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let grad = result.take_gradient();
    let raw_hat = result.take_best_param().map(|t| project_into_box(&t, bounds.as_deref()));
    OptimOutcome::new(
        raw_hat,
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        grad,
        history.borrow().clone(),
    )
}

/// Run a derivative-free solver (Nelder–Mead) over an [`ArgMinAdapter`].
///
/// Same wiring as [`run_lbfgs`]; the initial point comes from the simplex
/// held by the solver, so no parameter is set on the state and the outcome
/// carries no gradient norm.
pub fn run_nelder_mead<'a, E, S>(
    opts: &OptimOptions, problem: ArgMinAdapter<'a, E>, solver: S, history: &RefCell<Vec<f64>>,
) -> OptResult<OptimOutcome>
where
    E: ExpectationEvaluator,
    S: Solver<ArgMinAdapter<'a, E>, IterState<Theta, (), (), (), (), f64>> + Send + 'static,
{
    let bounds = problem.bounds().map(<[(f64, f64)]>::to_vec);
    let mut optimizer = Executor::new(problem, solver);
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let raw_hat = result.take_best_param().map(|t| project_into_box(&t, bounds.as_deref()));
    OptimOutcome::new(
        raw_hat,
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        None,
        history.borrow().clone(),
    )
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<E>(theta0: &Theta, problem: &ArgMinAdapter<'_, E>) -> OptResult<()>
where
    E: ExpectationEvaluator,
{
    let c0 = problem.cost(theta0)?;
    tracing::debug!(cost = c0, n_raw = theta0.len(), "initial expectation");
    Ok(())
}
