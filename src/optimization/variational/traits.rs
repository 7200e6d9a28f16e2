//! Public API surface for variational parameter optimization.
//!
//! - [`ExpectationEvaluator`]: trait a circuit evaluator implements.
//! - [`OptimOptions`] and [`Tolerances`]: configuration for the driver.
//! - [`SolverChoice`] / [`LineSearcher`]: which argmin solver runs.
//! - [`OptimOutcome`]: normalized result returned by `minimize`.
//!
//! Convention: the driver *minimizes* the expectation value `E(θ)` returned
//! by the evaluator, where `θ` is the raw vector of a
//! [`ParameterSet`]. Evaluators never see raw vectors, only
//! [`ExpandedAngles`].
use crate::{
    optimization::{
        errors::{OptError, OptResult},
        variational::{
            types::{DEFAULT_SIMPLEX_STEP, FnEvalMap, Grad, Theta},
            validation::{
                validate_raw_hat, validate_value, verify_simplex_step, verify_tol_cost,
                verify_tol_grad,
            },
        },
    },
    parametrization::{ExpandedAngles, ParameterSet},
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// User-implemented circuit evaluator.
///
/// Required:
/// - `expectation(&ExpandedAngles) -> OptResult<f64>`: expectation value of
///   the cost Hamiltonian for the given angles. Return
///   [`OptError::EvaluatorFailed`] (or any other `OptError`) on failure.
///
/// Optional:
/// - `check(&ParameterSet) -> OptResult<()>`: reject a parameter set the
///   evaluator cannot handle (e.g., a register larger than it simulates).
///   Called once before optimization.
pub trait ExpectationEvaluator {
    fn expectation(&self, angles: &ExpandedAngles) -> OptResult<f64>;

    fn check(&self, _params: &ParameterSet) -> OptResult<()> {
        Ok(())
    }
}

/// Choice of argmin solver.
///
/// Parsing is case-insensitive: `"NelderMead"`, `"LBFGS"` (also
/// `"nelder-mead"`, `"l-bfgs"`). Unknown names return
/// `OptError::InvalidSolver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverChoice {
    /// Derivative-free simplex search.
    #[default]
    NelderMead,
    /// Quasi-Newton with finite-difference gradients.
    Lbfgs,
}

impl FromStr for SolverChoice {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "neldermead" => Ok(SolverChoice::NelderMead),
            "lbfgs" => Ok(SolverChoice::Lbfgs),
            _ => Err(OptError::InvalidSolver {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'NelderMead' or 'LBFGS'.",
            }),
        }
    }
}

/// Choice of line search used inside the L-BFGS solver.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"MoreThuente"`, `"HagerZhang"`). Unknown names return
/// `OptError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Driver configuration.
///
/// Fields:
/// - `tols: Tolerances`: tolerances and iteration limit.
/// - `solver: SolverChoice`: Nelder–Mead (default) or L-BFGS.
/// - `line_searcher: LineSearcher`: line search used by L-BFGS.
/// - `verbose: bool`: attaches a terminal observer (behind the `obs_slog`
///   feature).
/// - `lbfgs_mem: Option<usize>`: L-BFGS history size (default 7).
/// - `simplex_step: f64`: offset of the initial simplex vertices.
/// - `bounded: bool`: project every proposal into the box from
///   [`ParameterSet::get_constraints`] (Extended parameters only).
///
/// Default:
/// - `tols`: `tol_grad = 1e-6`, `tol_cost = None`, `max_iter = 300`
/// - `solver`: `NelderMead`, `line_searcher`: `MoreThuente`
/// - `verbose`: `false`, `lbfgs_mem`: `None`, `simplex_step`: `0.1`,
///   `bounded`: `false`
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOptions {
    pub tols: Tolerances,
    pub solver: SolverChoice,
    pub line_searcher: LineSearcher,
    pub verbose: bool,
    pub lbfgs_mem: Option<usize>,
    pub simplex_step: f64,
    pub bounded: bool,
}

impl OptimOptions {
    /// Create validated driver options.
    ///
    /// # Errors
    /// - [`OptError::InvalidLBFGSMem`] if `lbfgs_mem == Some(0)`.
    /// - [`OptError::InvalidSimplexStep`] if `simplex_step` is non-finite or ≤ 0.
    pub fn new(
        tols: Tolerances, solver: SolverChoice, line_searcher: LineSearcher, verbose: bool,
        lbfgs_mem: Option<usize>, simplex_step: Option<f64>, bounded: bool,
    ) -> OptResult<Self> {
        if let Some(m) = lbfgs_mem {
            if m == 0 {
                return Err(OptError::InvalidLBFGSMem {
                    mem: m,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
        }
        let simplex_step = simplex_step.unwrap_or(DEFAULT_SIMPLEX_STEP);
        verify_simplex_step(simplex_step)?;
        Ok(Self { tols, solver, line_searcher, verbose, lbfgs_mem, simplex_step, bounded })
    }
}

impl Default for OptimOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances { tol_grad: Some(1e-6), tol_cost: None, max_iter: Some(300) },
            solver: SolverChoice::NelderMead,
            line_searcher: LineSearcher::MoreThuente,
            verbose: false,
            lbfgs_mem: None,
            simplex_step: DEFAULT_SIMPLEX_STEP,
            bounded: false,
        }
    }
}

/// Numerical tolerances and iteration limits used by the driver.
///
/// - `tol_grad`: L-BFGS stops when the gradient norm falls below this.
/// - `tol_cost`: L-BFGS stops when the cost change falls below this;
///   Nelder–Mead stops when the spread of simplex costs falls below this.
/// - `max_iter`: hard cap on the number of iterations.
///
/// At least one of the three must be provided (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if all three are `None`.
    /// - [`OptError::InvalidTolGrad`] / [`OptError::InvalidTolCost`] for
    ///   non-finite or non-positive tolerances.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> OptResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        verify_tol_grad(tol_grad)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// Canonical result returned by `minimize`.
///
/// - `raw_hat`: best raw vector found (projected into the box when bounded).
/// - `value`: best expectation value.
/// - `converged`: `true` if the solver stopped on its own criterion or a
///   target cost, `false` for iteration caps, interrupts or timeouts.
/// - `status`: human-readable termination status.
/// - `iterations`: number of solver iterations.
/// - `fn_evals`: argmin's counters (`cost_count`, `gradient_count`, ...).
/// - `grad_norm`: norm of the last gradient (L-BFGS only).
/// - `history`: every expectation value in evaluation order, including
///   finite-difference probes.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub raw_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
    pub history: Vec<f64>,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from solver state.
    ///
    /// # Errors
    /// - Propagates validation errors for `raw_hat` or `value`.
    pub fn new(
        raw_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>, history: Vec<f64>,
    ) -> OptResult<Self> {
        let raw_hat = validate_raw_hat(raw_hat_opt)?;
        validate_value(value)?;
        let converged = matches!(
            termination,
            TerminationStatus::Terminated(
                TerminationReason::SolverConverged | TerminationReason::TargetCostReached
            )
        );
        let status = match termination {
            TerminationStatus::NotTerminated => "Not terminated".to_string(),
            other => format!("{other:?}"),
        };
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self { raw_hat, value, converged, status, iterations, fn_evals, grad_norm, history })
    }
}
