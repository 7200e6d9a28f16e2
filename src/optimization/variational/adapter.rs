//! Adapter that exposes an [`ExpectationEvaluator`] over a parameter set as
//! an `argmin` problem.
//!
//! The solver proposes raw vectors `θ`. For each proposal the adapter
//! (optionally) projects `θ` into the constraint box, writes it into a
//! scratch copy of the parameter set, expands the angles, and asks the
//! evaluator for the expectation value, which is the cost. Every accepted
//! cost is appended to a caller-owned history.
//!
//! Gradients are always finite differences of the cost: central first,
//! forward as a fallback.
use std::cell::RefCell;

use crate::{
    optimization::{
        errors::{OptError, OptResult},
        variational::{
            traits::ExpectationEvaluator,
            types::{Cost, Grad, Theta},
            validation::validate_grad,
        },
    },
    parametrization::ParameterSet,
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;

/// Bridges an [`ExpectationEvaluator`] to `argmin`'s `CostFunction` and `Gradient`.
///
/// Fields
/// ------
/// - `evaluator`: the circuit evaluator.
/// - `scratch`: working copy of the parameter set, overwritten per evaluation.
/// - `bounds`: sorted `(lo, hi)` per raw entry when projection is enabled.
/// - `history`: caller-owned log of every expectation value.
#[derive(Debug)]
pub struct ArgMinAdapter<'a, E: ExpectationEvaluator> {
    pub evaluator: &'a E,
    scratch: RefCell<ParameterSet>,
    bounds: Option<Vec<(f64, f64)>>,
    history: &'a RefCell<Vec<f64>>,
}

impl<'a, E: ExpectationEvaluator> ArgMinAdapter<'a, E> {
    /// Construct an adapter over `evaluator`, starting from `params`.
    ///
    /// When `bounded` is set, the constraint list of `params` is fetched and
    /// each `(a, b)` pair is sorted into `(min, max)` for projection.
    ///
    /// # Errors
    /// - `OptError::Parametrization(UnsupportedVariant)` if `bounded` is set
    ///   for a variant without constraints.
    pub fn new(
        evaluator: &'a E, params: &ParameterSet, bounded: bool, history: &'a RefCell<Vec<f64>>,
    ) -> OptResult<Self> {
        let bounds = if bounded {
            let constraints = params.get_constraints()?;
            Some(constraints.into_iter().map(|(a, b)| (a.min(b), a.max(b))).collect())
        } else {
            None
        };
        Ok(Self { evaluator, scratch: RefCell::new(params.clone()), bounds, history })
    }

    /// Sorted box used for projection, if any.
    pub fn bounds(&self) -> Option<&[(f64, f64)]> {
        self.bounds.as_deref()
    }

    /// Clamp `theta` into the box, or return it unchanged when unbounded.
    pub fn project(&self, theta: &Theta) -> Theta {
        project_into_box(theta, self.bounds())
    }

    fn evaluate(&self, theta: &Theta) -> OptResult<Cost> {
        let theta = self.project(theta);
        let angles = {
            let mut scratch = self.scratch.borrow_mut();
            scratch.update_from_raw(theta.view())?;
            scratch.to_expanded_angles()
        };
        let value = self.evaluator.expectation(&angles)?;
        if !value.is_finite() {
            return Err(OptError::NonFiniteCost { value });
        }
        self.history.borrow_mut().push(value);
        Ok(value)
    }
}

impl<'a, E: ExpectationEvaluator> CostFunction for ArgMinAdapter<'a, E> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the expectation at the (projected) raw vector.
    ///
    /// # Errors
    /// - `OptError::Parametrization` if the raw vector has the wrong length
    ///   or non-finite entries.
    /// - Any `OptError` from the evaluator; `NonFiniteCost` for NaN/±inf.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.evaluate(theta)?)
    }
}

impl<'a, E: ExpectationEvaluator> Gradient for ArgMinAdapter<'a, E> {
    type Param = Theta;
    type Gradient = Grad;

    /// Finite-difference gradient of the cost.
    ///
    /// - Central differences first.
    /// - If a cost evaluation failed (captured via `closure_err`) or the
    ///   result is not finite, retry once with forward differences.
    ///
    /// The FD closure must return `f64`, so the first error is stored in
    /// `closure_err` and the closure returns `NaN`.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = theta.len();
        let closure_err: RefCell<Option<Error>> = RefCell::new(None);
        let cost_func = |theta: &Theta| -> f64 {
            match self.cost(theta) {
                Ok(val) => val,
                Err(e) => {
                    let mut slot = closure_err.borrow_mut();
                    if slot.is_none() {
                        *slot = Some(e);
                    }
                    f64::NAN
                }
            }
        };
        let fd_grad = theta.central_diff(&cost_func);
        if closure_err.borrow().is_some() {
            return run_fd_diff(theta, &cost_func, &closure_err);
        }
        match validate_grad(&fd_grad, dim) {
            Ok(()) => Ok(fd_grad),
            Err(_) => run_fd_diff(theta, &cost_func, &closure_err),
        }
    }
}

/// Clamp each entry of `theta` into its `(lo, hi)` pair; `lo <= hi` is assumed.
pub fn project_into_box(theta: &Theta, bounds: Option<&[(f64, f64)]>) -> Theta {
    let mut out = theta.clone();
    if let Some(bounds) = bounds {
        for (x, &(lo, hi)) in out.iter_mut().zip(bounds.iter()) {
            *x = x.clamp(lo, hi);
        }
    }
    out
}

/// Forward-difference gradient of `func` at `theta`, with error capture.
///
/// # Errors
/// Returns any error captured while evaluating `func` or raised when
/// validating the resulting gradient.
fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> Result<Grad, Error> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, theta.len())?;
    Ok(fd_grad)
}
