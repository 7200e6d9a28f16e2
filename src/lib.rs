//! qaoa_params — QAOA parametrizations with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the parametrization layer to Python via the `_qaoa_params`
//! extension module. The crate turns a QUBO / Ising cost specification into
//! compact, optimizer-facing angle encodings and expands them back into the
//! per-timestep, per-term rotation angles a circuit evaluator consumes.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`cost`, `parametrization`,
//!   `optimization`) as the public crate surface.
//! - Define a `#[pyclass]` wrapper around [`ParameterSet`] and the
//!   `#[pymodule]` initializer for the `_qaoa_params` extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input validation, and error mapping.
//! - Errors from core Rust code are converted to Python `ValueError`s at the
//!   PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on the inner modules and can ignore the
//!   items guarded by the `python-bindings` feature.
//! - Python callers build a `QAOAParameters` with `linear_ramp`, hand
//!   `raw()` to their optimizer, and push results back with
//!   `update_from_raw`, or call `minimize` with a Python evaluator.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   pipeline test in `tests/`.

pub mod cost;
pub mod optimization;
pub mod parametrization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::variational::{OptimOutcome, minimize},
    parametrization::ParameterSet,
    utils::{
        PyEvaluator, extract_cost_spec, extract_kind, extract_optim_opts, extract_ramp_opts,
        extract_raw, rows,
    },
};

/// QAOAParameters — Python-facing wrapper for a [`ParameterSet`].
///
/// Constructed from Python via
/// `QAOAParameters.linear_ramp(register, singles, pairs, variant, n_steps, q=None, dt=None, total_time=None)`,
/// where `singles` is a list of `(qubit, weight)` and `pairs` a list of
/// `((i, j), weight)`.
///
/// Notes
/// -----
/// - Native Rust callers should use [`ParameterSet`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "qaoa_params")]
pub struct QAOAParameters {
    pub inner: ParameterSet,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl QAOAParameters {
    #[staticmethod]
    #[pyo3(
        signature = (register, singles, pairs, variant, n_steps, q = None, dt = None, total_time = None),
        text_signature = "(register, singles, pairs, variant, n_steps, /, q=None, dt=None, total_time=None)"
    )]
    pub fn linear_ramp(
        register: Vec<usize>, singles: Vec<(usize, f64)>, pairs: Vec<((usize, usize), f64)>,
        variant: &str, n_steps: usize, q: Option<usize>, dt: Option<f64>, total_time: Option<f64>,
    ) -> PyResult<Self> {
        let spec = extract_cost_spec(register, singles, pairs)?;
        let kind = extract_kind(variant, q)?;
        let opts = extract_ramp_opts(dt, total_time)?;
        let inner = ParameterSet::linear_ramp_init(&spec, kind, n_steps, &opts)?;
        Ok(QAOAParameters { inner })
    }

    #[getter]
    pub fn variant(&self) -> String {
        self.inner.variant().to_string()
    }

    #[getter]
    pub fn n_steps(&self) -> usize {
        self.inner.n_steps()
    }

    pub fn raw(&self) -> Vec<f64> {
        self.inner.raw().to_vec()
    }

    pub fn update_from_raw<'py>(&mut self, py: Python<'py>, raw: &Bound<'py, PyAny>) -> PyResult<()> {
        let raw = extract_raw(py, raw)?;
        self.inner.update_from_raw(raw.view())?;
        Ok(())
    }

    pub fn constraints(&self) -> PyResult<Vec<(f64, f64)>> {
        Ok(self.inner.get_constraints()?)
    }

    /// `(mixer, single_cost, pair_cost)` as row-major lists, one row per step.
    pub fn expanded_angles(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let angles = self.inner.to_expanded_angles();
        (rows(&angles.mixer), rows(&angles.single_cost), rows(&angles.pair_cost))
    }

    #[pyo3(
        signature = (
            evaluator,
            solver = None,
            tol_grad = None,
            tol_cost = None,
            max_iter = None,
            line_searcher = None,
            lbfgs_mem = None,
            simplex_step = None,
            bounded = None,
        ),
        text_signature = "(self, evaluator, /, solver='NelderMead', tol_grad=None, tol_cost=None, \
                          max_iter=None, line_searcher='MoreThuente', lbfgs_mem=None, \
                          simplex_step=None, bounded=False)"
    )]
    pub fn minimize(
        &mut self, evaluator: Py<PyAny>, solver: Option<&str>, tol_grad: Option<f64>,
        tol_cost: Option<f64>, max_iter: Option<usize>, line_searcher: Option<&str>,
        lbfgs_mem: Option<usize>, simplex_step: Option<f64>, bounded: Option<bool>,
    ) -> PyResult<QAOAOptimOutcome> {
        let opts = extract_optim_opts(
            solver,
            tol_grad,
            tol_cost,
            max_iter,
            line_searcher,
            lbfgs_mem,
            simplex_step,
            bounded,
        )?;
        let evaluator = PyEvaluator { callable: evaluator };
        let outcome = minimize(&evaluator, &mut self.inner, &opts)?;
        Ok(QAOAOptimOutcome { inner: outcome })
    }
}

/// QAOAOptimOutcome — read-only view of an [`OptimOutcome`] for Python.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "qaoa_params")]
pub struct QAOAOptimOutcome {
    pub inner: OptimOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl QAOAOptimOutcome {
    #[getter]
    pub fn raw_hat(&self) -> Vec<f64> {
        self.inner.raw_hat.to_vec()
    }

    #[getter]
    pub fn value(&self) -> f64 {
        self.inner.value
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn status(&self) -> String {
        self.inner.status.clone()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn grad_norm(&self) -> Option<f64> {
        self.inner.grad_norm
    }

    #[getter]
    pub fn history(&self) -> Vec<f64> {
        self.inner.history.clone()
    }

    #[getter]
    pub fn fn_evals(&self) -> Vec<(String, u64)> {
        self.inner.fn_evals.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }
}

/// _qaoa_params — PyO3 module initializer for the Python extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _qaoa_params<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<QAOAParameters>()?;
    m.add_class::<QAOAOptimOutcome>()?;
    Ok(())
}
