#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    cost::CostSpecification,
    optimization::{
        errors::{OptError, OptResult},
        variational::{ExpectationEvaluator, LineSearcher, OptimOptions, SolverChoice, Tolerances},
    },
    parametrization::{ExpandedAngles, ParametrizationKind, RampOptions, Variant},
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray_bound(py).readonly())
}

/// Copy an array-like of `f64` into an owned raw vector.
#[cfg(feature = "python-bindings")]
pub fn extract_raw<'py>(py: Python<'py>, raw: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("raw must be a 1-D contiguous float64 array or sequence")
    })?;
    Ok(Array1::from(slice.to_vec()))
}

#[cfg(feature = "python-bindings")]
pub fn extract_cost_spec(
    register: Vec<usize>, singles: Vec<(usize, f64)>, pairs: Vec<((usize, usize), f64)>,
) -> PyResult<CostSpecification> {
    Ok(CostSpecification::new(register, &singles, &pairs)?)
}

/// Map a variant name and optional Fourier order onto a kind.
#[cfg(feature = "python-bindings")]
pub fn extract_kind(variant: &str, q: Option<usize>) -> PyResult<ParametrizationKind> {
    use std::str::FromStr;

    let kind = match Variant::from_str(variant)? {
        Variant::Standard => ParametrizationKind::Standard,
        Variant::Extended => ParametrizationKind::Extended,
        Variant::Annealing => ParametrizationKind::Annealing,
        Variant::Fourier => match q {
            Some(q) => ParametrizationKind::Fourier { q },
            None => return Err(PyValueError::new_err("the Fourier variant requires q")),
        },
    };
    Ok(kind)
}

#[cfg(feature = "python-bindings")]
pub fn extract_ramp_opts(dt: Option<f64>, total_time: Option<f64>) -> PyResult<RampOptions> {
    let defaults = RampOptions::default();
    Ok(RampOptions::new(dt.unwrap_or(defaults.dt), total_time)?)
}

#[cfg(feature = "python-bindings")]
pub fn extract_optim_opts(
    solver: Option<&str>, tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    line_searcher: Option<&str>, lbfgs_mem: Option<usize>, simplex_step: Option<f64>,
    bounded: Option<bool>,
) -> PyResult<OptimOptions> {
    use std::str::FromStr;

    let tols = Tolerances::new(tol_grad, tol_cost, max_iter)?;
    let solver = match solver {
        Some(name) => SolverChoice::from_str(name)?,
        None => SolverChoice::NelderMead,
    };
    let ls = match line_searcher {
        Some(name) => LineSearcher::from_str(name)?,
        None => LineSearcher::MoreThuente,
    };
    let opts = OptimOptions::new(
        tols,
        solver,
        ls,
        false,
        lbfgs_mem,
        simplex_step,
        bounded.unwrap_or(false),
    )?;
    Ok(opts)
}

/// Evaluator backed by a Python callable `f(mixer, single_cost, pair_cost) -> float`.
///
/// Each argument is a list of rows, one row per step.
#[cfg(feature = "python-bindings")]
pub struct PyEvaluator {
    pub callable: Py<PyAny>,
}

#[cfg(feature = "python-bindings")]
impl ExpectationEvaluator for PyEvaluator {
    fn expectation(&self, angles: &ExpandedAngles) -> OptResult<f64> {
        Python::with_gil(|py| {
            let args = (
                rows(&angles.mixer),
                rows(&angles.single_cost),
                rows(&angles.pair_cost),
            );
            self.callable
                .call1(py, args)
                .and_then(|value| value.extract::<f64>(py))
                .map_err(|e| OptError::EvaluatorFailed { reason: e.to_string() })
        })
    }
}

/// Convert an `Array2<f64>` into row-major `Vec<Vec<f64>>`.
#[cfg(feature = "python-bindings")]
pub fn rows(matrix: &ndarray::Array2<f64>) -> Vec<Vec<f64>> {
    matrix.outer_iter().map(|row| row.to_vec()).collect()
}
