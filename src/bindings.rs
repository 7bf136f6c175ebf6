//! Python surface of the crate: every argument goes through the verifier
//! before the typed functions in [`crate::activations`] see it.

use pyo3::prelude::*;
use pyo3::types::PyFloat;
use pyo3::wrap_pyfunction;

use crate::activations::{self, Activation};
use crate::numeric::Scalar;
use crate::verifier::{numpy_type, verify_index, verify_numeric, verify_sequence};

/// Scalars go back to Python as the type they arrived as: `int`, `float` or
/// the matching numpy scalar.
impl<'py> IntoPyObject<'py> for Scalar {
    type Target = PyAny;
    type Output = Bound<'py, PyAny>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        let raw = match self {
            Scalar::Int(v) | Scalar::Int64(v) => v.into_pyobject(py)?.into_any(),
            Scalar::LargeInt(v) => PyFloat::new(py, v).call_method0("__int__")?,
            Scalar::Int8(v)    => v.into_pyobject(py)?.into_any(),
            Scalar::Int16(v)   => v.into_pyobject(py)?.into_any(),
            Scalar::Int32(v)   => v.into_pyobject(py)?.into_any(),
            Scalar::UInt8(v)   => v.into_pyobject(py)?.into_any(),
            Scalar::UInt16(v)  => v.into_pyobject(py)?.into_any(),
            Scalar::UInt32(v)  => v.into_pyobject(py)?.into_any(),
            Scalar::UInt64(v)  => v.into_pyobject(py)?.into_any(),
            Scalar::Float(v) | Scalar::Float64(v) => PyFloat::new(py, v).into_any(),
            Scalar::Float16(v) | Scalar::Float32(v) => PyFloat::new(py, f64::from(v)).into_any(),
        };
        match numpy_type(py, self.kind())? {
            Some(ty) => ty.call1((raw,)),
            None => Ok(raw),
        }
    }
}

/// Hand back the caller's own object when the activation returned its input
/// untouched, so unbounded ints and numpy scalars survive unchanged.
fn pass_through<'py>(input: &Bound<'py, PyAny>, value: Scalar, result: Scalar) -> PyResult<Bound<'py, PyAny>> {
    if result == value {
        Ok(input.clone())
    } else {
        result.into_pyobject(input.py())
    }
}

/// Heaviside step function: `1` if `x >= threshold`, else `0`.
#[pyfunction]
#[pyo3(name = "step", signature = (x, threshold = Scalar::Int(0)))]
fn py_step(
    #[pyo3(from_py_with = verify_numeric)] x: Scalar,
    #[pyo3(from_py_with = verify_numeric)] threshold: Scalar,
) -> u8 {
    activations::step_with_threshold(x, threshold)
}

/// Sigmoid function `1 / (1 + exp(-x))`.
#[pyfunction]
#[pyo3(name = "sigmoid")]
fn py_sigmoid(#[pyo3(from_py_with = verify_numeric)] x: Scalar) -> f64 {
    activations::sigmoid(x)
}

/// Rectified Linear Unit `max(0, x)`.
#[pyfunction]
#[pyo3(name = "relu")]
fn py_relu<'py>(x: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    let value = verify_numeric(x)?;
    pass_through(x, value, activations::relu(value))
}

/// Leaky Rectified Linear Unit: `x` if `x >= 0`, else `x / 10`.
#[pyfunction]
#[pyo3(name = "leaky_relu")]
fn py_leaky_relu<'py>(x: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    let value = verify_numeric(x)?;
    pass_through(x, value, activations::leaky_relu(value))
}

/// Hyperbolic tangent computed from exponentials.
#[pyfunction]
#[pyo3(name = "tanh")]
fn py_tanh(#[pyo3(from_py_with = verify_numeric)] x: Scalar) -> f64 {
    activations::tanh(x)
}

/// Softmax distribution of a list or ndarray.
///
/// With `n`, returns the single-element list `[distribution[n]]`.
#[pyfunction]
#[pyo3(name = "softmax", signature = (x, n=None))]
fn py_softmax(x: &Bound<'_, PyAny>, n: Option<&Bound<'_, PyAny>>) -> PyResult<Vec<f64>> {
    let values = verify_sequence(x)?;
    let index = n.map(verify_index).transpose()?;
    Ok(activations::softmax(&values, index)?)
}

/// Parametric Rectified Linear Unit `max(lp * x, x)`.
#[pyfunction]
#[pyo3(name = "prelu")]
fn py_prelu<'py>(
    x: &Bound<'py, PyAny>,
    #[pyo3(from_py_with = verify_numeric)] lp: Scalar,
) -> PyResult<Bound<'py, PyAny>> {
    let value = verify_numeric(x)?;
    pass_through(x, value, activations::prelu(value, lp))
}

/// Exponential Linear Unit: `x` if `x > 0`, else `alpha * (exp(x) - 1)`.
#[pyfunction]
#[pyo3(name = "elu")]
fn py_elu<'py>(
    x: &Bound<'py, PyAny>,
    #[pyo3(from_py_with = verify_numeric)] alpha: Scalar,
) -> PyResult<Bound<'py, PyAny>> {
    let value = verify_numeric(x)?;
    pass_through(x, value, activations::elu(value, alpha))
}

/// Softplus function `log(1 + exp(x))`.
#[pyfunction]
#[pyo3(name = "softplus")]
fn py_softplus(#[pyo3(from_py_with = verify_numeric)] x: Scalar) -> f64 {
    activations::softplus(x)
}

/// Apply a single-argument activation selected by name.
#[pyfunction]
#[pyo3(name = "apply")]
fn py_apply<'py>(name: &str, x: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    let activation: Activation = name.parse()?;
    let value = verify_numeric(x)?;
    pass_through(x, value, activation.apply(value))
}

// Create a module to expose the functions to Python
#[pymodule]
fn rsactivations(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(py_step, m)?)?;
    m.add_function(wrap_pyfunction!(py_sigmoid, m)?)?;
    m.add_function(wrap_pyfunction!(py_relu, m)?)?;
    m.add_function(wrap_pyfunction!(py_leaky_relu, m)?)?;
    m.add_function(wrap_pyfunction!(py_tanh, m)?)?;
    m.add_function(wrap_pyfunction!(py_softmax, m)?)?;
    m.add_function(wrap_pyfunction!(py_prelu, m)?)?;
    m.add_function(wrap_pyfunction!(py_elu, m)?)?;
    m.add_function(wrap_pyfunction!(py_softplus, m)?)?;
    m.add_function(wrap_pyfunction!(py_apply, m)?)?;

    let names: Vec<&str> = Activation::ALL.iter().map(|a| a.name()).collect();
    m.add("ACTIVATIONS", names)?;
    Ok(())
}
