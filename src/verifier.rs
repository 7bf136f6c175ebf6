use numpy::{dtype, PyArrayDescr, PyArrayDescrMethods, PyUntypedArray};
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyInt, PyList, PyType};

use crate::error::{Error, Result};
use crate::numeric::{Kind, Scalar};

/// Accepted set for every scalar argument.
pub const NUMERIC: &[Kind] = &Kind::ALL;
/// Accepted set for a sequence index: the interpreter's `int` only.
pub const INDEX: &[Kind] = &[Kind::Int];

/// Check that `value` is one of the `accepted` kinds and hand it back unchanged.
///
/// Matching is exact: a `numpy.int64` does not satisfy [`INDEX`] even though
/// it holds an integer, and nothing is coerced.
pub fn verify(value: Scalar, accepted: &[Kind]) -> Result<Scalar> {
    let kind = value.kind();
    if accepted.contains(&kind) {
        return Ok(value);
    }
    log::debug!("rejected {} argument, accepted set has {} kinds", kind, accepted.len());
    Err(Error::mismatch(kind.to_string(), accepted))
}

/// Classify a Python object by its exact type and [`verify`] it.
///
/// `bool`, `numpy.bool_`, subclasses of `int`/`float` and anything that is not
/// a number fail with [`Error::TypeMismatch`].
pub fn verify_object(obj: &Bound<'_, PyAny>, accepted: &[Kind]) -> PyResult<Scalar> {
    match classify(obj)? {
        Some(value) => Ok(verify(value, accepted)?),
        None => {
            let actual = type_name(obj);
            log::debug!("rejected non-numeric argument of type {}", actual);
            Err(Error::mismatch(actual, accepted).into())
        }
    }
}

/// [`verify_object`] against [`NUMERIC`], shaped for `#[pyo3(from_py_with = ...)]`.
///
/// An omitted argument never reaches this; an explicit `None` is rejected.
pub fn verify_numeric(obj: &Bound<'_, PyAny>) -> PyResult<Scalar> {
    verify_object(obj, NUMERIC)
}

/// Read a softmax input: exactly a `list` or a `numpy.ndarray` whose elements
/// all convert to `f64`.
pub fn verify_sequence(obj: &Bound<'_, PyAny>) -> PyResult<Vec<f64>> {
    if !(obj.is_exact_instance_of::<PyList>() || obj.is_exact_instance_of::<PyUntypedArray>()) {
        return Err(Error::TypeMismatch {
            actual: type_name(obj),
            expected: String::from("list, numpy.ndarray"),
        }
        .into());
    }

    let mut values = Vec::with_capacity(obj.len().unwrap_or(0));
    for item in obj.try_iter()? {
        let item = item?;
        let value = item
            .extract::<f64>()
            .map_err(|_| Error::mismatch(type_name(&item), &[Kind::Float]))?;
        values.push(value);
    }
    Ok(values)
}

/// Read a softmax index, which must be exactly an `int`.
///
/// Values beyond the platform's `isize` saturate; they are out of range for
/// any distribution either way.
pub fn verify_index(obj: &Bound<'_, PyAny>) -> PyResult<isize> {
    match verify_object(obj, INDEX)? {
        Scalar::Int(i) => Ok(i.clamp(isize::MIN as i64, isize::MAX as i64) as isize),
        Scalar::LargeInt(v) => Ok(if v < 0.0 { isize::MIN } else { isize::MAX }),
        other => Err(Error::mismatch(other.kind().to_string(), INDEX).into()),
    }
}

/// The numpy scalar type object for `kind`, or `None` for `int` and `float`.
pub(crate) fn numpy_type<'py>(py: Python<'py>, kind: Kind) -> PyResult<Option<Bound<'py, PyType>>> {
    let descr = match kind {
        Kind::Int | Kind::Float => return Ok(None),
        Kind::Int8    => dtype::<i8>(py),
        Kind::Int16   => dtype::<i16>(py),
        Kind::Int32   => dtype::<i32>(py),
        Kind::Int64   => dtype::<i64>(py),
        Kind::UInt8   => dtype::<u8>(py),
        Kind::UInt16  => dtype::<u16>(py),
        Kind::UInt32  => dtype::<u32>(py),
        Kind::UInt64  => dtype::<u64>(py),
        Kind::Float16 => PyArrayDescr::new(py, "float16")?,
        Kind::Float32 => dtype::<f32>(py),
        Kind::Float64 => dtype::<f64>(py),
    };
    Ok(Some(descr.typeobj()))
}

fn classify(obj: &Bound<'_, PyAny>) -> PyResult<Option<Scalar>> {
    if obj.is_exact_instance_of::<PyInt>() {
        return extract_int(obj).map(Some);
    }
    if obj.is_exact_instance_of::<PyFloat>() {
        return Ok(Some(Scalar::Float(obj.extract()?)));
    }

    let ty = obj.get_type();
    for kind in Kind::ALL {
        let Some(numpy_ty) = numpy_type(obj.py(), kind)? else { continue };
        if ty.as_ptr() == numpy_ty.as_ptr() {
            return extract(obj, kind).map(Some);
        }
    }
    Ok(None)
}

fn extract(obj: &Bound<'_, PyAny>, kind: Kind) -> PyResult<Scalar> {
    let value = match kind {
        Kind::Int     => extract_int(obj)?,
        Kind::Float   => Scalar::Float(obj.extract()?),
        Kind::Int8    => Scalar::Int8(obj.extract()?),
        Kind::Int16   => Scalar::Int16(obj.extract()?),
        Kind::Int32   => Scalar::Int32(obj.extract()?),
        Kind::Int64   => Scalar::Int64(obj.extract()?),
        Kind::UInt8   => Scalar::UInt8(obj.extract()?),
        Kind::UInt16  => Scalar::UInt16(obj.extract()?),
        Kind::UInt32  => Scalar::UInt32(obj.extract()?),
        Kind::UInt64  => Scalar::UInt64(obj.extract()?),
        Kind::Float16 => Scalar::Float16(obj.extract()?),
        Kind::Float32 => Scalar::Float32(obj.extract()?),
        Kind::Float64 => Scalar::Float64(obj.extract()?),
    };
    Ok(value)
}

/// Interpreter ints are unbounded; those outside `i64` keep their `f64`
/// approximation, saturating to an infinity of the same sign.
fn extract_int(obj: &Bound<'_, PyAny>) -> PyResult<Scalar> {
    if let Ok(v) = obj.extract::<i64>() {
        return Ok(Scalar::Int(v));
    }
    let approx = match obj.extract::<f64>() {
        Ok(v) => v,
        Err(_) if obj.lt(0_i64)? => f64::NEG_INFINITY,
        Err(_) => f64::INFINITY,
    };
    Ok(Scalar::LargeInt(approx))
}

fn type_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| String::from("object"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_returns_value_unchanged() {
        for value in [
            Scalar::Int(-3),
            Scalar::Float(2.5),
            Scalar::Int8(7),
            Scalar::UInt64(u64::MAX),
            Scalar::Float16(0.5),
            Scalar::Float32(-1.25),
            Scalar::Float64(1e300),
        ] {
            assert_eq!(verify(value, NUMERIC), Ok(value));
        }
    }

    #[test]
    fn test_numeric_accepts_every_kind() {
        for kind in Kind::ALL {
            assert!(NUMERIC.contains(&kind), "{} missing from NUMERIC", kind);
        }
    }

    #[test]
    fn test_index_accepts_only_int() {
        assert_eq!(verify(Scalar::Int(2), INDEX), Ok(Scalar::Int(2)));
        // numpy integers are not the interpreter's int
        assert_eq!(
            verify(Scalar::Int64(2), INDEX),
            Err(Error::TypeMismatch { actual: "numpy.int64".into(), expected: "int".into() })
        );
        assert!(verify(Scalar::Float(2.0), INDEX).is_err());
    }

    #[test]
    fn test_large_int_passes_both_sets() {
        assert_eq!(verify(Scalar::LargeInt(1e30), NUMERIC), Ok(Scalar::LargeInt(1e30)));
        assert_eq!(verify(Scalar::LargeInt(-1e30), INDEX), Ok(Scalar::LargeInt(-1e30)));
    }

    #[test]
    fn test_empty_accepted_set_rejects_everything() {
        assert!(verify(Scalar::Int(0), &[]).is_err());
    }
}
