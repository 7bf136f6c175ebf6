//! Activation functions (step, sigmoid, the ReLU family, tanh, softmax,
//! softplus) for Rust callers and, through [`bindings`], for Python.
//!
//! From Rust the accepted numeric types are enforced by `impl Into<Scalar>`
//! bounds. From Python each argument is checked at runtime by
//! [`verifier::verify_object`], which accepts `int`, `float` and the numpy
//! fixed-width scalar types and raises `TypeError` for anything else.

pub mod activations;
pub mod bindings;
pub mod error;
pub mod math;
pub mod numeric;
pub mod verifier;

pub use error::{Error, Result};
pub use numeric::{Kind, Scalar};
