use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::math;
use crate::numeric::Scalar;

// ── Scalar activations ────────────────────────────────────────────────────────

/// Heaviside step at threshold zero.
pub fn step(x: impl Into<Scalar>) -> u8 {
    step_with_threshold(x, 0_i64)
}

/// Heaviside step: `1` if `x >= threshold`, else `0`.
pub fn step_with_threshold(x: impl Into<Scalar>, threshold: impl Into<Scalar>) -> u8 {
    math::step(x.into().to_f64(), threshold.into().to_f64())
}

pub fn sigmoid(x: impl Into<Scalar>) -> f64 {
    math::sigmoid(x.into().to_f64())
}

/// `max(0, x)`: positive inputs come back untouched, everything else
/// (including `NaN`) becomes the integer `0`.
pub fn relu(x: impl Into<Scalar>) -> Scalar {
    let x = x.into();
    if x.to_f64() > 0.0 { x } else { Scalar::Int(0) }
}

/// Non-negative inputs come back untouched; negative ones are divided by ten.
pub fn leaky_relu(x: impl Into<Scalar>) -> Scalar {
    let x = x.into();
    let v = x.to_f64();
    if v >= 0.0 { x } else { Scalar::Float(math::leaky_relu(v)) }
}

pub fn tanh(x: impl Into<Scalar>) -> f64 {
    math::tanh(x.into().to_f64())
}

/// `max(lp * x, x)`. `x` is returned untouched only when it is strictly
/// greater than the scaled value.
pub fn prelu(x: impl Into<Scalar>, lp: impl Into<Scalar>) -> Scalar {
    let x = x.into();
    let (v, lp) = (x.to_f64(), lp.into().to_f64());
    if v > lp * v { x } else { Scalar::Float(math::prelu(v, lp)) }
}

/// `x` for strictly positive inputs, `alpha * (e^x - 1)` otherwise.
pub fn elu(x: impl Into<Scalar>, alpha: impl Into<Scalar>) -> Scalar {
    let x = x.into();
    let v = x.to_f64();
    if v > 0.0 { x } else { Scalar::Float(math::elu(v, alpha.into().to_f64())) }
}

pub fn softplus(x: impl Into<Scalar>) -> f64 {
    math::softplus(x.into().to_f64())
}

// ── Softmax ───────────────────────────────────────────────────────────────────

/// Softmax distribution over `x`.
///
/// With `Some(n)` the result is the one-element vector `[distribution[n]]`;
/// negative `n` counts from the end.
///
/// # Errors
/// [`Error::IndexOutOfRange`] when `n` does not address an element, which is
/// always the case for an empty `x`.
pub fn softmax(x: &[f64], n: Option<isize>) -> Result<Vec<f64>> {
    let distribution = math::softmax(x);
    let Some(index) = n else { return Ok(distribution) };

    let len = distribution.len();
    let position = if index < 0 { index + len as isize } else { index };
    usize::try_from(position)
        .ok()
        .and_then(|i| distribution.get(i).copied())
        .map(|p| vec![p])
        .ok_or(Error::IndexOutOfRange { index, len })
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// The single-argument activations, addressable by name.
///
/// | Name | Function |
/// |------|----------|
/// | `"step"` | [`step`] |
/// | `"sigmoid"` | [`sigmoid`] |
/// | `"relu"` | [`relu`] |
/// | `"leaky_relu"` | [`leaky_relu`] |
/// | `"tanh"` | [`tanh`] |
/// | `"softplus"` | [`softplus`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    Step,
    Sigmoid,
    Relu,
    LeakyRelu,
    Tanh,
    Softplus,
}

impl Activation {
    pub const ALL: [Activation; 6] = [
        Activation::Step,
        Activation::Sigmoid,
        Activation::Relu,
        Activation::LeakyRelu,
        Activation::Tanh,
        Activation::Softplus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Activation::Step      => "step",
            Activation::Sigmoid   => "sigmoid",
            Activation::Relu      => "relu",
            Activation::LeakyRelu => "leaky_relu",
            Activation::Tanh      => "tanh",
            Activation::Softplus  => "softplus",
        }
    }

    /// Evaluate the activation, wrapping plain results in a [`Scalar`].
    pub fn apply(self, x: impl Into<Scalar>) -> Scalar {
        match self {
            Activation::Step      => Scalar::Int(i64::from(step(x))),
            Activation::Sigmoid   => Scalar::Float(sigmoid(x)),
            Activation::Relu      => relu(x),
            Activation::LeakyRelu => leaky_relu(x),
            Activation::Tanh      => Scalar::Float(tanh(x)),
            Activation::Softplus  => Scalar::Float(softplus(x)),
        }
    }
}

impl FromStr for Activation {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Activation::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| Error::UnknownActivation(name.to_string()))
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
