//! Closed-form activation formulas over `f64`.
//!
//! These are the raw expressions; [`crate::activations`] lifts them to tagged
//! [`Scalar`](crate::numeric::Scalar) inputs and decides the result type.

// ─── Step ────────────────────────────────────────────────────────────────────

/// Heaviside step: $1$ if $x \ge t$, else $0$.
pub fn step(x: f64, threshold: f64) -> u8 { u8::from(x >= threshold) }

// ─── Sigmoid ─────────────────────────────────────────────────────────────────

/// Sigmoid: $f(x) = 1 / (1 + e^{-x})$, unclamped.
pub fn sigmoid(x: f64) -> f64 { 1.0 / (1.0 + (-x).exp()) }

// ─── Leaky / parametric / exponential linear units ──────────────────────────

/// Leaky ReLU with fixed slope $0.1$: $f(x) = x$ if $x \ge 0$, else $x / 10$.
pub fn leaky_relu(x: f64) -> f64 { if x >= 0.0 { x } else { x / 10.0 } }

/// Parametric ReLU: $f(x, a) = \max(a x, x)$.
///
/// No constraint is placed on $a$; with $a > 1$ the scaled branch wins for
/// positive inputs.
pub fn prelu(x: f64, lp: f64) -> f64 { let scaled = lp * x; if x > scaled { x } else { scaled } }

/// Exponential Linear Unit: $f(x, \alpha) = x$ if $x > 0$, else $\alpha (e^x - 1)$.
///
/// Zero takes the exponential branch.
pub fn elu(x: f64, alpha: f64) -> f64 { if x > 0.0 { x } else { alpha * (x.exp() - 1.0) } }

// ─── Tanh ────────────────────────────────────────────────────────────────────

/// Hyperbolic tangent from its exponential definition,
/// $(e^x - e^{-x}) / (e^x + e^{-x})$.
///
/// Overflows to `NaN` once $e^{|x|}$ is infinite (|x| above ~709.78).
pub fn tanh(x: f64) -> f64 {
    let (pos, neg) = (x.exp(), (-x).exp());
    (pos - neg) / (pos + neg)
}

// ─── Softplus ────────────────────────────────────────────────────────────────

/// Softplus: $f(x) = \ln(1 + e^x)$, without a large-$x$ safeguard.
pub fn softplus(x: f64) -> f64 { (1.0 + x.exp()).ln() }

// ─── Softmax ─────────────────────────────────────────────────────────────────

/// Softmax distribution $e^{x_i} / \sum_j e^{x_j}$, with no max shift.
///
/// An empty input gives an empty distribution.
pub fn softmax(x: &[f64]) -> Vec<f64> {
    let exps: Vec<f64> = x.iter().map(|v| v.exp()).collect();
    let total: f64 = exps.iter().sum();
    if !x.is_empty() && !(total.is_finite() && total > 0.0) {
        log::warn!("softmax normalizer is {} for {} inputs", total, x.len());
    }
    exps.into_iter().map(|e| e / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance for floating-point comparisons.
    const TOL: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64, label: &str) {
        assert!(
            (actual - expected).abs() < TOL,
            "{}: expected {:.15}, got {:.15} (diff = {:.2e})",
            label, expected, actual, (actual - expected).abs()
        );
    }

    // ── step ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_step_boundary_is_inclusive() {
        assert_eq!(step(0.0, 0.0), 1);
        assert_eq!(step(2.5, 2.5), 1);
        assert_eq!(step(-1e-300, 0.0), 0);
    }

    #[test]
    fn test_step_nan_is_zero() {
        assert_eq!(step(f64::NAN, 0.0), 0);
    }

    // ── sigmoid ───────────────────────────────────────────────────────────────

    #[test]
    fn test_sigmoid_zero() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn test_sigmoid_known_value() {
        // σ(1) = 1 / (1 + e^{-1})
        assert_close(sigmoid(1.0), 1.0 / (1.0 + (-1.0_f64).exp()), "sigmoid(1)");
    }

    #[test]
    fn test_sigmoid_extremes_saturate() {
        // e^{1000} is infinite, so the quotient collapses to exactly 0
        assert_eq!(sigmoid(-1000.0), 0.0);
        assert_eq!(sigmoid(1000.0), 1.0);
    }

    // ── linear units ──────────────────────────────────────────────────────────

    #[test]
    fn test_leaky_relu() {
        assert_close(leaky_relu(-10.0), -1.0, "leaky_relu(-10)");
        assert_eq!(leaky_relu(0.0), 0.0);
        assert_eq!(leaky_relu(5.0), 5.0);
        assert_close(leaky_relu(-3.0), -0.3, "leaky_relu(-3)");
    }

    #[test]
    fn test_prelu() {
        assert_close(prelu(-2.0, 0.1), -0.2, "prelu(-2, 0.1)");
        assert_eq!(prelu(3.0, 0.1), 3.0);
        // a slope above one dominates for positive inputs
        assert_eq!(prelu(3.0, 2.0), 6.0);
        assert_eq!(prelu(-3.0, 2.0), -3.0);
    }

    #[test]
    fn test_elu() {
        assert_eq!(elu(0.0, 1.0), 0.0);
        assert_eq!(elu(2.0, 1.0), 2.0);
        assert_close(elu(-1.0, 1.0), (-1.0_f64).exp() - 1.0, "elu(-1, 1)");
        assert_close(elu(-1.0, 0.5), 0.5 * ((-1.0_f64).exp() - 1.0), "elu(-1, 0.5)");
    }

    // ── tanh ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_tanh_zero() {
        assert_eq!(tanh(0.0), 0.0);
    }

    #[test]
    fn test_tanh_matches_library_within_tolerance() {
        for &x in &[-3.0, -0.5, 0.25, 1.0, 4.0] {
            assert_close(tanh(x), x.tanh(), &format!("tanh({})", x));
        }
    }

    #[test]
    fn test_tanh_overflow_is_nan() {
        assert!(tanh(1000.0).is_nan());
    }

    // ── softplus ──────────────────────────────────────────────────────────────

    #[test]
    fn test_softplus() {
        assert_close(softplus(0.0), std::f64::consts::LN_2, "softplus(0)");
        assert_eq!(softplus(1000.0), f64::INFINITY);
    }

    // ── softmax ───────────────────────────────────────────────────────────────

    #[test]
    fn test_softmax_uniform() {
        for p in softmax(&[1.0, 1.0, 1.0]) {
            assert_close(p, 1.0 / 3.0, "uniform softmax");
        }
    }

    #[test]
    fn test_softmax_known_values() {
        let d = softmax(&[0.0, 2.0_f64.ln()]);
        assert_close(d[0], 1.0 / 3.0, "softmax[0]");
        assert_close(d[1], 2.0 / 3.0, "softmax[1]");
    }

    #[test]
    fn test_softmax_empty() {
        assert!(softmax(&[]).is_empty());
    }

    #[test]
    fn test_softmax_overflow_without_shift() {
        let d = softmax(&[1000.0, 0.0]);
        assert!(d[0].is_nan());
        assert_eq!(d[1], 0.0);
    }
}
