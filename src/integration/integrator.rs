use crate::core::Polynomial;

/// Definite integral of a fitted polynomial over `[a, b]`.
///
/// Implementations must return exactly `0.0` when `a == b`.
pub trait Integrator {
    fn integrate(&self, f: &Polynomial, a: f64, b: f64) -> f64;
}
