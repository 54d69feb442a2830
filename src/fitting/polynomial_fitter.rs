use crate::core::{Polynomial, Sample};
use crate::fitting::{FitError, Matrix};

pub const DEFAULT_MAX_ORDER: usize = 100;

/// Least-squares polynomial regression through the normal equations.
///
/// The `(k+1)x(k+1)` moment matrix `M[i][j] = sum(x^(i+j))` is inverted with
/// [`Matrix::invert_unpivoted`] and multiplied by `B[j] = sum(y * x^j)`.
/// This is only well conditioned for small orders over short, pre-shifted
/// x ranges, which is how the selectivity estimators use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialFitter {
    max_order: usize,
}

impl Default for PolynomialFitter {
    fn default() -> Self {
        Self {
            max_order: DEFAULT_MAX_ORDER,
        }
    }
}

impl PolynomialFitter {
    pub fn new(max_order: usize) -> Self {
        Self { max_order }
    }

    #[inline]
    pub fn max_order(&self) -> usize {
        self.max_order
    }

    pub fn fit(&self, samples: &[Sample], order: usize) -> Result<Polynomial, FitError> {
        if samples.len() <= order {
            return Err(FitError::InsufficientSamples {
                samples: samples.len(),
                order,
            });
        }
        if order > self.max_order {
            return Err(FitError::OrderTooLarge {
                order,
                max_order: self.max_order,
            });
        }

        let terms = order + 1;
        let rhs = weighted_power_sums(samples, terms);
        let powers = power_sums(samples, 2 * order);
        let moments = Matrix::from_fn(terms, terms, |i, j| powers[i + j]);

        let inverse = moments.invert_unpivoted()?;
        let coefficients = inverse.mul_vec(&rhs);

        tracing::trace!(order, samples = samples.len(), ?coefficients, "fitted polynomial");
        Ok(Polynomial::new(coefficients))
    }
}

/// `P[d] = sum(x^d)` for `d` in `0..=max_power`, with `P[0]` the sample count.
fn power_sums(samples: &[Sample], max_power: usize) -> Vec<f64> {
    let mut sums = vec![0.0; max_power + 1];
    sums[0] = samples.len() as f64;
    for s in samples {
        let mut pow_x = s.x;
        for sum in sums.iter_mut().skip(1) {
            *sum += pow_x;
            pow_x *= s.x;
        }
    }
    sums
}

/// `B[j] = sum(y * x^j)` for `j` in `0..terms`.
fn weighted_power_sums(samples: &[Sample], terms: usize) -> Vec<f64> {
    let mut sums = vec![0.0; terms];
    for s in samples {
        let mut pow_x = 1.0;
        for sum in sums.iter_mut() {
            *sum += s.y * pow_x;
            pow_x *= s.x;
        }
    }
    sums
}
