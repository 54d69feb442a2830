/// Polynomial in ascending powers: `coefficients[i]` multiplies `x^i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    #[inline]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Degree implied by the coefficient count; zero for an empty polynomial.
    #[inline]
    pub fn order(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates `sum(c[i] * x^i)`.
    ///
    /// Powers are taken term by term with `pow`, not by Horner's scheme.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .fold(0.0, |s, (i, &c)| s + libm::pow(x, i as f64) * c)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}
