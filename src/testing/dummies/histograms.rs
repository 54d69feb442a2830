use crate::core::{Domain, Histogram, Polynomial, RangeHistogram, Sample};

/// Noise-free samples of the polynomial `coefficients` at each of `xs`.
pub fn samples_of(coefficients: &[f64], xs: &[f64]) -> Vec<Sample> {
    let p = Polynomial::new(coefficients.to_vec());
    xs.iter().map(|&x| Sample::new(x, p.evaluate(x))).collect()
}

/// `bins` equal-width bins over `[min, max]`, counts taken from the
/// polynomial at each bin center.
pub fn histogram_of(coefficients: &[f64], min: f64, max: f64, bins: usize) -> RangeHistogram {
    let width = (max - min) / bins as f64;
    let xs: Vec<f64> = (0..bins)
        .map(|i| min + width / 2.0 + width * i as f64)
        .collect();
    let samples = samples_of(coefficients, &xs);
    RangeHistogram::new(
        Histogram::from_samples(samples).unwrap(),
        Domain::new(min, max).unwrap(),
    )
}

/// `bins` equal-width bins over `[min, max]`, each holding `count`.
pub fn uniform_histogram(min: f64, max: f64, bins: usize, count: f64) -> RangeHistogram {
    histogram_of(&[count], min, max, bins)
}
