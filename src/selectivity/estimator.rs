use tracing::debug;

use crate::config::EstimatorConfig;
use crate::core::{Domain, Histogram, Polynomial};
use crate::fitting::{FitError, PolynomialFitter};
use crate::integration::{Integrator, TrapezoidalIntegrator};
use crate::selectivity::EstimationError;

pub const DEFAULT_FIT_ORDER: usize = 5;

/// Histogram-fitted selectivity fractions.
///
/// Every call fits a fresh polynomial to the histogram it is given and
/// measures mass under the curve with `I`. Results are raw ratios: fit noise
/// can push them slightly outside `[0, 1]`, and callers are expected to clamp.
#[derive(Debug, Clone)]
pub struct SelectivityEstimator<I: Integrator = TrapezoidalIntegrator> {
    fitter: PolynomialFitter,
    integrator: I,
    order: usize,
}

impl Default for SelectivityEstimator {
    fn default() -> Self {
        Self::new(
            PolynomialFitter::default(),
            TrapezoidalIntegrator::default(),
            DEFAULT_FIT_ORDER,
        )
    }
}

impl SelectivityEstimator {
    pub fn from_config(config: &EstimatorConfig) -> Self {
        Self::new(
            PolynomialFitter::new(config.max_order),
            TrapezoidalIntegrator::new(config.integration_panels),
            config.fit_order,
        )
    }
}

impl<I: Integrator> SelectivityEstimator<I> {
    pub fn new(fitter: PolynomialFitter, integrator: I, order: usize) -> Self {
        Self {
            fitter,
            integrator,
            order,
        }
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Probability that a row from `a` and a row from `b` both fall in the
    /// intersection of their domains, treating the two as independent:
    ///
    /// ```text
    /// (mass_a(overlap) / mass_a(domain_a)) * (mass_b(overlap) / mass_b(domain_b))
    /// ```
    ///
    /// Disjoint domains give exactly `0.0`.
    pub fn join_overlap_fraction(
        &self,
        a: &Histogram,
        domain_a: Domain,
        b: &Histogram,
        domain_b: Domain,
    ) -> Result<f64, EstimationError> {
        let fit_a = self.fit(a)?;
        let fit_b = self.fit(b)?;

        let Some(overlap) = domain_a.intersection(&domain_b) else {
            debug!(?domain_a, ?domain_b, "histogram domains do not intersect");
            return Ok(0.0);
        };

        let fraction_a = self.mass_fraction(&fit_a, overlap.min(), overlap.max(), domain_a)?;
        let fraction_b = self.mass_fraction(&fit_b, overlap.min(), overlap.max(), domain_b)?;
        let fraction = fraction_a * fraction_b;

        debug!(
            start = overlap.min(),
            end = overlap.max(),
            fraction_a,
            fraction_b,
            fraction,
            "join overlap fraction"
        );
        Ok(fraction)
    }

    /// Share of the histogram's mass at or below `threshold`.
    pub fn left_of_fraction(
        &self,
        h: &Histogram,
        domain: Domain,
        threshold: f64,
    ) -> Result<f64, EstimationError> {
        if threshold.is_nan() {
            return Err(EstimationError::NonFiniteBound { value: threshold });
        }
        if threshold < domain.min() {
            return Ok(0.0);
        }
        if threshold > domain.max() {
            return Ok(1.0);
        }

        let fit = self.fit(h)?;
        let fraction = self.mass_fraction(&fit, domain.min(), threshold, domain)?;
        debug!(?domain, threshold, fraction, "left-of fraction");
        Ok(fraction)
    }

    /// Share of the histogram's mass inside `[lower, upper]`.
    pub fn overlap_with_constant_range_fraction(
        &self,
        h: &Histogram,
        domain: Domain,
        lower: f64,
        upper: f64,
    ) -> Result<f64, EstimationError> {
        for value in [lower, upper] {
            if value.is_nan() {
                return Err(EstimationError::NonFiniteBound { value });
            }
        }
        if upper < domain.min() || lower > domain.max() {
            return Ok(0.0);
        }
        if lower < domain.min() && upper > domain.max() {
            return Ok(1.0);
        }

        let (lower, upper) = domain.clamp(lower, upper);
        if lower > upper {
            return Ok(0.0);
        }

        let fit = self.fit(h)?;
        let fraction = self.mass_fraction(&fit, lower, upper, domain)?;
        debug!(?domain, lower, upper, fraction, "constant range overlap fraction");
        Ok(fraction)
    }

    fn fit(&self, h: &Histogram) -> Result<Polynomial, FitError> {
        self.fitter.fit(h.samples(), self.order)
    }

    /// `mass(from..to) / mass(domain)`, refusing a zero or non-finite total.
    fn mass_fraction(
        &self,
        f: &Polynomial,
        from: f64,
        to: f64,
        domain: Domain,
    ) -> Result<f64, EstimationError> {
        let total = self.integrator.integrate(f, domain.min(), domain.max());
        if total == 0.0 || !total.is_finite() {
            return Err(EstimationError::DegenerateMass { total });
        }
        let partial = self.integrator.integrate(f, from, to);
        Ok(partial / total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Histogram, RangeHistogram};
    use crate::testing::dummies::{histogram_of, uniform_histogram};
    use crate::testing::stubs::FixedIntegrator;

    const EPS: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn est() -> SelectivityEstimator {
        SelectivityEstimator::default()
    }

    fn left_of(rh: &RangeHistogram, t: f64) -> f64 {
        est().left_of_fraction(&rh.histogram, rh.domain, t).unwrap()
    }

    fn overlap(rh: &RangeHistogram, lo: f64, hi: f64) -> f64 {
        est()
            .overlap_with_constant_range_fraction(&rh.histogram, rh.domain, lo, hi)
            .unwrap()
    }

    fn join(a: &RangeHistogram, b: &RangeHistogram) -> Result<f64, EstimationError> {
        est().join_overlap_fraction(&a.histogram, a.domain, &b.histogram, b.domain)
    }

    #[test]
    fn join_of_half_overlapping_uniform_histograms() {
        let a = uniform_histogram(0.0, 8.0, 7, 10.0);
        let b = uniform_histogram(4.0, 12.0, 7, 10.0);

        let first = join(&a, &b).unwrap();
        let second = join(&a, &b).unwrap();
        assert_eq!(first, second);
        assert!(first > 0.1 && first < 0.5, "{first}");
        assert!(approx_eq(first, 0.25, EPS), "{first}");
    }

    #[test]
    fn join_is_symmetric() {
        let a = uniform_histogram(0.0, 8.0, 7, 10.0);
        let b = histogram_of(&[1.0, 0.5], 2.0, 9.0, 7);
        let ab = join(&a, &b).unwrap();
        let ba = join(&b, &a).unwrap();
        assert!(approx_eq(ab, ba, 1e-12));
    }

    #[test]
    fn join_of_disjoint_domains_is_exactly_zero() {
        let a = uniform_histogram(0.0, 4.0, 7, 10.0);
        let b = uniform_histogram(5.0, 9.0, 7, 10.0);
        assert_eq!(join(&a, &b).unwrap(), 0.0);
        assert_eq!(join(&b, &a).unwrap(), 0.0);

        let touching = uniform_histogram(4.0, 9.0, 7, 10.0);
        assert_eq!(join(&a, &touching).unwrap(), 0.0);
    }

    #[test]
    fn join_of_identical_domains_is_one() {
        let a = uniform_histogram(0.0, 6.0, 7, 3.0);
        assert!(approx_eq(join(&a, &a).unwrap(), 1.0, EPS));
    }

    #[test]
    fn join_of_nested_domains_is_inner_share_of_outer() {
        let outer = uniform_histogram(0.0, 10.0, 10, 4.0);
        let inner = uniform_histogram(2.0, 4.0, 7, 4.0);
        assert!(approx_eq(join(&outer, &inner).unwrap(), 0.2, EPS));
    }

    #[test]
    fn join_propagates_fit_failure() {
        let a = uniform_histogram(0.0, 8.0, 7, 10.0);
        let short = uniform_histogram(4.0, 12.0, 3, 10.0);
        assert_eq!(
            join(&a, &short).unwrap_err(),
            EstimationError::Fit(FitError::InsufficientSamples {
                samples: 3,
                order: 5
            })
        );
    }

    #[test]
    fn all_zero_histogram_is_degenerate() {
        let zeros = uniform_histogram(0.0, 8.0, 7, 0.0);
        let b = uniform_histogram(4.0, 12.0, 7, 10.0);
        assert!(matches!(
            join(&zeros, &b),
            Err(EstimationError::DegenerateMass { .. })
        ));
        assert!(matches!(
            est().left_of_fraction(&zeros.histogram, zeros.domain, 3.0),
            Err(EstimationError::DegenerateMass { total }) if total == 0.0
        ));
    }

    #[test]
    fn left_of_shortcuts_are_exact() {
        let h = uniform_histogram(0.0, 8.0, 7, 10.0);
        assert_eq!(left_of(&h, -0.5), 0.0);
        assert_eq!(left_of(&h, f64::NEG_INFINITY), 0.0);
        assert_eq!(left_of(&h, 8.5), 1.0);
        assert_eq!(left_of(&h, f64::INFINITY), 1.0);
    }

    #[test]
    fn left_of_domain_endpoints() {
        let h = uniform_histogram(0.0, 8.0, 7, 10.0);
        assert_eq!(left_of(&h, 0.0), 0.0);
        assert_eq!(left_of(&h, 8.0), 1.0);
        assert!(approx_eq(left_of(&h, 4.0), 0.5, EPS));
        assert!(approx_eq(left_of(&h, 2.0), 0.25, EPS));
    }

    #[test]
    fn left_of_is_monotone_for_positive_density() {
        // 5 + (x - 3.5)^2 = 17.25 - 7x + x^2
        let h = histogram_of(&[17.25, -7.0, 1.0], 0.0, 7.0, 7);
        let mut prev = 0.0;
        for k in 0..=70 {
            let t = k as f64 / 10.0;
            let f = left_of(&h, t);
            assert!(f >= prev, "t={t}: {f} < {prev}");
            prev = f;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn left_of_rejects_nan_threshold() {
        let h = uniform_histogram(0.0, 8.0, 7, 10.0);
        assert!(matches!(
            est().left_of_fraction(&h.histogram, h.domain, f64::NAN),
            Err(EstimationError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn constant_overlap_shortcuts() {
        let h = uniform_histogram(0.0, 8.0, 7, 10.0);
        assert_eq!(overlap(&h, -5.0, -1.0), 0.0);
        assert_eq!(overlap(&h, 9.0, 12.0), 0.0);
        assert_eq!(overlap(&h, -1.0, 9.0), 1.0);
    }

    #[test]
    fn constant_overlap_zero_width_query_is_zero() {
        let h = histogram_of(&[17.25, -7.0, 1.0], 0.0, 7.0, 7);
        for c in [0.0, 1.5, 3.5, 7.0] {
            assert_eq!(overlap(&h, c, c), 0.0);
        }
    }

    #[test]
    fn constant_overlap_clamps_to_domain() {
        let h = uniform_histogram(0.0, 8.0, 7, 10.0);
        assert!(approx_eq(overlap(&h, 2.0, 6.0), 0.5, EPS));
        assert!(approx_eq(overlap(&h, -3.0, 2.0), 0.25, EPS));
        assert!(approx_eq(overlap(&h, 6.0, 100.0), 0.25, EPS));
        assert_eq!(overlap(&h, 0.0, 8.0), 1.0);
    }

    #[test]
    fn constant_overlap_inverted_query_is_zero() {
        let h = uniform_histogram(0.0, 8.0, 7, 10.0);
        assert_eq!(overlap(&h, 6.0, 2.0), 0.0);
    }

    #[test]
    fn shortcuts_skip_fitting() {
        // Too few bins to fit, but the answer is known without a fit.
        let h = Histogram::new(vec![1.0, 2.0], vec![1.0, 1.0]).unwrap();
        let d = Domain::new(0.0, 3.0).unwrap();
        let e = est();
        assert_eq!(e.left_of_fraction(&h, d, -1.0), Ok(0.0));
        assert_eq!(e.left_of_fraction(&h, d, 4.0), Ok(1.0));
        assert_eq!(e.overlap_with_constant_range_fraction(&h, d, -1.0, 4.0), Ok(1.0));
        assert!(e.left_of_fraction(&h, d, 1.0).is_err());
    }

    #[test]
    fn custom_integrator_is_used() {
        let h = uniform_histogram(0.0, 8.0, 7, 10.0);
        let e = SelectivityEstimator::new(PolynomialFitter::default(), FixedIntegrator::new(2.0), 5);
        assert_eq!(e.left_of_fraction(&h.histogram, h.domain, 1.0), Ok(1.0));

        let nan = SelectivityEstimator::new(
            PolynomialFitter::default(),
            FixedIntegrator::new(f64::NAN),
            5,
        );
        assert!(matches!(
            nan.left_of_fraction(&h.histogram, h.domain, 1.0),
            Err(EstimationError::DegenerateMass { .. })
        ));
    }

    #[test]
    fn from_config_applies_order() {
        let config = EstimatorConfig {
            fit_order: 2,
            ..EstimatorConfig::default()
        };
        let e = SelectivityEstimator::from_config(&config);
        assert_eq!(e.order(), 2);

        // Three bins are enough for a quadratic.
        let h = uniform_histogram(0.0, 3.0, 3, 1.0);
        let f = e.left_of_fraction(&h.histogram, h.domain, 1.5).unwrap();
        assert!(approx_eq(f, 0.5, EPS));
    }

    #[test]
    fn estimator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SelectivityEstimator>();
    }
}
