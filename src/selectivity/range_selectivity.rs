use tracing::{debug, warn};

use crate::config::{ConfigError, EstimatorConfig, FallbackSelectivities};
use crate::core::{EquiWidthHistogram, RangeHistogram};
use crate::selectivity::{EstimationError, Selectivity, SelectivityEstimator};

/// Planner-facing entry points for range predicates.
///
/// Wraps a [`SelectivityEstimator`] so that every call yields a usable
/// [`Selectivity`]: estimation failures are replaced by the configured
/// fallback and every result is clamped into `[0, 1]`.
#[derive(Debug, Clone)]
pub struct RangeSelectivity {
    estimator: SelectivityEstimator,
    fallback: FallbackSelectivities,
}

impl Default for RangeSelectivity {
    fn default() -> Self {
        Self {
            estimator: SelectivityEstimator::default(),
            fallback: FallbackSelectivities::default(),
        }
    }
}

impl RangeSelectivity {
    pub fn new(config: &EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            estimator: SelectivityEstimator::from_config(config),
            fallback: config.fallback,
        })
    }

    #[inline]
    pub fn fallback(&self) -> &FallbackSelectivities {
        &self.fallback
    }

    /// `left && right` join selectivity for two histograms on a shared axis.
    pub fn overlaps_join(&self, left: &RangeHistogram, right: &RangeHistogram) -> Selectivity {
        let result = self.estimator.join_overlap_fraction(
            &left.histogram,
            left.domain,
            &right.histogram,
            right.domain,
        );
        resolve("overlaps join", result, self.fallback.join_overlap)
    }

    /// `left && right` join selectivity straight from column statistics.
    ///
    /// Either side may lack statistics, in which case the fallback is used.
    pub fn overlaps_join_stats(
        &self,
        left: Option<&EquiWidthHistogram>,
        right: Option<&EquiWidthHistogram>,
    ) -> Selectivity {
        let result = match (left, right) {
            (Some(left), Some(right)) => {
                EquiWidthHistogram::align(left, right)
                    .map_err(EstimationError::from)
                    .and_then(|(l, r)| {
                        debug!(
                            left = ?l.domain,
                            right = ?r.domain,
                            "joining aligned histograms"
                        );
                        self.estimator.join_overlap_fraction(
                            &l.histogram,
                            l.domain,
                            &r.histogram,
                            r.domain,
                        )
                    })
            }
            _ => Err(EstimationError::MissingStatistics),
        };
        resolve("overlaps join", result, self.fallback.join_overlap)
    }

    /// Selectivity of `column << threshold`.
    pub fn left_of(&self, h: &RangeHistogram, threshold: f64) -> Selectivity {
        let result = self
            .estimator
            .left_of_fraction(&h.histogram, h.domain, threshold);
        resolve("left of", result, self.fallback.left_of)
    }

    /// Selectivity of `column && [lower, upper]`.
    pub fn overlaps_constant(&self, h: &RangeHistogram, lower: f64, upper: f64) -> Selectivity {
        let result = self
            .estimator
            .overlap_with_constant_range_fraction(&h.histogram, h.domain, lower, upper);
        resolve("overlaps constant", result, self.fallback.overlap)
    }
}

fn resolve(
    operation: &'static str,
    result: Result<f64, EstimationError>,
    fallback: f64,
) -> Selectivity {
    match result {
        Ok(fraction) if !fraction.is_nan() => Selectivity::clamped(fraction),
        Ok(_) => {
            warn!(operation, fallback, "estimate is NaN, using fallback");
            Selectivity::clamped(fallback)
        }
        Err(error) => {
            warn!(operation, fallback, %error, "estimate failed, using fallback");
            Selectivity::clamped(fallback)
        }
    }
}
