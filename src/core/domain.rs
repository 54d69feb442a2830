use crate::core::HistogramError;

/// Closed interval `[min, max]` assumed to hold all of a histogram's mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Result<Self, HistogramError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(HistogramError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Intersection of two domains, or `None` when they share no interior.
    ///
    /// Domains that only touch at a single point do not intersect.
    pub fn intersection(&self, other: &Domain) -> Option<Domain> {
        let start = self.min.max(other.min);
        let end = self.max.min(other.max);
        if start < end {
            Some(Domain {
                min: start,
                max: end,
            })
        } else {
            None
        }
    }

    /// Clamps `[lower, upper]` into this domain.
    pub fn clamp(&self, lower: f64, upper: f64) -> (f64, f64) {
        (self.min.max(lower), self.max.min(upper))
    }
}
