use crate::core::{Domain, HistogramError, Sample};

/// Ordered bin centers paired with their frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    samples: Vec<Sample>,
}

impl Histogram {
    pub fn new(centers: Vec<f64>, frequencies: Vec<f64>) -> Result<Self, HistogramError> {
        if centers.len() != frequencies.len() {
            return Err(HistogramError::LengthMismatch {
                centers: centers.len(),
                frequencies: frequencies.len(),
            });
        }
        let samples = centers
            .into_iter()
            .zip(frequencies)
            .map(Sample::from)
            .collect();
        Self::from_samples(samples)
    }

    pub fn from_samples(samples: Vec<Sample>) -> Result<Self, HistogramError> {
        if samples.is_empty() {
            return Err(HistogramError::Empty);
        }
        Ok(Self { samples })
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A histogram together with the domain that bounds its mass.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeHistogram {
    pub histogram: Histogram,
    pub domain: Domain,
}

impl RangeHistogram {
    pub fn new(histogram: Histogram, domain: Domain) -> Self {
        Self { histogram, domain }
    }
}

/// Equi-width histogram as kept in column statistics: a lower bound on the
/// value axis, a bin width, the covered width and one count per bin.
///
/// Bin centers are laid out relative to an origin so that two histograms can
/// share one coordinate system:
///
/// ```text
/// offset = lower_bound - origin
/// x[i]   = offset + bin_width / 2 + bin_width * i
/// domain = [offset, offset + width]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EquiWidthHistogram {
    lower_bound: f64,
    bin_width: f64,
    avg_bins_per_range: f64,
    width: f64,
    counts: Vec<f64>,
}

impl EquiWidthHistogram {
    pub fn new(
        lower_bound: f64,
        bin_width: f64,
        avg_bins_per_range: f64,
        width: f64,
        counts: Vec<f64>,
    ) -> Result<Self, HistogramError> {
        if !bin_width.is_finite() || bin_width <= 0.0 {
            return Err(HistogramError::InvalidBinWidth(bin_width));
        }
        if counts.is_empty() {
            return Err(HistogramError::Empty);
        }
        if !lower_bound.is_finite() || !width.is_finite() || width < 0.0 {
            return Err(HistogramError::InvalidDomain {
                min: lower_bound,
                max: lower_bound + width,
            });
        }
        Ok(Self {
            lower_bound,
            bin_width,
            avg_bins_per_range,
            width,
            counts,
        })
    }

    #[inline]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Average number of bins a single stored range spans.
    #[inline]
    pub fn avg_bins_per_range(&self) -> f64 {
        self.avg_bins_per_range
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Bin centers and domain measured from `origin`.
    pub fn relative_to(&self, origin: f64) -> Result<RangeHistogram, HistogramError> {
        let offset = self.lower_bound - origin;
        let base = offset + self.bin_width / 2.0;
        let centers = (0..self.counts.len())
            .map(|i| base + self.bin_width * i as f64)
            .collect();
        let histogram = Histogram::new(centers, self.counts.clone())?;
        let domain = Domain::new(offset, offset + self.width)?;
        Ok(RangeHistogram::new(histogram, domain))
    }

    /// Lays out two histograms on a shared axis whose origin is the smaller
    /// of the two lower bounds.
    pub fn align(
        left: &EquiWidthHistogram,
        right: &EquiWidthHistogram,
    ) -> Result<(RangeHistogram, RangeHistogram), HistogramError> {
        let origin = left.lower_bound.min(right.lower_bound);
        Ok((left.relative_to(origin)?, right.relative_to(origin)?))
    }
}
