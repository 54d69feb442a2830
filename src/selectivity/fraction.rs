/// Fraction of rows expected to satisfy a predicate, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Selectivity(f64);

impl Selectivity {
    /// Clamps `p` into `[0, 1]`. NaN maps to `0.0`.
    pub fn clamped(p: f64) -> Self {
        if p.is_nan() || p < 0.0 {
            Self(0.0)
        } else if p > 1.0 {
            Self(1.0)
        } else {
            Self(p)
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Selectivity> for f64 {
    fn from(s: Selectivity) -> Self {
        s.0
    }
}
