use crate::core::Polynomial;
use crate::integration::Integrator;

pub const DEFAULT_PANELS: usize = 100;

/// Composite trapezoidal rule over a fixed number of equal panels:
///
/// ```text
/// h = (b - a) / n
/// I = h/2 * [f(a) + f(b) + 2 * sum_{i=1}^{n-1} f(a + i*h)]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapezoidalIntegrator {
    panels: usize,
}

impl Default for TrapezoidalIntegrator {
    fn default() -> Self {
        Self {
            panels: DEFAULT_PANELS,
        }
    }
}

impl TrapezoidalIntegrator {
    /// A panel count of zero is raised to one.
    pub fn new(panels: usize) -> Self {
        Self {
            panels: panels.max(1),
        }
    }

    #[inline]
    pub fn panels(&self) -> usize {
        self.panels
    }
}

impl Integrator for TrapezoidalIntegrator {
    fn integrate(&self, f: &Polynomial, a: f64, b: f64) -> f64 {
        if a == b {
            return 0.0;
        }
        let n = self.panels as f64;
        let h = (b - a) / n;

        let mut s = f.evaluate(a) + f.evaluate(b);
        for i in 1..self.panels {
            s += 2.0 * f.evaluate(a + i as f64 * h);
        }
        (h / 2.0) * s
    }
}
