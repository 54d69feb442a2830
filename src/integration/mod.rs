mod integrator;
mod trapezoidal;

pub use integrator::Integrator;
pub use trapezoidal::{DEFAULT_PANELS, TrapezoidalIntegrator};
