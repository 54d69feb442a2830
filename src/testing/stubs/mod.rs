pub mod fixed_integrator;

pub use fixed_integrator::FixedIntegrator;
