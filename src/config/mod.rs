mod error;
mod estimator_config;

pub use error::ConfigError;
pub use estimator_config::{EstimatorConfig, FallbackSelectivities};
