mod error;
mod estimator;
mod fraction;
mod geometric;
mod range_selectivity;

pub use error::EstimationError;
pub use estimator::{DEFAULT_FIT_ORDER, SelectivityEstimator};
pub use fraction::Selectivity;
pub use geometric::GeometricOperator;
pub use range_selectivity::RangeSelectivity;
