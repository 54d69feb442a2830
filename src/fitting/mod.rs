mod error;
mod matrix;
mod polynomial_fitter;

pub use error::FitError;
pub use matrix::Matrix;
pub use polynomial_fitter::{DEFAULT_MAX_ORDER, PolynomialFitter};
