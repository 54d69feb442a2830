mod domain;
mod error;
mod histogram;
mod polynomial;
mod sample;

pub use domain::Domain;
pub use error::HistogramError;
pub use histogram::{EquiWidthHistogram, Histogram, RangeHistogram};
pub use polynomial::Polynomial;
pub use sample::Sample;
