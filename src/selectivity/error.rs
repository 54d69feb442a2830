use thiserror::Error;

use crate::core::HistogramError;
use crate::fitting::FitError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimationError {
    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Histogram(#[from] HistogramError),

    #[error("histogram mass over its domain is degenerate: {total}")]
    DegenerateMass { total: f64 },

    #[error("query bound is not a number: {value}")]
    NonFiniteBound { value: f64 },

    #[error("no histogram statistics available")]
    MissingStatistics,
}
