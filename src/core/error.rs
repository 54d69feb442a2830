use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HistogramError {
    #[error("bin centers ({centers}) and frequencies ({frequencies}) differ in length")]
    LengthMismatch { centers: usize, frequencies: usize },

    #[error("histogram has no bins")]
    Empty,

    #[error("invalid domain [{min}, {max}]")]
    InvalidDomain { min: f64, max: f64 },

    #[error("invalid bin width: {0}")]
    InvalidBinWidth(f64),
}
