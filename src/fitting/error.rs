use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FitError {
    #[error("need more than {order} samples to fit an order-{order} polynomial, got {samples}")]
    InsufficientSamples { samples: usize, order: usize },

    #[error("polynomial order {order} exceeds the configured maximum of {max_order}")]
    OrderTooLarge { order: usize, max_order: usize },

    #[error("moment matrix is singular (zero pivot at row {row})")]
    SingularSystem { row: usize },
}
