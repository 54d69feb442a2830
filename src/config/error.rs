use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("fit order {fit_order} exceeds max order {max_order}")]
    FitOrderAboveMax { fit_order: usize, max_order: usize },

    #[error("integration needs at least one panel")]
    NoIntegrationPanels,

    #[error("fallback selectivity for {operation} must be in [0, 1], got {value}")]
    FallbackOutOfRange { operation: &'static str, value: f64 },
}
