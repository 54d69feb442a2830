use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::fitting::DEFAULT_MAX_ORDER;
use crate::integration::DEFAULT_PANELS;

fn default_fit_order() -> usize {
    5
}
fn default_max_order() -> usize {
    DEFAULT_MAX_ORDER
}
fn default_integration_panels() -> usize {
    DEFAULT_PANELS
}
fn default_join_overlap_fallback() -> f64 {
    0.005
}
fn default_left_of_fallback() -> f64 {
    0.1
}
fn default_overlap_fallback() -> f64 {
    0.005
}

/// Selectivities handed to the planner when an estimate cannot be computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FallbackSelectivities {
    #[serde(default = "default_join_overlap_fallback")]
    #[schemars(
        title = "Join overlap fallback",
        description = "Used when the range-overlap join estimate fails.",
        range(min = 0.0, max = 1.0)
    )]
    pub join_overlap: f64,

    #[serde(default = "default_left_of_fallback")]
    #[schemars(
        title = "Left-of fallback",
        description = "Used when the strictly-left-of estimate fails.",
        range(min = 0.0, max = 1.0)
    )]
    pub left_of: f64,

    #[serde(default = "default_overlap_fallback")]
    #[schemars(
        title = "Constant overlap fallback",
        description = "Used when the overlap-with-constant estimate fails.",
        range(min = 0.0, max = 1.0)
    )]
    pub overlap: f64,
}

impl Default for FallbackSelectivities {
    fn default() -> Self {
        Self {
            join_overlap: default_join_overlap_fallback(),
            left_of: default_left_of_fallback(),
            overlap: default_overlap_fallback(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EstimatorConfig {
    #[serde(default = "default_fit_order")]
    #[schemars(
        title = "Fit order",
        description = "Degree of the polynomial fitted to each histogram.",
        range(min = 0)
    )]
    pub fit_order: usize,

    #[serde(default = "default_max_order")]
    #[schemars(
        title = "Maximum order",
        description = "Largest polynomial degree the fitter accepts.",
        range(min = 0)
    )]
    pub max_order: usize,

    #[serde(default = "default_integration_panels")]
    #[schemars(
        title = "Integration panels",
        description = "Trapezoids per definite integral.",
        range(min = 1)
    )]
    pub integration_panels: usize,

    #[serde(default)]
    #[schemars(title = "Fallback selectivities")]
    pub fallback: FallbackSelectivities,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            fit_order: default_fit_order(),
            max_order: default_max_order(),
            integration_panels: default_integration_panels(),
            fallback: FallbackSelectivities::default(),
        }
    }
}

impl EstimatorConfig {
    pub fn schema() -> Schema {
        schema_for!(EstimatorConfig)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fit_order > self.max_order {
            return Err(ConfigError::FitOrderAboveMax {
                fit_order: self.fit_order,
                max_order: self.max_order,
            });
        }
        if self.integration_panels == 0 {
            return Err(ConfigError::NoIntegrationPanels);
        }
        let fallbacks = [
            ("join_overlap", self.fallback.join_overlap),
            ("left_of", self.fallback.left_of),
            ("overlap", self.fallback.overlap),
        ];
        for (operation, value) in fallbacks {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FallbackOutOfRange { operation, value });
            }
        }
        Ok(())
    }

    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("malformed estimator config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading estimator config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("loading {}", path.display()))
    }
}
