//! Smoothing brush configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::convolution::{DEFAULT_KERNEL_RADIUS, DEFAULT_SIGMA};
use crate::core::error::Error;
use crate::core::types::Result;
use super::orientation::{Orientation, DEFAULT_REACH};

/// Settings fixed when a smoothing brush is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothBrushConfig {
    /// Convolution passes per application.
    pub iterations: usize,
    /// Direction the brush region reaches toward.
    pub orientation: Orientation,
    /// Gaussian kernel radius in columns (kernel side is 2r+1).
    pub kernel_radius: usize,
    /// Gaussian standard deviation.
    pub sigma: f64,
    /// Extra blocks past the radius along the orientation.
    pub reach: f64,
}

impl Default for SmoothBrushConfig {
    fn default() -> Self {
        Self {
            iterations: 4,
            orientation: Orientation::Up,
            kernel_radius: DEFAULT_KERNEL_RADIUS,
            sigma: DEFAULT_SIGMA,
            reach: DEFAULT_REACH,
        }
    }
}

impl SmoothBrushConfig {
    /// Check values a brush cannot be built from
    pub fn validate(&self) -> Result<()> {
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(Error::Config(format!("sigma must be positive, got {}", self.sigma)));
        }
        if !(self.reach.is_finite() && self.reach >= 0.0) {
            return Err(Error::Config(format!("reach must be non-negative, got {}", self.reach)));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save to a JSON file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
