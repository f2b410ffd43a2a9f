//! Codec configuration.
//!
//! Every field has a default, so an empty JSON object (or TOML document)
//! yields a whole-globe codec.

use crate::compute::validation::{MAX_PRECISION, validate_region_bounds};
use crate::error::{QuadError, Result};
use crate::types::Region;
use serde::{Deserialize, Serialize};

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Bounds of the encoding universe
    #[serde(default)]
    pub region: RegionConfig,

    /// Largest precision `encode` accepts
    #[serde(default = "Config::default_max_precision")]
    pub max_precision: usize,

    /// Extra prefix buckets scanned by nearest-neighbor search after `k`
    /// candidates have been gathered
    #[serde(default = "Config::default_overscan_levels")]
    pub overscan_levels: usize,
}

/// Raw region bounds as they appear in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl RegionConfig {
    pub fn to_region(&self) -> Result<Region> {
        Region::new(self.min_lng, self.min_lat, self.max_lng, self.max_lat)
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Region::WORLD.into()
    }
}

impl From<Region> for RegionConfig {
    fn from(region: Region) -> Self {
        Self {
            min_lng: region.min_lng(),
            min_lat: region.min_lat(),
            max_lng: region.max_lng(),
            max_lat: region.max_lat(),
        }
    }
}

impl Config {
    pub(crate) const fn default_max_precision() -> usize {
        MAX_PRECISION
    }

    pub(crate) const fn default_overscan_levels() -> usize {
        1
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region.into();
        self
    }

    /// Out-of-range values are reported by [`Config::validate`].
    pub fn with_max_precision(mut self, max_precision: usize) -> Self {
        if max_precision > 32 {
            log::warn!(
                "Max precision of {} yields cells far finer than GPS accuracy",
                max_precision
            );
        }

        self.max_precision = max_precision;
        self
    }

    pub fn with_overscan_levels(mut self, levels: usize) -> Self {
        self.overscan_levels = levels;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_precision == 0 || self.max_precision > MAX_PRECISION {
            return Err(QuadError::Config(format!(
                "Max precision must be in 1..={}, got: {}",
                MAX_PRECISION, self.max_precision
            )));
        }

        let RegionConfig {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        } = self.region;
        validate_region_bounds(min_lng, min_lat, max_lng, max_lat)
            .map_err(|e| QuadError::Config(e.to_string()))?;

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| QuadError::Config(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: RegionConfig::default(),
            max_precision: Self::default_max_precision(),
            overscan_levels: Self::default_overscan_levels(),
        }
    }
}
