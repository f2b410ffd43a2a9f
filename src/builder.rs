//! Codec builder for flexible configuration
//!
//! This module provides a builder pattern for creating codecs over custom
//! regions with tuned precision and search limits.

use crate::codec::QuadCodec;
use crate::config::Config;
use crate::error::Result;
use crate::types::Region;

/// Builder for [`QuadCodec`] configuration.
///
/// # Examples
///
/// ```
/// use quadpath::{CodecBuilder, Region};
///
/// let codec = CodecBuilder::new()
///     .region(Region::new(-74.3, 40.4, -73.6, 41.0)?)
///     .max_precision(24)
///     .overscan_levels(2)
///     .build()?;
///
/// assert_eq!(codec.max_precision(), 24);
/// # Ok::<(), quadpath::QuadError>(())
/// ```
#[derive(Debug)]
pub struct CodecBuilder {
    config: Config,
}

impl CodecBuilder {
    /// Create a new builder with the default whole-globe configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the encoding region.
    pub fn region(mut self, region: Region) -> Self {
        self.config = self.config.with_region(region);
        self
    }

    /// Cap the precision accepted by `encode`.
    pub fn max_precision(mut self, max_precision: usize) -> Self {
        self.config = self.config.with_max_precision(max_precision);
        self
    }

    /// Set how many extra prefix buckets nearest-neighbor search visits.
    pub fn overscan_levels(mut self, levels: usize) -> Self {
        self.config = self.config.with_overscan_levels(levels);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build the codec.
    pub fn build(self) -> Result<QuadCodec> {
        QuadCodec::from_config(&self.config)
    }
}

impl Default for CodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}
