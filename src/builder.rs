//! Builder for a configured codec.

use crate::config::Config;
use crate::error::{Geohash36Error, Result};
use crate::hasher::Geohasher;
use crate::neighbor::LongitudeBoundary;

/// Builder for [`Geohasher`] settings.
#[derive(Debug, Clone, Default)]
pub struct Geohash36Builder {
    config: Config,
}

impl Geohash36Builder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Hash length used by [`Geohasher::encode_default`]. Checked by
    /// [`build`](Self::build).
    pub fn default_length(mut self, length: usize) -> Self {
        self.config.default_length = length;
        self
    }

    pub fn earth_radius(mut self, radius_meters: f64) -> Self {
        self.config = self.config.with_earth_radius(radius_meters);
        self
    }

    pub fn longitude_boundary(mut self, boundary: LongitudeBoundary) -> Self {
        self.config = self.config.with_longitude_boundary(boundary);
        self
    }

    /// Validate the settings and build the codec.
    pub fn build(self) -> Result<Geohasher> {
        self.config
            .validate()
            .map_err(Geohash36Error::InvalidConfig)?;

        log::debug!("Built Geohash-36 codec with {:?}", self.config);

        Ok(Geohasher {
            config: self.config,
        })
    }
}
