//! A codec bound to a [`Config`].

use crate::builder::Geohash36Builder;
use crate::codec::{decode, decode_cell, encode};
use crate::config::Config;
use crate::error::{Geohash36Error, Result};
use crate::neighbor::{Direction, Neighbors, neighbor_with, neighbors_with};
use crate::precision::precision_with_radius;
use crate::types::{Cell, Coordinate, Precision};
use geo::Point;

/// Geohash-36 operations using configured defaults.
///
/// The free functions of this crate use the reference defaults. A `Geohasher`
/// carries its own default length, Earth radius and antimeridian policy.
///
/// ```rust
/// use geohash36::{Direction, Geohasher, LongitudeBoundary};
///
/// let hasher = Geohasher::builder()
///     .default_length(6)
///     .longitude_boundary(LongitudeBoundary::Reject)
///     .build()?;
///
/// let hash = hasher.encode_default(51.504444, -0.086666)?;
/// assert_eq!(hash, "bdrdC2");
/// assert!(hasher.neighbor("777777", Direction::East).is_err());
/// # Ok::<(), geohash36::Geohash36Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Geohasher {
    pub(crate) config: Config,
}

impl Geohasher {
    /// A codec with default settings.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn builder() -> Geohash36Builder {
        Geohash36Builder::new()
    }

    /// A codec from an existing configuration, validated first.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().map_err(Geohash36Error::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn encode(&self, latitude: f64, longitude: f64, length: usize) -> Result<String> {
        encode(latitude, longitude, length)
    }

    /// Encodes with the configured default length.
    pub fn encode_default(&self, latitude: f64, longitude: f64) -> Result<String> {
        encode(latitude, longitude, self.config.default_length)
    }

    /// Encodes a `geo::Point` (x = longitude, y = latitude) at the default length.
    pub fn encode_point(&self, point: &Point) -> Result<String> {
        self.encode_default(point.y(), point.x())
    }

    pub fn decode(&self, hash: &str) -> Result<Coordinate> {
        decode(hash)
    }

    pub fn decode_cell(&self, hash: &str) -> Result<Cell> {
        decode_cell(hash)
    }

    /// Cell size at `length` on the configured sphere.
    pub fn precision(&self, length: usize) -> Result<Precision> {
        precision_with_radius(length, self.config.earth_radius_meters)
    }

    /// Cell size at the configured default length.
    pub fn default_precision(&self) -> Result<Precision> {
        self.precision(self.config.default_length)
    }

    pub fn neighbor(&self, hash: &str, direction: Direction) -> Result<String> {
        neighbor_with(hash, direction, self.config.longitude_boundary)
    }

    pub fn neighbors(&self, hash: &str) -> Result<Neighbors> {
        neighbors_with(hash, self.config.longitude_boundary)
    }
}

impl Default for Geohasher {
    fn default() -> Self {
        Self::new()
    }
}
