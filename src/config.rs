//! Codec configuration.

use crate::neighbor::LongitudeBoundary;
use crate::precision::{DEFAULT_HASH_LENGTH, EARTH_RADIUS_METERS};
use crate::validation::MAX_HASH_LENGTH;
use serde::de::Error;

/// Lengths past this give sub-millimeter cells.
const USEFUL_LENGTH: usize = 13;

/// Codec settings
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Hash length used by `encode_default`
    #[serde(default = "Config::default_length")]
    pub default_length: usize,

    /// Sphere radius for precision figures
    #[serde(default = "Config::default_earth_radius")]
    pub earth_radius_meters: f64,

    #[serde(default)]
    pub longitude_boundary: LongitudeBoundary,
}

impl Config {
    const fn default_length() -> usize {
        DEFAULT_HASH_LENGTH
    }

    const fn default_earth_radius() -> f64 {
        EARTH_RADIUS_METERS
    }

    pub fn with_default_length(mut self, length: usize) -> Self {
        assert!(length > 0, "Default length must be greater than zero");

        if length > USEFUL_LENGTH {
            log::warn!(
                "Default hash length of {} gives sub-millimeter cells; \
                shorter hashes are usually enough.",
                length
            );
        }

        self.default_length = length;
        self
    }

    pub fn with_earth_radius(mut self, radius_meters: f64) -> Self {
        self.earth_radius_meters = radius_meters;
        self
    }

    pub fn with_longitude_boundary(mut self, boundary: LongitudeBoundary) -> Self {
        self.longitude_boundary = boundary;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.default_length == 0 {
            return Err("Default length must be greater than zero".to_string());
        }

        if self.default_length > MAX_HASH_LENGTH {
            return Err(format!(
                "Default length {} exceeds the maximum of {}",
                self.default_length, MAX_HASH_LENGTH
            ));
        }

        if !self.earth_radius_meters.is_finite() || self.earth_radius_meters <= 0.0 {
            return Err(format!(
                "Earth radius must be positive and finite, got: {}",
                self.earth_radius_meters
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_length: Self::default_length(),
            earth_radius_meters: Self::default_earth_radius(),
            longitude_boundary: LongitudeBoundary::default(),
        }
    }
}
