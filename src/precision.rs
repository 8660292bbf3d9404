//! Cell size in meters for a given hash length.

use crate::alphabet::GRID_SIDE;
use crate::error::{Geohash36Error, Result};
use crate::types::Precision;
use crate::validation::validate_length;
use std::f64::consts::PI;

/// Mean Earth radius used for precision figures, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_370_000.0;

/// Hash length used when none is given.
pub const DEFAULT_HASH_LENGTH: usize = 10;

/// Latitude and longitude extent of a cell at `length`, on a sphere of
/// [`EARTH_RADIUS_METERS`].
///
/// Longitude spans twice the degrees of latitude with the same number of
/// slices, so its figure is always twice the latitude one.
///
/// # Examples
///
/// ```
/// use geohash36::precision_in_meters;
///
/// let precision = precision_in_meters(10)?;
/// assert!(precision.latitude_meters < 0.2);
/// assert_eq!(precision.longitude_meters, 2.0 * precision.latitude_meters);
/// # Ok::<(), geohash36::Geohash36Error>(())
/// ```
pub fn precision_in_meters(length: usize) -> Result<Precision> {
    precision_with_radius(length, EARTH_RADIUS_METERS)
}

/// Same as [`precision_in_meters`] on a sphere of `earth_radius_meters`.
pub fn precision_with_radius(length: usize, earth_radius_meters: f64) -> Result<Precision> {
    validate_length(length)?;

    if !earth_radius_meters.is_finite() || earth_radius_meters <= 0.0 {
        return Err(Geohash36Error::OutOfRange(format!(
            "Earth radius must be positive and finite, got: {}",
            earth_radius_meters
        )));
    }

    let meters_per_degree = (2.0 * PI * earth_radius_meters) / 360.0;
    let latitude_meters = (90.0 / subdivisions(length) as f64) * meters_per_degree;

    Ok(Precision {
        latitude_meters,
        longitude_meters: latitude_meters * 2.0,
    })
}

/// `6^length` by repeated multiplication. Exact for every valid length.
fn subdivisions(length: usize) -> u64 {
    (0..length).fold(1u64, |acc, _| acc * GRID_SIDE as u64)
}
