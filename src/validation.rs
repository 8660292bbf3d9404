//! Validation for coordinates and hash lengths.

use crate::error::{Geohash36Error, Result};
use crate::interval::{LATITUDE_RANGE, LONGITUDE_RANGE};

/// Longest hash the codec produces.
///
/// At 15 symbols a latitude cell is about 4e-10 degrees (0.04 mm) tall. Deeper
/// cells are so few `f64` steps wide that a decoded midpoint drifts past
/// half the cell size.
pub const MAX_HASH_LENGTH: usize = 15;

/// Validates latitude and longitude are finite and inside their axes.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use geohash36::validation::validate_coordinate;
///
/// assert!(validate_coordinate(51.504444, -0.086666).is_ok());
/// assert!(validate_coordinate(95.0, 0.0).is_err());
/// assert!(validate_coordinate(0.0, f64::NAN).is_err());
/// ```
pub fn validate_coordinate(latitude: f64, longitude: f64) -> Result<()> {
    if !latitude.is_finite() {
        return Err(reject(format!(
            "Latitude must be finite, got: {}",
            latitude
        )));
    }

    if !longitude.is_finite() {
        return Err(reject(format!(
            "Longitude must be finite, got: {}",
            longitude
        )));
    }

    if !LATITUDE_RANGE.contains(latitude) {
        return Err(reject(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            latitude
        )));
    }

    if !LONGITUDE_RANGE.contains(longitude) {
        return Err(reject(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            longitude
        )));
    }

    Ok(())
}

/// Validates a requested hash length.
pub fn validate_length(length: usize) -> Result<()> {
    if length > MAX_HASH_LENGTH {
        log::debug!("Rejecting hash length {}", length);
        return Err(Geohash36Error::InvalidLength {
            length,
            max: MAX_HASH_LENGTH,
        });
    }
    Ok(())
}

fn reject(message: String) -> Geohash36Error {
    log::debug!("Rejecting coordinate: {}", message);
    Geohash36Error::OutOfRange(message)
}
