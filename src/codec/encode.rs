use super::flip_row;
use crate::alphabet::symbol;
use crate::error::Result;
use crate::interval::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::types::Coordinate;
use crate::validation::{validate_coordinate, validate_length};

/// Encodes a position as a Geohash-36 string of exactly `length` symbols.
///
/// # Errors
///
/// - [`OutOfRange`](crate::Geohash36Error::OutOfRange) if either coordinate is
///   non-finite or outside its axis.
/// - [`InvalidLength`](crate::Geohash36Error::InvalidLength) if `length`
///   exceeds [`MAX_HASH_LENGTH`](crate::validation::MAX_HASH_LENGTH).
///
/// # Examples
///
/// ```
/// use geohash36::encode;
///
/// assert_eq!(encode(51.504444, -0.086666, 10)?, "bdrdC26BqH");
/// assert_eq!(encode(51.504444, -0.086666, 0)?, "");
/// # Ok::<(), geohash36::Geohash36Error>(())
/// ```
pub fn encode(latitude: f64, longitude: f64, length: usize) -> Result<String> {
    validate_coordinate(latitude, longitude)?;
    validate_length(length)?;

    let mut lat = LATITUDE_RANGE;
    let mut lon = LONGITUDE_RANGE;
    let mut hash = String::with_capacity(length);

    for _ in 0..length {
        let (col, narrowed_lon) = lon.bisect(longitude);
        let (slice, narrowed_lat) = lat.bisect(latitude);

        hash.push(symbol(flip_row(slice), col));

        lon = narrowed_lon;
        lat = narrowed_lat;
    }

    Ok(hash)
}

/// Encodes a [`Coordinate`].
pub fn encode_coordinate(coordinate: &Coordinate, length: usize) -> Result<String> {
    encode(coordinate.latitude, coordinate.longitude, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Geohash36Error;
    use crate::validation::MAX_HASH_LENGTH;

    #[test]
    fn test_first_level_corners() {
        // North-west corner lands in row 0, column 0.
        assert_eq!(encode(89.0, -179.0, 1).unwrap(), "2");
        // North-east.
        assert_eq!(encode(89.0, 179.0, 1).unwrap(), "7");
        // South-west.
        assert_eq!(encode(-89.0, -179.0, 1).unwrap(), "R");
        // South-east.
        assert_eq!(encode(-89.0, 179.0, 1).unwrap(), "X");
    }

    #[test]
    fn test_south_pole_is_southern_row() {
        let hash = encode(-90.0, 0.0, 4).unwrap();
        assert!(hash.starts_with('T'), "got {hash}");
        assert!(hash[1..].chars().all(|c| "RtTVWX".contains(c)), "got {hash}");
    }

    #[test]
    fn test_antimeridian_edges() {
        assert_eq!(encode(0.0, -180.0, 3).unwrap().chars().next(), Some('j'));
        assert_eq!(encode(0.0, 180.0, 3).unwrap().chars().next(), Some('M'));
    }

    #[test]
    fn test_length_invariant() {
        for length in 0..=MAX_HASH_LENGTH {
            let hash = encode(-33.8688, 151.2093, length).unwrap();
            assert_eq!(hash.chars().count(), length);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            encode(100.0, 0.0, 5),
            Err(Geohash36Error::OutOfRange(_))
        ));
        assert!(matches!(
            encode(0.0, f64::NAN, 5),
            Err(Geohash36Error::OutOfRange(_))
        ));
        assert!(matches!(
            encode(0.0, 0.0, MAX_HASH_LENGTH + 1),
            Err(Geohash36Error::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_encode_coordinate() {
        let coordinate = Coordinate::new(51.504444, -0.086666).unwrap();
        assert_eq!(encode_coordinate(&coordinate, 10).unwrap(), "bdrdC26BqH");
    }
}
