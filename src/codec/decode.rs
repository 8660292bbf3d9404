use super::flip_row;
use crate::alphabet;
use crate::error::{Geohash36Error, Result};
use crate::interval::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::types::{Cell, Coordinate};

/// Decodes a hash to the center of the cell it names.
///
/// Decoding is all-or-nothing: the first symbol outside the alphabet fails the
/// whole call.
///
/// # Examples
///
/// ```
/// use geohash36::{decode, Geohash36Error};
///
/// let coordinate = decode("bdrdC26BqH")?;
/// assert!((coordinate.latitude - 51.504444).abs() < 1e-4);
/// assert!((coordinate.longitude + 0.086666).abs() < 1e-4);
///
/// assert!(matches!(
///     decode("bd!d"),
///     Err(Geohash36Error::InvalidSymbol { symbol: '!', position: 2 })
/// ));
/// # Ok::<(), geohash36::Geohash36Error>(())
/// ```
pub fn decode(hash: &str) -> Result<Coordinate> {
    decode_cell(hash).map(|cell| cell.center())
}

/// Decodes a hash to the bounds of the cell it names.
pub fn decode_cell(hash: &str) -> Result<Cell> {
    let mut lat = LATITUDE_RANGE;
    let mut lon = LONGITUDE_RANGE;
    let mut length = 0;

    for (row, col) in grid_positions(hash)? {
        lon = lon.narrow(col);
        lat = lat.narrow(flip_row(row));
        length += 1;
    }

    Ok(Cell {
        latitude: lat,
        longitude: lon,
        length,
    })
}

/// Resolves every symbol of `hash` to its `(row, col)` grid position.
pub(crate) fn grid_positions(hash: &str) -> Result<Vec<(usize, usize)>> {
    hash.chars()
        .enumerate()
        .map(|(position, symbol)| {
            alphabet::position(symbol).ok_or_else(|| {
                log::debug!(
                    "Rejecting hash {:?}: symbol {:?} at position {}",
                    hash,
                    symbol,
                    position
                );
                Geohash36Error::InvalidSymbol { symbol, position }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash_is_world() {
        assert_eq!(decode_cell("").unwrap(), Cell::WORLD);
        assert_eq!(
            decode("").unwrap(),
            Coordinate {
                latitude: 0.0,
                longitude: 0.0
            }
        );
    }

    #[test]
    fn test_single_symbol_cells() {
        let cell = decode_cell("2").unwrap();
        assert_eq!(cell.latitude.min, 60.0);
        assert_eq!(cell.latitude.max, 90.0);
        assert_eq!(cell.longitude.min, -180.0);
        assert_eq!(cell.longitude.max, -120.0);

        let cell = decode_cell("X").unwrap();
        assert_eq!(cell.latitude.min, -90.0);
        assert_eq!(cell.longitude.max, 180.0);
    }

    #[test]
    fn test_invalid_symbols_never_decode() {
        let err = decode("!@#$%").unwrap_err();
        assert_eq!(
            err,
            Geohash36Error::InvalidSymbol {
                symbol: '!',
                position: 0
            }
        );

        for bad in ["!", "@", "#", "$", "%"] {
            assert!(matches!(
                decode(bad),
                Err(Geohash36Error::InvalidSymbol { position: 0, .. })
            ));
        }
    }

    #[test]
    fn test_invalid_symbol_at_end() {
        assert_eq!(
            decode("bdrdC26Bq0").unwrap_err(),
            Geohash36Error::InvalidSymbol {
                symbol: '0',
                position: 9
            }
        );
    }

    #[test]
    fn test_case_sensitive() {
        // 'b' and 'B' are distinct symbols.
        assert_ne!(decode_cell("b").unwrap(), decode_cell("B").unwrap());
        assert!(decode("a").is_err());
    }

    #[test]
    fn test_cell_length() {
        assert_eq!(decode_cell("bdrd").unwrap().length, 4);
    }
}
