//! Adjacent cells at the same hash length.
//!
//! A hash is read as two base-6 numbers, one made of its row digits and one of
//! its column digits, most significant symbol first. Moving one cell is adding
//! ±1 to the last digit and carrying toward the first. A carry out of the first
//! row digit means crossing a pole, which always fails. A carry out of the first
//! column digit means crossing the antimeridian, handled by
//! [`LongitudeBoundary`].

use crate::alphabet::{GRID_SIDE, symbol};
use crate::codec::decode::grid_positions;
use crate::error::{Geohash36Error, Result};
use serde::{Deserialize, Serialize};

/// A compass step on the grid, or no step at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Center,
}

impl Direction {
    /// The eight directions that actually move, clockwise from north.
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(row_delta, col_delta)`. Rows grow southward, columns eastward.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::Center => (0, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::Center => Direction::Center,
        }
    }
}

/// What a step across the ±180° meridian does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongitudeBoundary {
    /// Continue on the other side of the antimeridian.
    #[default]
    Wrap,
    /// Fail with [`Geohash36Error::OutOfRange`].
    Reject,
}

/// The eight neighbors of a cell. `None` where the step leaves the globe.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Neighbors {
    pub north: Option<String>,
    pub north_east: Option<String>,
    pub east: Option<String>,
    pub south_east: Option<String>,
    pub south: Option<String>,
    pub south_west: Option<String>,
    pub west: Option<String>,
    pub north_west: Option<String>,
}

impl Neighbors {
    pub fn get(&self, direction: Direction) -> Option<&str> {
        let slot = match direction {
            Direction::North => &self.north,
            Direction::NorthEast => &self.north_east,
            Direction::East => &self.east,
            Direction::SouthEast => &self.south_east,
            Direction::South => &self.south,
            Direction::SouthWest => &self.south_west,
            Direction::West => &self.west,
            Direction::NorthWest => &self.north_west,
            Direction::Center => return None,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, direction: Direction) -> Option<&mut Option<String>> {
        match direction {
            Direction::North => Some(&mut self.north),
            Direction::NorthEast => Some(&mut self.north_east),
            Direction::East => Some(&mut self.east),
            Direction::SouthEast => Some(&mut self.south_east),
            Direction::South => Some(&mut self.south),
            Direction::SouthWest => Some(&mut self.south_west),
            Direction::West => Some(&mut self.west),
            Direction::NorthWest => Some(&mut self.north_west),
            Direction::Center => None,
        }
    }

    /// Present neighbors in [`Direction::COMPASS`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &str)> {
        Direction::COMPASS
            .into_iter()
            .filter_map(|direction| self.get(direction).map(|hash| (direction, hash)))
    }
}

/// The hash of the adjacent cell in `direction`, wrapping at the antimeridian.
///
/// # Errors
///
/// - [`InvalidSymbol`](Geohash36Error::InvalidSymbol) if `hash` is malformed.
/// - [`OutOfRange`](Geohash36Error::OutOfRange) if the step crosses a pole.
///
/// # Examples
///
/// ```
/// use geohash36::{neighbor, Direction};
///
/// assert_eq!(neighbor("8", Direction::North)?, "2");
/// assert_eq!(neighbor("27", Direction::East)?, "32");
/// assert_eq!(neighbor("7", Direction::East)?, "2");
/// assert!(neighbor("2", Direction::North).is_err());
/// # Ok::<(), geohash36::Geohash36Error>(())
/// ```
pub fn neighbor(hash: &str, direction: Direction) -> Result<String> {
    neighbor_with(hash, direction, LongitudeBoundary::default())
}

/// Same as [`neighbor`] with an explicit antimeridian policy.
pub fn neighbor_with(
    hash: &str,
    direction: Direction,
    boundary: LongitudeBoundary,
) -> Result<String> {
    let positions = grid_positions(hash)?;
    shift(hash, &positions, direction, boundary)
}

/// All eight neighbors of `hash`, wrapping at the antimeridian.
///
/// # Examples
///
/// ```
/// use geohash36::{neighbors, Direction};
///
/// let around = neighbors("2")?;
/// assert_eq!(around.north, None);
/// assert_eq!(around.get(Direction::South), Some("8"));
/// assert_eq!(around.west.as_deref(), Some("7"));
/// # Ok::<(), geohash36::Geohash36Error>(())
/// ```
pub fn neighbors(hash: &str) -> Result<Neighbors> {
    neighbors_with(hash, LongitudeBoundary::default())
}

/// Same as [`neighbors`] with an explicit antimeridian policy.
pub fn neighbors_with(hash: &str, boundary: LongitudeBoundary) -> Result<Neighbors> {
    let positions = grid_positions(hash)?;
    let mut result = Neighbors::default();

    for direction in Direction::COMPASS {
        if let Some(slot) = result.slot_mut(direction) {
            *slot = shift(hash, &positions, direction, boundary).ok();
        }
    }

    Ok(result)
}

fn shift(
    hash: &str,
    positions: &[(usize, usize)],
    direction: Direction,
    boundary: LongitudeBoundary,
) -> Result<String> {
    if direction == Direction::Center {
        return Ok(hash.to_string());
    }

    let (row_delta, col_delta) = direction.offset();
    let mut rows: Vec<usize> = positions.iter().map(|&(row, _)| row).collect();
    let mut cols: Vec<usize> = positions.iter().map(|&(_, col)| col).collect();

    if !add_with_carry(&mut rows, row_delta) {
        return Err(Geohash36Error::OutOfRange(format!(
            "{:?} of {:?} crosses a pole",
            direction, hash
        )));
    }

    if !add_with_carry(&mut cols, col_delta) && boundary == LongitudeBoundary::Reject {
        return Err(Geohash36Error::OutOfRange(format!(
            "{:?} of {:?} crosses the antimeridian",
            direction, hash
        )));
    }

    Ok(rows
        .into_iter()
        .zip(cols)
        .map(|(row, col)| symbol(row, col))
        .collect())
}

/// Adds `delta` to the last base-6 digit and propagates the carry toward the
/// first. Digits always end up in `0..6`. Returns `false` when a carry is left
/// over past the first digit.
fn add_with_carry(digits: &mut [usize], delta: i8) -> bool {
    let base = GRID_SIDE as isize;
    let mut carry = delta as isize;

    for digit in digits.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = *digit as isize + carry;
        *digit = sum.rem_euclid(base) as usize;
        carry = sum.div_euclid(base);
    }

    carry == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_cell, encode};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_add_with_carry() {
        let mut digits = [0, 5, 5];
        assert!(add_with_carry(&mut digits, 1));
        assert_eq!(digits, [1, 0, 0]);

        assert!(add_with_carry(&mut digits, -1));
        assert_eq!(digits, [0, 5, 5]);

        let mut digits = [5, 5];
        assert!(!add_with_carry(&mut digits, 1));
        assert_eq!(digits, [0, 0]);

        let mut digits: [usize; 0] = [];
        assert!(add_with_carry(&mut digits, 0));
        assert!(!add_with_carry(&mut digits, -1));
    }

    #[test]
    fn test_center_is_identity() {
        for hash in ["", "2", "bdrdC26BqH", "XXXX"] {
            assert_eq!(neighbor(hash, Direction::Center).unwrap(), hash);
        }
    }

    #[test]
    fn test_center_still_validates() {
        assert!(matches!(
            neighbor("b!", Direction::Center),
            Err(Geohash36Error::InvalidSymbol { symbol: '!', position: 1 })
        ));
    }

    #[test]
    fn test_simple_steps() {
        assert_eq!(neighbor("2", Direction::East).unwrap(), "3");
        assert_eq!(neighbor("2", Direction::South).unwrap(), "8");
        assert_eq!(neighbor("9", Direction::NorthWest).unwrap(), "2");
        assert_eq!(neighbor("9", Direction::SouthEast).unwrap(), "g");
    }

    #[test]
    fn test_row_borrow_across_levels() {
        assert_eq!(neighbor("82", Direction::North).unwrap(), "2R");
        assert_eq!(neighbor("2R", Direction::South).unwrap(), "82");
    }

    #[test]
    fn test_poles_reject() {
        assert!(matches!(
            neighbor("2222", Direction::North),
            Err(Geohash36Error::OutOfRange(_))
        ));
        assert!(matches!(
            neighbor("XXXX", Direction::SouthWest),
            Err(Geohash36Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_antimeridian_policy() {
        assert_eq!(neighbor("77", Direction::East).unwrap(), "22");
        assert_eq!(neighbor("22", Direction::West).unwrap(), "77");
        assert!(matches!(
            neighbor_with("77", Direction::East, LongitudeBoundary::Reject),
            Err(Geohash36Error::OutOfRange(_))
        ));
        assert_eq!(
            neighbor_with("76", Direction::East, LongitudeBoundary::Reject).unwrap(),
            "77"
        );
    }

    #[test]
    fn test_empty_hash() {
        assert_eq!(neighbor("", Direction::East).unwrap(), "");
        assert!(neighbor("", Direction::North).is_err());
        assert!(neighbor_with("", Direction::West, LongitudeBoundary::Reject).is_err());
    }

    #[test]
    fn test_neighbor_cells_are_adjacent() {
        let hash = encode(51.504444, -0.086666, 8).unwrap();
        let cell = decode_cell(&hash).unwrap();

        let north = decode_cell(&neighbor(&hash, Direction::North).unwrap()).unwrap();
        assert!((north.latitude.min - cell.latitude.max).abs() < EPSILON);
        assert!((north.longitude.min - cell.longitude.min).abs() < EPSILON);

        let east = decode_cell(&neighbor(&hash, Direction::East).unwrap()).unwrap();
        assert!((east.longitude.min - cell.longitude.max).abs() < EPSILON);
        assert!((east.latitude.min - cell.latitude.min).abs() < EPSILON);

        let south_west = decode_cell(&neighbor(&hash, Direction::SouthWest).unwrap()).unwrap();
        assert!((south_west.latitude.max - cell.latitude.min).abs() < EPSILON);
        assert!((south_west.longitude.max - cell.longitude.min).abs() < EPSILON);
    }

    #[test]
    fn test_opposite_steps_return() {
        let hash = "bdrdC26BqH";
        for direction in Direction::COMPASS {
            let there = neighbor(hash, direction).unwrap();
            assert_eq!(neighbor(&there, direction.opposite()).unwrap(), hash);
        }
    }

    #[test]
    fn test_neighbors_at_north_west_corner() {
        let around = neighbors("2").unwrap();
        assert_eq!(around.north, None);
        assert_eq!(around.north_east, None);
        assert_eq!(around.north_west, None);
        assert_eq!(around.east.as_deref(), Some("3"));
        assert_eq!(around.south_east.as_deref(), Some("9"));
        assert_eq!(around.south.as_deref(), Some("8"));
        assert_eq!(around.south_west.as_deref(), Some("d"));
        assert_eq!(around.west.as_deref(), Some("7"));
        assert_eq!(around.iter().count(), 5);
        assert_eq!(around.get(Direction::Center), None);
    }

    #[test]
    fn test_neighbors_reject_policy() {
        let around = neighbors_with("2", LongitudeBoundary::Reject).unwrap();
        assert_eq!(around.west, None);
        assert_eq!(around.south_west, None);
        assert_eq!(around.iter().count(), 3);
    }

    #[test]
    fn test_neighbors_invalid_hash() {
        assert!(neighbors("2a").is_err());
    }
}
