//! Value types produced by the codec.

use crate::error::Result;
use crate::interval::{Interval, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::validation::validate_coordinate;
use geo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash36::Coordinate;
    ///
    /// let tower_bridge = Coordinate::new(51.504444, -0.086666)?;
    /// assert!(Coordinate::new(91.0, 0.0).is_err());
    /// # Ok::<(), geohash36::Geohash36Error>(())
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        validate_coordinate(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl From<Coordinate> for Point {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl TryFrom<Point> for Coordinate {
    type Error = crate::Geohash36Error;

    fn try_from(point: Point) -> Result<Self> {
        Coordinate::new(point.y(), point.x())
    }
}

/// The area covered by a hash: one latitude and one longitude interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub latitude: Interval,
    pub longitude: Interval,
    /// Number of symbols of the hash this cell was decoded from.
    pub length: usize,
}

impl Cell {
    /// The whole globe, the cell of the empty hash.
    pub const WORLD: Cell = Cell {
        latitude: LATITUDE_RANGE,
        longitude: LONGITUDE_RANGE,
        length: 0,
    };

    pub fn center(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude.midpoint(),
            longitude: self.longitude.midpoint(),
        }
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.latitude.width()
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.longitude.width()
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.latitude.contains(coordinate.latitude) && self.longitude.contains(coordinate.longitude)
    }

    /// The cell as a `geo::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.longitude.min, y: self.latitude.min },
            geo::coord! { x: self.longitude.max, y: self.latitude.max },
        )
    }
}

/// Size in meters of a cell at some hash length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Precision {
    pub latitude_meters: f64,
    pub longitude_meters: f64,
}
