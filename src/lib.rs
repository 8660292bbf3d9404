//! Geohash-36 codec: coordinates to short strings over a 6×6 symbol grid.
//!
//! Every symbol splits the current cell into 6×6 sub-cells, so each extra
//! symbol makes a cell six times narrower and six times shorter.
//!
//! ```rust
//! use geohash36::{decode, encode, neighbor, precision_in_meters, Direction};
//!
//! let hash = encode(51.504444, -0.086666, 10)?;
//! assert_eq!(hash, "bdrdC26BqH");
//!
//! let position = decode(&hash)?;
//! let precision = precision_in_meters(10)?;
//! assert!(precision.latitude_meters < 1.0);
//!
//! let north = neighbor(&hash, Direction::North)?;
//! assert_eq!(neighbor(&north, Direction::South)?, hash);
//! # let _ = position;
//! # Ok::<(), geohash36::Geohash36Error>(())
//! ```

pub mod alphabet;
pub mod builder;
pub mod codec;
pub mod config;
pub mod error;
pub mod hasher;
pub mod interval;
pub mod neighbor;
pub mod precision;
pub mod types;
pub mod validation;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use builder::Geohash36Builder;
pub use codec::{decode, decode_cell, encode, encode::encode_coordinate};
pub use config::Config;
pub use error::{Geohash36Error, Result};
pub use hasher::Geohasher;
pub use neighbor::{
    Direction, LongitudeBoundary, Neighbors, neighbor, neighbor_with, neighbors, neighbors_with,
};
pub use precision::{
    DEFAULT_HASH_LENGTH, EARTH_RADIUS_METERS, precision_in_meters, precision_with_radius,
};
pub use types::{Cell, Coordinate, Precision};
pub use validation::MAX_HASH_LENGTH;

pub type Geohash36 = Geohasher;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, Geohash36, Geohash36Builder, Geohash36Error, Result};

    pub use crate::{decode, decode_cell, encode, neighbor, neighbors, precision_in_meters};

    pub use crate::{Cell, Coordinate, Direction, LongitudeBoundary, Neighbors, Precision};

    pub use geo::{Point, Rect};
}
