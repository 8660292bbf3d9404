//! Encoding coordinates to Geohash-36 strings and decoding them back.
//!
//! Each symbol fixes one level of a 6×6 subdivision: the column picks one of
//! six longitude slices, the row one of six latitude slices counted from the
//! north.

pub mod decode;
pub mod encode;

pub use decode::{decode, decode_cell};
pub use encode::encode;

use crate::alphabet::GRID_SIDE;

/// Converts between a grid row (0 = north) and a latitude slice index
/// (0 = south). The mapping is its own inverse.
#[inline]
pub(crate) fn flip_row(index: usize) -> usize {
    GRID_SIDE - 1 - index
}
