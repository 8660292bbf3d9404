//! Six-way interval bisection shared by the encoder and decoder.

use crate::alphabet::GRID_SIDE;
use serde::{Deserialize, Serialize};

/// Full latitude axis.
pub const LATITUDE_RANGE: Interval = Interval::new(-90.0, 90.0);

/// Full longitude axis.
pub const LONGITUDE_RANGE: Interval = Interval::new(-180.0, 180.0);

/// Certainty bounds for one axis at some subdivision depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        (self.max - self.min).abs()
    }

    /// Width of one of the six slices.
    pub fn slice_width(&self) -> f64 {
        self.width() / GRID_SIDE as f64
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Narrows to slice `index` (0 = lowest values).
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash36::interval::{Interval, LONGITUDE_RANGE};
    ///
    /// assert_eq!(LONGITUDE_RANGE.narrow(3), Interval::new(0.0, 60.0));
    /// ```
    pub fn narrow(&self, index: usize) -> Self {
        let slice = self.slice_width();
        Self {
            min: self.min + slice * index as f64,
            max: self.min + slice * (index + 1) as f64,
        }
    }

    /// Selects the slice containing `target` and returns its index together
    /// with the narrowed interval.
    ///
    /// A slice owns its upper bound but not its lower bound. A target that no
    /// slice claims is put in slice 0 when it sits at or below `min` (the
    /// south pole, the western edge of the antimeridian), and in the last
    /// slice otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash36::interval::{Interval, LATITUDE_RANGE};
    ///
    /// let (index, narrowed) = LATITUDE_RANGE.bisect(51.5);
    /// assert_eq!(index, 4);
    /// assert_eq!(narrowed, Interval::new(30.0, 60.0));
    ///
    /// assert_eq!(LATITUDE_RANGE.bisect(-90.0).0, 0);
    /// ```
    pub fn bisect(&self, target: f64) -> (usize, Self) {
        let slice = self.slice_width();

        let index = (0..GRID_SIDE)
            .find(|&i| {
                let lower = self.min + i as f64 * slice;
                let upper = self.min + (i + 1) as f64 * slice;
                target > lower && target <= upper
            })
            .unwrap_or(if target <= self.min { 0 } else { GRID_SIDE - 1 });

        (index, self.narrow(index))
    }
}
