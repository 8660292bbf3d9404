//! GeoJSON output for decoded cells.

use crate::codec::decode_cell;
use crate::error::Result;
use crate::types::Cell;
use ::geojson::{Feature, Geometry, JsonObject, JsonValue, Value};

impl Cell {
    /// The cell as a closed, counter-clockwise GeoJSON polygon ring.
    pub fn to_geojson_geometry(&self) -> Geometry {
        let (west, east) = (self.longitude.min, self.longitude.max);
        let (south, north) = (self.latitude.min, self.latitude.max);

        let ring = vec![
            vec![west, south],
            vec![east, south],
            vec![east, north],
            vec![west, north],
            vec![west, south],
        ];

        Geometry::new(Value::Polygon(vec![ring]))
    }
}

/// Decodes `hash` into a GeoJSON feature with the cell polygon, its bounding
/// box and a `geohash` property.
///
/// ```rust
/// use geohash36::geojson::cell_feature;
///
/// let feature = cell_feature("bdrd")?;
/// assert_eq!(feature.property("geohash").and_then(|v| v.as_str()), Some("bdrd"));
/// # Ok::<(), geohash36::Geohash36Error>(())
/// ```
pub fn cell_feature(hash: &str) -> Result<Feature> {
    let cell = decode_cell(hash)?;

    let mut properties = JsonObject::new();
    properties.insert("geohash".to_string(), JsonValue::from(hash));
    properties.insert("length".to_string(), JsonValue::from(cell.length));

    Ok(Feature {
        bbox: Some(vec![
            cell.longitude.min,
            cell.latitude.min,
            cell.longitude.max,
            cell.latitude.max,
        ]),
        geometry: Some(cell.to_geojson_geometry()),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}
