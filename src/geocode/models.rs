use serde::Serialize;

use crate::config::CoordinatesFormat;

/// A WGS-84 point in upstream order: x is longitude, y is latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coordinates {
    LatLon { latitude: f64, longitude: f64 },
    Pair([f64; 2]),
}

impl Coordinates {
    pub fn from_point(point: Point, format: CoordinatesFormat) -> Coordinates {
        match format {
            CoordinatesFormat::Object => Coordinates::LatLon {
                latitude: point.y,
                longitude: point.x,
            },
            CoordinatesFormat::Array => Coordinates::Pair([point.x, point.y]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictResult {
    pub suburb: String,
    pub coordinates: Coordinates,
    pub district: String,
}
