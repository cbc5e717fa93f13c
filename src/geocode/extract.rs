use serde_json::Value;

use crate::geocode::error::GeocodeError;
use crate::geocode::models::Point;
use crate::utils::NonBlankExtension;

/// First element of the collection's `features` array.
pub fn first_feature<'a>(
    collection: &'a Value,
    missing: &'static str
) -> Result<&'a Value, GeocodeError> {
    collection
        .get("features")
        .and_then(Value::as_array)
        .and_then(|features| features.first())
        .ok_or(GeocodeError::NotFound(missing))
}

/// Reads `geometry.coordinates` as an (x, y) point.
pub fn point(feature: &Value) -> Result<Point, GeocodeError> {
    let coordinates = feature
        .get("geometry")
        .and_then(|geometry| geometry.get("coordinates"))
        .and_then(Value::as_array)
        .filter(|coordinates| coordinates.len() >= 2)
        .ok_or(GeocodeError::NotFound("No coordinates found"))?;

    let x = finite(&coordinates[0])?;
    let y = finite(&coordinates[1])?;
    Ok(Point { x, y })
}

fn finite(value: &Value) -> Result<f64, GeocodeError> {
    value
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or(GeocodeError::NotFound("No coordinates found"))
}

/// Non-blank string property of a feature.
pub fn property(
    feature: &Value,
    name: &str,
    missing: &'static str
) -> Result<String, GeocodeError> {
    feature
        .get("properties")
        .and_then(|properties| properties.get(name))
        .and_then(Value::as_str)
        .non_blank()
        .map(str::to_owned)
        .ok_or(GeocodeError::NotFound(missing))
}
