use url::Url;

use crate::geocode::models::Point;

/// Address-theme query: exact match on the `address` field.
pub fn address_lookup_url(endpoint: &Url, address: &str) -> Url {
    let filter = format!("address = '{}'", address.replace('\'', "''"));
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("where", &filter)
        .append_pair("outFields", "*")
        .append_pair("f", "geojson");
    url
}

/// Boundary-layer query: features intersecting a WGS-84 point.
pub fn point_lookup_url(endpoint: &Url, point: Point) -> Url {
    let geometry = format!("{},{}", point.x, point.y);
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("geometry", &geometry)
        .append_pair("geometryType", "esriGeometryPoint")
        .append_pair("inSR", "4326")
        .append_pair("spatialRel", "esriSpatialRelIntersects")
        .append_pair("outFields", "*")
        .append_pair("returnGeometry", "false")
        .append_pair("f", "geojson");
    url
}
