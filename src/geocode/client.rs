use log::{debug, info};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::config::{Config, CoordinatesFormat, Endpoints, SuburbStrategy};
use crate::geocode::error::GeocodeError;
use crate::geocode::extract::{first_feature, point, property};
use crate::geocode::models::{Coordinates, DistrictResult, Point};
use crate::geocode::query::{address_lookup_url, point_lookup_url};
use crate::geocode::suburb::extract_suburb;

/// Resolves street addresses against the NSW spatial services.
///
/// Holds one pooled HTTP client, shared across workers through `web::Data`.
pub struct GeocodeClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    suburb_strategy: SuburbStrategy,
    coordinates_format: CoordinatesFormat,
}

impl GeocodeClient {
    pub fn new(config: &Config) -> Result<GeocodeClient, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(GeocodeClient {
            http,
            endpoints: config.endpoints.clone(),
            suburb_strategy: config.suburb_strategy,
            coordinates_format: config.coordinates_format,
        })
    }

    /// Looks up the address, then the district (and suburb) at its location.
    ///
    /// Calls are strictly sequential and the first failure aborts the rest.
    pub async fn resolve(&self, address: &str) -> Result<DistrictResult, GeocodeError> {
        let address = address.trim();
        info!("Resolving district for address '{}'", address);

        let addresses = self.fetch(address_lookup_url(&self.endpoints.address, address)).await?;
        let feature = first_feature(&addresses, "Address features not found")?;
        let location = point(feature)?;
        debug!("Address located at {},{}", location.x, location.y);

        let boundaries = self.fetch(point_lookup_url(&self.endpoints.district, location)).await?;
        let feature = first_feature(&boundaries, "No boundaries features found")?;
        let district = property(feature, "districtname", "District not found")?;
        debug!("District: {}", district);

        let suburb = self.suburb(address, location).await?;
        debug!("Suburb: {}", suburb);

        Ok(DistrictResult {
            suburb,
            coordinates: Coordinates::from_point(location, self.coordinates_format),
            district,
        })
    }

    async fn suburb(&self, address: &str, location: Point) -> Result<String, GeocodeError> {
        match self.suburb_strategy {
            SuburbStrategy::Lookup => {
                let suburbs = self.fetch(point_lookup_url(&self.endpoints.suburb, location)).await?;
                let feature = first_feature(&suburbs, "No suburb features found")?;
                property(feature, "suburbname", "Suburb not found")
            },
            SuburbStrategy::Address => {
                extract_suburb(Some(address)).ok_or(GeocodeError::NotFound("Suburb not found"))
            },
        }
    }

    async fn fetch(&self, url: Url) -> Result<Value, GeocodeError> {
        debug!("GET {}", url);
        let resp = self.http
            .get(url)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeocodeError::from_status(status));
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
