use std::env;
use std::str::FromStr;
use std::time::Duration;

use dotenv::dotenv;
use thiserror::Error;
use url::Url;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_ADDRESS_SERVICE_URL: &str = "https://portal.spatial.nsw.gov.au/server/rest/services/NSW_Geocoded_Addressing_Theme/FeatureServer/1/query";
const DEFAULT_DISTRICT_SERVICE_URL: &str = "https://portal.spatial.nsw.gov.au/server/rest/services/NSW_Administrative_Boundaries_Theme/FeatureServer/4/query";
const DEFAULT_SUBURB_SERVICE_URL: &str = "https://portal.spatial.nsw.gov.au/server/rest/services/NSW_Administrative_Boundaries_Theme/FeatureServer/2/query";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidTimeout { name: &'static str, value: String },
    #[error("{name} has unknown value '{value}' (expected one of: {expected})")]
    UnknownVariant {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How the suburb of a resolved address is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuburbStrategy {
    /// Point-intersection query against the suburb boundary layer.
    Lookup,
    /// Text heuristic over the requested address, no extra network call.
    Address,
}

impl FromStr for SuburbStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lookup" => Ok(SuburbStrategy::Lookup),
            "address" => Ok(SuburbStrategy::Address),
            _ => Err(()),
        }
    }
}

/// Shape of the `coordinates` field in a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatesFormat {
    /// `{"latitude": y, "longitude": x}`
    Object,
    /// `[x, y]`, as returned by the address service.
    Array,
}

impl FromStr for CoordinatesFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "object" => Ok(CoordinatesFormat::Object),
            "array" => Ok(CoordinatesFormat::Array),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub address: Url,
    pub district: Url,
    pub suburb: Url,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub endpoints: Endpoints,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub suburb_strategy: SuburbStrategy,
    pub coordinates_format: CoordinatesFormat,
}

impl Config {
    /// Loads `.env` (if any) and reads the configuration from the environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let endpoints = Endpoints {
            address: parse_url(&lookup, "ADDRESS_SERVICE_URL", DEFAULT_ADDRESS_SERVICE_URL)?,
            district: parse_url(&lookup, "DISTRICT_SERVICE_URL", DEFAULT_DISTRICT_SERVICE_URL)?,
            suburb: parse_url(&lookup, "SUBURB_SERVICE_URL", DEFAULT_SUBURB_SERVICE_URL)?,
        };

        let connect_timeout = parse_timeout(
            &lookup,
            "UPSTREAM_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS
        )?;
        let request_timeout = parse_timeout(
            &lookup,
            "UPSTREAM_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS
        )?;

        let suburb_strategy = parse_variant(
            &lookup,
            "SUBURB_STRATEGY",
            "lookup, address",
            SuburbStrategy::Lookup
        )?;
        let coordinates_format = parse_variant(
            &lookup,
            "COORDINATES_FORMAT",
            "object, array",
            CoordinatesFormat::Object
        )?;

        Ok(Config {
            bind_address,
            endpoints,
            connect_timeout,
            request_timeout,
            suburb_strategy,
            coordinates_format,
        })
    }
}

fn parse_url<F>(lookup: &F, name: &'static str, default: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name).unwrap_or_else(|| default.to_string());
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { name, source })
}

fn parse_timeout<F>(lookup: &F, name: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(Duration::from_secs(default)),
        Some(value) => match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(ConfigError::InvalidTimeout { name, value }),
        },
    }
}

fn parse_variant<F, T>(
    lookup: &F,
    name: &'static str,
    expected: &'static str,
    default: T
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr<Err = ()>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::UnknownVariant { name, value, expected }),
    }
}
