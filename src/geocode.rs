//! Reverse geocoding
//!
//! Best-effort lookup of a place description for a coordinate. Every failure
//! (transport, HTTP status, body) is logged and collapses to `None`; nothing
//! here is allowed to abort an analysis.

use crate::types::Coordinate;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Public Nominatim reverse endpoint
pub const NOMINATIM_REVERSE_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Browser-like client identification
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Place description returned by the geocoding service
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeocodeResult {
    raw: Value,
}

impl GeocodeResult {
    /// Wrap a response body. Returns `None` for non-objects and for
    /// service-level errors such as `{"error": "Unable to geocode"}`.
    pub fn from_json(raw: Value) -> Option<Self> {
        let object = raw.as_object()?;
        if object.contains_key("error") {
            return None;
        }
        Some(Self { raw })
    }

    pub fn display_name(&self) -> Option<&str> {
        self.raw["display_name"].as_str()
    }

    /// Address components in response order, string values only
    pub fn address(&self) -> Vec<(&str, &str)> {
        match self.raw["address"].as_object() {
            Some(address) => address
                .iter()
                .filter_map(|(key, value)| value.as_str().map(|v| (key.as_str(), v)))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl fmt::Display for GeocodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// A service able to turn a coordinate into a place description
pub trait ReverseGeocoder {
    fn reverse(&self, coordinate: Coordinate) -> Option<GeocodeResult>;
}

/// Geocoder that never looks anything up
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl ReverseGeocoder for Offline {
    fn reverse(&self, _coordinate: Coordinate) -> Option<GeocodeResult> {
        None
    }
}

/// Options for the Nominatim client
#[derive(Debug, Clone)]
pub struct GeocodeOptions {
    pub endpoint: String,
    pub user_agent: String,
    /// `None` keeps the HTTP client's default timeout
    pub timeout: Option<Duration>,
}

impl Default for GeocodeOptions {
    fn default() -> Self {
        Self {
            endpoint: NOMINATIM_REVERSE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Blocking client for a Nominatim-compatible reverse endpoint
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    options: GeocodeOptions,
}

impl NominatimClient {
    pub fn new(options: GeocodeOptions) -> crate::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&options.user_agent)?);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            options,
        })
    }

    fn request(&self, coordinate: Coordinate) -> crate::Result<Value> {
        let lat = coordinate.latitude.to_string();
        let lon = coordinate.longitude.to_string();
        let params = [
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("format", "json"),
        ];
        let url = reqwest::Url::parse_with_params(&self.options.endpoint, &params)?;
        debug!("Reverse geocoding via {}", url);

        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.json::<Value>()?)
    }
}

impl ReverseGeocoder for NominatimClient {
    fn reverse(&self, coordinate: Coordinate) -> Option<GeocodeResult> {
        match self.request(coordinate) {
            Ok(body) => {
                let result = GeocodeResult::from_json(body);
                if result.is_none() {
                    warn!("Geocoding service returned no place for {}", coordinate);
                }
                result
            }
            Err(e) => {
                warn!("Reverse geocoding failed: {:#}", e);
                None
            }
        }
    }
}
