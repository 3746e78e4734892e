//! Host geolocation.
//!
//! A terminal has no built-in position API, so the capability is supplied by a
//! [`Geolocator`]: an IP lookup service or coordinates fixed on the command
//! line. Running without one behaves like a host lacking geolocation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Coordinates, GEOLOCATION_UNSUPPORTED, LOCATION_UNAVAILABLE};

pub const DEFAULT_GEOLOCATION_URL: &str = "http://ip-api.com/json";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum LocationError {
    #[error("geolocation is not available on this host")]
    Unsupported,
    #[error("position unavailable: {0}")]
    Unavailable(String),
}

impl LocationError {
    /// The one line shown in place of the widget
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::Unsupported => GEOLOCATION_UNSUPPORTED,
            LocationError::Unavailable(_) => LOCATION_UNAVAILABLE,
        }
    }
}

#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, LocationError>;
}

/// Resolve the user's position, treating a missing geolocator as an
/// unsupported host.
pub async fn locate(geolocator: Option<&dyn Geolocator>) -> Result<Coordinates, LocationError> {
    let Some(geolocator) = geolocator else {
        tracing::warn!("no geolocator configured");
        return Err(LocationError::Unsupported);
    };
    match geolocator.locate().await {
        Ok(coords) => {
            tracing::info!(lat = coords.lat, lon = coords.lon, "location resolved");
            Ok(coords)
        }
        Err(err) => {
            tracing::error!(error = %err, "error fetching location");
            Err(err)
        }
    }
}

/// Coordinates supplied up front (`--lat` / `--lon`)
#[derive(Clone, Copy, Debug)]
pub struct FixedGeolocator(pub Coordinates);

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// ip-api.com style lookup: approximate position of the public IP
#[derive(Clone, Debug)]
pub struct IpGeolocator {
    url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    message: Option<String>,
}

impl IpGeolocator {
    pub fn new(url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            url: url.into(),
            http,
        }
    }
}

impl Default for IpGeolocator {
    fn default() -> Self {
        Self::new(DEFAULT_GEOLOCATION_URL)
    }
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Unavailable(format!(
                "lookup returned {status}"
            )));
        }

        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        match (body.status.as_str(), body.lat, body.lon) {
            ("success", Some(lat), Some(lon)) => Ok(Coordinates { lat, lon }),
            _ => Err(LocationError::Unavailable(body.message.unwrap_or_else(|| {
                "lookup did not return a position".to_string()
            }))),
        }
    }
}
