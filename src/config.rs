//! Runtime configuration for the hero screen

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{DEFAULT_WEATHER_URL, WeatherClient};
use crate::geo::{DEFAULT_GEOLOCATION_URL, FixedGeolocator, Geolocator, IpGeolocator};
use crate::state::Coordinates;

/// Where the user's position comes from
#[derive(Clone, Debug, PartialEq)]
pub enum GeolocationSource {
    /// Host offers no geolocation
    Disabled,
    /// Coordinates given on the command line
    Fixed(Coordinates),
    /// IP lookup against the given endpoint
    IpLookup(String),
}

impl Default for GeolocationSource {
    fn default() -> Self {
        GeolocationSource::IpLookup(DEFAULT_GEOLOCATION_URL.to_string())
    }
}

impl GeolocationSource {
    pub fn geolocator(&self) -> Option<Arc<dyn Geolocator>> {
        match self {
            GeolocationSource::Disabled => None,
            GeolocationSource::Fixed(coords) => Some(Arc::new(FixedGeolocator(*coords))),
            GeolocationSource::IpLookup(url) => Some(Arc::new(IpGeolocator::new(url.clone()))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HeroConfig {
    pub api_key: Option<String>,
    pub weather_url: String,
    pub geolocation: GeolocationSource,
    pub log_file: Option<PathBuf>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            geolocation: GeolocationSource::default(),
            log_file: None,
        }
    }
}

impl HeroConfig {
    pub fn weather_client(&self) -> WeatherClient {
        WeatherClient::new_with_base_url(self.api_key.clone(), &self.weather_url)
    }
}
