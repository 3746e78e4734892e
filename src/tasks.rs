//! Async work behind each effect, resolved to the action it reports back.

use std::sync::Arc;

use crate::action::Action;
use crate::api::WeatherClient;
use crate::config::HeroConfig;
use crate::geo::{self, Geolocator};

/// Clients shared by every task spawned from the effect handler
#[derive(Clone)]
pub struct Services {
    pub weather: WeatherClient,
    pub geolocator: Option<Arc<dyn Geolocator>>,
}

impl Services {
    pub fn from_config(config: &HeroConfig) -> Self {
        Self {
            weather: config.weather_client(),
            geolocator: config.geolocation.geolocator(),
        }
    }

    pub async fn locate(&self) -> Action {
        match geo::locate(self.geolocator.as_deref()).await {
            Ok(coords) => Action::LocationDidResolve(coords),
            Err(err) => Action::LocationDidError(err),
        }
    }

    pub async fn fetch_weather(&self, lat: f64, lon: f64) -> Action {
        match self.weather.fetch_current(lat, lon).await {
            Ok(snapshot) => Action::WeatherDidLoad(snapshot),
            Err(err) => {
                tracing::error!(error = %err, "error fetching weather data");
                Action::WeatherDidError(err.to_string())
            }
        }
    }
}
