//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shown when the host reports no geolocation capability at all.
pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser";
/// Shown when the host has geolocation but could not resolve a position.
pub const LOCATION_UNAVAILABLE: &str = "Unable to fetch your location";
/// Shown for any weather request failure (status, transport or body).
pub const WEATHER_UNAVAILABLE: &str = "Unable to fetch weather data";

/// Spinner frame interval while the widget is loading.
pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// Geographic position in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions from OpenWeather, imperial units
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub location: String,
    /// Degrees Fahrenheit
    pub temperature: f64,
    pub condition_code: u16, // OpenWeather condition id
    pub description: String,
    /// Percent
    pub humidity: u8,
    /// Miles per hour
    pub wind_speed: f64,
}

/// Nearest integer, halves toward +∞ (-0.5 → 0, 2.5 → 3).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl WeatherSnapshot {
    pub fn rounded_temperature(&self) -> i64 {
        round_half_up(self.temperature)
    }

    pub fn rounded_wind_speed(&self) -> i64 {
        round_half_up(self.wind_speed)
    }
}

/// Widget lifecycle: Loading → Loaded | Error. Terminal once it leaves Loading.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum WidgetState {
    #[default]
    Loading,
    Error(String),
    Loaded(WeatherSnapshot),
}

impl WidgetState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, WidgetState::Loaded(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, WidgetState::Error(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WidgetState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            WidgetState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

/// Destinations reachable from the hero screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Route {
    CreateTrip,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::CreateTrip => "/create-trip",
        }
    }
}

/// Application state - everything the hero screen needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Core data (visible in debug) ---
    /// Weather widget lifecycle
    #[debug(section = "Weather", label = "Widget", debug_fmt)]
    pub widget: WidgetState,

    /// Night theme, fixed at start-up
    #[debug(section = "Weather", label = "Night")]
    pub is_night: bool,

    /// Set once the host has been asked for a position
    #[debug(section = "Weather", label = "Located")]
    pub location_requested: bool,

    /// Set once the single weather request has been issued
    #[debug(section = "Weather", label = "Requested")]
    pub weather_requested: bool,

    /// Cleared when the screen is torn down; late results are dropped
    #[debug(section = "Screen", label = "Mounted")]
    pub mounted: bool,

    /// Where the call-to-action sent the user, if anywhere
    #[debug(section = "Screen", label = "Route", debug_fmt)]
    pub route: Option<Route>,

    // --- Animation internals (skipped) ---
    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    /// Fresh state as the screen mounts
    pub fn new(is_night: bool) -> Self {
        Self {
            widget: WidgetState::Loading,
            is_night,
            location_requested: false,
            weather_requested: false,
            mounted: true,
            route: None,
            tick_count: 0,
        }
    }

    /// Fresh state with the night flag derived from a wall-clock hour
    pub fn at_hour(hour: u32) -> Self {
        Self::new(crate::night::is_night_hour(hour))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_is_nearest_integer() {
        let snapshot = WeatherSnapshot {
            temperature: 71.5,
            wind_speed: 4.49,
            ..Default::default()
        };
        assert_eq!(snapshot.rounded_temperature(), 72);
        assert_eq!(snapshot.rounded_wind_speed(), 4);

        let freezing = WeatherSnapshot {
            temperature: -3.6,
            ..Default::default()
        };
        assert_eq!(freezing.rounded_temperature(), -4);
    }

    #[test]
    fn test_rounding_halves_go_up() {
        let at = |temperature: f64| WeatherSnapshot {
            temperature,
            ..Default::default()
        };
        assert_eq!(at(-0.5).rounded_temperature(), 0);
        assert_eq!(at(-3.5).rounded_temperature(), -3);
        assert_eq!(at(2.5).rounded_temperature(), 3);

        let gust = WeatherSnapshot {
            wind_speed: 6.5,
            ..Default::default()
        };
        assert_eq!(gust.rounded_wind_speed(), 7);
    }

    #[test]
    fn test_new_state_is_loading_and_mounted() {
        let state = AppState::new(true);
        assert!(state.widget.is_loading());
        assert!(state.is_night);
        assert!(state.mounted);
        assert!(!state.location_requested);
        assert!(!state.weather_requested);
        assert_eq!(state.route, None);
    }

    #[test]
    fn test_at_hour_derives_night() {
        assert!(AppState::at_hour(22).is_night);
        assert!(!AppState::at_hour(12).is_night);
    }

    #[test]
    fn test_widget_state_accessors() {
        let error = WidgetState::Error(LOCATION_UNAVAILABLE.into());
        assert!(error.is_error());
        assert_eq!(error.error(), Some(LOCATION_UNAVAILABLE));
        assert_eq!(error.snapshot(), None);

        let loaded = WidgetState::Loaded(WeatherSnapshot::default());
        assert!(loaded.is_loaded());
        assert_eq!(loaded.error(), None);
    }

    #[test]
    fn test_route_path() {
        assert_eq!(Route::CreateTrip.path(), "/create-trip");
    }
}
