//! Effects - side effects declared by the reducer

use crate::state::Route;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Resolve the user's position through the configured geolocator
    LocateUser,
    /// Fetch current conditions for the given coordinates
    FetchWeather { lat: f64, lon: f64 },
    /// Leave the hero screen for another route
    Navigate { route: Route },
}
