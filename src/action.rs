//! Actions for the hero screen and its weather widget

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geo::LocationError;
use crate::state::{Coordinates, WeatherSnapshot};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Location category =====
    /// Intent: ask the host for the user's position (dispatched once at start-up)
    LocationRequest,

    /// Result: host resolved coordinates
    LocationDidResolve(Coordinates),

    /// Result: host could not (or cannot) provide a position
    LocationDidError(LocationError),

    // ===== Weather category =====
    /// Result: current conditions loaded
    WeatherDidLoad(WeatherSnapshot),

    /// Result: weather request failed (diagnostic detail, not user-facing)
    WeatherDidError(String),

    // ===== Navigation category =====
    /// Call-to-action: continue to trip creation
    NavCreateTrip,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
