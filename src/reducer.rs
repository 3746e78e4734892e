//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Route, WEATHER_UNAVAILABLE, WidgetState};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    // Async results that outlive the screen must not touch it.
    if !state.mounted && is_async_result(&action) {
        tracing::debug!(?action, "dropping result delivered after teardown");
        return DispatchResult::unchanged();
    }

    match action {
        // ===== Location actions =====
        Action::LocationRequest => {
            if state.location_requested || !state.mounted {
                return DispatchResult::unchanged();
            }
            state.location_requested = true;
            DispatchResult::changed_with(Effect::LocateUser)
        }

        Action::LocationDidResolve(coords) => {
            if state.weather_requested || !state.widget.is_loading() {
                return DispatchResult::unchanged();
            }
            state.weather_requested = true;
            DispatchResult::changed_with(Effect::FetchWeather {
                lat: coords.lat,
                lon: coords.lon,
            })
        }

        Action::LocationDidError(err) => {
            if !state.widget.is_loading() {
                return DispatchResult::unchanged();
            }
            state.widget = WidgetState::Error(err.user_message().to_string());
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad(snapshot) => {
            state.widget = WidgetState::Loaded(snapshot);
            DispatchResult::changed()
        }

        Action::WeatherDidError(_) => {
            state.widget = WidgetState::Error(WEATHER_UNAVAILABLE.to_string());
            DispatchResult::changed()
        }

        // ===== Navigation actions =====
        Action::NavCreateTrip => {
            if !state.mounted {
                return DispatchResult::unchanged();
            }
            let route = Route::CreateTrip;
            state.route = Some(route);
            state.mounted = false;
            DispatchResult::changed_with(Effect::Navigate { route })
        }

        // ===== Global actions =====
        Action::Tick => {
            if state.widget.is_loading() && state.mounted {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => {
            state.mounted = false;
            DispatchResult::unchanged()
        }
    }
}

fn is_async_result(action: &Action) -> bool {
    matches!(
        action,
        Action::LocationDidResolve(_)
            | Action::LocationDidError(_)
            | Action::WeatherDidLoad(_)
            | Action::WeatherDidError(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LocationError;
    use crate::state::{Coordinates, GEOLOCATION_UNSUPPORTED, LOCATION_UNAVAILABLE, WeatherSnapshot};

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Lisbon".into(),
            temperature: 68.4,
            condition_code: 800,
            description: "clear sky".into(),
            humidity: 55,
            wind_speed: 9.7,
        }
    }

    #[test]
    fn test_location_request_emits_locate_once() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::LocationRequest);
        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::LocateUser]);
        assert!(state.location_requested);

        let again = reducer(&mut state, Action::LocationRequest);
        assert!(!again.changed);
        assert!(again.effects.is_empty());
    }

    #[test]
    fn test_resolve_emits_single_fetch() {
        let mut state = AppState::default();
        let coords = Coordinates {
            lat: 38.72,
            lon: -9.14,
        };

        let result = reducer(&mut state, Action::LocationDidResolve(coords));
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                lat: 38.72,
                lon: -9.14
            }]
        );
        assert!(state.weather_requested);

        let duplicate = reducer(&mut state, Action::LocationDidResolve(coords));
        assert!(!duplicate.changed);
        assert!(duplicate.effects.is_empty());
    }

    #[test]
    fn test_location_errors_map_to_messages() {
        let mut state = AppState::default();
        let result = reducer(
            &mut state,
            Action::LocationDidError(LocationError::Unavailable("denied".into())),
        );
        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.widget.error(), Some(LOCATION_UNAVAILABLE));

        let mut state = AppState::default();
        reducer(&mut state, Action::LocationDidError(LocationError::Unsupported));
        assert_eq!(state.widget.error(), Some(GEOLOCATION_UNSUPPORTED));
    }

    #[test]
    fn test_weather_error_hides_detail() {
        let mut state = AppState::default();
        reducer(
            &mut state,
            Action::WeatherDidError("status 401 Unauthorized".into()),
        );
        assert_eq!(state.widget.error(), Some(WEATHER_UNAVAILABLE));
    }

    #[test]
    fn test_weather_load_replaces_widget() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::WeatherDidLoad(snapshot()));
        assert!(result.changed);
        assert_eq!(state.widget.snapshot(), Some(&snapshot()));
    }

    #[test]
    fn test_results_after_teardown_are_dropped() {
        let mut state = AppState::default();
        reducer(&mut state, Action::Quit);
        assert!(!state.mounted);

        let result = reducer(&mut state, Action::WeatherDidLoad(snapshot()));
        assert!(!result.changed);
        assert!(state.widget.is_loading());

        let result = reducer(
            &mut state,
            Action::LocationDidResolve(Coordinates::default()),
        );
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_nav_records_route_and_unmounts() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::NavCreateTrip);
        assert!(result.changed);
        assert_eq!(
            result.effects,
            vec![Effect::Navigate {
                route: Route::CreateTrip
            }]
        );
        assert_eq!(state.route, Some(Route::CreateTrip));
        assert!(!state.mounted);

        let again = reducer(&mut state, Action::NavCreateTrip);
        assert!(again.effects.is_empty());
    }

    #[test]
    fn test_tick_only_animates_while_loading() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
        assert_eq!(state.tick_count, 1);

        state.widget = WidgetState::Loaded(snapshot());
        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn test_tick_leaves_night_flag_alone() {
        let mut state = AppState::new(true);
        for _ in 0..10 {
            reducer(&mut state, Action::Tick);
        }
        assert!(state.is_night);
    }
}
