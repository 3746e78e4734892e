//! End-to-end task tests against mock HTTP services.
//!
//! Each test runs the real task code, feeds the resulting action through the
//! reducer and checks what the widget would show.

use tui_dispatch::EffectStore;
use wanderlust::{
    action::Action,
    config::{GeolocationSource, HeroConfig},
    effect::Effect,
    reducer::reducer,
    state::{AppState, Coordinates, GEOLOCATION_UNSUPPORTED, LOCATION_UNAVAILABLE, WEATHER_UNAVAILABLE},
    tasks::Services,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(weather_url: &str, geolocation: GeolocationSource) -> HeroConfig {
    HeroConfig {
        api_key: Some("test_key".into()),
        weather_url: weather_url.to_string(),
        geolocation,
        log_file: None,
    }
}

/// Run the mount sequence the way the effect handler would.
async fn mount(services: &Services) -> AppState {
    let mut store = EffectStore::new(AppState::at_hour(12), reducer);
    let mut pending = store.dispatch(Action::LocationRequest).effects;

    while let Some(effect) = pending.pop() {
        let action = match effect {
            Effect::LocateUser => services.locate().await,
            Effect::FetchWeather { lat, lon } => services.fetch_weather(lat, lon).await,
            Effect::Navigate { .. } => continue,
        };
        pending.extend(store.dispatch(action).effects);
    }

    store.state().clone()
}

#[tokio::test]
async fn test_mount_loads_weather() {
    let weather = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("units", "imperial"))
        .and(query_param("appid", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Reykjavik",
            "main": {"temp": 38.3, "humidity": 93},
            "weather": [{"id": 601, "description": "snow"}],
            "wind": {"speed": 21.49}
        })))
        .expect(1)
        .mount(&weather)
        .await;

    let source = GeolocationSource::Fixed(Coordinates {
        lat: 64.14,
        lon: -21.94,
    });
    let services = Services::from_config(&config(&weather.uri(), source));
    let state = mount(&services).await;

    let snapshot = state.widget.snapshot().expect("weather loaded");
    assert_eq!(snapshot.location, "Reykjavik");
    assert_eq!(snapshot.rounded_temperature(), 38);
    assert_eq!(snapshot.humidity, 93);
    assert_eq!(snapshot.rounded_wind_speed(), 21);
}

#[tokio::test]
async fn test_mount_location_failure_skips_weather() {
    let weather = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&weather)
        .await;

    let geo = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail",
            "message": "private range"
        })))
        .mount(&geo)
        .await;

    let source = GeolocationSource::IpLookup(geo.uri());
    let services = Services::from_config(&config(&weather.uri(), source));
    let state = mount(&services).await;

    assert_eq!(state.widget.error(), Some(LOCATION_UNAVAILABLE));
}

#[tokio::test]
async fn test_mount_without_geolocation() {
    let weather = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&weather)
        .await;

    let services = Services::from_config(&config(&weather.uri(), GeolocationSource::Disabled));
    let state = mount(&services).await;

    assert_eq!(state.widget.error(), Some(GEOLOCATION_UNSUPPORTED));
}

#[tokio::test]
async fn test_mount_weather_server_error() {
    let weather = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&weather)
        .await;

    let source = GeolocationSource::Fixed(Coordinates { lat: 0.0, lon: 0.0 });
    let services = Services::from_config(&config(&weather.uri(), source));
    let state = mount(&services).await;

    assert_eq!(state.widget.error(), Some(WEATHER_UNAVAILABLE));
}
