//! Wanderlust hero screen

use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use wanderlust::action::Action;
use wanderlust::api::DEFAULT_WEATHER_URL;
use wanderlust::components::{Component, HeroScreen, HeroScreenProps};
use wanderlust::config::{GeolocationSource, HeroConfig};
use wanderlust::effect::Effect;
use wanderlust::geo::DEFAULT_GEOLOCATION_URL;
use wanderlust::reducer::reducer;
use wanderlust::state::{AppState, Coordinates, LOADING_ANIM_TICK_MS, Route};
use wanderlust::tasks::Services;
use wanderlust::{logging, night};

/// Wanderlust - AI trip planner landing screen
#[derive(Parser, Debug)]
#[command(name = "wanderlust")]
#[command(about = "Trip planner landing screen with a live local weather widget")]
struct Args {
    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OpenWeather base URL
    #[arg(long, default_value = DEFAULT_WEATHER_URL)]
    weather_url: String,

    /// IP geolocation endpoint (ip-api.com compatible)
    #[arg(long, default_value = DEFAULT_GEOLOCATION_URL)]
    geolocation_url: String,

    /// Fixed latitude instead of an IP lookup
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Fixed longitude instead of an IP lookup
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Run as if the host had no geolocation capability
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    no_geolocation: bool,

    /// Write diagnostic logs here (filter with RUST_LOG)
    #[arg(long, env = "WANDERLUST_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

impl Args {
    fn hero_config(&self) -> HeroConfig {
        let geolocation = match (self.no_geolocation, self.lat, self.lon) {
            (true, _, _) => GeolocationSource::Disabled,
            (false, Some(lat), Some(lon)) => GeolocationSource::Fixed(Coordinates { lat, lon }),
            _ => GeolocationSource::IpLookup(self.geolocation_url.clone()),
        };
        HeroConfig {
            api_key: self.api_key.clone(),
            weather_url: self.weather_url.clone(),
            geolocation,
            log_file: self.log_file.clone(),
        }
    }
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum HeroComponentId {
    Screen,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum HeroContext {
    Main,
}

impl EventRoutingState<HeroComponentId, HeroContext> for AppState {
    fn focused(&self) -> Option<HeroComponentId> {
        Some(HeroComponentId::Screen)
    }

    fn modal(&self) -> Option<HeroComponentId> {
        None
    }

    fn binding_context(&self, _id: HeroComponentId) -> HeroContext {
        HeroContext::Main
    }

    fn default_context(&self) -> HeroContext {
        HeroContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = args.hero_config();
    logging::init(config.log_file.as_deref())?;

    let debug = DebugSession::new(args.debug);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    // Night flag is fixed for the lifetime of the screen
    let state = debug
        .load_state_or_else_async(|| async {
            Ok::<AppState, io::Error>(AppState::new(night::is_night_now()))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);
    let services = Services::from_config(&config);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let navigation = Rc::new(Cell::new(None));
    let result = run_app(
        &mut terminal,
        &debug,
        store,
        services,
        Rc::clone(&navigation),
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    // Hand the destination to whoever launched us
    if let Some(route) = navigation.get() {
        println!("{}", route.path());
    }

    Ok(())
}

struct HeroUi {
    screen: HeroScreen,
}

impl HeroUi {
    fn new() -> Self {
        Self { screen: HeroScreen }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<HeroComponentId>,
    ) {
        event_ctx.set_component_area(HeroComponentId::Screen, area);

        let props = HeroScreenProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.screen.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = HeroScreenProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.screen.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    services: Services,
    navigation: Rc<Cell<Option<Route>>>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(HeroUi::new()));
    let mut bus: EventBus<AppState, Action, HeroComponentId, HeroContext> = EventBus::new();
    let keybindings: Keybindings<HeroContext> = Keybindings::new();

    let ui_screen = Rc::clone(&ui);
    bus.register(HeroComponentId::Screen, move |event, state| {
        ui_screen.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::LocationRequest),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                // Spinner only; the weather itself is never polled
                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &services, &navigation),
        )
        .await
}

/// Handle effects by spawning tasks. Tasks are owned by the runtime and end
/// with it; any result that still arrives is dropped by the reducer.
fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    services: &Services,
    navigation: &Cell<Option<Route>>,
) {
    match effect {
        Effect::LocateUser => {
            let services = services.clone();
            ctx.tasks()
                .spawn("location", async move { services.locate().await });
        }
        Effect::FetchWeather { lat, lon } => {
            let services = services.clone();
            ctx.tasks().spawn("weather", async move {
                services.fetch_weather(lat, lon).await
            });
        }
        Effect::Navigate { route } => {
            tracing::info!(route = route.path(), "navigating");
            navigation.set(Some(route));
            ctx.tasks().spawn("navigate", async { Action::Quit });
        }
    }
}
