pub mod hero;
pub mod hero_copy;
pub mod weather_widget;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use hero::{HeroScreen, HeroScreenProps};
pub use hero_copy::{HeroCopy, HeroCopyProps};
pub use weather_widget::{WeatherWidget, WeatherWidgetProps, WidgetTheme};
