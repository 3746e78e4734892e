use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::icons::{SPRITE_HEIGHT, WeatherIcon, YELLOW_200};
use crate::state::{WeatherSnapshot, WidgetState};

pub const FETCHING_PLACEHOLDER: &str = "Fetching weather...";
pub const STAR_MARKS: &str = "\u{2726} \u{22c6} \u{00b7}";

/// Rows the widget wants when it has room for the full sprite.
pub const WIDGET_HEIGHT: u16 = SPRITE_HEIGHT + 4;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const ICON_COLUMN: u16 = 18;

/// Background and border colors for the widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetTheme {
    pub bg: Color,
    pub accent: Color,
}

impl WidgetTheme {
    pub fn for_night(is_night: bool) -> Self {
        if is_night {
            // indigo-900 into purple-900
            Self {
                bg: Color::Rgb(49, 46, 129),
                accent: Color::Rgb(88, 28, 135),
            }
        } else {
            // blue-400 into purple-500
            Self {
                bg: Color::Rgb(96, 165, 250),
                accent: Color::Rgb(168, 85, 247),
            }
        }
    }
}

pub struct WeatherWidget;

pub struct WeatherWidgetProps<'a> {
    pub widget: &'a WidgetState,
    pub is_night: bool,
    pub tick_count: u32,
}

impl Component<Action> for WeatherWidget {
    type Props<'a> = WeatherWidgetProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = WidgetTheme::for_night(props.is_night);
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg).fg(Color::White));

        match props.widget {
            WidgetState::Loaded(snapshot) => {
                if props.is_night {
                    block = block.title_top(
                        Line::from(Span::styled(STAR_MARKS, Style::default().fg(YELLOW_200)))
                            .right_aligned(),
                    );
                }
                let inner = block.inner(area);
                frame.render_widget(block, area);
                render_loaded(frame, inner, snapshot, props.is_night);
            }
            WidgetState::Error(message) => {
                let inner = block.inner(area);
                frame.render_widget(block, area);
                render_status(frame, inner, message.clone());
            }
            WidgetState::Loading => {
                let inner = block.inner(area);
                frame.render_widget(block, area);
                let frame_idx = props.tick_count as usize % SPINNER.len();
                render_status(
                    frame,
                    inner,
                    format!("{} {FETCHING_PLACEHOLDER}", SPINNER[frame_idx]),
                );
            }
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, message: String) {
    let [line_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(message)).alignment(Alignment::Center),
        line_area,
    );
}

fn render_loaded(frame: &mut Frame, area: Rect, weather: &WeatherSnapshot, is_night: bool) {
    let icon = WeatherIcon::select(is_night, weather.condition_code);
    let show_sprite = area.height > SPRITE_HEIGHT && area.width >= ICON_COLUMN * 2;

    let [top, stats] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    let [left, right] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(ICON_COLUMN)]).areas(top);

    // Location and temperature
    let summary = Text::from(vec![
        Line::from(Span::styled(
            weather.location.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{}°F", weather.rounded_temperature()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(Paragraph::new(summary), left.inner(Margin::new(1, 0)));

    // Icon and description
    let [icon_area, desc_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(right);
    if show_sprite {
        frame.render_widget(
            Paragraph::new(icon.sprite()).alignment(Alignment::Center),
            icon_area,
        );
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                icon.emoji(),
                Style::default().fg(icon.color()),
            )))
            .alignment(Alignment::Center),
            icon_area,
        );
    }
    frame.render_widget(
        Paragraph::new(Line::from(capitalize(&weather.description))).alignment(Alignment::Center),
        desc_area,
    );

    // Humidity and wind
    let [humidity_area, wind_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(stats);
    frame.render_widget(
        Paragraph::new(format!(" Humidity {}%", weather.humidity)),
        humidity_area,
    );
    frame.render_widget(
        Paragraph::new(format!("Wind {} mph ", weather.rounded_wind_speed()))
            .alignment(Alignment::Right),
        wind_area,
    );
}

/// Upper-case the first letter of each word ("light rain" → "Light Rain").
fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LOCATION_UNAVAILABLE, WEATHER_UNAVAILABLE};
    use tui_dispatch::testing::*;

    fn lisbon() -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Lisbon".into(),
            temperature: 68.5,
            condition_code: 800,
            description: "clear sky".into(),
            humidity: 55,
            wind_speed: 9.4,
        }
    }

    fn render_widget(widget: &WidgetState, is_night: bool) -> String {
        let mut render = RenderHarness::new(50, WIDGET_HEIGHT);
        let mut component = WeatherWidget;
        render.render_to_string_plain(|frame| {
            let props = WeatherWidgetProps {
                widget,
                is_night,
                tick_count: 0,
            };
            component.render(frame, frame.area(), props);
        })
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("light rain"), "Light Rain");
        assert_eq!(capitalize("overcast clouds"), "Overcast Clouds");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_theme_switches_with_night() {
        assert_ne!(WidgetTheme::for_night(true), WidgetTheme::for_night(false));
    }

    #[test]
    fn test_render_loading_placeholder() {
        let output = render_widget(&WidgetState::Loading, false);
        assert!(output.contains(FETCHING_PLACEHOLDER));
    }

    #[test]
    fn test_render_error_line_only() {
        let output = render_widget(&WidgetState::Error(LOCATION_UNAVAILABLE.into()), false);
        assert!(output.contains(LOCATION_UNAVAILABLE));
        assert!(!output.contains(FETCHING_PLACEHOLDER));

        let output = render_widget(&WidgetState::Error(WEATHER_UNAVAILABLE.into()), true);
        assert!(output.contains(WEATHER_UNAVAILABLE));
    }

    #[test]
    fn test_render_loaded_rounds_values() {
        let output = render_widget(&WidgetState::Loaded(lisbon()), false);
        assert!(output.contains("Lisbon"));
        assert!(output.contains("69°F"));
        assert!(output.contains("Clear Sky"));
        assert!(output.contains("55%"));
        assert!(output.contains("9 mph"));
        assert!(!output.contains("\u{2726}"));
    }

    #[test]
    fn test_render_loaded_at_night_shows_stars() {
        let output = render_widget(&WidgetState::Loaded(lisbon()), true);
        assert!(output.contains("\u{2726}"));
        assert!(output.contains("69°F"));
    }

    #[test]
    fn test_render_small_area_uses_emoji() {
        let mut render = RenderHarness::new(40, 5);
        let mut component = WeatherWidget;
        let widget = WidgetState::Loaded(lisbon());
        let output = render.render_to_string_plain(|frame| {
            let props = WeatherWidgetProps {
                widget: &widget,
                is_night: false,
                tick_count: 0,
            };
            component.render(frame, frame.area(), props);
        });
        assert!(output.contains("Lisbon"));
        assert!(output.contains("55%"));
    }
}
