use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::weather_widget::WIDGET_HEIGHT;
use super::{Component, HeroCopy, HeroCopyProps, WeatherWidget, WeatherWidgetProps};
use crate::action::Action;
use crate::state::AppState;

/// Below this width the copy and the widget are stacked.
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 80;

/// Props for HeroScreen - read-only view of state
pub struct HeroScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The landing screen: marketing copy on the left, weather on the right
#[derive(Default)]
pub struct HeroScreen;

impl Component<Action> for HeroScreen {
    type Props<'a> = HeroScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Char('g') => Some(Action::NavCreateTrip),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: HeroScreenProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let content = chunks[0].inner(Margin::new(2, 1));
        let (copy_area, widget_area) = if content.width >= SIDE_BY_SIDE_MIN_WIDTH {
            let [copy, side] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .spacing(2)
                    .areas(content);
            let [widget, _] =
                Layout::vertical([Constraint::Length(WIDGET_HEIGHT), Constraint::Fill(1)])
                    .areas(side);
            (copy, widget)
        } else {
            let [copy, widget] =
                Layout::vertical([Constraint::Min(6), Constraint::Length(WIDGET_HEIGHT)])
                    .spacing(1)
                    .areas(content);
            (copy, widget)
        };

        let mut copy = HeroCopy;
        copy.render(
            frame,
            copy_area,
            HeroCopyProps {
                cta_focused: props.is_focused,
            },
        );

        let mut widget = WeatherWidget;
        widget.render(
            frame,
            widget_area,
            WeatherWidgetProps {
                widget: &props.state.widget,
                is_night: props.state.is_night,
                tick_count: props.state.tick_count,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "get started"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
