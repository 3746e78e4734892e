use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;

pub const HEADLINE_LEAD: &str = "Discover Your Next Adventure with AI:";
pub const HEADLINE_TAIL: &str = "Personalized Itineraries at Your Fingertips";
pub const TAGLINE: &str = "Your personal trip planner and travel curator, creating custom itineraries tailored to your interests and budget.";
pub const CTA_LABEL: &str = "Get Started, It's Free";

const VIOLET_600: Color = Color::Rgb(124, 58, 237);
const CTA_BG: Color = Color::Rgb(22, 10, 9);

/// Marketing copy and call-to-action. Holds no state.
pub struct HeroCopy;

pub struct HeroCopyProps {
    pub cta_focused: bool,
}

impl Component<Action> for HeroCopy {
    type Props<'a> = HeroCopyProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Headline + tagline
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Button
        ])
        .split(area);

        let copy = Text::from(vec![
            Line::from(Span::styled(
                HEADLINE_LEAD,
                Style::default().fg(VIOLET_600).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                HEADLINE_TAIL,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                TAGLINE,
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )),
        ]);
        frame.render_widget(Paragraph::new(copy).wrap(Wrap { trim: true }), chunks[0]);

        let button_width = (CTA_LABEL.len() as u16 + 6).min(chunks[2].width);
        let [button_area, _] =
            Layout::horizontal([Constraint::Length(button_width), Constraint::Fill(1)])
                .areas(chunks[2]);

        let border = if props.cta_focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let button = Paragraph::new(Line::from(CTA_LABEL.white().bold()))
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border)
                    .style(Style::default().bg(CTA_BG)),
            );
        frame.render_widget(button, button_area);
    }
}
