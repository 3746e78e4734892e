//! Condition icons for the weather widget
//!
//! Sprites are loaded from text files at compile time using `include_str!`.
//! Multi-layer sprites (cloud with rain, snow or lightning) composite layers of
//! different colors, with spaces treated as transparent.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

// ============================================================================
// Sprite data - embedded at compile time
// File naming: {size}_{color}.txt
// ============================================================================

mod sprite_data {
    pub mod clear {
        pub const SMALL_YELLOW: &str = include_str!("../sprites/clear/small_yellow.txt");
    }
    pub mod cloud {
        pub const SMALL_DARKGRAY: &str = include_str!("../sprites/cloud/small_darkgray.txt");
        pub const SMALL_LIGHTGRAY: &str = include_str!("../sprites/cloud/small_lightgray.txt");
    }
    pub mod rain {
        pub const SMALL_GRAY: &str = include_str!("../sprites/rain/small_gray.txt");
        pub const SMALL_BLUE: &str = include_str!("../sprites/rain/small_blue.txt");
    }
    pub mod snow {
        pub const SMALL_GRAY: &str = include_str!("../sprites/snow/small_gray.txt");
        pub const SMALL_WHITE: &str = include_str!("../sprites/snow/small_white.txt");
    }
    pub mod thunderstorm {
        pub const SMALL_GRAY: &str = include_str!("../sprites/thunderstorm/small_gray.txt");
        pub const SMALL_YELLOW: &str = include_str!("../sprites/thunderstorm/small_yellow.txt");
    }
    pub mod atmosphere {
        pub const SMALL_GRAY: &str = include_str!("../sprites/atmosphere/small_gray.txt");
    }
    pub mod night {
        pub const SMALL_YELLOW: &str = include_str!("../sprites/night/small_yellow.txt");
    }
}

/// Rows reserved for a sprite; shorter sprites are padded.
pub const SPRITE_HEIGHT: u16 = 5;

// Palette
const BLUE_500: Color = Color::Rgb(59, 130, 246);
const BLUE_400: Color = Color::Rgb(96, 165, 250);
const BLUE_200: Color = Color::Rgb(191, 219, 254);
const GRAY_400: Color = Color::Rgb(156, 163, 175);
const YELLOW_400: Color = Color::Rgb(250, 204, 21);
pub const YELLOW_200: Color = Color::Rgb(254, 240, 138);
const CLOUD_BACK: Color = Color::Rgb(120, 120, 140);
const CLOUD_FRONT: Color = Color::Rgb(200, 200, 210);

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite multiple layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_lines = layer_lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flat_map(|lines| lines.iter())
        .map(|line| line.len())
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);
    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);
        for col_idx in 0..max_width {
            // Last layer is the foreground
            let cell = layers
                .iter()
                .zip(&layer_lines)
                .rev()
                .find_map(|(layer, lines)| {
                    lines
                        .get(line_idx)
                        .and_then(|line| line.get(col_idx))
                        .filter(|ch| **ch != ' ')
                        .map(|ch| (*ch, layer.color))
                });
            let (ch, color) = cell.unwrap_or((' ', Color::Reset));
            spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));
        }
        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

// ============================================================================
// Icon selection
// ============================================================================

/// Icon shown next to the condition description
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherIcon {
    Night,
    Thunderstorm,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Cloud,
}

impl WeatherIcon {
    /// Pick the icon for an OpenWeather condition id.
    ///
    /// At night the moon is shown whatever the condition. By day the id ranges
    /// are checked in ascending order: 2xx storm, 3xx-5xx drizzle and rain,
    /// 6xx snow, 7xx atmosphere, 800 clear, anything else cloud.
    pub fn select(is_night: bool, code: u16) -> Self {
        if is_night {
            return WeatherIcon::Night;
        }
        match code {
            200..=299 => WeatherIcon::Thunderstorm,
            300..=599 => WeatherIcon::Rain,
            600..=699 => WeatherIcon::Snow,
            700..=799 => WeatherIcon::Atmosphere,
            800 => WeatherIcon::Clear,
            _ => WeatherIcon::Cloud,
        }
    }

    pub fn color(self) -> Color {
        match self {
            WeatherIcon::Night => YELLOW_200,
            WeatherIcon::Thunderstorm => BLUE_500,
            WeatherIcon::Rain => BLUE_400,
            WeatherIcon::Snow => BLUE_200,
            WeatherIcon::Atmosphere | WeatherIcon::Cloud => GRAY_400,
            WeatherIcon::Clear => YELLOW_400,
        }
    }

    /// Emoji representation for when sprites don't fit
    pub fn emoji(self) -> &'static str {
        match self {
            WeatherIcon::Night => "\u{1f319}",
            WeatherIcon::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherIcon::Rain => "\u{1f327}\u{fe0f}",
            WeatherIcon::Snow => "\u{2744}\u{fe0f}",
            WeatherIcon::Atmosphere => "\u{1f32c}\u{fe0f}",
            WeatherIcon::Clear => "\u{2600}\u{fe0f}",
            WeatherIcon::Cloud => "\u{2601}\u{fe0f}",
        }
    }

    /// Colored text art for the icon
    pub fn sprite(self) -> Text<'static> {
        let layers = match self {
            WeatherIcon::Night => vec![SpriteLayer {
                content: sprite_data::night::SMALL_YELLOW,
                color: self.color(),
            }],
            WeatherIcon::Clear => vec![SpriteLayer {
                content: sprite_data::clear::SMALL_YELLOW,
                color: self.color(),
            }],
            WeatherIcon::Atmosphere => vec![SpriteLayer {
                content: sprite_data::atmosphere::SMALL_GRAY,
                color: self.color(),
            }],
            WeatherIcon::Cloud => vec![
                SpriteLayer {
                    content: sprite_data::cloud::SMALL_DARKGRAY,
                    color: CLOUD_BACK,
                },
                SpriteLayer {
                    content: sprite_data::cloud::SMALL_LIGHTGRAY,
                    color: CLOUD_FRONT,
                },
            ],
            WeatherIcon::Rain => vec![
                SpriteLayer {
                    content: sprite_data::rain::SMALL_GRAY,
                    color: CLOUD_FRONT,
                },
                SpriteLayer {
                    content: sprite_data::rain::SMALL_BLUE,
                    color: self.color(),
                },
            ],
            WeatherIcon::Snow => vec![
                SpriteLayer {
                    content: sprite_data::snow::SMALL_GRAY,
                    color: CLOUD_FRONT,
                },
                SpriteLayer {
                    content: sprite_data::snow::SMALL_WHITE,
                    color: self.color(),
                },
            ],
            WeatherIcon::Thunderstorm => vec![
                SpriteLayer {
                    content: sprite_data::thunderstorm::SMALL_GRAY,
                    color: CLOUD_BACK,
                },
                SpriteLayer {
                    content: sprite_data::thunderstorm::SMALL_YELLOW,
                    color: YELLOW_400,
                },
            ],
        };
        composite_layers(&layers)
    }
}
