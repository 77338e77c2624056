//! Colors for the light and dark themes

use crate::state::ThemeMode;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub background: Color,
    pub status_bar: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                accent: Color::Cyan,
                text: Color::White,
                muted: Color::DarkGray,
                background: Color::Reset,
                status_bar: Color::DarkGray,
                success: Color::Green,
                error: Color::Red,
            },
            ThemeMode::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                muted: Color::Gray,
                background: Color::White,
                status_bar: Color::Gray,
                success: Color::Green,
                error: Color::Red,
            },
        }
    }
}
