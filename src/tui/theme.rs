use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Ticked cell marker
    pub done: Color,
    /// Unticked cell marker
    pub missed: Color,
    /// Today's column header
    pub today: Color,
    /// Selected cell background
    pub selection: Color,
    /// Streak count column
    pub streak: Color,
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0E, 0x0B, 0x16),
            text: Color::Rgb(0xB8, 0xB4, 0xD0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            done: Color::Rgb(0x7F, 0xB0, 0x69),
            missed: Color::Rgb(0x5A, 0x55, 0x80),
            today: Color::Rgb(0xFF, 0xD7, 0x00),
            selection: Color::Rgb(0xFB, 0x41, 0x96),
            streak: Color::Rgb(0x44, 0xDD, 0xFF),
            dim: Color::Rgb(0x5A, 0x55, 0x80),
        }
    }
}

/// Parse a hex color string like "#7FB069" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "done" => theme.done = color,
                    "missed" => theme.missed = color,
                    "today" => theme.today = color,
                    "selection" => theme.selection = color,
                    "streak" => theme.streak = color,
                    "dim" => theme.dim = color,
                    _ => {}
                }
            }
        }

        theme
    }
}
