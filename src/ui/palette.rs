//! Threshold color classification for the three colored readings, evaluated
//! on every render.

use ratatui::style::Color;

/// The hues the dashboard draws with, mapped to terminal colors in exactly
/// one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    White,
    Magenta,
    Blue,
}

impl Hue {
    pub fn color(self) -> Color {
        match self {
            Hue::Red => Color::Red,
            // the base terminal palette has no orange
            Hue::Orange => Color::Magenta,
            Hue::Yellow => Color::Yellow,
            Hue::Green => Color::Green,
            Hue::Cyan => Color::Cyan,
            Hue::White => Color::White,
            Hue::Magenta => Color::Magenta,
            Hue::Blue => Color::Blue,
        }
    }
}

/// Hue for the bracket glyphs and on-screen error lines.
pub const HIGHLIGHT: Hue = Hue::Red;

/// Six bands covering the whole line; 90°F belongs to the orange band.
pub fn temperature_hue(fahrenheit: f64) -> Hue {
    if fahrenheit > 90.0 {
        Hue::Red
    } else if fahrenheit >= 80.0 {
        Hue::Orange
    } else if fahrenheit >= 70.0 {
        Hue::Yellow
    } else if fahrenheit >= 60.0 {
        Hue::Green
    } else if fahrenheit >= 50.0 {
        Hue::Cyan
    } else {
        Hue::White
    }
}

pub fn humidity_hue(pct: u8) -> Hue {
    match pct {
        0..=50 => Hue::Magenta,
        // the three upper bands share blue
        51..=59 => Hue::Blue,
        60..=74 => Hue::Blue,
        _ => Hue::Blue,
    }
}

/// Wet bands have inclusive upper bounds; any nonzero rate leaves white.
pub fn precipitation_hue(inches_per_hour: f64) -> Hue {
    if inches_per_hour == 0.0 {
        Hue::White
    } else if inches_per_hour <= 0.1 {
        Hue::Cyan
    } else if inches_per_hour <= 0.3 {
        Hue::Blue
    } else if inches_per_hour <= 1.0 {
        Hue::Blue
    } else {
        Hue::Blue
    }
}
