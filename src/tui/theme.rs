//! Colors and styles for the terminal dashboard.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 200, 220);
pub const FRAUD: Color = Color::Rgb(220, 50, 60);
pub const LEGITIMATE: Color = Color::Rgb(135, 206, 235);
pub const MUTED: Color = Color::Rgb(130, 130, 140);
pub const TEXT: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn panel_border(active: bool) -> Style {
    if active { accent() } else { muted() }
}

pub fn highlighted() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

/// Diverging blue-white-red scale for correlation coefficients in [-1, 1].
pub fn coolwarm(value: f64) -> Color {
    if !value.is_finite() {
        return Color::Rgb(60, 60, 60);
    }

    let t = value.clamp(-1.0, 1.0);
    let (cold, neutral, warm) = ((59.0, 76.0, 192.0), (221.0, 221.0, 221.0), (180.0, 4.0, 38.0));
    let (from, to, weight) = if t < 0.0 { (neutral, cold, -t) } else { (neutral, warm, t) };

    let mix = |a: f64, b: f64| (a + (b - a) * weight).round() as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Dark text on light cells, light text on saturated ones.
pub fn coolwarm_text(value: f64) -> Color {
    if value.is_finite() && value.abs() > 0.6 { Color::White } else { Color::Black }
}
