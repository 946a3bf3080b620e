use ratatui::style::Color;

/// Unified color theme for the application chrome. Swatch cells use the
/// user's own colors; everything else goes through here.
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Copy confirmation
    pub fn success() -> Color {
        Color::Green
    }

    /// No-match warning
    pub fn warn() -> Color {
        Color::Yellow
    }

    /// Selection/highlight
    pub fn highlight() -> Color {
        Color::Cyan
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for mode and section labels
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
