use ratatui::style::Color;

use crate::color::HexColor;

/// Bridge a parsed color into a renderable terminal color. Channels coming
/// out of `to_rgb` are exact integers in [0, 255].
pub fn to_terminal_color(color: &HexColor) -> Color {
    let rgb = color.to_rgb();
    Color::Rgb(rgb.red as u8, rgb.green as u8, rgb.blue as u8)
}

/// Whether a swatch is dark enough to need a light marker drawn on top.
pub fn is_dark(color: &HexColor) -> bool {
    let rgb = color.to_rgb();
    0.299 * rgb.red + 0.587 * rgb.green + 0.114 * rgb.blue < 128.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_color_matches_channels() {
        let color = HexColor::new("501214").unwrap();
        assert_eq!(to_terminal_color(&color), Color::Rgb(80, 18, 20));
    }

    #[test]
    fn brightness_split() {
        assert!(is_dark(&HexColor::new("000000").unwrap()));
        assert!(is_dark(&HexColor::new("501214").unwrap()));
        assert!(!is_dark(&HexColor::new("ffffff").unwrap()));
        assert!(!is_dark(&HexColor::new("ffff00").unwrap()));
    }
}
