/// Color parsing and hex/RGB conversion.
use std::fmt;

use regex::Regex;

/// A color as it came out of the parser: exactly six hex digits, no leading
/// symbol. Case is preserved from the input; re-encoded values are lowercase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexColor(String);

/// An RGB triple mid-computation. Channels are free to go fractional or out
/// of [0, 255] while a ramp is being built; they are only rounded and
/// clamped when re-encoded to hex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl HexColor {
    /// Validate a bare 3- or 6-digit hex value. Shorthand is expanded by
    /// doubling each digit in place ("abc" -> "aabbcc").
    pub fn new(value: &str) -> Option<Self> {
        if !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match value.len() {
            3 => Some(Self(expand_shorthand(value))),
            6 => Some(Self(value.to_owned())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode into numeric channels: "501214" -> (80, 18, 20).
    pub fn to_rgb(&self) -> Rgb {
        let bytes = self.0.as_bytes();
        Rgb {
            red: channel(bytes[0], bytes[1]),
            green: channel(bytes[2], bytes[3]),
            blue: channel(bytes[4], bytes[5]),
        }
    }

    /// Re-encode channels as lowercase hex. Each channel is rounded, then
    /// clamped to [0, 255]; this is the only point where clamping happens.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        Self(format!(
            "{:02x}{:02x}{:02x}",
            quantize(rgb.red),
            quantize(rgb.green),
            quantize(rgb.blue)
        ))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scan free-form text for 3- or 6-digit hex runs, with whitespace or
/// garbage in between. Matches come back in input order, duplicates kept.
/// Returns `None` when nothing matches; callers treat "no matches" and
/// "empty input" as the same failure.
pub fn parse_colors(text: &str) -> Option<Vec<HexColor>> {
    let pattern = Regex::new(r"\b[0-9A-Fa-f]{3}\b|[0-9A-Fa-f]{6}\b").ok()?;
    let colors: Vec<HexColor> = pattern
        .find_iter(text)
        .filter_map(|m| HexColor::new(m.as_str()))
        .collect();
    if colors.is_empty() { None } else { Some(colors) }
}

fn expand_shorthand(value: &str) -> String {
    let mut expanded = String::with_capacity(6);
    for ch in value.chars() {
        expanded.push(ch);
        expanded.push(ch);
    }
    expanded
}

// Inputs are hex digits by construction; the fallback arm is unreachable.
fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

fn channel(hi: u8, lo: u8) -> f64 {
    f64::from(nibble(hi) << 4 | nibble(lo))
}

fn quantize(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
