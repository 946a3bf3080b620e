/// Tint and shade ramp generation.
use crate::color::{HexColor, Rgb};

/// Ramp density. Normal moves 20% toward the extreme per step over 4 steps,
/// extra 10% over 8; both stop at 80%.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampMode {
    Normal,
    Extra,
}

impl RampMode {
    pub fn percent(self) -> f64 {
        match self {
            RampMode::Normal => 0.2,
            RampMode::Extra => 0.1,
        }
    }

    pub fn steps(self) -> u32 {
        match self {
            RampMode::Normal => 4,
            RampMode::Extra => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RampMode::Normal => "normal (20% steps)",
            RampMode::Extra => "extra (10% steps)",
        }
    }
}

/// Which direction a ramp moves: toward black or toward white.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampKind {
    Shade,
    Tint,
}

/// Blend toward black: every channel scaled by `(1 - percent * step)`.
/// No intermediate floor; negative results are caught at hex encoding.
pub fn shade(rgb: &Rgb, step: u32, mode: RampMode) -> Rgb {
    let factor = 1.0 - mode.percent() * f64::from(step);
    Rgb {
        red: rgb.red * factor,
        green: rgb.green * factor,
        blue: rgb.blue * factor,
    }
}

/// Blend toward white: every channel moved `percent * step` of its
/// remaining distance to 255.
pub fn tint(rgb: &Rgb, step: u32, mode: RampMode) -> Rgb {
    let amount = mode.percent() * f64::from(step);
    Rgb {
        red: rgb.red + (255.0 - rgb.red) * amount,
        green: rgb.green + (255.0 - rgb.green) * amount,
        blue: rgb.blue + (255.0 - rgb.blue) * amount,
    }
}

/// The ramp for one base color, ordered step 1 to the mode's maximum.
/// Step 0 (the base itself) and the 90%/100% extremes are never emitted;
/// `display_sequence` re-inserts the base for presentation.
pub fn generate_ramp(color: &HexColor, mode: RampMode, kind: RampKind) -> Vec<HexColor> {
    let base = color.to_rgb();
    (1..=mode.steps())
        .map(|step| {
            let stepped = match kind {
                RampKind::Shade => shade(&base, step, mode),
                RampKind::Tint => tint(&base, step, mode),
            };
            HexColor::from_rgb(&stepped)
        })
        .collect()
}

/// The full table row for one color: tints lightest-first, the original in
/// the middle, shades darkest-last.
pub fn display_sequence(color: &HexColor, mode: RampMode) -> Vec<HexColor> {
    let mut row: Vec<HexColor> = generate_ramp(color, mode, RampKind::Tint)
        .into_iter()
        .rev()
        .collect();
    row.push(color.clone());
    row.extend(generate_ramp(color, mode, RampKind::Shade));
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Rgb {
        Rgb {
            red: 80.0,
            green: 18.0,
            blue: 20.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn shade_step_matches_reference() {
        let shaded = shade(&base(), 1, RampMode::Normal);
        assert!(close(shaded.red, 64.0), "red: {}", shaded.red);
        assert!(close(shaded.green, 14.4), "green: {}", shaded.green);
        assert!(close(shaded.blue, 16.0), "blue: {}", shaded.blue);
        assert_eq!(HexColor::from_rgb(&shaded).as_str(), "400e10");
    }

    #[test]
    fn tint_step_matches_reference() {
        let tinted = tint(&base(), 1, RampMode::Normal);
        assert!(close(tinted.red, 115.0), "red: {}", tinted.red);
        assert!(close(tinted.green, 65.4), "green: {}", tinted.green);
        assert!(close(tinted.blue, 67.0), "blue: {}", tinted.blue);
        assert_eq!(HexColor::from_rgb(&tinted).as_str(), "734143");
    }

    #[test]
    fn step_zero_is_identity() {
        for mode in [RampMode::Normal, RampMode::Extra] {
            let shaded = shade(&base(), 0, mode);
            assert_eq!(shaded, base());
            let tinted = tint(&base(), 0, mode);
            assert_eq!(tinted, base());
        }
    }

    #[test]
    fn ramp_lengths_match_mode() {
        let color = HexColor::new("501214").unwrap();
        assert_eq!(generate_ramp(&color, RampMode::Normal, RampKind::Shade).len(), 4);
        assert_eq!(generate_ramp(&color, RampMode::Normal, RampKind::Tint).len(), 4);
        assert_eq!(generate_ramp(&color, RampMode::Extra, RampKind::Shade).len(), 8);
        assert_eq!(generate_ramp(&color, RampMode::Extra, RampKind::Tint).len(), 8);
    }

    #[test]
    fn shade_channels_decrease_monotonically() {
        for mode in [RampMode::Normal, RampMode::Extra] {
            let mut prev = base();
            for step in 1..=mode.steps() {
                let next = shade(&base(), step, mode);
                assert!(next.red < prev.red, "red stalled at step {step}");
                assert!(next.green < prev.green, "green stalled at step {step}");
                assert!(next.blue < prev.blue, "blue stalled at step {step}");
                prev = next;
            }
        }
    }

    #[test]
    fn tint_channels_increase_monotonically() {
        for mode in [RampMode::Normal, RampMode::Extra] {
            let mut prev = base();
            for step in 1..=mode.steps() {
                let next = tint(&base(), step, mode);
                assert!(next.red > prev.red, "red stalled at step {step}");
                assert!(next.green > prev.green, "green stalled at step {step}");
                assert!(next.blue > prev.blue, "blue stalled at step {step}");
                prev = next;
            }
        }
    }

    #[test]
    fn extreme_channels_stay_put() {
        let rgb = Rgb {
            red: 0.0,
            green: 10.0,
            blue: 255.0,
        };
        assert_eq!(shade(&rgb, 3, RampMode::Extra).red, 0.0);
        assert_eq!(tint(&rgb, 3, RampMode::Extra).blue, 255.0);
    }

    #[test]
    fn display_sequence_runs_light_to_dark() {
        let color = HexColor::new("501214").unwrap();
        let row = display_sequence(&color, RampMode::Normal);
        assert_eq!(row.len(), 9);
        assert_eq!(row[4], color);
        let lightest = HexColor::from_rgb(&tint(&color.to_rgb(), 4, RampMode::Normal));
        let darkest = HexColor::from_rgb(&shade(&color.to_rgb(), 4, RampMode::Normal));
        assert_eq!(row[0], lightest);
        assert_eq!(row[8], darkest);
    }

    #[test]
    fn display_sequence_extra_has_seventeen_cells() {
        let color = HexColor::new("abc").unwrap();
        let row = display_sequence(&color, RampMode::Extra);
        assert_eq!(row.len(), 17);
        assert_eq!(row[8], color);
    }

    #[test]
    fn ramps_never_emit_base_or_extremes() {
        let color = HexColor::new("808080").unwrap();
        let shades = generate_ramp(&color, RampMode::Normal, RampKind::Shade);
        let tints = generate_ramp(&color, RampMode::Normal, RampKind::Tint);
        assert!(!shades.contains(&color));
        assert!(!tints.contains(&color));
        assert_ne!(shades.last().map(HexColor::as_str), Some("000000"));
        assert_ne!(tints.last().map(HexColor::as_str), Some("ffffff"));
    }
}
