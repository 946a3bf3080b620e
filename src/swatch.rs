/// Table row formatting, shared by the interactive table and `tintr print`.
use crate::color::HexColor;
use crate::ramp::RampMode;

/// One swatch cell: the color itself plus the exact text a copy action
/// should yield for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwatchCell {
    pub color: HexColor,
    pub copy_text: String,
}

/// The copy payload for a single color, with or without the leading '#'.
/// The flag travels as an argument; there is no process-wide copy setting.
pub fn copy_payload(color: &HexColor, with_hashtag: bool) -> String {
    if with_hashtag {
        format!("#{color}")
    } else {
        color.as_str().to_owned()
    }
}

/// A row of color cells with their copy payloads precomputed.
pub fn swatch_row(colors: &[HexColor], with_hashtag: bool) -> Vec<SwatchCell> {
    colors
        .iter()
        .map(|color| SwatchCell {
            color: color.clone(),
            copy_text: copy_payload(color, with_hashtag),
        })
        .collect()
}

/// A row of uppercased hex values.
pub fn value_row(colors: &[HexColor]) -> Vec<String> {
    colors
        .iter()
        .map(|color| color.as_str().to_ascii_uppercase())
        .collect()
}

/// Column header labels: weight names 100..900 across the mode's columns.
pub fn headers(mode: RampMode) -> Vec<String> {
    match mode {
        RampMode::Normal => (1..=9).map(|i| (i * 100).to_string()).collect(),
        RampMode::Extra => (2..=18).map(|i| (i * 50).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_respects_hashtag_flag() {
        let color = HexColor::new("501214").unwrap();
        assert_eq!(copy_payload(&color, false), "501214");
        assert_eq!(copy_payload(&color, true), "#501214");
    }

    #[test]
    fn swatch_row_precomputes_payloads() {
        let colors = vec![
            HexColor::new("fff").unwrap(),
            HexColor::new("000000").unwrap(),
        ];
        let cells = swatch_row(&colors, true);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].copy_text, "#ffffff");
        assert_eq!(cells[1].copy_text, "#000000");
    }

    #[test]
    fn value_row_uppercases() {
        let colors = vec![HexColor::new("aabbcc").unwrap()];
        assert_eq!(value_row(&colors), vec!["AABBCC".to_owned()]);
    }

    #[test]
    fn headers_cover_100_to_900() {
        let normal = headers(RampMode::Normal);
        assert_eq!(normal.len(), 9);
        assert_eq!(normal.first().map(String::as_str), Some("100"));
        assert_eq!(normal.last().map(String::as_str), Some("900"));

        let extra = headers(RampMode::Extra);
        assert_eq!(extra.len(), 17);
        assert_eq!(extra[1], "150");
        assert_eq!(extra.last().map(String::as_str), Some("900"));
    }
}
