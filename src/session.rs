/// Session persistence: the last generated color set, one comma-joined
/// line in the user's data directory.
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::HexColor;

/// Returns the default session file path inside the user's data directory.
/// Falls back to `./tintr-session` when no data dir is found.
pub fn default_session_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let tintr_dir = data_dir.join("tintr");
        fs::create_dir_all(&tintr_dir).ok();
        tintr_dir.join("session")
    } else {
        PathBuf::from("tintr-session")
    }
}

/// Load the stored color line, commas normalized to spaces so it can be
/// fed straight back through the parser.
pub fn load(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let line = contents.lines().next()?.trim();
    if line.is_empty() {
        return None;
    }
    Some(line.replace(',', " "))
}

/// Store the parsed colors comma-joined. Best effort.
pub fn save(path: &Path, colors: &[HexColor]) {
    let line = colors
        .iter()
        .map(HexColor::as_str)
        .collect::<Vec<_>>()
        .join(",");
    fs::write(path, line).ok();
}

/// Forget the stored session. Best effort.
pub fn clear(path: &Path) {
    fs::remove_file(path).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tintr-test-{name}-{}", std::process::id()))
    }

    #[test]
    fn session_round_trip() {
        let path = temp_session("round-trip");
        let colors = vec![
            HexColor::new("501214").unwrap(),
            HexColor::new("ffffff").unwrap(),
        ];
        save(&path, &colors);
        assert_eq!(load(&path).as_deref(), Some("501214 ffffff"));
        clear(&path);
        assert_eq!(load(&path), None);
    }

    #[test]
    fn load_ignores_missing_file() {
        let path = temp_session("missing");
        assert_eq!(load(&path), None);
    }

    #[test]
    fn load_ignores_blank_file() {
        let path = temp_session("blank");
        fs::write(&path, "\n").unwrap();
        assert_eq!(load(&path), None);
        clear(&path);
    }
}
