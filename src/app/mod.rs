mod state;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

/// Which screen is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Palette,
    Help,
}

/// Which part of the palette screen receives key input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    Entry,
    Table,
}
