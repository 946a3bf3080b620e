use std::path::PathBuf;

use crossterm::event::KeyCode;
use rand::RngExt;

use crate::color::{self, HexColor};
use crate::ramp::{self, RampMode};
use crate::session;
use crate::swatch::{self, SwatchCell};

use super::{AppEvent, AppView, FocusMode};

/// How many ticks (at 250 ms) the no-match warning stays visible.
const WARNING_TICKS: u8 = 12;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    pub focus: FocusMode,
    pub input: String,
    pub palette: Option<Vec<HexColor>>,
    pub mode: RampMode,
    pub copy_with_hashtag: bool,
    pub selected_row: usize,
    pub selected_col: usize,
    pub status: Option<String>,
    pub warning: Option<String>,
    warning_ticks: u8,
    session_path: PathBuf,
}

impl App {
    pub fn new(session_path: PathBuf, seed: Option<String>) -> Self {
        let mut app = Self {
            running: true,
            view: AppView::Palette,
            focus: FocusMode::Entry,
            input: seed.unwrap_or_default(),
            palette: None,
            mode: RampMode::Normal,
            copy_with_hashtag: false,
            selected_row: 0,
            selected_col: 0,
            status: None,
            warning: None,
            warning_ticks: 0,
            session_path,
        };

        // Seeded input (args or a restored session) generates immediately,
        // but a failed seed stays silent instead of warning.
        if !app.input.is_empty() {
            app.generate(true);
        }

        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.tick(),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn tick(&mut self) {
        if self.warning_ticks > 0 {
            self.warning_ticks -= 1;
            if self.warning_ticks == 0 {
                self.warning = None;
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.view == AppView::Help {
            self.handle_help_key(key);
            return;
        }
        match self.focus {
            FocusMode::Entry => self.handle_entry_key(key),
            FocusMode::Table => self.handle_table_key(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            self.view = AppView::Palette;
        }
    }

    fn handle_entry_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.generate(false),
            KeyCode::Esc => {
                if self.palette.is_some() {
                    self.focus = FocusMode::Table;
                } else {
                    self.running = false;
                }
            }
            KeyCode::Tab => {
                if self.palette.is_some() {
                    self.focus = FocusMode::Table;
                }
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.input.pop();
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                self.input.push(ch);
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('i') | KeyCode::Char('/') => {
                self.focus = FocusMode::Entry;
                self.clear_status();
            }
            KeyCode::Esc => {
                self.focus = FocusMode::Entry;
                self.clear_status();
            }
            KeyCode::Tab => self.focus = FocusMode::Entry,
            KeyCode::Char('m') => self.toggle_mode(),
            KeyCode::Char('#') => self.toggle_hashtag(),
            KeyCode::Char('x') => self.insert_random_color(),
            KeyCode::Char('r') => self.generate(false),
            KeyCode::Char('?') => self.view = AppView::Help,
            KeyCode::Left => self.move_selection_left(),
            KeyCode::Right => self.move_selection_right(),
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Enter | KeyCode::Char('y') => self.copy_selected(),
            _ => {}
        }
    }

    /// Parse the entry line and rebuild the table: success saves the session
    /// and moves focus into the table, failure clears everything and raises
    /// the transient warning.
    fn generate(&mut self, first_time: bool) {
        self.clear_status();
        match color::parse_colors(&self.input) {
            Some(colors) => {
                session::save(&self.session_path, &colors);
                self.selected_row = 0;
                self.selected_col = self.mode.steps() as usize;
                self.palette = Some(colors);
                self.focus = FocusMode::Table;
                self.warning = None;
                self.warning_ticks = 0;
            }
            None => {
                self.palette = None;
                self.focus = FocusMode::Entry;
                if !first_time {
                    session::clear(&self.session_path);
                    self.warning = Some("No valid color values found.".to_owned());
                    self.warning_ticks = WARNING_TICKS;
                }
            }
        }
    }

    /// The number of table columns in the current mode: tints + base + shades.
    pub fn columns(&self) -> usize {
        self.mode.steps() as usize * 2 + 1
    }

    /// The cell under the cursor, payload included. Recomputed on demand;
    /// nothing about the table is cached.
    pub fn selected_cell(&self) -> Option<SwatchCell> {
        let palette = self.palette.as_ref()?;
        let base = palette.get(self.selected_row)?;
        let sequence = ramp::display_sequence(base, self.mode);
        let cells = swatch::swatch_row(&sequence, self.copy_with_hashtag);
        cells.into_iter().nth(self.selected_col)
    }

    fn copy_selected(&mut self) {
        let Some(cell) = self.selected_cell() else {
            return;
        };
        self.status = Some(format!("Copied {}", cell.copy_text));
    }

    fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            RampMode::Normal => RampMode::Extra,
            RampMode::Extra => RampMode::Normal,
        };
        if self.selected_col >= self.columns() {
            self.selected_col = self.columns() - 1;
        }
        self.clear_status();
    }

    fn toggle_hashtag(&mut self) {
        self.copy_with_hashtag = !self.copy_with_hashtag;
        self.clear_status();
    }

    /// Append a random color to the entry line and hand focus back so the
    /// user can keep typing or submit.
    fn insert_random_color(&mut self) {
        let mut rng = rand::rng();
        let color = format!("{:06x}", rng.random_range(0..0x100_0000u32));
        if !self.input.is_empty() && !self.input.ends_with(' ') {
            self.input.push(' ');
        }
        self.input.push_str(&color);
        self.focus = FocusMode::Entry;
    }

    fn move_selection_left(&mut self) {
        if self.palette.is_none() {
            return;
        }
        if self.selected_col == 0 {
            self.selected_col = self.columns() - 1;
        } else {
            self.selected_col -= 1;
        }
    }

    fn move_selection_right(&mut self) {
        if self.palette.is_none() {
            return;
        }
        self.selected_col = (self.selected_col + 1) % self.columns();
    }

    fn move_selection_up(&mut self) {
        let Some(palette) = &self.palette else {
            return;
        };
        if self.selected_row == 0 {
            self.selected_row = palette.len() - 1;
        } else {
            self.selected_row -= 1;
        }
    }

    fn move_selection_down(&mut self) {
        let Some(palette) = &self.palette else {
            return;
        };
        self.selected_row = (self.selected_row + 1) % palette.len();
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
