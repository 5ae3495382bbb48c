use chrono::Utc;
use larder_core::{parse_expiry_code, FallbackFoodStore, FoodRow, PantryService, PantryStats};
use ratatui::widgets::TableState;

use crate::FORMATS_HINT;

pub enum InputMode {
    Normal,
    Adding,
}

pub enum Tone {
    Success,
    Error,
}

pub struct App {
    pub service: PantryService<FallbackFoodStore>,
    pub rows: Vec<FoodRow>,
    pub stats: PantryStats,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub message: Option<(String, Tone)>,
}

impl App {
    pub fn new(service: PantryService<FallbackFoodStore>) -> App {
        let mut app = App {
            service,
            rows: Vec::new(),
            stats: PantryStats::default(),
            state: TableState::default(),
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            message: None,
        };
        app.refresh();
        if !app.rows.is_empty() {
            app.state.select(Some(0));
        }
        app
    }

    /// Rebuild rows and stats from the current wall clock. Status is always
    /// derived fresh; nothing is cached between draws.
    pub fn refresh(&mut self) {
        self.rows = self.service.rows(Utc::now());
        self.stats = PantryStats::from_rows(&self.rows);
    }

    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.rows.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.rows.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn delete_selected(&mut self) {
        if let Some(i) = self.state.selected() {
            if let Some(row) = self.rows.get(i) {
                let id = row.id.to_string();
                match self.service.remove(&id) {
                    Ok(removed) => {
                        self.show(format!("Removed \"{}\".", removed.name), Tone::Success)
                    }
                    Err(err) => self.show(err.to_string(), Tone::Error),
                }
            }
            self.refresh();

            // Keep the selection in range after the removal.
            if self.rows.is_empty() {
                self.state.select(None);
            } else if i >= self.rows.len() {
                self.state.select(Some(self.rows.len() - 1));
            } else {
                self.state.select(Some(i));
            }
        }
    }

    pub fn clear_all(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        match self.service.clear() {
            Ok(_) => self.show(
                "Cleared all foods from the tracker.".to_string(),
                Tone::Success,
            ),
            Err(err) => self.show(err.to_string(), Tone::Error),
        }
        self.refresh();
        self.state.select(None);
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_input(&mut self) {
        let input = self.input.trim().to_string();
        if input.is_empty() {
            self.exit_input_mode();
            return;
        }

        // The final whitespace-separated token is the expiry code.
        let Some((name, code)) = input.rsplit_once(char::is_whitespace) else {
            self.show(
                "Enter a food name followed by its expiry code.".to_string(),
                Tone::Error,
            );
            return;
        };

        match self.service.add(name, code) {
            Ok(entry) => {
                self.show(
                    format!("Added \"{}\" to your expiry graph.", entry.name),
                    Tone::Success,
                );
                self.input.clear();
                self.cursor_position = 0;
                self.exit_input_mode();
                self.refresh();
                if self.state.selected().is_none() && !self.rows.is_empty() {
                    self.state.select(Some(0));
                }
            }
            Err(err) => {
                // Stay in input mode so the code can be corrected in place.
                if parse_expiry_code(code).is_err() {
                    self.show(
                        format!("Could not read \"{}\". Use {}.", code, FORMATS_HINT),
                        Tone::Error,
                    );
                } else {
                    self.show(err.to_string(), Tone::Error);
                }
            }
        }
    }

    fn show(&mut self, text: String, tone: Tone) {
        self.message = Some((text, tone));
    }
}
