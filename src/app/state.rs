use std::fs;
use std::path::PathBuf;

use crossterm::event::KeyCode;

use crate::scanner;
use crate::settings::{self, Settings};
use crate::types::LabelEntry;

use super::{AppEvent, AppView, TABS};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub settings: Settings,
    settings_path: PathBuf,
    pub file: PathBuf,
    pub text: String,
    pub labels: Vec<LabelEntry>,
    pub scroll: usize,
    pub selected_label_index: usize,
    pub status: Option<String>,
}

impl App {
    pub fn new(settings: Settings, settings_path: PathBuf, file: PathBuf) -> anyhow::Result<Self> {
        let text = fs::read_to_string(&file)?;
        let mut app = Self {
            running: true,
            view: AppView::Preview,
            view_history: Vec::new(),
            settings,
            settings_path,
            file,
            text,
            labels: Vec::new(),
            scroll: 0,
            selected_label_index: 0,
            status: None,
        };
        app.refresh_labels();
        Ok(app)
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('p') => self.navigate_to(AppView::Preview),
            KeyCode::Char('s') => self.navigate_to(AppView::Source),
            KeyCode::Char('l') => self.navigate_to(AppView::Labels),
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Tab => self.navigate_next_tab(),
            KeyCode::Char('c') => self.toggle_case_insensitive(),
            KeyCode::Char('r') => self.reload_file(),
            KeyCode::Up => {
                if self.view == AppView::Labels {
                    self.move_selection_up();
                } else {
                    self.scroll_up(1);
                }
            }
            KeyCode::Down => {
                if self.view == AppView::Labels {
                    self.move_selection_down();
                } else {
                    self.scroll_down(1);
                }
            }
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::Home => self.scroll = 0,
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view != view {
            self.view_history.push(self.view);
            self.view = view;
            self.clear_status();
        }
    }

    fn navigate_next_tab(&mut self) {
        let index = TABS.iter().position(|v| *v == self.view).unwrap_or(0);
        self.navigate_to(TABS[(index + 1) % TABS.len()]);
    }

    fn go_back(&mut self) {
        if let Some(prev_view) = self.view_history.pop() {
            self.view = prev_view;
        }
        self.clear_status();
    }

    /// Flips the case-insensitive flag, persists it, and recomputes the
    /// label list. Pill colors themselves are recomputed on the next draw.
    fn toggle_case_insensitive(&mut self) {
        self.settings.case_insensitive = !self.settings.case_insensitive;
        if let Err(err) = settings::save(&self.settings, &self.settings_path) {
            self.status = Some(format!("Failed to save settings: {err}"));
            return;
        }
        self.refresh_labels();
        self.status = Some(format!(
            "Case-insensitive colors {}.",
            if self.settings.case_insensitive {
                "on"
            } else {
                "off"
            }
        ));
    }

    fn reload_file(&mut self) {
        match fs::read_to_string(&self.file) {
            Ok(text) => {
                self.text = text;
                self.clear_status();
                self.refresh_labels();
                let lines = self.text.lines().count();
                if self.scroll >= lines {
                    self.scroll = lines.saturating_sub(1);
                }
            }
            Err(err) => {
                self.status = Some(format!("Failed to reload {}: {err}", self.file.display()));
            }
        }
    }

    fn refresh_labels(&mut self) {
        self.labels = scanner::collect_labels(&self.text, self.settings.case_insensitive);
        if self.selected_label_index >= self.labels.len() {
            self.selected_label_index = self.labels.len().saturating_sub(1);
        }
    }

    fn move_selection_up(&mut self) {
        if self.labels.is_empty() {
            return;
        }
        if self.selected_label_index == 0 {
            self.selected_label_index = self.labels.len() - 1;
        } else {
            self.selected_label_index -= 1;
        }
    }

    fn move_selection_down(&mut self) {
        if self.labels.is_empty() {
            return;
        }
        self.selected_label_index = (self.selected_label_index + 1) % self.labels.len();
    }

    fn scroll_up(&mut self, step: usize) {
        self.scroll = self.scroll.saturating_sub(step);
    }

    fn scroll_down(&mut self, step: usize) {
        let max = self.text.lines().count().saturating_sub(1);
        self.scroll = (self.scroll + step).min(max);
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
