//! Modal dialog component for the delete workflows.
//!
//! This component owns whichever dialog is currently on screen and turns key
//! presses into actions:
//!
//! # Dialog Types
//! - **Warning / Info / Error** - scrollable messages dismissed by any other key
//! - **Confirmation** - yes/no question carrying the [`PendingDeletion`]
//! - **Discipline prompt** - text input pre-filled with the first discipline
//! - **Help / Logs** - scrollable reference panels
//!
//! Confirming, declining, and submitting close the dialog before the
//! resulting action is returned, so the app can open the next dialog.

use crate::constants::{DIALOG_TITLE_DELETE_TAG, DIALOG_TITLE_ERROR};
use crate::discipline::Discipline;
use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType, PendingDeletion},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Color, Frame};

use crate::ui::components::dialogs::{discipline_dialogs, scroll_behavior::DialogScroll, system_dialogs};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub cursor_position: usize,
    scroll: DialogScroll,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            scroll: DialogScroll::default(),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.scroll.reset();
    }

    fn set_input(&mut self, value: &str) {
        self.input_buffer = value.to_string();
        self.cursor_position = value.chars().count();
    }

    fn byte_position(&self) -> usize {
        self.input_buffer
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum()
    }

    /// Tab in the discipline prompt: the discipline after the typed one, or the first
    fn cycle_discipline(&mut self) {
        let next = match self.input_buffer.parse::<Discipline>() {
            Ok(current) => current.next(),
            Err(_) => Discipline::default(),
        };
        self.set_input(next.as_str());
    }

    /// Keys shared by every scrollable dialog. Returns `true` if the key scrolled.
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.top(),
            KeyCode::End => self.scroll.bottom(),
            _ => return false,
        }
        true
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent, pending: PendingDeletion) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.clear_dialog();
                Action::ConfirmDeletion(pending)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideDialog,
            _ => Action::None,
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => {
                let value = std::mem::take(&mut self.input_buffer);
                self.clear_dialog();
                Action::SubmitDiscipline(value)
            }
            KeyCode::Tab => {
                self.cycle_discipline();
                Action::None
            }
            KeyCode::Char(c) => {
                let byte_pos = self.byte_position();
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
                Action::None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let byte_pos = self.byte_position();
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Delete => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    let byte_pos = self.byte_position();
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.input_buffer.chars().count());
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::Warning(_) | DialogType::Info { .. } | DialogType::Error(_) => {
                if self.handle_scroll_key(key) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            DialogType::Confirmation { pending, .. } => self.handle_confirmation_key(key, pending),
            DialogType::DisciplinePrompt => self.handle_prompt_key(key),
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                if matches!(dialog_type, DialogType::DisciplinePrompt) {
                    self.set_input(Discipline::default().as_str());
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::Warning(message) => {
                system_dialogs::render_message_dialog(
                    f,
                    rect,
                    DIALOG_TITLE_DELETE_TAG,
                    Color::Yellow,
                    &message,
                    &mut self.scroll,
                );
            }
            DialogType::Info { title, message } => {
                system_dialogs::render_message_dialog(
                    f,
                    rect,
                    title,
                    Color::Green,
                    &message,
                    &mut self.scroll,
                );
            }
            DialogType::Error(message) => {
                system_dialogs::render_message_dialog(
                    f,
                    rect,
                    DIALOG_TITLE_ERROR,
                    Color::Red,
                    &message,
                    &mut self.scroll,
                );
            }
            DialogType::Confirmation { message, .. } => {
                system_dialogs::render_confirmation_dialog(f, rect, &message);
            }
            DialogType::DisciplinePrompt => {
                discipline_dialogs::render_discipline_prompt(f, rect, &self.input_buffer, self.cursor_position);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, &self.logger, &mut self.scroll),
        }
    }
}
